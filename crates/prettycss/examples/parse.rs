#![allow(clippy::print_stdout, clippy::print_stderr)]

use prettycss::error::ColorFormatError;
use prettycss::Rgba;

fn describe(s: &str) -> Result<String, ColorFormatError> {
    let color: Rgba = s.parse()?;
    let [r, g, b, a] = color.to_24bit();
    Ok(format!("{:<36} {}  rgb({} {} {} / {})", s, color, r, g, b, a))
}

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        args = [
            "#f80",
            "rebeccapurple",
            "hsl(30 100% 50%)",
            "hwb(120, 20%, 30%)",
            "lab(50% 40% -30%)",
            "oklch(50% 50% 180)",
            "rgb(1, 2 3)",
        ]
        .map(String::from)
        .to_vec();
    }

    for arg in &args {
        match describe(arg) {
            Ok(line) => println!("{}", line),
            Err(error) => eprintln!("{:<36} {} ({:?})", arg, error, error.kind()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::describe;
    use prettycss::error::ColorFormatError;

    #[test]
    fn test_describe() -> Result<(), ColorFormatError> {
        assert!(describe("lab(50% 40% -30%)")?.contains("#aa54b8ff"));
        assert!(describe("oklch(50% 50% 180)")?.contains("rgb(0 131 104 / 255)"));
        assert_eq!(describe("rgb(1, 2 3)"), Err(ColorFormatError::MissingDelimiter));
        Ok(())
    }
}
