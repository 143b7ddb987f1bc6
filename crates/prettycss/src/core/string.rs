use super::conversion::{convert, from_rgb, Channels};
use super::cursor::{Cursor, Delimiter};
use super::unit::CssValue;
use super::ColorFunction;
use crate::error::ColorFormatError;
use crate::names::resolve_bytes;

/// The maximum length of a color string in bytes.
pub(crate) const MAX_LENGTH: usize = 128;

/// The length of the shortest well-formed color function, e.g., `rgb(0,0,0)`.
const MIN_FUNCTION_LENGTH: usize = 10;

/// Convert a hexadecimal digit to its value.
#[inline]
fn hex_digit(byte: u8) -> Result<u8, ColorFormatError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(ColorFormatError::MalformedHex),
    }
}

/// Parse the digits of a color in hashed hexadecimal format.
///
/// This function accepts 3, 4, 6, or 8 digits. Single-digit coordinates are
/// duplicated. If there is no alpha coordinate, alpha is `0xff`.
fn parse_hashed(digits: &[u8]) -> Result<[u8; 4], ColorFormatError> {
    let mut rgba = [0, 0, 0, 0xff];

    match digits.len() {
        3 | 4 => {
            for (slot, &digit) in rgba.iter_mut().zip(digits) {
                let n = hex_digit(digit)?;
                *slot = (n << 4) | n;
            }
        }
        6 | 8 => {
            for (slot, pair) in rgba.iter_mut().zip(digits.chunks_exact(2)) {
                *slot = (hex_digit(pair[0])? << 4) | hex_digit(pair[1])?;
            }
        }
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    }

    Ok(rgba)
}

// --------------------------------------------------------------------------------------------------------------------

/// The states of the color function parser.
///
/// The parser advances linearly through these states, without backtracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    FunctionName,
    AlphaSuffix,
    OpenParenthesis,
    Argument(usize),
    Alpha,
    CloseParenthesis,
    End,
}

/// Scan an argument, i.e., a number optionally followed by a percent sign.
/// Leading whitespace is skipped.
fn scan_argument(cursor: &mut Cursor) -> Result<CssValue, ColorFormatError> {
    cursor.skip_whitespace();
    let magnitude = cursor.scan_number()?;
    if cursor.consume(b"%") {
        Ok(CssValue::percent(magnitude))
    } else {
        Ok(CssValue::number(magnitude))
    }
}

/// Scan a color function's name.
fn scan_function_name(cursor: &mut Cursor) -> Option<ColorFunction> {
    ColorFunction::ALL
        .into_iter()
        .find(|function| cursor.consume_ignore_case(function.name().as_bytes()))
}

/// Parse a color function into its kind and four arguments.
///
/// This function recognizes `name(c1 c2 c3)`, `name(c1 c2 c3 / alpha)`,
/// `name(c1, c2, c3)`, and `name(c1, c2, c3 / alpha)` as well as the legacy
/// `namea(c1, c2, c3, alpha)` and `namea(c1 c2 c3 alpha)`. The first
/// delimiter determines whether commas or spaces separate arguments. If the
/// string does not start with one of the seven color functions, this function
/// returns [`ColorFormatError::UnknownFunction`]. All other errors are fatal.
pub(crate) fn parse_function(
    bytes: &[u8],
) -> Result<(ColorFunction, [CssValue; 4]), ColorFormatError> {
    if bytes.len() < MIN_FUNCTION_LENGTH {
        return Err(ColorFormatError::UnknownFunction);
    }

    let mut cursor = Cursor::new(bytes);
    let mut state = State::FunctionName;
    let mut function = ColorFunction::Rgb;
    let mut has_alpha_suffix = false;
    let mut delimiter: Option<Delimiter> = None;
    let mut arguments = [CssValue::number(1.0); 4];

    loop {
        state = match state {
            State::FunctionName => {
                function =
                    scan_function_name(&mut cursor).ok_or(ColorFormatError::UnknownFunction)?;
                State::AlphaSuffix
            }
            State::AlphaSuffix => {
                has_alpha_suffix = cursor.consume_ignore_case(b"a");
                State::OpenParenthesis
            }
            State::OpenParenthesis => {
                cursor.skip_whitespace();
                if !cursor.consume(b"(") {
                    return Err(ColorFormatError::NoOpeningParenthesis);
                }
                State::Argument(0)
            }
            State::Argument(index) => {
                if 0 < index {
                    cursor.consume_delimiter(&mut delimiter)?;
                }

                let value = scan_argument(&mut cursor)?;
                if let Some(slot) = arguments.get_mut(index) {
                    *slot = value;
                }

                if index < 2 {
                    State::Argument(index + 1)
                } else {
                    State::Alpha
                }
            }
            State::Alpha => {
                if has_alpha_suffix {
                    cursor.consume_delimiter(&mut delimiter)?;
                    arguments[3] = scan_argument(&mut cursor)?;
                } else {
                    cursor.skip_whitespace();
                    if cursor.consume(b"/") {
                        arguments[3] = scan_argument(&mut cursor)?;
                    }
                }
                State::CloseParenthesis
            }
            State::CloseParenthesis => {
                cursor.skip_whitespace();
                if !cursor.consume(b")") {
                    return Err(ColorFormatError::NoClosingParenthesis);
                }
                State::End
            }
            State::End => {
                cursor.skip_whitespace();
                if cursor.is_done() {
                    break;
                }
                return Err(ColorFormatError::TrailingCharacters);
            }
        };
    }

    Ok((function, arguments))
}

/// Interpret the arguments of the color function and convert to sRGB.
fn interpret(function: ColorFunction, arguments: &[CssValue; 4]) -> Channels {
    use ColorFunction::*;

    let [c1, c2, c3, alpha] = *arguments;
    let alpha = alpha.to_unit();

    let coordinates = match function {
        Rgb => return from_rgb(c1.to_byte(), c2.to_byte(), c3.to_byte(), alpha),
        Hsl | Hwb => [c1.to_degrees(), c2.to_percent(), c3.to_percent()],
        Lab => [c1.to_percent(), c2.to_lab_axis(), c3.to_lab_axis()],
        Lch => [c1.to_percent(), c2.to_lch_chroma(), c3.to_degrees()],
        Oklab => [c1.to_unit(), c2.to_ok_axis(), c3.to_ok_axis()],
        Oklch => [c1.to_unit(), c2.to_ok_axis(), c3.to_degrees()],
    };

    convert(function, &coordinates, alpha)
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the bytes as a CSS color.
///
/// This function recognizes hashed hexadecimal colors, the `rgb()`, `hsl()`,
/// `hwb()`, `lab()`, `lch()`, `oklab()`, and `oklch()` color functions (with
/// or without `a` suffix), and the CSS color names. The input must have 1 to
/// 128 bytes. Leading whitespace is not allowed and trailing whitespace is
/// only allowed after a color function.
pub(crate) fn parse(bytes: &[u8]) -> Result<Channels, ColorFormatError> {
    if bytes.is_empty() || MAX_LENGTH < bytes.len() {
        return Err(ColorFormatError::InvalidLength);
    }

    if let Some(digits) = bytes.strip_prefix(b"#") {
        return parse_hashed(digits).map(Channels::Bytes);
    }

    match parse_function(bytes) {
        Ok((function, arguments)) => Ok(interpret(function, &arguments)),
        Err(ColorFormatError::UnknownFunction) => resolve_bytes(bytes)
            .map(Channels::Bytes)
            .ok_or(ColorFormatError::UnknownColorName),
        Err(error) => Err(error),
    }
}

/// Parse the bytes up to the first zero byte as a CSS color.
///
/// The zero byte must appear within the first 129 bytes, i.e., the color
/// string proper must not be longer than 128 bytes. Otherwise, this function
/// fails with [`ColorFormatError::InvalidLength`] instead of truncating.
pub(crate) fn parse_nul_terminated(bytes: &[u8]) -> Result<Channels, ColorFormatError> {
    let window = bytes.get(..=MAX_LENGTH).unwrap_or(bytes);
    let length = window
        .iter()
        .position(|&byte| byte == 0)
        .ok_or(ColorFormatError::InvalidLength)?;

    parse(window.get(..length).unwrap_or_default())
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the 8-bit RGBA coordinates in hashed hexadecimal format with eight
/// digits.
pub(crate) fn format_hashed(
    rgba: &[u8; 4],
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    let [r, g, b, a] = *rgba;
    write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
}

// ====================================================================================================================
