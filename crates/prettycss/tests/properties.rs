use prettycss::error::ColorFormatError;
use prettycss::{
    hsl, hwb, lab, lch, names, oklab, oklch, parse, rgb, Float, Receiver, Rgba, Slots,
};

fn parse_u8(s: &str) -> Result<[u8; 4], ColorFormatError> {
    let mut receiver = Receiver::value_u8();
    parse(s, &mut receiver)?;
    Ok(receiver.as_u8().unwrap_or_default())
}

fn assert_within_one(actual: [u8; 4], expected: [u8; 4]) {
    for (a, e) in actual.into_iter().zip(expected) {
        assert!(
            a.abs_diff(e) <= 1,
            "{:?} differs from {:?} by more than one",
            actual,
            expected
        );
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[test]
fn test_clamping_is_idempotent() {
    for value in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let color = Rgba::new(value, value, value, value);
        assert_eq!(color.as_ref(), &[value; 4]);
    }

    for coordinates in [[-1.0, 0.5, 2.0, 1.0], [3.0, -0.0, 0.1, 7.0]] {
        let [r, g, b, a] = coordinates;
        let once = Rgba::new(r, g, b, a);
        let [r, g, b, a] = *once.as_ref();
        let twice = Rgba::new(r, g, b, a);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_hue_normalization() -> Result<(), ColorFormatError> {
    let expected = [255, 0, 128, 255];
    assert_eq!(parse_u8("hsl(-30, 100%, 50%)")?, expected);
    assert_eq!(parse_u8("hsl(330, 100%, 50%)")?, expected);
    assert_eq!(parse_u8("hsl(690, 100%, 50%)")?, expected);
    assert_eq!(parse_u8("hsl(690deg 100% 50%)").ok(), None);
    Ok(())
}

#[test]
fn test_delimiter_equivalence() -> Result<(), ColorFormatError> {
    let expected = [255, 0, 0, 255];
    assert_eq!(parse_u8("rgb(255, 0, 0)")?, expected);
    assert_eq!(parse_u8("rgb(255 0 0)")?, expected);
    assert_eq!(parse_u8("rgb(255 0 0 / 1)")?, expected);
    assert_eq!(parse_u8("rgba(255,0,0,1)")?, expected);
    assert_eq!(parse_u8("RGBA(255 0 0 1)")?, expected);
    assert_eq!(parse_u8("rgba( 255 ,  0 , 0 , 1 )")?, expected);

    assert_eq!(
        parse_u8("rgb(255, 0 0)"),
        Err(ColorFormatError::MissingDelimiter)
    );
    assert_eq!(
        parse_u8("rgb(255 0, 0)"),
        Err(ColorFormatError::MissingDelimiter)
    );
    assert_eq!(
        parse_u8("rgba(255, 0, 0 / 1)"),
        Err(ColorFormatError::MissingDelimiter)
    );
    Ok(())
}

#[test]
fn test_hex_round_trip() -> Result<(), ColorFormatError> {
    for r in (0..=255_u8).step_by(51) {
        for g in [0_u8, 1, 127, 128, 254, 255] {
            for b in [0_u8, 15, 16, 240] {
                for a in [0_u8, 128, 255] {
                    let hex = format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a);
                    assert_eq!(parse_u8(&hex)?, [r, g, b, a]);
                    assert_eq!(parse_u8(&hex.to_uppercase())?, [r, g, b, a]);

                    let color = Rgba::from_24bit(r, g, b, a);
                    assert_eq!(color.to_string(), hex);
                    assert_eq!(hex.parse::<Rgba>()?, color);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_overflow_boundary() -> Result<(), ColorFormatError> {
    assert_eq!(parse_u8("rgb(16777216, 0, 0)")?, [255, 0, 0, 255]);
    assert_eq!(
        parse_u8("rgb(16777217, 0, 0)"),
        Err(ColorFormatError::OversizedNumber)
    );
    assert_eq!(parse_u8("rgb(119.999999999, 0, 0)")?, [120, 0, 0, 255]);
    assert_eq!(
        parse_u8("rgb(119.9999999999, 0, 0)"),
        Err(ColorFormatError::TooManyDecimals)
    );

    assert_eq!(
        parse_u8("rgb(16777217, 0, 0)").map_err(|error| error.kind()),
        Err(prettycss::ErrorKind::RangeOverflow)
    );
    Ok(())
}

#[test]
fn test_named_colors() -> Result<(), ColorFormatError> {
    assert_eq!(parse_u8("red")?, [255, 0, 0, 255]);
    assert_eq!(parse_u8("REBECCAPURPLE")?, [102, 51, 153, 255]);
    assert_eq!(parse_u8("transparent")?, [0, 0, 0, 0]);

    for &(name, [r, g, b, a]) in names::entries() {
        let hex = format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a);
        let expected = parse_u8(&hex)?;
        assert_eq!(parse_u8(name)?, expected, "{}", name);
        assert_eq!(parse_u8(&name.to_uppercase())?, expected, "{}", name);
    }

    assert_eq!(
        parse_u8("notacolor"),
        Err(ColorFormatError::UnknownColorName)
    );
    Ok(())
}

#[test]
fn test_cross_space_agreement() -> Result<(), ColorFormatError> {
    let red = [255, 0, 0, 255];
    for s in [
        "hsl(0,100%,50%)",
        "lab(53.23,80.11,67.22)",
        "lch(53.23,104.55,40)",
        "oklab(0.627955,0.224863,0.125846)",
        "oklch(0.627955,0.25766,29.233)",
    ] {
        assert_within_one(parse_u8(s)?, red);
    }

    let mut receiver = Receiver::value_u8();
    hsl(0.0, 100.0, 50.0, 1.0, &mut receiver)?;
    assert_within_one(receiver.as_u8().unwrap_or_default(), red);
    lab(53.23, 80.11, 67.22, 1.0, &mut receiver)?;
    assert_within_one(receiver.as_u8().unwrap_or_default(), red);
    lch(53.23, 104.55, 40.0, 1.0, &mut receiver)?;
    assert_within_one(receiver.as_u8().unwrap_or_default(), red);
    oklab(0.627955, 0.224863, 0.125846, 1.0, &mut receiver)?;
    assert_within_one(receiver.as_u8().unwrap_or_default(), red);
    oklch(0.627955, 0.25766, 29.233, 1.0, &mut receiver)?;
    assert_within_one(receiver.as_u8().unwrap_or_default(), red);
    Ok(())
}

#[test]
fn test_receiver_untouched_on_error() {
    let initial = [11, 22, 33, 44];

    let mut receiver = Receiver::ValueU8(initial);
    for s in [
        "",
        "#12",
        "#1234567",
        "#ggg",
        "rgb(255, 0 0)",
        "rgb(1, 2, 3",
        "rgb(1, 2, 3) x",
        "rgb(1 2 3 / )",
        "lab(50 +- 0)",
        "nosuchcolor",
    ] {
        assert!(parse(s, &mut receiver).is_err(), "{:?}", s);
    }
    assert!(rgb(1, 2, 3, Float::NAN, &mut receiver).is_err());
    assert!(hwb(0.0, Float::INFINITY, 0.0, 1.0, &mut receiver).is_err());
    assert!(oklch(0.5, 0.1, Float::NAN, 1.0, &mut receiver).is_err());
    assert_eq!(receiver.as_u8(), Some(initial));

    let (mut r, mut g, mut b, mut a) = (0.25_f32, 0.5_f32, 0.75_f32, 1.0_f32);
    {
        let mut receiver = Receiver::refs_f32(Slots::new(&mut r, &mut g, &mut b, &mut a));
        assert!(parse("hsl(0 100% 50%", &mut receiver).is_err());
        assert!(parse(&"a".repeat(129), &mut receiver).is_err());
    }
    assert_eq!((r, g, b, a), (0.25, 0.5, 0.75, 1.0));
}

#[test]
fn test_gray_point() -> Result<(), ColorFormatError> {
    let gray = [128, 128, 128, 255];
    assert_eq!(parse_u8("hwb(0,50%,50%)")?, gray);
    assert_eq!(parse_u8("hsl(0,0%,50%)")?, gray);

    let mut receiver = Receiver::value_u8();
    hwb(0.0, 50.0, 50.0, 1.0, &mut receiver)?;
    assert_eq!(receiver.as_u8(), Some(gray));
    hsl(0.0, 0.0, 50.0, 1.0, &mut receiver)?;
    assert_eq!(receiver.as_u8(), Some(gray));
    Ok(())
}

#[test]
fn test_receiver_representations() -> Result<(), ColorFormatError> {
    let mut receiver = Receiver::value_f64();
    parse("#ff000080", &mut receiver)?;
    assert_eq!(receiver.as_f64(), Some([1.0, 0.0, 0.0, 128.0 / 255.0]));

    let mut receiver = Receiver::value_f32();
    parse("rgb(0 0 255 / 50%)", &mut receiver)?;
    assert_eq!(receiver.as_f32(), Some([0.0, 0.0, 1.0, 128.0 / 255.0]));

    let (mut r, mut b) = (0_u8, 0_u8);
    {
        let mut receiver = Receiver::refs_u8(Slots {
            r: Some(&mut r),
            b: Some(&mut b),
            ..Slots::default()
        });
        parse("rebeccapurple", &mut receiver)?;
    }
    assert_eq!((r, b), (102, 153));
    Ok(())
}

#[test]
fn test_rgba_constructors() -> Result<(), ColorFormatError> {
    assert_eq!(Rgba::hsl(120.0, 100.0, 50.0, 1.0)?.to_24bit(), [0, 255, 0, 255]);
    assert_eq!(Rgba::hwb(0.0, 50.0, 50.0, 1.0)?.to_24bit(), [128, 128, 128, 255]);
    assert_within_one(Rgba::lab(53.23, 80.11, 67.22, 1.0)?.to_24bit(), [255, 0, 0, 255]);
    assert_within_one(Rgba::lch(53.23, 104.55, 40.0, 1.0)?.to_24bit(), [255, 0, 0, 255]);
    assert_within_one(
        Rgba::oklab(0.627955, 0.224863, 0.125846, 1.0)?.to_24bit(),
        [255, 0, 0, 255],
    );
    assert_within_one(
        Rgba::oklch(0.627955, 0.25766, 29.233, 1.0)?.to_24bit(),
        [255, 0, 0, 255],
    );
    assert_eq!(
        Rgba::lab(Float::NAN, 0.0, 0.0, 1.0),
        Err(ColorFormatError::NonFiniteArgument)
    );
    Ok(())
}

type DirectFn = fn(Float, Float, Float, Float, &mut Receiver) -> Result<(), ColorFormatError>;
type ConstructorFn = fn(Float, Float, Float, Float) -> Result<Rgba, ColorFormatError>;

fn assert_in_unit_range(values: &[f64], context: &str) {
    assert!(
        values.iter().all(|v| v.is_finite() && (0.0..=1.0).contains(v)),
        "{} produced {:?}",
        context,
        values
    );
}

#[test]
fn test_extreme_inputs_stay_in_gamut() -> Result<(), ColorFormatError> {
    let extremes = [
        Float::MAX,
        -Float::MAX,
        Float::MAX / 2.0,
        Float::MAX.sqrt(),
        -Float::MAX.sqrt(),
        1e30,
        -1e30,
        0.5,
    ];

    let functions: [(&str, DirectFn, ConstructorFn); 6] = [
        ("hsl", hsl, Rgba::hsl),
        ("hwb", hwb, Rgba::hwb),
        ("lab", lab, Rgba::lab),
        ("lch", lch, Rgba::lch),
        ("oklab", oklab, Rgba::oklab),
        ("oklch", oklch, Rgba::oklch),
    ];

    for (name, direct, constructor) in functions {
        for c1 in extremes {
            for c2 in extremes {
                for c3 in extremes {
                    let context = format!("{}({:e}, {:e}, {:e})", name, c1, c2, c3);

                    let mut receiver = Receiver::value_f64();
                    direct(c1, c2, c3, 1.0, &mut receiver)?;
                    assert_in_unit_range(&receiver.as_f64().unwrap_or_default(), &context);

                    let mut receiver = Receiver::value_f32();
                    direct(c1, c2, c3, c1, &mut receiver)?;
                    let values = receiver.as_f32().unwrap_or_default().map(f64::from);
                    assert_in_unit_range(&values, &context);

                    let color = constructor(c1, c2, c3, c3)?;
                    let values = color.as_ref().map(f64::from);
                    assert_in_unit_range(&values, &context);
                }
            }
        }
    }

    for alpha in extremes {
        let mut receiver = Receiver::value_f64();
        rgb(255, 0, 0, alpha, &mut receiver)?;
        assert_in_unit_range(&receiver.as_f64().unwrap_or_default(), "rgb");
        assert_in_unit_range(&Rgba::rgb(255, 0, 0, alpha)?.as_ref().map(f64::from), "Rgba::rgb");
    }
    Ok(())
}

#[test]
fn test_overflowing_lab_and_oklab() -> Result<(), ColorFormatError> {
    let huge = Float::MAX;

    let mut receiver = Receiver::value_f64();
    lab(50.0, huge, huge, 1.0, &mut receiver)?;
    assert_in_unit_range(&receiver.as_f64().unwrap_or_default(), "lab");

    oklab(0.5, huge, -huge, 1.0, &mut receiver)?;
    assert_in_unit_range(&receiver.as_f64().unwrap_or_default(), "oklab");

    let color = Rgba::oklab(0.5, huge, -huge, 1.0)?;
    assert_in_unit_range(&color.as_ref().map(f64::from), "Rgba::oklab");
    Ok(())
}
