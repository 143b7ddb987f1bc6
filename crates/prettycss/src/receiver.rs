//! Receiving parsed and converted colors.
//!
//! All functions in this module write their result into a caller-provided
//! [`Receiver`], which determines the numeric representation of the result.
//! The receiver is only written to on success. On error, it is left
//! untouched.

use crate::core::{check_finite, convert, from_rgb, Channels, ColorFunction};
use crate::error::ColorFormatError;
use crate::Float;

/// Caller-owned slots for receiving coordinates by reference.
///
/// Each slot is optional. A `None` slot opts out of the coordinate.
#[derive(Debug, Default)]
pub struct Slots<'a, T> {
    pub r: Option<&'a mut T>,
    pub g: Option<&'a mut T>,
    pub b: Option<&'a mut T>,
    pub a: Option<&'a mut T>,
}

impl<'a, T: Copy> Slots<'a, T> {
    /// Create new slots for all four coordinates.
    pub fn new(r: &'a mut T, g: &'a mut T, b: &'a mut T, a: &'a mut T) -> Self {
        Self {
            r: Some(r),
            g: Some(g),
            b: Some(b),
            a: Some(a),
        }
    }

    fn write(&mut self, values: [T; 4]) {
        for (slot, value) in [
            self.r.as_deref_mut(),
            self.g.as_deref_mut(),
            self.b.as_deref_mut(),
            self.a.as_deref_mut(),
        ]
        .into_iter()
        .zip(values)
        {
            if let Some(slot) = slot {
                *slot = value;
            }
        }
    }
}

/// The receiver for a parsed or converted color.
///
/// A receiver determines the numeric representation of a color's RGBA
/// coordinates as well as whether they are returned by value or written
/// through references. For by-value receivers, the coordinates are part of
/// the receiver after a successful call.
///
/// Floating point receivers always receive coordinates in `0..=1`. When
/// receiving the result of an 8-bit computation, i.e., for hashed
/// hexadecimal colors, `rgb()`, and color names, they receive the bytes
/// divided by 255. Conversely, 8-bit receivers receive floating point results
/// multiplied by 255 and rounded.
///
/// # Examples
///
/// ```
/// # use prettycss::{parse, Receiver, Slots};
/// # use prettycss::error::ColorFormatError;
/// let mut receiver = Receiver::value_u8();
/// parse("hsl(30 100% 50%)", &mut receiver)?;
/// assert_eq!(receiver.as_u8(), Some([255, 128, 0, 255]));
///
/// let mut alpha = 0.0_f64;
/// {
///     let mut receiver = Receiver::refs_f64(Slots { a: Some(&mut alpha), ..Slots::default() });
///     parse("#00000080", &mut receiver)?;
/// }
/// assert_eq!(alpha, 128.0 / 255.0);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[derive(Debug)]
pub enum Receiver<'a> {
    ValueU8([u8; 4]),
    ValueF32([f32; 4]),
    ValueF64([f64; 4]),
    RefU8(Slots<'a, u8>),
    RefF32(Slots<'a, f32>),
    RefF64(Slots<'a, f64>),
}

impl<'a> Receiver<'a> {
    /// Create a new receiver for bytes by value.
    pub const fn value_u8() -> Self {
        Self::ValueU8([0; 4])
    }

    /// Create a new receiver for single-precision floats by value.
    pub const fn value_f32() -> Self {
        Self::ValueF32([0.0; 4])
    }

    /// Create a new receiver for double-precision floats by value.
    pub const fn value_f64() -> Self {
        Self::ValueF64([0.0; 4])
    }

    /// Create a new receiver for bytes by reference.
    pub const fn refs_u8(slots: Slots<'a, u8>) -> Self {
        Self::RefU8(slots)
    }

    /// Create a new receiver for single-precision floats by reference.
    pub const fn refs_f32(slots: Slots<'a, f32>) -> Self {
        Self::RefF32(slots)
    }

    /// Create a new receiver for double-precision floats by reference.
    pub const fn refs_f64(slots: Slots<'a, f64>) -> Self {
        Self::RefF64(slots)
    }

    /// Get the bytes received by value.
    pub const fn as_u8(&self) -> Option<[u8; 4]> {
        match *self {
            Self::ValueU8(values) => Some(values),
            _ => None,
        }
    }

    /// Get the single-precision floats received by value.
    pub const fn as_f32(&self) -> Option<[f32; 4]> {
        match *self {
            Self::ValueF32(values) => Some(values),
            _ => None,
        }
    }

    /// Get the double-precision floats received by value.
    pub const fn as_f64(&self) -> Option<[f64; 4]> {
        match *self {
            Self::ValueF64(values) => Some(values),
            _ => None,
        }
    }

    /// Write the channels into this receiver.
    pub(crate) fn receive(&mut self, channels: Channels) {
        match *self {
            Self::ValueU8(ref mut values) => *values = channels.to_bytes(),
            Self::ValueF32(ref mut values) => *values = to_f32(channels),
            Self::ValueF64(ref mut values) => *values = to_f64(channels),
            Self::RefU8(ref mut slots) => slots.write(channels.to_bytes()),
            Self::RefF32(ref mut slots) => slots.write(to_f32(channels)),
            Self::RefF64(ref mut slots) => slots.write(to_f64(channels)),
        }
    }
}

fn to_f32(channels: Channels) -> [f32; 4] {
    match channels {
        Channels::Bytes(bytes) => bytes.map(|byte| f32::from(byte) / 255.0),
        Channels::Unit(values) => values.map(|value| value as f32),
    }
}

fn to_f64(channels: Channels) -> [f64; 4] {
    match channels {
        Channels::Bytes(bytes) => bytes.map(|byte| f64::from(byte) / 255.0),
        Channels::Unit(values) => values.map(f64::from),
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string as a CSS color.
///
/// This function recognizes:
///
///   * hashed hexadecimal colors with 3, 4, 6, or 8 digits;
///   * the `rgb()`, `hsl()`, `hwb()`, `lab()`, `lch()`, `oklab()`, and
///     `oklch()` functions with comma- or space-separated arguments and an
///     optional alpha after a slash;
///   * the legacy variants of these functions with an `a` suffix, e.g.,
///     `rgba()`, and a mandatory alpha as fourth argument;
///   * the 148 CSS color names as well as `transparent`.
///
/// Function and color names are case-insensitive. The string must have 1 to
/// 128 bytes. Numbers must not exceed 16,777,216 in magnitude and must not
/// have more than 9 decimals.
///
/// # Examples
///
/// ```
/// # use prettycss::{parse, Receiver};
/// # use prettycss::error::ColorFormatError;
/// let mut receiver = Receiver::value_u8();
/// parse("rgba(100%, 0%, 0%, 0.5)", &mut receiver)?;
/// assert_eq!(receiver.as_u8(), Some([255, 0, 0, 128]));
///
/// parse("oklch(0.627955 0.25766 29.233)", &mut receiver)?;
/// assert_eq!(receiver.as_u8(), Some([255, 0, 0, 255]));
///
/// assert_eq!(
///     parse("rgb(1, 2 3)", &mut receiver),
///     Err(ColorFormatError::MissingDelimiter)
/// );
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn parse(s: &str, receiver: &mut Receiver) -> Result<(), ColorFormatError> {
    parse_bytes(s.as_bytes(), receiver)
}

/// Parse the bytes as a CSS color.
///
/// This function behaves like [`parse`] but accepts bytes that need not be
/// valid UTF-8.
pub fn parse_bytes(bytes: &[u8], receiver: &mut Receiver) -> Result<(), ColorFormatError> {
    receiver.receive(crate::core::parse(bytes)?);
    Ok(())
}

/// Parse the bytes up to the first zero byte as a CSS color.
///
/// The zero byte must appear within the first 129 bytes. Otherwise, this
/// function fails with [`ColorFormatError::InvalidLength`] instead of
/// truncating the color string.
pub fn parse_nul_terminated(bytes: &[u8], receiver: &mut Receiver) -> Result<(), ColorFormatError> {
    receiver.receive(crate::core::parse_nul_terminated(bytes)?);
    Ok(())
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a color with the given function and arguments.
fn receive_converted(
    function: ColorFunction,
    coordinates: [Float; 3],
    alpha: Float,
    receiver: &mut Receiver,
) -> Result<(), ColorFormatError> {
    let [c1, c2, c3] = coordinates;
    check_finite(&[c1, c2, c3, alpha])?;
    receiver.receive(convert(function, &coordinates, alpha));
    Ok(())
}

/// Receive an RGB color with 8-bit coordinates and alpha in `0..=1`.
///
/// Alpha is clamped to `0..=1`. It must be finite.
pub fn rgb(r: u8, g: u8, b: u8, alpha: Float, receiver: &mut Receiver) -> Result<(), ColorFormatError> {
    check_finite(&[alpha])?;
    receiver.receive(from_rgb(r, g, b, alpha));
    Ok(())
}

/// Receive an HSL color converted to sRGB.
///
/// The hue is in degrees. Saturation and lightness are in `0..=100` and
/// alpha is in `0..=1`; all three are clamped. All arguments must be finite.
pub fn hsl(
    hue: Float,
    saturation: Float,
    lightness: Float,
    alpha: Float,
    receiver: &mut Receiver,
) -> Result<(), ColorFormatError> {
    receive_converted(ColorFunction::Hsl, [hue, saturation, lightness], alpha, receiver)
}

/// Receive an HWB color converted to sRGB.
///
/// The hue is in degrees. Whiteness and blackness are in `0..=100` and alpha
/// is in `0..=1`; all three are clamped. All arguments must be finite.
pub fn hwb(
    hue: Float,
    whiteness: Float,
    blackness: Float,
    alpha: Float,
    receiver: &mut Receiver,
) -> Result<(), ColorFormatError> {
    receive_converted(ColorFunction::Hwb, [hue, whiteness, blackness], alpha, receiver)
}

/// Receive a CIELAB color converted to sRGB.
///
/// Lightness is in `0..=100` and clamped. a and b are unbounded, though
/// practically within ±125. All arguments must be finite.
pub fn lab(
    lightness: Float,
    a: Float,
    b: Float,
    alpha: Float,
    receiver: &mut Receiver,
) -> Result<(), ColorFormatError> {
    receive_converted(ColorFunction::Lab, [lightness, a, b], alpha, receiver)
}

/// Receive a CIELCH color converted to sRGB.
///
/// Lightness is in `0..=100` and clamped. Chroma is unbounded, though
/// practically at most 230. The hue is in degrees. All arguments must be
/// finite.
pub fn lch(
    lightness: Float,
    chroma: Float,
    hue: Float,
    alpha: Float,
    receiver: &mut Receiver,
) -> Result<(), ColorFormatError> {
    receive_converted(ColorFunction::Lch, [lightness, chroma, hue], alpha, receiver)
}

/// Receive an Oklab color converted to sRGB.
///
/// Lightness is in `0..=1` and clamped. a and b are unbounded, though
/// practically within ±0.4. All arguments must be finite.
pub fn oklab(
    lightness: Float,
    a: Float,
    b: Float,
    alpha: Float,
    receiver: &mut Receiver,
) -> Result<(), ColorFormatError> {
    receive_converted(ColorFunction::Oklab, [lightness, a, b], alpha, receiver)
}

/// Receive an Oklch color converted to sRGB.
///
/// Lightness is in `0..=1` and clamped. Chroma is unbounded, though
/// practically at most 0.4. The hue is in degrees. All arguments must be
/// finite.
pub fn oklch(
    lightness: Float,
    chroma: Float,
    hue: Float,
    alpha: Float,
    receiver: &mut Receiver,
) -> Result<(), ColorFormatError> {
    receive_converted(ColorFunction::Oklch, [lightness, chroma, hue], alpha, receiver)
}

// ====================================================================================================================
