use super::ColorFunction;
use crate::error::ColorFormatError;
use crate::Float;

/// The result of parsing or converting a color.
///
/// RGB colors and named colors are exact 8-bit quantities, whereas all other
/// color functions produce floating point coordinates in unit range `0..=1`.
/// Keeping both representations avoids a lossy round trip when the receiver
/// expects bytes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Channels {
    Bytes([u8; 4]),
    Unit([Float; 4]),
}

impl Channels {
    /// Convert to 8-bit coordinates.
    pub fn to_bytes(&self) -> [u8; 4] {
        match *self {
            Self::Bytes(bytes) => bytes,
            Self::Unit([r, g, b, a]) => [
                unit_to_byte(r),
                unit_to_byte(g),
                unit_to_byte(b),
                unit_to_byte(a),
            ],
        }
    }

    /// Convert to floating point coordinates in `0..=1`.
    pub fn to_unit(&self) -> [Float; 4] {
        match *self {
            Self::Bytes([r, g, b, a]) => [
                byte_to_unit(r),
                byte_to_unit(g),
                byte_to_unit(b),
                byte_to_unit(a),
            ],
            Self::Unit(coordinates) => coordinates,
        }
    }
}

/// Convert an 8-bit coordinate to unit range.
#[inline]
pub(crate) fn byte_to_unit(value: u8) -> Float {
    Float::from(value) / 255.0
}

/// Convert a coordinate in unit range to 8 bits, rounding half up.
///
/// Out-of-range coordinates saturate at `0x00` and `0xff`.
#[inline]
pub(crate) fn unit_to_byte(value: Float) -> u8 {
    value.mul_add(255.0, 0.5) as u8
}

/// Clip a coordinate to unit range. Not-a-number becomes zero.
#[inline]
pub(crate) fn clip_unit(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Ensure that all arguments are finite.
pub(crate) fn check_finite(values: &[Float]) -> Result<(), ColorFormatError> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ColorFormatError::NonFiniteArgument)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB and clip the
/// result to the sRGB gamut.
///
/// Finite but huge Lab or Oklab coordinates overflow when cubed, which may
/// turn into not-a-number during matrix multiplication. Those coordinates
/// become zero.
fn linear_srgb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let encoded = if value <= 0.0031308 {
            value * 12.92
        } else {
            value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
        };

        clip_unit(encoded)
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert polar coordinates with hue in degrees to Cartesian coordinates.
#[inline]
fn polar_to_cartesian(chroma: Float, hue: Float) -> [Float; 2] {
    let (sin, cos) = hue.to_radians().sin_cos();
    [chroma * cos, chroma * sin]
}

// --------------------------------------------------------------------------------------------------------------------
// https://www.w3.org/TR/css-color-4/#hsl-to-rgb

/// Convert HSL to sRGB.
///
/// The hue is in degrees and may have any magnitude. Saturation and
/// lightness are percentages and are clamped to `0..=100`.
pub(crate) fn hsl_to_srgb(hue: Float, saturation: Float, lightness: Float) -> [Float; 3] {
    let hue = hue.rem_euclid(360.0);
    let saturation = saturation.clamp(0.0, 100.0) / 100.0;
    let lightness = lightness.clamp(0.0, 100.0) / 100.0;
    let a = saturation * lightness.min(1.0 - lightness);

    let convert = |n: Float| {
        let k = (n + hue / 30.0) % 12.0;
        let t = (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        a.mul_add(-t, lightness)
    };

    [convert(0.0), convert(8.0), convert(4.0)]
}

// --------------------------------------------------------------------------------------------------------------------
// https://www.w3.org/TR/css-color-4/#hwb-to-rgb

/// Convert HWB to sRGB.
///
/// Whiteness and blackness are percentages and are clamped to `0..=100`. If
/// they add up to 100% or more, the result is gray.
pub(crate) fn hwb_to_srgb(hue: Float, whiteness: Float, blackness: Float) -> [Float; 3] {
    let whiteness = whiteness.clamp(0.0, 100.0) / 100.0;
    let blackness = blackness.clamp(0.0, 100.0) / 100.0;

    let sum = whiteness + blackness;
    if 1.0 <= sum {
        let gray = whiteness / sum;
        return [gray, gray, gray];
    }

    let factor = 1.0 - sum;
    let [r, g, b] = hsl_to_srgb(hue, 100.0, 50.0);
    [
        r.mul_add(factor, whiteness),
        g.mul_add(factor, whiteness),
        b.mul_add(factor, whiteness),
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// http://www.brucelindbloom.com/index.html?Eqn_Lab_to_XYZ.html

/// CIE's ε.
const EPSILON: Float = 216.0 / 24389.0;

/// CIE's κ.
const KAPPA: Float = 24389.0 / 27.0;

/// The D65 reference white.
const D65: [Float; 3] = [0.95047, 1.0, 1.08883];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2404542, -1.5371385, -0.4985314 ],
    [ -0.9692660,  1.8760108,  0.0415560 ],
    [  0.0556434, -0.2040259,  1.0572252 ],
];

/// Convert CIELAB to sRGB.
///
/// Lightness is clamped to `0..=100`, whereas a and b are unbounded. The
/// result is clipped to the sRGB gamut.
pub(crate) fn lab_to_srgb(lightness: Float, a: Float, b: Float) -> [Float; 3] {
    #[inline]
    fn invert(f: Float) -> Float {
        let cube = f * f * f;
        if EPSILON < cube {
            cube
        } else {
            f.mul_add(116.0, -16.0) / KAPPA
        }
    }

    let lightness = lightness.clamp(0.0, 100.0);
    let fy = (lightness + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let yr = if KAPPA * EPSILON < lightness {
        fy * fy * fy
    } else {
        lightness / KAPPA
    };

    let xyz = [invert(fx) * D65[0], yr * D65[1], invert(fz) * D65[2]];
    linear_srgb_to_srgb(&multiply(&XYZ_TO_LINEAR_SRGB, &xyz))
}

/// Convert CIELCH to sRGB.
pub(crate) fn lch_to_srgb(lightness: Float, chroma: Float, hue: Float) -> [Float; 3] {
    let [a, b] = polar_to_cartesian(chroma, hue);
    lab_to_srgb(lightness, a, b)
}

// --------------------------------------------------------------------------------------------------------------------
// https://bottosson.github.io/posts/oklab/

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0,  0.3963377774,  0.2158037573 ],
    [ 1.0, -0.1055613423, -0.0638541728 ],
    [ 1.0, -0.0894841775, -1.2914855480 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  4.0767416621, -3.3077115913,  0.2309699292 ],
    [ -1.2684380046,  2.6097574011, -0.3413193965 ],
    [ -0.0041960863, -0.7034186147,  1.7076147009 ],
];

/// Convert Oklab to sRGB.
///
/// Lightness is clamped to `0..=1`, whereas a and b are unbounded. The result
/// is clipped to the sRGB gamut.
pub(crate) fn oklab_to_srgb(lightness: Float, a: Float, b: Float) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, &[lightness.clamp(0.0, 1.0), a, b]);
    let lms = [l * l * l, m * m * m, s * s * s];
    linear_srgb_to_srgb(&multiply(&LMS_TO_LINEAR_SRGB, &lms))
}

/// Convert Oklch to sRGB.
pub(crate) fn oklch_to_srgb(lightness: Float, chroma: Float, hue: Float) -> [Float; 3] {
    let [a, b] = polar_to_cartesian(chroma, hue);
    oklab_to_srgb(lightness, a, b)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert an RGB color with 8-bit coordinates and unit-range alpha.
///
/// Alpha is clamped to `0..=1` before scaling to 8 bits.
pub(crate) fn from_rgb(r: u8, g: u8, b: u8, alpha: Float) -> Channels {
    Channels::Bytes([r, g, b, unit_to_byte(alpha.clamp(0.0, 1.0))])
}

/// Convert the coordinates for the color function to sRGB.
///
/// For [`ColorFunction::Rgb`], this function expects coordinates in
/// `0..=255` and rounds them to the nearest byte. For all other functions, it
/// expects coordinates in the function's native units. Alpha is clamped to
/// `0..=1`.
pub(crate) fn convert(function: ColorFunction, coordinates: &[Float; 3], alpha: Float) -> Channels {
    use ColorFunction::*;

    let [c1, c2, c3] = *coordinates;
    let [r, g, b] = match function {
        Rgb => {
            #[inline]
            fn to_byte(value: Float) -> u8 {
                (value + 0.5).clamp(0.0, 255.0) as u8
            }

            return from_rgb(to_byte(c1), to_byte(c2), to_byte(c3), alpha);
        }
        Hsl => hsl_to_srgb(c1, c2, c3),
        Hwb => hwb_to_srgb(c1, c2, c3),
        Lab => lab_to_srgb(c1, c2, c3),
        Lch => lch_to_srgb(c1, c2, c3),
        Oklab => oklab_to_srgb(c1, c2, c3),
        Oklch => oklch_to_srgb(c1, c2, c3),
    };

    Channels::Unit([clip_unit(r), clip_unit(g), clip_unit(b), clip_unit(alpha)])
}

// ====================================================================================================================
