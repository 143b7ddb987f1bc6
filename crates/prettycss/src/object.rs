#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    byte_to_unit, check_finite, clip_unit, convert, format_hashed, to_eq_coordinates,
    unit_to_byte, Channels,
};
use crate::error::ColorFormatError;
use crate::{ColorFunction, Float};

/// An sRGB color with alpha.
///
/// All four coordinates are in unit range `0..=1`. The constructors for the
/// CSS color functions, i.e., [`Rgba::rgb`], [`Rgba::hsl`], [`Rgba::hwb`],
/// [`Rgba::lab`], [`Rgba::lch`], [`Rgba::oklab`], and [`Rgba::oklch`],
/// convert their arguments to sRGB and clip the result to the sRGB gamut.
/// They fail on non-finite arguments.
///
/// `Rgba` implements `FromStr`, `TryFrom<&str>`, and `TryFrom<String>` for
/// parsing CSS color strings and `Display` for formatting colors in hashed
/// hexadecimal format with eight digits. Since the parser produces 8-bit
/// coordinates for hashed hexadecimal colors, formatting and then parsing a
/// color with 8-bit coordinates yields the same color.
///
/// Equality testing and hashing normalize coordinates by zeroing out
/// not-a-numbers, reducing resolution, and dropping the sign of negative
/// zeros.
///
/// ```
/// # use prettycss::Rgba;
/// # use prettycss::error::ColorFormatError;
/// let purple: Rgba = "rebeccapurple".parse()?;
/// assert_eq!(purple.to_24bit(), [102, 51, 153, 255]);
/// assert_eq!(purple.to_string(), "#663399ff");
/// assert_eq!(purple, Rgba::from_24bit(0x66, 0x33, 0x99, 0xff));
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "prettycss.color")
)]
#[derive(Clone, Copy, Debug)]
pub struct Rgba {
    coordinates: [Float; 4],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Rgba {
    // The following constructors come in pairs, once for pyffi and once without
    // pyffi, since #[new] and #[staticmethod] do not work with #[cfg_attr()].

    /// Instantiate a new color with the given coordinates.
    ///
    /// This constructor clamps the coordinates to `0..=1` and replaces
    /// not-a-numbers with zero.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(r: Float, g: Float, b: Float, alpha: Float) -> Self {
        Self::from_unit([r, g, b, alpha])
    }

    /// Instantiate a new color with the given coordinates.
    ///
    /// This constructor clamps the coordinates to `0..=1` and replaces
    /// not-a-numbers with zero.
    ///
    /// ```
    /// # use prettycss::Rgba;
    /// let color = Rgba::new(0.5, 2.0, -1.0, 1.0);
    /// assert_eq!(color.as_ref(), &[0.5, 1.0, 0.0, 1.0]);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn new(r: Float, g: Float, b: Float, alpha: Float) -> Self {
        Self::from_unit([r, g, b, alpha])
    }

    /// Parse a color from its string representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as [`Rgba as
    /// FromStr`](struct.Rgba.html#impl-FromStr-for-Rgba) and is available in
    /// Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        use core::str::FromStr;

        Self::from_str(s)
    }

    /// Instantiate a new color from its 8-bit coordinates.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_24bit(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        Self::from_bytes([r, g, b, alpha])
    }

    /// Instantiate a new color from its 8-bit coordinates.
    ///
    /// Despite the name, this constructor also takes an 8-bit alpha, which
    /// keeps it consistent with [`Rgba::to_24bit`].
    #[cfg(not(feature = "pyffi"))]
    pub fn from_24bit(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        Self::from_bytes([r, g, b, alpha])
    }

    /// Instantiate a new color from 8-bit RGB coordinates and alpha.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn rgb(r: u8, g: u8, b: u8, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Rgb, [r, g, b].map(Float::from), alpha)
    }

    /// Instantiate a new color from 8-bit RGB coordinates and alpha.
    ///
    /// Alpha is clamped to `0..=1` and then rounded to 8 bits, just like the
    /// alpha of an `rgb()` color string.
    ///
    /// ```
    /// # use prettycss::Rgba;
    /// # use prettycss::error::ColorFormatError;
    /// let color = Rgba::rgb(255, 0, 0, 0.5)?;
    /// assert_eq!(color.to_24bit(), [255, 0, 0, 128]);
    /// assert_eq!(
    ///     Rgba::rgb(255, 0, 0, f64::NAN),
    ///     Err(ColorFormatError::NonFiniteArgument)
    /// );
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn rgb(r: u8, g: u8, b: u8, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Rgb, [r, g, b].map(Float::from), alpha)
    }

    /// Instantiate a new color from HSL coordinates and alpha.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn hsl(h: Float, s: Float, l: Float, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Hsl, [h, s, l], alpha)
    }

    /// Instantiate a new color from HSL coordinates and alpha.
    ///
    /// The hue is in degrees, whereas saturation and lightness are in
    /// `0..=100`.
    ///
    /// ```
    /// # use prettycss::Rgba;
    /// # use prettycss::error::ColorFormatError;
    /// let orange = Rgba::hsl(30.0, 100.0, 50.0, 1.0)?;
    /// assert_eq!(orange.to_24bit(), [255, 128, 0, 255]);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn hsl(h: Float, s: Float, l: Float, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Hsl, [h, s, l], alpha)
    }

    /// Instantiate a new color from HWB coordinates and alpha.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn hwb(h: Float, w: Float, b: Float, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Hwb, [h, w, b], alpha)
    }

    /// Instantiate a new color from HWB coordinates and alpha.
    ///
    /// The hue is in degrees, whereas whiteness and blackness are in
    /// `0..=100`.
    #[cfg(not(feature = "pyffi"))]
    pub fn hwb(h: Float, w: Float, b: Float, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Hwb, [h, w, b], alpha)
    }

    /// Instantiate a new color from CIELAB coordinates and alpha.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn lab(l: Float, a: Float, b: Float, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Lab, [l, a, b], alpha)
    }

    /// Instantiate a new color from CIELAB coordinates and alpha.
    ///
    /// Lightness is in `0..=100`.
    #[cfg(not(feature = "pyffi"))]
    pub fn lab(l: Float, a: Float, b: Float, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Lab, [l, a, b], alpha)
    }

    /// Instantiate a new color from CIELCH coordinates and alpha.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn lch(l: Float, c: Float, h: Float, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Lch, [l, c, h], alpha)
    }

    /// Instantiate a new color from CIELCH coordinates and alpha.
    ///
    /// Lightness is in `0..=100` and the hue is in degrees.
    #[cfg(not(feature = "pyffi"))]
    pub fn lch(l: Float, c: Float, h: Float, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Lch, [l, c, h], alpha)
    }

    /// Instantiate a new color from Oklab coordinates and alpha.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn oklab(l: Float, a: Float, b: Float, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Oklab, [l, a, b], alpha)
    }

    /// Instantiate a new color from Oklab coordinates and alpha.
    ///
    /// Lightness is in `0..=1`.
    #[cfg(not(feature = "pyffi"))]
    pub fn oklab(l: Float, a: Float, b: Float, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Oklab, [l, a, b], alpha)
    }

    /// Instantiate a new color from Oklch coordinates and alpha.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn oklch(l: Float, c: Float, h: Float, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Oklch, [l, c, h], alpha)
    }

    /// Instantiate a new color from Oklch coordinates and alpha.
    ///
    /// Lightness is in `0..=1` and the hue is in degrees.
    ///
    /// ```
    /// # use prettycss::Rgba;
    /// # use prettycss::error::ColorFormatError;
    /// let red = Rgba::oklch(0.627955, 0.25766, 29.233, 1.0)?;
    /// assert_eq!(red.to_24bit(), [255, 0, 0, 255]);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn oklch(l: Float, c: Float, h: Float, alpha: Float) -> Result<Self, ColorFormatError> {
        Self::from_function(ColorFunction::Oklch, [l, c, h], alpha)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the alpha coordinate.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.coordinates[3]
    }

    /// Determine whether this color is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.coordinates[3] >= 1.0
    }

    /// Access the coordinates. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn coordinates(&self) -> [Float; 4] {
        self.coordinates
    }

    /// Get this color's length, which is 4. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        4
    }

    /// Read coordinates by index. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<Float> {
        match index {
            -4..=-1 => Ok(self.coordinates[(4 + index) as usize]),
            0..=3 => Ok(self.coordinates[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid coordinate index",
            )),
        }
    }

    /// Convert this color to 8-bit coordinates, including alpha.
    ///
    /// Each coordinate is scaled by 255 and rounded half up.
    pub fn to_24bit(&self) -> [u8; 4] {
        self.coordinates.map(unit_to_byte)
    }

    /// Format this color in `#rrggbbaa` hashed hexadecimal representation.
    pub fn to_hex_format(&self) -> String {
        format!("{}", self)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its hashed hexadecimal representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// Use separate block, so that methods are not exposed to Python.
impl Rgba {
    fn from_unit(coordinates: [Float; 4]) -> Self {
        Self {
            coordinates: coordinates.map(clip_unit),
        }
    }

    pub(crate) fn from_channels(channels: Channels) -> Self {
        Self {
            coordinates: channels.to_unit(),
        }
    }

    fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            coordinates: bytes.map(byte_to_unit),
        }
    }

    fn from_function(
        function: ColorFunction,
        coordinates: [Float; 3],
        alpha: Float,
    ) -> Result<Self, ColorFormatError> {
        let [c1, c2, c3] = coordinates;
        check_finite(&[c1, c2, c3, alpha])?;

        Ok(Self::from_channels(convert(
            function,
            &coordinates,
            alpha,
        )))
    }
}

impl core::str::FromStr for Rgba {
    type Err = ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// This method recognizes the same color formats as
    /// [`parse`](crate::parse), i.e., hashed hexadecimal colors, the CSS
    /// color functions, and the CSS color names.
    ///
    /// ```
    /// # use prettycss::Rgba;
    /// # use prettycss::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Rgba::from_str("#000080")?;
    /// assert_eq!(navy, Rgba::from_str("navy")?);
    /// assert_eq!(navy, Rgba::from_str("rgb(0 0 128)")?);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::parse(s.as_bytes()).map(Self::from_channels)
    }
}

impl TryFrom<&str> for Rgba {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}

impl AsRef<[Float; 4]> for Rgba {
    fn as_ref(&self) -> &[Float; 4] {
        &self.coordinates
    }
}

impl core::ops::Index<usize> for Rgba {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `3 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl core::hash::Hash for Rgba {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        to_eq_coordinates(&self.coordinates).hash(state);
    }
}

impl PartialEq for Rgba {
    fn eq(&self, other: &Self) -> bool {
        to_eq_coordinates(&self.coordinates) == to_eq_coordinates(&other.coordinates)
    }
}

impl Eq for Rgba {}

impl core::fmt::Display for Rgba {
    /// Format this color in `#rrggbbaa` hashed hexadecimal notation.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format_hashed(&self.to_24bit(), f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Rgba;
    use crate::error::ColorFormatError;
    use crate::{assert_same_color, Float};
    use std::collections::HashSet;

    #[test]
    fn test_constructors() -> Result<(), ColorFormatError> {
        assert_eq!(Rgba::new(Float::NAN, 0.25, 7.0, -0.0).as_ref(), &[0.0, 0.25, 1.0, 0.0]);
        assert_eq!(Rgba::from_24bit(0, 51, 255, 255).as_ref(), &[0.0, 0.2, 1.0, 1.0]);

        assert_eq!(Rgba::rgb(255, 0, 0, 1.0)?.to_24bit(), [255, 0, 0, 255]);
        assert_eq!(Rgba::rgb(255, 0, 0, 2.0)?.to_24bit(), [255, 0, 0, 255]);
        assert_eq!(Rgba::rgb(255, 0, 0, -1.0)?.to_24bit(), [255, 0, 0, 0]);
        assert_eq!(
            Rgba::rgb(0, 0, 0, Float::INFINITY),
            Err(ColorFormatError::NonFiniteArgument)
        );

        assert_same_color!(Rgba::hsl(0.0, 100.0, 50.0, 1.0)?, Rgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Rgba::hwb(0.0, 20.0, 20.0, 1.0)?.to_24bit(), [204, 51, 51, 255]);
        assert_eq!(Rgba::lab(53.59, 0.0, 0.0, 1.0)?.to_24bit(), [128, 128, 128, 255]);
        assert_eq!(Rgba::lch(53.23, 104.55, 40.0, 1.0)?.to_24bit(), [255, 0, 0, 255]);
        assert_eq!(
            Rgba::oklab(0.866440, -0.233887, 0.179498, 1.0)?.to_24bit(),
            [0, 255, 0, 255]
        );
        assert_eq!(
            Rgba::oklch(Float::NAN, 0.0, 0.0, 1.0),
            Err(ColorFormatError::NonFiniteArgument)
        );
        assert_eq!(
            Rgba::hsl(0.0, 0.0, 0.0, Float::NEG_INFINITY),
            Err(ColorFormatError::NonFiniteArgument)
        );
        Ok(())
    }

    #[test]
    fn test_accessors() -> Result<(), ColorFormatError> {
        let color = Rgba::from_24bit(0, 51, 255, 128);
        assert_eq!(color[1], 0.2);
        assert_eq!(color.alpha(), 128.0 / 255.0);
        assert!(!color.is_opaque());
        assert!(Rgba::try_from("red")?.is_opaque());
        Ok(())
    }

    #[test]
    fn test_parse_and_format() -> Result<(), ColorFormatError> {
        let color: Rgba = "hwb(0 20% 20% / 0.5)".parse()?;
        assert_eq!(color.to_string(), "#cc333380");
        assert_eq!(color.to_hex_format(), "#cc333380");
        assert_eq!(
            Rgba::try_from(String::from("#cc333380"))?.to_24bit(),
            color.to_24bit()
        );
        assert_eq!(
            Rgba::try_from("hwb(0 20% 20%"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        Ok(())
    }

    #[test]
    fn test_hex_round_trip() -> Result<(), ColorFormatError> {
        for value in 0..=255_u8 {
            let bytes = [value, 255 - value, value / 3, value.wrapping_mul(7)];
            let color = Rgba::from_24bit(bytes[0], bytes[1], bytes[2], bytes[3]);
            let parsed: Rgba = color.to_string().parse()?;
            assert_eq!(parsed.to_24bit(), bytes);
            assert_eq!(parsed, color);
        }
        Ok(())
    }

    #[test]
    fn test_eq_and_hash() -> Result<(), ColorFormatError> {
        let mut colors = HashSet::new();
        colors.insert(Rgba::try_from("white")?);
        colors.insert(Rgba::try_from("#fff")?);
        colors.insert(Rgba::try_from("rgb(100% 100% 100%)")?);
        colors.insert(Rgba::try_from("hsl(0 0% 100%)")?);
        assert_eq!(colors.len(), 1);

        colors.insert(Rgba::try_from("transparent")?);
        assert_eq!(colors.len(), 2);
        Ok(())
    }
}
