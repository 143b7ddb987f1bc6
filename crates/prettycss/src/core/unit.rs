use crate::Float;

/// The unit of a color function argument.
///
/// An argument either is a bare number or a percentage. There is no unset
/// unit: the parser only creates [`CssValue`]s after scanning a number and
/// checking for the percent sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CssUnit {
    Percent,
    Number,
}

/// A color function argument as scanned, before interpretation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CssValue {
    pub magnitude: Float,
    pub unit: CssUnit,
}

impl CssValue {
    /// Create a new bare number.
    pub const fn number(magnitude: Float) -> Self {
        Self {
            magnitude,
            unit: CssUnit::Number,
        }
    }

    /// Create a new percentage.
    pub const fn percent(magnitude: Float) -> Self {
        Self {
            magnitude,
            unit: CssUnit::Percent,
        }
    }

    /// Interpret this value as a fraction in `0..=1`.
    ///
    /// Alpha and Oklab/Oklch lightness use this interpretation.
    pub fn to_unit(&self) -> Float {
        match self.unit {
            CssUnit::Percent => self.magnitude.clamp(0.0, 100.0) / 100.0,
            CssUnit::Number => self.magnitude.clamp(0.0, 1.0),
        }
    }

    /// Interpret this value as a percentage in `0..=100`.
    ///
    /// The percent sign is optional. HSL saturation and lightness, HWB
    /// whiteness and blackness, as well as CIELAB/CIELCH lightness use this
    /// interpretation.
    pub fn to_percent(&self) -> Float {
        self.magnitude.clamp(0.0, 100.0)
    }

    /// Interpret this value as an 8-bit RGB coordinate.
    pub fn to_byte(&self) -> u8 {
        match self.unit {
            CssUnit::Percent => {
                let fraction = self.magnitude.clamp(0.0, 100.0) / 100.0;
                fraction.mul_add(255.0, 0.5) as u8
            }
            CssUnit::Number => (self.magnitude + 0.5).clamp(0.0, 255.0) as u8,
        }
    }

    /// Interpret this value as a hue in degrees. A percent sign is ignored.
    pub const fn to_degrees(&self) -> Float {
        self.magnitude
    }

    /// Scale a percentage in `-100..=100` by the given factor. Bare numbers
    /// pass through unchanged and unclamped.
    #[inline]
    fn to_scaled(self, factor: Float) -> Float {
        match self.unit {
            CssUnit::Percent => self.magnitude.clamp(-100.0, 100.0) * factor,
            CssUnit::Number => self.magnitude,
        }
    }

    /// Interpret this value as CIELCH chroma, with 100% equal to 150.
    pub fn to_lch_chroma(&self) -> Float {
        match self.unit {
            CssUnit::Percent => self.magnitude.clamp(0.0, 100.0) * 1.5,
            CssUnit::Number => self.magnitude,
        }
    }

    /// Interpret this value as CIELAB a or b, with 100% equal to 125.
    pub fn to_lab_axis(&self) -> Float {
        self.to_scaled(1.25)
    }

    /// Interpret this value as Oklab a or b or as Oklch chroma, with 100%
    /// equal to 0.4.
    pub fn to_ok_axis(&self) -> Float {
        self.to_scaled(0.004)
    }
}

// ====================================================================================================================
