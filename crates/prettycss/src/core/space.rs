#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The enumeration of supported CSS color functions.
///
/// # RGB and Its Cylindrical Cousins
///
/// `rgb()` takes the three sRGB coordinates as numbers in `0..=255` or as
/// percentages. `hsl()` and `hwb()` are cylindrical transformations of the
/// very same sRGB cube, taking a hue in degrees followed by two percentages.
///
/// # The Perceptual Color Spaces
///
/// `lab()` and `lch()` describe colors in CIELAB, with the D65 white point,
/// using Cartesian and polar coordinates, respectively. `oklab()` and
/// `oklch()` describe colors in [Oklab](https://bottosson.github.io/posts/oklab/),
/// again using Cartesian and polar coordinates. All four are converted to sRGB
/// and then clipped to the sRGB gamut.
///
/// | Function | Coordinate 1 | Coordinate 2 | Coordinate 3 |
/// | -------- | :----------: | :----------: | :----------: |
/// | `rgb`    | r            | g            | b            |
/// | `hsl`    | hº           | s            | l            |
/// | `hwb`    | hº           | w            | b            |
/// | `lab`    | L            | a            | b            |
/// | `lch`    | L            | C            | hº           |
/// | `oklab`  | L            | a            | b            |
/// | `oklch`  | L            | C            | hº           |
///
/// Each function also accepts an alpha value, either after a slash or, for
/// the legacy variants with `a` suffix such as `rgba()`, as fourth argument.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettycss.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorFunction {
    Rgb,
    Hsl,
    Hwb,
    Lch,
    Lab,
    Oklch,
    Oklab,
}

impl ColorFunction {
    /// All color functions, in the order the parser tries them.
    ///
    /// The five-letter names come first so that they are not shadowed by
    /// the three-letter names.
    pub(crate) const ALL: [ColorFunction; 7] = [
        Self::Oklch,
        Self::Oklab,
        Self::Rgb,
        Self::Hsl,
        Self::Hwb,
        Self::Lch,
        Self::Lab,
    ];
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorFunction {
    /// Get this color function's CSS name.
    pub const fn name(&self) -> &'static str {
        use ColorFunction::*;

        match *self {
            Rgb => "rgb",
            Hsl => "hsl",
            Hwb => "hwb",
            Lch => "lch",
            Lab => "lab",
            Oklch => "oklch",
            Oklab => "oklab",
        }
    }

    /// Determine whether this color function uses polar coordinates.
    ///
    /// HSL and HWB are cylindrical, and CIELCH and Oklch are polar. In either
    /// case, one of the coordinates is a hue in degrees.
    pub const fn is_polar(&self) -> bool {
        use ColorFunction::*;
        matches!(*self, Hsl | Hwb | Lch | Oklch)
    }

    /// Create a human-readable representation for this color function. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl core::fmt::Display for ColorFunction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================
