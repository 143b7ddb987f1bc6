//! Utility module with prettycss's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// The broad categories of color format errors.
///
/// Each [`ColorFormatError`] belongs to exactly one of these categories. Only
/// [`ErrorKind::UnknownFunction`] is recoverable, since it causes dispatch to
/// fall back on color names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An empty or oversized input or a non-finite numeric argument.
    InvalidArgument,
    /// A malformed literal, delimiter, parenthesis, or hexadecimal digit.
    SyntaxError,
    /// A number that exceeds the scanner's integer ceiling or decimal cap.
    RangeOverflow,
    /// A string that does not start with a known CSS color function.
    UnknownFunction,
    /// A string that is not a known CSS color name.
    UnknownColorName,
}

// ====================================================================================================================

/// An erroneous color format.
///
/// Like all of this crate's errors, the enumeration has only unit variants,
/// which keeps it `Copy` and trivially convertible into Python exceptions. Use
/// [`ColorFormatError::kind`] to learn the broader category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormatError {
    /// A color string that is empty, longer than 128 bytes, or lacks its
    /// terminating zero byte within that limit.
    InvalidLength,

    /// A numeric argument that is not-a-number or infinite.
    NonFiniteArgument,

    /// A number without digits. For example, `rgb(x 0 0)` has a malformed
    /// first coordinate.
    MalformedNumber,

    /// A number whose integral part exceeds 16,777,216. For example,
    /// `hsl(16777217 50% 50%)` has an oversized hue.
    OversizedNumber,

    /// A number with more than nine digits after the decimal point.
    TooManyDecimals,

    /// A hashed hexadecimal color with a character other than a hexadecimal
    /// digit. For example, `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A hashed hexadecimal color with an unexpected number of characters.
    /// For example, `#00` is missing a hexadecimal digit.
    UnexpectedCharacters,

    /// A color function without the opening parenthesis. For example,
    /// `rgb 0 0 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A color function without the closing parenthesis. For example,
    /// `oklab(1 2 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color function with a missing or inconsistent delimiter. For
    /// example, `rgb(0, 0 0)` mixes commas and spaces.
    MissingDelimiter,

    /// A color function followed by more characters. For example,
    /// `rgb(0 0 0);` has a trailing semicolon.
    TrailingCharacters,

    /// A color string that does not start with `rgb`, `hsl`, `hwb`, `lab`,
    /// `lch`, `oklab`, or `oklch`.
    UnknownFunction,

    /// A color string that is not one of the CSS color names.
    UnknownColorName,
}

impl ColorFormatError {
    /// Determine this error's broad category.
    pub const fn kind(&self) -> ErrorKind {
        use ColorFormatError::*;

        match *self {
            InvalidLength | NonFiniteArgument => ErrorKind::InvalidArgument,
            MalformedNumber | MalformedHex | UnexpectedCharacters | NoOpeningParenthesis
            | NoClosingParenthesis | MissingDelimiter | TrailingCharacters => {
                ErrorKind::SyntaxError
            }
            OversizedNumber | TooManyDecimals => ErrorKind::RangeOverflow,
            UnknownFunction => ErrorKind::UnknownFunction,
            UnknownColorName => ErrorKind::UnknownColorName,
        }
    }
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            InvalidLength => f.write_str("color format should have 1 to 128 bytes"),
            NonFiniteArgument => f.write_str("color coordinates should be finite numbers"),
            MalformedNumber => {
                f.write_str("color format coordinates should be decimal numbers but are not")
            }
            OversizedNumber => f.write_str("color format coordinates should not exceed 16777216"),
            TooManyDecimals => {
                f.write_str("color format coordinates should have at most 9 decimal digits")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal digits but are not")
            }
            UnexpectedCharacters => {
                f.write_str("hashed color format should have 3, 4, 6, or 8 hexadecimal digits")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            MissingDelimiter => {
                f.write_str("color format should consistently use commas or spaces as delimiters")
            }
            TrailingCharacters => {
                f.write_str("color format should end with the closing parenthesis")
            }
            UnknownFunction => f.write_str(
                "color format should start with `rgb`, `hsl`, `hwb`, `lab`, `lch`, `oklab`, or `oklch`",
            ),
            UnknownColorName => f.write_str("color format should be a known color name"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
