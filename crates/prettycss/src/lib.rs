//! # Pretty 🌸 CSS
//!
//! Prettycss parses CSS color strings into sRGB, without allocating.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. "
)]
//!
//!
//! ## 1. Overview
//!
//! Prettycss's main abstractions are:
//!
//!   * [`parse`] and its variants [`parse_bytes`] and [`parse_nul_terminated`]
//!     recognize **hashed hexadecimal colors**, the **CSS color functions**
//!     `rgb()`, `hsl()`, `hwb()`, `lab()`, `lch()`, `oklab()`, and `oklch()`,
//!     and the **CSS color names**. They convert every color to sRGB with
//!     alpha and clip it to the sRGB gamut.
//!   * [`rgb`], [`hsl`], [`hwb`], [`lab`], [`lch`], [`oklab`], and [`oklch`]
//!     perform the **same conversions on numbers**, bypassing the parser.
//!   * A [`Receiver`] determines how a caller **receives the result**, as
//!     bytes, single-precision floats, or double-precision floats, either by
//!     value or through optional references.
//!   * [`Rgba`] is a **color value** that can be parsed from and formatted
//!     as a string.
//!   * [`ColorFunction`] enumerates the supported CSS color functions.
//!
//! The parser is strict. It accepts strings with 1 to 128 bytes and numbers
//! with an integral part of at most 16,777,216 and at most nine decimals. Each
//! color function consistently uses either commas or spaces between its
//! arguments. All failures are reported as [`ColorFormatError`]s, whose
//! [`kind`](ColorFormatError::kind) groups them into broader categories.
//!
//! ```
//! # use prettycss::{parse, Receiver, Rgba};
//! # use prettycss::error::ColorFormatError;
//! let mut receiver = Receiver::value_u8();
//! assert!(parse("hsl(120deg 100% 50%)", &mut receiver).is_err());
//! parse("hsl(120 100% 50%)", &mut receiver)?;
//! assert_eq!(receiver.as_u8(), Some([0, 255, 0, 255]));
//!
//! let color: Rgba = "oklab(0.5978 0 0 / 50%)".parse()?;
//! assert_eq!(color.to_string(), "#7f7f7f80");
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//!
//! ## 2. Optional Features
//!
//! Prettycss supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls prettycss's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!
//! ## 3. Acknowledgements
//!
//! The conversions follow the formulae of the [CSS Color
//! 4](https://www.w3.org/TR/css-color-4/) specification and Björn Ottosson's
//! [Oklab](https://bottosson.github.io/posts/oklab/) definition.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
pub mod names;
mod object;
mod receiver;

#[cfg(feature = "pyffi")]
pub use crate::core::close_enough;

#[doc(hidden)]
pub use crate::core::to_eq_bits;

pub use crate::core::ColorFunction;
pub use error::{ColorFormatError, ErrorKind};
pub use object::Rgba;
pub use receiver::{
    hsl, hwb, lab, lch, oklab, oklch, parse, parse_bytes, parse_nul_terminated, rgb, Receiver,
    Slots,
};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Parse the string as a CSS color. <i class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "parse")]
pub fn py_parse(s: &str) -> Result<Rgba, ColorFormatError> {
    s.parse()
}

/// Parse the string as a CSS color and return its 8-bit coordinates. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn parse_24bit(s: &str) -> Result<[u8; 4], ColorFormatError> {
    let mut receiver = Receiver::value_u8();
    parse(s, &mut receiver)?;
    Ok(receiver.as_u8().unwrap_or_default())
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse, m)?)?;
    m.add_function(wrap_pyfunction!(parse_24bit, m)?)?;

    m.add_class::<ColorFunction>()?;
    m.add_class::<Rgba>()?;

    Ok(())
}
