mod conversion;
mod cursor;
mod equality;
mod space;
mod string;
mod unit;

// conversion
pub(crate) use conversion::{
    byte_to_unit, check_finite, clip_unit, convert, from_rgb, unit_to_byte, Channels,
};

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_coordinates;

// space
pub use space::ColorFunction;

// string
pub(crate) use string::{format_hashed, parse, parse_nul_terminated};
