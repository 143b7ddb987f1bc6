use crate::error::ColorFormatError;
use crate::Float;

/// The ceiling for a number's magnitude, i.e., 2^24.
pub(crate) const NUMBER_MAX: Float = 16_777_216.0;

/// The maximum number of digits after the decimal point.
pub(crate) const DECIMAL_LIMIT: usize = 9;

/// The delimiter between a color function's arguments.
///
/// The first delimiter of a function call determines the delimiter for the
/// rest of the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Delimiter {
    Comma,
    Space,
}

/// A cursor over the bytes of a color string.
///
/// The cursor only ever moves forward and never copies the underlying bytes.
/// Its position is at most the length of the byte slice.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor positioned at the first byte.
    pub(crate) const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Determine whether the cursor has consumed all bytes.
    pub(crate) const fn is_done(&self) -> bool {
        self.position == self.bytes.len()
    }

    /// Get the remaining bytes.
    #[inline]
    fn rest(&self) -> &'a [u8] {
        self.bytes.get(self.position..).unwrap_or_default()
    }

    /// Skip spaces and tabs, returning the number of skipped bytes.
    pub(crate) fn skip_whitespace(&mut self) -> usize {
        let count = self
            .rest()
            .iter()
            .take_while(|&&byte| byte == b' ' || byte == b'\t')
            .count();
        self.position += count;
        count
    }

    /// Consume the given token, which must match exactly.
    pub(crate) fn consume(&mut self, token: &[u8]) -> bool {
        if self.rest().starts_with(token) {
            self.position += token.len();
            true
        } else {
            false
        }
    }

    /// Consume the given token, ignoring ASCII case.
    pub(crate) fn consume_ignore_case(&mut self, token: &[u8]) -> bool {
        let matches = self
            .rest()
            .get(..token.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(token));
        if matches {
            self.position += token.len();
        }
        matches
    }

    /// Consume the delimiter between two arguments.
    ///
    /// If the delimiter mode is still undecided, a comma locks in commas and
    /// one or more spaces lock in spaces. Once locked in, the delimiter must
    /// match the mode. Spaces before a comma are always skipped.
    pub(crate) fn consume_delimiter(
        &mut self,
        mode: &mut Option<Delimiter>,
    ) -> Result<(), ColorFormatError> {
        let spaces = self.skip_whitespace();

        let ok = match *mode {
            None => {
                if self.consume(b",") {
                    *mode = Some(Delimiter::Comma);
                    true
                } else if 0 < spaces {
                    *mode = Some(Delimiter::Space);
                    true
                } else {
                    false
                }
            }
            Some(Delimiter::Comma) => self.consume(b","),
            Some(Delimiter::Space) => 0 < spaces,
        };

        if ok {
            Ok(())
        } else {
            Err(ColorFormatError::MissingDelimiter)
        }
    }

    /// Scan a decimal number.
    ///
    /// This method consumes the longest prefix matching
    /// `[+-]?[0-9]*(\.[0-9]*)?` with at least one digit. The integral part
    /// must not exceed [`NUMBER_MAX`] and the fractional part must not have
    /// more than [`DECIMAL_LIMIT`] digits. Once the value reaches the
    /// ceiling, further decimals are still consumed and counted but do not
    /// contribute. On error, the cursor does not move.
    pub(crate) fn scan_number(&mut self) -> Result<Float, ColorFormatError> {
        let bytes = self.bytes;
        let mut position = self.position;

        let sign: Float = match bytes.get(position) {
            Some(b'-') => {
                position += 1;
                -1.0
            }
            Some(b'+') => {
                position += 1;
                1.0
            }
            _ => 1.0,
        };

        let mut value: Float = 0.0;
        let mut digits = 0;

        while let Some(&byte) = bytes.get(position) {
            if !byte.is_ascii_digit() {
                break;
            }

            let digit = Float::from(byte - b'0');
            if (NUMBER_MAX - digit) / 10.0 < value {
                return Err(ColorFormatError::OversizedNumber);
            }

            value = value.mul_add(10.0, digit);
            digits += 1;
            position += 1;
        }

        if bytes.get(position) == Some(&b'.') {
            position += 1;

            let mut factor: Float = 0.1;
            let mut decimals = 0;

            while let Some(&byte) = bytes.get(position) {
                if !byte.is_ascii_digit() {
                    break;
                } else if DECIMAL_LIMIT <= decimals {
                    return Err(ColorFormatError::TooManyDecimals);
                }

                decimals += 1;
                if value < NUMBER_MAX {
                    let increment = Float::from(byte - b'0') * factor;
                    if NUMBER_MAX - increment < value {
                        return Err(ColorFormatError::OversizedNumber);
                    }

                    value += increment;
                    factor *= 0.1;
                }

                position += 1;
            }

            digits += decimals;
        }

        if digits == 0 {
            return Err(ColorFormatError::MalformedNumber);
        }

        self.position = position;
        Ok(sign * value)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{ColorFormatError, Cursor, Delimiter, NUMBER_MAX};
    use crate::assert_close_enough;

    fn scan(s: &str) -> Result<crate::Float, ColorFormatError> {
        Cursor::new(s.as_bytes()).scan_number()
    }

    #[test]
    fn test_scan_number() -> Result<(), ColorFormatError> {
        assert_eq!(scan("0")?, 0.0);
        assert_eq!(scan("255")?, 255.0);
        assert_eq!(scan("+7")?, 7.0);
        assert_eq!(scan("-30")?, -30.0);
        assert_eq!(scan("12.")?, 12.0);
        assert_close_enough!(scan(".5")?, 0.5);
        assert_close_enough!(scan("-0.25")?, -0.25);
        assert_close_enough!(scan("53.23")?, 53.23);
        assert_close_enough!(scan("119.999999999")?, 119.999999999);

        assert_eq!(scan("a"), Err(ColorFormatError::MalformedNumber));
        assert_eq!(scan("-"), Err(ColorFormatError::MalformedNumber));
        assert_eq!(scan("."), Err(ColorFormatError::MalformedNumber));
        assert_eq!(scan("+.x"), Err(ColorFormatError::MalformedNumber));
        assert_eq!(scan(""), Err(ColorFormatError::MalformedNumber));
        Ok(())
    }

    #[test]
    fn test_scan_limits() -> Result<(), ColorFormatError> {
        assert_eq!(scan("16777216")?, NUMBER_MAX);
        assert_eq!(scan("-16777216")?, -NUMBER_MAX);
        assert_eq!(scan("16777216.999999999")?, NUMBER_MAX);
        assert_eq!(scan("16777217"), Err(ColorFormatError::OversizedNumber));
        assert_eq!(scan("99999999"), Err(ColorFormatError::OversizedNumber));
        assert_eq!(
            scan("119.9999999999"),
            Err(ColorFormatError::TooManyDecimals)
        );
        assert_eq!(
            scan("16777216.9999999999"),
            Err(ColorFormatError::TooManyDecimals)
        );
        Ok(())
    }

    #[test]
    fn test_scan_stops_at_non_digit() -> Result<(), ColorFormatError> {
        let mut cursor = Cursor::new(b"12.5%)");
        assert_close_enough!(cursor.scan_number()?, 12.5);
        assert!(cursor.consume(b"%"));
        assert!(cursor.consume(b")"));
        assert!(cursor.is_done());

        let mut cursor = Cursor::new(b"1e3");
        assert_eq!(cursor.scan_number()?, 1.0);
        assert!(!cursor.is_done());
        Ok(())
    }

    #[test]
    fn test_lexical_primitives() {
        let mut cursor = Cursor::new(b" \t x");
        assert_eq!(cursor.skip_whitespace(), 3);
        assert_eq!(cursor.skip_whitespace(), 0);
        assert!(!cursor.consume(b"X"));
        assert!(cursor.consume_ignore_case(b"X"));
        assert!(cursor.is_done());
        assert!(!cursor.consume(b")"));
        assert!(!cursor.consume_ignore_case(b"a"));

        let mut cursor = Cursor::new(b"OkLcH(");
        assert!(!cursor.consume_ignore_case(b"oklab"));
        assert!(cursor.consume_ignore_case(b"oklch"));
        assert!(cursor.consume(b"("));
    }

    #[test]
    fn test_delimiters() {
        let mut mode = None;
        let mut cursor = Cursor::new(b" , ,  ,");
        assert_eq!(cursor.consume_delimiter(&mut mode), Ok(()));
        assert_eq!(mode, Some(Delimiter::Comma));
        assert_eq!(cursor.consume_delimiter(&mut mode), Ok(()));
        assert_eq!(cursor.consume_delimiter(&mut mode), Ok(()));
        assert_eq!(
            cursor.consume_delimiter(&mut mode),
            Err(ColorFormatError::MissingDelimiter)
        );

        let mut mode = None;
        let mut cursor = Cursor::new(b"  1 ,");
        assert_eq!(cursor.consume_delimiter(&mut mode), Ok(()));
        assert_eq!(mode, Some(Delimiter::Space));
        assert!(cursor.scan_number().is_ok());
        assert_eq!(cursor.consume_delimiter(&mut mode), Ok(()));
        assert!(cursor.consume(b","));

        let mut mode = None;
        let mut cursor = Cursor::new(b"1");
        assert_eq!(
            cursor.consume_delimiter(&mut mode),
            Err(ColorFormatError::MissingDelimiter)
        );
        assert_eq!(mode, None);
    }
}
