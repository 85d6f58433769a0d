//! Byte level scanning shared by every parser.
//!
//! The free functions are the primitives: digit counting, fixed width
//! integer decoding and fraction decoding. [`Cursor`] wraps a borrowed input
//! with a position and a logical end, and builds syntax errors anchored to
//! the full input no matter which sub-parser raised them.

use crate::error::{digits_token, ParseError, UnexpectedTokenError};

/// Longest digit run accepted for unbounded numbers (duration components,
/// repeat counts). Eighteen decimal digits always fit in a `u64`.
pub(crate) const MAX_NUMBER_DIGITS: usize = 18;

/// Count consecutive ASCII digits starting at `offset`.
pub(crate) fn count_digits(buf: &[u8], offset: usize) -> usize {
    buf.get(offset..)
        .map(|rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}

/// Decode exactly `width` digits starting at `offset`.
///
/// The caller must have checked with [`count_digits`] that the digits are
/// there.
pub(crate) fn parse_fixed_int(buf: &[u8], offset: usize, width: usize) -> u64 {
    buf[offset..offset + width]
        .iter()
        .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
}

/// Decode a run of fraction digits into nanoseconds.
///
/// Returns `(nanoseconds, digits_consumed)`. Only the first nine digits are
/// significant; later digits are consumed and truncated, never rounded.
pub(crate) fn parse_fraction(buf: &[u8]) -> (u32, usize) {
    let n = count_digits(buf, 0);
    let significant = n.min(9);
    let value = parse_fixed_int(buf, 0, significant) as u32;
    (value * 10u32.pow((9 - significant) as u32), n)
}

/// A position inside a borrowed input.
///
/// `end` may sit before the end of `input` when a composite parser hands a
/// slice of its input to a sub-parser; the sub-parser sees `end` as end of
/// input while errors still report the whole string.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor {
            input,
            pos: 0,
            end: input.len(),
        }
    }

    /// A cursor over `input[pos..end]`.
    pub(crate) fn bounded(input: &'a str, pos: usize, end: usize) -> Self {
        Cursor { input, pos, end }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn bytes(&self) -> &'a [u8] {
        &self.input.as_bytes()[..self.end]
    }

    /// Everything between the position and the logical end.
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..self.end]
    }

    pub(crate) fn is_done(&self) -> bool {
        self.pos >= self.end
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    pub(crate) fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.bytes().get(self.pos + ahead).copied()
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.end);
    }

    /// Consume `byte` if it is next.
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Length of the digit run at the position.
    pub(crate) fn digits(&self) -> usize {
        count_digits(self.bytes(), self.pos)
    }

    /// Consume `width` digits as an integer. The run must have been counted.
    pub(crate) fn take_int(&mut self, width: usize) -> u64 {
        let value = parse_fixed_int(self.bytes(), self.pos, width);
        self.pos += width;
        value
    }

    /// Consume an unbounded digit run, at most [`MAX_NUMBER_DIGITS`] long.
    pub(crate) fn number(&mut self, expected: &str) -> Result<u64, ParseError> {
        match self.digits() {
            0 => Err(self.unexpected(expected)),
            n if n > MAX_NUMBER_DIGITS => Err(self.unexpected_digits(n, "at most 18 digits")),
            n => Ok(self.take_int(n)),
        }
    }

    /// Consume a fraction tail (`.` or `,` then digits) if one is next.
    ///
    /// Returns the fraction in nanoseconds, or an error when the separator is
    /// not followed by a digit.
    pub(crate) fn fraction(&mut self) -> Result<Option<u32>, ParseError> {
        if !matches!(self.peek(), Some(b'.' | b',')) {
            return Ok(None);
        }
        self.pos += 1;
        let (nanos, n) = parse_fraction(&self.bytes()[self.pos..]);
        if n == 0 {
            return Err(self.unexpected("fraction digits"));
        }
        self.pos += n;
        Ok(Some(nanos))
    }

    /// A syntax error at the position, with the next character as token.
    ///
    /// The token is read past the logical end, so a sub-parser stopped by a
    /// designator reports the designator rather than end of input.
    pub(crate) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let token = self.input[self.pos..]
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
        self.error(token, expected)
    }

    /// A syntax error for a digit run of the wrong length at the position.
    ///
    /// An empty run is reported as the character found instead.
    pub(crate) fn unexpected_digits(&self, n: usize, expected: impl Into<String>) -> ParseError {
        if n == 0 {
            self.unexpected(expected)
        } else {
            self.error(digits_token(n), expected)
        }
    }

    /// Fails unless the cursor reached its logical end.
    pub(crate) fn expect_end(&self) -> Result<(), ParseError> {
        if self.is_done() {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }

    pub(crate) fn error(&self, token: String, expected: impl Into<String>) -> ParseError {
        ParseError::UnexpectedToken(UnexpectedTokenError {
            value: self.input.to_string(),
            token,
            after: self.input[..self.pos].to_string(),
            expected: expected.into(),
        })
    }
}
