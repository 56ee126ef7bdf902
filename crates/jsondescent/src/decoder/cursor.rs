//! Cursor: the input buffer plus a forward-only read position.
//!
//! Invariants
//! - The position never decreases during one decode call.
//! - A failed [`Cursor::match_literal`] leaves the position untouched, so
//!   callers may probe for an optional token and fall back without saving
//!   and restoring state themselves.

use crate::error::{DecodeError, ErrorKind};

#[derive(Debug)]
pub(crate) struct Cursor<'src> {
    input: &'src [char],
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(input: &'src [char]) -> Self {
        Self { input, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// The code point under the cursor, or `None` once the input is exhausted.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    pub(crate) fn error(&self, kind: ErrorKind) -> DecodeError {
        DecodeError::new(kind, self.pos)
    }

    /// Skips spaces and line feeds. Tabs and carriage returns are not
    /// whitespace here.
    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\n')) {
            self.pos += 1;
        }
    }

    /// Consumes `literal` if the input continues with exactly that sequence.
    ///
    /// With `skip_around`, whitespace is skipped before the attempt and, on
    /// success, after the literal as well. On a mismatch the position is
    /// restored to where it was before the call, including any whitespace that
    /// was skipped up front.
    pub(crate) fn match_literal(
        &mut self,
        skip_around: bool,
        literal: &'static str,
    ) -> Result<(), DecodeError> {
        let start = self.pos;
        if skip_around {
            self.skip_whitespace();
        }

        let rest = &self.input[self.pos..];
        let mut len = 0;
        let mut expected = literal.chars();
        let matched = loop {
            match expected.next() {
                None => break true,
                Some(ch) if rest.get(len) == Some(&ch) => len += 1,
                Some(_) => break false,
            }
        };

        if !matched {
            let err = self.error(ErrorKind::ExpectedToken(literal));
            self.pos = start;
            return Err(err);
        }

        self.pos += len;
        if skip_around {
            self.skip_whitespace();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use quickcheck_macros::quickcheck;

    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn peek_reports_exhaustion() {
        let input = chars("a");
        let mut cursor = Cursor::new(&input);
        assert_eq!(cursor.peek(), Some('a'));
        cursor.advance(1);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn whitespace_is_space_and_newline_only() {
        let input = chars(" \n \tx");
        let mut cursor = Cursor::new(&input);
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.peek(), Some('\t'));

        let input = chars("\r\n");
        let mut cursor = Cursor::new(&input);
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn match_literal_skips_around_on_success() {
        let input = chars("  :\n 1");
        let mut cursor = Cursor::new(&input);
        cursor.match_literal(true, ":").unwrap();
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.peek(), Some('1'));
    }

    #[test]
    fn match_literal_without_skip_requires_exact_position() {
        let input = chars(" true");
        let mut cursor = Cursor::new(&input);
        let err = cursor.match_literal(false, "true").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::ExpectedToken("true"));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn failed_match_restores_leading_whitespace() {
        let input = chars("  ,");
        let mut cursor = Cursor::new(&input);
        let err = cursor.match_literal(true, "]").unwrap_err();
        assert_eq!(err.position(), 2);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn partial_match_consumes_nothing() {
        let input = chars("fals");
        let mut cursor = Cursor::new(&input);
        assert!(cursor.match_literal(false, "false").is_err());
        assert_eq!(cursor.position(), 0);

        let input = chars("nulL");
        let mut cursor = Cursor::new(&input);
        assert!(cursor.match_literal(false, "null").is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[quickcheck]
    #[allow(clippy::needless_pass_by_value)]
    fn failed_match_never_moves_the_cursor(input: alloc::string::String, skip: bool) -> bool {
        let input = chars(&input);
        let mut cursor = Cursor::new(&input);
        match cursor.match_literal(skip, "null") {
            Ok(()) => cursor.position() >= 4,
            Err(_) => cursor.position() == 0,
        }
    }
}
