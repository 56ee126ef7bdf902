use thiserror::Error;

/// An error produced while decoding a document.
///
/// Every error is terminal for the whole decode call. The `position` is the
/// code-point index into the input at which the failure was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at position {position}")]
pub struct DecodeError {
    pub(crate) kind: ErrorKind,
    pub(crate) position: usize,
}

impl DecodeError {
    pub(crate) fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// The reason the decode failed.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Code-point index of the offending input position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

/// The kinds of failure a decode can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input buffer holds no code points at all.
    #[error("empty input")]
    EmptyInput,
    /// A value was expected but the input ended first.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// The lookahead code point does not start any known value kind.
    #[error("invalid item type {0:?}")]
    InvalidItemType(char),
    /// A string literal was never closed.
    #[error("unterminated string")]
    UnterminatedString,
    /// A backslash was the last code point of the input.
    #[error("dangling escape character")]
    DanglingEscape,
    /// A `-` sign was not followed by a decimal digit.
    #[error("expected a digit")]
    InvalidLeadingDigit,
    /// The input looked like `true` or `false` but was neither.
    #[error("invalid boolean literal")]
    InvalidBooleanLiteral,
    /// The input looked like `null` but was not.
    #[error("invalid null literal")]
    InvalidNullLiteral,
    /// A required token was absent.
    #[error("expected `{0}`")]
    ExpectedToken(&'static str),
    /// Non-whitespace input followed the top-level value.
    #[error("trailing content")]
    TrailingContent,
}
