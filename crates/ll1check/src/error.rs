use core::fmt;

use thiserror::Error;

/// A failed recognition, with the position of the offending lookahead.
///
/// Every variant collapses to the same negative verdict; the extra detail is
/// only there for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct RecognizeError {
    pub(crate) source: ErrorSource,
    pub(crate) offset: usize,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl RecognizeError {
    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ErrorSource {
        &self.source
    }

    /// Character offset (0-based) of the lookahead that caused the failure.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Line (1-based) of the lookahead that caused the failure.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column (1-based) of the lookahead that caused the failure.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// The syntax error, if this failure was one.
    #[must_use]
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match &self.source {
            ErrorSource::SyntaxError(err) => Some(err),
            ErrorSource::DepthLimitExceeded(_) => None,
        }
    }
}

/// Why recognition stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorSource {
    /// The input does not belong to the language.
    #[error("syntax error: {0}")]
    SyntaxError(#[from] SyntaxError),
    /// Parenthesised sub-expressions nest deeper than the configured limit.
    #[error("nesting exceeds the maximum depth of {0}")]
    DepthLimitExceeded(usize),
}

/// A lookahead or consumed terminal matched no production.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// A character that no production accepts at this point.
    #[error("invalid character '{found}', expected {expected}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// What would have been accepted instead.
        expected: Expected,
    },
    /// The input ended while a terminal was still required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput {
        /// What would have been accepted instead.
        expected: Expected,
    },
    /// A multi-digit number starting with `0`.
    #[error("number literal has a leading zero")]
    LeadingZero,
}

/// The set of lookaheads a failed decision would have accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A digit or `(`, the start of an expression, term or factor.
    Operand,
    /// `+`, `-`, `)` or the end of input, after a complete term.
    AdditiveOperator,
    /// Any operator, `)` or the end of input, after a complete factor.
    Operator,
    /// Nothing more: the expression is complete.
    EndOfInput,
    /// Exactly this symbol.
    Symbol(char),
    /// A decimal digit.
    Digit,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Operand => f.write_str("a digit or '('"),
            Expected::AdditiveOperator => f.write_str("'+', '-', ')' or end of input"),
            Expected::Operator => f.write_str("'+', '-', '*', '/', ')' or end of input"),
            Expected::EndOfInput => f.write_str("end of input"),
            Expected::Symbol(c) => write!(f, "'{c}'"),
            Expected::Digit => f.write_str("a digit"),
        }
    }
}
