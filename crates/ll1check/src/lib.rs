//! A predictive (LL(1)) recursive-descent recognizer for arithmetic
//! expressions over unsigned integers with `+ - * /` and parentheses.
//!
//! The recognizer answers one question: is the input a sentence of the
//! grammar? It builds no tree and evaluates nothing.
//!
//! ```rust
//! assert!(ll1check::recognize("(3+4)*2"));
//! assert!(!ll1check::recognize("()"));
//!
//! let err = ll1check::check("1+*2").unwrap_err();
//! assert_eq!((err.line(), err.column()), (1, 3));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod options;
mod recognizer;

pub mod grammar;

#[cfg(test)]
mod tests;

pub use error::{ErrorSource, Expected, RecognizeError, SyntaxError};
pub use grammar::{NonTerminal, Production};
pub use options::RecognizerOptions;
pub use recognizer::{Outcome, Recognizer, check, recognize};
