//! Predictive recursive-descent recognizer.
//!
//! Each non-terminal of the grammar has one procedure. A procedure peeks at
//! the next character, asks [`predict`] for the production to expand, and
//! then consumes the production's leading terminal. The first mismatch is
//! returned as an `Err` and ends the run. There is no backtracking: with one
//! character of lookahead the predicted production is the only one that can
//! succeed.
//!
//! Nothing here recurses on the native stack. Each procedure handles one
//! expansion of its non-terminal and returns the `Goal` to pursue next;
//! `Recognizer::sentence` drives them in a loop. The right-recursive tails
//! (`E' -> + T E'` and friends) become repeated `TermTail`/`ExprTail` goals,
//! and `F -> ( E )` only counts the open group: every pending group continues
//! the same way, with `)` followed by `T'`, so the count is the whole stack.
//! Nesting is therefore unbounded unless [`RecognizerOptions::max_depth`] is
//! set.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::{
    cursor::{Cursor, Peeked},
    error::{ErrorSource, Expected, RecognizeError, SyntaxError},
    grammar::{Lookahead, NonTerminal, Production, Terminal, predict},
    options::RecognizerOptions,
};

/// What the recognizer expands or consumes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    Expr,
    ExprTail,
    Term,
    TermTail,
    Factor,
    /// `)` of the innermost open group.
    CloseGroup,
    /// The outermost `E` is complete.
    Done,
}

/// The result of a recognition run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// `Ok(())` when the whole input is a sentence of the grammar.
    pub result: Result<(), RecognizeError>,
    /// Productions applied, in leftmost-derivation order, up to the failure
    /// point. Empty unless [`RecognizerOptions::record_derivation`] is set.
    pub derivation: Vec<Production>,
}

impl Outcome {
    /// The verdict: `true` if the input was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }
}

/// Recognizer for a single input.
///
/// A `Recognizer` is consumed by [`Recognizer::check`] or
/// [`Recognizer::run`]; build a new one for every input.
///
/// ```rust
/// use ll1check::{Recognizer, RecognizerOptions};
///
/// let outcome = Recognizer::new("(3+4)*2", RecognizerOptions::default()).run();
/// assert!(outcome.is_accepted());
/// ```
#[derive(Debug)]
pub struct Recognizer<'src> {
    cursor: Cursor<'src>,
    options: RecognizerOptions,
    /// Groups opened by `F -> ( E )` and not yet closed.
    depth: usize,
    derivation: Vec<Production>,
}

impl<'src> Recognizer<'src> {
    /// Creates a recognizer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'src str, options: RecognizerOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            depth: 0,
            derivation: Vec::new(),
        }
    }

    /// Recognizes the start symbol and reports the first error, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`RecognizeError`] describing the first lookahead that did
    /// not fit the grammar.
    pub fn check(self) -> Result<(), RecognizeError> {
        self.run().result
    }

    /// Recognizes the start symbol and returns the verdict together with the
    /// recorded derivation.
    #[must_use]
    pub fn run(mut self) -> Outcome {
        let result = self.sentence();
        match &result {
            Ok(()) => debug!("accepted {} characters", self.cursor.offset()),
            Err(err) => debug!("rejected: {err}"),
        }
        Outcome {
            result,
            derivation: self.derivation,
        }
    }

    // ------------------------------------------------------------------------------------------------
    // Productions
    // ------------------------------------------------------------------------------------------------

    /// `E`, followed by nothing but the end marker.
    fn sentence(&mut self) -> Result<(), RecognizeError> {
        let mut goal = Goal::Expr;
        loop {
            goal = match goal {
                Goal::Expr => self.expr()?,
                Goal::ExprTail => self.expr_tail()?,
                Goal::Term => self.term()?,
                Goal::TermTail => self.term_tail()?,
                Goal::Factor => self.factor()?,
                Goal::CloseGroup => self.close_group()?,
                Goal::Done => break,
            };
        }
        match self.cursor.peek() {
            Peeked::EndOfInput => Ok(()),
            Peeked::Char(_) => Err(self.fail(Expected::EndOfInput)),
        }
    }

    /// `E -> T E'`
    fn expr(&mut self) -> Result<Goal, RecognizeError> {
        match self.expand(NonTerminal::Expr)? {
            Production::Expr => Ok(Goal::Term),
            p => unreachable!("{p} predicted for E"),
        }
    }

    /// `E' -> + T E' | - T E' | ε`
    fn expr_tail(&mut self) -> Result<Goal, RecognizeError> {
        match self.expand(NonTerminal::ExprTail)? {
            Production::ExprTailAdd => self.expect(Terminal::Symbol('+'))?,
            Production::ExprTailSub => self.expect(Terminal::Symbol('-'))?,
            Production::ExprTailEmpty if self.depth > 0 => return Ok(Goal::CloseGroup),
            Production::ExprTailEmpty => return Ok(Goal::Done),
            p => unreachable!("{p} predicted for E'"),
        }
        Ok(Goal::Term)
    }

    /// `T -> F T'`
    fn term(&mut self) -> Result<Goal, RecognizeError> {
        match self.expand(NonTerminal::Term)? {
            Production::Term => Ok(Goal::Factor),
            p => unreachable!("{p} predicted for T"),
        }
    }

    /// `T' -> * F T' | / F T' | ε`
    fn term_tail(&mut self) -> Result<Goal, RecognizeError> {
        match self.expand(NonTerminal::TermTail)? {
            Production::TermTailMul => self.expect(Terminal::Symbol('*'))?,
            Production::TermTailDiv => self.expect(Terminal::Symbol('/'))?,
            Production::TermTailEmpty => return Ok(Goal::ExprTail),
            p => unreachable!("{p} predicted for T'"),
        }
        Ok(Goal::Factor)
    }

    /// `F -> number | ( E )`
    fn factor(&mut self) -> Result<Goal, RecognizeError> {
        match self.expand(NonTerminal::Factor)? {
            Production::FactorNumber => {
                self.expect(Terminal::Number)?;
                Ok(Goal::TermTail)
            }
            Production::FactorGroup => {
                self.expect(Terminal::Symbol('('))?;
                self.open_group()?;
                Ok(Goal::Expr)
            }
            p => unreachable!("{p} predicted for F"),
        }
    }

    /// The `)` that ends `F -> ( E )`, once the inner `E` is complete.
    fn close_group(&mut self) -> Result<Goal, RecognizeError> {
        self.expect(Terminal::Symbol(')'))?;
        self.depth -= 1;
        Ok(Goal::TermTail)
    }

    // ------------------------------------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------------------------------------

    /// Chooses the production for `nt` from the current lookahead.
    fn expand(&mut self, nt: NonTerminal) -> Result<Production, RecognizeError> {
        let lookahead = Lookahead::classify(self.cursor.peek());
        let Some(production) = predict(nt, lookahead) else {
            return Err(self.fail(nt.expected()));
        };
        trace!(
            "{}:{} {production} on {lookahead:?}",
            self.cursor.line(),
            self.cursor.column()
        );
        if self.options.record_derivation {
            self.derivation.push(production);
        }
        Ok(production)
    }

    /// Consumes one terminal.
    fn expect(&mut self, terminal: Terminal) -> Result<(), RecognizeError> {
        match terminal {
            Terminal::Number => self.expect_number(),
            Terminal::Symbol(symbol) => match self.cursor.peek() {
                Peeked::Char(c) if c == symbol => {
                    self.cursor.advance();
                    Ok(())
                }
                _ => Err(self.fail(Expected::Symbol(symbol))),
            },
        }
    }

    /// `number -> digit { digit }`, consumed greedily.
    fn expect_number(&mut self) -> Result<(), RecognizeError> {
        let leading = match self.cursor.peek() {
            Peeked::Char(c) if c.is_ascii_digit() => c,
            _ => return Err(self.fail(Expected::Digit)),
        };
        self.cursor.advance();

        if leading == '0'
            && !self.options.allow_leading_zeros
            && matches!(self.cursor.peek(), Peeked::Char(c) if c.is_ascii_digit())
        {
            return Err(self.syntax_error(SyntaxError::LeadingZero));
        }

        self.cursor.skip_while(|c| c.is_ascii_digit());
        Ok(())
    }

    fn open_group(&mut self) -> Result<(), RecognizeError> {
        let depth = self.depth;
        if let Some(max_depth) = self.options.max_depth.filter(|&max| depth >= max) {
            return Err(self.recognize_error(ErrorSource::DepthLimitExceeded(max_depth)));
        }
        self.depth += 1;
        Ok(())
    }

    // ------------------------------------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------------------------------------

    /// The failure primitive: the current lookahead is not in `expected`.
    fn fail(&self, expected: Expected) -> RecognizeError {
        match self.cursor.peek() {
            Peeked::EndOfInput => self.syntax_error(SyntaxError::UnexpectedEndOfInput { expected }),
            Peeked::Char(found) => self.syntax_error(SyntaxError::InvalidCharacter { found, expected }),
        }
    }

    fn syntax_error(&self, err: SyntaxError) -> RecognizeError {
        self.recognize_error(ErrorSource::SyntaxError(err))
    }

    fn recognize_error(&self, source: ErrorSource) -> RecognizeError {
        let err = RecognizeError {
            source,
            offset: self.cursor.offset(),
            line: self.cursor.line(),
            column: self.cursor.column(),
        };
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{err}");
        err
    }
}

/// Returns `true` if `input` is a sentence of the expression grammar.
///
/// Uses [`RecognizerOptions::default`].
///
/// ```rust
/// assert!(ll1check::recognize("12+(3*4)-5/6"));
/// assert!(!ll1check::recognize("1+*2"));
/// ```
#[must_use]
pub fn recognize(input: &str) -> bool {
    check(input).is_ok()
}

/// Like [`recognize`], but reports why the input was rejected.
///
/// # Errors
///
/// Returns the first [`RecognizeError`] encountered.
pub fn check(input: &str) -> Result<(), RecognizeError> {
    Recognizer::new(input, RecognizerOptions::default()).check()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn run_traced(input: &str) -> Outcome {
        Recognizer::new(
            input,
            RecognizerOptions {
                record_derivation: true,
                ..RecognizerOptions::default()
            },
        )
        .run()
    }

    #[test]
    fn single_number_derivation() {
        let outcome = run_traced("42");
        assert!(outcome.is_accepted());
        assert_eq!(
            outcome.derivation,
            vec![
                Production::Expr,
                Production::Term,
                Production::FactorNumber,
                Production::TermTailEmpty,
                Production::ExprTailEmpty,
            ]
        );
    }

    #[test]
    fn derivation_stops_at_failure() {
        let outcome = run_traced("1+");
        assert_eq!(
            outcome.derivation,
            vec![
                Production::Expr,
                Production::Term,
                Production::FactorNumber,
                Production::TermTailEmpty,
                Production::ExprTailAdd,
            ]
        );
        assert_eq!(
            outcome.result.unwrap_err().syntax_error(),
            Some(&SyntaxError::UnexpectedEndOfInput {
                expected: Expected::Operand
            })
        );
    }

    #[test]
    fn derivation_is_not_recorded_by_default() {
        let outcome = Recognizer::new("1+2", RecognizerOptions::default()).run();
        assert!(outcome.is_accepted());
        assert!(outcome.derivation.is_empty());
    }

    #[test]
    fn depth_is_restored_after_group() {
        let options = RecognizerOptions {
            max_depth: Some(1),
            ..RecognizerOptions::default()
        };
        assert!(Recognizer::new("(1)+(2)*(3)", options).check().is_ok());
        let err = Recognizer::new("((1))", options).check().unwrap_err();
        assert_eq!(err.kind(), &ErrorSource::DepthLimitExceeded(1));
        assert_eq!(err.column(), 3);
    }

    #[test]
    fn group_continues_with_term_tail_after_close() {
        let outcome = run_traced("(1)*2");
        assert!(outcome.is_accepted());
        assert_eq!(
            outcome.derivation,
            vec![
                Production::Expr,
                Production::Term,
                Production::FactorGroup,
                Production::Expr,
                Production::Term,
                Production::FactorNumber,
                Production::TermTailEmpty,
                Production::ExprTailEmpty,
                Production::TermTailMul,
                Production::FactorNumber,
                Production::TermTailEmpty,
                Production::ExprTailEmpty,
            ]
        );
    }

    #[test]
    fn unclosed_group_expects_right_paren() {
        let err = check("((1)").unwrap_err();
        assert_eq!(
            err.syntax_error(),
            Some(&SyntaxError::UnexpectedEndOfInput {
                expected: Expected::Symbol(')')
            })
        );
        assert_eq!(err.column(), 5);
    }

    #[test]
    #[should_panic(expected = "invalid character ')'")]
    fn panic_on_error_surfaces_first_failure() {
        let options = RecognizerOptions {
            panic_on_error: true,
            ..RecognizerOptions::default()
        };
        let _ = Recognizer::new("()", options).check();
    }
}
