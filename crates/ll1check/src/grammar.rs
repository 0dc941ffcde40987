//! The expression grammar and its LL(1) prediction table.
//!
//! ```text
//! E   -> T E'
//! E'  -> '+' T E' | '-' T E' | ε
//! T   -> F T'
//! T'  -> '*' F T' | '/' F T' | ε
//! F   -> number | '(' E ')'
//! ```
//!
//! Left recursion has already been eliminated, so every decision can be made
//! from a single character of lookahead. [`predict`] is the parsing table:
//! given the non-terminal being expanded and the classified lookahead, it
//! returns the only production that can succeed, or `None`.

use core::fmt;

use crate::{cursor::Peeked, error::Expected};

/// A grammar symbol that expands into other symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    /// `E`, an expression.
    Expr,
    /// `E'`, the additive continuation of an expression.
    ExprTail,
    /// `T`, a term.
    Term,
    /// `T'`, the multiplicative continuation of a term.
    TermTail,
    /// `F`, a number or parenthesised expression.
    Factor,
}

impl NonTerminal {
    /// Lookaheads accepted when expanding this non-terminal.
    ///
    /// For the nullable tails this is FIRST ∪ FOLLOW.
    #[must_use]
    pub fn expected(self) -> Expected {
        match self {
            NonTerminal::Expr | NonTerminal::Term | NonTerminal::Factor => Expected::Operand,
            NonTerminal::ExprTail => Expected::AdditiveOperator,
            NonTerminal::TermTail => Expected::Operator,
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NonTerminal::Expr => "E",
            NonTerminal::ExprTail => "E'",
            NonTerminal::Term => "T",
            NonTerminal::TermTail => "T'",
            NonTerminal::Factor => "F",
        })
    }
}

/// One alternative of a grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Production {
    /// `E -> T E'`
    Expr,
    /// `E' -> + T E'`
    ExprTailAdd,
    /// `E' -> - T E'`
    ExprTailSub,
    /// `E' -> ε`
    ExprTailEmpty,
    /// `T -> F T'`
    Term,
    /// `T' -> * F T'`
    TermTailMul,
    /// `T' -> / F T'`
    TermTailDiv,
    /// `T' -> ε`
    TermTailEmpty,
    /// `F -> number`
    FactorNumber,
    /// `F -> ( E )`
    FactorGroup,
}

impl Production {
    /// The non-terminal on the left-hand side.
    #[must_use]
    pub fn lhs(self) -> NonTerminal {
        match self {
            Production::Expr => NonTerminal::Expr,
            Production::ExprTailAdd | Production::ExprTailSub | Production::ExprTailEmpty => {
                NonTerminal::ExprTail
            }
            Production::Term => NonTerminal::Term,
            Production::TermTailMul | Production::TermTailDiv | Production::TermTailEmpty => {
                NonTerminal::TermTail
            }
            Production::FactorNumber | Production::FactorGroup => NonTerminal::Factor,
        }
    }

    /// The right-hand side, as written in the grammar.
    #[must_use]
    pub fn rhs(self) -> &'static str {
        match self {
            Production::Expr => "T E'",
            Production::ExprTailAdd => "+ T E'",
            Production::ExprTailSub => "- T E'",
            Production::ExprTailEmpty | Production::TermTailEmpty => "ε",
            Production::Term => "F T'",
            Production::TermTailMul => "* F T'",
            Production::TermTailDiv => "/ F T'",
            Production::FactorNumber => "number",
            Production::FactorGroup => "( E )",
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.lhs(), self.rhs())
    }
}

/// A terminal consumed by the recognizer's `expect` primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Terminal {
    /// A run of digits.
    Number,
    /// One of `+ - * / ( )`.
    Symbol(char),
}

/// The lookahead character, classified for table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    /// `0`-`9`
    Digit,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// The end marker.
    EndOfInput,
    /// Anything else.
    Other(char),
}

impl Lookahead {
    pub(crate) fn classify(peeked: Peeked) -> Self {
        match peeked {
            Peeked::EndOfInput => Lookahead::EndOfInput,
            Peeked::Char(c) => Self::from_char(c),
        }
    }

    /// Classifies a single input character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        match c {
            '0'..='9' => Lookahead::Digit,
            '(' => Lookahead::LeftParen,
            ')' => Lookahead::RightParen,
            '+' => Lookahead::Plus,
            '-' => Lookahead::Minus,
            '*' => Lookahead::Star,
            '/' => Lookahead::Slash,
            c => Lookahead::Other(c),
        }
    }
}

/// The LL(1) parsing table.
///
/// Returns the production to expand `nt` with when the next character is
/// `lookahead`, or `None` when no production applies.
#[must_use]
pub fn predict(nt: NonTerminal, lookahead: Lookahead) -> Option<Production> {
    use Lookahead as L;

    match (nt, lookahead) {
        (NonTerminal::Expr, L::Digit | L::LeftParen) => Some(Production::Expr),

        (NonTerminal::ExprTail, L::Plus) => Some(Production::ExprTailAdd),
        (NonTerminal::ExprTail, L::Minus) => Some(Production::ExprTailSub),
        (NonTerminal::ExprTail, L::RightParen | L::EndOfInput) => Some(Production::ExprTailEmpty),

        (NonTerminal::Term, L::Digit | L::LeftParen) => Some(Production::Term),

        (NonTerminal::TermTail, L::Star) => Some(Production::TermTailMul),
        (NonTerminal::TermTail, L::Slash) => Some(Production::TermTailDiv),
        (NonTerminal::TermTail, L::Plus | L::Minus | L::RightParen | L::EndOfInput) => {
            Some(Production::TermTailEmpty)
        }

        (NonTerminal::Factor, L::Digit) => Some(Production::FactorNumber),
        (NonTerminal::Factor, L::LeftParen) => Some(Production::FactorGroup),

        _ => None,
    }
}
