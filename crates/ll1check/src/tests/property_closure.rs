use alloc::format;

use quickcheck::QuickCheck;

use super::arbitrary::{Number, Operator, Sentence};
use crate::recognize;

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: every literal without leading zeros is a sentence.
#[test]
fn bare_numbers_are_sentences() {
    fn prop(number: Number) -> bool {
        recognize(&number.0)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Number) -> bool);
}

/// Property: sentences are closed under every binary operator and under
/// parenthesisation.
#[test]
fn closure_under_productions() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(lhs: Sentence, op: Operator, rhs: Sentence) -> bool {
        let (lhs, rhs) = (lhs.0, rhs.0);
        recognize(&lhs)
            && recognize(&rhs)
            && recognize(&format!("{lhs}{}{rhs}", op.0))
            && recognize(&format!("({lhs})"))
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Sentence, Operator, Sentence) -> bool);
}

/// Property: a sentence followed by a dangling operator, an extra `)` or an
/// unclosed `(` is never a sentence.
#[test]
fn unbalanced_or_dangling_suffixes_are_rejected() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(s: Sentence, op: Operator) -> bool {
        let s = s.0;
        !recognize(&format!("{s}{}", op.0))
            && !recognize(&format!("{s})"))
            && !recognize(&format!("({s}"))
            && !recognize(&format!("{}{s}", op.0))
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Sentence, Operator) -> bool);
}

#[quickcheck_macros::quickcheck]
fn arbitrary_text_never_panics(input: alloc::string::String) -> bool {
    let _ = recognize(&input);
    true
}
