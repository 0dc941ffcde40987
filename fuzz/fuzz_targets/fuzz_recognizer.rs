#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ll1check::{Recognizer, RecognizerOptions};

/// A sentence of the grammar, built structurally so it is valid by
/// construction.
#[derive(Debug, Arbitrary)]
enum Expr {
    Number(u64),
    Group(Box<Expr>),
    Binary(Box<Expr>, Op, Box<Expr>),
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Expr {
    fn render(&self, out: &mut String) {
        match self {
            Expr::Number(n) => out.push_str(&n.to_string()),
            Expr::Group(inner) => {
                out.push('(');
                inner.render(out);
                out.push(')');
            }
            Expr::Binary(lhs, op, rhs) => {
                lhs.render(out);
                out.push(match op {
                    Op::Add => '+',
                    Op::Sub => '-',
                    Op::Mul => '*',
                    Op::Div => '/',
                });
                rhs.render(out);
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            Expr::Number(_) => 0,
            Expr::Group(inner) => inner.depth() + 1,
            Expr::Binary(lhs, _, rhs) => lhs.depth().max(rhs.depth()),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    sentence: Expr,
    raw: &'a str,
    allow_leading_zeros: bool,
    max_depth: Option<u8>,
}

fuzz_target!(|input: Input<'_>| {
    let options = RecognizerOptions {
        allow_leading_zeros: input.allow_leading_zeros,
        max_depth: input.max_depth.map(usize::from),
        panic_on_error: false,
        ..RecognizerOptions::default()
    };

    // Arbitrary text must never panic.
    let _ = Recognizer::new(input.raw, options).check();

    // Generated sentences are accepted unless they nest beyond a set limit.
    let mut sentence = String::new();
    input.sentence.render(&mut sentence);
    let accepted = Recognizer::new(&sentence, options).check().is_ok();
    assert_eq!(
        accepted,
        options
            .max_depth
            .is_none_or(|max| input.sentence.depth() <= max),
        "{sentence:?}"
    );
});
