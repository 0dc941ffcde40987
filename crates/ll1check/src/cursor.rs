#![expect(clippy::inline_always)]

/// Represents a peeked character from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Peeked {
    /// Some character
    Char(char),
    /// The virtual end marker past the last character. Never consumed.
    EndOfInput,
}

/// Forward-only position in the program text.
///
/// The text itself is never copied or mutated; consuming a character only
/// moves `byte` forward. `offset`, `line` and `column` describe the next
/// unconsumed character and exist for error reporting.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'src> {
    text: &'src str,
    byte: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(text: &'src str) -> Self {
        Self {
            text,
            byte: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Peeked {
        match self.text[self.byte..].chars().next() {
            Some(ch) => Peeked::Char(ch),
            None => Peeked::EndOfInput,
        }
    }

    /// Consumes and returns the next character, or `None` at the end marker.
    #[inline(always)]
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.text[self.byte..].chars().next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.byte += ch.len_utf8();
        self.offset += 1;
        Some(ch)
    }

    /// Consumes characters while `predicate` holds and returns how many.
    #[inline]
    pub(crate) fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let mut skipped = 0;
        while let Peeked::Char(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.advance();
            skipped += 1;
        }
        skipped
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn column(&self) -> usize {
        self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_consume() {
        let cursor = Cursor::new("12");
        assert_eq!(cursor.peek(), Peeked::Char('1'));
        assert_eq!(cursor.peek(), Peeked::Char('1'));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn end_marker_is_never_consumed() {
        let mut cursor = Cursor::new("7");
        assert_eq!(cursor.advance(), Some('7'));
        assert_eq!(cursor.peek(), Peeked::EndOfInput);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn empty_input_peeks_end_marker() {
        let cursor = Cursor::new("");
        assert_eq!(cursor.peek(), Peeked::EndOfInput);
    }

    #[test]
    fn skip_while_stops_at_first_mismatch() {
        let mut cursor = Cursor::new("1234+5");
        assert_eq!(cursor.skip_while(|c| c.is_ascii_digit()), 4);
        assert_eq!(cursor.peek(), Peeked::Char('+'));
        assert_eq!(cursor.column(), 5);
    }

    #[test]
    fn tracks_lines_and_multibyte_characters() {
        let mut cursor = Cursor::new("é\n1");
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        assert_eq!(cursor.peek(), Peeked::Char('1'));
        assert_eq!(cursor.offset(), 2);
    }
}
