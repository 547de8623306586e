use crate::ast::Token;
use crate::parser::Violation;
use tracing::trace;

/// Splits a relation expression on a separator, ignoring separators that sit
/// inside square brackets.
///
/// The lexer only knows about bracket depth. It does not validate segments;
/// an empty segment is returned as an empty string and left for the parser to
/// reject.
pub struct Lexer {
    input: Vec<char>,
    separator: char,
    position: usize,
    depth: i64,
    finished: bool,
}

impl Lexer {
    pub fn new(input: &str, separator: char) -> Self {
        Lexer {
            input: input.chars().collect(),
            separator,
            position: 0,
            depth: 0,
            finished: false,
        }
    }

    /// Lexer for a dotted chain (`a.b.[c, d]`).
    pub fn chain(input: &str) -> Self {
        Lexer::new(input, '.')
    }

    /// Lexer for the inside of an array token (`b.c, d`).
    pub fn list(input: &str) -> Self {
        Lexer::new(input, ',')
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Read up to the next separator at depth zero and consume it.
    ///
    /// Reaching the end of input counts as a final separator, so `"a."` yields
    /// `"a"` and then `""`.
    fn read_segment(&mut self) -> String {
        let mut segment = String::new();

        while let Some(ch) = self.current_char() {
            self.advance();
            match ch {
                '[' => self.depth += 1,
                ']' => self.depth -= 1,
                c if c == self.separator && self.depth == 0 => {
                    return segment.trim().to_string();
                }
                _ => {}
            }
            segment.push(ch);
        }

        self.finished = true;
        segment.trim().to_string()
    }

    /// Next trimmed segment, or `None` once the final segment was produced.
    pub fn next_segment(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        let segment = self.read_segment();
        trace!(separator = %self.separator, %segment, depth = self.depth, "segment");
        Some(segment)
    }

    /// Split the whole input into trimmed segments.
    ///
    /// Fails when the brackets of the input do not balance out.
    pub fn segments(mut self) -> Result<Vec<String>, Violation> {
        let mut segments = Vec::new();
        while let Some(segment) = self.next_segment() {
            segments.push(segment);
        }

        if self.depth != 0 {
            return Err(Violation::UnbalancedBrackets);
        }
        Ok(segments)
    }

    /// Split the whole input and classify every segment.
    pub fn tokenize(self) -> Result<Vec<Token>, Violation> {
        Ok(self
            .segments()?
            .iter()
            .map(|segment| Token::classify(segment))
            .collect())
    }
}

#[test]
fn test_split_respects_brackets() {
    let segments = Lexer::chain("a.[b.c, d].e").segments().unwrap();
    assert_eq!(segments, vec!["a", "[b.c, d]", "e"]);
}

#[test]
fn test_trailing_separator_yields_empty_segment() {
    let segments = Lexer::list("a, ").segments().unwrap();
    assert_eq!(segments, vec!["a", ""]);
}

#[test]
fn test_unbalanced() {
    assert_eq!(
        Lexer::chain("a.[b").segments(),
        Err(Violation::UnbalancedBrackets)
    );
}
