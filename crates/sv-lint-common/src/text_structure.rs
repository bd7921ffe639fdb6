//! Post-parse view of one analyzed document.
//!
//! A [`TextStructureView`] owns the source text and everything derived from
//! it: the line table, the token sequence and the syntax tree. It is built
//! once per document by [`parse_string`](crate::parser::parse_string), is
//! immutable for the duration of a lint pass, and outlives every rule that
//! borrows from it.

use crate::parser::error::ParseError;
use crate::parser::lexer::{ByteSpan, Token};
use crate::parser::syntax::SyntaxNode;

/// One physical line handed to line-based lint rules.
///
/// `offset` is the byte offset of the line start in the source, so rules can
/// anchor violations absolutely. `text` excludes the trailing newline.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub text: &'a str,
    /// 0-based line index.
    pub number: usize,
    /// Byte offset of the first character of the line.
    pub offset: usize,
}

/// Immutable post-parse artifact for one document.
#[derive(Debug)]
pub struct TextStructureView {
    source: String,
    /// Byte offset of the start of each line. A source ending in a newline
    /// contributes a final empty line, so `line_column_at(source.len())` is
    /// always resolvable.
    line_offsets: Vec<usize>,
    tokens: Vec<Token>,
    syntax_tree: Option<SyntaxNode>,
    parse_errors: Vec<ParseError>,
}

impl TextStructureView {
    pub(crate) fn new(
        source: String,
        tokens: Vec<Token>,
        syntax_tree: Option<SyntaxNode>,
        parse_errors: Vec<ParseError>,
    ) -> Self {
        let mut line_offsets = vec![0];
        for (index, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_offsets.push(index + 1);
            }
        }
        Self {
            source,
            line_offsets,
            tokens,
            syntax_tree,
            parse_errors,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Root of the syntax tree; absent when parsing failed.
    pub fn syntax_tree(&self) -> Option<&SyntaxNode> {
        self.syntax_tree.as_ref()
    }

    pub fn parse_errors(&self) -> &[ParseError] {
        &self.parse_errors
    }

    /// Lexeme of a token as a view into the source.
    pub fn token_text(&self, token: &Token) -> &str {
        &self.source[token.span.start..token.span.end]
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Byte span of a line, excluding its trailing newline.
    pub fn line_span(&self, index: usize) -> ByteSpan {
        let start = self.line_offsets[index];
        let end = match self.line_offsets.get(index + 1) {
            Some(next) => next - 1,
            None => self.source.len(),
        };
        ByteSpan::new(start, end)
    }

    pub fn line_text(&self, index: usize) -> &str {
        let span = self.line_span(index);
        &self.source[span.start..span.end]
    }

    /// Iterate over all physical lines in order.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        (0..self.line_count()).map(move |number| Line {
            text: self.line_text(number),
            number,
            offset: self.line_offsets[number],
        })
    }

    /// 1-based (line, column) of a byte offset, column counted in bytes.
    pub fn line_column_at(&self, offset: usize) -> (usize, usize) {
        let line = self.line_offsets.partition_point(|&start| start <= offset) - 1;
        (line + 1, offset - self.line_offsets[line] + 1)
    }

    /// The token whose span contains the given byte offset.
    pub fn token_at(&self, offset: usize) -> Option<&Token> {
        let index = self
            .tokens
            .partition_point(|token| token.span.end <= offset);
        self.tokens
            .get(index)
            .filter(|token| token.span.contains(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::TokenKind;
    use crate::parser::parse_string;

    #[test]
    fn test_line_table() {
        let view = parse_string("ab\ncd\n");
        assert_eq!(view.line_count(), 3);
        assert_eq!(view.line_text(0), "ab");
        assert_eq!(view.line_text(1), "cd");
        assert_eq!(view.line_text(2), "");
        assert_eq!(view.line_span(1), ByteSpan::new(3, 5));
    }

    #[test]
    fn test_line_column() {
        let view = parse_string("ab\ncd");
        assert_eq!(view.line_column_at(0), (1, 1));
        assert_eq!(view.line_column_at(1), (1, 2));
        assert_eq!(view.line_column_at(3), (2, 1));
        assert_eq!(view.line_column_at(4), (2, 2));
        // End of source resolves to one past the last column.
        assert_eq!(view.line_column_at(5), (2, 3));
    }

    #[test]
    fn test_empty_source_has_one_line() {
        let view = parse_string("");
        assert_eq!(view.line_count(), 1);
        assert_eq!(view.line_text(0), "");
        assert_eq!(view.line_column_at(0), (1, 1));
    }

    #[test]
    fn test_token_text_is_a_source_view() {
        let view = parse_string("wire w;");
        let token = view.tokens()[2];
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(view.token_text(&token), "w");
        let text_ptr = view.token_text(&token).as_ptr() as usize;
        let source_ptr = view.source().as_ptr() as usize;
        assert_eq!(text_ptr, source_ptr + token.span.start);
    }

    #[test]
    fn test_token_at() {
        let view = parse_string("wire w;");
        assert_eq!(view.token_at(0).unwrap().kind, TokenKind::Keyword);
        assert_eq!(view.token_at(4).unwrap().kind, TokenKind::Whitespace);
        assert_eq!(view.token_at(5).unwrap().kind, TokenKind::Identifier);
        assert_eq!(view.token_at(6).unwrap().kind, TokenKind::Semicolon);
        assert!(view.token_at(7).is_none());
    }

    #[test]
    fn test_lines_iterator_offsets() {
        let view = parse_string("a\nbb\n");
        let lines: Vec<_> = view.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!((lines[1].text, lines[1].number, lines[1].offset), ("bb", 1, 2));
    }
}
