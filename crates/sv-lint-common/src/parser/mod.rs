//! SystemVerilog front end: lexer and syntax-tree builder.
//!
//! This is deliberately a subset parser. It recognizes the constructs the lint
//! engines need structure for (module / package / class declarations, end
//! labels, `` `define `` macros) and keeps everything else as token leaves.
//! Any directive-like or expression-level content is preserved verbatim in the
//! tree, so rules that care about it can inspect tokens directly.

pub mod error;
pub mod lexer;
pub mod syntax;

use error::{ParseError, ParseResult};
use lexer::{Lexer, Token, TokenKind};
use syntax::{NodeTag, SyntaxBranch, SyntaxNode};

use crate::text_structure::TextStructureView;

/// Lex and parse a source string into a [`TextStructureView`].
///
/// This never fails: on a parse error the view carries the full token stream
/// and line table but no syntax tree, and the error is recorded on the view.
pub fn parse_string(source: &str) -> TextStructureView {
    let tokens = Lexer::new(source).tokenize();
    let mut parser = Parser::new(&tokens);
    let (tree, errors) = match parser.parse() {
        Ok(tree) => (Some(tree), Vec::new()),
        Err(error) => (None, vec![error]),
    };
    TextStructureView::new(source.to_string(), tokens, tree, errors)
}

/// Recursive-descent builder over a lexed token slice.
struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    fn parse(&mut self) -> ParseResult<SyntaxNode> {
        let mut root = SyntaxBranch::new(NodeTag::SourceText);
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Module => {
                    root.push(self.parse_declaration(
                        NodeTag::ModuleDeclaration,
                        TokenKind::Endmodule,
                        "module declaration",
                    )?);
                }
                TokenKind::Package => {
                    root.push(self.parse_declaration(
                        NodeTag::PackageDeclaration,
                        TokenKind::Endpackage,
                        "package declaration",
                    )?);
                }
                TokenKind::Class => {
                    root.push(self.parse_declaration(
                        NodeTag::ClassDeclaration,
                        TokenKind::Endclass,
                        "class declaration",
                    )?);
                }
                TokenKind::MacroDefine => root.push(self.parse_macro_definition()),
                TokenKind::Endmodule | TokenKind::Endpackage | TokenKind::Endclass => {
                    return Err(ParseError::UnmatchedEnd {
                        keyword: end_keyword_text(token.kind),
                        offset: token.span.start,
                    });
                }
                _ => root.push_leaf(self.advance()),
            }
        }
        Ok(SyntaxNode::Branch(root))
    }

    /// Parse `<keyword> … ; <items> <end-keyword> [: name]`.
    ///
    /// Child slots are fixed: header, item list, end keyword, optional label.
    fn parse_declaration(
        &mut self,
        tag: NodeTag,
        end_kind: TokenKind,
        construct: &'static str,
    ) -> ParseResult<SyntaxNode> {
        let start_offset = self.peek().map(|t| t.span.start).unwrap_or_default();

        let mut header = SyntaxBranch::new(NodeTag::DeclarationHeader);
        header.push_leaf(self.advance());
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Semicolon => {
                    header.push_leaf(self.advance());
                    break;
                }
                // Tolerate a missing header semicolon rather than swallowing
                // the end keyword or a nested declaration into the header.
                kind if is_declaration_start(kind) || is_end_keyword(kind) => break,
                _ => header.push_leaf(self.advance()),
            }
        }

        let mut items = SyntaxBranch::new(NodeTag::ItemList);
        loop {
            let Some(token) = self.peek() else {
                return Err(ParseError::Unterminated {
                    construct,
                    offset: start_offset,
                });
            };
            match token.kind {
                kind if kind == end_kind => break,
                TokenKind::Module => items.push(self.parse_declaration(
                    NodeTag::ModuleDeclaration,
                    TokenKind::Endmodule,
                    "module declaration",
                )?),
                TokenKind::Package => items.push(self.parse_declaration(
                    NodeTag::PackageDeclaration,
                    TokenKind::Endpackage,
                    "package declaration",
                )?),
                TokenKind::Class => items.push(self.parse_declaration(
                    NodeTag::ClassDeclaration,
                    TokenKind::Endclass,
                    "class declaration",
                )?),
                TokenKind::MacroDefine => items.push(self.parse_macro_definition()),
                kind if is_end_keyword(kind) => {
                    return Err(ParseError::UnmatchedEnd {
                        keyword: end_keyword_text(kind),
                        offset: token.span.start,
                    });
                }
                _ => items.push_leaf(self.advance()),
            }
        }
        let end_leaf = self.advance();
        let label = self.try_parse_end_label();

        let declaration = SyntaxBranch {
            tag,
            children: vec![
                Some(SyntaxNode::Branch(header)),
                Some(SyntaxNode::Branch(items)),
                Some(SyntaxNode::Leaf(end_leaf)),
                label.map(SyntaxNode::Branch),
            ],
        };
        Ok(SyntaxNode::Branch(declaration))
    }

    /// Consume `: name` (with interleaved trivia) if present.
    fn try_parse_end_label(&mut self) -> Option<SyntaxBranch> {
        let checkpoint = self.pos;
        let mut label = SyntaxBranch::new(NodeTag::EndLabel);

        self.collect_trivia(&mut label);
        if self.peek().map(|t| t.kind) != Some(TokenKind::Colon) {
            self.pos = checkpoint;
            return None;
        }
        label.push_leaf(self.advance());

        self.collect_trivia(&mut label);
        if self.peek().map(|t| t.kind) != Some(TokenKind::Identifier) {
            self.pos = checkpoint;
            return None;
        }
        label.push_leaf(self.advance());
        Some(label)
    }

    fn collect_trivia(&mut self, into: &mut SyntaxBranch) {
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Whitespace | TokenKind::Comment => into.push_leaf(self.advance()),
                _ => break,
            }
        }
    }

    /// Consume `` `define `` and its body through the end of the line,
    /// following line continuations.
    fn parse_macro_definition(&mut self) -> SyntaxNode {
        let mut definition = SyntaxBranch::new(NodeTag::MacroDefinition);
        definition.push_leaf(self.advance());
        while let Some(token) = self.peek() {
            if token.kind == TokenKind::Newline {
                break;
            }
            definition.push_leaf(self.advance());
        }
        SyntaxNode::Branch(definition)
    }
}

fn is_declaration_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Module | TokenKind::Package | TokenKind::Class
    )
}

fn is_end_keyword(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Endmodule | TokenKind::Endpackage | TokenKind::Endclass
    )
}

fn end_keyword_text(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Endmodule => "endmodule",
        TokenKind::Endpackage => "endpackage",
        TokenKind::Endclass => "endclass",
        _ => "end",
    }
}
