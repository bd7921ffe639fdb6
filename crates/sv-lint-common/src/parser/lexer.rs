//! Lexer for SystemVerilog source text.
//!
//! The lexer never fails: bytes it cannot classify become [`TokenKind::Unknown`]
//! tokens, and unterminated strings or block comments extend to the end of the
//! line or file. Trivia (whitespace, newlines, comments, line continuations) is
//! emitted as ordinary tokens so that downstream passes see the complete stream.

/// Half-open byte range `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteSpan {
    pub start: usize,
    pub end: usize,
}

impl ByteSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn overlaps(&self, other: &ByteSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Classification of a lexed token.
///
/// Only the handful of keywords the syntax-tree builder cares about get their
/// own kind; every other reserved word collapses into [`TokenKind::Keyword`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    StringLiteral,
    Module,
    Endmodule,
    Package,
    Endpackage,
    Class,
    Endclass,
    Keyword,
    /// `` `define ``
    MacroDefine,
    /// `` `include ``
    MacroInclude,
    /// Any other `` `name `` usage.
    MacroIdentifier,
    Semicolon,
    Colon,
    Comma,
    Dot,
    Hash,
    LParen,
    RParen,
    /// Any other punctuation character.
    Symbol,
    Whitespace,
    Newline,
    /// A backslash immediately followed by a newline.
    LineContinuation,
    Comment,
    Unknown,
}

/// A single lexed token: a kind plus a byte range into the source.
///
/// Tokens never own text; the lexeme is resolved through
/// [`TextStructureView::token_text`](crate::text_structure::TextStructureView::token_text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: ByteSpan,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: ByteSpan::new(start, end),
        }
    }
}

/// Reserved words that do not influence tree building.
const KEYWORDS: &[&str] = &[
    "always", "always_comb", "always_ff", "always_latch", "assign", "automatic", "begin", "bit",
    "byte", "case", "casex", "casez", "const", "default", "else", "end", "endcase", "endfunction",
    "endgenerate", "endinterface", "endtask", "enum", "extern", "for", "foreach", "function",
    "generate", "genvar", "if", "initial", "inout", "input", "int", "integer", "interface",
    "localparam", "logic", "longint", "negedge", "output", "parameter", "posedge", "real", "reg",
    "return", "shortint", "signed", "static", "string", "struct", "task", "typedef", "union",
    "unsigned", "virtual", "void", "while", "wire",
];

fn keyword_kind(word: &str) -> TokenKind {
    match word {
        "module" | "macromodule" => TokenKind::Module,
        "endmodule" => TokenKind::Endmodule,
        "package" => TokenKind::Package,
        "endpackage" => TokenKind::Endpackage,
        "class" => TokenKind::Class,
        "endclass" => TokenKind::Endclass,
        _ if KEYWORDS.binary_search(&word).is_ok() => TokenKind::Keyword,
        _ => TokenKind::Identifier,
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Tokenizer over a source string.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Consume the whole input and return the token stream.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes().get(self.pos + ahead).copied()
    }

    fn next_token(&mut self) -> Option<Token> {
        let start = self.pos;
        let b = self.peek(0)?;
        let kind = match b {
            b'\n' => {
                self.pos += 1;
                TokenKind::Newline
            }
            b' ' | b'\t' | b'\r' => {
                while matches!(self.peek(0), Some(b' ' | b'\t' | b'\r')) {
                    self.pos += 1;
                }
                TokenKind::Whitespace
            }
            b'\\' => self.lex_backslash(),
            b'/' => match self.peek(1) {
                Some(b'/') => {
                    while !matches!(self.peek(0), Some(b'\n') | None) {
                        self.pos += 1;
                    }
                    TokenKind::Comment
                }
                Some(b'*') => {
                    self.pos += 2;
                    while self.peek(0).is_some() {
                        if self.peek(0) == Some(b'*') && self.peek(1) == Some(b'/') {
                            self.pos += 2;
                            break;
                        }
                        self.advance_char();
                    }
                    TokenKind::Comment
                }
                _ => {
                    self.pos += 1;
                    TokenKind::Symbol
                }
            },
            b'"' => self.lex_string(),
            b'`' => self.lex_macro(),
            b'$' => {
                self.pos += 1;
                while self.peek(0).is_some_and(is_ident_char) {
                    self.pos += 1;
                }
                TokenKind::Identifier
            }
            b'\'' => {
                // Based literals such as 'b1010 or the fill literals '0 / '1.
                self.pos += 1;
                if self.peek(0).is_some_and(|c| c.is_ascii_alphanumeric()) {
                    self.lex_number_tail();
                    TokenKind::Number
                } else {
                    TokenKind::Symbol
                }
            }
            b'0'..=b'9' => {
                self.lex_number_tail();
                TokenKind::Number
            }
            _ if is_ident_start(b) => {
                while self.peek(0).is_some_and(is_ident_char) {
                    self.pos += 1;
                }
                keyword_kind(&self.source[start..self.pos])
            }
            b';' => {
                self.pos += 1;
                TokenKind::Semicolon
            }
            b':' => {
                self.pos += 1;
                TokenKind::Colon
            }
            b',' => {
                self.pos += 1;
                TokenKind::Comma
            }
            b'.' => {
                self.pos += 1;
                TokenKind::Dot
            }
            b'#' => {
                self.pos += 1;
                TokenKind::Hash
            }
            b'(' => {
                self.pos += 1;
                TokenKind::LParen
            }
            b')' => {
                self.pos += 1;
                TokenKind::RParen
            }
            _ if b.is_ascii_punctuation() => {
                self.pos += 1;
                TokenKind::Symbol
            }
            _ => {
                self.advance_char();
                TokenKind::Unknown
            }
        };
        Some(Token::new(kind, start, self.pos))
    }

    /// Advance past one character, honoring UTF-8 boundaries.
    fn advance_char(&mut self) {
        let mut next = self.pos + 1;
        while next < self.source.len() && !self.source.is_char_boundary(next) {
            next += 1;
        }
        self.pos = next;
    }

    fn lex_backslash(&mut self) -> TokenKind {
        if self.peek(1) == Some(b'\n') {
            self.pos += 2;
            return TokenKind::LineContinuation;
        }
        if self.peek(1) == Some(b'\r') && self.peek(2) == Some(b'\n') {
            self.pos += 3;
            return TokenKind::LineContinuation;
        }
        // Escaped identifier: backslash followed by anything up to whitespace.
        self.pos += 1;
        while self
            .peek(0)
            .is_some_and(|c| !c.is_ascii_whitespace())
        {
            self.pos += 1;
        }
        TokenKind::Identifier
    }

    fn lex_string(&mut self) -> TokenKind {
        self.pos += 1;
        loop {
            match self.peek(0) {
                // Unterminated string stops at end of line.
                None | Some(b'\n') => break,
                Some(b'\\') if self.peek(1).is_some() => self.pos += 2,
                Some(b'"') => {
                    self.pos += 1;
                    break;
                }
                _ => self.advance_char(),
            }
        }
        TokenKind::StringLiteral
    }

    fn lex_macro(&mut self) -> TokenKind {
        let word_start = self.pos + 1;
        self.pos += 1;
        while self.peek(0).is_some_and(is_ident_char) {
            self.pos += 1;
        }
        match &self.source[word_start..self.pos] {
            "" => TokenKind::Symbol,
            "define" => TokenKind::MacroDefine,
            "include" => TokenKind::MacroInclude,
            _ => TokenKind::MacroIdentifier,
        }
    }

    fn lex_number_tail(&mut self) {
        while self
            .peek(0)
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_' || c == b'\'')
        {
            self.pos += 1;
        }
    }
}
