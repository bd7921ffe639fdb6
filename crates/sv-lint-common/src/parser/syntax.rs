//! Concrete syntax tree types.
//!
//! The tree has exactly two node variants: a tagged branch holding an ordered
//! list of child slots (slots may be empty), and a leaf holding a token.
//! Every token of the source, trivia included, appears as a leaf somewhere in
//! the tree, so the original text is recoverable from a traversal.

use super::lexer::{Token, TokenKind};

/// Nonterminal tag carried by every branch node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeTag {
    /// Root of the tree.
    SourceText,
    ModuleDeclaration,
    PackageDeclaration,
    ClassDeclaration,
    /// Everything from the introducing keyword through the header `;`.
    DeclarationHeader,
    /// Body items between a declaration header and its end keyword.
    ItemList,
    /// Optional `: name` label after an end keyword.
    EndLabel,
    /// A `` `define `` and its body up to the end of the (continued) line.
    MacroDefinition,
}

/// A node of the concrete syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Branch(SyntaxBranch),
    Leaf(Token),
}

impl SyntaxNode {
    /// The branch tag, or `None` for leaves.
    pub fn tag(&self) -> Option<NodeTag> {
        match self {
            SyntaxNode::Branch(branch) => Some(branch.tag),
            SyntaxNode::Leaf(_) => None,
        }
    }

    pub fn as_branch(&self) -> Option<&SyntaxBranch> {
        match self {
            SyntaxNode::Branch(branch) => Some(branch),
            SyntaxNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Token> {
        match self {
            SyntaxNode::Branch(_) => None,
            SyntaxNode::Leaf(token) => Some(token),
        }
    }
}

/// A tagged nonterminal with ordered child slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxBranch {
    pub tag: NodeTag,
    pub children: Vec<Option<SyntaxNode>>,
}

impl SyntaxBranch {
    pub fn new(tag: NodeTag) -> Self {
        Self {
            tag,
            children: Vec::new(),
        }
    }

    /// Append a filled child slot.
    pub fn push(&mut self, child: SyntaxNode) {
        self.children.push(Some(child));
    }

    /// Append a leaf child.
    pub fn push_leaf(&mut self, token: Token) {
        self.push(SyntaxNode::Leaf(token));
    }

    /// Iterate over filled child slots.
    pub fn children(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().flatten()
    }

    /// First direct leaf child of the given kind.
    pub fn find_leaf(&self, kind: TokenKind) -> Option<&Token> {
        self.children()
            .filter_map(SyntaxNode::as_leaf)
            .find(|token| token.kind == kind)
    }

    /// Direct branch children carrying the given tag.
    pub fn branches_tagged(&self, tag: NodeTag) -> impl Iterator<Item = &SyntaxBranch> {
        self.children()
            .filter_map(SyntaxNode::as_branch)
            .filter(move |branch| branch.tag == tag)
    }
}
