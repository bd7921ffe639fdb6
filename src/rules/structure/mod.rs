pub mod module_filename;
pub mod no_nested_modules;

pub use module_filename::ModuleFilename;
pub use no_nested_modules::NoNestedModules;

use sv_lint_common::parser::lexer::{Token, TokenKind};
use sv_lint_common::parser::syntax::{NodeTag, SyntaxBranch};

/// Name token of a module/package/class declaration branch: the first
/// identifier in its header.
pub(crate) fn declaration_name(declaration: &SyntaxBranch) -> Option<&Token> {
    declaration
        .branches_tagged(NodeTag::DeclarationHeader)
        .next()
        .and_then(|header| header.find_leaf(TokenKind::Identifier))
}

/// Identifier token of a declaration's `endmodule : name` style label.
pub(crate) fn end_label_name(declaration: &SyntaxBranch) -> Option<&Token> {
    declaration
        .branches_tagged(NodeTag::EndLabel)
        .next()
        .and_then(|label| label.find_leaf(TokenKind::Identifier))
}
