//! The four lint-rule capabilities and their shared base contract.
//!
//! A rule type implements exactly one tier trait. Instances are single-use:
//! created per document, fed input by exactly one engine, asked once for
//! their status via [`LintRule::report`], then dropped. Statelessness across
//! documents is guaranteed by construction, not by reset methods.

use super::configuration::{ConfigurationError, RuleParameters};
use super::descriptor::LintRuleDescriptor;
use super::violation::LintRuleStatus;
use crate::parser::lexer::Token;
use crate::parser::syntax::{NodeTag, SyntaxNode};
use crate::text_structure::{Line, TextStructureView};

/// Capabilities common to every tier.
pub trait LintRule {
    /// The rule's process-wide descriptor.
    fn descriptor(&self) -> &'static LintRuleDescriptor;

    /// Parse and adopt a configuration string (see
    /// [`RuleParameters::parse`]). The default implementation validates the
    /// string against the descriptor's schema, so rules without options
    /// reject any option eagerly.
    fn configure(&mut self, configuration: &str) -> Result<(), ConfigurationError> {
        RuleParameters::parse(self.descriptor(), configuration).map(|_| ())
    }

    /// Produce the rule's status. Called exactly once, after all input has
    /// been delivered; the rule is spent afterwards. Rules may still emit
    /// violations here, e.g. to flush an unterminated construct.
    fn report(&mut self) -> LintRuleStatus;
}

/// Receives each physical line in ascending order.
pub trait LineLintRule: LintRule {
    fn handle_line(&mut self, line: &Line<'_>);
}

/// Receives each token in stream order. No end-of-stream sentinel is
/// synthesized; `report` is the flush point.
pub trait TokenStreamLintRule: LintRule {
    fn handle_token(&mut self, token: &Token, lexeme: &str);
}

/// Receives each syntax-tree node in depth-first pre-order. `context` holds
/// the ancestor branch tags from the root to the node's parent and is only
/// valid for the duration of the call.
pub trait SyntaxTreeLintRule: LintRule {
    fn handle_node(&mut self, node: &SyntaxNode, context: &[NodeTag]);
}

/// Receives the whole parsed artifact exactly once. For rules that must
/// cross the line/token/tree boundary.
pub trait TextStructureLintRule: LintRule {
    fn lint(&mut self, text_structure: &TextStructureView, filename: &str);
}

/// The dispatch discipline a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RuleTier {
    Line,
    TokenStream,
    SyntaxTree,
    TextStructure,
}

impl RuleTier {
    pub fn name(&self) -> &'static str {
        match self {
            RuleTier::Line => "line",
            RuleTier::TokenStream => "token-stream",
            RuleTier::SyntaxTree => "syntax-tree",
            RuleTier::TextStructure => "text-structure",
        }
    }
}

/// A boxed rule of any tier, as produced by a registry factory.
pub enum AnyRule {
    Line(Box<dyn LineLintRule>),
    TokenStream(Box<dyn TokenStreamLintRule>),
    SyntaxTree(Box<dyn SyntaxTreeLintRule>),
    TextStructure(Box<dyn TextStructureLintRule>),
}

impl std::fmt::Debug for AnyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyRule")
            .field("tier", &self.tier())
            .field("name", &self.descriptor().name)
            .finish()
    }
}

impl AnyRule {
    pub fn tier(&self) -> RuleTier {
        match self {
            AnyRule::Line(_) => RuleTier::Line,
            AnyRule::TokenStream(_) => RuleTier::TokenStream,
            AnyRule::SyntaxTree(_) => RuleTier::SyntaxTree,
            AnyRule::TextStructure(_) => RuleTier::TextStructure,
        }
    }

    pub fn descriptor(&self) -> &'static LintRuleDescriptor {
        match self {
            AnyRule::Line(rule) => rule.descriptor(),
            AnyRule::TokenStream(rule) => rule.descriptor(),
            AnyRule::SyntaxTree(rule) => rule.descriptor(),
            AnyRule::TextStructure(rule) => rule.descriptor(),
        }
    }

    pub fn configure(&mut self, configuration: &str) -> Result<(), ConfigurationError> {
        match self {
            AnyRule::Line(rule) => rule.configure(configuration),
            AnyRule::TokenStream(rule) => rule.configure(configuration),
            AnyRule::SyntaxTree(rule) => rule.configure(configuration),
            AnyRule::TextStructure(rule) => rule.configure(configuration),
        }
    }
}
