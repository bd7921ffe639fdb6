//! Core types and parser for sv-lint
//!
//! This crate provides the functionality shared between the sv-lint CLI and
//! any embedding tool:
//! - SystemVerilog front end (lexer + syntax-tree builder)
//! - the per-document [`TextStructureView`]
//! - the four tier-specific linter engines and their rule traits
//! - violation, auto-fix and diagnostic types with the aggregator
//! - rule descriptors, the configuration grammar, and the registry
//! - the rule test harness
//! - project configuration (`.sv-lint.toml`)

pub mod analysis;
pub mod config;
pub mod parser;
pub mod text_structure;

// Re-export commonly used types
pub use analysis::{
    apply_fix_plan, collect_diagnostics, plan_fixes, AnyRule, AutoFix, ConfigurationError,
    Diagnostic, FixPlan, InternalDiagnostic, LineLintRule, LintEngine, LintRule,
    LintRuleDescriptor, LintRuleStatus, LintRun, LintViolation, ParameterDescriptor,
    ParameterType, RuleParameters, RuleRegistration, RuleRegistry, RuleTier, Severity,
    SyntaxTreeLintRule, TextEdit, TextStructureLintRule, TokenStreamLintRule,
};
pub use config::{ColorConfig, ColorMode, ConfigError, LintConfig, RuleConfig};
pub use parser::error::ParseError;
pub use parser::lexer::{ByteSpan, Token, TokenKind};
pub use parser::parse_string;
pub use parser::syntax::{NodeTag, SyntaxBranch, SyntaxNode};
pub use text_structure::{Line, TextStructureView};
