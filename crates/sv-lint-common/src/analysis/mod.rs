//! The lint-execution core: rule capabilities, the four dispatch engines,
//! the violation/auto-fix model, configuration, and the test harness.

pub mod aggregator;
pub mod configuration;
pub mod descriptor;
pub mod engine;
pub mod line_linter;
pub mod registry;
pub mod rule;
pub mod syntax_tree_linter;
pub mod testing;
pub mod text_structure_linter;
pub mod token_stream_linter;
pub mod violation;

pub use aggregator::{
    apply_fix_plan, collect_diagnostics, plan_fixes, Diagnostic, FixPlan, InternalDiagnostic,
    SkippedFix,
};
pub use configuration::{ConfigurationError, ParameterValue, RuleParameters};
pub use descriptor::{LintRuleDescriptor, ParameterDescriptor, ParameterType};
pub use engine::{LintEngine, LintRun};
pub use line_linter::LineLinter;
pub use registry::{RuleFactory, RuleRegistration, RuleRegistry};
pub use rule::{
    AnyRule, LineLintRule, LintRule, RuleTier, SyntaxTreeLintRule, TextStructureLintRule,
    TokenStreamLintRule,
};
pub use syntax_tree_linter::SyntaxTreeLinter;
pub use text_structure_linter::TextStructureLinter;
pub use token_stream_linter::TokenStreamLinter;
pub use violation::{AutoFix, LintRuleStatus, LintViolation, Severity, TextEdit};
