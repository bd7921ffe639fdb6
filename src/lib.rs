//! sv-lint: a style linter for SystemVerilog sources.
//!
//! The heavy lifting lives in `sv-lint-common` (parser, the four linter
//! engines, violation and fix model); this crate adds the built-in rules,
//! reporters and the CLI driver.

// Re-export from sv-lint-common
pub use sv_lint_common::analysis;
pub use sv_lint_common::config;
pub use sv_lint_common::parser;
pub use sv_lint_common::text_structure;

// Local modules
pub mod rules;

// CLI-only modules (require terminal / filesystem access)
#[cfg(feature = "cli")]
pub mod reporter;
#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use sv_lint_common::{
    apply_fix_plan, collect_diagnostics, parse_string, plan_fixes, ColorMode, ConfigError,
    ConfigurationError, Diagnostic, FixPlan, InternalDiagnostic, LintConfig, LintEngine,
    LintRuleStatus, LintRun, ParseError, Severity, TextStructureView,
};

pub use rules::{build_engine, default_registry};

#[cfg(feature = "cli")]
pub use reporter::{OutputFormat, Reporter};

/// Everything produced by linting one document.
#[derive(Debug)]
pub struct LintReport {
    /// Reporter-ready diagnostics in deterministic order.
    pub diagnostics: Vec<Diagnostic>,
    /// One status per rule, tier-then-registration order.
    pub statuses: Vec<LintRuleStatus>,
    /// Invariant breaches dropped by the aggregator.
    pub internal_diagnostics: Vec<InternalDiagnostic>,
    /// Errors from the parser collaborator; linting still ran on the
    /// partial view (minus the syntax-tree pass).
    pub parse_errors: Vec<ParseError>,
}

impl LintReport {
    pub fn has_findings(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Lint one document with the default registry.
///
/// `filename` is only used by rules that depend on the path (and for none of
/// the I/O: the content is taken as given).
pub fn lint_content(
    content: &str,
    filename: &str,
    config: Option<&LintConfig>,
) -> Result<LintReport, ConfigurationError> {
    let view = parse_string(content);
    let engine = build_engine(default_registry(), config)?;
    let run = engine.lint(&view, filename);
    let diagnostics = collect_diagnostics(&run.statuses, &view);
    Ok(LintReport {
        diagnostics,
        parse_errors: view.parse_errors().to_vec(),
        statuses: run.statuses,
        internal_diagnostics: run.internal_diagnostics,
    })
}

/// Apply the document's auto-fix plan to its content.
///
/// Returns the fixed content and the number of fixes applied. The statuses
/// must come from linting exactly this content; re-linting the result is the
/// caller's responsibility.
pub fn apply_fixes_to_content(content: &str, statuses: &[LintRuleStatus]) -> (String, usize) {
    let plan = plan_fixes(statuses);
    let fixed = apply_fix_plan(content, &plan);
    (fixed, plan.applied)
}
