//! Per-document orchestration of the four linter engines.

use super::aggregator::{self, InternalDiagnostic};
use super::configuration::ConfigurationError;
use super::rule::AnyRule;
use super::violation::LintRuleStatus;
use super::line_linter::LineLinter;
use super::syntax_tree_linter::SyntaxTreeLinter;
use super::token_stream_linter::TokenStreamLinter;
use super::text_structure_linter::TextStructureLinter;
use crate::text_structure::TextStructureView;

/// Outcome of linting one document: one status per registered rule, in
/// tier-then-registration order, plus the invariant meta-channel.
#[derive(Debug)]
pub struct LintRun {
    pub statuses: Vec<LintRuleStatus>,
    pub internal_diagnostics: Vec<InternalDiagnostic>,
}

impl LintRun {
    pub fn total_violations(&self) -> usize {
        self.statuses.iter().map(|s| s.violations.len()).sum()
    }
}

/// Single-use lint pipeline for one document.
///
/// An engine holds fresh rule instances for each of the four tiers. Create
/// one per document, register rules, call [`lint`](Self::lint) once; the
/// call consumes the engine, so rule state can never leak into the next
/// document.
#[derive(Default)]
pub struct LintEngine {
    line: LineLinter,
    token_stream: TokenStreamLinter,
    syntax_tree: SyntaxTreeLinter,
    text_structure: TextStructureLinter,
}

impl LintEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand a rule to the engine of its tier. Within a tier, rules run in
    /// the order they were added.
    pub fn add_rule(&mut self, rule: AnyRule) {
        match rule {
            AnyRule::Line(rule) => self.line.add_rule(rule),
            AnyRule::TokenStream(rule) => self.token_stream.add_rule(rule),
            AnyRule::SyntaxTree(rule) => self.syntax_tree.add_rule(rule),
            AnyRule::TextStructure(rule) => self.text_structure.add_rule(rule),
        }
    }

    /// Configure a rule, then register it. A configuration error leaves the
    /// engine unchanged; the rule is not enabled for this document.
    pub fn add_configured_rule(
        &mut self,
        mut rule: AnyRule,
        configuration: &str,
    ) -> Result<(), ConfigurationError> {
        rule.configure(configuration)?;
        self.add_rule(rule);
        Ok(())
    }

    /// Run all four passes over one document and return finalized statuses.
    ///
    /// The syntax-tree pass is skipped when the view has no tree (parse
    /// failure); every other pass runs on the partial input. No rule error
    /// aborts the document.
    pub fn lint(mut self, view: &TextStructureView, filename: &str) -> LintRun {
        self.line.lint(view);
        self.token_stream.lint(view);
        if let Some(root) = view.syntax_tree() {
            self.syntax_tree.lint(root);
        }
        self.text_structure.lint(view, filename);

        let mut statuses = Vec::new();
        statuses.extend(self.line.report_statuses());
        statuses.extend(self.token_stream.report_statuses());
        statuses.extend(self.syntax_tree.report_statuses());
        statuses.extend(self.text_structure.report_statuses());

        let internal_diagnostics =
            aggregator::finalize_statuses(&mut statuses, view.source().len());
        LintRun {
            statuses,
            internal_diagnostics,
        }
    }
}
