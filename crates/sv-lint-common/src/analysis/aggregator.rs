//! Merges per-rule statuses into document-level results.
//!
//! The aggregator finalizes each status (sorting, deduplication, invariant
//! checks), flattens statuses into reporter-ready diagnostics with a
//! deterministic tie-broken order, and turns offered auto-fixes into an
//! applicable, non-overlapping fix plan.

use serde::Serialize;

use super::violation::{LintRuleStatus, Severity, TextEdit};
use crate::text_structure::TextStructureView;

/// A note on the meta-channel: something a rule produced was dropped for
/// violating a core invariant. The document lint still completes.
#[derive(Debug, Clone)]
pub struct InternalDiagnostic {
    pub rule: &'static str,
    pub message: String,
}

/// Sort, deduplicate and invariant-check every status in place.
///
/// Violations anchored outside the source and auto-fixes with overlapping or
/// out-of-bounds edits are removed; each removal is recorded on the returned
/// meta-channel.
pub fn finalize_statuses(
    statuses: &mut [LintRuleStatus],
    source_len: usize,
) -> Vec<InternalDiagnostic> {
    let mut internal = Vec::new();
    for status in statuses.iter_mut() {
        let rule = status.rule_name();
        status.violations.retain(|violation| {
            let in_bounds = violation.anchor <= source_len;
            if !in_bounds {
                internal.push(InternalDiagnostic {
                    rule,
                    message: format!(
                        "dropped violation anchored at byte {} beyond source end {}",
                        violation.anchor, source_len
                    ),
                });
            }
            in_bounds
        });
        for violation in &mut status.violations {
            let anchor = violation.anchor;
            violation.fixes.retain(|fix| {
                let well_formed = fix.is_well_formed(source_len);
                if !well_formed {
                    internal.push(InternalDiagnostic {
                        rule,
                        message: format!(
                            "dropped malformed auto-fix '{}' on violation at byte {}",
                            fix.description(),
                            anchor
                        ),
                    });
                }
                well_formed
            });
        }
        status
            .violations
            .sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        status
            .violations
            .dedup_by(|a, b| a.sort_key() == b.sort_key());
    }
    internal
}

/// A reporter-ready diagnostic with resolved source position.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub rule: &'static str,
    pub severity: Severity,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in bytes from the line start.
    pub column: usize,
    pub message: String,
    /// Whether the underlying violation offered at least one auto-fix.
    pub fixable: bool,
}

/// Flatten finalized statuses into one diagnostic list.
///
/// Order is byte-identical across runs: ascending anchor, ties broken by the
/// rule's tier-then-registration index, then by message.
pub fn collect_diagnostics(
    statuses: &[LintRuleStatus],
    view: &TextStructureView,
) -> Vec<Diagnostic> {
    let mut entries: Vec<(usize, usize, &LintRuleStatus, usize)> = Vec::new();
    for (rule_index, status) in statuses.iter().enumerate() {
        for (violation_index, violation) in status.violations.iter().enumerate() {
            entries.push((violation.anchor, rule_index, status, violation_index));
        }
    }
    entries.sort_by(|a, b| {
        (a.0, a.1)
            .cmp(&(b.0, b.1))
            .then_with(|| a.2.violations[a.3].message.cmp(&b.2.violations[b.3].message))
    });
    entries
        .into_iter()
        .map(|(anchor, _, status, violation_index)| {
            let violation = &status.violations[violation_index];
            let (line, column) = view.line_column_at(anchor);
            Diagnostic {
                rule: status.rule_name(),
                severity: violation.severity.unwrap_or(Severity::Warning),
                line,
                column,
                message: violation.message.clone(),
                fixable: !violation.fixes.is_empty(),
            }
        })
        .collect()
}

/// A fix that was offered but not selected for the plan.
#[derive(Debug, Clone)]
pub struct SkippedFix {
    pub rule: &'static str,
    pub reason: String,
}

/// The union of selected auto-fix edits for one document, non-overlapping
/// and in ascending offset order.
#[derive(Debug, Clone, Default)]
pub struct FixPlan {
    pub edits: Vec<TextEdit>,
    /// Number of auto-fixes whose edits made it into the plan.
    pub applied: usize,
    pub skipped: Vec<SkippedFix>,
}

impl FixPlan {
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Select fixes from statuses given in tier-then-registration order.
///
/// Only violations offering exactly one auto-fix alternative participate.
/// The first fix whose edits do not overlap any already-selected edit wins;
/// conflicting fixes are dropped with a note.
pub fn plan_fixes(statuses: &[LintRuleStatus]) -> FixPlan {
    let mut plan = FixPlan::default();
    for status in statuses {
        for violation in &status.violations {
            let [fix] = violation.fixes.as_slice() else {
                continue;
            };
            let conflicts = fix.edits().iter().any(|edit| {
                plan.edits
                    .iter()
                    .any(|selected| selected.span.overlaps(&edit.span))
            });
            if conflicts {
                plan.skipped.push(SkippedFix {
                    rule: status.rule_name(),
                    reason: format!(
                        "fix '{}' at byte {} overlaps an earlier fix",
                        fix.description(),
                        violation.anchor
                    ),
                });
                continue;
            }
            plan.edits.extend(fix.edits().iter().cloned());
            plan.applied += 1;
        }
    }
    plan.edits.sort_by_key(|edit| (edit.span.start, edit.span.end));
    plan
}

/// Apply a plan to the source it was computed from. Re-linting the result is
/// the caller's responsibility.
pub fn apply_fix_plan(source: &str, plan: &FixPlan) -> String {
    let mut result = source.to_string();
    for edit in plan.edits.iter().rev() {
        result.replace_range(edit.span.start..edit.span.end, &edit.replacement);
    }
    result
}
