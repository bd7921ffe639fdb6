//! Engine for text-structure-tier rules: one-shot dispatch of the whole
//! parsed artifact.

use super::rule::TextStructureLintRule;
use super::violation::LintRuleStatus;
use crate::text_structure::TextStructureView;

#[derive(Default)]
pub struct TextStructureLinter {
    rules: Vec<Box<dyn TextStructureLintRule>>,
}

impl TextStructureLinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule: Box<dyn TextStructureLintRule>) {
        self.rules.push(rule);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Call each rule's `lint` exactly once. Rules typically run their own
    /// traversals over the (immutable) view.
    pub fn lint(&mut self, view: &TextStructureView, filename: &str) {
        for rule in &mut self.rules {
            rule.lint(view, filename);
        }
    }

    pub fn report_statuses(&mut self) -> Vec<LintRuleStatus> {
        self.rules.iter_mut().map(|rule| rule.report()).collect()
    }
}
