//! Engine for line-tier rules: feeds physical lines sequentially.

use super::rule::LineLintRule;
use super::violation::LintRuleStatus;
use crate::text_structure::TextStructureView;

#[derive(Default)]
pub struct LineLinter {
    rules: Vec<Box<dyn LineLintRule>>,
}

impl LineLinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules run in registration order on every line.
    pub fn add_rule(&mut self, rule: Box<dyn LineLintRule>) {
        self.rules.push(rule);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn lint(&mut self, view: &TextStructureView) {
        for line in view.lines() {
            for rule in &mut self.rules {
                rule.handle_line(&line);
            }
        }
    }

    pub fn report_statuses(&mut self) -> Vec<LintRuleStatus> {
        self.rules.iter_mut().map(|rule| rule.report()).collect()
    }
}
