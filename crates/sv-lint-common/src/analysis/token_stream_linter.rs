//! Engine for token-stream-tier rules: a single pass over the token
//! sequence, trivia included.

use super::rule::TokenStreamLintRule;
use super::violation::LintRuleStatus;
use crate::text_structure::TextStructureView;

#[derive(Default)]
pub struct TokenStreamLinter {
    rules: Vec<Box<dyn TokenStreamLintRule>>,
}

impl TokenStreamLinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule: Box<dyn TokenStreamLintRule>) {
        self.rules.push(rule);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Offer every token to every rule in registration order. No
    /// end-of-stream sentinel is synthesized; rules flush remaining state
    /// when their `report` is called.
    pub fn lint(&mut self, view: &TextStructureView) {
        for token in view.tokens() {
            let lexeme = view.token_text(token);
            for rule in &mut self.rules {
                rule.handle_token(token, lexeme);
            }
        }
    }

    pub fn report_statuses(&mut self) -> Vec<LintRuleStatus> {
        self.rules.iter_mut().map(|rule| rule.report()).collect()
    }
}
