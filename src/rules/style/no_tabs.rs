use sv_lint_common::analysis::{
    LineLintRule, LintRule, LintRuleDescriptor, LintRuleStatus, LintViolation,
};
use sv_lint_common::parser::lexer::TokenKind;
use sv_lint_common::text_structure::Line;

pub static DESCRIPTOR: LintRuleDescriptor = LintRuleDescriptor {
    name: "no-tabs",
    summary: "Checks that lines are indented with spaces, not tabs.",
    description: "Tab characters render differently depending on editor \
settings, which breaks alignment. Only the first tab of each line is \
reported.",
    enabled_by_default: true,
    parameters: &[],
};

/// Flags the first tab character of each line.
#[derive(Default)]
pub struct NoTabs {
    violations: Vec<LintViolation>,
}

impl LintRule for NoTabs {
    fn descriptor(&self) -> &'static LintRuleDescriptor {
        &DESCRIPTOR
    }

    fn report(&mut self) -> LintRuleStatus {
        LintRuleStatus::new(&DESCRIPTOR, std::mem::take(&mut self.violations), String::new())
    }
}

impl LineLintRule for NoTabs {
    fn handle_line(&mut self, line: &Line<'_>) {
        if let Some(index) = line.text.find('\t') {
            self.violations.push(
                LintViolation::at_offset(line.offset + index, "Use spaces, not tabs.")
                    .with_token_kind(TokenKind::Whitespace),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_lint_common::analysis::testing::{run_lint_test_cases, LintTestCase, Segment};
    use sv_lint_common::analysis::AnyRule;

    fn rule() -> AnyRule {
        AnyRule::Line(Box::new(NoTabs::default()))
    }

    #[test]
    fn test_clean_lines() {
        let cases = [
            LintTestCase::clean(""),
            LintTestCase::clean("  wire w;\n"),
        ];
        run_lint_test_cases(rule, &cases, "");
    }

    #[test]
    fn test_first_tab_per_line() {
        let cases = [
            LintTestCase::new(&[
                Segment::Anchor(TokenKind::Whitespace, "\t"),
                Segment::Text("wire w;\n"),
            ]),
            // Two tabs on one line yield a single finding.
            LintTestCase::new(&[
                Segment::Anchor(TokenKind::Whitespace, "\t"),
                Segment::Text("wire\tw;\n"),
            ]),
            LintTestCase::new(&[
                Segment::Text("wire w;\n"),
                Segment::Anchor(TokenKind::Whitespace, "\t"),
                Segment::Text("wire v;\n"),
            ]),
        ];
        run_lint_test_cases(rule, &cases, "");
    }
}
