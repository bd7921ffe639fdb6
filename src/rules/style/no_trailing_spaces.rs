use sv_lint_common::analysis::{
    AutoFix, LineLintRule, LintRule, LintRuleDescriptor, LintRuleStatus, LintViolation, TextEdit,
};
use sv_lint_common::parser::lexer::{ByteSpan, TokenKind};
use sv_lint_common::text_structure::Line;

pub static DESCRIPTOR: LintRuleDescriptor = LintRuleDescriptor {
    name: "no-trailing-spaces",
    summary: "Checks that there are no trailing spaces at the ends of lines.",
    description: "Trailing whitespace is invisible, causes spurious diffs in \
version control, and hinders code review. The offered auto-fix deletes the \
trailing run of spaces and tabs.",
    enabled_by_default: true,
    parameters: &[],
};

/// Flags lines that end in spaces or tabs.
#[derive(Default)]
pub struct NoTrailingSpaces {
    violations: Vec<LintViolation>,
}

impl LintRule for NoTrailingSpaces {
    fn descriptor(&self) -> &'static LintRuleDescriptor {
        &DESCRIPTOR
    }

    fn report(&mut self) -> LintRuleStatus {
        LintRuleStatus::new(&DESCRIPTOR, std::mem::take(&mut self.violations), String::new())
    }
}

impl LineLintRule for NoTrailingSpaces {
    fn handle_line(&mut self, line: &Line<'_>) {
        let trimmed = line.text.trim_end_matches([' ', '\t']);
        if trimmed.len() == line.text.len() {
            return;
        }
        let start = line.offset + trimmed.len();
        let end = line.offset + line.text.len();
        self.violations.push(
            LintViolation::at_offset(start, "Remove trailing spaces.")
                .with_token_kind(TokenKind::Whitespace)
                .with_fix(AutoFix::new(
                    "Remove trailing spaces",
                    vec![TextEdit::delete(ByteSpan::new(start, end))],
                )),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_lint_common::analysis::testing::{
        run_apply_fix_cases, run_lint_test_cases, AutoFixInOut, LintTestCase, Segment,
    };
    use sv_lint_common::analysis::AnyRule;

    fn rule() -> AnyRule {
        AnyRule::Line(Box::new(NoTrailingSpaces::default()))
    }

    #[test]
    fn test_clean_lines() {
        let cases = [
            LintTestCase::clean(""),
            LintTestCase::clean("module m; endmodule\n"),
            LintTestCase::clean("wire w;\nwire v;\n"),
        ];
        run_lint_test_cases(rule, &cases, "");
    }

    #[test]
    fn test_trailing_spaces_flagged() {
        let cases = [
            LintTestCase::new(&[
                Segment::Text("wire w;"),
                Segment::Anchor(TokenKind::Whitespace, "  "),
                Segment::Text("\n"),
            ]),
            LintTestCase::new(&[
                Segment::Text("wire w;"),
                Segment::Anchor(TokenKind::Whitespace, "\t"),
                Segment::Text("\nwire v;"),
                Segment::Anchor(TokenKind::Whitespace, " "),
            ]),
        ];
        run_lint_test_cases(rule, &cases, "");
    }

    #[test]
    fn test_whitespace_only_line_flagged_at_line_start() {
        let cases = [LintTestCase::new(&[
            Segment::Text("wire w;\n"),
            Segment::Anchor(TokenKind::Whitespace, "   "),
            Segment::Text("\n"),
        ])];
        run_lint_test_cases(rule, &cases, "");
    }

    #[test]
    fn test_fix_removes_trailing_run() {
        let cases = [
            AutoFixInOut {
                input: "wire w;  \n",
                expected: "wire w;\n",
            },
            AutoFixInOut {
                input: "wire w;\t\nwire v; \n",
                expected: "wire w;\nwire v;\n",
            },
        ];
        run_apply_fix_cases(rule, &cases, "", "");
    }
}
