use sv_lint_common::analysis::{
    LintRule, LintRuleDescriptor, LintRuleStatus, LintViolation, TokenStreamLintRule,
};
use sv_lint_common::parser::lexer::{Token, TokenKind};

pub static DESCRIPTOR: LintRuleDescriptor = LintRuleDescriptor {
    name: "macro-string-concatenation",
    summary: "Checks for accidental token concatenation (``) inside string literals in macro bodies.",
    description: "Inside a `define body, `` is the token concatenation \
operator. Within a plain string literal it is almost always unintended and \
silently changes the expanded text of the macro.",
    enabled_by_default: true,
    parameters: &[],
};

/// Lexical state while scanning the token stream.
enum State {
    Normal,
    InsideDefineBody,
}

/// Flags `` pairs inside string literals of macro definitions.
pub struct MacroStringConcatenation {
    state: State,
    violations: Vec<LintViolation>,
}

impl Default for MacroStringConcatenation {
    fn default() -> Self {
        Self {
            state: State::Normal,
            violations: Vec::new(),
        }
    }
}

impl LintRule for MacroStringConcatenation {
    fn descriptor(&self) -> &'static LintRuleDescriptor {
        &DESCRIPTOR
    }

    fn report(&mut self) -> LintRuleStatus {
        // The define body may be cut short by end of input; any findings are
        // already recorded, so only the state needs flushing.
        self.state = State::Normal;
        LintRuleStatus::new(&DESCRIPTOR, std::mem::take(&mut self.violations), String::new())
    }
}

impl TokenStreamLintRule for MacroStringConcatenation {
    fn handle_token(&mut self, token: &Token, lexeme: &str) {
        match self.state {
            State::Normal => {
                if token.kind == TokenKind::MacroDefine {
                    self.state = State::InsideDefineBody;
                }
            }
            State::InsideDefineBody => match token.kind {
                // A line continuation keeps the body open; a bare newline ends it.
                TokenKind::Newline => self.state = State::Normal,
                TokenKind::StringLiteral => {
                    for (index, _) in lexeme.match_indices("``") {
                        self.violations.push(
                            LintViolation::at_offset(
                                token.span.start + index,
                                "Token concatenation (``) used inside a string literal \
of a macro definition.",
                            )
                            .with_token_kind(TokenKind::StringLiteral),
                        );
                    }
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_lint_common::analysis::testing::{run_lint_test_cases, LintTestCase, Segment};
    use sv_lint_common::analysis::AnyRule;

    fn rule() -> AnyRule {
        AnyRule::TokenStream(Box::new(MacroStringConcatenation::default()))
    }

    const TOKEN: TokenKind = TokenKind::StringLiteral;

    #[test]
    fn test_clean_sources() {
        let cases = [
            LintTestCase::clean(""),
            // Concatenation outside a string is the operator's purpose.
            LintTestCase::clean("`define CAT(a, b) a``b\n"),
            // A pair inside a string outside any define body is fine.
            LintTestCase::clean("wire w; // \"``\"\nlocalparam string S = \"``\";\n"),
            LintTestCase::clean("`define MSG \"hello\"\n"),
        ];
        run_lint_test_cases(rule, &cases, "");
    }

    #[test]
    fn test_pair_inside_define_string_flagged() {
        let cases = [
            LintTestCase::new(&[
                Segment::Text("`define MSG \"ab"),
                Segment::Anchor(TOKEN, "``"),
                Segment::Text("cd\"\n"),
            ]),
            // One violation per pair.
            LintTestCase::new(&[
                Segment::Text("`define MSG \""),
                Segment::Anchor(TOKEN, "``"),
                Segment::Text("x"),
                Segment::Anchor(TOKEN, "``"),
                Segment::Text("\"\n"),
            ]),
        ];
        run_lint_test_cases(rule, &cases, "");
    }

    #[test]
    fn test_continued_define_body_still_checked() {
        let cases = [LintTestCase::new(&[
            Segment::Text("`define MSG first \\\n  \"ab"),
            Segment::Anchor(TOKEN, "``"),
            Segment::Text("cd\"\n"),
        ])];
        run_lint_test_cases(rule, &cases, "");
    }

    #[test]
    fn test_string_after_define_body_ends_is_clean() {
        let cases = [LintTestCase::clean(
            "`define MSG first\nlocalparam string S = \"``\";\n",
        )];
        run_lint_test_cases(rule, &cases, "");
    }

    #[test]
    fn test_unterminated_define_at_end_of_input() {
        let cases = [LintTestCase::new(&[
            Segment::Text("`define MSG \"ab"),
            Segment::Anchor(TOKEN, "``"),
            Segment::Text("cd\""),
        ])];
        run_lint_test_cases(rule, &cases, "");
    }
}
