use sv_lint_common::analysis::{
    LintRule, LintRuleDescriptor, LintRuleStatus, LintViolation, SyntaxTreeLintRule,
};
use sv_lint_common::parser::syntax::{NodeTag, SyntaxNode};

use super::declaration_name;

pub static DESCRIPTOR: LintRuleDescriptor = LintRuleDescriptor {
    name: "no-nested-modules",
    summary: "Checks that module declarations are not nested.",
    description: "Nested module declarations are legal but rarely intended; \
they cannot be instantiated from other files and usually indicate a missing \
file split.",
    enabled_by_default: false,
    parameters: &[],
};

/// Flags module declarations whose ancestry already contains a module.
#[derive(Default)]
pub struct NoNestedModules {
    violations: Vec<LintViolation>,
}

impl LintRule for NoNestedModules {
    fn descriptor(&self) -> &'static LintRuleDescriptor {
        &DESCRIPTOR
    }

    fn report(&mut self) -> LintRuleStatus {
        LintRuleStatus::new(&DESCRIPTOR, std::mem::take(&mut self.violations), String::new())
    }
}

impl SyntaxTreeLintRule for NoNestedModules {
    fn handle_node(&mut self, node: &SyntaxNode, context: &[NodeTag]) {
        let Some(branch) = node.as_branch() else {
            return;
        };
        if branch.tag != NodeTag::ModuleDeclaration
            || !context.contains(&NodeTag::ModuleDeclaration)
        {
            return;
        }
        if let Some(name) = declaration_name(branch) {
            self.violations.push(LintViolation::at_token(
                name,
                "Module declaration is nested inside another module.",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_lint_common::analysis::testing::{run_lint_test_cases, LintTestCase, Segment};
    use sv_lint_common::analysis::AnyRule;
    use sv_lint_common::parser::lexer::TokenKind;

    fn rule() -> AnyRule {
        AnyRule::SyntaxTree(Box::new(NoNestedModules::default()))
    }

    const TOKEN: TokenKind = TokenKind::Identifier;

    #[test]
    fn test_flat_modules_are_clean() {
        let cases = [
            LintTestCase::clean(""),
            LintTestCase::clean("module m; endmodule"),
            LintTestCase::clean("module m; endmodule\nmodule n; endmodule"),
            LintTestCase::clean("package p;\n  module m; endmodule\nendpackage"),
        ];
        run_lint_test_cases(rule, &cases, "");
    }

    #[test]
    fn test_nested_module_flagged() {
        let cases = [
            LintTestCase::new(&[
                Segment::Text("module outer;\n  module "),
                Segment::Anchor(TOKEN, "inner"),
                Segment::Text(";\n  endmodule : inner\nendmodule : outer"),
            ]),
            // Doubly nested: both inner declarations are flagged.
            LintTestCase::new(&[
                Segment::Text("module a;\n  module "),
                Segment::Anchor(TOKEN, "b"),
                Segment::Text(";\n    module "),
                Segment::Anchor(TOKEN, "c"),
                Segment::Text(";\n    endmodule\n  endmodule\nendmodule"),
            ]),
        ];
        run_lint_test_cases(rule, &cases, "");
    }
}
