//! Engine for syntax-tree-tier rules: a depth-first pre-order visitor that
//! dispatches every node to every rule.

use super::rule::SyntaxTreeLintRule;
use super::violation::LintRuleStatus;
use crate::parser::syntax::{NodeTag, SyntaxNode};

#[derive(Default)]
pub struct SyntaxTreeLinter {
    rules: Vec<Box<dyn SyntaxTreeLintRule>>,
}

impl SyntaxTreeLinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule: Box<dyn SyntaxTreeLintRule>) {
        self.rules.push(rule);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Visit the tree rooted at `root`. For each node, rules run in
    /// registration order before the node's children are visited; children
    /// are visited in slot order with empty slots skipped.
    pub fn lint(&mut self, root: &SyntaxNode) {
        let mut context: Vec<NodeTag> = Vec::new();
        self.visit(root, &mut context);
    }

    fn visit(&mut self, node: &SyntaxNode, context: &mut Vec<NodeTag>) {
        for rule in &mut self.rules {
            rule.handle_node(node, context);
        }
        if let SyntaxNode::Branch(branch) = node {
            context.push(branch.tag);
            for child in branch.children() {
                self.visit(child, context);
            }
            context.pop();
        }
    }

    pub fn report_statuses(&mut self) -> Vec<LintRuleStatus> {
        self.rules.iter_mut().map(|rule| rule.report()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::analysis::descriptor::LintRuleDescriptor;
    use crate::analysis::rule::LintRule;
    use crate::analysis::violation::LintRuleStatus;
    use crate::parser::parse_string;

    static RECORDER: LintRuleDescriptor = LintRuleDescriptor {
        name: "recorder",
        summary: "Records the traversal.",
        description: "Records the traversal.",
        enabled_by_default: false,
        parameters: &[],
    };

    type Visits = Rc<RefCell<Vec<(Option<NodeTag>, Vec<NodeTag>)>>>;

    /// Captures (tag-or-leaf, context path) per visited node.
    struct Recorder {
        visits: Visits,
    }

    impl LintRule for Recorder {
        fn descriptor(&self) -> &'static LintRuleDescriptor {
            &RECORDER
        }

        fn report(&mut self) -> LintRuleStatus {
            LintRuleStatus::new(&RECORDER, Vec::new(), String::new())
        }
    }

    impl SyntaxTreeLintRule for Recorder {
        fn handle_node(&mut self, node: &SyntaxNode, context: &[NodeTag]) {
            self.visits.borrow_mut().push((node.tag(), context.to_vec()));
        }
    }

    #[test]
    fn test_preorder_and_context() {
        let view = parse_string("module m; endmodule");
        let visits: Visits = Rc::new(RefCell::new(Vec::new()));
        let mut linter = SyntaxTreeLinter::new();
        linter.add_rule(Box::new(Recorder {
            visits: Rc::clone(&visits),
        }));
        linter.lint(view.syntax_tree().unwrap());
        let visits = visits.borrow();

        // Root first, with an empty context.
        assert_eq!(visits[0].0, Some(NodeTag::SourceText));
        assert!(visits[0].1.is_empty());
        // The module declaration sits directly under the root.
        let module = visits
            .iter()
            .find(|(tag, _)| *tag == Some(NodeTag::ModuleDeclaration))
            .unwrap();
        assert_eq!(module.1, vec![NodeTag::SourceText]);
        // Header leaves see root/module/header on the path.
        let header_leaf = visits
            .iter()
            .find(|(tag, ctx)| tag.is_none() && ctx.last() == Some(&NodeTag::DeclarationHeader))
            .unwrap();
        assert_eq!(
            header_leaf.1,
            vec![
                NodeTag::SourceText,
                NodeTag::ModuleDeclaration,
                NodeTag::DeclarationHeader
            ]
        );
        // Every visited node count matches token count plus branch count.
        let leaf_visits = visits.iter().filter(|(tag, _)| tag.is_none()).count();
        assert_eq!(leaf_visits, view.tokens().len());
    }
}

