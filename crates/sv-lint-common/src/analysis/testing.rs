//! Reusable test harness for exercising one rule in isolation.
//!
//! Two fixture styles:
//!
//! - [`LintTestCase`] builds its input from segments. Plain text segments
//!   concatenate into the source; [`Segment::Anchor`] segments additionally
//!   mark the byte position (and token kind) where a violation is expected.
//! - [`AutoFixInOut`] pairs an input with the source expected after applying
//!   the first offered auto-fix of every violation.
//!
//! Both run the source through the parser collaborator and exactly one rule.

use super::engine::LintEngine;
use super::rule::AnyRule;
use super::violation::LintRuleStatus;
use crate::parser::lexer::TokenKind;
use crate::parser::parse_string;

/// One piece of a [`LintTestCase`] input.
#[derive(Debug, Clone, Copy)]
pub enum Segment {
    /// Plain source fragment.
    Text(&'static str),
    /// Source fragment that is also an expected violation anchor.
    Anchor(TokenKind, &'static str),
}

/// A lint fixture: segmented input plus the expected violation anchors.
#[derive(Debug, Clone)]
pub struct LintTestCase {
    segments: Vec<Segment>,
}

impl LintTestCase {
    pub fn new(segments: &[Segment]) -> Self {
        Self {
            segments: segments.to_vec(),
        }
    }

    /// A case with no expected violations.
    pub fn clean(source: &'static str) -> Self {
        Self::new(&[Segment::Text(source)])
    }

    /// Concatenation of all segments.
    pub fn source(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) | Segment::Anchor(_, text) => *text,
            })
            .collect()
    }

    /// Expected (kind, byte offset) anchors in source order.
    pub fn expected_anchors(&self) -> Vec<(TokenKind, usize)> {
        let mut offset = 0;
        let mut anchors = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => offset += text.len(),
                Segment::Anchor(kind, text) => {
                    anchors.push((*kind, offset));
                    offset += text.len();
                }
            }
        }
        anchors
    }
}

/// Run one unconfigured rule over every case.
pub fn run_lint_test_cases<F>(factory: F, cases: &[LintTestCase], filename: &str)
where
    F: Fn() -> AnyRule,
{
    run_configured_lint_test_cases(factory, cases, "", filename);
}

/// Run one rule with the given configuration string over every case.
pub fn run_configured_lint_test_cases<F>(
    factory: F,
    cases: &[LintTestCase],
    configuration: &str,
    filename: &str,
) where
    F: Fn() -> AnyRule,
{
    for case in cases {
        let status = lint_single_rule(&factory, &case.source(), configuration, filename);
        let got: Vec<(Option<TokenKind>, usize)> = status
            .violations
            .iter()
            .map(|violation| (violation.token_kind, violation.anchor))
            .collect();
        let want = case.expected_anchors();
        assert_eq!(
            got.len(),
            want.len(),
            "violation count mismatch for {:?}\nsource:\n{}\ngot: {:?}",
            status.rule_name(),
            case.source(),
            got,
        );
        for (actual, expected) in got.iter().zip(&want) {
            assert_eq!(
                actual.1, expected.1,
                "anchor offset mismatch in:\n{}",
                case.source()
            );
            // Anchor kinds are asserted when the rule attached a token.
            if let Some(kind) = actual.0 {
                assert_eq!(kind, expected.0, "anchor kind mismatch in:\n{}", case.source());
            }
        }
    }
}

/// Run the same cases once per filename.
pub fn run_lint_test_cases_with_filenames<F>(
    factory: F,
    cases: &[LintTestCase],
    filenames: &[&str],
) where
    F: Fn() -> AnyRule,
{
    for filename in filenames {
        run_configured_lint_test_cases(&factory, cases, "", filename);
    }
}

/// Run the same cases once per configuration string.
pub fn run_lint_test_cases_with_configurations<F>(
    factory: F,
    cases: &[LintTestCase],
    configurations: &[&str],
    filename: &str,
) where
    F: Fn() -> AnyRule,
{
    for configuration in configurations {
        run_configured_lint_test_cases(&factory, cases, configuration, filename);
    }
}

/// An auto-fix fixture: input source and the expected fixed source.
#[derive(Debug, Clone, Copy)]
pub struct AutoFixInOut {
    pub input: &'static str,
    pub expected: &'static str,
}

/// Lint each input with one rule, apply the first offered auto-fix of every
/// violation, and assert byte equality with the expected output.
pub fn run_apply_fix_cases<F>(
    factory: F,
    cases: &[AutoFixInOut],
    configuration: &str,
    filename: &str,
) where
    F: Fn() -> AnyRule,
{
    for case in cases {
        let status = lint_single_rule(&factory, case.input, configuration, filename);
        assert!(
            status
                .violations
                .iter()
                .any(|violation| !violation.fixes.is_empty()),
            "no auto-fix offered for:\n{}",
            case.input
        );
        let mut edits: Vec<_> = status
            .violations
            .iter()
            .filter_map(|violation| violation.fixes.first())
            .flat_map(|fix| fix.edits().iter().cloned())
            .collect();
        edits.sort_by_key(|edit| (edit.span.start, edit.span.end));
        for pair in edits.windows(2) {
            assert!(
                pair[0].span.end <= pair[1].span.start,
                "overlapping fix edits for:\n{}",
                case.input
            );
        }
        let mut fixed = case.input.to_string();
        for edit in edits.iter().rev() {
            fixed.replace_range(edit.span.start..edit.span.end, &edit.replacement);
        }
        assert_eq!(
            fixed, case.expected,
            "auto-fix output mismatch for input:\n{}",
            case.input
        );
    }
}

fn lint_single_rule<F>(
    factory: &F,
    source: &str,
    configuration: &str,
    filename: &str,
) -> LintRuleStatus
where
    F: Fn() -> AnyRule,
{
    let view = parse_string(source);
    let mut engine = LintEngine::new();
    engine
        .add_configured_rule(factory(), configuration)
        .unwrap_or_else(|error| panic!("configuration rejected: {}", error));
    let mut run = engine.lint(&view, filename);
    assert!(
        run.internal_diagnostics.is_empty(),
        "internal diagnostics: {:?}",
        run.internal_diagnostics
    );
    assert_eq!(run.statuses.len(), 1);
    run.statuses.remove(0)
}
