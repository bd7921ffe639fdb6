//! End-to-end scenarios through the public API and the rule test harness.

use sv_lint::analysis::testing::{
    run_apply_fix_cases, run_configured_lint_test_cases, run_lint_test_cases, AutoFixInOut,
    LintTestCase, Segment,
};
use sv_lint::analysis::{AnyRule, LintEngine};
use sv_lint::rules::macros::MacroStringConcatenation;
use sv_lint::rules::structure::ModuleFilename;
use sv_lint::rules::style::LineLength;
use sv_lint::parser::lexer::TokenKind;
use sv_lint::{
    collect_diagnostics, lint_content, parse_string, plan_fixes, LintConfig,
};

fn module_filename() -> AnyRule {
    AnyRule::TextStructure(Box::new(ModuleFilename::default()))
}

fn line_length() -> AnyRule {
    AnyRule::TextStructure(Box::new(LineLength::default()))
}

fn macro_string_concatenation() -> AnyRule {
    AnyRule::TokenStream(Box::new(MacroStringConcatenation::default()))
}

// ============================================================================
// Scenario A-D: module-filename
// ============================================================================

#[test]
fn test_module_matching_filename_is_clean() {
    let cases = [LintTestCase::clean("module m; endmodule")];
    run_lint_test_cases(module_filename, &cases, "/p/m.sv");
}

#[test]
fn test_mismatching_modules_are_each_flagged() {
    let cases = [LintTestCase::new(&[
        Segment::Text("module "),
        Segment::Anchor(TokenKind::Identifier, "m"),
        Segment::Text("; endmodule\nmodule "),
        Segment::Anchor(TokenKind::Identifier, "n"),
        Segment::Text("; endmodule"),
    ])];
    run_lint_test_cases(module_filename, &cases, "/p/q.sv");
}

#[test]
fn test_dash_for_underscore_accepted_when_configured() {
    let cases = [LintTestCase::clean("module multi_word_module; endmodule")];
    run_configured_lint_test_cases(
        module_filename,
        &cases,
        "allow-dash-for-underscore:on",
        "/p/multi-word-module.sv",
    );
}

#[test]
fn test_module_filename_autofix_rewrites_declaration_and_label() {
    let cases = [AutoFixInOut {
        input: "module a;\n\nendmodule : a",
        expected: "module r;\n\nendmodule : r",
    }];
    run_apply_fix_cases(module_filename, &cases, "", "/p/r.sv");
}

// ============================================================================
// Scenario E: line-length
// ============================================================================

#[test]
fn test_overlong_line_flagged_at_column_101() {
    let source = format!("wire {};\n", "a".repeat(95));
    assert_eq!(source.len(), 102); // 101 characters plus newline

    let view = parse_string(&source);
    let mut engine = LintEngine::new();
    engine
        .add_configured_rule(line_length(), "length:100")
        .unwrap();
    let run = engine.lint(&view, "/p/long.sv");
    let diagnostics = collect_diagnostics(&run.statuses, &view);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, "line-length");
    assert_eq!(diagnostics[0].line, 1);
    assert_eq!(diagnostics[0].column, 101);
}

// ============================================================================
// Scenario F: macro-string-concatenation
// ============================================================================

#[test]
fn test_concatenation_pair_in_macro_string_flagged() {
    let cases = [LintTestCase::new(&[
        Segment::Text("`define GREETING \"hello"),
        Segment::Anchor(TokenKind::StringLiteral, "``"),
        Segment::Text("world\"\n"),
    ])];
    run_lint_test_cases(macro_string_concatenation, &cases, "/p/macros.svh");
}

// ============================================================================
// Testable properties
// ============================================================================

/// Property 1: two independent runs produce byte-identical results.
#[test]
fn test_determinism() {
    let source = "module a;\t\nwire w;  \n`define M \"``\"\nendmodule\nmodule b; endmodule\n";
    let config = LintConfig::parse("[rules.no-nested-modules]\nenabled = true\n").unwrap();

    let first = lint_content(source, "/p/top.sv", Some(&config)).unwrap();
    let second = lint_content(source, "/p/top.sv", Some(&config)).unwrap();

    assert_eq!(format!("{:?}", first.diagnostics), format!("{:?}", second.diagnostics));
    assert_eq!(first.statuses.len(), second.statuses.len());
    for (a, b) in first.statuses.iter().zip(&second.statuses) {
        assert_eq!(a.rule_name(), b.rule_name());
        assert_eq!(a.violations, b.violations);
        assert_eq!(a.config_echo, b.config_echo);
    }
}

/// Property 2: violations within each status are in ascending
/// (anchor, message) order without duplicates.
#[test]
fn test_violation_ordering_within_status() {
    let source = "wire a;  \nwire b;\t \nwire c;  \n";
    let report = lint_content(source, "/p/w.sv", None).unwrap();
    for status in &report.statuses {
        let keys: Vec<_> = status
            .violations
            .iter()
            .map(|v| (v.anchor, v.message.clone()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(keys, sorted, "rule {}", status.rule_name());
    }
}

/// Property 3: a rule clean in solo execution stays clean when co-registered.
#[test]
fn test_rule_isolation() {
    let source = "module m;\t\nwire w;  \nendmodule\n";

    let solo = {
        let view = parse_string(source);
        let mut engine = LintEngine::new();
        engine.add_configured_rule(module_filename(), "").unwrap();
        engine.lint(&view, "/p/m.sv")
    };
    let solo_status = &solo.statuses[0];
    assert!(solo_status.is_clean());

    let combined = lint_content(source, "/p/m.sv", None).unwrap();
    let combined_status = combined
        .statuses
        .iter()
        .find(|s| s.rule_name() == "module-filename")
        .unwrap();
    assert_eq!(combined_status.violations, solo_status.violations);
}

/// Property 4: fix plans never contain overlapping edits, and applying a
/// plan to a parsable source keeps it parsable.
#[test]
fn test_autofix_safety() {
    let source = "module a;  \nwire w;\t  \nendmodule : a\n";
    assert!(parse_string(source).syntax_tree().is_some());

    let report = lint_content(source, "/p/r.sv", None).unwrap();
    let plan = plan_fixes(&report.statuses);
    assert!(plan.applied > 0);
    for pair in plan.edits.windows(2) {
        assert!(pair[0].span.end <= pair[1].span.start);
    }

    let (fixed, _) = sv_lint::apply_fixes_to_content(source, &report.statuses);
    let reparsed = parse_string(&fixed);
    assert!(reparsed.syntax_tree().is_some(), "fixed source: {:?}", fixed);
}

/// Property 5: configuring a rule and echoing the configuration back is a
/// semantic round-trip.
#[test]
fn test_configuration_round_trip() {
    let view = parse_string("module m; endmodule\n");
    let mut engine = LintEngine::new();
    engine
        .add_configured_rule(line_length(), " length : 120 ")
        .unwrap();
    let run = engine.lint(&view, "/p/m.sv");
    let echo = run.statuses[0].config_echo.clone();
    assert_eq!(echo, "length:120");

    // Re-configuring from the echo reproduces the echo.
    let view = parse_string("module m; endmodule\n");
    let mut engine = LintEngine::new();
    engine.add_configured_rule(line_length(), &echo).unwrap();
    let run = engine.lint(&view, "/p/m.sv");
    assert_eq!(run.statuses[0].config_echo, echo);
}

/// Property 6: every reported anchor lies within the source.
#[test]
fn test_anchor_validity() {
    let source = "module a;\t\nwire w;  \n`define M \"``\"\nendmodule\n";
    let report = lint_content(source, "/p/q.sv", None).unwrap();
    assert!(report.internal_diagnostics.is_empty());
    for status in &report.statuses {
        for violation in &status.violations {
            assert!(violation.anchor <= source.len());
        }
    }
}

/// Parse failures skip only the syntax-tree pass; the other tiers still run.
#[test]
fn test_partial_input_still_linted() {
    let source = "module unfinished;\n\twire w;  \n";
    let report = lint_content(source, "/p/unfinished.sv", None).unwrap();
    assert!(!report.parse_errors.is_empty());
    let rules: Vec<_> = report.diagnostics.iter().map(|d| d.rule).collect();
    assert!(rules.contains(&"no-tabs"));
    assert!(rules.contains(&"no-trailing-spaces"));
}
