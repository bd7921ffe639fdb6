use std::path::Path;

use colored::Colorize;
use sv_lint_common::analysis::{Diagnostic, Severity};

pub(crate) fn report(diagnostics: &[Diagnostic], path: &Path) {
    for diagnostic in diagnostics {
        let severity_str = match diagnostic.severity {
            Severity::Error => format!("error[{}]", diagnostic.rule).red().bold(),
            Severity::Warning => format!("warning[{}]", diagnostic.rule).yellow().bold(),
        };
        println!(
            "{}:{}:{}: {}: {}",
            path.display(),
            diagnostic.line,
            diagnostic.column,
            severity_str,
            diagnostic.message
        );
    }

    if !diagnostics.is_empty() {
        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics.len() - error_count;

        let mut parts = Vec::new();
        if error_count > 0 {
            parts.push(format!("{} error(s)", error_count));
        }
        if warning_count > 0 {
            parts.push(format!("{} warning(s)", warning_count));
        }
        println!();
        println!("Found {}", parts.join(", "));
    }
}

#[cfg(test)]
fn format_line(diagnostic: &Diagnostic, path: &Path) -> String {
    let severity_label = match diagnostic.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    format!(
        "{}:{}:{}: {}[{}]: {}",
        path.display(),
        diagnostic.line,
        diagnostic.column,
        severity_label,
        diagnostic.rule,
        diagnostic.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let diagnostic = Diagnostic {
            rule: "no-tabs",
            severity: Severity::Warning,
            line: 3,
            column: 1,
            message: "Use spaces, not tabs.".to_string(),
            fixable: false,
        };
        assert_eq!(
            format_line(&diagnostic, Path::new("rtl/top.sv")),
            "rtl/top.sv:3:1: warning[no-tabs]: Use spaces, not tabs."
        );
    }

    #[test]
    fn test_format_line_error_severity() {
        let diagnostic = Diagnostic {
            rule: "line-length",
            severity: Severity::Error,
            line: 10,
            column: 101,
            message: "Line length exceeds max: 100; is: 120".to_string(),
            fixable: false,
        };
        assert_eq!(
            format_line(&diagnostic, Path::new("a.sv")),
            "a.sv:10:101: error[line-length]: Line length exceeds max: 100; is: 120"
        );
    }
}
