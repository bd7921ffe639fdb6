use std::path::Path;

use serde::Serialize;
use sv_lint_common::analysis::Diagnostic;

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    diagnostics: &'a [Diagnostic],
}

pub(crate) fn report(diagnostics: &[Diagnostic], path: &Path) {
    let report = JsonReport {
        path: path.display().to_string(),
        diagnostics,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(payload) => println!("{}", payload),
        Err(error) => eprintln!("failed to serialize diagnostics: {}", error),
    }
}
