mod errorformat;
mod json;

use std::path::Path;

use sv_lint_common::analysis::Diagnostic;

#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print diagnostics for one file. Diagnostics arrive pre-sorted from
    /// the aggregator; color handling is global via `colored::control`.
    pub fn report(&self, diagnostics: &[Diagnostic], path: &Path) {
        match self.format {
            OutputFormat::Text => errorformat::report(diagnostics, path),
            OutputFormat::Json => json::report(diagnostics, path),
        }
    }
}
