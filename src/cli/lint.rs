use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use colored::control;
use rayon::prelude::*;

use super::Cli;
use crate::reporter::Reporter;
use crate::{
    apply_fixes_to_content, build_engine, default_registry, lint_content, ColorMode, LintConfig,
    LintReport,
};

/// Result of linting a single file.
enum FileResult {
    ReadError {
        path: PathBuf,
        message: String,
    },
    Linted {
        path: PathBuf,
        report: LintReport,
        fixes_applied: usize,
    },
}

pub fn run_lint(cli: Cli) -> ExitCode {
    let config = match &cli.config {
        Some(path) => match LintConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(error) => {
                eprintln!("{}", error);
                return ExitCode::from(2);
            }
        },
        None => std::env::current_dir()
            .ok()
            .and_then(|dir| LintConfig::find_and_load(&dir)),
    };

    match config.as_ref().map(|c| c.color_mode()) {
        Some(ColorMode::Always) => control::set_override(true),
        Some(ColorMode::Never) => control::set_override(false),
        _ => {}
    }
    // Command-line flags beat the config file.
    if cli.color {
        control::set_override(true);
    } else if cli.no_color {
        control::set_override(false);
    }

    // Surface configuration errors once, before touching any file.
    if let Err(error) = build_engine(default_registry(), config.as_ref()) {
        eprintln!("{}", error);
        return ExitCode::from(2);
    }

    let files = expand_files(&cli.files);
    if files.is_empty() {
        eprintln!("No input files. Pass one or more .sv files or glob patterns.");
        return ExitCode::from(2);
    }

    let results: Vec<FileResult> = files
        .par_iter()
        .map(|path| lint_file(path, config.as_ref(), cli.fix))
        .collect();

    let reporter = Reporter::new(cli.format.into());
    let mut had_findings = false;
    let mut had_errors = false;

    for result in &results {
        match result {
            FileResult::ReadError { path, message } => {
                eprintln!("{}: {}", path.display(), message);
                had_errors = true;
            }
            FileResult::Linted {
                path,
                report,
                fixes_applied,
            } => {
                for parse_error in &report.parse_errors {
                    eprintln!("{}: syntax error: {}", path.display(), parse_error);
                    had_findings = true;
                }
                if !report.diagnostics.is_empty() {
                    reporter.report(&report.diagnostics, path);
                    had_findings = true;
                }
                if cli.verbose {
                    for internal in &report.internal_diagnostics {
                        eprintln!(
                            "{}: internal ({}): {}",
                            path.display(),
                            internal.rule,
                            internal.message
                        );
                    }
                }
                if *fixes_applied > 0 {
                    println!("Fixed {} issue(s) in {}", fixes_applied, path.display());
                }
            }
        }
    }

    if had_errors {
        ExitCode::from(2)
    } else if had_findings {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn lint_file(path: &PathBuf, config: Option<&LintConfig>, fix: bool) -> FileResult {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            return FileResult::ReadError {
                path: path.clone(),
                message: error.to_string(),
            };
        }
    };

    let report = match lint_content(&content, &path.to_string_lossy(), config) {
        Ok(report) => report,
        Err(error) => {
            return FileResult::ReadError {
                path: path.clone(),
                message: error.to_string(),
            };
        }
    };

    let mut fixes_applied = 0;
    if fix {
        let (fixed, applied) = apply_fixes_to_content(&content, &report.statuses);
        if applied > 0 {
            if let Err(error) = fs::write(path, fixed) {
                return FileResult::ReadError {
                    path: path.clone(),
                    message: error.to_string(),
                };
            }
            fixes_applied = applied;
        }
    }

    FileResult::Linted {
        path: path.clone(),
        report,
        fixes_applied,
    }
}

/// Expand glob patterns among the file arguments; plain paths pass through.
fn expand_files(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut expanded = Vec::new();
    for file in files {
        let text = file.to_string_lossy();
        if text.contains(['*', '?', '[']) {
            if let Ok(paths) = glob::glob(&text) {
                expanded.extend(paths.flatten());
            }
        } else {
            expanded.push(file.clone());
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_lint_file_reports_findings() {
        let mut file = NamedTempFile::with_suffix(".sv").unwrap();
        write!(file, "module m;\t\nendmodule\n").unwrap();
        let result = lint_file(&file.path().to_path_buf(), None, false);
        match result {
            FileResult::Linted { report, .. } => {
                assert!(report.diagnostics.iter().any(|d| d.rule == "no-tabs"));
            }
            FileResult::ReadError { message, .. } => panic!("unexpected read error: {}", message),
        }
    }

    #[test]
    fn test_lint_file_fix_rewrites_file() {
        let mut file = NamedTempFile::with_suffix(".sv").unwrap();
        write!(file, "module m;  \nendmodule\n").unwrap();
        let path = file.path().to_path_buf();
        let result = lint_file(&path, None, true);
        match result {
            FileResult::Linted { fixes_applied, .. } => assert_eq!(fixes_applied, 1),
            FileResult::ReadError { message, .. } => panic!("unexpected read error: {}", message),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "module m;\nendmodule\n");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = lint_file(&PathBuf::from("/no/such/file.sv"), None, false);
        assert!(matches!(result, FileResult::ReadError { .. }));
    }

    #[test]
    fn test_expand_files_passes_plain_paths() {
        let files = vec![PathBuf::from("a.sv"), PathBuf::from("b.sv")];
        assert_eq!(expand_files(&files), files);
    }
}
