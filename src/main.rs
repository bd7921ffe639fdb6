use clap::Parser;
use std::process::ExitCode;
use sv_lint::cli::{self, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Why { rule, list }) => cli::why::run_why(rule.clone(), *list),
        None => cli::lint::run_lint(cli),
    }
}
