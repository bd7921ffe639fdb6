pub mod lint;
pub mod why;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::reporter::OutputFormat;

#[derive(Parser)]
#[command(name = "sv-lint")]
#[command(author, version, about = "Lint SystemVerilog source files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// SystemVerilog file(s) or glob pattern(s)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    pub format: Format,

    /// Automatically apply offered fixes
    #[arg(long)]
    pub fix: bool,

    /// Path to a .sv-lint.toml configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Force colored output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show detailed documentation for a rule
    Why {
        /// Rule name (e.g., "module-filename")
        rule: Option<String>,

        /// List all available rules
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}
