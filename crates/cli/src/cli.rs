//! Command-line interface for rossoc.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// rossoc - compile pin queries into microcontroller programs
#[derive(Parser)]
#[command(name = "rossoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (overridden by ROSSOC_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored diagnostics
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a query and write the generated program
    Query(QueryArgs),

    /// List the targets a query can select with FROM
    Targets,

    /// Show version
    Version,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Query text
    #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
    pub input: Option<String>,

    /// Read the query from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Write output to <OUTPUT>
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace the output file if it exists
    #[arg(long)]
    pub force: bool,

    /// Print the IR as JSON to stdout
    #[arg(long)]
    pub ir: bool,
}

impl Cli {
    /// Colored output unless disabled by flag or the NO_COLOR convention.
    pub fn use_colors(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_requires_input_or_file() {
        assert!(Cli::try_parse_from(["rossoc", "query"]).is_err());
        assert!(Cli::try_parse_from(["rossoc", "query", "-i", "q", "-f", "q.sql"]).is_err());
    }

    #[test]
    fn query_flags() {
        let cli = Cli::try_parse_from([
            "rossoc",
            "query",
            "-i",
            "SELECT din1 FROM dev",
            "-o",
            "out.txt",
            "--force",
            "--ir",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Query(args) = cli.command else {
            panic!("expected query command");
        };
        assert_eq!(args.input.as_deref(), Some("SELECT din1 FROM dev"));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert!(args.force);
        assert!(args.ir);
    }

    #[test]
    fn no_color_flag_disables_colors() {
        let cli = Cli::try_parse_from(["rossoc", "--no-color", "targets"]).unwrap();
        assert!(!cli.use_colors());
    }
}
