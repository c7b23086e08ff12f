//! Pipeline for compiling queries.
//!
//! Each stage either hands its output to the next or stops the run:
//! read → parse → analyze → generate → write. Compile errors are shown as
//! diagnostics against the query text; anything else is reported by `main`.

use crate::cli::QueryArgs;
use rossoc_codegen::{Backend, CompileError, TargetRegistry};
use rossoc_parser::{Analyzer, DiagnosticFormatter, ErrorConfig, parse_query};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to serialize IR: {0}")]
    Json(#[from] serde_json::Error),

    /// Already displayed as a diagnostic.
    #[error("{0}")]
    Compile(#[from] CompileError),
}

impl PipelineError {
    /// Whether the error was already shown to the user.
    pub fn is_reported(&self) -> bool {
        matches!(self, PipelineError::Compile(_))
    }
}

/// Compile the query described by `args` and write the generated program.
pub fn run_query(args: &QueryArgs, use_colors: bool) -> PipelineResult<()> {
    let source = read_query(args)?;

    match compile_query(&source, args) {
        Err(PipelineError::Compile(error)) => {
            display_compile_error(&error, &source, args.file.as_deref(), use_colors);
            Err(PipelineError::Compile(error))
        }
        other => other,
    }
}

fn read_query(args: &QueryArgs) -> PipelineResult<String> {
    match (&args.input, &args.file) {
        (Some(input), _) => Ok(input.clone()),
        (None, Some(path)) => fs::read_to_string(path).map_err(|source| PipelineError::Read {
            path: path.clone(),
            source,
        }),
        // clap requires one of the two
        (None, None) => Ok(String::new()),
    }
}

fn compile_query(source: &str, args: &QueryArgs) -> PipelineResult<()> {
    let mut backend = Backend::new(TargetRegistry::with_builtins());

    let query = parse_query(source).map_err(CompileError::from)?;
    let ir = Analyzer::new(backend.registry().target_names())
        .analyze(&query)
        .map_err(CompileError::from)?;

    if args.ir {
        println!("{}", serde_json::to_string_pretty(&ir)?);
    }

    backend.generate(&ir).map_err(CompileError::from)?;
    backend
        .write(args.output.as_deref(), args.force)
        .map_err(CompileError::from)?;

    tracing::info!(
        target_name = %ir.target,
        output = ?args.output,
        "compiled query"
    );
    Ok(())
}

fn display_compile_error(
    error: &CompileError,
    source: &str,
    filename: Option<&Path>,
    use_colors: bool,
) {
    let config = ErrorConfig {
        use_colors,
        ..ErrorConfig::default()
    };
    let formatter = DiagnosticFormatter::new(config);

    let mut diagnostic = error.to_diagnostic(source);
    if let Some(filename) = filename {
        diagnostic.context = diagnostic
            .context
            .map(|context| context.with_filename(filename.display().to_string()));
    }

    eprintln!("{}", formatter.format(&diagnostic));
}

/// Print every registered target with its file extension.
pub fn list_targets() {
    let registry = TargetRegistry::with_builtins();
    for name in registry.target_names() {
        if let Some(renderer) = registry.get(name) {
            println!("{}\t.{}", name, renderer.file_extension());
        }
    }
}

pub fn print_version() {
    println!("rossoc {}", env!("CARGO_PKG_VERSION"));
}
