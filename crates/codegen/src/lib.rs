//! # Rossoc Code Generation
//!
//! Renders the IR produced by `rossoc-parser` into target source text.
//!
//! ## Architecture
//!
//! 1. **Registry**: target name → [`Renderer`] ([`TargetRegistry`])
//! 2. **Generation**: [`Backend::generate`] renders the IR in memory
//! 3. **Output**: [`Backend::write`] replaces the output file in one step
//!
//! ## Usage
//!
//! ```
//! use rossoc_codegen::{TargetRegistry, compile};
//!
//! let registry = TargetRegistry::with_builtins();
//! let compiled = compile("SELECT din1 FROM arduino WHERE din2 = 1", &registry).unwrap();
//!
//! assert!(compiled.content.contains("if (din2 == 1)"));
//! ```

pub mod backend;
pub mod error;
pub mod registry;
pub mod targets;

pub use backend::Backend;
pub use error::{BackendError, BackendResult, CompileError};
pub use registry::{Renderer, TargetRegistry};

use rossoc_parser::{Analyzer, Ir, Query, parse_query};

/// Everything one compilation produces.
#[derive(Debug, Clone)]
pub struct Compiled {
    pub query: Query,
    pub ir: Ir,
    pub content: String,
}

/// Parse, analyze and render `source` against the targets in `registry`.
pub fn compile(source: &str, registry: &TargetRegistry) -> Result<Compiled, CompileError> {
    let query = parse_query(source)?;
    let ir = Analyzer::new(registry.target_names()).analyze(&query)?;

    let renderer = registry
        .get(&ir.target)
        .ok_or_else(|| BackendError::UnknownTarget(ir.target.clone()))?;
    let content = renderer.render(&ir);

    Ok(Compiled { query, ir, content })
}
