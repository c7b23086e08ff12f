// Semantic analysis for queries.
// Validates identifiers against the pin whitelist and target vocabulary,
// classifies pins and builds the IR consumed by code generation.

pub mod analyzer;
pub mod error;
pub mod ir;
pub mod pins;
pub mod translate;

pub use analyzer::{Analyzer, BUILTIN_TARGETS};
pub use error::{SemanticError, SemanticResult};
pub use ir::{Condition, DEFAULT_BAUD, Ir, SleepSpec, SpeedSpec};
pub use pins::{ClassifiedPins, PIN_WHITELIST, PinKind, PinSpec, PinUsage};
pub use translate::translate;
