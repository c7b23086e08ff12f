//! Pin whitelist and classification.
//!
//! Pins are named `<kind>in<index>` where kind is `d` (digital) or `a`
//! (analog) and index is 0..=20. Names are matched exactly, lowercase only.

use super::error::{SemanticError, SemanticResult};
use serde::Serialize;
use std::collections::BTreeSet;
use text_size::TextRange;

pub const MAX_PIN_INDEX: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PinKind {
    Digital,
    Analog,
}

/// One whitelisted pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinSpec {
    pub name: &'static str,
    pub kind: PinKind,
    pub index: u8,
}

const fn d(name: &'static str, index: u8) -> PinSpec {
    PinSpec {
        name,
        kind: PinKind::Digital,
        index,
    }
}

const fn a(name: &'static str, index: u8) -> PinSpec {
    PinSpec {
        name,
        kind: PinKind::Analog,
        index,
    }
}

pub static PIN_WHITELIST: [PinSpec; 42] = [
    d("din0", 0),
    d("din1", 1),
    d("din2", 2),
    d("din3", 3),
    d("din4", 4),
    d("din5", 5),
    d("din6", 6),
    d("din7", 7),
    d("din8", 8),
    d("din9", 9),
    d("din10", 10),
    d("din11", 11),
    d("din12", 12),
    d("din13", 13),
    d("din14", 14),
    d("din15", 15),
    d("din16", 16),
    d("din17", 17),
    d("din18", 18),
    d("din19", 19),
    d("din20", 20),
    a("ain0", 0),
    a("ain1", 1),
    a("ain2", 2),
    a("ain3", 3),
    a("ain4", 4),
    a("ain5", 5),
    a("ain6", 6),
    a("ain7", 7),
    a("ain8", 8),
    a("ain9", 9),
    a("ain10", 10),
    a("ain11", 11),
    a("ain12", 12),
    a("ain13", 13),
    a("ain14", 14),
    a("ain15", 15),
    a("ain16", 16),
    a("ain17", 17),
    a("ain18", 18),
    a("ain19", 19),
    a("ain20", 20),
];

/// Look up a pin by exact name.
pub fn lookup(name: &str) -> Option<&'static PinSpec> {
    PIN_WHITELIST.iter().find(|pin| pin.name == name)
}

pub fn is_known_pin(name: &str) -> bool {
    lookup(name).is_some()
}

pub fn pin_names() -> impl Iterator<Item = &'static str> {
    PIN_WHITELIST.iter().map(|pin| pin.name)
}

/// Split a pin name into its kind and index.
///
/// Only names of the form `din<n>`/`ain<n>` with `n <= 20` and no leading
/// zeros are accepted.
pub fn classify(name: &str) -> SemanticResult<(PinKind, u8)> {
    let unsupported = || SemanticError::UnsupportedExpression {
        expr: name.to_string(),
        // pin names reach classification without a source position
        span: TextRange::default(),
    };

    let (kind, digits) = if let Some(rest) = name.strip_prefix("din") {
        (PinKind::Digital, rest)
    } else if let Some(rest) = name.strip_prefix("ain") {
        (PinKind::Analog, rest)
    } else {
        return Err(unsupported());
    };

    if digits.is_empty()
        || !digits.bytes().all(|b| b.is_ascii_digit())
        || (digits.len() > 1 && digits.starts_with('0'))
    {
        return Err(unsupported());
    }

    match digits.parse::<u8>() {
        Ok(index) if index <= MAX_PIN_INDEX => Ok((kind, index)),
        _ => Err(unsupported()),
    }
}

/// Pin names collected during analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PinUsage {
    /// Every pin named anywhere in the query.
    pub referenced: BTreeSet<String>,
    /// Pins named in the SELECT list.
    pub outputs: BTreeSet<String>,
}

impl PinUsage {
    pub fn add_output(&mut self, name: &str) {
        self.referenced.insert(name.to_string());
        self.outputs.insert(name.to_string());
    }

    pub fn add_input(&mut self, name: &str) {
        self.referenced.insert(name.to_string());
    }
}

/// Pin indices split by kind and direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedPins {
    pub digital_in: BTreeSet<u8>,
    pub analog_in: BTreeSet<u8>,
    pub digital_out: BTreeSet<u8>,
    pub analog_out: BTreeSet<u8>,
}

/// Partition referenced pins into the input buckets and output pins into
/// the output buckets.
pub fn partition(usage: &PinUsage) -> SemanticResult<ClassifiedPins> {
    let mut pins = ClassifiedPins::default();

    for name in &usage.referenced {
        match classify(name)? {
            (PinKind::Digital, index) => pins.digital_in.insert(index),
            (PinKind::Analog, index) => pins.analog_in.insert(index),
        };
    }

    for name in &usage.outputs {
        match classify(name)? {
            (PinKind::Digital, index) => pins.digital_out.insert(index),
            (PinKind::Analog, index) => pins.analog_out.insert(index),
        };
    }

    Ok(pins)
}
