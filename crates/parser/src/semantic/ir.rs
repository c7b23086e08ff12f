//! Intermediate representation handed to the code generator.

use super::pins::PinUsage;
use crate::ast::Number;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

pub const DEFAULT_BAUD: i64 = 9600;

/// Validated query, ready for rendering.
///
/// Pin sets are ordered so every renderer walks them the same way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ir {
    pub pins: PinUsage,
    pub digital_in: BTreeSet<u8>,
    pub analog_in: BTreeSet<u8>,
    pub digital_out: BTreeSet<u8>,
    pub analog_out: BTreeSet<u8>,
    pub condition: Condition,
    pub sleep: SleepSpec,
    pub speed: SpeedSpec,
    pub target: String,
}

/// Loop condition in target boolean syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// No WHERE clause.
    AlwaysTrue,
    Test(String),
}

impl Condition {
    pub fn as_str(&self) -> &str {
        match self {
            Condition::AlwaysTrue => "1",
            Condition::Test(text) => text,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Delay at the end of each loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SleepSpec {
    pub seconds: Number,
    pub milliseconds: i64,
    pub positive: bool,
}

impl SleepSpec {
    pub fn new(seconds: Number) -> Self {
        // truncates toward zero, saturating at the i64 range
        let milliseconds = match seconds {
            Number::Int(s) => s.saturating_mul(1000),
            Number::Float(s) => (s * 1000.0) as i64,
        };

        SleepSpec {
            seconds,
            milliseconds,
            positive: seconds.is_positive(),
        }
    }
}

impl Default for SleepSpec {
    fn default() -> Self {
        SleepSpec::new(Number::Int(0))
    }
}

/// Serial line speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedSpec {
    pub baud: Number,
}

impl Default for SpeedSpec {
    fn default() -> Self {
        SpeedSpec {
            baud: Number::Int(DEFAULT_BAUD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_milliseconds_truncate() {
        let sleep = SleepSpec::new(Number::Float(0.0015));
        assert_eq!(sleep.milliseconds, 1);
        assert!(sleep.positive);

        let sleep = SleepSpec::new(Number::Float(-0.5));
        assert_eq!(sleep.milliseconds, -500);
        assert!(!sleep.positive);
    }

    #[test]
    fn defaults() {
        let sleep = SleepSpec::default();
        assert_eq!(sleep.seconds, Number::Int(0));
        assert_eq!(sleep.milliseconds, 0);
        assert!(!sleep.positive);
        assert_eq!(SpeedSpec::default().baud, Number::Int(9600));
        assert_eq!(Condition::AlwaysTrue.as_str(), "1");
    }
}
