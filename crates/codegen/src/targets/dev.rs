//! Plain-text IR listing, for checking what a query compiles to.

use crate::registry::Renderer;
use rossoc_parser::Ir;
use std::collections::BTreeSet;

pub struct DevListing;

fn list(pins: &BTreeSet<u8>) -> String {
    if pins.is_empty() {
        return "-".to_string();
    }
    pins.iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Renderer for DevListing {
    fn name(&self) -> &str {
        "dev"
    }

    fn file_extension(&self) -> &str {
        "txt"
    }

    fn render(&self, ir: &Ir) -> String {
        let sleep = if ir.sleep.positive {
            format!("{}s ({}ms)", ir.sleep.seconds, ir.sleep.milliseconds)
        } else {
            "none".to_string()
        };

        [
            format!("target: {}", ir.target),
            format!("speed: {}", ir.speed.baud),
            format!("sleep: {}", sleep),
            format!("digital in: {}", list(&ir.digital_in)),
            format!("analog in: {}", list(&ir.analog_in)),
            format!("digital out: {}", list(&ir.digital_out)),
            format!("analog out: {}", list(&ir.analog_out)),
            format!("condition: {}", ir.condition),
        ]
        .join("\n")
            + "\n"
    }
}
