//! mruby script for boards running mruby with the Arduino-compatible API.

use super::{baud_rate, delay_ms, output_variables, pin_reads};
use crate::registry::Renderer;
use rossoc_parser::Ir;

pub struct MrubyScript;

impl Renderer for MrubyScript {
    fn name(&self) -> &str {
        "mruby"
    }

    fn file_extension(&self) -> &str {
        "rb"
    }

    fn render(&self, ir: &Ir) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Generated by rossoc (target: {})\n\n", ir.target));
        output.push_str(&format!("Serial.begin({})\n", baud_rate(ir)));
        for index in &ir.digital_in {
            output.push_str(&format!("pinMode({}, INPUT)\n", index));
        }
        output.push('\n');

        output.push_str("loop do\n");
        for read in pin_reads(ir) {
            output.push_str(&format!(
                "  {} = {}({})\n",
                read.variable,
                read.read_call(),
                read.index
            ));
        }
        output.push_str(&format!("  if {}\n", ir.condition));
        output.push_str(&format!(
            "    Serial.println([{}].join(','))\n",
            output_variables(ir).join(", ")
        ));
        output.push_str("  end\n");
        if ir.sleep.positive {
            output.push_str(&format!("  delay({})\n", delay_ms(ir)));
        }
        output.push_str("end\n");

        output
    }
}
