//! Arduino sketch (C++).

use super::{baud_rate, delay_ms, output_variables, pin_reads};
use crate::registry::Renderer;
use rossoc_parser::Ir;

/// Renders an Arduino `setup()`/`loop()` sketch. Registered as `arduino`
/// and as its alias `board`.
pub struct ArduinoSketch {
    name: &'static str,
}

impl ArduinoSketch {
    pub fn new(name: &'static str) -> Self {
        ArduinoSketch { name }
    }
}

impl Renderer for ArduinoSketch {
    fn name(&self) -> &str {
        self.name
    }

    fn file_extension(&self) -> &str {
        "ino"
    }

    fn render(&self, ir: &Ir) -> String {
        let mut output = String::new();

        output.push_str(&format!("// Generated by rossoc (target: {})\n\n", ir.target));

        output.push_str("void setup() {\n");
        output.push_str(&format!("  Serial.begin({});\n", baud_rate(ir)));
        for index in &ir.digital_in {
            output.push_str(&format!("  pinMode({}, INPUT);\n", index));
        }
        output.push_str("}\n\n");

        output.push_str("void loop() {\n");
        for read in pin_reads(ir) {
            output.push_str(&format!(
                "  int {} = {}({});\n",
                read.variable,
                read.read_call(),
                read.index
            ));
        }

        output.push_str(&format!("  if ({}) {{\n", ir.condition));
        let outputs = output_variables(ir);
        match outputs.split_last() {
            Some((last, rest)) => {
                for variable in rest {
                    output.push_str(&format!("    Serial.print({});\n", variable));
                    output.push_str("    Serial.print(\",\");\n");
                }
                output.push_str(&format!("    Serial.println({});\n", last));
            }
            None => output.push_str("    Serial.println();\n"),
        }
        output.push_str("  }\n");

        if ir.sleep.positive {
            output.push_str(&format!("  delay({});\n", delay_ms(ir)));
        }
        output.push_str("}\n");

        output
    }
}
