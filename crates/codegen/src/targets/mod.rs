//! Built-in renderers.

mod arduino;
mod dev;
mod mruby;

pub use arduino::ArduinoSketch;
pub use dev::DevListing;
pub use mruby::MrubyScript;

use rossoc_parser::Ir;
use rossoc_parser::semantic::PinKind;

/// A pin sampled once per loop iteration.
pub(crate) struct PinRead {
    pub variable: String,
    pub kind: PinKind,
    pub index: u8,
}

impl PinRead {
    pub fn read_call(&self) -> &'static str {
        match self.kind {
            PinKind::Digital => "digitalRead",
            PinKind::Analog => "analogRead",
        }
    }
}

fn variable(kind: PinKind, index: u8) -> String {
    match kind {
        PinKind::Digital => format!("din{}", index),
        PinKind::Analog => format!("ain{}", index),
    }
}

/// Baud rate as the whole number `Serial.begin` takes. Fractions are
/// dropped and out-of-range values saturate.
pub(crate) fn baud_rate(ir: &Ir) -> u32 {
    ir.speed.baud.as_f64() as u32
}

/// Loop delay in milliseconds, saturating at the `unsigned long` range of
/// `delay()`.
pub(crate) fn delay_ms(ir: &Ir) -> u32 {
    u32::try_from(ir.sleep.milliseconds.max(0)).unwrap_or(u32::MAX)
}

/// Every referenced pin, digital first, each kind in ascending index order.
pub(crate) fn pin_reads(ir: &Ir) -> Vec<PinRead> {
    let digital = ir.digital_in.iter().map(|&i| (PinKind::Digital, i));
    let analog = ir.analog_in.iter().map(|&i| (PinKind::Analog, i));

    digital
        .chain(analog)
        .map(|(kind, index)| PinRead {
            variable: variable(kind, index),
            kind,
            index,
        })
        .collect()
}

/// Variables printed when the condition holds, digital first, each kind in
/// ascending index order.
pub(crate) fn output_variables(ir: &Ir) -> Vec<String> {
    let digital = ir.digital_out.iter().map(|&i| variable(PinKind::Digital, i));
    let analog = ir.analog_out.iter().map(|&i| variable(PinKind::Analog, i));
    digital.chain(analog).collect()
}
