//! Four-band resistor color code decoding

mod calculator;
mod error;
mod formatter;
mod registry;

use std::fmt;

pub(crate) use calculator::{Band, BandSelection, Role, compute};
pub(crate) use error::DecodeError;
pub(crate) use formatter::{ScaledValue, Unit, format};
pub(crate) use registry::{ColorBandRegistry, ColorSpec};

/// Final pipeline output handed to the display layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResistanceResult {
    pub(crate) magnitude: f64,
    pub(crate) unit: Unit,
    pub(crate) tolerance: &'static str,
}

impl fmt::Display for ResistanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_magnitude(self.magnitude),
            self.unit,
            self.tolerance
        )
    }
}

/// Run compute then format on a selection
pub(crate) fn resolve(
    selection: &BandSelection,
    registry: &ColorBandRegistry,
) -> Result<ResistanceResult, DecodeError> {
    let reading = compute(selection, registry)?;
    let ScaledValue { magnitude, unit } = format(reading.raw_value);
    Ok(ResistanceResult {
        magnitude,
        unit,
        tolerance: reading.tolerance,
    })
}

/// Format a magnitude with up to three decimals (e.g., 47.0 -> "47", 3.30000001 -> "3.3")
pub(crate) fn format_magnitude(value: f64) -> String {
    let s = format!("{:.3}", value);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
