//! Unit scaling for resistance values

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    Ohm,
    Kilohm,
    Megohm,
}

impl Unit {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Unit::Ohm => "Ω",
            Unit::Kilohm => "KΩ",
            Unit::Megohm => "MΩ",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// (threshold, divisor, unit), largest first
const UNITS: [(f64, f64, Unit); 3] = [
    (1_000_000.0, 1_000_000.0, Unit::Megohm),
    (1_000.0, 1_000.0, Unit::Kilohm),
    (0.0, 1.0, Unit::Ohm),
];

/// A resistance expressed in its display unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScaledValue {
    pub(crate) magnitude: f64,
    pub(crate) unit: Unit,
}

/// Scale a raw ohm value to the largest unit whose threshold it reaches.
///
/// No rounding is applied. Values that reach no threshold (negative or NaN)
/// stay in ohms unscaled.
pub(crate) fn format(raw_value: f64) -> ScaledValue {
    let (divisor, unit) = UNITS
        .iter()
        .find(|(threshold, _, _)| raw_value >= *threshold)
        .map_or((1.0, Unit::Ohm), |&(_, divisor, unit)| (divisor, unit));

    ScaledValue {
        magnitude: raw_value / divisor,
        unit,
    }
}
