//! Band selection and resistance computation

use std::fmt;

use super::error::DecodeError;
use super::registry::{ColorBandRegistry, ColorSpec};

/// Value a color contributes in a given band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Digit,
    Multiplier,
    Tolerance,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Digit => "digit",
            Role::Multiplier => "multiplier",
            Role::Tolerance => "tolerance",
        })
    }
}

/// Positional slot on a four-band resistor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Band {
    First,
    Second,
    Multiplier,
    Tolerance,
}

impl Band {
    pub(crate) const ALL: [Band; 4] = [Band::First, Band::Second, Band::Multiplier, Band::Tolerance];

    /// Band for a 1-based position
    pub(crate) fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position.checked_sub(1)?).copied()
    }

    pub(crate) fn position(self) -> usize {
        match self {
            Band::First => 1,
            Band::Second => 2,
            Band::Multiplier => 3,
            Band::Tolerance => 4,
        }
    }

    pub(crate) fn role(self) -> Role {
        match self {
            Band::First | Band::Second => Role::Digit,
            Band::Multiplier => Role::Multiplier,
            Band::Tolerance => Role::Tolerance,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Band::First => "first digit",
            Band::Second => "second digit",
            Band::Multiplier => "multiplier",
            Band::Tolerance => "tolerance",
        })
    }
}

/// The four currently chosen color names
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BandSelection {
    colors: [String; 4],
}

impl Default for BandSelection {
    /// Brown, black, red, gold: 1 KΩ ±5%
    fn default() -> Self {
        Self::new(["brown", "black", "red", "gold"])
    }
}

impl BandSelection {
    pub(crate) fn new<S: Into<String>>(colors: [S; 4]) -> Self {
        Self {
            colors: colors.map(Into::into),
        }
    }

    pub(crate) fn get(&self, band: Band) -> &str {
        &self.colors[band.position() - 1]
    }

    /// Replace the color of a single band
    pub(crate) fn set(&mut self, band: Band, color: impl Into<String>) {
        self.colors[band.position() - 1] = color.into();
    }
}

/// Unscaled output of [`compute`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Reading {
    /// Resistance in ohms
    pub(crate) raw_value: f64,
    pub(crate) tolerance: &'static str,
}

/// Decode a selection into a raw resistance and tolerance label.
///
/// Each band is checked against the role it requires; a color missing that
/// role is rejected rather than read as zero. A leading zero digit is allowed.
pub(crate) fn compute(
    selection: &BandSelection,
    registry: &ColorBandRegistry,
) -> Result<Reading, DecodeError> {
    let d1 = role_value(selection, registry, Band::First, |c| c.digit)?;
    let d2 = role_value(selection, registry, Band::Second, |c| c.digit)?;
    let m = role_value(selection, registry, Band::Multiplier, |c| c.multiplier)?;
    let tolerance = role_value(selection, registry, Band::Tolerance, |c| c.tolerance)?;

    let significand = f64::from(d1) * 10.0 + f64::from(d2);
    Ok(Reading {
        raw_value: significand * m,
        tolerance,
    })
}

fn role_value<T>(
    selection: &BandSelection,
    registry: &ColorBandRegistry,
    band: Band,
    value: impl Fn(&ColorSpec) -> Option<T>,
) -> Result<T, DecodeError> {
    let name = selection.get(band);
    let spec = registry.lookup(name)?;
    value(spec).ok_or_else(|| DecodeError::InvalidRole {
        color: spec.name.to_string(),
        band,
    })
}
