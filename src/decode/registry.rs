//! Color band definitions

use super::calculator::{Band, Role};
use super::error::DecodeError;

/// Decode properties of one named color
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ColorSpec {
    pub(crate) name: &'static str,
    pub(crate) digit: Option<u8>,
    pub(crate) multiplier: Option<f64>,
    pub(crate) tolerance: Option<&'static str>,
    /// Swatch fill color
    pub(crate) fill: &'static str,
    /// Text color readable on top of `fill`
    pub(crate) label_color: &'static str,
}

impl ColorSpec {
    pub(crate) fn has_role(&self, role: Role) -> bool {
        match role {
            Role::Digit => self.digit.is_some(),
            Role::Multiplier => self.multiplier.is_some(),
            Role::Tolerance => self.tolerance.is_some(),
        }
    }

    /// Short label for the value this color carries in `role` ("1", "×100", "±5%")
    pub(crate) fn value_label(&self, role: Role) -> Option<String> {
        match role {
            Role::Digit => self.digit.map(|d| d.to_string()),
            Role::Multiplier => self.multiplier.map(format_multiplier),
            Role::Tolerance => self.tolerance.map(str::to_string),
        }
    }
}

/// Format a multiplier for display (e.g., 1000 -> "×1K", 0.1 -> "×0.1")
pub(crate) fn format_multiplier(m: f64) -> String {
    if m >= 1_000_000.0 {
        format!("×{}M", m / 1_000_000.0)
    } else if m >= 1000.0 {
        format!("×{}K", m / 1000.0)
    } else {
        format!("×{}", m)
    }
}

const fn spec(
    name: &'static str,
    digit: Option<u8>,
    multiplier: Option<f64>,
    tolerance: Option<&'static str>,
    fill: &'static str,
    label_color: &'static str,
) -> ColorSpec {
    ColorSpec {
        name,
        digit,
        multiplier,
        tolerance,
        fill,
        label_color,
    }
}

/// The 12 standard band colors, in reference table order
static COLORS: [ColorSpec; 12] = [
    spec("black", Some(0), Some(1.0), None, "#000000", "#FFFFFF"),
    spec("brown", Some(1), Some(10.0), Some("±1%"), "#8B4513", "#FFFFFF"),
    spec("red", Some(2), Some(100.0), Some("±2%"), "#FF0000", "#FFFFFF"),
    spec("orange", Some(3), Some(1_000.0), None, "#FFA500", "#000000"),
    spec("yellow", Some(4), Some(10_000.0), None, "#FFFF00", "#000000"),
    spec("green", Some(5), Some(100_000.0), None, "#008000", "#FFFFFF"),
    spec("blue", Some(6), Some(1_000_000.0), None, "#0000FF", "#FFFFFF"),
    spec("violet", Some(7), Some(10_000_000.0), None, "#8B00FF", "#FFFFFF"),
    spec("grey", Some(8), None, None, "#808080", "#FFFFFF"),
    spec("white", Some(9), None, None, "#FFFFFF", "#000000"),
    spec("gold", None, Some(0.1), Some("±5%"), "#FFD700", "#000000"),
    spec("silver", None, Some(0.01), Some("±10%"), "#C0C0C0", "#000000"),
];

/// Fixed mapping from color name to its decode properties
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColorBandRegistry {
    colors: &'static [ColorSpec],
}

impl Default for ColorBandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ColorBandRegistry {
    pub(crate) fn standard() -> Self {
        Self { colors: &COLORS }
    }

    /// Look up a color by name, ignoring case
    pub(crate) fn lookup(&self, name: &str) -> Result<&'static ColorSpec, DecodeError> {
        self.colors
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| DecodeError::UnknownColor(name.to_string()))
    }

    /// All colors in definition order
    pub(crate) fn colors(&self) -> &'static [ColorSpec] {
        self.colors
    }

    pub(crate) fn digit_colors(&self) -> Vec<&'static str> {
        self.with_role(Role::Digit)
    }

    pub(crate) fn multiplier_colors(&self) -> Vec<&'static str> {
        self.with_role(Role::Multiplier)
    }

    pub(crate) fn tolerance_colors(&self) -> Vec<&'static str> {
        self.with_role(Role::Tolerance)
    }

    /// Colors accepted in the given band position
    pub(crate) fn allowed(&self, band: Band) -> Vec<&'static str> {
        match band.role() {
            Role::Digit => self.digit_colors(),
            Role::Multiplier => self.multiplier_colors(),
            Role::Tolerance => self.tolerance_colors(),
        }
    }

    fn with_role(&self, role: Role) -> Vec<&'static str> {
        self.colors
            .iter()
            .filter(|c| c.has_role(role))
            .map(|c| c.name)
            .collect()
    }
}
