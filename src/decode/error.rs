//! Errors raised while decoding a band selection

use thiserror::Error;

use super::calculator::Band;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The color name is not a registry key
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// The color exists but has no value for the role the band needs
    #[error("{color} cannot be used as the {band} band (it has no {role} value)", role = .band.role())]
    InvalidRole { color: String, band: Band },
}
