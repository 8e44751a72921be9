use std::fmt;

/// Why a color string could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty or only whitespace.
    Empty,
    /// A comma-separated color must have 3 or 4 components.
    ComponentCount(usize),
    /// A component was not an integer in `0..=255`.
    InvalidComponent(String),
    /// Hex colors must be `#rrggbb` or `#rrggbbaa`.
    HexLength(usize),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty color string"),
            Self::ComponentCount(n) => {
                write!(f, "color must have 3 or 4 components, got {n}")
            }
            Self::InvalidComponent(c) => {
                write!(f, "invalid color component {c:?}, expected an integer 0-255")
            }
            Self::HexLength(n) => {
                write!(f, "hex color must be #rrggbb or #rrggbbaa, got {n} digits")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

/// A gradient ramp definition that could not be built.
#[derive(Debug, Clone, PartialEq)]
pub enum RampError {
    /// One of the ramp colors failed to decode.
    Color { value: String, source: ColorParseError },
    /// A stop was not of the form `offset;color`.
    StopSyntax(String),
    /// A stop offset was not a finite number in `[0, 1]`.
    StopOffset(String),
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color { value, source } => write!(f, "bad ramp color {value:?}: {source}"),
            Self::StopSyntax(s) => write!(f, "gradient stop {s:?} must be `offset;color`"),
            Self::StopOffset(s) => write!(f, "gradient stop offset {s:?} must be within 0..1"),
        }
    }
}

impl std::error::Error for RampError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color { source, .. } => Some(source),
            _ => None,
        }
    }
}
