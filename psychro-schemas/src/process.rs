use crate::air::AirState;
use serde::{Deserialize, Serialize};

/// A fully resolved air-treatment process: one averaged state per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    pub inlet: AirState,
    pub outlet: AirState,
    /// Display label, one of "DEC", "IEC", "DX" or "Custom".
    pub mode: String,
    /// Hex color string such as `#FF0000`.
    pub color: String,
    /// Number of raw readings averaged into the inlet and outlet states.
    pub reading_counts: [usize; 2],
}

impl ProcessDescriptor {
    pub fn new(inlet: AirState, outlet: AirState, mode: &str, color: &str) -> Self {
        Self {
            inlet,
            outlet,
            mode: mode.to_string(),
            color: color.to_string(),
            reading_counts: [1, 1],
        }
    }

    pub fn with_reading_counts(mut self, inlet: usize, outlet: usize) -> Self {
        self.reading_counts = [inlet, outlet];
        self
    }
}
