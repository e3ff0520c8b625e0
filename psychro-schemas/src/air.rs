use serde::{Deserialize, Serialize};

/// A single moist-air state as supplied by the data-entry shell.
///
/// `relative_humidity` is a fraction in `[0, 1]`, never a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirState {
    pub temperature_c: f64,
    pub relative_humidity: f64,
}

impl AirState {
    pub fn new(temperature_c: f64, relative_humidity: f64) -> Self {
        Self {
            temperature_c,
            relative_humidity,
        }
    }
}
