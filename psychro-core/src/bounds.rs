//! Fixed plotting window and atmosphere of the chart.

use crate::error::{ensure_finite, PsychroError};
use serde::{Deserialize, Serialize};

pub const STANDARD_PRESSURE_KPA: f64 = 101.325;
pub const T_MIN_C: f64 = -10.0;
pub const T_MAX_C: f64 = 50.0;
pub const W_MAX_KG_PER_KG: f64 = 0.030;
pub const SATURATION_SAMPLES: usize = 700;

/// Plot bounds and atmospheric pressure, passed explicitly to every
/// property and builder call. Humidity ratios are in kg/kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub atmospheric_pressure_kpa: f64,
    pub t_min_c: f64,
    pub t_max_c: f64,
    pub w_max: f64,
    pub samples: usize,
}

impl Default for ChartBounds {
    fn default() -> Self {
        Self {
            atmospheric_pressure_kpa: STANDARD_PRESSURE_KPA,
            t_min_c: T_MIN_C,
            t_max_c: T_MAX_C,
            w_max: W_MAX_KG_PER_KG,
            samples: SATURATION_SAMPLES,
        }
    }
}

impl ChartBounds {
    pub fn validate(&self) -> Result<(), PsychroError> {
        ensure_finite("atmospheric pressure", self.atmospheric_pressure_kpa)?;
        ensure_finite("minimum temperature", self.t_min_c)?;
        ensure_finite("maximum temperature", self.t_max_c)?;
        ensure_finite("maximum humidity ratio", self.w_max)?;

        if self.atmospheric_pressure_kpa <= 0.0 {
            return Err(PsychroError::InvalidBounds(format!(
                "atmospheric pressure must be positive, got {} kPa",
                self.atmospheric_pressure_kpa
            )));
        }
        if self.t_min_c >= self.t_max_c {
            return Err(PsychroError::InvalidBounds(format!(
                "temperature range [{}, {}] is empty",
                self.t_min_c, self.t_max_c
            )));
        }
        if self.w_max <= 0.0 {
            return Err(PsychroError::InvalidBounds(format!(
                "maximum humidity ratio must be positive, got {}",
                self.w_max
            )));
        }
        if self.samples < 2 {
            return Err(PsychroError::InvalidBounds(format!(
                "at least two temperature samples are required, got {}",
                self.samples
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_valid() {
        let bounds = ChartBounds::default();
        assert!(bounds.validate().is_ok());
        assert_eq!(bounds.atmospheric_pressure_kpa, 101.325);
        assert_eq!((bounds.t_min_c, bounds.t_max_c), (-10.0, 50.0));
    }

    #[test]
    fn rejects_inverted_or_degenerate_bounds() {
        let inverted = ChartBounds { t_min_c: 50.0, t_max_c: -10.0, ..Default::default() };
        assert!(matches!(inverted.validate(), Err(PsychroError::InvalidBounds(_))));

        let single_sample = ChartBounds { samples: 1, ..Default::default() };
        assert!(single_sample.validate().is_err());

        let vacuum = ChartBounds { atmospheric_pressure_kpa: 0.0, ..Default::default() };
        assert!(vacuum.validate().is_err());

        let nan = ChartBounds { w_max: f64::NAN, ..Default::default() };
        assert_eq!(
            nan.validate(),
            Err(PsychroError::NonFinite { field: "maximum humidity ratio" })
        );
    }
}
