//! Presentation parameters of the chart background that are not physical constants.

use crate::error::{ensure_finite, PsychroError};
use serde::{Deserialize, Serialize};

/// Inclusive integer sequence `start, start + step, ..., <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
    pub start: u32,
    pub end: u32,
    pub step: u32,
}

impl LevelRange {
    pub const fn new(start: u32, end: u32, step: u32) -> Self {
        Self { start, end, step }
    }

    pub fn levels(&self) -> impl Iterator<Item = u32> {
        (self.start..=self.end).step_by(self.step.max(1) as usize)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub size_px: (u32, u32),
    /// Relative humidity levels in percent.
    pub relative_humidity_levels: LevelRange,
    /// The RH label sits on the sample nearest this temperature.
    pub relative_humidity_label_at_c: f64,
    /// Humidity-ratio gridline spacing in g/kg.
    pub humidity_grid_step_g: u32,
    /// Dry-bulb gridline spacing in °C.
    pub temperature_grid_step_c: u32,
    /// Enthalpy levels in kJ/kg dry air.
    pub enthalpy_levels: LevelRange,
    /// Added to each enthalpy level to form its label text.
    pub enthalpy_label_offset: f64,
    /// Maximum |h_sat - h| for a saturation sample to carry the enthalpy label.
    pub enthalpy_label_tolerance: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            size_px: (1400, 900),
            relative_humidity_levels: LevelRange::new(10, 90, 10),
            relative_humidity_label_at_c: 30.0,
            humidity_grid_step_g: 2,
            temperature_grid_step_c: 5,
            enthalpy_levels: LevelRange::new(10, 125, 5),
            enthalpy_label_offset: -5.0,
            enthalpy_label_tolerance: 0.3,
        }
    }
}

impl ChartLayout {
    pub fn validate(&self) -> Result<(), PsychroError> {
        ensure_finite("relative humidity label temperature", self.relative_humidity_label_at_c)?;
        ensure_finite("enthalpy label offset", self.enthalpy_label_offset)?;
        ensure_finite("enthalpy label tolerance", self.enthalpy_label_tolerance)?;

        if self.size_px.0 == 0 || self.size_px.1 == 0 {
            return Err(PsychroError::InvalidBounds(format!(
                "figure size {}x{} has no area",
                self.size_px.0, self.size_px.1
            )));
        }
        if self.humidity_grid_step_g == 0 || self.temperature_grid_step_c == 0 {
            return Err(PsychroError::InvalidBounds("gridline spacing must be positive".to_string()));
        }
        if self.enthalpy_levels.step == 0 || self.relative_humidity_levels.step == 0 {
            return Err(PsychroError::InvalidBounds("curve level step must be positive".to_string()));
        }
        if self.relative_humidity_levels.end > 100 {
            return Err(PsychroError::InvalidBounds(format!(
                "relative humidity level {}% exceeds 100%",
                self.relative_humidity_levels.end
            )));
        }
        if self.enthalpy_label_tolerance <= 0.0 {
            return Err(PsychroError::InvalidBounds(
                "enthalpy label tolerance must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_levels_match_the_chart_legend() {
        let layout = ChartLayout::default();
        let rh: Vec<u32> = layout.relative_humidity_levels.levels().collect();
        assert_eq!(rh, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);

        let h: Vec<u32> = layout.enthalpy_levels.levels().collect();
        assert_eq!(h.first(), Some(&10));
        assert_eq!(h.last(), Some(&125));
        assert_eq!(h.len(), 24);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn rejects_zero_steps() {
        let layout = ChartLayout { humidity_grid_step_g: 0, ..Default::default() };
        assert!(layout.validate().is_err());

        let layout = ChartLayout {
            enthalpy_levels: LevelRange::new(10, 125, 0),
            ..Default::default()
        };
        assert!(layout.validate().is_err());
    }
}
