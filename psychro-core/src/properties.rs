//! Moist-air property functions at a fixed atmospheric pressure.
//!
//! Every function works in SI-derived units: temperature in °C, pressure in kPa,
//! humidity ratio in kg of water per kg of dry air, enthalpy in kJ/kg dry air.
//! Conversion to display units happens in [`crate::units`] only.

use crate::{
    bounds::ChartBounds,
    error::{ensure_finite, PsychroError},
};
use psychro_schemas::air::AirState;
use serde::Serialize;

/// Ratio of the molar masses of water vapor and dry air.
const MOLAR_MASS_RATIO: f64 = 0.622;
const CP_DRY_AIR: f64 = 1.006;
const CP_VAPOR: f64 = 1.86;
const LATENT_HEAT_0C: f64 = 2501.0;

/// Saturation vapor pressure over water (Magnus/Tetens fit), in kPa.
///
/// No bounds check: outside roughly [-10, 50] °C the empirical fit degrades.
pub fn saturation_pressure(temperature_c: f64) -> f64 {
    0.61078 * ((17.27 * temperature_c) / (temperature_c + 237.3)).exp()
}

/// Humidity ratio for a dry-bulb temperature and a relative humidity fraction.
///
/// # Errors
///
/// Returns [`PsychroError::VaporPressureAtAtmospheric`] when the partial vapor
/// pressure reaches the atmospheric pressure, where the ratio diverges or turns
/// negative.
pub fn humidity_ratio(
    temperature_c: f64,
    relative_humidity: f64,
    atmospheric_kpa: f64,
) -> Result<f64, PsychroError> {
    let vapor_pressure_kpa = relative_humidity * saturation_pressure(temperature_c);
    if vapor_pressure_kpa >= atmospheric_kpa {
        return Err(PsychroError::VaporPressureAtAtmospheric {
            temperature_c,
            vapor_pressure_kpa,
            atmospheric_kpa,
        });
    }
    Ok(MOLAR_MASS_RATIO * vapor_pressure_kpa / (atmospheric_kpa - vapor_pressure_kpa))
}

pub fn humidity_ratio_saturation(temperature_c: f64, atmospheric_kpa: f64) -> Result<f64, PsychroError> {
    humidity_ratio(temperature_c, 1.0, atmospheric_kpa)
}

/// Linear moist-air enthalpy approximation.
pub fn enthalpy(temperature_c: f64, humidity_ratio: f64) -> f64 {
    CP_DRY_AIR * temperature_c + humidity_ratio * (LATENT_HEAT_0C + CP_VAPOR * temperature_c)
}

/// Inverse of [`enthalpy`] for a known temperature.
pub fn humidity_ratio_from_enthalpy(enthalpy_kj_kg: f64, temperature_c: f64) -> f64 {
    (enthalpy_kj_kg - CP_DRY_AIR * temperature_c) / (LATENT_HEAT_0C + CP_VAPOR * temperature_c)
}

/// Evenly spaced temperatures over the chart range, both ends included.
pub fn temperature_samples(bounds: &ChartBounds) -> Vec<f64> {
    let n = bounds.samples.max(2);
    let step = (bounds.t_max_c - bounds.t_min_c) / (n - 1) as f64;
    (0..n)
        .map(|i| {
            if i == n - 1 {
                bounds.t_max_c
            } else {
                bounds.t_min_c + step * i as f64
            }
        })
        .collect()
}

/// Humidity ratio at a constant relative humidity over a temperature sequence.
/// Samples outside the physical domain come back as `None`.
pub fn humidity_ratio_series(
    temperatures: &[f64],
    relative_humidity: f64,
    atmospheric_kpa: f64,
) -> Vec<Option<f64>> {
    temperatures
        .iter()
        .map(|&t| humidity_ratio(t, relative_humidity, atmospheric_kpa).ok())
        .collect()
}

pub fn humidity_ratio_from_enthalpy_series(enthalpy_kj_kg: f64, temperatures: &[f64]) -> Vec<f64> {
    temperatures
        .iter()
        .map(|&t| humidity_ratio_from_enthalpy(enthalpy_kj_kg, t))
        .collect()
}

/// An air state with its derived properties resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatePoint {
    pub temperature_c: f64,
    pub relative_humidity: f64,
    /// kg/kg dry air
    pub humidity_ratio: f64,
    /// kJ/kg dry air
    pub enthalpy: f64,
}

impl StatePoint {
    /// Validates an [`AirState`] and derives its humidity ratio and enthalpy.
    ///
    /// # Errors
    ///
    /// Non-finite inputs, a relative humidity outside `[0, 1]`, or a vapor
    /// pressure at or above the atmospheric pressure.
    pub fn resolve(state: &AirState, bounds: &ChartBounds) -> Result<Self, PsychroError> {
        let temperature_c = ensure_finite("temperature", state.temperature_c)?;
        let relative_humidity = ensure_finite("relative humidity", state.relative_humidity)?;
        if !(0.0..=1.0).contains(&relative_humidity) {
            return Err(PsychroError::OutOfRange {
                quantity: "relative humidity",
                value: relative_humidity,
                min: 0.0,
                max: 1.0,
            });
        }

        let humidity_ratio = humidity_ratio(temperature_c, relative_humidity, bounds.atmospheric_pressure_kpa)?;
        Ok(Self {
            temperature_c,
            relative_humidity,
            humidity_ratio,
            enthalpy: enthalpy(temperature_c, humidity_ratio),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: f64 = 101.325;

    #[test]
    fn saturation_pressure_at_25c() {
        let psat = saturation_pressure(25.0);
        assert!((psat - 3.1699).abs() < 5e-3, "psat = {psat}");
    }

    #[test]
    fn humidity_ratio_at_25c_half_saturated() {
        let w = humidity_ratio(25.0, 0.5, P).unwrap();
        assert!((w - 0.00988).abs() < 1e-5, "w = {w}");
    }

    #[test]
    fn humidity_ratio_saturated_at_freezing() {
        let w = humidity_ratio_saturation(0.0, P).unwrap();
        assert!((w - 0.00377).abs() < 1e-5, "w = {w}");
    }

    #[test]
    fn dry_air_has_zero_humidity_ratio() {
        for t in [-10.0, 0.0, 22.5, 50.0] {
            assert_eq!(humidity_ratio(t, 0.0, P).unwrap(), 0.0);
        }
    }

    #[test]
    fn saturation_matches_full_relative_humidity() {
        for t in temperature_samples(&ChartBounds::default()) {
            assert_eq!(humidity_ratio(t, 1.0, P), humidity_ratio_saturation(t, P));
        }
    }

    #[test]
    fn rejects_vapor_pressure_at_atmospheric() {
        // Psat(50 °C) is ~12.3 kPa, so a 10 kPa atmosphere cannot hold saturated air.
        let err = humidity_ratio(50.0, 1.0, 10.0).unwrap_err();
        assert!(err.is_domain_error());

        let psat = saturation_pressure(20.0);
        assert!(humidity_ratio(20.0, 1.0, psat).is_err());
    }

    #[test]
    fn enthalpy_of_reference_state() {
        // 25 °C, 50 % RH: 1.006*25 + 0.009877*(2501 + 46.5) ≈ 50.31 kJ/kg
        let w = humidity_ratio(25.0, 0.5, P).unwrap();
        let h = enthalpy(25.0, w);
        assert!((h - 50.31).abs() < 0.05, "h = {h}");
        assert!((humidity_ratio_from_enthalpy(h, 25.0) - w).abs() < 1e-12);
    }

    #[test]
    fn temperature_samples_span_the_chart() {
        let samples = temperature_samples(&ChartBounds::default());
        assert_eq!(samples.len(), 700);
        assert_eq!(samples[0], -10.0);
        assert_eq!(samples[699], 50.0);
        assert!(samples.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn series_masks_out_of_domain_samples() {
        let series = humidity_ratio_series(&[0.0, 50.0], 1.0, 10.0);
        assert!(series[0].is_some());
        assert!(series[1].is_none());
    }

    #[test]
    fn state_point_rejects_percentages_and_nan() {
        let bounds = ChartBounds::default();
        let pct = StatePoint::resolve(&AirState::new(25.0, 50.0), &bounds);
        assert!(matches!(pct, Err(PsychroError::OutOfRange { .. })));

        let nan = StatePoint::resolve(&AirState::new(f64::NAN, 0.5), &bounds);
        assert_eq!(nan, Err(PsychroError::NonFinite { field: "temperature" }));

        let ok = StatePoint::resolve(&AirState::new(25.0, 0.5), &bounds).unwrap();
        assert!((ok.humidity_ratio - 0.00988).abs() < 1e-5);
    }
}
