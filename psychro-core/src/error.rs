use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PsychroError {
    #[error(
        "Vapor pressure {vapor_pressure_kpa:.3} kPa at {temperature_c}°C reaches atmospheric pressure {atmospheric_kpa} kPa"
    )]
    VaporPressureAtAtmospheric {
        temperature_c: f64,
        vapor_pressure_kpa: f64,
        atmospheric_kpa: f64,
    },

    #[error("{quantity} {value} is outside [{min}, {max}]")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Non-finite value for {field}")]
    NonFinite { field: &'static str },

    #[error("Unknown process mode '{0}'")]
    UnknownMode(String),

    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("Invalid chart configuration: {0}")]
    InvalidBounds(String),
}

impl PsychroError {
    /// Domain errors are physical impossibilities; everything else is a bad input or setting.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, PsychroError::VaporPressureAtAtmospheric { .. })
    }
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, PsychroError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PsychroError::NonFinite { field })
    }
}
