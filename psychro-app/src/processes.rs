//! Turns raw form entries into averaged process descriptors for the engine.

use psychro_schemas::{
    air::AirState,
    file_formats::{PointReadings, ProcessRequest},
    process::ProcessDescriptor,
};
use thiserror::Error;

pub const MAX_PROCESSES: usize = 10;
pub const MAX_READINGS: usize = 10;

#[derive(Debug, Error, PartialEq)]
pub enum EntryError {
    #[error("Between 1 and 10 processes can be plotted, got {0}")]
    ProcessCount(usize),

    #[error("Process {process}, point {point}: between 1 and 10 readings are required, got {count}")]
    ReadingCount { process: usize, point: u8, count: usize },

    #[error("Process {process}, point {point}: {temperatures} temperature readings but {humidities} humidity readings")]
    MismatchedReadings {
        process: usize,
        point: u8,
        temperatures: usize,
        humidities: usize,
    },

    #[error("Process {process}, point {point}: relative humidity {value}% is outside 0-100%")]
    HumidityOutOfRange { process: usize, point: u8, value: f64 },
}

/// Validates the entries and averages each point's readings into one state.
///
/// Process and point numbers in errors are 1-based, as shown on the form.
pub fn resolve_processes(requests: &[ProcessRequest]) -> Result<Vec<ProcessDescriptor>, EntryError> {
    if requests.is_empty() || requests.len() > MAX_PROCESSES {
        return Err(EntryError::ProcessCount(requests.len()));
    }

    requests
        .iter()
        .enumerate()
        .map(|(i, request)| {
            let process = i + 1;
            let inlet = average_point(&request.point_1, process, 1)?;
            let outlet = average_point(&request.point_2, process, 2)?;
            Ok(ProcessDescriptor::new(inlet, outlet, &request.mode, &request.color).with_reading_counts(
                request.point_1.temperature_c.len(),
                request.point_2.temperature_c.len(),
            ))
        })
        .collect()
}

fn average_point(readings: &PointReadings, process: usize, point: u8) -> Result<AirState, EntryError> {
    let temperatures = readings.temperature_c.len();
    let humidities = readings.relative_humidity_pct.len();
    if temperatures != humidities {
        return Err(EntryError::MismatchedReadings { process, point, temperatures, humidities });
    }
    if temperatures == 0 || temperatures > MAX_READINGS {
        return Err(EntryError::ReadingCount { process, point, count: temperatures });
    }
    if let Some(&value) = readings
        .relative_humidity_pct
        .iter()
        .find(|v| !(0.0..=100.0).contains(*v))
    {
        return Err(EntryError::HumidityOutOfRange { process, point, value });
    }

    Ok(AirState::new(
        mean(&readings.temperature_c),
        mean(&readings.relative_humidity_pct) / 100.0,
    ))
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
