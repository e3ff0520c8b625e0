use serde::Deserialize;

fn default_color() -> String {
    "#FF0000".to_string()
}

fn default_mode() -> String {
    "DEC".to_string()
}

/// Top-level layout of a chart request YAML file.
#[derive(Debug, Deserialize)]
pub struct ChartRequestFile {
    pub schema_version: String,
    #[serde(default)]
    pub figure: Option<FigureSettings>,
    pub processes: Vec<ProcessRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FigureSettings {
    pub width_px: u32,
    pub height_px: u32,
}

/// Raw, un-averaged readings for one process as entered by the user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessRequest {
    pub point_1: PointReadings,
    pub point_2: PointReadings,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_color")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PointReadings {
    #[serde(default)]
    pub temperature_c: Vec<f64>,
    #[serde(default)]
    pub relative_humidity_pct: Vec<f64>,
}

/// One row of a sensor readings CSV file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReadingRecord {
    /// 1-based process index.
    pub process: usize,
    /// 1 for the inlet point, 2 for the outlet point.
    pub point: u8,
    pub temperature_c: f64,
    pub relative_humidity_pct: f64,
}
