use anyhow::{Context, Result};
use psychro_schemas::file_formats::ChartRequestFile;
use std::{fs, path::Path};

pub const SUPPORTED_SCHEMA_VERSION: &str = "1.0";

/// Loads a chart request YAML file.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<ChartRequestFile> {
    let path = path.as_ref();
    println!("Loading chart request from '{}'...", path.display());

    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let request: ChartRequestFile =
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse YAML from {:?}", path))?;

    if request.schema_version != SUPPORTED_SCHEMA_VERSION {
        log::warn!(
            "Request schema version '{}' differs from supported '{}'",
            request.schema_version,
            SUPPORTED_SCHEMA_VERSION
        );
    }

    println!("Chart request loaded: {} process(es).", request.processes.len());
    Ok(request)
}
