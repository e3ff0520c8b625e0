//! Raw sensor readings supplied as CSV instead of being typed into the request.

use anyhow::{bail, Context, Result};
use psychro_schemas::file_formats::{PointReadings, ProcessRequest, ReadingRecord};
use std::path::Path;

/// Parses `process,point,temperature_c,relative_humidity_pct` rows.
pub fn parse_readings<P: AsRef<Path>>(path: P) -> Result<Vec<ReadingRecord>> {
    let path = path.as_ref();
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Failed to open readings file {:?}", path))?;

    let mut records = Vec::new();
    for (line, result) in reader.deserialize().enumerate() {
        let record: ReadingRecord =
            result.with_context(|| format!("Failed to parse reading {} in {:?}", line + 1, path))?;
        records.push(record);
    }
    Ok(records)
}

/// Appends each reading to the matching process point.
pub fn merge_readings(processes: &mut [ProcessRequest], records: &[ReadingRecord]) -> Result<()> {
    for record in records {
        let count = processes.len();
        let process = match record.process.checked_sub(1).and_then(|i| processes.get_mut(i)) {
            Some(process) => process,
            None => bail!("Reading references process {} but the request has {}", record.process, count),
        };
        let point: &mut PointReadings = match record.point {
            1 => &mut process.point_1,
            2 => &mut process.point_2,
            other => bail!("Reading for process {} references point {}, expected 1 or 2", record.process, other),
        };
        point.temperature_c.push(record.temperature_c);
        point.relative_humidity_pct.push(record.relative_humidity_pct);
    }
    Ok(())
}

pub fn merge_readings_csv<P: AsRef<Path>>(processes: &mut [ProcessRequest], path: P) -> Result<()> {
    let records = parse_readings(&path)?;
    println!("[Readings] Merging {} reading(s) from '{}'", records.len(), path.as_ref().display());
    merge_readings(processes, &records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn empty_process() -> ProcessRequest {
        ProcessRequest {
            point_1: PointReadings::default(),
            point_2: PointReadings::default(),
            mode: "IEC".to_string(),
            color: "#00FF00".to_string(),
        }
    }

    #[test]
    fn merges_csv_rows_into_points() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "process,point,temperature_c,relative_humidity_pct").unwrap();
        writeln!(file, "1,1,34.5,28.0").unwrap();
        writeln!(file, "1,1,35.5,30.0").unwrap();
        writeln!(file, "1,2,26.0,55.0").unwrap();
        file.flush().unwrap();

        let mut processes = vec![empty_process()];
        merge_readings_csv(&mut processes, file.path()).unwrap();

        assert_eq!(processes[0].point_1.temperature_c, vec![34.5, 35.5]);
        assert_eq!(processes[0].point_1.relative_humidity_pct, vec![28.0, 30.0]);
        assert_eq!(processes[0].point_2.temperature_c, vec![26.0]);
    }

    #[test]
    fn rejects_unknown_process_or_point() {
        let mut processes = vec![empty_process()];
        let stray = ReadingRecord { process: 2, point: 1, temperature_c: 20.0, relative_humidity_pct: 50.0 };
        assert!(merge_readings(&mut processes, &[stray]).is_err());

        let zero = ReadingRecord { process: 0, point: 1, temperature_c: 20.0, relative_humidity_pct: 50.0 };
        assert!(merge_readings(&mut processes, &[zero]).is_err());

        let bad_point = ReadingRecord { process: 1, point: 3, temperature_c: 20.0, relative_humidity_pct: 50.0 };
        assert!(merge_readings(&mut processes, &[bad_point]).is_err());
    }

    #[test]
    fn reports_malformed_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "process,point,temperature_c,relative_humidity_pct").unwrap();
        writeln!(file, "1,1,warm,28.0").unwrap();
        file.flush().unwrap();

        let err = parse_readings(file.path()).unwrap_err();
        assert!(format!("{err}").contains("reading 1"));
    }
}
