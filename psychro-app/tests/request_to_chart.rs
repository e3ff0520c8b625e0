use psychro_app::{config, processes, readings};
use psychro_core::ChartRequestBuilder;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn sample_request() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("request.yaml")
}

#[test]
fn sample_request_renders_both_processes() {
    let request = config::load_request(sample_request()).unwrap();
    let descriptors = processes::resolve_processes(&request.processes).unwrap();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].reading_counts, [3, 3]);

    let figure = request.figure.unwrap();
    let chart = ChartRequestBuilder::new()
        .with_processes(descriptors)
        .with_size(figure.width_px, figure.height_px)
        .build()
        .unwrap()
        .render();

    assert!(chart.skipped.is_empty());
    assert_eq!(chart.size_px, (1400, 900));
    let dx = chart.layer("process-2").unwrap();
    let labels: Vec<&str> = dx.texts().map(|(_, text)| text).collect();
    assert_eq!(labels, vec!["(30.0°C, 80.0%)", "(15.0°C, 90.0%)", "DX"]);
}

#[test]
fn csv_readings_extend_the_request() {
    let mut request = config::load_request(sample_request()).unwrap();

    let mut csv = NamedTempFile::new().unwrap();
    writeln!(csv, "process,point,temperature_c,relative_humidity_pct").unwrap();
    writeln!(csv, "2,1,32.0,76.0").unwrap();
    writeln!(csv, "2,2,17.0,88.0").unwrap();
    csv.flush().unwrap();

    readings::merge_readings_csv(&mut request.processes, csv.path()).unwrap();
    let descriptors = processes::resolve_processes(&request.processes).unwrap();

    let dx = &descriptors[1];
    assert_eq!(dx.reading_counts, [2, 2]);
    assert!((dx.inlet.temperature_c - 31.0).abs() < 1e-12);
    assert!((dx.inlet.relative_humidity - 0.78).abs() < 1e-12);
    assert!((dx.outlet.temperature_c - 16.0).abs() < 1e-12);
}
