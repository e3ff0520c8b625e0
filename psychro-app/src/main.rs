use anyhow::{Context, Result};
use clap::Parser;
use psychro_app::{config, logger, plotting, processes, readings};
use psychro_core::ChartRequestBuilder;
use std::path::PathBuf;

/// Psychrometric chart with multiple annotated HVAC processes.
#[derive(Debug, Parser)]
#[command(name = "psychro-app", version, about)]
struct Cli {
    /// Chart request YAML file.
    #[arg(long, default_value = "psychro-app/request.yaml")]
    request: PathBuf,

    /// Optional CSV of raw readings: process,point,temperature_c,relative_humidity_pct.
    #[arg(long)]
    readings: Option<PathBuf>,

    /// Output PNG path. Defaults to a timestamped file under ./charts.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log curve generation details.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose).context("Failed to install console logger")?;

    println!("--- Psychrometric Chart Tool ---");

    let mut request = config::load_request(&cli.request)?;
    if let Some(path) = &cli.readings {
        readings::merge_readings_csv(&mut request.processes, path)?;
    }

    let descriptors = processes::resolve_processes(&request.processes).context("Invalid process entries")?;

    let mut builder = ChartRequestBuilder::new().with_processes(descriptors);
    if let Some(figure) = request.figure {
        builder = builder.with_size(figure.width_px, figure.height_px);
    }
    let chart = builder.build().context("Invalid chart configuration")?.render();

    let output = cli.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "./charts/psychrometric_{}.png",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ))
    });
    plotting::render_png(&chart, &output)?;

    println!("\nChart complete. Result is in '{}'", output.display());
    Ok(())
}
