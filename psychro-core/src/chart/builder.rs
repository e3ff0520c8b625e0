use super::{
    assembler::assemble,
    background::Background,
    overlay::ProcessOverlay,
    Chart, SkippedProcess,
};
use crate::{bounds::ChartBounds, error::PsychroError, layout::ChartLayout};
use log::{info, warn};
use psychro_schemas::process::ProcessDescriptor;

/// A fluent builder for a chart request.
///
/// Bounds and layout default to the standard chart; descriptors must already
/// be averaged with relative humidity as a fraction.
#[derive(Debug, Default)]
pub struct ChartRequestBuilder {
    bounds: Option<ChartBounds>,
    layout: Option<ChartLayout>,
    processes: Vec<ProcessDescriptor>,
}

impl ChartRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, bounds: ChartBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Overrides only the figure size of the layout.
    pub fn with_size(mut self, width_px: u32, height_px: u32) -> Self {
        let mut layout = self.layout.take().unwrap_or_default();
        layout.size_px = (width_px, height_px);
        self.layout = Some(layout);
        self
    }

    pub fn with_processes(mut self, processes: Vec<ProcessDescriptor>) -> Self {
        self.processes = processes;
        self
    }

    pub fn add_process(mut self, process: ProcessDescriptor) -> Self {
        self.processes.push(process);
        self
    }

    /// # Errors
    ///
    /// Returns a `PsychroError` if the bounds or layout are unusable. Individual
    /// descriptors are not checked here; bad ones are skipped at render time.
    pub fn build(self) -> Result<ChartRequest, PsychroError> {
        let bounds = self.bounds.unwrap_or_default();
        let layout = self.layout.unwrap_or_default();
        bounds.validate()?;
        layout.validate()?;
        Ok(ChartRequest {
            bounds,
            layout,
            processes: self.processes,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ChartRequest {
    bounds: ChartBounds,
    layout: ChartLayout,
    processes: Vec<ProcessDescriptor>,
}

impl ChartRequest {
    /// Computes a fresh chart. A descriptor that fails validation is left out
    /// and reported in [`Chart::skipped`]; the others still render.
    pub fn render(&self) -> Chart {
        let background = Background::build(&self.bounds, &self.layout);

        let mut overlays = Vec::with_capacity(self.processes.len());
        let mut skipped = Vec::new();
        for (index, descriptor) in self.processes.iter().enumerate() {
            match ProcessOverlay::from_descriptor(descriptor, &self.bounds) {
                Ok(overlay) => overlays.push(overlay),
                Err(e) => {
                    warn!("Skipping process {}: {}", index + 1, e);
                    skipped.push(SkippedProcess { index, reason: e.to_string() });
                }
            }
        }

        info!("Assembled chart with {} of {} processes", overlays.len(), self.processes.len());
        assemble(background.layers(), &overlays, &self.bounds, &self.layout, skipped)
    }
}
