//! One air-treatment process drawn as an annotated straight segment.

use super::{Layer, Primitive, Stroke, TextStyle};
use crate::{
    bounds::ChartBounds,
    error::PsychroError,
    properties::StatePoint,
    units::display_point,
};
use psychro_schemas::{color::Rgb, process::ProcessDescriptor};
use serde::Serialize;
use std::fmt;

const LINE_WIDTH: f64 = 3.0;
const PROJECTION_WIDTH: f64 = 1.0;
const MARKER_RADIUS: f64 = 5.0;
/// Annotation offset from each point, in display units (°C, g/kg).
const ANNOTATION_OFFSET: (f64, f64) = (0.4, 0.4);
const MODE_LABEL_DX: f64 = 0.5;
const ANNOTATION_FONT_SIZE: f64 = 10.0;
const MODE_FONT_SIZE: f64 = 12.0;

/// The fixed set of process kinds offered to the user. Purely descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProcessMode {
    /// Direct evaporative cooling.
    Dec,
    /// Indirect evaporative cooling.
    Iec,
    /// Direct-expansion refrigeration.
    Dx,
    Custom,
}

impl ProcessMode {
    pub const ALL: [ProcessMode; 4] = [ProcessMode::Dec, ProcessMode::Iec, ProcessMode::Dx, ProcessMode::Custom];

    pub fn from_label(label: &str) -> Result<Self, PsychroError> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label() == label.trim())
            .ok_or_else(|| PsychroError::UnknownMode(label.to_string()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProcessMode::Dec => "DEC",
            ProcessMode::Iec => "IEC",
            ProcessMode::Dx => "DX",
            ProcessMode::Custom => "Custom",
        }
    }
}

impl fmt::Display for ProcessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated process with both end states resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOverlay {
    pub inlet: StatePoint,
    pub outlet: StatePoint,
    pub mode: ProcessMode,
    pub color: Rgb,
}

impl ProcessOverlay {
    /// # Errors
    ///
    /// Returns the first problem found with the descriptor: unknown mode,
    /// malformed color, non-finite or out-of-range humidity, or an inlet/outlet
    /// state whose vapor pressure reaches the atmospheric pressure.
    pub fn from_descriptor(descriptor: &ProcessDescriptor, bounds: &ChartBounds) -> Result<Self, PsychroError> {
        let mode = ProcessMode::from_label(&descriptor.mode)?;
        let color =
            Rgb::from_hex(&descriptor.color).ok_or_else(|| PsychroError::InvalidColor(descriptor.color.clone()))?;

        Ok(Self {
            inlet: StatePoint::resolve(&descriptor.inlet, bounds)?,
            outlet: StatePoint::resolve(&descriptor.outlet, bounds)?,
            mode,
            color,
        })
    }

    /// Chart-space coordinates `(T, W g/kg)` of the inlet and outlet.
    pub fn endpoints(&self) -> [(f64, f64); 2] {
        [
            display_point(self.inlet.temperature_c, self.inlet.humidity_ratio),
            display_point(self.outlet.temperature_c, self.outlet.humidity_ratio),
        ]
    }

    pub fn layer(&self, name: impl Into<String>, bounds: &ChartBounds) -> Layer {
        let mut layer = Layer::new(name);
        let [p1, p2] = self.endpoints();

        layer.push(Primitive::Polyline {
            points: vec![p1, p2],
            stroke: Stroke::solid(self.color, LINE_WIDTH),
        });
        for at in [p1, p2] {
            layer.push(Primitive::Marker { at, radius: MARKER_RADIUS, color: self.color });
        }

        let projection = Stroke::dotted(self.color, PROJECTION_WIDTH);
        for (t, w) in [p1, p2] {
            layer.push(Primitive::Polyline { points: vec![(t, 0.0), (t, w)], stroke: projection });
            layer.push(Primitive::Polyline { points: vec![(bounds.t_min_c, w), (t, w)], stroke: projection });
        }

        let annotation = TextStyle::plain(self.color, ANNOTATION_FONT_SIZE);
        for (state, (t, w)) in [(&self.inlet, p1), (&self.outlet, p2)] {
            layer.push(Primitive::Text {
                at: (t + ANNOTATION_OFFSET.0, w + ANNOTATION_OFFSET.1),
                text: format!("({:.1}°C, {:.1}%)", state.temperature_c, state.relative_humidity * 100.0),
                style: annotation,
            });
        }

        layer.push(Primitive::Text {
            at: ((p1.0 + p2.0) / 2.0 + MODE_LABEL_DX, (p1.1 + p2.1) / 2.0),
            text: self.mode.label().to_string(),
            style: TextStyle::plain(self.color, MODE_FONT_SIZE).bold(),
        });

        layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::LineDash;
    use psychro_schemas::air::AirState;

    fn cooling_coil() -> ProcessDescriptor {
        ProcessDescriptor::new(AirState::new(30.0, 0.8), AirState::new(15.0, 0.9), "DX", "#1E90FF")
    }

    #[test]
    fn mode_labels_round_trip() {
        for mode in ProcessMode::ALL {
            assert_eq!(ProcessMode::from_label(mode.label()), Ok(mode));
        }
        assert_eq!(ProcessMode::from_label(" IEC "), Ok(ProcessMode::Iec));
        assert_eq!(
            ProcessMode::from_label("dec"),
            Err(PsychroError::UnknownMode("dec".to_string()))
        );
    }

    #[test]
    fn rejects_bad_descriptors() {
        let bounds = ChartBounds::default();

        let mut bad_color = cooling_coil();
        bad_color.color = "blue".to_string();
        assert_eq!(
            ProcessOverlay::from_descriptor(&bad_color, &bounds),
            Err(PsychroError::InvalidColor("blue".to_string()))
        );

        let mut percent = cooling_coil();
        percent.outlet.relative_humidity = 90.0;
        assert!(matches!(
            ProcessOverlay::from_descriptor(&percent, &bounds),
            Err(PsychroError::OutOfRange { .. })
        ));

        let mut infinite = cooling_coil();
        infinite.inlet.temperature_c = f64::INFINITY;
        assert!(matches!(
            ProcessOverlay::from_descriptor(&infinite, &bounds),
            Err(PsychroError::NonFinite { .. })
        ));
    }

    #[test]
    fn draws_segment_markers_and_projections() {
        let bounds = ChartBounds::default();
        let overlay = ProcessOverlay::from_descriptor(&cooling_coil(), &bounds).unwrap();
        let layer = overlay.layer("process-1", &bounds);
        let [p1, p2] = overlay.endpoints();

        assert!((p1.1 - 21.56).abs() < 0.01, "inlet W = {}", p1.1);
        assert!((p2.1 - 9.57).abs() < 0.01, "outlet W = {}", p2.1);

        let lines: Vec<_> = layer.polylines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].0, &[p1, p2]);
        assert_eq!(lines[0].1.width, 3.0);
        assert_eq!(lines[1].0, &[(30.0, 0.0), p1]);
        assert_eq!(lines[2].0, &[(-10.0, p1.1), p1]);
        assert_eq!(lines[3].0, &[(15.0, 0.0), p2]);
        assert_eq!(lines[4].0, &[(-10.0, p2.1), p2]);
        assert!(lines[1..].iter().all(|(_, s)| s.dash == LineDash::Dotted));

        assert_eq!(layer.markers().copied().collect::<Vec<_>>(), vec![p1, p2]);
    }

    #[test]
    fn annotates_points_and_mode() {
        let bounds = ChartBounds::default();
        let overlay = ProcessOverlay::from_descriptor(&cooling_coil(), &bounds).unwrap();
        let layer = overlay.layer("process-1", &bounds);
        let [p1, p2] = overlay.endpoints();

        let texts: Vec<_> = layer.texts().collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0].1, "(30.0°C, 80.0%)");
        assert_eq!(*texts[0].0, (p1.0 + 0.4, p1.1 + 0.4));
        assert_eq!(texts[1].1, "(15.0°C, 90.0%)");
        assert_eq!(texts[2].1, "DX");
        assert_eq!(*texts[2].0, ((p1.0 + p2.0) / 2.0 + 0.5, (p1.1 + p2.1) / 2.0));
    }

    #[test]
    fn identical_endpoints_degenerate_to_a_point() {
        let bounds = ChartBounds::default();
        let state = AirState::new(20.0, 0.5);
        let descriptor = ProcessDescriptor::new(state, state, "Custom", "#00FF00");
        let overlay = ProcessOverlay::from_descriptor(&descriptor, &bounds).unwrap();
        let [p1, p2] = overlay.endpoints();
        assert_eq!(p1, p2);
        assert_eq!(overlay.layer("p", &bounds).polylines().count(), 5);
    }
}
