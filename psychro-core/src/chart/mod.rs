//! The chart artifact and the builders that produce it.
//!
//! A [`Chart`] is a backend-agnostic scene: ordered layers of polylines, markers
//! and text, all in display coordinates (°C, g/kg). The presentation shell draws
//! it with whatever plotting backend it uses.

pub mod assembler;
pub mod background;
pub mod builder;
pub mod overlay;

use psychro_schemas::color::Rgb;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    Solid,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
    pub dash: LineDash,
}

impl Stroke {
    pub fn solid(color: Rgb, width: f64) -> Self {
        Self { color, width, dash: LineDash::Solid }
    }

    pub fn dotted(color: Rgb, width: f64) -> Self {
        Self { color, width, dash: LineDash::Dotted }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAnchor {
    Baseline,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: Rgb,
    pub font_size: f64,
    pub bold: bool,
    pub anchor: VerticalAnchor,
}

impl TextStyle {
    pub fn plain(color: Rgb, font_size: f64) -> Self {
        Self { color, font_size, bold: false, anchor: VerticalAnchor::Baseline }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.anchor = VerticalAnchor::Center;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: Stroke,
    },
    Marker {
        at: (f64, f64),
        radius: f64,
        color: Rgb,
    },
    Text {
        at: (f64, f64),
        text: String,
        style: TextStyle,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub name: String,
    pub primitives: Vec<Primitive>,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), primitives: Vec::new() }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[(f64, f64)], &Stroke)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Polyline { points, stroke } => Some((points.as_slice(), stroke)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&(f64, f64), &str)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { at, text, .. } => Some((at, text.as_str())),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Marker { at, .. } => Some(at),
            _ => None,
        })
    }
}

/// A descriptor that was left out of the chart, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedProcess {
    pub index: usize,
    pub reason: String,
}

/// Axis window in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisWindow {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// The finished chart, ready for a plotting backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub subtitle: String,
    pub x_label: String,
    pub y_label: String,
    pub window: AxisWindow,
    pub size_px: (u32, u32),
    /// Always `false`: gridlines are drawn explicitly as layers.
    pub default_grid: bool,
    pub layers: Vec<Layer>,
    pub skipped: Vec<SkippedProcess>,
}

impl Chart {
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }
}
