//! Fixed reference layers of the chart: saturation curve, constant-RH family,
//! humidity-ratio and dry-bulb gridlines, constant-enthalpy family.

use super::{Layer, Primitive, Stroke, TextStyle};
use crate::{
    bounds::ChartBounds,
    layout::ChartLayout,
    properties::{
        enthalpy, humidity_ratio_from_enthalpy_series, humidity_ratio_series, temperature_samples,
    },
    units::{display_point, from_grams_per_kg, to_grams_per_kg},
};
use log::debug;
use psychro_schemas::color::Rgb;

const RH_LABEL_DX: f64 = 0.5;
const HUMIDITY_LABEL_DX: f64 = 0.5;
const ENTHALPY_LABEL_DX: f64 = -3.0;
const LABEL_FONT_SIZE: f64 = 9.0;

/// A text label anchored in engine units (°C, kg/kg).
#[derive(Debug, Clone, PartialEq)]
pub struct CurveLabel {
    pub at: (f64, f64),
    pub text: String,
}

/// Samples `(T, W kg/kg)` of one curve at a fixed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveFamily {
    pub parameter: f64,
    pub samples: Vec<(f64, f64)>,
    pub label: Option<CurveLabel>,
}

/// A straight gridline at a fixed humidity ratio (kg/kg) or temperature (°C).
#[derive(Debug, Clone, PartialEq)]
pub struct Gridline {
    pub value: f64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub saturation: CurveFamily,
    pub relative_humidity: Vec<CurveFamily>,
    pub humidity_grid: Vec<Gridline>,
    pub temperature_grid: Vec<Gridline>,
    pub enthalpy: Vec<CurveFamily>,
    bounds: ChartBounds,
}

impl Background {
    pub fn build(bounds: &ChartBounds, layout: &ChartLayout) -> Self {
        let temperatures = temperature_samples(bounds);
        let saturation_series = humidity_ratio_series(&temperatures, 1.0, bounds.atmospheric_pressure_kpa);
        let saturation = CurveFamily {
            parameter: 1.0,
            samples: present_samples(&temperatures, &saturation_series),
            label: None,
        };
        debug!(
            "saturation curve: {} samples over [{}, {}] °C",
            saturation.samples.len(),
            bounds.t_min_c,
            bounds.t_max_c
        );

        let background = Self {
            relative_humidity: relative_humidity_family(&temperatures, bounds, layout),
            humidity_grid: humidity_gridlines(bounds, layout),
            temperature_grid: temperature_gridlines(bounds, layout),
            enthalpy: enthalpy_family(&temperatures, &saturation_series, &saturation, bounds, layout),
            saturation,
            bounds: *bounds,
        };
        debug!(
            "background: {} RH curves, {} enthalpy curves ({} labelled)",
            background.relative_humidity.len(),
            background.enthalpy.len(),
            background.enthalpy.iter().filter(|c| c.label.is_some()).count()
        );
        background
    }

    /// Display layers in drawing order, humidity ratios converted to g/kg.
    pub fn layers(&self) -> Vec<Layer> {
        let mut saturation = Layer::new("saturation");
        saturation.push(curve_polyline(&self.saturation, Stroke::solid(Rgb::BLACK, 2.0)));

        let mut relative_humidity = Layer::new("relative-humidity");
        for curve in &self.relative_humidity {
            relative_humidity.push(curve_polyline(curve, Stroke::solid(Rgb::BROWN, 1.0)));
            if let Some(label) = &curve.label {
                relative_humidity.push(label_text(label, TextStyle::plain(Rgb::BROWN, LABEL_FONT_SIZE)));
            }
        }

        let mut humidity_grid = Layer::new("humidity-grid");
        for line in &self.humidity_grid {
            let stroke = Stroke::solid(Rgb::GRAY, 0.6);
            humidity_grid.push(Primitive::Polyline {
                points: vec![
                    display_point(self.bounds.t_min_c, line.value),
                    display_point(self.bounds.t_max_c, line.value),
                ],
                stroke,
            });
            if let Some(text) = &line.label {
                humidity_grid.push(Primitive::Text {
                    at: display_point(self.bounds.t_max_c + HUMIDITY_LABEL_DX, line.value),
                    text: text.clone(),
                    style: TextStyle::plain(Rgb::BLACK, LABEL_FONT_SIZE).centered(),
                });
            }
        }

        let mut temperature_grid = Layer::new("temperature-grid");
        for line in &self.temperature_grid {
            temperature_grid.push(Primitive::Polyline {
                points: vec![display_point(line.value, 0.0), display_point(line.value, self.bounds.w_max)],
                stroke: Stroke::solid(Rgb::LIGHT_GRAY, 0.5),
            });
        }

        let mut enthalpy = Layer::new("enthalpy");
        for curve in &self.enthalpy {
            if curve.samples.len() > 1 {
                enthalpy.push(curve_polyline(curve, Stroke::solid(Rgb::GREEN, 1.0)));
            }
            if let Some(label) = &curve.label {
                enthalpy.push(label_text(label, TextStyle::plain(Rgb::GREEN, LABEL_FONT_SIZE)));
            }
        }

        vec![saturation, relative_humidity, humidity_grid, temperature_grid, enthalpy]
    }
}

fn curve_polyline(curve: &CurveFamily, stroke: Stroke) -> Primitive {
    Primitive::Polyline {
        points: curve.samples.iter().map(|&(t, w)| display_point(t, w)).collect(),
        stroke,
    }
}

fn label_text(label: &CurveLabel, style: TextStyle) -> Primitive {
    Primitive::Text {
        at: display_point(label.at.0, label.at.1),
        text: label.text.clone(),
        style,
    }
}

fn constant_rh_samples(temperatures: &[f64], relative_humidity: f64, bounds: &ChartBounds) -> Vec<(f64, f64)> {
    present_samples(
        temperatures,
        &humidity_ratio_series(temperatures, relative_humidity, bounds.atmospheric_pressure_kpa),
    )
}

fn present_samples(temperatures: &[f64], series: &[Option<f64>]) -> Vec<(f64, f64)> {
    temperatures
        .iter()
        .zip(series)
        .filter_map(|(&t, w)| w.map(|w| (t, w)))
        .collect()
}

fn relative_humidity_family(temperatures: &[f64], bounds: &ChartBounds, layout: &ChartLayout) -> Vec<CurveFamily> {
    layout
        .relative_humidity_levels
        .levels()
        .filter(|&pct| pct > 0 && pct < 100)
        .map(|pct| {
            let rh = f64::from(pct) / 100.0;
            let samples = constant_rh_samples(temperatures, rh, bounds);
            let label = nearest_sample(&samples, layout.relative_humidity_label_at_c).map(|(t, w)| CurveLabel {
                at: (t + RH_LABEL_DX, w),
                text: format!("{pct}%"),
            });
            CurveFamily { parameter: rh, samples, label }
        })
        .collect()
}

fn nearest_sample(samples: &[(f64, f64)], temperature_c: f64) -> Option<(f64, f64)> {
    samples
        .iter()
        .copied()
        .min_by(|a, b| {
            (a.0 - temperature_c)
                .abs()
                .partial_cmp(&(b.0 - temperature_c).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

fn humidity_gridlines(bounds: &ChartBounds, layout: &ChartLayout) -> Vec<Gridline> {
    let w_max_g = to_grams_per_kg(bounds.w_max).round().max(0.0) as u32;
    (0..=w_max_g)
        .step_by(layout.humidity_grid_step_g.max(1) as usize)
        .map(|g| Gridline {
            value: from_grams_per_kg(f64::from(g)),
            label: Some(g.to_string()),
        })
        .collect()
}

fn temperature_gridlines(bounds: &ChartBounds, layout: &ChartLayout) -> Vec<Gridline> {
    let step = f64::from(layout.temperature_grid_step_c.max(1));
    let count = ((bounds.t_max_c - bounds.t_min_c) / step).floor() as usize;
    (0..=count)
        .map(|i| Gridline {
            value: bounds.t_min_c + step * i as f64,
            label: None,
        })
        .collect()
}

fn enthalpy_family(
    temperatures: &[f64],
    saturation_series: &[Option<f64>],
    saturation: &CurveFamily,
    bounds: &ChartBounds,
    layout: &ChartLayout,
) -> Vec<CurveFamily> {
    layout
        .enthalpy_levels
        .levels()
        .map(|level| {
            let h = f64::from(level);
            // Only the physically valid part of the line survives: 0 <= W <= Wsat(T).
            let samples = temperatures
                .iter()
                .zip(humidity_ratio_from_enthalpy_series(h, temperatures))
                .zip(saturation_series)
                .filter_map(|((&t, w), w_sat)| match w_sat {
                    Some(w_sat) if w >= 0.0 && w <= *w_sat => Some((t, w)),
                    _ => None,
                })
                .collect();
            CurveFamily {
                parameter: h,
                samples,
                label: enthalpy_label(h, saturation, bounds, layout),
            }
        })
        .collect()
}

/// First saturation sample whose enthalpy lies within the tolerance of `h`.
/// A match above the humidity-ratio window gets no label.
fn enthalpy_label(h: f64, saturation: &CurveFamily, bounds: &ChartBounds, layout: &ChartLayout) -> Option<CurveLabel> {
    saturation
        .samples
        .iter()
        .find(|&&(t, w_sat)| (enthalpy(t, w_sat) - h).abs() < layout.enthalpy_label_tolerance)
        .filter(|&&(_, w_sat)| w_sat <= bounds.w_max)
        .map(|&(t, w_sat)| CurveLabel {
            at: (t + ENTHALPY_LABEL_DX, w_sat),
            text: format!("{}", h + layout.enthalpy_label_offset),
        })
}
