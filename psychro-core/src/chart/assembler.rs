use super::{overlay::ProcessOverlay, AxisWindow, Chart, Layer, SkippedProcess};
use crate::{bounds::ChartBounds, layout::ChartLayout, units::to_grams_per_kg};

pub const X_LABEL: &str = "Dry Bulb Temperature (°C)";
pub const Y_LABEL: &str = "Humidity Ratio (g/kg dry air)";
pub const SUBTITLE: &str = "Annotated Points, Projections & Multiple Modes";

/// Composes background layers and process overlays into one chart.
///
/// Overlays are layered in the given order, so later processes draw on top of
/// earlier ones. The axis window is the chart bounds, never fitted to the data.
pub fn assemble(
    background: Vec<Layer>,
    overlays: &[ProcessOverlay],
    bounds: &ChartBounds,
    layout: &ChartLayout,
    skipped: Vec<SkippedProcess>,
) -> Chart {
    let mut layers = background;
    layers.extend(
        overlays
            .iter()
            .enumerate()
            .map(|(i, overlay)| overlay.layer(format!("process-{}", i + 1), bounds)),
    );

    Chart {
        title: title(bounds),
        subtitle: SUBTITLE.to_string(),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        window: AxisWindow {
            x: (bounds.t_min_c, bounds.t_max_c),
            y: (0.0, to_grams_per_kg(bounds.w_max)),
        },
        size_px: layout.size_px,
        default_grid: false,
        layers,
        skipped,
    }
}

pub fn title(bounds: &ChartBounds) -> String {
    format!("Psychrometric Chart ({:.0} Pa)", bounds.atmospheric_pressure_kpa * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_names_the_pressure() {
        assert_eq!(title(&ChartBounds::default()), "Psychrometric Chart (101325 Pa)");
    }

    #[test]
    fn fixed_window_without_overlays() {
        let bounds = ChartBounds::default();
        let chart = assemble(vec![Layer::new("saturation")], &[], &bounds, &ChartLayout::default(), Vec::new());
        assert_eq!(chart.window.x, (-10.0, 50.0));
        assert!((chart.window.y.1 - 30.0).abs() < 1e-9);
        assert_eq!(chart.y_label, "Humidity Ratio (g/kg dry air)");
        assert!(!chart.default_grid);
        assert_eq!(chart.layers.len(), 1);
        assert_eq!(chart.size_px, (1400, 900));
    }
}
