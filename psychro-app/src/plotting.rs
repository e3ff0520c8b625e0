//! Draws an assembled psychrometric chart onto a PNG image.

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use psychro_core::chart::{self as scene, AxisWindow, Chart, LineDash, Primitive};
use psychro_schemas::color::Rgb;
use std::{fs, path::Path};

/// Matplotlib-style point sizes are scaled to pixels at 100 dpi.
const PX_PER_PT: f64 = 100.0 / 72.0;
const DOT_SIZE: i32 = 2;
const DOT_SPACING: i32 = 4;

/// Renders every layer of `chart` in order and writes the image to `path`.
pub fn render_png(chart: &Chart, path: &Path) -> Result<()> {
    println!("[Plotting] Rendering chart to '{}'...", path.display());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let root = BitMapBackend::new(path, chart.size_px).into_drawing_area();
    root.fill(&WHITE)?;
    let titled = root.titled(&chart.title, ("sans-serif", 30))?;

    let mut ctx = ChartBuilder::on(&titled)
        .caption(&chart.subtitle, ("sans-serif", 20).into_font())
        .margin(10)
        .margin_right(40)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(chart.window.x.0..chart.window.x.1, chart.window.y.0..chart.window.y.1)?;

    let mut mesh = ctx.configure_mesh();
    mesh.x_desc(chart.x_label.as_str()).y_desc(chart.y_label.as_str());
    if !chart.default_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for layer in &chart.layers {
        for primitive in &layer.primitives {
            match primitive {
                Primitive::Polyline { points, stroke } => {
                    let style = color(&stroke.color).stroke_width(stroke_width(stroke.width));
                    for run in clip_polyline(points, &chart.window) {
                        match stroke.dash {
                            LineDash::Solid => {
                                ctx.draw_series(LineSeries::new(run, style))?;
                            }
                            LineDash::Dotted => {
                                ctx.draw_series(DashedLineSeries::new(run, DOT_SIZE, DOT_SPACING, style))?;
                            }
                        }
                    }
                }
                Primitive::Marker { at, radius, color: c } => {
                    if in_window(*at, &chart.window) {
                        ctx.draw_series(std::iter::once(Circle::new(
                            *at,
                            radius.round() as i32,
                            color(c).filled(),
                        )))?;
                    }
                }
                Primitive::Text { at, text, style } => {
                    // Text goes on the root area so labels beyond the plot edge stay visible.
                    let pos = ctx.backend_coord(at);
                    root.draw_text(text, &text_style(style), pos)?;
                }
            }
        }
    }

    root.present()
        .with_context(|| format!("Failed to write chart image {}", path.display()))?;
    println!("[Plotting] Chart has been saved to '{}'.", path.display());
    Ok(())
}

/// Cuts a polyline at the axis window. Each returned run is a connected piece
/// lying entirely inside the window.
pub fn clip_polyline(points: &[(f64, f64)], window: &AxisWindow) -> Vec<Vec<(f64, f64)>> {
    let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut connected = false;
    for pair in points.windows(2) {
        match clip_segment(pair[0], pair[1], window) {
            Some((start, end)) => {
                match runs.last_mut() {
                    Some(run) if connected && run.last() == Some(&start) => run.push(end),
                    _ => runs.push(vec![start, end]),
                }
                // The next segment continues this run only if this one was not cut at its end.
                connected = end == pair[1];
            }
            None => connected = false,
        }
    }
    runs
}

/// Liang–Barsky clipping of the segment `a -> b` against the window.
fn clip_segment(a: (f64, f64), b: (f64, f64), window: &AxisWindow) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let edges = [
        (-dx, a.0 - window.x.0),
        (dx, window.x.1 - a.0),
        (-dy, a.1 - window.y.0),
        (dy, window.y.1 - a.1),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    let at = |t: f64| {
        if t <= 0.0 {
            a
        } else if t >= 1.0 {
            b
        } else {
            (a.0 + t * dx, a.1 + t * dy)
        }
    };
    Some((at(t0), at(t1)))
}

fn in_window((x, y): (f64, f64), window: &AxisWindow) -> bool {
    x >= window.x.0 && x <= window.x.1 && y >= window.y.0 && y <= window.y.1
}

fn color(rgb: &Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn stroke_width(width: f64) -> u32 {
    (width.round() as u32).max(1)
}

fn text_style(style: &scene::TextStyle) -> TextStyle<'static> {
    let weight = if style.bold { FontStyle::Bold } else { FontStyle::Normal };
    let vpos = match style.anchor {
        scene::VerticalAnchor::Baseline => VPos::Bottom,
        scene::VerticalAnchor::Center => VPos::Center,
    };
    FontDesc::new(FontFamily::SansSerif, style.font_size * PX_PER_PT, weight)
        .color(&color(&style.color))
        .pos(Pos::new(HPos::Left, vpos))
}
