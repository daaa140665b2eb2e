//! Chart Components
//!
//! Line, bar, area and pie charts drawn on HTML5 Canvas. Each component
//! redraws whenever its data signal changes. The views hand in already
//! aggregated points; nothing here sorts, filters or sums.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Slice/series palette, cycled by index
pub const CHART_COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// A single labeled value, the common currency of every chart here
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Palette color for a slice or bar at the given index
pub fn slice_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Pie slice label text: `"{name}: {count}"`. Integral values print without
/// a decimal point.
pub fn slice_label(name: &str, value: f64) -> String {
    format!("{}: {}", name, value)
}

/// Y-axis bounds with 10% padding; degenerate ranges widen to stay drawable.
fn value_bounds(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(*v);
        max = max.max(*v);
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    min -= padding;
    max += padding;

    if min == max {
        min -= 1.0;
        max += 1.0;
    }
    (min, max)
}

/// Normalized angular fractions of each value; empty when the total is not
/// positive so a degenerate pie draws nothing.
fn slice_fractions(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    values.iter().map(|v| v.max(0.0) / total).collect()
}

/// Line chart over ordered points
#[component]
pub fn LineChart(
    #[prop(into)]
    data: MaybeSignal<Vec<SeriesPoint>>,
    #[prop(default = "#8884d8")]
    color: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_series(&canvas, &points, color, false);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="600" height="300" class="w-full h-72 rounded-lg" />
    }
}

/// Area chart: a line chart with the region under the curve filled
#[component]
pub fn AreaChart(
    #[prop(into)]
    data: MaybeSignal<Vec<SeriesPoint>>,
    #[prop(default = "#82ca9d")]
    color: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_series(&canvas, &points, color, true);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="600" height="300" class="w-full h-72 rounded-lg" />
    }
}

/// Vertical bar chart
#[component]
pub fn BarChart(
    #[prop(into)]
    data: MaybeSignal<Vec<SeriesPoint>>,
    #[prop(default = "#8884d8")]
    color: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &points, color);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="600" height="300" class="w-full h-72 rounded-lg" />
    }
}

/// Pie chart with per-slice labels, colored through the fixed palette
#[component]
pub fn PieChart(
    #[prop(into)]
    data: MaybeSignal<Vec<SeriesPoint>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let slices = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &slices);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="600" height="300" class="w-full h-72 rounded-lg" />
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

fn clear_background(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text("Aucune donnée disponible", width / 2.0 - 80.0, height / 2.0);
}

/// Horizontal grid lines and y-axis labels between the given bounds
fn draw_grid(ctx: &CanvasRenderingContext2d, width: f64, height: f64, min: f64, max: f64) {
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }
}

/// A few x-axis labels spread across the point range
fn draw_x_labels(
    ctx: &CanvasRenderingContext2d,
    points: &[SeriesPoint],
    width: f64,
    height: f64,
) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let num_labels = points.len().min(6);
    if num_labels == 0 {
        return;
    }

    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("11px sans-serif");

    for i in 0..num_labels {
        let idx = if num_labels > 1 {
            i * (points.len() - 1) / (num_labels - 1)
        } else {
            0
        };
        let x = if points.len() > 1 {
            MARGIN_LEFT + (idx as f64 / (points.len() - 1) as f64) * chart_width
        } else {
            MARGIN_LEFT + chart_width / 2.0
        };
        let _ = ctx.fill_text(&points[idx].label, x - 20.0, height - 10.0);
    }
}

/// Draw an ordered series as a line, optionally filling down to the baseline
fn draw_series(canvas: &HtmlCanvasElement, points: &[SeriesPoint], color: &str, fill: bool) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear_background(&ctx, width, height);

    if points.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let (min, max) = value_bounds(&values);

    draw_grid(&ctx, width, height, min, max);

    let x_at = |i: usize| {
        if points.len() > 1 {
            MARGIN_LEFT + (i as f64 / (points.len() - 1) as f64) * chart_width
        } else {
            MARGIN_LEFT + chart_width / 2.0
        }
    };
    let y_at = |value: f64| MARGIN_TOP + ((max - value) / (max - min)) * chart_height;

    if fill {
        ctx.begin_path();
        ctx.move_to(x_at(0), y_at(points[0].value));
        for (i, point) in points.iter().enumerate().skip(1) {
            ctx.line_to(x_at(i), y_at(point.value));
        }
        ctx.line_to(x_at(points.len() - 1), MARGIN_TOP + chart_height);
        ctx.line_to(x_at(0), MARGIN_TOP + chart_height);
        ctx.close_path();
        ctx.set_global_alpha(0.35);
        ctx.set_fill_style(&color.into());
        ctx.fill();
        ctx.set_global_alpha(1.0);
    }

    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_at(i), y_at(point.value));
        } else {
            ctx.line_to(x_at(i), y_at(point.value));
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&color.into());
    for (i, point) in points.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(point.value), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    draw_x_labels(&ctx, points, width, height);
}

/// Draw a vertical bar per point, baseline at zero
fn draw_bars(canvas: &HtmlCanvasElement, points: &[SeriesPoint], color: &str) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear_background(&ctx, width, height);

    if points.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let top = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let max = if top > 0.0 { top * 1.1 } else { 1.0 };

    draw_grid(&ctx, width, height, 0.0, max);

    let slot = chart_width / points.len() as f64;
    let bar_width = (slot * 0.6).max(2.0);

    ctx.set_fill_style(&color.into());
    for (i, point) in points.iter().enumerate() {
        let bar_height = (point.value.max(0.0) / max) * chart_height;
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
        let y = MARGIN_TOP + chart_height - bar_height;
        ctx.fill_rect(x, y, bar_width, bar_height);
    }

    // One label under each bar
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("11px sans-serif");
    for (i, point) in points.iter().enumerate() {
        let x = MARGIN_LEFT + slot * i as f64 + slot / 2.0 - 18.0;
        let _ = ctx.fill_text(&point.label, x, height - 10.0);
    }
}

/// Draw a pie with one labeled slice per point
fn draw_pie(canvas: &HtmlCanvasElement, slices: &[SeriesPoint]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear_background(&ctx, width, height);

    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let fractions = slice_fractions(&values);
    if fractions.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (height / 2.0 - MARGIN_TOP) * 0.8;

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (i, (slice, fraction)) in slices.iter().zip(&fractions).enumerate() {
        let sweep = fraction * std::f64::consts::PI * 2.0;
        if sweep <= 0.0 {
            start += sweep;
            continue;
        }

        ctx.set_fill_style(&slice_color(i).into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, start + sweep);
        ctx.close_path();
        ctx.fill();

        // Label just outside the slice midpoint
        let mid = start + sweep / 2.0;
        let lx = cx + mid.cos() * (radius + 14.0);
        let ly = cy + mid.sin() * (radius + 14.0);
        ctx.set_fill_style(&"#374151".into());
        ctx.set_font("12px sans-serif");
        let text = slice_label(&slice.label, slice.value);
        let offset = if mid.cos() < 0.0 { text.len() as f64 * 6.0 } else { 0.0 };
        let _ = ctx.fill_text(&text, lx - offset, ly);

        start += sweep;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles_by_index() {
        assert_eq!(slice_color(0), "#0088FE");
        assert_eq!(slice_color(4), "#8884D8");
        // 6th entry of a 7-slice pie reuses the first palette color
        assert_eq!(slice_color(5), CHART_COLORS[0]);
        assert_eq!(slice_color(6), CHART_COLORS[1]);
    }

    #[test]
    fn test_slice_label_format() {
        assert_eq!(slice_label("low", 12.0), "low: 12");
        assert_eq!(slice_label("Audio", 34.0), "Audio: 34");
    }

    #[test]
    fn test_value_bounds_pads_range() {
        let (min, max) = value_bounds(&[10.0, 20.0]);
        assert_eq!(min, 9.0);
        assert_eq!(max, 21.0);
    }

    #[test]
    fn test_value_bounds_widens_flat_series() {
        let (min, max) = value_bounds(&[5.0, 5.0]);
        assert!(min < 5.0);
        assert!(max > 5.0);
    }

    #[test]
    fn test_slice_fractions_normalize() {
        let fractions = slice_fractions(&[1.0, 1.0, 2.0]);
        assert_eq!(fractions, vec![0.25, 0.25, 0.5]);
    }

    #[test]
    fn test_slice_fractions_empty_for_zero_total() {
        assert!(slice_fractions(&[]).is_empty());
        assert!(slice_fractions(&[0.0, 0.0]).is_empty());
    }
}
