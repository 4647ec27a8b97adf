//! Line chart of the heat-stress index over a 20-40 C temperature sweep at
//! the current humidity, with dashed markers at the current reading. The
//! curve is stroked per-segment in the color of the band it passes through.

use bevy_egui::egui;

use evaluator::chart_data::{CHART_TEMP_MAX_C, CHART_TEMP_MIN_C};
use evaluator::impact::ImpactCategory;
use evaluator::{HeatStressResult, IndexCurve, Reading};

use crate::gauge::band_color;

const CHART_WIDTH: f32 = 380.0;
const CHART_HEIGHT: f32 = 200.0;

/// Normalize `value` into 0..=1 over `min..=max`.
pub(crate) fn normalize(value: f64, min: f64, max: f64) -> f32 {
    let range = (max - min).max(f64::EPSILON);
    (((value - min) / range).clamp(0.0, 1.0)) as f32
}

/// Vertical bounds for the chart: the curve's range padded a little, widened
/// to keep the marker line in view.
pub(crate) fn chart_bounds(curve: &IndexCurve, marker_index: f64) -> (f64, f64) {
    let (curve_min, curve_max) = curve.index_range().unwrap_or((0.0, 1.0));
    let min = curve_min.min(marker_index);
    let max = curve_max.max(marker_index);
    let pad = ((max - min) * 0.05).max(1.0);
    (min - pad, max + pad)
}

fn to_screen(rect: &egui::Rect, temp_c: f64, index: f64, y_min: f64, y_max: f64) -> egui::Pos2 {
    let x = rect.min.x + normalize(temp_c, CHART_TEMP_MIN_C, CHART_TEMP_MAX_C) * rect.width();
    let y = rect.max.y - normalize(index, y_min, y_max) * rect.height();
    egui::pos2(x, y)
}

/// Draw the chart for the given curve and the currently evaluated reading.
pub fn draw_index_curve(
    ui: &mut egui::Ui,
    curve: &IndexCurve,
    reading: &Reading,
    result: &HeatStressResult,
) {
    ui.label("Hubungan Suhu dan Heat Stress Index");

    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(CHART_WIDTH, CHART_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(30));

    if curve.temps_c.len() < 2 {
        return;
    }

    let (y_min, y_max) = chart_bounds(curve, result.index);

    // Horizontal grid lines
    for i in 0..=4 {
        let y = rect.min.y + (i as f32 / 4.0) * rect.height();
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(0.3, egui::Color32::from_gray(50)),
        );
    }

    // Curve, segment by segment; each segment takes the band color of its
    // left sample so the line itself shows the performance impact.
    for i in 0..curve.temps_c.len() - 1 {
        let a = to_screen(&rect, curve.temps_c[i], curve.indices[i], y_min, y_max);
        let b = to_screen(&rect, curve.temps_c[i + 1], curve.indices[i + 1], y_min, y_max);
        let color = band_color(ImpactCategory::from_index(curve.indices[i]));
        painter.line_segment([a, b], egui::Stroke::new(1.5, color));
    }

    // Dashed markers at the current reading
    let marker = egui::Stroke::new(1.0, egui::Color32::from_rgb(255, 80, 80));
    if (CHART_TEMP_MIN_C..=CHART_TEMP_MAX_C).contains(&reading.temperature_c) {
        let x = rect.min.x
            + normalize(reading.temperature_c, CHART_TEMP_MIN_C, CHART_TEMP_MAX_C) * rect.width();
        painter.extend(egui::Shape::dashed_line(
            &[egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            marker,
            4.0,
            4.0,
        ));
    }
    let y = rect.max.y - normalize(result.index, y_min, y_max) * rect.height();
    painter.extend(egui::Shape::dashed_line(
        &[egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
        marker,
        4.0,
        4.0,
    ));

    // Axis captions
    ui.horizontal(|ui| {
        ui.small(format!("Suhu (°C): {CHART_TEMP_MIN_C:.0}-{CHART_TEMP_MAX_C:.0}"));
        ui.small(format!(
            "Heat Stress Index: {y_min:.0}-{y_max:.0}"
        ));
    });
}
