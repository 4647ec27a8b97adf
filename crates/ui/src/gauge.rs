//! Painter-drawn semicircular gauge for the heat-stress index, scale
//! 0-170 with the five severity bands as colored arcs and a needle at the
//! current value.

use bevy_egui::egui;

use evaluator::impact::{ImpactCategory, GAUGE_MAX};

/// Band colors, matching the reference gauge
/// (lightgreen / yellow / orange / red / darkred).
pub fn band_color(category: ImpactCategory) -> egui::Color32 {
    match category {
        ImpactCategory::NoImpact => egui::Color32::from_rgb(144, 238, 144),
        ImpactCategory::OnsetDisturbance => egui::Color32::from_rgb(255, 255, 0),
        ImpactCategory::IntakeShift => egui::Color32::from_rgb(255, 165, 0),
        ImpactCategory::OnsetMortality => egui::Color32::from_rgb(255, 0, 0),
        ImpactCategory::HighMortality => egui::Color32::from_rgb(139, 0, 0),
    }
}

/// Map an index value to a dial angle in radians.
///
/// The dial runs counter-clockwise from PI (value 0, left end) to 0 (value
/// [`GAUGE_MAX`], right end); out-of-scale values pin to the nearest end.
pub(crate) fn value_angle(value: f64) -> f32 {
    let t = (value.clamp(0.0, GAUGE_MAX) / GAUGE_MAX) as f32;
    std::f32::consts::PI * (1.0 - t)
}

/// Point on the dial circle for a given angle and radius.
fn dial_point(center: egui::Pos2, angle: f32, radius: f32) -> egui::Pos2 {
    egui::pos2(
        center.x + radius * angle.cos(),
        center.y - radius * angle.sin(),
    )
}

/// Sampled polyline along the dial between two index values.
///
/// egui has no arc primitive, so arcs are stroked as short segments.
fn arc_points(center: egui::Pos2, radius: f32, from: f64, to: f64) -> Vec<egui::Pos2> {
    const STEPS: usize = 24;
    (0..=STEPS)
        .map(|i| {
            let value = from + (to - from) * i as f64 / STEPS as f64;
            dial_point(center, value_angle(value), radius)
        })
        .collect()
}

/// Draw the gauge: band arcs, needle, and the numeric value.
pub fn draw_gauge(ui: &mut egui::Ui, index: f64) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(280.0, 170.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let center = egui::pos2(rect.center().x, rect.max.y - 30.0);
    let radius = 110.0;

    for category in ImpactCategory::ALL {
        let points = arc_points(center, radius, category.lower_bound(), category.upper_bound());
        for window in points.windows(2) {
            painter.line_segment(
                [window[0], window[1]],
                egui::Stroke::new(14.0, band_color(category)),
            );
        }
    }

    // Needle
    let angle = value_angle(index);
    painter.line_segment(
        [center, dial_point(center, angle, radius - 12.0)],
        egui::Stroke::new(3.0, egui::Color32::from_gray(230)),
    );
    painter.circle_filled(center, 5.0, egui::Color32::from_gray(230));

    // Scale ends and value
    painter.text(
        dial_point(center, value_angle(0.0), radius + 16.0),
        egui::Align2::CENTER_CENTER,
        "0",
        egui::FontId::proportional(11.0),
        egui::Color32::GRAY,
    );
    painter.text(
        dial_point(center, value_angle(GAUGE_MAX), radius + 16.0),
        egui::Align2::CENTER_CENTER,
        format!("{GAUGE_MAX:.0}"),
        egui::FontId::proportional(11.0),
        egui::Color32::GRAY,
    );
    painter.text(
        egui::pos2(center.x, center.y + 18.0),
        egui::Align2::CENTER_CENTER,
        format!("{index:.1}"),
        egui::FontId::proportional(20.0),
        band_color(ImpactCategory::from_index(index)),
    );
}
