//! The main calculator panel: clamped inputs, on-demand evaluation, and the
//! result sections (numbers, gauge, chart, advisories).

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use evaluator::reading::{
    DEFAULT_HUMIDITY_PCT, DEFAULT_TEMP_C, HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT, TEMP_MAX_C,
    TEMP_MIN_C,
};
use evaluator::{evaluate, HeatStressResult, IndexCurve, Reading};

use crate::{chart, gauge, reference};

/// Current form inputs and the last computed evaluation.
///
/// `evaluated` stays `None` until the user presses the compute button; the
/// core is invoked on demand, never per frame. The reading is stored next to
/// its result so moving a slider does not silently change a shown result.
#[derive(Resource)]
pub struct CalculatorState {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub evaluated: Option<(Reading, HeatStressResult)>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            temperature_c: DEFAULT_TEMP_C,
            humidity_pct: DEFAULT_HUMIDITY_PCT,
            evaluated: None,
        }
    }
}

pub fn calculator_ui(mut contexts: EguiContexts, mut state: ResMut<CalculatorState>) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Kalkulator Heat Stress Index Ayam Broiler");
            ui.label(
                "Program ini menghitung Heat Stress Index pada ayam broiler \
                 berdasarkan suhu dan kelembaban.",
            );
            ui.separator();

            ui.add(
                egui::Slider::new(&mut state.temperature_c, TEMP_MIN_C..=TEMP_MAX_C)
                    .text("Masukkan Suhu (°C)")
                    .fixed_decimals(1),
            );
            ui.add(
                egui::Slider::new(&mut state.humidity_pct, HUMIDITY_MIN_PCT..=HUMIDITY_MAX_PCT)
                    .text("Masukkan Kelembaban (%)")
                    .fixed_decimals(1),
            );

            if ui.button("Hitung Heat Stress Index").clicked() {
                let reading = Reading::new(state.temperature_c, state.humidity_pct);
                let result = evaluate(&reading);
                info!(
                    "heat stress index {:.1} ({:?}) at {:.1} C / {:.1}%",
                    result.index, result.impact, reading.temperature_c, reading.humidity_pct
                );
                state.evaluated = Some((reading, result));
            }

            if let Some((reading, result)) = state.evaluated {
                ui.separator();
                ui.heading("Hasil Perhitungan:");
                ui.label(format!(
                    "Suhu (°F) = {:.1} × 1.8 + 32 = {:.1}",
                    reading.temperature_c, result.temperature_f
                ));
                ui.label(format!("Heat Stress Index = {:.1}", result.index));
                ui.horizontal(|ui| {
                    ui.strong("Interpretasi:");
                    ui.colored_label(gauge::band_color(result.impact), result.impact.description());
                });

                ui.add_space(4.0);
                gauge::draw_gauge(ui, result.index);

                ui.add_space(4.0);
                let curve = IndexCurve::sample(reading.humidity_pct);
                chart::draw_index_curve(ui, &curve, &reading, &result);

                ui.add_space(4.0);
                reference::advisory_sections(ui);
            }

            ui.separator();
            reference::reference_table(ui);
            ui.add_space(8.0);
            reference::footer(ui);
        });
    });
}
