//! Static content: the reference table of the five bands, the advisory
//! sections, and the source/footer lines.

use bevy_egui::egui;
use chrono::Datelike;

use evaluator::impact::ImpactCategory;

use crate::gauge::band_color;

/// Small color swatch next to a label.
fn legend_swatch(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 1.0, color);
}

/// The reference table enumerating all five bands and their impact text.
pub fn reference_table(ui: &mut egui::Ui) {
    ui.heading("Tabel Referensi Heat Stress Index");
    egui::Grid::new("hsi_reference")
        .striped(true)
        .min_col_width(110.0)
        .show(ui, |ui| {
            ui.strong("Heat Index");
            ui.strong("Pengaruh Terhadap Performa");
            ui.end_row();
            for category in ImpactCategory::ALL {
                ui.horizontal(|ui| {
                    legend_swatch(ui, band_color(category));
                    ui.label(category.table_label());
                });
                ui.label(category.description());
                ui.end_row();
            }
        });
}

/// Collapsible advisory sections shown alongside a computed result.
pub fn advisory_sections(ui: &mut egui::Ui) {
    ui.heading("Insight Tambahan");

    ui.collapsing("📊 Dampak Heat Stress pada Produktivitas", |ui| {
        ui.label("- Penurunan konsumsi pakan hingga 20-40%");
        ui.label("- Penurunan Feed Conversion Ratio (FCR)");
        ui.label("- Penurunan berat badan hingga 15-25%");
        ui.label("- Peningkatan mortalitas 2-3x lipat");
    });

    ui.collapsing("🌡️ Zona Suhu Optimal", |ui| {
        ui.label("- Minggu 1: 31-33°C");
        ui.label("- Minggu 2: 28-30°C");
        ui.label("- Minggu 3: 26-28°C");
        ui.label("- Minggu 4+: 24-26°C");
    });

    ui.collapsing("💡 Tips Pencegahan Heat Stress", |ui| {
        ui.label("1. Pengaturan ventilasi yang baik");
        ui.label("2. Pemberian air minum yang cukup dan sejuk");
        ui.label("3. Pengaturan kepadatan kandang (<8 ekor/m²)");
        ui.label("4. Pemberian elektrolit tambahan");
        ui.label("5. Penggunaan atap dengan insulasi yang baik");
    });
}

/// Source citation and attribution. The year is computed at render time.
pub fn footer(ui: &mut egui::Ui) {
    ui.small(
        egui::RichText::new("Sumber: Fadilah R. 2007. Beternak Unggas Bebas Flu Burung. Agromedia. Jakarta.")
            .italics(),
    );
    ui.separator();
    ui.vertical_centered(|ui| {
        let year = chrono::Local::now().year();
        ui.label(format!("© {year} Developed by: Galuh Adi Insani with ❤️"));
        ui.small("All rights reserved.");
    });
}
