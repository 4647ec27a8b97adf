//! egui presentation for the heat-stress calculator: the input form, gauge,
//! index-vs-temperature chart, reference table, and advisory sections.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod calculator;
pub mod chart;
pub mod gauge;
pub mod reference;
pub mod theme;

mod tests;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<calculator::CalculatorState>()
            .add_systems(Startup, theme::apply_theme)
            .add_systems(Update, calculator::calculator_ui);
    }
}
