use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Kalkulator Heat Stress Index Ayam Broiler".to_string(),
                resolution: (520.0, 760.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        })
        .add_plugins(ui::UiPlugin)
        .add_systems(Startup, setup_camera)
        .run();
}

// egui renders through a camera's render graph, so one is needed even though
// nothing else is drawn.
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
