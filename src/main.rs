use bevy::core_pipeline::{bloom::Bloom, tonemapping::Tonemapping};
use bevy::picking::mesh_picking::RayCastPickable;
use bevy::prelude::*;
use bevy::window::WindowResized;

mod bodies;
mod camera;
mod commands;
mod controls;
mod input;
mod orbit;
mod panel;
mod pick;
mod scene;
mod theme;

fn main() -> Result<(), bodies::TableError> {
    bodies::validate(&bodies::PLANETS)?;

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "orrery".to_string(),
            ..Default::default()
        }),
        ..Default::default()
    }))
    .add_plugins(scene::Plugin)
    .add_plugins(orbit::Plugin)
    .add_plugins(camera::Plugin)
    .add_plugins(input::Plugin)
    .add_plugins(pick::Plugin)
    .add_plugins(commands::Plugin)
    .add_plugins(controls::Plugin)
    .add_plugins(theme::Plugin)
    .add_plugins(panel::Plugin)
    .add_systems(Startup, setup)
    .add_systems(Update, log_resize);

    #[cfg(debug_assertions)]
    app.add_plugins((
        bevy::diagnostic::FrameTimeDiagnosticsPlugin,
        bevy::diagnostic::LogDiagnosticsPlugin::default(),
    ));

    app.run();

    Ok(())
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Tonemapping::TonyMcMapface,
        Bloom::NATURAL,
        camera::Rig::default(),
        RayCastPickable,
    ));
}

/// Projection and viewport are recomputed by the engine before the next
/// draw; this only makes the absorbed signal visible in the logs.
fn log_resize(mut resize_event_reader: EventReader<WindowResized>) {
    for event in resize_event_reader.read() {
        debug!("viewport resized to {}x{}", event.width, event.height);
    }
}
