use bevy::ecs::event::{Event, EventReader, EventWriter};
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

/// Pixels of scroll represented by one line-unit wheel notch.
const LINE_HEIGHT: f32 = 100.0;

/// Scroll amount normalized to pixels; positive moves the camera away.
#[derive(Event, Default, Debug)]
pub struct Zoom(pub f32);

pub struct Plugin;

impl Plugin {
    fn process_inputs(
        mut wheel_event_reader: EventReader<MouseWheel>,
        mut zoom_event_writer: EventWriter<Zoom>,
    ) {
        let mut amount = 0.0;
        for event in wheel_event_reader.read() {
            // Scrolling up (positive y) zooms in, so the sign flips here.
            amount -= match event.unit {
                MouseScrollUnit::Line => event.y * LINE_HEIGHT,
                MouseScrollUnit::Pixel => event.y,
            };
        }

        if amount != 0.0 {
            zoom_event_writer.send(Zoom(amount));
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_event::<Zoom>()
            .add_systems(Update, Self::process_inputs);
    }
}
