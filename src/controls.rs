use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;

use crate::bodies;
use crate::commands;
use crate::orbit::Orbit;

/// Multiplier change per speed-key press.
const STEP: f32 = 0.25;

const DIGITS: [KeyCode; bodies::PLANET_COUNT] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
];

#[derive(Resource, Debug)]
pub struct Controls {
    pub pause: KeyCode,
    pub reset: KeyCode,
    pub theme: KeyCode,
    pub faster: KeyCode,
    pub slower: KeyCode,
}

impl Controls {
    pub fn new() -> Self {
        Controls {
            pause: KeyCode::Space,
            reset: KeyCode::KeyR,
            theme: KeyCode::KeyT,
            faster: KeyCode::ArrowUp,
            slower: KeyCode::ArrowDown,
        }
    }
}

/// Index into [`bodies::PLANETS`] of the planet the speed keys steer,
/// selected with the digit keys. Earth to start.
#[derive(Resource, Debug)]
pub struct Selected(pub usize);

impl Default for Selected {
    fn default() -> Self {
        Selected(2)
    }
}

pub struct Plugin;

impl Plugin {
    fn process_inputs(
        controls: Res<Controls>,
        keyboard_input: Res<ButtonInput<KeyCode>>,
        mut selected: ResMut<Selected>,
        query: Query<(&Name, &Orbit)>,
        mut set_speed_event_writer: EventWriter<commands::SetSpeedMultiplier>,
        mut toggle_pause_event_writer: EventWriter<commands::TogglePause>,
        mut reset_event_writer: EventWriter<commands::ResetSimulation>,
        mut toggle_theme_event_writer: EventWriter<commands::ToggleTheme>,
    ) {
        if keyboard_input.just_pressed(controls.pause) {
            toggle_pause_event_writer.send(commands::TogglePause);
        }
        if keyboard_input.just_pressed(controls.reset) {
            reset_event_writer.send(commands::ResetSimulation);
        }
        if keyboard_input.just_pressed(controls.theme) {
            toggle_theme_event_writer.send(commands::ToggleTheme);
        }

        for (index, key) in DIGITS.iter().enumerate() {
            if keyboard_input.just_pressed(*key) {
                selected.0 = index;
                info!("speed keys now steer {}", bodies::PLANETS[index].name);
            }
        }

        let mut step = 0.0;
        if keyboard_input.just_pressed(controls.faster) {
            step += STEP;
        }
        if keyboard_input.just_pressed(controls.slower) {
            step -= STEP;
        }
        if step != 0.0 {
            let spec = &bodies::PLANETS[selected.0];
            let current = query
                .iter()
                .find(|(name, _)| name.as_str() == spec.name)
                .map(|(_, orbit)| orbit.multiplier)
                .unwrap_or(1.0);
            set_speed_event_writer.send(commands::SetSpeedMultiplier {
                name: spec.name.to_owned(),
                value: (current + step).clamp(0.0, commands::MAX_MULTIPLIER),
            });
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Controls::new())
            .init_resource::<Selected>()
            .add_systems(Update, Self::process_inputs);
    }
}
