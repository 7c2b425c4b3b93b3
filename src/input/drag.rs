use bevy::ecs::event::{Event, EventReader, EventWriter};
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

/// Pointer travel in pixels, emitted only while the primary button is held.
#[derive(Event, Default, Debug)]
pub struct Delta(pub Vec2);

/// Orbit-drag interaction state.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
}

impl Phase {
    /// Transition on primary-button edges. A press wins over a same-frame
    /// release so a click-and-release within one frame still latches.
    pub fn transition(self, pressed: bool, released: bool) -> Self {
        match self {
            Self::Idle if pressed => Self::Dragging,
            Self::Dragging if released && !pressed => Self::Idle,
            other => other,
        }
    }
}

pub struct Plugin;

impl Plugin {
    fn track_phase(mouse_input: Res<ButtonInput<MouseButton>>, mut phase: ResMut<Phase>) {
        let next = phase.transition(
            mouse_input.just_pressed(MouseButton::Left),
            mouse_input.just_released(MouseButton::Left),
        );
        if next != *phase {
            *phase = next;
        }
    }

    fn process_inputs(
        phase: Res<Phase>,
        mut mouse_motion_event_reader: EventReader<MouseMotion>,
        mut drag_event_writer: EventWriter<Delta>,
    ) {
        let mut delta = Vec2::ZERO;
        for event in mouse_motion_event_reader.read() {
            delta += event.delta;
        }

        if *phase == Phase::Dragging && delta != Vec2::ZERO {
            drag_event_writer.send(Delta(delta));
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_event::<Delta>()
            .init_resource::<Phase>()
            .add_systems(Update, (Self::track_phase, Self::process_inputs).chain());
    }
}

#[cfg(test)]
mod tests {
    use super::Phase;

    #[test]
    fn press_starts_a_drag_and_release_ends_it() {
        let phase = Phase::Idle.transition(true, false);
        assert_eq!(phase, Phase::Dragging);
        assert_eq!(phase.transition(false, false), Phase::Dragging);
        assert_eq!(phase.transition(false, true), Phase::Idle);
    }

    #[test]
    fn idle_ignores_release_and_dragging_ignores_press() {
        assert_eq!(Phase::Idle.transition(false, true), Phase::Idle);
        assert_eq!(Phase::Idle.transition(false, false), Phase::Idle);
        assert_eq!(Phase::Dragging.transition(true, false), Phase::Dragging);
    }

    #[test]
    fn same_frame_press_and_release_latches() {
        assert_eq!(Phase::Idle.transition(true, true), Phase::Dragging);
    }
}
