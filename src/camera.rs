use bevy::prelude::*;
use bevy::transform::TransformSystem;
use std::f32::consts::PI;

use crate::input;

/// Radians of orbit per pixel of pointer travel.
const DRAG_GAIN: f32 = 0.01;
/// Distance units per pixel of scroll.
const ZOOM_GAIN: f32 = 0.01;

pub const MIN_RADIUS: f32 = 20.0;
pub const MAX_RADIUS: f32 = 200.0;
/// Keeps `phi` off the poles so the look-at up vector never degenerates.
pub const POLE_MARGIN: f32 = 0.1;

/// Spherical camera rig around the origin. The camera's transform is
/// recomputed from this state every frame and is never mutated directly,
/// which makes reset a plain field assignment.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Rig {
    pub radius: f32, // Distance from the origin, clamped.
    pub theta: f32,  // Azimuth around +Y, unbounded.
    pub phi: f32,    // Polar angle, clamped off the poles.
}

impl Default for Rig {
    fn default() -> Self {
        Self {
            radius: 80.0,
            theta: 0.0,
            phi: PI / 2.0,
        }
    }
}

impl Rig {
    /// Apply a pointer-drag delta in pixels.
    pub fn drag(&mut self, delta: Vec2) {
        self.theta += delta.x * DRAG_GAIN;
        self.phi = (self.phi + delta.y * DRAG_GAIN).clamp(POLE_MARGIN, PI - POLE_MARGIN);
    }

    /// Apply a scroll amount in pixels; positive moves the camera away.
    pub fn zoom(&mut self, scroll: f32) {
        self.radius = (self.radius + scroll * ZOOM_GAIN).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// Cartesian camera position for the current spherical coordinates.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.phi.sin() * self.theta.cos(),
            self.radius * self.phi.cos(),
            self.radius * self.phi.sin() * self.theta.sin(),
        )
    }
}

pub struct Plugin;

impl Plugin {
    fn apply_drag(
        mut query: Query<&mut Rig>,
        mut drag_event_reader: EventReader<input::drag::Delta>,
    ) {
        let mut delta = Vec2::ZERO;
        for event in drag_event_reader.read() {
            delta += event.0;
        }
        if delta == Vec2::ZERO {
            return;
        }

        for mut rig in query.iter_mut() {
            rig.drag(delta);
        }
    }

    fn apply_zoom(
        mut query: Query<&mut Rig>,
        mut zoom_event_reader: EventReader<input::wheel::Zoom>,
    ) {
        let mut scroll = 0.0;
        for event in zoom_event_reader.read() {
            scroll += event.0;
        }
        if scroll == 0.0 {
            return;
        }

        for mut rig in query.iter_mut() {
            rig.zoom(scroll);
        }
    }

    /// Runs every frame, drag or no drag, so the transform stays a pure
    /// function of the rig state.
    fn update_camera(mut query: Query<(&mut Transform, &Rig)>) {
        for (mut transform, rig) in query.iter_mut() {
            *transform = Transform::from_translation(rig.position()).looking_at(Vec3::ZERO, Vec3::Y);
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (Self::apply_drag, Self::apply_zoom))
            .add_systems(
                PostUpdate,
                Self::update_camera.before(TransformSystem::TransformPropagate),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rig() {
        let rig = Rig::default();
        assert_eq!(rig.radius, 80.0);
        assert_eq!(rig.theta, 0.0);
        assert_eq!(rig.phi, PI / 2.0);
    }

    #[test]
    fn drag_accumulates_and_clamps_phi() {
        let mut rig = Rig::default();
        rig.drag(Vec2::new(30.0, -20.0));
        assert!((rig.theta - 0.3).abs() < 1e-6);
        assert!((rig.phi - (PI / 2.0 - 0.2)).abs() < 1e-6);

        // Dragging far past either pole pins phi to the margin.
        rig.drag(Vec2::new(0.0, -10_000.0));
        assert_eq!(rig.phi, POLE_MARGIN);
        rig.drag(Vec2::new(0.0, 10_000.0));
        assert_eq!(rig.phi, PI - POLE_MARGIN);

        // Theta is unbounded by design.
        rig.drag(Vec2::new(10_000.0, 0.0));
        assert!(rig.theta > 6.0 * PI);
    }

    #[test]
    fn zoom_clamps_to_bounds() {
        let mut rig = Rig::default();
        rig.zoom(500.0);
        assert!((rig.radius - 85.0).abs() < 1e-4);

        // A single huge scroll pins the radius to the far bound.
        rig.zoom(50_000.0);
        assert_eq!(rig.radius, MAX_RADIUS);
        rig.zoom(-100_000.0);
        assert_eq!(rig.radius, MIN_RADIUS);
    }

    #[test]
    fn bounds_hold_under_arbitrary_event_sequences() {
        let mut rig = Rig::default();
        let mut value = 1.0_f32;
        for step in 0..500 {
            // Cheap deterministic pseudo-random walk over both channels.
            value = (value * 75.88 + step as f32).sin() * 4000.0;
            rig.drag(Vec2::new(value, -value * 0.7));
            rig.zoom(value * 3.0);
            assert!(rig.radius >= MIN_RADIUS && rig.radius <= MAX_RADIUS);
            assert!(rig.phi >= POLE_MARGIN && rig.phi <= PI - POLE_MARGIN);
        }
    }

    #[test]
    fn position_matches_spherical_formula() {
        let rig = Rig {
            radius: 100.0,
            theta: 0.75,
            phi: 1.1,
        };
        let position = rig.position();
        assert!((position.x - 100.0 * 1.1_f32.sin() * 0.75_f32.cos()).abs() < 1e-4);
        assert!((position.y - 100.0 * 1.1_f32.cos()).abs() < 1e-4);
        assert!((position.z - 100.0 * 1.1_f32.sin() * 0.75_f32.sin()).abs() < 1e-4);
        assert!((position.length() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn default_position_is_straight_out_on_x() {
        let position = Rig::default().position();
        assert!((position.x - 80.0).abs() < 1e-4);
        assert!(position.y.abs() < 1e-4);
        assert!(position.z.abs() < 1e-4);
    }
}
