use bevy::prelude::*;

use crate::bodies;

/// Sun self-rotation, radians per second.
pub const SUN_SPIN: f32 = 0.3;
/// Starfield drift, radians per second.
pub const STAR_DRIFT: f32 = 0.006;

#[derive(Component, Debug)]
pub struct Orbit {
    pub distance: f32,       // Orbit radius around the sun.
    pub angle: f32,          // Current orbital angle in radians, unnormalized.
    pub base_speed: f32,     // Angular velocity at multiplier 1.0 (radians per second).
    pub multiplier: f32,     // User-adjustable speed factor, never negative.
    pub rotation_speed: f32, // Self-rotation velocity (radians per second).
    pub rotation_angle: f32, // Accumulated self-rotation in radians.
}

impl Orbit {
    pub fn from_spec(spec: &bodies::PlanetSpec, angle: f32) -> Self {
        Self {
            distance: spec.distance,
            angle,
            base_speed: spec.base_speed,
            multiplier: 1.0,
            rotation_speed: spec.rotation_speed,
            rotation_angle: 0.0,
        }
    }

    /// Advance both angles by `dt` seconds. Only `sin`/`cos` of the angles
    /// are consumed downstream, so neither is wrapped.
    pub fn advance(&mut self, dt: f32) {
        self.angle += self.base_speed * self.multiplier * dt;
        self.rotation_angle += self.rotation_speed * dt;
    }

    /// Position on the orbit for the current angle.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.distance,
            0.0,
            self.angle.sin() * self.distance,
        )
    }
}

/// Spin rate in radians per second for decorative bodies (sun, starfield).
#[derive(Component, Debug)]
pub struct Spin(pub f32);

/// Gates every time-driven motion, decorative spins included. While paused,
/// elapsed time is simply never applied, so there is no catch-up on resume.
#[derive(Resource, Debug, Default, PartialEq, Eq)]
pub struct Paused(pub bool);

pub fn running(paused: Res<Paused>) -> bool {
    !paused.0
}

pub struct Plugin;

impl Plugin {
    fn tick_orbits(time: Res<Time>, mut query: Query<(&mut Transform, &mut Orbit)>) {
        for (mut transform, mut orbit) in query.iter_mut() {
            orbit.advance(time.delta_secs());

            // The transform is a derived view of the orbit state, recomputed
            // from scratch rather than moved incrementally.
            transform.translation = orbit.position();
            transform.rotation = Quat::from_rotation_y(orbit.rotation_angle);
        }
    }

    fn tick_spins(time: Res<Time>, mut query: Query<(&mut Transform, &Spin)>) {
        for (mut transform, spin) in query.iter_mut() {
            transform.rotate_y(spin.0 * time.delta_secs());
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Paused>()
            .add_systems(Update, (Self::tick_orbits, Self::tick_spins).run_if(running));
    }
}
