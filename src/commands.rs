use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::camera::Rig;
use crate::orbit::{Orbit, Paused};
use crate::theme::Theme;

/// Upper bound the speed controls expose. The applier itself only clamps
/// negatives; larger values are legal through the API.
pub const MAX_MULTIPLIER: f32 = 5.0;

/// Set one planet's orbital speed multiplier. Negative values clamp to zero.
#[derive(Event, Debug, Clone)]
pub struct SetSpeedMultiplier {
    pub name: String,
    pub value: f32,
}

/// Flip the pause flag. The new state is readable from [`Paused`].
#[derive(Event, Debug, Clone, Copy)]
pub struct TogglePause;

/// Re-randomize orbital angles, restore multipliers, rotation angles and the
/// camera rig to their defaults, and resume if paused.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResetSimulation;

/// Flip the dark/light theme.
#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleTheme;

pub struct Plugin;

impl Plugin {
    fn set_speed(
        mut set_speed_event_reader: EventReader<SetSpeedMultiplier>,
        mut query: Query<(&Name, &mut Orbit)>,
    ) {
        for event in set_speed_event_reader.read() {
            let value = event.value.max(0.0);
            let mut found = false;
            for (name, mut orbit) in query.iter_mut() {
                if name.as_str() == event.name {
                    orbit.multiplier = value;
                    found = true;
                    debug!("{} speed multiplier set to {value}", event.name);
                }
            }
            if !found {
                warn!("speed multiplier for unknown planet {:?}", event.name);
            }
        }
    }

    fn toggle_pause(
        mut toggle_pause_event_reader: EventReader<TogglePause>,
        mut paused: ResMut<Paused>,
    ) {
        for _ in toggle_pause_event_reader.read() {
            paused.0 = !paused.0;
            info!("simulation {}", if paused.0 { "paused" } else { "resumed" });
        }
    }

    fn reset(
        mut reset_event_reader: EventReader<ResetSimulation>,
        mut orbits: Query<&mut Orbit>,
        mut rigs: Query<&mut Rig>,
        mut paused: ResMut<Paused>,
    ) {
        if reset_event_reader.read().last().is_none() {
            return;
        }

        let mut rng = rand::thread_rng();
        for mut orbit in orbits.iter_mut() {
            orbit.angle = rng.gen_range(0.0..TAU);
            orbit.multiplier = 1.0;
            orbit.rotation_angle = 0.0;
        }
        for mut rig in rigs.iter_mut() {
            *rig = Rig::default();
        }
        if paused.0 {
            paused.0 = false;
        }
        info!("simulation reset");
    }

    fn toggle_theme(
        mut toggle_theme_event_reader: EventReader<ToggleTheme>,
        mut theme: ResMut<Theme>,
    ) {
        for _ in toggle_theme_event_reader.read() {
            theme.toggle();
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SetSpeedMultiplier>()
            .add_event::<TogglePause>()
            .add_event::<ResetSimulation>()
            .add_event::<ToggleTheme>()
            .add_systems(
                Update,
                (
                    Self::set_speed,
                    Self::toggle_pause,
                    Self::reset,
                    Self::toggle_theme,
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies;
    use crate::orbit;
    use crate::theme;
    use std::f32::consts::PI;

    fn harness() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(AmbientLight::default())
            .add_plugins((orbit::Plugin, theme::Plugin, super::Plugin));
        for spec in bodies::PLANETS.iter() {
            app.world_mut().spawn((
                Transform::default(),
                orbit::Orbit::from_spec(spec, 1.0),
                Name::new(spec.name),
            ));
        }
        app.world_mut().spawn(Rig::default());
        app
    }

    fn multiplier_of(app: &mut App, planet: &str) -> f32 {
        let mut query = app.world_mut().query::<(&Name, &Orbit)>();
        query
            .iter(app.world())
            .find(|(name, _)| name.as_str() == planet)
            .map(|(_, orbit)| orbit.multiplier)
            .unwrap()
    }

    #[test]
    fn set_speed_targets_one_planet_and_clamps_negatives() {
        let mut app = harness();
        app.world_mut().send_event(SetSpeedMultiplier {
            name: "earth".to_owned(),
            value: 2.0,
        });
        app.update();
        assert_eq!(multiplier_of(&mut app, "earth"), 2.0);
        assert_eq!(multiplier_of(&mut app, "mars"), 1.0);

        app.world_mut().send_event(SetSpeedMultiplier {
            name: "earth".to_owned(),
            value: -3.0,
        });
        app.update();
        assert_eq!(multiplier_of(&mut app, "earth"), 0.0);

        // Unknown names are ignored without disturbing anything.
        app.world_mut().send_event(SetSpeedMultiplier {
            name: "pluto".to_owned(),
            value: 4.0,
        });
        app.update();
        assert_eq!(multiplier_of(&mut app, "mars"), 1.0);
    }

    #[test]
    fn toggle_pause_twice_round_trips() {
        let mut app = harness();
        app.world_mut().send_event(TogglePause);
        app.update();
        assert!(app.world().resource::<Paused>().0);

        app.world_mut().send_event(TogglePause);
        app.update();
        assert!(!app.world().resource::<Paused>().0);
    }

    #[test]
    fn reset_restores_defaults_and_resumes() {
        let mut app = harness();

        // Disturb everything a reset is supposed to restore.
        app.world_mut().send_event(SetSpeedMultiplier {
            name: "earth".to_owned(),
            value: 3.5,
        });
        app.world_mut().send_event(TogglePause);
        app.update();
        {
            let mut rigs = app.world_mut().query::<&mut Rig>();
            let mut rig = rigs.single_mut(app.world_mut());
            rig.radius = 150.0;
            rig.theta = 2.0;
            rig.phi = 0.5;
        }
        {
            let mut orbits = app.world_mut().query::<&mut Orbit>();
            for mut orbit in orbits.iter_mut(app.world_mut()) {
                orbit.rotation_angle = 7.0;
            }
        }

        app.world_mut().send_event(ResetSimulation);
        app.update();

        assert!(!app.world().resource::<Paused>().0);
        assert_eq!(multiplier_of(&mut app, "earth"), 1.0);

        let mut rigs = app.world_mut().query::<&Rig>();
        let rig = rigs.single(app.world());
        assert_eq!(rig.radius, 80.0);
        assert_eq!(rig.theta, 0.0);
        assert_eq!(rig.phi, PI / 2.0);

        let mut orbits = app.world_mut().query::<&Orbit>();
        for orbit in orbits.iter(app.world()) {
            assert_eq!(orbit.rotation_angle, 0.0);
            assert_eq!(orbit.multiplier, 1.0);
            assert!((0.0..TAU).contains(&orbit.angle));
        }
    }

    #[test]
    fn toggle_theme_leaves_simulation_state_alone() {
        let mut app = harness();
        let before = multiplier_of(&mut app, "earth");

        app.world_mut().send_event(ToggleTheme);
        app.update();

        assert!(!app.world().resource::<Theme>().dark);
        assert!(!app.world().resource::<Paused>().0);
        assert_eq!(multiplier_of(&mut app, "earth"), before);
    }
}
