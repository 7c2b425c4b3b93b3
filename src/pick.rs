use bevy::picking::mesh_picking::{MeshPickingPlugin, MeshPickingSettings};
use bevy::prelude::*;

use crate::bodies;
use crate::scene::Planet;

/// Raised when the pointer settles on a planet. The backend has already
/// picked the nearest intersection when several planets line up.
#[derive(Event, Debug, Clone)]
pub struct HoverEnter {
    pub name: String,
    pub title: String,
    pub blurb: &'static str,
}

/// Raised once when the pointer leaves all planets.
#[derive(Event, Debug, Clone, Copy)]
pub struct HoverLeave;

/// Planet entity currently under the pointer, if any.
#[derive(Resource, Debug, Default)]
pub struct Hovered(pub Option<Entity>);

/// Which notifications a hover change produces: (leave, enter).
fn edges(last: Option<Entity>, now: Option<Entity>) -> (bool, bool) {
    if last == now {
        return (false, false);
    }
    (last.is_some(), now.is_some())
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub struct Plugin;

impl Plugin {
    fn on_over(
        trigger: Trigger<Pointer<Over>>,
        planets: Query<(), With<Planet>>,
        mut hovered: ResMut<Hovered>,
    ) {
        let entity = trigger.entity();
        if planets.contains(entity) {
            hovered.0 = Some(entity);
        }
    }

    fn on_out(trigger: Trigger<Pointer<Out>>, mut hovered: ResMut<Hovered>) {
        // Guarded so an Out for the previous planet cannot clobber an Over
        // for the next one, whichever order the backend delivers them in.
        if hovered.0 == Some(trigger.entity()) {
            hovered.0 = None;
        }
    }

    /// Turns `Hovered` changes into enter/leave notifications. A swap from
    /// one planet to another is a leave immediately followed by an enter.
    fn notify(
        hovered: Res<Hovered>,
        mut last: Local<Option<Entity>>,
        names: Query<&Name>,
        mut enter_event_writer: EventWriter<HoverEnter>,
        mut leave_event_writer: EventWriter<HoverLeave>,
    ) {
        let (leave, enter) = edges(*last, hovered.0);
        if leave {
            leave_event_writer.send(HoverLeave);
        }
        if enter {
            if let Some(entity) = hovered.0 {
                match names.get(entity).ok().and_then(|name| {
                    bodies::find(name.as_str()).map(|spec| (name.as_str().to_owned(), spec))
                }) {
                    Some((name, spec)) => {
                        enter_event_writer.send(HoverEnter {
                            title: title_case(&name),
                            name,
                            blurb: spec.blurb,
                        });
                    }
                    None => warn!("hovered entity {entity} has no planet entry"),
                }
            }
        }
        *last = hovered.0;
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MeshPickingPlugin)
            .insert_resource(MeshPickingSettings {
                // Only entities carrying RayCastPickable are hit-tested, so
                // the sun, glow shell, guides and starfield never intercept
                // the pointer.
                require_markers: true,
                ..default()
            })
            .init_resource::<Hovered>()
            .add_event::<HoverEnter>()
            .add_event::<HoverLeave>()
            .add_observer(Self::on_over)
            .add_observer(Self::on_out)
            .add_systems(Update, Self::notify);
    }
}
