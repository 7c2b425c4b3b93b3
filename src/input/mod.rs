use bevy::prelude::*;

pub mod drag;
pub mod wheel;

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(drag::Plugin);
        app.add_plugins(wheel::Plugin);
    }
}
