use bevy::prelude::*;

/// Binary dark/light flag. Flipping it changes the clear color and ambient
/// brightness only; simulation state is untouched.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self { dark: true }
    }
}

impl Theme {
    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    pub fn clear_color(self) -> Color {
        if self.dark {
            Color::BLACK
        } else {
            Color::srgb_u8(26, 26, 46)
        }
    }

    pub fn ambient_brightness(self) -> f32 {
        if self.dark {
            120.0
        } else {
            180.0
        }
    }
}

pub struct Plugin;

impl Plugin {
    fn apply(
        theme: Res<Theme>,
        mut clear_color: ResMut<ClearColor>,
        mut ambient: ResMut<AmbientLight>,
    ) {
        clear_color.0 = theme.clear_color();
        ambient.brightness = theme.ambient_brightness();
        debug!("theme: {}", if theme.dark { "dark" } else { "light" });
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Theme>()
            .insert_resource(ClearColor(Theme::default().clear_color()))
            .add_systems(Update, Self::apply.run_if(resource_changed::<Theme>));
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn toggle_flips_both_derived_values() {
        let mut theme = Theme::default();
        assert!(theme.dark);
        let dark_clear = theme.clear_color();
        let dark_brightness = theme.ambient_brightness();

        theme.toggle();
        assert!(!theme.dark);
        assert_ne!(theme.clear_color(), dark_clear);
        assert!(theme.ambient_brightness() > dark_brightness);

        theme.toggle();
        assert_eq!(theme.clear_color(), dark_clear);
    }
}
