use bevy::prelude::*;

use crate::pick;

#[derive(Component)]
struct InfoPanel;

#[derive(Component)]
struct InfoTitle;

#[derive(Component)]
struct InfoBody;

pub struct Plugin;

impl Plugin {
    fn setup(mut commands: Commands) {
        commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(16.0),
                    right: Val::Px(16.0),
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    padding: UiRect::all(Val::Px(12.0)),
                    max_width: Val::Px(320.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
                Visibility::Hidden,
                InfoPanel,
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    InfoTitle,
                ));
                parent.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.85, 0.85, 0.85)),
                    InfoBody,
                ));
            });

        commands.spawn((
            Text::new(
                "drag: orbit   scroll: zoom   1-8: select planet   up/down: speed   \
                 space: pause   r: reset   t: theme",
            ),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(Color::srgba(1.0, 1.0, 1.0, 0.6)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(16.0),
                bottom: Val::Px(12.0),
                ..default()
            },
        ));
    }

    fn update(
        mut enter_event_reader: EventReader<pick::HoverEnter>,
        mut leave_event_reader: EventReader<pick::HoverLeave>,
        mut panels: Query<&mut Visibility, With<InfoPanel>>,
        mut titles: Query<&mut Text, (With<InfoTitle>, Without<InfoBody>)>,
        mut blurbs: Query<&mut Text, (With<InfoBody>, Without<InfoTitle>)>,
    ) {
        let left = leave_event_reader.read().count() > 0;
        let entered = enter_event_reader.read().last().cloned();

        // A planet-to-planet swap arrives as leave + enter in one frame;
        // the enter wins and the panel just changes content.
        if let Some(event) = entered {
            for mut title in titles.iter_mut() {
                title.0 = event.title.clone();
            }
            for mut blurb in blurbs.iter_mut() {
                blurb.0 = event.blurb.to_owned();
            }
            for mut visibility in panels.iter_mut() {
                *visibility = Visibility::Visible;
            }
        } else if left {
            for mut visibility in panels.iter_mut() {
                *visibility = Visibility::Hidden;
            }
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup)
            .add_systems(Update, Self::update);
    }
}
