use bevy::pbr::NotShadowCaster;
use bevy::picking::mesh_picking::RayCastPickable;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;
use rand::Rng;
use std::f32::consts::TAU;

use crate::bodies;
use crate::orbit;
use crate::theme::Theme;

const STAR_COUNT: usize = 1000;
/// Side of the cube the stars are scattered through, centered on the origin.
const STAR_FIELD_SIZE: f32 = 500.0;

/// A guide loop is sampled at 101 points; first and last coincide.
const GUIDE_SEGMENTS: usize = 100;

const SUN_LIGHT_INTENSITY: f32 = 5_000_000.0;
const SUN_LIGHT_RANGE: f32 = 200.0;
const FILL_ILLUMINANCE: f32 = 400.0;

/// Marks the pickable planet entities.
#[derive(Component, Debug)]
pub struct Planet;

pub struct Plugin;

impl Plugin {
    fn spawn_starfield(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
    ) {
        let mut rng = rand::thread_rng();
        let positions: Vec<[f32; 3]> = (0..STAR_COUNT)
            .map(|_| {
                [
                    rng.gen_range(-0.5..0.5) * STAR_FIELD_SIZE,
                    rng.gen_range(-0.5..0.5) * STAR_FIELD_SIZE,
                    rng.gen_range(-0.5..0.5) * STAR_FIELD_SIZE,
                ]
            })
            .collect();

        let mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD)
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions);

        commands.spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(1.0, 1.0, 1.0, 0.8),
                unlit: true,
                alpha_mode: AlphaMode::Blend,
                ..default()
            })),
            orbit::Spin(orbit::STAR_DRIFT),
            NotShadowCaster,
            Name::new("starfield"),
        ));
    }

    fn spawn_sun(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
    ) {
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(bodies::SUN_RADIUS).mesh().uv(32, 18))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb_u8(255, 220, 60),
                emissive: LinearRgba::new(20.0, 16.0, 2.5, 1.0),
                ..default()
            })),
            orbit::Spin(orbit::SUN_SPIN),
            NotShadowCaster,
            Name::new("sun"),
        ));

        // Translucent shell hinting at the corona; purely decorative.
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(bodies::SUN_GLOW_RADIUS).mesh().uv(32, 18))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(1.0, 0.9, 0.3, 0.1),
                unlit: true,
                alpha_mode: AlphaMode::Blend,
                ..default()
            })),
            NotShadowCaster,
            Name::new("sun glow"),
        ));
    }

    fn spawn_planets(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
    ) {
        let mut rng = rand::thread_rng();
        for spec in bodies::PLANETS.iter() {
            // Planets start scattered, not lined up along one axis.
            let orbit = orbit::Orbit::from_spec(spec, rng.gen_range(0.0..TAU));
            let (red, green, blue) = spec.color;

            commands.spawn((
                Mesh3d(meshes.add(Sphere::new(spec.radius).mesh().uv(32, 18))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb_u8(red, green, blue),
                    perceptual_roughness: 0.9,
                    ..default()
                })),
                Transform::from_translation(orbit.position()),
                orbit,
                Planet,
                RayCastPickable,
                Name::new(spec.name),
            ));
        }
    }

    fn spawn_guides(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
    ) {
        let material = materials.add(StandardMaterial {
            base_color: Color::srgba(0.2, 0.2, 0.2, 0.3),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        for spec in bodies::PLANETS.iter() {
            let points: Vec<[f32; 3]> = (0..=GUIDE_SEGMENTS)
                .map(|i| {
                    let angle = TAU * i as f32 / GUIDE_SEGMENTS as f32;
                    [angle.cos() * spec.distance, 0.0, angle.sin() * spec.distance]
                })
                .collect();

            let mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::RENDER_WORLD)
                .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, points);

            commands.spawn((
                Mesh3d(meshes.add(mesh)),
                MeshMaterial3d(material.clone()),
                NotShadowCaster,
                Name::new(format!("{} orbit", spec.name)),
            ));
        }
    }

    fn setup_lights(mut commands: Commands) {
        commands.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: Theme::default().ambient_brightness(),
        });

        // The sun is the scene's light source; the emissive sphere sits
        // around this point light, so it must not cast shadows itself.
        commands.spawn((
            PointLight {
                color: Color::WHITE,
                intensity: SUN_LIGHT_INTENSITY,
                range: SUN_LIGHT_RANGE,
                shadows_enabled: true,
                ..default()
            },
            Transform::default(),
            Name::new("sun light"),
        ));

        // Fill light so the night sides stay legible.
        commands.spawn((
            DirectionalLight {
                illuminance: FILL_ILLUMINANCE,
                ..default()
            },
            Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
            Name::new("fill light"),
        ));
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                Self::spawn_starfield,
                Self::spawn_sun,
                Self::spawn_planets,
                Self::spawn_guides,
                Self::setup_lights,
            ),
        );
    }
}
