use thiserror::Error;

/// The table below is the whole configuration surface of the simulation:
/// eight planets, each with a display name, an sRGB base color, an orbital
/// distance, a visual radius, and angular speeds for orbit and self-rotation
/// (radians per second, before the user's speed multiplier).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub color: (u8, u8, u8),
    /// Orbit radius around the sun. Strictly increasing down the table so
    /// neighbours never overlap visually; not enforced by `validate`.
    pub distance: f32,
    pub radius: f32,
    pub base_speed: f32,
    pub rotation_speed: f32,
    pub blurb: &'static str,
}

pub const PLANET_COUNT: usize = 8;

pub const SUN_RADIUS: f32 = 4.0;
pub const SUN_GLOW_RADIUS: f32 = 5.0;

pub const PLANETS: [PlanetSpec; PLANET_COUNT] = [
    PlanetSpec {
        name: "mercury",
        color: (140, 120, 83),
        distance: 12.0,
        radius: 0.4,
        base_speed: 0.05,
        rotation_speed: 0.01,
        blurb: "Mercury: Closest planet to the Sun. Orbital period: 88 Earth days.",
    },
    PlanetSpec {
        name: "venus",
        color: (255, 198, 73),
        distance: 16.0,
        radius: 0.7,
        base_speed: 0.035,
        rotation_speed: 0.008,
        blurb: "Venus: Hottest planet in our solar system. Orbital period: 225 Earth days.",
    },
    PlanetSpec {
        name: "earth",
        color: (107, 147, 214),
        distance: 20.0,
        radius: 0.8,
        base_speed: 0.03,
        rotation_speed: 0.02,
        blurb: "Earth: Our home planet. Orbital period: 365 Earth days.",
    },
    PlanetSpec {
        name: "mars",
        color: (193, 68, 14),
        distance: 25.0,
        radius: 0.6,
        base_speed: 0.024,
        rotation_speed: 0.018,
        blurb: "Mars: The Red Planet. Orbital period: 687 Earth days.",
    },
    PlanetSpec {
        name: "jupiter",
        color: (216, 202, 157),
        distance: 32.0,
        radius: 1.5,
        base_speed: 0.013,
        rotation_speed: 0.04,
        blurb: "Jupiter: Largest planet in our solar system. Orbital period: 12 Earth years.",
    },
    PlanetSpec {
        name: "saturn",
        color: (250, 213, 165),
        distance: 40.0,
        radius: 1.2,
        base_speed: 0.009,
        rotation_speed: 0.038,
        blurb: "Saturn: Known for its beautiful rings. Orbital period: 29 Earth years.",
    },
    PlanetSpec {
        name: "uranus",
        color: (79, 208, 231),
        distance: 48.0,
        radius: 1.0,
        base_speed: 0.006,
        rotation_speed: 0.03,
        blurb: "Uranus: Tilted sideways. Orbital period: 84 Earth years.",
    },
    PlanetSpec {
        name: "neptune",
        color: (75, 112, 221),
        distance: 56.0,
        radius: 0.9,
        base_speed: 0.004,
        rotation_speed: 0.032,
        blurb: "Neptune: Windiest planet in our solar system. Orbital period: 165 Earth years.",
    },
];

pub fn find(name: &str) -> Option<&'static PlanetSpec> {
    PLANETS.iter().find(|spec| spec.name == name)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("expected {PLANET_COUNT} planets, the table has {0}")]
    WrongCount(usize),
    #[error("planet at index {0} has an empty name")]
    EmptyName(usize),
    #[error("planet {0:?} appears more than once")]
    DuplicateName(&'static str),
    #[error("planet {name:?} has a non-positive {field}")]
    NonPositive {
        name: &'static str,
        field: &'static str,
    },
}

/// The scene cannot be built from a partial or malformed table, so startup
/// aborts on the first violation instead of rendering nonsense.
pub fn validate(table: &[PlanetSpec]) -> Result<(), TableError> {
    if table.len() != PLANET_COUNT {
        return Err(TableError::WrongCount(table.len()));
    }
    for (index, spec) in table.iter().enumerate() {
        if spec.name.is_empty() {
            return Err(TableError::EmptyName(index));
        }
        if table[..index].iter().any(|other| other.name == spec.name) {
            return Err(TableError::DuplicateName(spec.name));
        }
        for (field, value) in [
            ("distance", spec.distance),
            ("radius", spec.radius),
            ("base speed", spec.base_speed),
            ("rotation speed", spec.rotation_speed),
        ] {
            if value <= 0.0 {
                return Err(TableError::NonPositive {
                    name: spec.name,
                    field,
                });
            }
        }
    }
    Ok(())
}
