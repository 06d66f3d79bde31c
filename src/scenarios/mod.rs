//! World presets: predefined planet layouts.
//!
//! Provides a collection of static world layouts for different play
//! situations: a gentle tutorial basin, a dense archipelago, a void
//! crossing and an edge-of-the-world run. Loading a preset replaces
//! every planet and the player in one shot.

pub mod presets;

use bevy::prelude::*;

use crate::planet::{Planet, spawn_planet};
use crate::player::{Player, spawn_player_on_planet};
use crate::session::SessionState;

pub use presets::PRESETS;

/// Preset loaded when none was requested.
pub const DEFAULT_PRESET: &str = "tutorial_basin";

/// A planet entry in a world preset.
#[derive(Clone, Copy, Debug)]
pub struct PresetPlanet {
    /// Display name.
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Orbit sweep rate (rad/s); negative is clockwise.
    pub angular_velocity: f64,
    /// Gravity scale; negative makes the body a repulsive void.
    pub gravity_multiplier: f64,
}

impl PresetPlanet {
    /// Build the runtime planet for this entry.
    pub fn to_planet(&self) -> Planet {
        Planet {
            pos: bevy::math::DVec2::new(self.x, self.y),
            radius: self.radius,
            angular_velocity: self.angular_velocity,
            gravity_multiplier: self.gravity_multiplier,
        }
    }
}

/// A predefined world layout.
#[derive(Clone, Copy, Debug)]
pub struct WorldPreset {
    /// Unique identifier for the preset.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the layout.
    pub description: &'static str,
    /// The planets making up the world.
    pub planets: &'static [PresetPlanet],
    /// Index into `planets` where the player starts orbiting.
    pub start_planet: usize,
    /// Starting orbit angle in radians.
    pub start_angle: f64,
}

/// Resource tracking the currently loaded preset.
#[derive(Resource, Default)]
pub struct CurrentPreset {
    /// ID of the loaded preset.
    pub id: &'static str,
}

/// Event to trigger loading a world preset.
#[derive(Event)]
pub struct LoadPresetEvent {
    /// ID of the preset to load.
    pub preset_id: &'static str,
}

/// Plugin providing world preset management.
pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentPreset>()
            .add_event::<LoadPresetEvent>()
            .add_systems(Startup, request_default_preset)
            .add_systems(Update, handle_load_preset);
    }
}

/// Queue the default preset so the first Update populates the world.
fn request_default_preset(mut load_events: EventWriter<LoadPresetEvent>) {
    load_events.send(LoadPresetEvent {
        preset_id: DEFAULT_PRESET,
    });
}

/// Handle preset loading events.
///
/// Replaces the whole world: despawns every planet and player, spawns
/// the preset's planets, and places the player on the start planet's
/// orbit shell. Session statistics reset with the world; the sim clock
/// keeps running.
fn handle_load_preset(
    mut commands: Commands,
    mut events: EventReader<LoadPresetEvent>,
    mut current: ResMut<CurrentPreset>,
    mut session: ResMut<SessionState>,
    planets: Query<Entity, With<Planet>>,
    players: Query<Entity, With<Player>>,
) {
    for event in events.read() {
        let Some(preset) = find_preset(event.preset_id) else {
            warn!("Unknown world preset: {}", event.preset_id);
            continue;
        };

        info!("Loading world preset: {} ({})", preset.name, preset.id);

        for entity in planets.iter() {
            commands.entity(entity).despawn();
        }
        for entity in players.iter() {
            commands.entity(entity).despawn();
        }

        *session = SessionState::default();

        let mut start = None;
        for (index, spec) in preset.planets.iter().enumerate() {
            let planet = spec.to_planet();
            let entity = spawn_planet(&mut commands, spec.name.to_string(), planet.clone());
            if index == preset.start_planet {
                start = Some((entity, planet));
            }
        }

        match start {
            Some((entity, planet)) => {
                spawn_player_on_planet(&mut commands, entity, &planet, preset.start_angle);
            }
            None => {
                warn!(
                    "Preset {} start planet index {} is out of range; no player spawned",
                    preset.id, preset.start_planet
                );
            }
        }

        current.id = preset.id;

        info!(
            "World preset loaded: {} planets, player on {}",
            preset.planets.len(),
            preset
                .planets
                .get(preset.start_planet)
                .map(|p| p.name)
                .unwrap_or("nothing")
        );
    }
}

/// Get a preset by ID.
pub fn find_preset(id: &str) -> Option<&'static WorldPreset> {
    PRESETS.iter().find(|p| p.id == id)
}
