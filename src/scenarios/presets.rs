//! Preset world definitions.
//!
//! Four static layouts covering the main play situations: first jumps,
//! dense multi-planet hopping, a repulsive void crossing, and planets
//! near the world edge.

use std::f64::consts::{FRAC_PI_2, PI};

use super::{PresetPlanet, WorldPreset};

/// All available world presets.
pub static PRESETS: &[WorldPreset] = &[TUTORIAL_BASIN, ARCHIPELAGO, VOID_CROSSING, RIM_RUN];

/// Preset 1: Tutorial Basin (default)
///
/// Two well-separated planets with a clear line between them. The jump
/// from Haven to Outpost succeeds at moderate power with barely any
/// aiming, which is the point.
pub static TUTORIAL_BASIN: WorldPreset = WorldPreset {
    id: "tutorial_basin",
    name: "Tutorial Basin",
    description: "Two friendly planets. Jump across, land, repeat.",
    planets: &[
        PresetPlanet {
            name: "Haven",
            x: -400.0,
            y: 0.0,
            radius: 60.0,
            angular_velocity: 0.6,
            gravity_multiplier: 1.0,
        },
        PresetPlanet {
            name: "Outpost",
            x: 480.0,
            y: 220.0,
            radius: 45.0,
            angular_velocity: -0.8,
            gravity_multiplier: 1.0,
        },
    ],
    start_planet: 0,
    start_angle: 0.0,
};

/// Preset 2: Archipelago
///
/// Five planets of mixed size and spin, close enough that every flight
/// feels three other pulls. Five gravity sources also cover both the
/// four-wide batch and the tail of the gravity sum.
pub static ARCHIPELAGO: WorldPreset = WorldPreset {
    id: "archipelago",
    name: "Archipelago",
    description: "Five tangled gravity wells. Every jump is a compromise.",
    planets: &[
        PresetPlanet {
            name: "Anchor",
            x: 0.0,
            y: -600.0,
            radius: 70.0,
            angular_velocity: 0.5,
            gravity_multiplier: 1.0,
        },
        PresetPlanet {
            name: "Skerry",
            x: 900.0,
            y: 300.0,
            radius: 35.0,
            angular_velocity: 1.2,
            gravity_multiplier: 1.0,
        },
        PresetPlanet {
            name: "Breaker",
            x: -1100.0,
            y: 450.0,
            radius: 50.0,
            angular_velocity: -0.7,
            gravity_multiplier: 1.0,
        },
        PresetPlanet {
            name: "Lighthouse",
            x: 300.0,
            y: 1400.0,
            radius: 40.0,
            angular_velocity: 0.9,
            gravity_multiplier: 1.5,
        },
        PresetPlanet {
            name: "Shoal",
            x: -500.0,
            y: -1700.0,
            radius: 80.0,
            angular_velocity: 0.3,
            gravity_multiplier: 0.8,
        },
    ],
    start_planet: 0,
    start_angle: FRAC_PI_2,
};

/// Preset 3: Void Crossing
///
/// Two planets on opposite sides of a repulsive rift. A straight shot
/// gets shoved off course; the working route arcs around the void or
/// punches through it with a dash.
pub static VOID_CROSSING: WorldPreset = WorldPreset {
    id: "void_crossing",
    name: "Void Crossing",
    description: "A repulsive rift between you and the far shore.",
    planets: &[
        PresetPlanet {
            name: "Nearside",
            x: -1300.0,
            y: 0.0,
            radius: 65.0,
            angular_velocity: 0.6,
            gravity_multiplier: 1.0,
        },
        PresetPlanet {
            name: "Rift",
            x: 0.0,
            y: 0.0,
            radius: 90.0,
            angular_velocity: 0.0,
            gravity_multiplier: -1.0,
        },
        PresetPlanet {
            name: "Farside",
            x: 1300.0,
            y: 0.0,
            radius: 65.0,
            angular_velocity: -0.6,
            gravity_multiplier: 1.0,
        },
    ],
    start_planet: 0,
    start_angle: 0.0,
};

/// Preset 4: Rim Run
///
/// Planets pushed out toward the world edge. Overshooting a jump means
/// bouncing off the boundary with half your speed gone.
pub static RIM_RUN: WorldPreset = WorldPreset {
    id: "rim_run",
    name: "Rim Run",
    description: "Gravity wells at the edge of the world. Mind the wall.",
    planets: &[
        PresetPlanet {
            name: "Bastion",
            x: 4300.0,
            y: 0.0,
            radius: 55.0,
            angular_velocity: 0.8,
            gravity_multiplier: 1.0,
        },
        PresetPlanet {
            name: "Verge",
            x: 0.0,
            y: 4200.0,
            radius: 45.0,
            angular_velocity: -1.0,
            gravity_multiplier: 1.0,
        },
        PresetPlanet {
            name: "Hearth",
            x: -900.0,
            y: -700.0,
            radius: 75.0,
            angular_velocity: 0.4,
            gravity_multiplier: 1.2,
        },
    ],
    start_planet: 2,
    start_angle: PI,
};
