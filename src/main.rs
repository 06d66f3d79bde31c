//! Orbit Jump - Jump Physics Engine
//!
//! Headless demo binary: loads the tutorial preset and runs a scripted
//! pilot that jumps between planets, dashing when a flight stalls,
//! while the simulation logs launches, landings and edge bounces.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use orbit_jump::actions::{DashRequest, JumpRequest};
use orbit_jump::config::PhysicsTuning;
use orbit_jump::physics::PhysicsPlugin;
use orbit_jump::planet::Planet;
use orbit_jump::player::{MotionMode, Player};
use orbit_jump::scenarios::ScenarioPlugin;
use orbit_jump::session::SessionState;
use orbit_jump::types::{Kinematics, SimClock};

/// Seconds spent on a planet before the pilot jumps again.
const JUMP_PAUSE: f64 = 2.5;

/// Seconds of free flight after which the pilot dashes at the nearest
/// planet instead of drifting.
const DASH_AFTER: f64 = 4.0;

/// Total scripted run length in sim seconds.
const DEMO_LENGTH: f64 = 45.0;

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        // Demo pilot dashes without power-ups
        .insert_resource(PhysicsTuning {
            free_dash: true,
            ..Default::default()
        })
        .add_plugins((PhysicsPlugin, ScenarioPlugin))
        .add_systems(Update, (autopilot, finish_after_demo))
        .run();
}

/// Scripted pilot. Landed: wait out the planning pause, then jump at
/// full power toward the nearest other planet. Flying too long: dash at
/// the nearest attracting planet to force a landing.
fn autopilot(
    clock: Res<SimClock>,
    mut last_action: Local<f64>,
    players: Query<(&MotionMode, &Kinematics), With<Player>>,
    planets: Query<(Entity, &Planet)>,
    mut jumps: EventWriter<JumpRequest>,
    mut dashes: EventWriter<DashRequest>,
) {
    let Ok((mode, kin)) = players.get_single() else {
        return;
    };

    match mode {
        MotionMode::Orbiting { planet, .. } => {
            if clock.elapsed - *last_action < JUMP_PAUSE {
                return;
            }
            let Some(target) = nearest_planet(&planets, kin, Some(*planet)) else {
                return;
            };
            let delta = target - kin.pos;
            jumps.send(JumpRequest {
                pull_power: 100.0,
                angle: delta.y.atan2(delta.x),
            });
            *last_action = clock.elapsed;
        }
        MotionMode::FreeFlight => {
            if clock.elapsed - *last_action < DASH_AFTER {
                return;
            }
            let Some(target) = nearest_planet(&planets, kin, None) else {
                return;
            };
            dashes.send(DashRequest { target });
            *last_action = clock.elapsed;
        }
    }
}

/// Position of the nearest attracting planet, skipping `exclude`.
fn nearest_planet(
    planets: &Query<(Entity, &Planet)>,
    kin: &Kinematics,
    exclude: Option<Entity>,
) -> Option<bevy::math::DVec2> {
    let mut best: Option<(f64, bevy::math::DVec2)> = None;
    for (entity, planet) in planets.iter() {
        if Some(entity) == exclude || !planet.is_attracting() {
            continue;
        }
        let dist = (planet.pos - kin.pos).length();
        if best.map_or(true, |(b, _)| dist < b) {
            best = Some((dist, planet.pos));
        }
    }
    best.map(|(_, pos)| pos)
}

/// Stop after the scripted run and log the session tally.
fn finish_after_demo(
    clock: Res<SimClock>,
    session: Res<SessionState>,
    mut done: Local<bool>,
    mut exit_events: EventWriter<AppExit>,
) {
    if clock.elapsed >= DEMO_LENGTH && !*done {
        *done = true;
        info!(
            "Demo over after {:.0}s: {} jumps, {} landings",
            clock.elapsed, session.jumps, session.landings
        );
        exit_events.send(AppExit::Success);
    }
}
