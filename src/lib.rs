//! Orbit Jump - Jump Physics Engine
//!
//! A library crate providing the planet-hopping movement simulation:
//! orbital locking, ballistic free flight, dashing, landing capture and
//! adaptive difficulty tuning.

pub mod actions;
pub mod adaptive;
pub mod camera;
pub mod config;
pub mod physics;
pub mod planet;
pub mod player;
pub mod prediction;
pub mod scenarios;
pub mod services;
pub mod session;
pub mod trail;
pub mod types;

#[cfg(test)]
pub mod test_utils;
