//! Shape Storm - a shape-shooting asteroid survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, weapons, collisions, scoring)
//! - `renderer`: Drawing boundary and the browser 2D canvas backend
//! - `platform`: Keyboard mapping to simulation input
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{AssetError, TuningError};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the interactive frontend
    pub const TARGET_FPS: u32 = 60;
    /// Frame delta used by headless runs
    pub const FRAME_DT: f32 = 1.0 / TARGET_FPS as f32;

    /// Play-field dimensions (screen space, y grows downward)
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Asteroid spawning
    pub const SPAWN_INTERVAL_MIN: f32 = 0.5;
    pub const SPAWN_INTERVAL_MAX: f32 = 3.0;
    pub const MAX_ASTEROIDS: usize = 150;
    pub const ASTEROID_SPEED_MIN: f32 = 125.0;
    pub const ASTEROID_SPEED_MAX: f32 = 250.0;
    /// Angular speed range (degrees/s)
    pub const ASTEROID_SPIN_MIN: f32 = 50.0;
    pub const ASTEROID_SPIN_MAX: f32 = 240.0;
    /// Fraction of the smaller screen dimension used as aim jitter
    pub const AIM_JITTER_FRACTION: f32 = 0.1;
    /// Radius per size tier unit
    pub const ASTEROID_RADIUS_UNIT: f32 = 16.0;

    /// Player ship
    pub const SHIP_HP: i32 = 100;
    pub const SHIP_SPEED: f32 = 250.0;
    /// On-screen ship width; the collision radius is half of it
    pub const SHIP_WIDTH: f32 = 80.0;

    /// Weapons (fire rate in shots/s, spacing in px)
    pub const LASER_FIRE_RATE: f32 = 12.0;
    pub const BULLET_FIRE_RATE: f32 = 11.0;
    pub const TRIPLE_FIRE_RATE: f32 = 5.0;
    pub const LASER_SPACING: f32 = 40.0;
    pub const BULLET_SPACING: f32 = 20.0;
    pub const TRIPLE_SPACING: f32 = 30.0;
    /// Angle between the outer triple-shot projectiles and straight up (degrees)
    pub const TRIPLE_SPREAD_DEG: f32 = 15.0;

    /// Collection capacity hints
    pub const ASTEROID_CAPACITY: usize = 1_000;
    pub const PROJECTILE_CAPACITY: usize = 10_000;
}

/// Unit vector pointing up in screen space
pub const UP: Vec2 = Vec2::new(0.0, -1.0);

/// Rotate a vector by an angle in degrees (screen space, clockwise-positive)
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Angle of a vector measured from straight up, in degrees
#[inline]
pub fn heading_deg(v: Vec2) -> f32 {
    UP.angle_to(v).to_degrees()
}
