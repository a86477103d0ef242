//! Game state and shared simulation types
//!
//! `GameState` exclusively owns every entity collection. Entities never refer
//! to one another; all interaction goes through the tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, AsteroidShape, ShapeSelection, SizeTier};
use super::projectile::{Projectile, WeaponType};
use super::ship::Ship;
use super::spawner::Spawner;
use super::weapon::WeaponSystem;
use crate::consts::{ASTEROID_CAPACITY, PROJECTILE_CAPACITY};
use crate::error::TuningError;
use crate::tuning::Tuning;

/// Position plus rotation in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f32,
}

impl Transform {
    pub fn integrate(&mut self, physics: &Physics, dt: f32) {
        self.position += physics.velocity * dt;
        self.rotation += physics.angular_velocity * dt;
    }
}

/// Constant linear (px/s) and angular (deg/s) velocity
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    pub velocity: Vec2,
    pub angular_velocity: f32,
}

/// The play-field rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.contains_inflated(p, 0.0)
    }

    /// Containment test against the rectangle grown by `margin` on every side
    pub fn contains_inflated(&self, p: Vec2, margin: f32) -> bool {
        p.x >= -margin
            && p.x <= self.width + margin
            && p.y >= -margin
            && p.y <= self.height + margin
    }
}

/// Notable things that happened during the last tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    AsteroidSpawned { shape: AsteroidShape, size: SizeTier },
    AsteroidDestroyed { original_size: SizeTier, score: u64 },
    ShipHit { damage: i32 },
    ShipDestroyed,
    Restarted,
    WeaponChanged(WeaponType),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub bounds: Bounds,
    pub ship: Ship,
    /// Live asteroids in spawn order
    pub asteroids: Vec<Asteroid>,
    /// Live projectiles in emission order
    pub projectiles: Vec<Projectile>,
    pub score: u64,
    pub shape_selection: ShapeSelection,
    pub weapon: WeaponType,
    pub spawner: Spawner,
    pub weapon_system: WeaponSystem,
    /// Frames simulated since the run started
    pub frames: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::from_valid_tuning(seed, Tuning::default())
    }

    /// Create a new game, rejecting invalid tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::from_valid_tuning(seed, tuning))
    }

    fn from_valid_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = Bounds::new(tuning.arena.width, tuning.arena.height);
        let spawner = Spawner::new(&mut rng, &tuning.spawn);
        Self {
            seed,
            rng,
            tuning,
            bounds,
            ship: Self::spawn_ship(&tuning, &bounds),
            asteroids: Vec::with_capacity(ASTEROID_CAPACITY),
            projectiles: Vec::with_capacity(PROJECTILE_CAPACITY),
            score: 0,
            shape_selection: ShapeSelection::default(),
            weapon: WeaponType::default(),
            spawner,
            weapon_system: WeaponSystem::default(),
            frames: 0,
            events: Vec::new(),
        }
    }

    fn spawn_ship(tuning: &Tuning, bounds: &Bounds) -> Ship {
        Ship::new(bounds.center(), &tuning.ship, &tuning.weapons)
    }

    /// Start over with a fresh ship, empty field and zero score.
    /// Shape and weapon selections carry over.
    pub fn restart(&mut self) {
        self.ship = Self::spawn_ship(&self.tuning, &self.bounds);
        self.asteroids.clear();
        self.projectiles.clear();
        self.spawner.reset(&mut self.rng, &self.tuning.spawn);
        self.score = 0;
        self.events.push(GameEvent::Restarted);
        log::info!("Game restarted");
    }

    /// Play-field center, where the ship spawns
    pub fn spawn_point(&self) -> Vec2 {
        self.bounds.center()
    }
}
