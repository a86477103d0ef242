//! Timed asteroid creation
//!
//! Asteroids enter from a random screen edge, aimed at a jittered point near
//! the center.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::asteroid::{Asteroid, AsteroidShape, ShapeSelection, SizeTier};
use super::state::{Bounds, Physics, Transform};
use crate::consts::AIM_JITTER_FRACTION;
use crate::tuning::SpawnTuning;

/// Spawn clock: an accumulator against a randomly re-rolled interval
#[derive(Debug, Clone, PartialEq)]
pub struct Spawner {
    timer: f32,
    interval: f32,
}

impl Spawner {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, tuning: &SpawnTuning) -> Self {
        Self {
            timer: 0.0,
            interval: roll_interval(rng, tuning),
        }
    }

    /// Zero the accumulator and roll a fresh interval
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &SpawnTuning) {
        self.timer = 0.0;
        self.interval = roll_interval(rng, tuning);
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Advance the clock; runs at the top of the frame, before a restart can
    /// reset it
    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
    }

    /// Spawn at most one asteroid when due and below the population cap.
    /// Returns the index of the new asteroid.
    pub fn try_spawn<R: Rng + ?Sized>(
        &mut self,
        asteroids: &mut Vec<Asteroid>,
        selection: ShapeSelection,
        rng: &mut R,
        tuning: &SpawnTuning,
        bounds: &Bounds,
    ) -> Option<usize> {
        if self.timer < self.interval || asteroids.len() >= tuning.max_asteroids {
            return None;
        }

        let shape = selection.resolve(rng);
        let asteroid = spawn_asteroid(rng, shape, tuning, bounds);
        log::debug!(
            "Spawned {:?} asteroid (tier {}) at ({:.0}, {:.0})",
            asteroid.shape,
            asteroid.size().value(),
            asteroid.position().x,
            asteroid.position().y
        );
        asteroids.push(asteroid);

        self.reset(rng, tuning);
        Some(asteroids.len() - 1)
    }
}

fn roll_interval<R: Rng + ?Sized>(rng: &mut R, tuning: &SpawnTuning) -> f32 {
    rng.random_range(tuning.interval_min..=tuning.interval_max)
}

/// Build one asteroid of `shape` just outside a random screen edge, heading
/// toward the center
pub fn spawn_asteroid<R: Rng + ?Sized>(
    rng: &mut R,
    shape: AsteroidShape,
    tuning: &SpawnTuning,
    bounds: &Bounds,
) -> Asteroid {
    let size = SizeTier::ALL[rng.random_range(0..SizeTier::ALL.len())];
    let r = size.radius();
    let (w, h) = (bounds.width, bounds.height);

    let position = match rng.random_range(0..4) {
        0 => Vec2::new(rng.random_range(0.0..=w), -r),
        1 => Vec2::new(w + r, rng.random_range(0.0..=h)),
        2 => Vec2::new(rng.random_range(0.0..=w), h + r),
        _ => Vec2::new(-r, rng.random_range(0.0..=h)),
    };

    let max_offset = w.min(h) * AIM_JITTER_FRACTION;
    let angle = rng.random_range(0.0..=TAU);
    let offset = rng.random_range(0.0..=max_offset);
    let target = bounds.center() + Vec2::from_angle(angle) * offset;

    let dir = (target - position).normalize_or_zero();
    let speed = rng.random_range(tuning.speed_min..=tuning.speed_max);
    let physics = Physics {
        velocity: dir * speed,
        angular_velocity: rng.random_range(tuning.spin_min..=tuning.spin_max),
    };
    let transform = Transform {
        position,
        rotation: rng.random_range(0.0..=360.0),
    };

    Asteroid::new(shape, size, transform, physics)
}
