//! Collision passes between projectiles, asteroids and the ship
//!
//! Both passes scan in live-collection order and decide removals first,
//! then drop removed entities in a single `retain`. First match wins: a
//! projectile damages the first overlapping asteroid in order, not the nearest.

use glam::Vec2;

use super::asteroid::{Asteroid, SizeTier};
use super::projectile::Projectile;
use super::ship::Ship;
use super::state::Bounds;

/// True when two circles strictly overlap
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// An asteroid destroyed by projectile fire
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kill {
    pub original_size: SizeTier,
    pub score: u64,
}

/// Outcome of the projectile pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectileHits {
    /// Projectiles consumed by a hit
    pub hits: usize,
    pub kills: Vec<Kill>,
}

impl ProjectileHits {
    pub fn score(&self) -> u64 {
        self.kills.iter().map(|k| k.score).sum()
    }
}

/// Resolve projectile-asteroid hits.
///
/// Each projectile hits at most one asteroid per frame and is consumed by it.
/// Destroyed asteroids drop out of consideration immediately, and shrinking
/// takes effect for the projectiles scanned after it.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    asteroids: &mut Vec<Asteroid>,
) -> ProjectileHits {
    let mut result = ProjectileHits::default();
    if projectiles.is_empty() || asteroids.is_empty() {
        return result;
    }

    let mut spent = vec![false; projectiles.len()];
    let mut destroyed = vec![false; asteroids.len()];

    for (pi, projectile) in projectiles.iter().enumerate() {
        let target = asteroids.iter().enumerate().position(|(ai, asteroid)| {
            !destroyed[ai]
                && circles_overlap(
                    projectile.position(),
                    projectile.radius(),
                    asteroid.position(),
                    asteroid.radius(),
                )
        });
        let Some(ai) = target else {
            continue;
        };

        spent[pi] = true;
        result.hits += 1;

        let asteroid = &mut asteroids[ai];
        if asteroid.take_damage(projectile.damage) {
            destroyed[ai] = true;
            let original_size = asteroid.original_size();
            result.kills.push(Kill {
                original_size,
                score: original_size.kill_score(),
            });
        }
    }

    retain_unmarked(projectiles, &spent);
    retain_unmarked(asteroids, &destroyed);
    result
}

/// Outcome of the ship pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipCollisions {
    /// Damage applied to the ship, one entry per ramming asteroid
    pub damage: Vec<i32>,
    /// Asteroids that left the play-field this frame
    pub escaped: usize,
}

/// Resolve ship-asteroid contact and advance the surviving asteroids.
///
/// An asteroid touching a living ship damages it and is removed without
/// score; otherwise it moves and is removed if it leaves the inflated bounds.
pub fn resolve_ship_collisions(
    ship: &mut Ship,
    asteroids: &mut Vec<Asteroid>,
    dt: f32,
    bounds: &Bounds,
) -> ShipCollisions {
    let mut result = ShipCollisions::default();
    let mut removed = vec![false; asteroids.len()];

    for (ai, asteroid) in asteroids.iter_mut().enumerate() {
        if ship.is_alive()
            && circles_overlap(
                ship.position(),
                ship.radius(),
                asteroid.position(),
                asteroid.radius(),
            )
        {
            let damage = asteroid.damage();
            ship.take_damage(damage);
            result.damage.push(damage);
            removed[ai] = true;
            continue;
        }

        if !asteroid.update(dt, bounds) {
            result.escaped += 1;
            removed[ai] = true;
        }
    }

    retain_unmarked(asteroids, &removed);
    result
}

fn retain_unmarked<T>(items: &mut Vec<T>, marked: &[bool]) {
    let mut flags = marked.iter();
    items.retain(|_| !flags.next().copied().unwrap_or(false));
}
