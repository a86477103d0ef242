//! Projectiles and the weapon types that emit them

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Bounds, Physics, Transform};

/// Selectable weapon, in cycling order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeaponType {
    #[default]
    Laser,
    Bullet,
    Triple,
}

impl WeaponType {
    pub const ALL: [WeaponType; 3] = [WeaponType::Laser, WeaponType::Bullet, WeaponType::Triple];

    /// Next weapon in the cycle, wrapping around
    pub fn next(self) -> Self {
        match self {
            WeaponType::Laser => WeaponType::Bullet,
            WeaponType::Bullet => WeaponType::Triple,
            WeaponType::Triple => WeaponType::Laser,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeaponType::Laser => "LASER",
            WeaponType::Bullet => "BULLET",
            WeaponType::Triple => "TRIPLE",
        }
    }

    /// Damage each projectile of this weapon deals
    pub fn damage(self) -> i32 {
        match self {
            WeaponType::Laser => 20,
            WeaponType::Bullet => 40,
            WeaponType::Triple => 15,
        }
    }

    /// Collision radius of a projectile of this weapon
    pub fn radius(self) -> f32 {
        match self {
            WeaponType::Bullet => 5.0,
            WeaponType::Laser | WeaponType::Triple => 2.0,
        }
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A projectile entity
#[derive(Debug, Clone)]
pub struct Projectile {
    pub transform: Transform,
    pub physics: Physics,
    pub weapon: WeaponType,
    pub damage: i32,
}

impl Projectile {
    pub fn new(weapon: WeaponType, position: Vec2, velocity: Vec2) -> Self {
        Self {
            transform: Transform { position, rotation: 0.0 },
            physics: Physics { velocity, angular_velocity: 0.0 },
            weapon,
            damage: weapon.damage(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn radius(&self) -> f32 {
        self.weapon.radius()
    }

    /// Integrate motion. Returns true once the projectile has left the
    /// play-field rectangle.
    pub fn update(&mut self, dt: f32, bounds: &Bounds) -> bool {
        self.transform.integrate(&self.physics, dt);
        !bounds.contains(self.transform.position)
    }
}
