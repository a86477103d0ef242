//! The player ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::WeaponType;
use super::state::Transform;
use crate::UP;
use crate::tuning::{ShipTuning, WeaponProfile, WeaponTuning};

/// Directional input held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Cosmetic ship texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShipSkin {
    #[default]
    Classic,
    Alternate,
}

impl ShipSkin {
    pub fn toggled(self) -> Self {
        match self {
            ShipSkin::Classic => ShipSkin::Alternate,
            ShipSkin::Alternate => ShipSkin::Classic,
        }
    }

    pub fn texture_path(self) -> &'static str {
        match self {
            ShipSkin::Classic => "spaceship1.png",
            ShipSkin::Alternate => "spaceship2.jpg",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ShipSkin::Classic => 0,
            ShipSkin::Alternate => 1,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub transform: Transform,
    hp: i32,
    alive: bool,
    speed: f32,
    width: f32,
    weapons: WeaponTuning,
    pub skin: ShipSkin,
}

impl Ship {
    /// Spawn a fresh ship at `position`
    pub fn new(position: Vec2, ship: &ShipTuning, weapons: &WeaponTuning) -> Self {
        Self {
            transform: Transform { position, rotation: 0.0 },
            hp: ship.hp,
            alive: true,
            speed: ship.speed,
            width: ship.width,
            weapons: *weapons,
            skin: ShipSkin::default(),
        }
    }

    /// Move from directional input; a dead ship ignores input and drifts down
    pub fn update(&mut self, input: &MoveInput, dt: f32) {
        let step = self.speed * dt;
        let pos = &mut self.transform.position;
        if self.alive {
            if input.up {
                pos.y -= step;
            }
            if input.down {
                pos.y += step;
            }
            if input.left {
                pos.x -= step;
            }
            if input.right {
                pos.x += step;
            }
        } else {
            pos.y += step;
        }
    }

    pub fn take_damage(&mut self, dmg: i32) {
        if !self.alive {
            return;
        }
        self.hp -= dmg;
        if self.hp <= 0 {
            self.alive = false;
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// Collision radius, half the on-screen width
    pub fn radius(&self) -> f32 {
        self.width * 0.5
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Where projectiles leave the ship
    pub fn muzzle(&self) -> Vec2 {
        self.transform.position + UP * self.radius()
    }

    pub fn fire_rate(&self, weapon: WeaponType) -> f32 {
        self.profile(weapon).fire_rate
    }

    pub fn spacing(&self, weapon: WeaponType) -> f32 {
        self.profile(weapon).spacing
    }

    pub fn profile(&self, weapon: WeaponType) -> &WeaponProfile {
        self.weapons.profile(weapon)
    }

    pub fn triple_spread_deg(&self) -> f32 {
        self.weapons.triple_spread_deg
    }
}
