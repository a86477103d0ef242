//! Read-only per-frame views handed to the renderer

use glam::Vec2;
use serde::Serialize;

use super::projectile::WeaponType;
use super::ship::ShipSkin;
use super::state::GameState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsteroidView {
    pub position: Vec2,
    pub radius: f32,
    pub sides: u32,
    /// Degrees
    pub rotation: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub weapon: WeaponType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipView {
    pub position: Vec2,
    pub radius: f32,
    pub width: f32,
    pub alive: bool,
    pub skin: ShipSkin,
}

/// Values shown as HUD text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub hp: i32,
    pub score: u64,
    pub weapon: &'static str,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub asteroids: Vec<AsteroidView>,
    pub projectiles: Vec<ProjectileView>,
    pub ship: ShipView,
    pub hud: Hud,
}

impl GameState {
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            asteroids: self
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    position: a.position(),
                    radius: a.radius(),
                    sides: a.shape.sides(),
                    rotation: a.transform.rotation,
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    position: p.position(),
                    weapon: p.weapon,
                })
                .collect(),
            ship: ShipView {
                position: self.ship.position(),
                radius: self.ship.radius(),
                width: self.ship.width(),
                alive: self.ship.is_alive(),
                skin: self.ship.skin,
            },
            hud: Hud {
                hp: self.ship.hp(),
                score: self.score,
                weapon: self.weapon.name(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroid::{Asteroid, AsteroidShape, SizeTier};
    use crate::sim::projectile::Projectile;
    use crate::sim::state::{Physics, Transform};

    #[test]
    fn test_snapshot_preserves_order_and_fields() {
        let mut state = GameState::new(1);
        for (shape, x) in [(AsteroidShape::Pentagon, 100.0), (AsteroidShape::Triangle, 200.0)] {
            state.asteroids.push(Asteroid::new(
                shape,
                SizeTier::Medium,
                Transform { position: Vec2::new(x, 50.0), rotation: 30.0 },
                Physics::default(),
            ));
        }
        state
            .projectiles
            .push(Projectile::new(WeaponType::Bullet, Vec2::new(5.0, 6.0), Vec2::ZERO));
        state.score = 7;

        let snap = state.snapshot();
        assert_eq!(snap.asteroids.len(), 2);
        assert_eq!(snap.asteroids[0].sides, 5);
        assert_eq!(snap.asteroids[1].sides, 3);
        assert_eq!(snap.asteroids[1].radius, 32.0);
        assert_eq!(snap.projectiles[0].weapon, WeaponType::Bullet);
        assert!(snap.ship.alive);
        assert_eq!(snap.hud, Hud { hp: 100, score: 7, weapon: "LASER" });
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_string(&GameState::new(3).snapshot()).unwrap();
        assert!(json.contains("\"weapon\":\"LASER\""));
    }
}
