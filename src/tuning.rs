//! Data-driven game balance
//!
//! Every field defaults to the matching constant in [`crate::consts`]. A JSON
//! document may override any subset of fields; the result is validated before
//! it can reach the simulation.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;
use crate::sim::WeaponType;

/// Play-field size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// Asteroid spawn policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    /// Seconds between spawns, re-rolled after every spawn
    pub interval_min: f32,
    pub interval_max: f32,
    /// Population cap; no spawn while the field holds this many asteroids
    pub max_asteroids: usize,
    /// Linear speed range (px/s)
    pub speed_min: f32,
    pub speed_max: f32,
    /// Angular speed range (deg/s)
    pub spin_min: f32,
    pub spin_max: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            interval_min: SPAWN_INTERVAL_MIN,
            interval_max: SPAWN_INTERVAL_MAX,
            max_asteroids: MAX_ASTEROIDS,
            speed_min: ASTEROID_SPEED_MIN,
            speed_max: ASTEROID_SPEED_MAX,
            spin_min: ASTEROID_SPIN_MIN,
            spin_max: ASTEROID_SPIN_MAX,
        }
    }
}

/// Player ship parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    pub hp: i32,
    pub speed: f32,
    pub width: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            hp: SHIP_HP,
            speed: SHIP_SPEED,
            width: SHIP_WIDTH,
        }
    }
}

/// Fire rate and muzzle spacing for one weapon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponProfile {
    /// Shots per second
    pub fire_rate: f32,
    /// Pixels between consecutive projectiles
    pub spacing: f32,
}

impl WeaponProfile {
    /// Seconds between firing events
    pub fn interval(&self) -> f32 {
        1.0 / self.fire_rate
    }

    /// Projectile speed keeping consecutive shots `spacing` pixels apart
    pub fn projectile_speed(&self) -> f32 {
        self.spacing * self.fire_rate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    pub laser: WeaponProfile,
    pub bullet: WeaponProfile,
    pub triple: WeaponProfile,
    pub triple_spread_deg: f32,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            laser: WeaponProfile {
                fire_rate: LASER_FIRE_RATE,
                spacing: LASER_SPACING,
            },
            bullet: WeaponProfile {
                fire_rate: BULLET_FIRE_RATE,
                spacing: BULLET_SPACING,
            },
            triple: WeaponProfile {
                fire_rate: TRIPLE_FIRE_RATE,
                spacing: TRIPLE_SPACING,
            },
            triple_spread_deg: TRIPLE_SPREAD_DEG,
        }
    }
}

impl WeaponTuning {
    pub fn profile(&self, weapon: WeaponType) -> &WeaponProfile {
        match weapon {
            WeaponType::Laser => &self.laser,
            WeaponType::Bullet => &self.bullet,
            WeaponType::Triple => &self.triple,
        }
    }
}

/// Complete balance configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena: ArenaTuning,
    pub spawn: SpawnTuning,
    pub ship: ShipTuning,
    pub weapons: WeaponTuning,
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::debug!("Tuning overrides applied: {:?}", tuning);
        Ok(tuning)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        for weapon in WeaponType::ALL {
            let profile = self.weapons.profile(weapon);
            if !profile.fire_rate.is_finite() || profile.fire_rate <= 0.0 {
                return Err(TuningError::NonPositiveFireRate {
                    weapon,
                    value: profile.fire_rate,
                });
            }
            if !profile.spacing.is_finite() || profile.spacing < 0.0 {
                return Err(TuningError::InvalidSpacing {
                    weapon,
                    value: profile.spacing,
                });
            }
        }
        if !self.weapons.triple_spread_deg.is_finite() {
            return Err(TuningError::NonFiniteSpread(self.weapons.triple_spread_deg));
        }

        positive("arena.width", self.arena.width)?;
        positive("arena.height", self.arena.height)?;
        positive("ship.speed", self.ship.speed)?;
        positive("ship.width", self.ship.width)?;
        positive("ship.hp", self.ship.hp as f32)?;

        ordered(
            "spawn.interval",
            self.spawn.interval_min,
            self.spawn.interval_max,
        )?;
        ordered("spawn.speed", self.spawn.speed_min, self.spawn.speed_max)?;
        ordered("spawn.spin", self.spawn.spin_min, self.spawn.spin_max)?;
        if self.spawn.interval_min < 0.0 {
            return Err(TuningError::NonPositive {
                name: "spawn.interval_min",
                value: self.spawn.interval_min,
            });
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NonPositive { name, value })
    }
}

fn ordered(name: &'static str, min: f32, max: f32) -> Result<(), TuningError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(TuningError::InvertedRange { name, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_default_projectile_speeds() {
        let weapons = WeaponTuning::default();
        assert_eq!(weapons.laser.projectile_speed(), 480.0);
        assert_eq!(weapons.bullet.projectile_speed(), 220.0);
        assert_eq!(weapons.triple.projectile_speed(), 150.0);
    }

    #[test]
    fn test_zero_fire_rate_rejected() {
        let mut tuning = Tuning::default();
        tuning.weapons.bullet.fire_rate = 0.0;
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NonPositiveFireRate {
                weapon: WeaponType::Bullet,
                value: 0.0
            })
        );
    }

    #[test]
    fn test_negative_and_nan_fire_rate_rejected() {
        let mut tuning = Tuning::default();
        tuning.weapons.triple.fire_rate = -3.0;
        assert!(tuning.validate().is_err());

        tuning.weapons.triple.fire_rate = f32::NAN;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositiveFireRate {
                weapon: WeaponType::Triple,
                ..
            })
        ));
    }

    #[test]
    fn test_inverted_spawn_interval_rejected() {
        let mut tuning = Tuning::default();
        tuning.spawn.interval_min = 4.0;
        tuning.spawn.interval_max = 1.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InvertedRange {
                name: "spawn.interval",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_spread_rejected() {
        let mut tuning = Tuning::default();
        tuning.weapons.triple_spread_deg = f32::INFINITY;
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NonFiniteSpread(f32::INFINITY))
        );

        tuning.weapons.triple_spread_deg = f32::NAN;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonFiniteSpread(v)) if v.is_nan()
        ));
    }

    #[test]
    fn test_partial_json_overrides() {
        let tuning =
            Tuning::from_json(r#"{ "weapons": { "laser": { "fire_rate": 20.0, "spacing": 10.0 } } }"#)
                .unwrap();
        assert_eq!(tuning.weapons.laser.fire_rate, 20.0);
        assert_eq!(tuning.weapons.bullet.fire_rate, BULLET_FIRE_RATE);
        assert_eq!(tuning.arena.width, SCREEN_WIDTH);
        assert_eq!(tuning.spawn.max_asteroids, MAX_ASTEROIDS);
    }

    #[test]
    fn test_json_with_bad_fire_rate_rejected() {
        let result =
            Tuning::from_json(r#"{ "weapons": { "triple": { "fire_rate": 0.0, "spacing": 30.0 } } }"#);
        assert!(matches!(
            result,
            Err(TuningError::NonPositiveFireRate { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }
}
