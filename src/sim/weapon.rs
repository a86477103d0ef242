//! Fire cadence and projectile emission
//!
//! Holding fire accumulates time; every full `1 / fire_rate` seconds in the
//! accumulator produces one firing event, so the cadence is independent of
//! frame length and a long frame catches up within itself.

use super::projectile::{Projectile, WeaponType};
use super::ship::Ship;
use crate::{UP, rotate_deg};

/// Fraction of an interval forgiven when comparing the timer against it.
/// Frame deltas arrive as f32, so a timer that should land exactly on a
/// shot boundary can fall a few ulps short of it.
const CADENCE_TOLERANCE: f64 = 1e-4;

/// Shot timer for the held-fire input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeaponSystem {
    /// Seconds accumulated toward the next shot
    shot_timer: f64,
}

impl WeaponSystem {
    pub fn shot_timer(&self) -> f64 {
        self.shot_timer
    }

    /// Advance the cadence for one frame and emit projectiles.
    /// Returns the number of firing events (a triple shot counts once).
    pub fn update(
        &mut self,
        firing: bool,
        ship: &Ship,
        weapon: WeaponType,
        dt: f32,
        projectiles: &mut Vec<Projectile>,
    ) -> u32 {
        let rate = f64::from(ship.fire_rate(weapon));
        let interval = 1.0 / rate;

        if !(firing && ship.is_alive()) {
            // Keep a bounded phase so a fresh press never fires a backlog
            if self.shot_timer >= interval {
                self.shot_timer %= interval;
            }
            return 0;
        }

        self.shot_timer += f64::from(dt);
        let mut events = 0;
        while self.shot_timer * rate >= 1.0 - CADENCE_TOLERANCE {
            emit(ship, weapon, projectiles);
            self.shot_timer -= interval;
            events += 1;
        }
        events
    }
}

/// Emit the projectiles of one firing event from the ship's muzzle
pub fn emit(ship: &Ship, weapon: WeaponType, projectiles: &mut Vec<Projectile>) {
    let origin = ship.muzzle();
    let speed = ship.profile(weapon).projectile_speed();

    match weapon {
        WeaponType::Triple => {
            let spread = ship.triple_spread_deg();
            for angle in [-spread, 0.0, spread] {
                let velocity = rotate_deg(UP, angle) * speed;
                projectiles.push(Projectile::new(weapon, origin, velocity));
            }
        }
        WeaponType::Laser | WeaponType::Bullet => {
            projectiles.push(Projectile::new(weapon, origin, UP * speed));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading_deg;
    use crate::tuning::{ShipTuning, WeaponTuning};
    use glam::Vec2;
    use proptest::prelude::*;

    fn ship() -> Ship {
        Ship::new(Vec2::new(640.0, 600.0), &ShipTuning::default(), &WeaponTuning::default())
    }

    #[test]
    fn test_no_fire_before_first_interval() {
        let s = ship();
        let mut ws = WeaponSystem::default();
        let mut out = Vec::new();
        assert_eq!(ws.update(true, &s, WeaponType::Laser, 0.05, &mut out), 0);
        assert!(out.is_empty());
        assert_eq!(ws.update(true, &s, WeaponType::Laser, 0.05, &mut out), 1);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_laser_travels_straight_up() {
        let s = ship();
        let mut ws = WeaponSystem::default();
        let mut out = Vec::new();
        ws.update(true, &s, WeaponType::Laser, 0.1, &mut out);
        let p = &out[0];
        assert_eq!(p.position(), Vec2::new(640.0, 560.0));
        assert_eq!(p.physics.velocity, Vec2::new(0.0, -480.0));
        assert_eq!(p.damage, 20);
    }

    #[test]
    fn test_triple_emits_spread() {
        let s = ship();
        let mut out = Vec::new();
        emit(&s, WeaponType::Triple, &mut out);
        assert_eq!(out.len(), 3);
        let expected_speed = s.spacing(WeaponType::Triple) * s.fire_rate(WeaponType::Triple);
        for (p, angle) in out.iter().zip([-15.0f32, 0.0, 15.0]) {
            assert!((p.physics.velocity.length() - expected_speed).abs() < 1e-3);
            assert!((heading_deg(p.physics.velocity) - angle).abs() < 1e-3);
            assert_eq!(p.damage, 15);
            assert_eq!(p.position(), s.muzzle());
        }
    }

    #[test]
    fn test_large_frame_catches_up() {
        let s = ship();
        let mut ws = WeaponSystem::default();
        let mut out = Vec::new();
        // 1.05 s at 11 shots/s
        assert_eq!(ws.update(true, &s, WeaponType::Bullet, 1.05, &mut out), 11);
        assert_eq!(out.len(), 11);
        assert!(ws.shot_timer() < 1.0 / 11.0);
    }

    #[test]
    fn test_whole_seconds_fire_every_shot() {
        let s = ship();
        for weapon in WeaponType::ALL {
            let rate = s.fire_rate(weapon) as u32;
            for seconds in [1u32, 2, 3, 5, 10] {
                let mut single = WeaponSystem::default();
                let single_events =
                    single.update(true, &s, weapon, seconds as f32, &mut Vec::new());

                let mut sliced = WeaponSystem::default();
                let sliced_events: u32 = (0..seconds * 60)
                    .map(|_| sliced.update(true, &s, weapon, 1.0 / 60.0, &mut Vec::new()))
                    .sum();

                assert_eq!(single_events, seconds * rate, "{weapon} single {seconds}s");
                assert_eq!(sliced_events, seconds * rate, "{weapon} 60 Hz {seconds}s");
            }
        }
    }

    #[test]
    fn test_release_bounds_phase() {
        let s = ship();
        let mut ws = WeaponSystem { shot_timer: 0.25 };
        let mut out = Vec::new();
        assert_eq!(ws.update(false, &s, WeaponType::Triple, 0.016, &mut out), 0);
        assert!((ws.shot_timer() - 0.05).abs() < 1e-6);
        assert!(out.is_empty());
    }

    #[test]
    fn test_dead_ship_does_not_fire() {
        let mut s = ship();
        s.take_damage(1_000);
        let mut ws = WeaponSystem::default();
        let mut out = Vec::new();
        assert_eq!(ws.update(true, &s, WeaponType::Laser, 2.0, &mut out), 0);
        assert!(out.is_empty());
    }

    proptest! {
        #[test]
        fn prop_cadence_independent_of_frame_slicing(
            weapon in prop::sample::select(WeaponType::ALL.to_vec()),
            frames in 1u32..600,
            fps in prop::sample::select(vec![30u32, 50, 60, 120, 144]),
        ) {
            let s = ship();
            let rate = s.fire_rate(weapon) as u32;
            // Held for frames / fps seconds; whole-number products included
            let expected = frames * rate / fps;

            let frame = 1.0 / fps as f32;
            let mut sliced = WeaponSystem::default();
            let mut out = Vec::new();
            let mut events = 0;
            for _ in 0..frames {
                events += sliced.update(true, &s, weapon, frame, &mut out);
            }

            let mut single = WeaponSystem::default();
            let mut out_single = Vec::new();
            let total = frames as f32 / fps as f32;
            let single_events = single.update(true, &s, weapon, total, &mut out_single);

            prop_assert_eq!(events, expected);
            prop_assert_eq!(single_events, expected);
            let per_event = if weapon == WeaponType::Triple { 3 } else { 1 };
            prop_assert_eq!(out.len(), expected as usize * per_event);
        }
    }
}
