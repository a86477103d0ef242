//! Asteroids: shape table, size tiers, damage and shrinking

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Bounds, Physics, Transform};
use crate::consts::ASTEROID_RADIUS_UNIT;

/// Concrete asteroid shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidShape {
    Triangle,
    Square,
    Pentagon,
}

impl AsteroidShape {
    pub const ALL: [AsteroidShape; 3] = [
        AsteroidShape::Triangle,
        AsteroidShape::Square,
        AsteroidShape::Pentagon,
    ];

    /// Polygon side count used for drawing
    pub fn sides(self) -> u32 {
        match self {
            AsteroidShape::Triangle => 3,
            AsteroidShape::Square => 4,
            AsteroidShape::Pentagon => 5,
        }
    }

    /// Collision damage per size tier unit
    pub fn base_damage(self) -> i32 {
        match self {
            AsteroidShape::Triangle => 5,
            AsteroidShape::Square => 10,
            AsteroidShape::Pentagon => 15,
        }
    }
}

/// Which shape the spawner produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeSelection {
    #[default]
    Triangle,
    Square,
    Pentagon,
    /// Uniform choice among the concrete shapes, per spawn
    Random,
}

impl ShapeSelection {
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> AsteroidShape {
        match self {
            ShapeSelection::Triangle => AsteroidShape::Triangle,
            ShapeSelection::Square => AsteroidShape::Square,
            ShapeSelection::Pentagon => AsteroidShape::Pentagon,
            ShapeSelection::Random => AsteroidShape::ALL[rng.random_range(0..AsteroidShape::ALL.len())],
        }
    }
}

/// Size multiplier for radius, hit points, damage and score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeTier {
    Small = 1,
    Medium = 2,
    Large = 4,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn radius(self) -> f32 {
        ASTEROID_RADIUS_UNIT * self.value() as f32
    }

    pub fn max_hp(self) -> i32 {
        match self {
            SizeTier::Large => 200,
            SizeTier::Medium => 150,
            SizeTier::Small => 75,
        }
    }

    /// Tier an asteroid with `hp` hit points belongs to
    pub fn for_hp(hp: i32) -> SizeTier {
        if hp > 150 {
            SizeTier::Large
        } else if hp > 75 {
            SizeTier::Medium
        } else {
            SizeTier::Small
        }
    }

    /// Points awarded for destroying an asteroid spawned at this tier
    pub fn kill_score(self) -> u64 {
        match self {
            SizeTier::Large => 10,
            SizeTier::Medium => 5,
            SizeTier::Small => 2,
        }
    }
}

/// An asteroid entity
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub transform: Transform,
    pub physics: Physics,
    pub shape: AsteroidShape,
    size: SizeTier,
    original_size: SizeTier,
    hp: i32,
}

impl Asteroid {
    /// Create a full-health asteroid of the given tier
    pub fn new(shape: AsteroidShape, size: SizeTier, transform: Transform, physics: Physics) -> Self {
        Self {
            transform,
            physics,
            shape,
            size,
            original_size: size,
            hp: size.max_hp(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn radius(&self) -> f32 {
        self.size.radius()
    }

    pub fn size(&self) -> SizeTier {
        self.size
    }

    /// Tier at spawn time; scoring uses this regardless of shrinking
    pub fn original_size(&self) -> SizeTier {
        self.original_size
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Damage dealt to the ship on contact
    pub fn damage(&self) -> i32 {
        self.shape.base_damage() * self.size.value()
    }

    /// Integrate motion. Returns false once the asteroid has left the
    /// play-field inflated by its own radius.
    pub fn update(&mut self, dt: f32, bounds: &Bounds) -> bool {
        self.transform.integrate(&self.physics, dt);
        bounds.contains_inflated(self.transform.position, self.radius())
    }

    /// Apply damage. Returns true when the asteroid is destroyed; otherwise
    /// snaps the size tier down to the one matching the remaining hit points.
    pub fn take_damage(&mut self, dmg: i32) -> bool {
        self.hp -= dmg;
        if self.hp <= 0 {
            return true;
        }
        let tier = SizeTier::for_hp(self.hp);
        if tier < self.size {
            self.size = tier;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn at_rest(shape: AsteroidShape, size: SizeTier, pos: Vec2) -> Asteroid {
        Asteroid::new(
            shape,
            size,
            Transform { position: pos, rotation: 0.0 },
            Physics::default(),
        )
    }

    #[test]
    fn test_shape_table() {
        assert_eq!(AsteroidShape::Triangle.sides(), 3);
        assert_eq!(AsteroidShape::Square.base_damage(), 10);
        assert_eq!(AsteroidShape::Pentagon.base_damage(), 15);
    }

    #[test]
    fn test_radius_tracks_tier() {
        for tier in SizeTier::ALL {
            let a = at_rest(AsteroidShape::Square, tier, Vec2::ZERO);
            assert_eq!(a.radius(), 16.0 * tier.value() as f32);
            assert_eq!(a.hp(), tier.max_hp());
        }
    }

    #[test]
    fn test_large_shrinks_to_medium_then_small() {
        let mut a = at_rest(AsteroidShape::Triangle, SizeTier::Large, Vec2::ZERO);
        assert!(!a.take_damage(40)); // 160
        assert_eq!(a.size(), SizeTier::Large);
        assert!(!a.take_damage(20)); // 140
        assert_eq!(a.size(), SizeTier::Medium);
        assert_eq!(a.radius(), 32.0);
        assert!(!a.take_damage(70)); // 70
        assert_eq!(a.size(), SizeTier::Small);
        assert_eq!(a.original_size(), SizeTier::Large);
    }

    #[test]
    fn test_large_snaps_directly_to_small() {
        let mut a = at_rest(AsteroidShape::Pentagon, SizeTier::Large, Vec2::ZERO);
        assert!(!a.take_damage(130)); // 70
        assert_eq!(a.size(), SizeTier::Small);
    }

    #[test]
    fn test_zero_damage_keeps_tier() {
        for tier in SizeTier::ALL {
            let mut a = at_rest(AsteroidShape::Square, tier, Vec2::ZERO);
            assert!(!a.take_damage(0));
            assert_eq!(a.size(), tier);
        }
    }

    #[test]
    fn test_destroyed_at_zero() {
        let mut a = at_rest(AsteroidShape::Square, SizeTier::Small, Vec2::ZERO);
        assert!(!a.take_damage(74));
        assert!(a.take_damage(1));
    }

    #[test]
    fn test_damage_shrinks_with_tier() {
        let mut a = at_rest(AsteroidShape::Pentagon, SizeTier::Large, Vec2::ZERO);
        assert_eq!(a.damage(), 60);
        a.take_damage(100);
        assert_eq!(a.damage(), 30);
    }

    #[test]
    fn test_kill_scores() {
        assert_eq!(SizeTier::Large.kill_score(), 10);
        assert_eq!(SizeTier::Medium.kill_score(), 5);
        assert_eq!(SizeTier::Small.kill_score(), 2);
    }

    #[test]
    fn test_update_leaves_inflated_bounds() {
        let bounds = Bounds::new(1280.0, 720.0);
        let mut a = at_rest(AsteroidShape::Triangle, SizeTier::Small, Vec2::new(-16.0, 300.0));
        // Exactly on the inflated edge is still inside
        assert!(a.update(0.016, &bounds));
        a.transform.position.x = -17.0;
        assert!(!a.update(0.016, &bounds));
    }

    #[test]
    fn test_update_integrates_motion() {
        let bounds = Bounds::new(1280.0, 720.0);
        let mut a = Asteroid::new(
            AsteroidShape::Square,
            SizeTier::Medium,
            Transform { position: Vec2::new(100.0, 100.0), rotation: 10.0 },
            Physics { velocity: Vec2::new(200.0, -100.0), angular_velocity: 90.0 },
        );
        assert!(a.update(0.5, &bounds));
        assert_eq!(a.position(), Vec2::new(200.0, 50.0));
        assert_eq!(a.transform.rotation, 55.0);
    }

    #[test]
    fn test_random_selection_covers_all_shapes() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(ShapeSelection::Random.resolve(&mut rng));
        }
        assert_eq!(seen.len(), 3);
        assert_eq!(ShapeSelection::Square.resolve(&mut rng), AsteroidShape::Square);
    }

    proptest! {
        #[test]
        fn prop_tier_never_grows(
            start in prop::sample::select(SizeTier::ALL.to_vec()),
            hits in prop::collection::vec(0i32..120, 1..20),
        ) {
            let mut a = at_rest(AsteroidShape::Square, start, Vec2::ZERO);
            let mut prev_tier = a.size();
            let mut prev_hp = a.hp();
            for dmg in hits {
                let destroyed = a.take_damage(dmg);
                prop_assert_eq!(destroyed, a.hp() <= 0);
                if destroyed {
                    break;
                }
                prop_assert!(a.size() <= prev_tier);
                prop_assert_eq!(a.radius(), 16.0 * a.size().value() as f32);
                if dmg > 0 {
                    prop_assert!(a.hp() < prev_hp);
                }
                prev_tier = a.size();
                prev_hp = a.hp();
            }
            prop_assert_eq!(a.original_size(), start);
        }
    }
}
