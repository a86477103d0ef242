//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta supplied by the caller
//! - Seeded RNG only
//! - Stable iteration order (live-collection order)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod projectile;
pub mod ship;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod weapon;

pub use asteroid::{Asteroid, AsteroidShape, ShapeSelection, SizeTier};
pub use collision::{ProjectileHits, ShipCollisions, circles_overlap};
pub use projectile::{Projectile, WeaponType};
pub use ship::{MoveInput, Ship, ShipSkin};
pub use snapshot::{AsteroidView, FrameSnapshot, Hud, ProjectileView, ShipView};
pub use spawner::{Spawner, spawn_asteroid};
pub use state::{Bounds, GameEvent, GameState, Physics, Transform};
pub use tick::{TickInput, tick};
pub use weapon::WeaponSystem;
