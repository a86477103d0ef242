//! Per-frame simulation step
//!
//! Advances every subsystem once, in a fixed order. Each step sees the state
//! committed by the previous one and no step runs twice in a frame.

use super::asteroid::ShapeSelection;
use super::collision::{resolve_projectile_hits, resolve_ship_collisions};
use super::ship::MoveInput;
use super::state::{GameEvent, GameState};

/// Input commands for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Directional keys held
    pub movement: MoveInput,
    /// Fire held
    pub fire: bool,
    /// Cycle to the next weapon (pressed this frame)
    pub cycle_weapon: bool,
    /// Shape chosen this frame, if any
    pub select_shape: Option<ShapeSelection>,
    /// Restart requested (honored only while the ship is dead)
    pub restart: bool,
    /// Swap the ship texture
    pub toggle_skin: bool,
}

/// Frame deltas come from the platform clock; anything that is not a finite,
/// non-negative duration is treated as an empty frame.
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = sanitize_dt(dt);
    state.events.clear();
    state.frames += 1;
    state.spawner.advance(dt);

    // 1. Ship motion
    state.ship.update(&input.movement, dt);
    if input.toggle_skin {
        state.ship.skin = state.ship.skin.toggled();
    }

    // 2. Restart (zeroes the spawn clock advanced above)
    if input.restart && !state.ship.is_alive() {
        state.restart();
    }

    // 3. Selections
    if let Some(shape) = input.select_shape {
        state.shape_selection = shape;
    }
    if input.cycle_weapon {
        state.weapon = state.weapon.next();
        state.events.push(GameEvent::WeaponChanged(state.weapon));
        log::info!("Weapon: {}", state.weapon);
    }

    // 4. Weapons
    state
        .weapon_system
        .update(input.fire, &state.ship, state.weapon, dt, &mut state.projectiles);

    // 5. Spawning
    if let Some(index) = state.spawner.try_spawn(
        &mut state.asteroids,
        state.shape_selection,
        &mut state.rng,
        &state.tuning.spawn,
        &state.bounds,
    ) {
        let spawned = &state.asteroids[index];
        state.events.push(GameEvent::AsteroidSpawned {
            shape: spawned.shape,
            size: spawned.size(),
        });
    }

    // 6. Projectile motion
    let bounds = state.bounds;
    state.projectiles.retain_mut(|p| !p.update(dt, &bounds));

    // 7. Projectile-asteroid hits
    let hits = resolve_projectile_hits(&mut state.projectiles, &mut state.asteroids);
    for kill in &hits.kills {
        state.score += kill.score;
        state.events.push(GameEvent::AsteroidDestroyed {
            original_size: kill.original_size,
            score: kill.score,
        });
        log::debug!(
            "Asteroid destroyed (tier {}): +{} -> {}",
            kill.original_size.value(),
            kill.score,
            state.score
        );
    }

    // 8. Ship-asteroid contact, asteroid motion
    let was_alive = state.ship.is_alive();
    let contact = resolve_ship_collisions(&mut state.ship, &mut state.asteroids, dt, &bounds);
    for &damage in &contact.damage {
        state.events.push(GameEvent::ShipHit { damage });
        log::debug!("Ship hit for {} (hp {})", damage, state.ship.hp());
    }
    if was_alive && !state.ship.is_alive() {
        state.events.push(GameEvent::ShipDestroyed);
        log::info!("Ship destroyed - final score {}", state.score);
    }

    log::trace!(
        "frame {}: {} asteroids, {} projectiles",
        state.frames,
        state.asteroids.len(),
        state.projectiles.len()
    );
}
