//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

/// Length of the drawn laser streak
pub const LASER_LENGTH: f32 = 30.0;
/// Width of the drawn laser streak
pub const LASER_WIDTH: f32 = 4.0;

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Vertices of a regular polygon, first vertex at `rotation_deg`
pub fn regular_polygon(center: Vec2, sides: u32, radius: f32, rotation_deg: f32) -> Vec<Vec2> {
    let sides = sides.max(3);
    let start = rotation_deg.to_radians();
    let step = TAU / sides as f32;

    (0..sides)
        .map(|i| center + Vec2::from_angle(start + step * i as f32) * radius)
        .collect()
}

/// Laser streak trailing upward from the projectile position
pub fn laser_rect(pos: Vec2) -> Rect {
    Rect {
        x: pos.x - LASER_WIDTH * 0.5,
        y: pos.y - LASER_LENGTH,
        w: LASER_WIDTH,
        h: LASER_LENGTH,
    }
}

/// Destination rectangle for a sprite scaled to `width`, centered on `center`
pub fn sprite_rect(center: Vec2, width: f32, texture_size: Vec2) -> Rect {
    let scale = if texture_size.x > 0.0 { width / texture_size.x } else { 1.0 };
    let size = texture_size * scale;
    Rect {
        x: center.x - size.x * 0.5,
        y: center.y - size.y * 0.5,
        w: size.x,
        h: size.y,
    }
}
