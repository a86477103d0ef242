//! Rendering boundary
//!
//! The simulation never draws. Each frame the frontend takes a
//! [`FrameSnapshot`](crate::sim::FrameSnapshot) and draws it through a
//! [`Canvas`], the set of screen-space primitives a backend must provide.

pub mod scene;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::WebCanvas;
pub use scene::{draw_frame, ship_visible};

use glam::Vec2;

use crate::sim::ShipSkin;
use shapes::Rect;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// CSS color string
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a as f32 / 255.0
        )
    }
}

/// Screen-space drawing primitives
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn polygon_outline(&mut self, points: &[Vec2], color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Ship texture scaled to `width`, centered on `center`
    fn sprite(&mut self, skin: ShipSkin, center: Vec2, width: f32);
    /// Text with its top-left corner at `pos`
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}
