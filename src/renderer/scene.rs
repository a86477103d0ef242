//! Draws one frame snapshot plus HUD through a [`Canvas`]

use glam::Vec2;

use super::shapes::{laser_rect, regular_polygon};
use super::{Canvas, Color};
use crate::sim::{FrameSnapshot, WeaponType};

/// Period of the dead-ship blink, in seconds
pub const FLICKER_PERIOD: f64 = 0.4;

const HUD_FONT_SIZE: f32 = 20.0;

/// A dead ship blinks: visible for the first half of each flicker period
pub fn ship_visible(alive: bool, time: f64) -> bool {
    alive || time.rem_euclid(FLICKER_PERIOD) <= FLICKER_PERIOD * 0.5
}

/// Draw the frame. `time` is the frontend's monotonic clock in seconds.
pub fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, frame: &FrameSnapshot, time: f64) {
    canvas.clear(Color::BLACK);

    let hud = &frame.hud;
    canvas.text(&format!("HP: {}", hud.hp), Vec2::new(10.0, 10.0), HUD_FONT_SIZE, Color::GREEN);
    canvas.text(
        &format!("Score: {}", hud.score),
        Vec2::new(10.0, 70.0),
        HUD_FONT_SIZE,
        Color::YELLOW,
    );
    canvas.text(
        &format!("Weapon: {}", hud.weapon),
        Vec2::new(10.0, 40.0),
        HUD_FONT_SIZE,
        Color::BLUE,
    );

    for p in &frame.projectiles {
        match p.weapon {
            WeaponType::Bullet => canvas.fill_circle(p.position, 5.0, Color::WHITE),
            WeaponType::Triple => canvas.fill_circle(p.position, 4.0, Color::WHITE),
            WeaponType::Laser => canvas.fill_rect(laser_rect(p.position), Color::RED),
        }
    }

    for a in &frame.asteroids {
        let outline = regular_polygon(a.position, a.sides, a.radius, a.rotation);
        canvas.polygon_outline(&outline, Color::WHITE);
    }

    let ship = &frame.ship;
    if ship_visible(ship.alive, time) {
        canvas.sprite(ship.skin, ship.position, ship.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::shapes::Rect;
    use crate::sim::{
        AsteroidView, GameState, Hud, ProjectileView, ShipSkin, ShipView,
    };

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Polygon(usize),
        Circle(f32),
        Rect(Rect, Color),
        Sprite(ShipSkin),
        Text(String),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self, _color: Color) {
            self.calls.push(Call::Clear);
        }
        fn polygon_outline(&mut self, points: &[Vec2], _color: Color) {
            self.calls.push(Call::Polygon(points.len()));
        }
        fn fill_circle(&mut self, _center: Vec2, radius: f32, _color: Color) {
            self.calls.push(Call::Circle(radius));
        }
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.calls.push(Call::Rect(rect, color));
        }
        fn sprite(&mut self, skin: ShipSkin, _center: Vec2, _width: f32) {
            self.calls.push(Call::Sprite(skin));
        }
        fn text(&mut self, text: &str, _pos: Vec2, _size: f32, _color: Color) {
            self.calls.push(Call::Text(text.to_string()));
        }
    }

    fn frame(alive: bool) -> FrameSnapshot {
        FrameSnapshot {
            asteroids: vec![AsteroidView {
                position: Vec2::new(100.0, 100.0),
                radius: 64.0,
                sides: 5,
                rotation: 12.0,
            }],
            projectiles: vec![
                ProjectileView { position: Vec2::new(10.0, 100.0), weapon: WeaponType::Laser },
                ProjectileView { position: Vec2::new(20.0, 20.0), weapon: WeaponType::Bullet },
                ProjectileView { position: Vec2::new(30.0, 30.0), weapon: WeaponType::Triple },
            ],
            ship: ShipView {
                position: Vec2::new(640.0, 360.0),
                radius: 40.0,
                width: 80.0,
                alive,
                skin: ShipSkin::Classic,
            },
            hud: Hud { hp: 55, score: 12, weapon: "BULLET" },
        }
    }

    #[test]
    fn test_flicker() {
        assert!(ship_visible(true, 0.3));
        assert!(ship_visible(false, 0.1));
        assert!(!ship_visible(false, 0.3));
        assert!(ship_visible(false, 0.41));
    }

    #[test]
    fn test_draw_order_and_content() {
        let mut rec = Recorder::default();
        draw_frame(&mut rec, &frame(true), 0.0);
        assert_eq!(
            rec.calls,
            vec![
                Call::Clear,
                Call::Text("HP: 55".into()),
                Call::Text("Score: 12".into()),
                Call::Text("Weapon: BULLET".into()),
                Call::Rect(Rect { x: 8.0, y: 70.0, w: 4.0, h: 30.0 }, Color::RED),
                Call::Circle(5.0),
                Call::Circle(4.0),
                Call::Polygon(5),
                Call::Sprite(ShipSkin::Classic),
            ]
        );
    }

    #[test]
    fn test_dead_ship_hidden_in_off_phase() {
        let mut rec = Recorder::default();
        draw_frame(&mut rec, &frame(false), 0.3);
        assert!(!rec.calls.iter().any(|c| matches!(c, Call::Sprite(_))));
    }

    #[test]
    fn test_draws_live_state() {
        let state = GameState::new(8);
        let mut rec = Recorder::default();
        draw_frame(&mut rec, &state.snapshot(), 0.0);
        assert!(rec.calls.contains(&Call::Text("Weapon: LASER".into())));
        assert!(rec.calls.contains(&Call::Text("HP: 100".into())));
    }
}
