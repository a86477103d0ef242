//! Shape Storm entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use shape_storm::consts::FRAME_DT;
    use shape_storm::platform::{Key, KeyboardState, tick_input};
    use shape_storm::renderer::canvas2d::ShipTextures;
    use shape_storm::renderer::{WebCanvas, draw_frame};
    use shape_storm::sim::{GameState, tick};
    use shape_storm::{AssetError, Tuning};

    /// Longest frame fed to the simulation; a hidden tab must not unload a
    /// minute of backlog at once
    const MAX_FRAME_DT: f32 = 0.25;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        canvas: WebCanvas,
        keys: KeyboardState,
        last_time: f64,
    }

    impl Game {
        fn frame(&mut self, dt: f32, time: f64) {
            let input = tick_input(&self.keys);
            tick(&mut self.state, &input, dt.min(MAX_FRAME_DT));
            self.keys.end_frame();

            let snapshot = self.state.snapshot();
            draw_frame(&mut self.canvas, &snapshot, time / 1000.0);
        }
    }

    /// Optional balance overrides embedded in the page
    fn load_tuning(document: &web_sys::Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Using page tuning");
                tuning
            }
            Err(e) => {
                log::error!("Invalid tuning, using defaults: {}", e);
                Tuning::default()
            }
        }
    }

    pub async fn run() -> Result<(), AssetError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }

        log::info!("Shape Storm starting...");

        let window = web_sys::window().ok_or_else(|| AssetError::Surface("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| AssetError::Surface("no document".into()))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| AssetError::Surface("no #canvas element".into()))?
            .dyn_into()
            .map_err(|_| AssetError::Surface("#canvas is not a canvas".into()))?;

        let tuning = load_tuning(&document);
        canvas.set_width(tuning.arena.width as u32);
        canvas.set_height(tuning.arena.height as u32);

        let textures = ShipTextures::load().await?;
        let web_canvas = WebCanvas::new(&canvas, textures)?;

        let seed = js_sys::Date::now() as u64;
        let state = GameState::with_tuning(seed, tuning).unwrap_or_else(|e| {
            log::error!("Tuning rejected: {}", e);
            GameState::new(seed)
        });
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            canvas: web_canvas,
            keys: KeyboardState::new(),
            last_time: 0.0,
        }));

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Shape Storm running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    if matches!(key, Key::Space | Key::Tab) {
                        event.prevent_default();
                    }
                    game.borrow_mut().keys.press(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    game.borrow_mut().keys.release(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Focus loss drops held keys so fire and movement don't stick
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.release_all();
                log::info!("Window blurred, keys released");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                FRAME_DT
            };
            g.last_time = time;

            g.frame(dt, time);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await.map_err(|e| {
        log::error!("Fatal: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Shape Storm (native) starting...");
    log::info!("Native mode runs a headless autopilot session - run with `trunk serve` to play");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let score = headless::run(seed);
    log::info!("Session over with score {}", score);
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use shape_storm::consts::FRAME_DT;
    use shape_storm::sim::{GameState, MoveInput, ShapeSelection, TickInput, tick};

    /// Simulated session length cap (seconds)
    const SESSION_SECONDS: f32 = 120.0;

    /// Scripted input: fire constantly, strafe every two seconds, switch
    /// weapon every five and shape every seven
    fn autopilot(frame: u64) -> TickInput {
        let seconds = (frame as f32 * FRAME_DT) as u64;
        let frame_in_second = frame % shape_storm::consts::TARGET_FPS as u64;
        let new_second = frame_in_second == 0 && frame > 0;

        let shapes = [
            ShapeSelection::Triangle,
            ShapeSelection::Square,
            ShapeSelection::Pentagon,
            ShapeSelection::Random,
        ];

        TickInput {
            movement: MoveInput {
                left: (seconds / 2) % 2 == 0,
                right: (seconds / 2) % 2 == 1,
                ..Default::default()
            },
            fire: true,
            cycle_weapon: new_second && seconds % 5 == 0,
            select_shape: (new_second && seconds % 7 == 0)
                .then(|| shapes[(seconds / 7) as usize % shapes.len()]),
            ..Default::default()
        }
    }

    /// Run until the ship dies or the session cap is reached
    pub fn run(seed: u64) -> u64 {
        let mut state = GameState::new(seed);
        log::info!("Headless session with seed: {}", seed);

        let max_frames = (SESSION_SECONDS / FRAME_DT) as u64;
        for frame in 0..max_frames {
            tick(&mut state, &autopilot(frame), FRAME_DT);
            if !state.ship.is_alive() {
                break;
            }
        }

        match serde_json::to_string(&state.snapshot()) {
            Ok(json) => log::debug!("Final frame: {}", json),
            Err(e) => log::warn!("Could not serialize final frame: {}", e),
        }
        state.score
    }
}
