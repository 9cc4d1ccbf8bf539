//! Panda Dots entry point
//!
//! The browser build wires keyboard input and a Canvas2D renderer to the
//! simulation. The native build runs a headless game driven by the demo pilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use glam::DVec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use panda_dots::GameConfig;
    use panda_dots::consts::STEER_SAMPLE_MS;
    use panda_dots::renderer::{CanvasRenderer, Frame};
    use panda_dots::sim::{GameEvent, GameState, HeldKeys, Key, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        keys: HeldKeys,
        input: TickInput,
        /// An animation frame is queued
        running: bool,
    }

    impl Game {
        fn step(&mut self) {
            tick(&mut self.state, &self.input);
            self.input.restart = false;

            for event in &self.state.events {
                match event {
                    GameEvent::Won => log::info!("You win! radius {:.1}", self.state.player.radius),
                    GameEvent::Lost => log::info!("You lose after {} ticks", self.state.time_ticks),
                    GameEvent::Restarted => log::info!("Restarted"),
                    other => log::trace!("{:?}", other),
                }
            }

            if let Err(e) = self.renderer.render(&Frame::build(&self.state)) {
                log::error!("Render failed: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
        }

        log::info!("Panda Dots starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let config = GameConfig::with_extents(canvas.width() as f64, canvas.height() as f64);
        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(&config, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let renderer = CanvasRenderer::new(&canvas)?;

        log::info!(
            "Game initialized with seed {} on a {}x{} field",
            seed,
            config.width,
            config.height
        );

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            keys: HeldKeys::default(),
            input: TickInput::default(),
            running: true,
        }));

        setup_input_handlers(&window, game.clone())?;
        setup_steer_sampler(&window, game.clone())?;

        request_animation_frame(game);

        log::info!("Panda Dots running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_name(&event.key()) else {
                    return;
                };
                let mut g = game.borrow_mut();
                match key {
                    Key::Restart => {
                        if g.state.phase.is_terminal() {
                            g.input.restart = true;
                            if !g.running {
                                g.running = true;
                                drop(g);
                                request_animation_frame(game.clone());
                            }
                        }
                    }
                    Key::Idle => {
                        g.input.idle_mode = !g.input.idle_mode;
                        log::info!("Idle mode: {}", g.input.idle_mode);
                    }
                    _ => g.keys.set(key, true),
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    game.borrow_mut().keys.set(key, false);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Sample held keys on a fixed timer, independent of the frame rate
    fn setup_steer_sampler(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = game.borrow_mut();
            let dir = g.keys.direction();
            g.input.steer = (dir != DVec2::ZERO).then_some(dir);
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            STEER_SAMPLE_MS as i32,
        )?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_going = {
            let mut g = game.borrow_mut();
            g.step();
            // The overlay stays up until Enter queues the next frame
            g.running = !g.state.phase.is_terminal();
            g.running
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;
    use std::time::{SystemTime, UNIX_EPOCH};

    use panda_dots::GameConfig;
    use panda_dots::sim::{GameState, play_demo};

    env_logger::init();
    log::info!("Panda Dots (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::from_file(&path),
        None => Ok(GameConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("Bad config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = config.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });

    let mut state = match GameState::new(&config, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot start game: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Game initialized with seed {} on a {}x{} field",
        seed,
        config.width,
        config.height
    );

    let status = play_demo(&mut state, config.headless_ticks);

    let summary = serde_json::json!({
        "seed": seed,
        "ticks": state.time_ticks,
        "status": status,
        "phase": state.phase,
        "player_radius": state.player.radius,
        "dots": state.dots.len(),
    });
    println!("{}", summary);

    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
