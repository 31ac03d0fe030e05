//! Table Pong entry point
//!
//! Wires the simulation core to its collaborators: pointer/keyboard input,
//! the Canvas2D renderer, and the browser frame scheduler. On native targets
//! there is no window; a short headless demo exercises the simulation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use table_pong::config::Config;
    use table_pong::render::Renderer;
    use table_pong::sim::{GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Renderer,
        input: TickInput,
        // Track phase for transition logging
        last_phase: GamePhase,
    }

    impl Game {
        fn new(config: Config, seed: u64, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: GameState::new(config, seed),
                renderer: Renderer::new(ctx),
                input: TickInput::default(),
                last_phase: GamePhase::Playing,
            }
        }

        /// One frame: tick the simulation, clear one-shot inputs, render
        fn frame(&mut self) {
            tick(&mut self.state, &self.input);
            self.input.pause = false;
            self.input.restart = false;

            if self.state.phase != self.last_phase {
                match self.state.phase {
                    GamePhase::Paused => log::info!("Paused"),
                    GamePhase::Playing => log::info!("Playing"),
                    GamePhase::GameOver { winner } => {
                        log::info!(
                            "Game over: {} wins {}-{}",
                            winner.as_str(),
                            self.state.score.get(winner),
                            self.state.score.get(winner.opponent())
                        );
                    }
                }
                self.last_phase = self.state.phase;
            }

            self.renderer.render(&self.state);
        }
    }

    /// Create and attach the game canvas
    fn create_canvas(config: &Config) -> HtmlCanvasElement {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let body = document.body().expect("no body");

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .expect("create canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_id("canvas");
        canvas.set_width(config.canvas.width as u32);
        canvas.set_height(config.canvas.height as u32);
        body.append_child(&canvas).expect("attach canvas");
        canvas
    }

    /// Optional config overrides from a `#config` JSON script tag
    fn load_config() -> Config {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("no document");
        if let Some(el) = document.get_element_by_id("config") {
            if let Some(json) = el.text_content() {
                match serde_json::from_str(&json) {
                    Ok(config) => return config,
                    Err(e) => log::warn!("Ignoring invalid config overrides: {e}"),
                }
            }
        }
        Config::default()
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Table Pong starting...");

        let config = load_config();
        let canvas = create_canvas(&config);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(config, seed, ctx)));
        log::info!("Game initialized with seed: {seed}");

        setup_input_handlers(&canvas, game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Table Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer: paddle target follows the cursor while playing
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase != GamePhase::Playing {
                    return;
                }
                g.input.target_x = Some(event.offset_x() as f32);
                let _ = canvas_clone.style().set_property("cursor", "none");
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard: Escape toggles pause, R restarts
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "Escape" => {
                        if !matches!(g.state.phase, GamePhase::GameOver { .. }) {
                            g.input.pause = true;
                        }
                    }
                    "r" | "R" => {
                        g.input.restart = true;
                        g.input.target_x = None;
                        let _ = canvas_clone.style().set_property("cursor", "default");
                        log::info!("Restart requested");
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Pause when the tab is hidden
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Playing {
                    g.input.pause = true;
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use table_pong::config::Config;
    use table_pong::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Table Pong (native) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<Config>(&json) {
                Ok(config) => {
                    log::info!("Loaded config overrides from {path}");
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {path}: {e}; using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {path}: {e}; using defaults");
                Config::default()
            }
        },
        None => Config::default(),
    };

    // Headless demo: the pointer shadows the ball, so both sides rally and
    // the speed ramps play out. Run with `trunk serve` for the web version.
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(config, seed);
    log::info!("Demo session seed: {seed}");

    for _ in 0..3600 {
        let input = TickInput {
            target_x: Some(state.ball.pos.x),
            ..Default::default()
        };
        tick(&mut state, &input);
        if let GamePhase::GameOver { winner } = state.phase {
            log::info!("Demo over: {} wins", winner.as_str());
            break;
        }
    }

    println!(
        "Demo finished after {} ticks: player {} - computer {} ({:?})",
        state.time_ticks, state.score.player, state.score.computer, state.phase
    );
}
