//! Rocket Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use rocket_dodge::Settings;
    use rocket_dodge::consts::*;
    use rocket_dodge::platform::canvas::CanvasSurface;
    use rocket_dodge::platform::{Key, KeyState};
    use rocket_dodge::renderer::render;
    use rocket_dodge::sim::{GameState, LoopControl, Viewport, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        keys: KeyState,
        accumulator: f32,
        last_time: f64,
        /// Viewport reported by the last resize, applied on the next tick
        pending_viewport: Option<Viewport>,
        running: bool,
    }

    impl Game {
        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.keys.sample(self.pending_viewport.take());
                self.accumulator -= SIM_DT;
                substeps += 1;

                if tick(&mut self.state, &input) == LoopControl::Quit {
                    log::info!("Quit requested, stopping game loop");
                    self.running = false;
                    return;
                }
            }

            // Drop backlog the substep cap could not absorb
            if substeps == MAX_SUBSTEPS {
                self.accumulator = self.accumulator.min(SIM_DT);
            }
        }

        fn render(&mut self) {
            render(&self.state, &mut self.surface);
        }
    }

    fn window_viewport(window: &web_sys::Window) -> Viewport {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1280.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(720.0);
        Viewport::new(width as f32, height as f32)
    }

    fn size_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
        canvas.set_width(viewport.width as u32);
        canvas.set_height(viewport.height as u32);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rocket Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let body = document.body().expect("no body");

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .expect("failed to create canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_id("canvas");
        let style = canvas.style();
        let _ = style.set_property("display", "block");
        let _ = body.style().set_property("margin", "0");
        let _ = body.style().set_property("overflow", "hidden");
        body.append_child(&canvas).expect("failed to attach canvas");

        let viewport = window_viewport(&window);
        size_canvas(&canvas, viewport);

        let surface = CanvasSurface::new(&canvas).expect("canvas 2d context unavailable");
        let settings = Settings::default();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, settings, viewport),
            surface,
            keys: KeyState::new(),
            accumulator: 0.0,
            last_time: 0.0,
            pending_viewport: None,
            running: true,
        }));
        log::info!(
            "Game initialized with seed: {} ({}x{})",
            seed,
            viewport.width,
            viewport.height
        );

        setup_input_handlers(game.clone());
        setup_resize_handler(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Rocket Dodge running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().keys.press(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().keys.release(key);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let viewport = window_viewport(&window);
            size_canvas(&canvas, viewport);
            game.borrow_mut().pending_viewport = Some(viewport);
            log::info!("Resized to {}x{}", viewport.width, viewport.height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
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

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            if !g.running {
                return;
            }
            g.render();
        }

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
mod headless {
    use std::fs;
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use clap::Parser;
    use serde::Serialize;

    use rocket_dodge::Settings;
    use rocket_dodge::renderer::{VertexBatch, render};
    use rocket_dodge::sim::{GamePhase, GameState, HudSnapshot, LoopControl, TickInput, Viewport, tick};

    /// Command-line options for the headless runner
    #[derive(Parser, Debug, Default)]
    #[command(name = "rocket-dodge")]
    #[command(about = "Headless Rocket Dodge run driven by a hover autopilot")]
    pub struct Options {
        /// RNG seed (overrides the config file's seed)
        #[arg(long)]
        pub seed: Option<u64>,
        /// Maximum number of simulation ticks
        #[arg(long)]
        pub ticks: Option<u64>,
        /// Settings JSON file
        #[arg(long)]
        pub config: Option<PathBuf>,
    }

    /// Settings from a JSON file, or the defaults without one
    pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed reading config {}", path.display()))?;
        let settings = Settings::from_json(&json)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Summary printed when the run ends
    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub seed: u64,
        pub ticks: u64,
        pub phase: String,
        pub hud: HudSnapshot,
        pub last_frame_triangles: usize,
        /// Size of the last frame's packed vertex buffer
        pub last_frame_bytes: usize,
    }

    /// Keep the nose up and feather the thrust around the middle of the screen
    pub fn autopilot(state: &GameState) -> TickInput {
        let ship = &state.ship;
        let target_angle = -std::f32::consts::FRAC_PI_2;
        let error = ship.angle - target_angle;
        let low = ship.screen_y > state.viewport.height * 0.55;
        TickInput {
            rotate_left: error > 0.05,
            rotate_right: error < -0.05,
            thrust: low && ship.vel.y > -2.0,
            resume: state.phase == GamePhase::Paused,
            ..TickInput::default()
        }
    }

    pub fn run(options: Options, settings: Settings) -> RunSummary {
        let seed = options.seed.or(settings.seed).unwrap_or(0);
        let max_ticks = options.ticks.unwrap_or(3600);
        let mut state = GameState::new(seed, settings, Viewport::default());
        let mut batch = VertexBatch::new();

        let mut ticks = 0;
        while ticks < max_ticks {
            let input = autopilot(&state);
            let control = tick(&mut state, &input);
            ticks += 1;

            for event in &state.events {
                log::debug!("tick {}: {:?}", ticks, event);
            }
            if control == LoopControl::Quit || state.phase.is_terminal() {
                break;
            }
        }

        batch.clear();
        render(&state, &mut batch);

        RunSummary {
            seed,
            ticks,
            phase: format!("{:?}", state.phase),
            hud: state.hud(),
            last_frame_triangles: batch.triangle_count(),
            last_frame_bytes: batch.as_bytes().len(),
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Rocket Dodge (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    let options = <headless::Options as clap::Parser>::parse();
    let settings = headless::load_settings(options.config.as_deref())?;

    let summary = headless::run(options, settings);
    log::info!(
        "Run finished after {} ticks in phase {}",
        summary.ticks,
        summary.phase
    );
    let json = serde_json::to_string_pretty(&summary)?;
    println!("{}", json);
    Ok(())
}
