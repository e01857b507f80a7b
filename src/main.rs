//! Dino Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use dino_run::platform::{Driver, KeyState, LoopState};
    use dino_run::renderer::{Color, Renderer, colors};
    use dino_run::sim::{Entity, Session};
    use dino_run::GameConfig;

    /// Draws through the canvas 2D context
    struct CanvasRenderer {
        ctx: CanvasRenderingContext2d,
    }

    impl Renderer for CanvasRenderer {
        fn clear(&mut self, width: f64, height: f64) {
            self.ctx.clear_rect(0.0, 0.0, width, height);
            self.ctx.set_fill_style_str(&colors::to_css(colors::BACKGROUND));
            self.ctx.fill_rect(0.0, 0.0, width, height);
        }

        fn fill_rect(&mut self, rect: &Entity, color: Color) {
            self.ctx.set_fill_style_str(&colors::to_css(color));
            self.ctx
                .fill_rect(rect.left(), rect.top(), rect.width(), rect.height());
        }

        fn draw_text(&mut self, message: &str, instruction: &str, center: glam::DVec2) {
            let text_color = colors::to_css(colors::TEXT);
            self.ctx.set_fill_style_str(&text_color);
            self.ctx.set_text_align("center");

            self.ctx.set_font("bold 50px arial");
            let _ = self.ctx.fill_text(message, center.x, center.y);

            self.ctx.set_font("20px arial");
            let _ = self.ctx.fill_text(instruction, center.x, center.y + 30.0);
        }
    }

    type Game = Driver<KeyState, CanvasRenderer>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Dino Run starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("missing #canvas element")?
            .dyn_into()?;

        let config = GameConfig::load();
        canvas.set_width(config.field.width as u32);
        canvas.set_height(config.field.height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        let session = Session::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let game = Rc::new(RefCell::new(Driver::new(
            session,
            KeyState::new(),
            CanvasRenderer { ctx },
        )));

        setup_input_handlers(game.clone())?;
        request_animation_frame(game);

        log::info!("Dino Run running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key down: record held keys, restart a halted loop on space
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let resumed = {
                    let mut g = game.borrow_mut();
                    if g.input.key_down(&event.key()) {
                        event.prevent_default();
                    }
                    g.state() == LoopState::Halted && g.poll_restart() == LoopState::Running
                };
                if resumed {
                    request_animation_frame(game.clone());
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let state = game.borrow_mut().step();

        // Halted loops are re-registered by the restart key handler
        if state == LoopState::Running {
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
fn main() {
    use dino_run::GameConfig;
    use dino_run::platform::{Autopilot, Driver, FrameBudget};
    use dino_run::renderer::QuadBatch;
    use dino_run::sim::Session;

    /// One minute at 60 Hz
    const DEFAULT_FRAMES: u64 = 3600;

    env_logger::init();
    log::info!("Dino Run (native, headless) starting...");

    // Usage: dino-run [config.json] [frames]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match GameConfig::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    let mut driver = Driver::new(session, Autopilot::default(), QuadBatch::new());
    let stats = driver.run(&mut FrameBudget::new(frames)).clone();

    println!("frames ticked:     {}", stats.frames_ticked);
    println!("obstacles spawned: {}", stats.obstacles_spawned);
    println!("games over:        {}", stats.games_over);
    println!("best run (frames): {}", stats.best_run);
    println!(
        "last frame:        {} rects, {} vertex bytes",
        driver.renderer.rect_count(),
        driver.renderer.clip_space_vertices().len() * dino_run::renderer::Vertex::STRIDE
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
