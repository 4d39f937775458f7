//! Canvas Pong entry point
//!
//! In the browser: draws on the `#pong` canvas and follows the mouse.
//! Natively: runs a headless autopilot match and prints the final state.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use canvas_pong::renderer::CanvasRenderer;
    use canvas_pong::sim::{Field, TickInput};
    use canvas_pong::{Session, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session,
        renderer: CanvasRenderer,
        input: TickInput,
        last_scores: (u32, u32),
    }

    impl Game {
        /// Run one frame: simulate, then draw
        fn frame(&mut self) {
            let commands = self.session.frame(&self.input);
            if let Err(e) = self.renderer.draw(&commands) {
                log::warn!("Render error: {:?}", e);
            }

            let scores = self.session.state.scores();
            if scores != self.last_scores {
                log::info!("Score {} - {}", scores.0, scores.1);
                self.last_scores = scores;
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Canvas Pong starting...");

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .ok_or_else(|| JsValue::from_str("no #pong canvas"))?
            .dyn_into()?;

        let settings = Settings::load();
        settings.save();

        // The canvas decides the field
        let field = Field::new(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(&settings, field, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let renderer = CanvasRenderer::new(&canvas)?;
        let game = Rc::new(RefCell::new(Game {
            session,
            renderer,
            input: TickInput::default(),
            last_scores: (0, 0),
        }));

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);
        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let pointer_y = (event.client_y() as f64 - rect.top()) as f32;
            game.borrow_mut().session.pointer_moved(pointer_y);
        });
        let _ = canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, frame loop stopped");
            return;
        };
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
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().inspect_err(|e| log::error!("Start-up failed: {:?}", e))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// One minute at 60 frames per second
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAMES: u64 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), canvas_pong::SettingsError> {
    use std::time::{SystemTime, UNIX_EPOCH};

    use canvas_pong::sim::{GameEvent, TickInput};
    use canvas_pong::{Session, Settings};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to play in a browser");

    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::load_from(std::path::Path::new(&path))?,
        None => Settings::default(),
    };

    let fallback_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut session = Session::new(&settings, settings.field(), fallback_seed)?;

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let mut rallies = 0u32;
    for _ in 0..HEADLESS_FRAMES {
        session.step(&input);
        rallies += session
            .state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::PaddleHit { .. }))
            .count() as u32;
    }

    let (player, ai) = session.state.scores();
    log::info!(
        "Finished {} frames (seed {}): player {} - ai {}, {} paddle hits",
        session.state.time_ticks,
        session.seed(),
        player,
        ai,
        rallies
    );

    println!("{}", serde_json::to_string_pretty(&session.state)?);
    Ok(())
}
