//! Flappy Canvas entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

    use flappy_canvas::hud::Hud;
    use flappy_canvas::input::InputSignal;
    use flappy_canvas::renderer::CanvasSurface;
    use flappy_canvas::{Game, LoopControl, Settings};

    /// HUD backed by the page's DOM elements
    struct DomHud {
        score: Option<HtmlElement>,
        overlay: Option<HtmlElement>,
        final_score: Option<HtmlElement>,
        start_btn: Option<HtmlElement>,
    }

    impl DomHud {
        fn new(document: &Document) -> Self {
            let find = |id: &str| {
                let el = document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                if el.is_none() {
                    log::warn!("Missing HUD element #{}", id);
                }
                el
            };
            Self {
                score: find("score"),
                overlay: find("overlay"),
                final_score: find("finalScore"),
                start_btn: find("startBtn"),
            }
        }

        fn set_display(el: &Option<HtmlElement>, display: &str) {
            if let Some(el) = el {
                let _ = el.style().set_property("display", display);
            }
        }
    }

    impl Hud for DomHud {
        fn set_score(&mut self, score: u32) {
            if let Some(el) = &self.score {
                el.set_text_content(Some(&score.to_string()));
            }
        }

        fn show_game_over(&mut self, final_score: u32) {
            if let Some(el) = &self.final_score {
                el.set_text_content(Some(&final_score.to_string()));
            }
            Self::set_display(&self.overlay, "flex");
        }

        fn hide_game_over(&mut self) {
            Self::set_display(&self.overlay, "none");
        }

        fn hide_start(&mut self) {
            Self::set_display(&self.start_btn, "none");
        }
    }

    /// Everything the callbacks share
    struct App {
        game: Game<DomHud>,
        surface: CanvasSurface,
        /// A frame callback is pending
        loop_running: bool,
    }

    impl App {
        /// Start (or restart) a run. The first step runs right away, then
        /// the frame chain takes over if it was idle.
        fn start(app: &Rc<RefCell<App>>) {
            let idle = {
                let mut a = app.borrow_mut();
                a.game.start();
                let idle = !a.loop_running;
                a.loop_running = true;
                idle
            };
            if idle {
                game_loop(app.clone());
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Flappy Canvas starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas"))?
            .dyn_into()?;
        let mut surface = CanvasSurface::new(&canvas)?;

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let mut game = Game::with_size(
            canvas.width() as f32,
            canvas.height() as f32,
            seed,
            DomHud::new(&document),
            settings,
        );

        game.render(&mut surface);

        let app = Rc::new(RefCell::new(App {
            game,
            surface,
            loop_running: false,
        }));

        setup_input_handlers(&window, app.clone())?;
        setup_buttons(&document, app)?;

        log::info!("Flappy Canvas ready");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let signal = InputSignal::Key(event.code());
                if signal.is_flap() {
                    event.prevent_default();
                }
                app.borrow_mut().game.handle_input(&signal);
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Pointer press
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.handle_input(&InputSignal::PointerDown);
            });
            window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        for id in ["startBtn", "restartBtn"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{}", id);
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                App::start(&app);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window for animation frame");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let control = {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            let control = a.game.frame(&mut a.surface);
            if control == LoopControl::Stop {
                a.loop_running = false;
            }
            control
        };

        if control == LoopControl::Continue {
            request_animation_frame(app);
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
    use flappy_canvas::hud::LogHud;
    use flappy_canvas::platform::run_headless;
    use flappy_canvas::renderer::CommandBuffer;
    use flappy_canvas::{Game, Settings};

    env_logger::init();
    log::info!("Flappy Canvas (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the web version");

    let settings = Settings::load();
    match settings.to_json() {
        Ok(json) => log::debug!("Settings: {}", json),
        Err(e) => log::warn!("Could not serialize settings: {}", e),
    }
    let seed = settings.seed.unwrap_or_else(rand::random);
    let frames = settings.headless_frames;
    let autopilot = settings.autopilot;

    let mut game = Game::new(seed, LogHud, settings);
    let mut surface = CommandBuffer::new();
    let report = run_headless(&mut game, &mut surface, frames, autopilot);

    log::debug!("Recorded {} draw commands", surface.len());
    match serde_json::to_string(game.world()) {
        Ok(json) => log::debug!("Final world: {}", json),
        Err(e) => log::warn!("Could not serialize world: {}", e),
    }

    println!(
        "Seed {}: score {} after {} frames{}",
        seed,
        report.score,
        report.frames,
        if report.crashed { " (crashed)" } else { "" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
