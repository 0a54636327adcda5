//! Rally Pong entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, HtmlCanvasElement, MouseEvent, TouchEvent};

    use rally_pong::consts::*;
    use rally_pong::renderer::CanvasRenderer;
    use rally_pong::sim::{GameConfig, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: TickInput,
    }

    impl Game {
        fn new(seed: u64, renderer: CanvasRenderer) -> Self {
            Self {
                state: GameState::new(GameConfig::default(), seed),
                renderer,
                input: TickInput::default(),
            }
        }

        /// One animation frame: a single fixed simulation step, then a render.
        fn frame(&mut self) {
            tick(&mut self.state, &self.input);
            self.renderer.render(&self.state.snapshot());
        }
    }

    /// Map a pointer/touch client y into arena coordinate space.
    ///
    /// The canvas backing store is fixed at arena size while its CSS size
    /// follows the viewport, so display coordinates must be rescaled.
    fn pointer_to_arena_y(canvas: &HtmlCanvasElement, client_y: f32) -> f32 {
        let rect = canvas.get_bounding_client_rect();
        let scale = canvas.height() as f32 / rect.height() as f32;
        (client_y - rect.top() as f32) * scale
    }

    /// Fit the canvas CSS size to the viewport while keeping the arena
    /// aspect ratio. The backing store stays at arena size.
    fn resize_canvas(canvas: &HtmlCanvasElement) {
        let window = web_sys::window().expect("no window");
        let inner_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(ARENA_WIDTH as f64);
        let inner_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(ARENA_HEIGHT as f64);

        let aspect = (ARENA_WIDTH / ARENA_HEIGHT) as f64;
        let mut width = (inner_w * 0.96).min(ARENA_WIDTH as f64);
        let mut height = width / aspect;
        if height > inner_h * 0.7 {
            height = inner_h * 0.7;
            width = height * aspect;
        }

        let style = canvas.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rally Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Backing store at arena size; CSS size follows the viewport
        canvas.set_width(ARENA_WIDTH as u32);
        canvas.set_height(ARENA_HEIGHT as u32);
        resize_canvas(&canvas);

        let renderer = CanvasRenderer::new(&canvas).expect("Failed to create renderer");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, renderer)));
        log::info!("Game initialized with seed: {}", seed);

        setup_resize_handler(&canvas);
        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Rally Pong running!");
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement) {
        let window = web_sys::window().expect("no window");
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            resize_canvas(&canvas);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move: latest sample wins; tick() reads it next frame
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let y = pointer_to_arena_y(&canvas_clone, event.client_y() as f32);
                game.borrow_mut().input.target_y = Some(y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move: must be registered non-passive so prevent_default()
        // can stop the page from scrolling while the paddle is dragged
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let y = pointer_to_arena_y(&canvas_clone, touch.client_y() as f32);
                    game.borrow_mut().input.target_y = Some(y);
                }
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
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
    use rally_pong::sim::{GameConfig, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Rally Pong (native) starting...");
    log::info!("Native mode has no renderer - running a headless demo rally");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = GameState::new(GameConfig::default(), seed);
    let input = TickInput::default();
    // Roughly a minute of play at 60 frames per second
    for _ in 0..3600 {
        tick(&mut state, &input);
    }

    log::info!(
        "Headless run done: {} ticks, score {}-{}",
        state.time_ticks,
        state.score.player,
        state.score.opponent
    );
    println!(
        "score after {} ticks: {} - {}",
        state.time_ticks, state.score.player, state.score.opponent
    );
}
