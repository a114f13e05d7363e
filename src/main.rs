//! Quad Reflex entry point
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

    use quad_reflex::renderer::{RenderState, scene};
    use quad_reflex::sim::{self, GameEvent, GamePhase, GameState};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                render_state: None,
            }
        }

        /// Advance one frame: the frame clock drives exactly one tick
        fn update(&mut self) {
            sim::tick(&mut self.state);
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = scene(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Apply pending engine events to the DOM HUD
        fn update_hud(&mut self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            for event in self.state.drain_events() {
                match event {
                    GameEvent::SessionStarted => {
                        if let Some(el) = document.get_element_by_id("message") {
                            let _ = el.set_attribute("class", "hidden");
                        }
                        if let Some(el) = document.get_element_by_id("score") {
                            el.set_text_content(Some("Score: 0"));
                        }
                    }
                    GameEvent::ScoreChanged { score } => {
                        if let Some(el) = document.get_element_by_id("score") {
                            el.set_text_content(Some(&format!("Score: {}", score)));
                        }
                    }
                    GameEvent::GameOver { final_score } => {
                        if let Some(el) = document.get_element_by_id("message") {
                            el.set_inner_html(&format!(
                                "Game Over!<br>Final Score: {}<br>Press Spacebar to Restart",
                                final_score
                            ));
                            let _ = el.set_attribute("class", "");
                        }
                    }
                    // The renderer reads the target straight from state
                    GameEvent::TargetChanged { .. } => {}
                }
            }
        }

        /// Handle a discrete player press
        fn press(&mut self) {
            match self.state.phase {
                GamePhase::Idle | GamePhase::GameOver => sim::reset(&mut self.state),
                GamePhase::Running => sim::activate(&mut self.state),
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Quad Reflex starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handler(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Quad Reflex running!");
    }

    fn setup_input_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if event.code() == "Space" {
                event.prevent_default();
                game.borrow_mut().press();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
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
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
        }

        // Keep the loop alive across game over so a restart press resumes
        // without re-registering the callback
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Quad Reflex (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning engine smoke test...");
    smoke_test_engine();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_test_engine() {
    use quad_reflex::sim::{self, GamePhase, GameState};

    let mut state = GameState::new(42);
    sim::reset(&mut state);

    // Press the instant the hand lands in the target sector, for five rounds
    let mut rounds = 0;
    let mut ticks = 0u32;
    while rounds < 5 && ticks < 10_000 {
        sim::tick(&mut state);
        ticks += 1;
        if state.target.contains_angle(state.angle) {
            sim::activate(&mut state);
            rounds += 1;
        }
    }

    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.score, 5);
    println!("✓ Engine smoke test passed (score {} in {} ticks)", state.score, ticks);
}
