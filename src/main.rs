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
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use dino_run::audio::{AudioManager, SoundEffect};
    use dino_run::input::{self, KeyCommand};
    use dino_run::renderer::{Palette, RenderState, build_scene};
    use dino_run::sim::{GameEvent, InputAction, Session};
    use dino_run::ui::HudView;
    use dino_run::{BestScore, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session,
        settings: Settings,
        audio: AudioManager,
        render_state: Option<RenderState>,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        // Last HUD written to the DOM
        last_hud: Option<HudView>,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            let audio = AudioManager::new(&settings);
            Self {
                session: Session::new(seed, Tuning::load(), BestScore::load()),
                settings,
                audio,
                render_state: None,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_hud: None,
            }
        }

        fn input(&mut self, action: InputAction) {
            self.audio.resume();
            self.session.handle_input(action);
            self.handle_events();
        }

        fn command(&mut self, command: KeyCommand) {
            match command {
                KeyCommand::Game(action) => self.input(action),
                KeyCommand::ToggleMute => self.toggle_mute(),
            }
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_mute();
            self.audio.set_volume(self.settings.effective_volume());
            self.settings.save();
            log::info!("Sound {}", if muted { "muted" } else { "on" });
        }

        /// Run simulation ticks
        fn update(&mut self, dt_ms: f64, time: f64) {
            self.session.advance(dt_ms);
            self.handle_events();

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Play cues and persist a new best
        fn handle_events(&mut self) {
            for event in self.session.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
                if let GameEvent::NewBest { .. } = event {
                    self.session.state.best.save();
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let state = &self.session.state;
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_scene(state, &self.settings);
                let background = Palette::for_mode(state.is_day).background;
                match render_state.render(&vertices, background) {
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

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if self.settings.show_fps {
                set_text(&document, "hud-fps", &self.fps.to_string());
            }

            let hud = HudView::from_state(&self.session.state);
            if self.last_hud.as_ref() == Some(&hud) {
                return;
            }

            set_text(&document, "hud-score", &hud.score);
            set_text(&document, "hud-best", &hud.best);
            set_text(&document, "hud-mode", hud.mode);
            set_text(&document, "hud-speed", &hud.speed);
            set_visible(&document, "start-screen", hud.show_start);
            set_visible(&document, "game-over", hud.show_game_over);
            set_text(&document, "final-score", &hud.final_score);
            set_visible(&document, "new-record", hud.new_record);

            if let Some(el) = document.get_element_by_id("game") {
                let classes = el.class_list();
                let _ = classes.toggle_with_force("day", hud.theme_class == "day");
                let _ = classes.toggle_with_force("night", hud.theme_class == "night");
            }

            self.last_hud = Some(hud);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Toggle only the `hidden` class, leaving page styling classes alone
    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", !visible);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dino Run starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        set_visible(&document, "loading", false);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
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

        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;

                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        match RenderState::new(surface, &adapter, width, height).await {
                            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::error!("Failed to create device: {e}"),
                        }
                    }
                    Err(e) => log::error!("No WebGPU adapter, rendering disabled: {e}"),
                }
            }
            Err(e) => log::error!("Failed to create surface, rendering disabled: {e}"),
        }

        // Set up input handlers
        setup_input_handlers(&canvas, game.clone());

        // Set up restart button
        setup_restart_button(game.clone());

        // Show HUD
        set_visible(&document, "hud", true);

        // Start game loop
        request_animation_frame(game);

        log::info!("Dino Run running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if input::is_game_key(&code) {
                    event.prevent_default();
                }
                let phase = game.borrow().session.phase();
                if let Some(command) = input::key_down(&code, event.repeat(), phase) {
                    game.borrow_mut().command(command);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if input::is_game_key(&code) {
                    event.prevent_default();
                }
                if let Some(command) = input::key_up(&code) {
                    game.borrow_mut().command(command);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (jump/start)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input(InputAction::PrimaryPressed);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
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

            // Calculate delta time
            let dt_ms = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt_ms, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input(InputAction::Restart);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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
    log::info!("Dino Run (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");
    log::info!("Running headless autopilot demo instead");

    run_autopilot_demo(3);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a few sessions with the autopilot and report the scores
#[cfg(not(target_arch = "wasm32"))]
fn run_autopilot_demo(runs: u32) {
    use dino_run::sim::{GameEvent, GamePhase, InputAction, Session, autopilot};
    use dino_run::{BestScore, Tuning, pad_score};
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Give up on a run after ten simulated minutes
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let tuning = Tuning::load();
    let frame_ms = tuning.frame_period_ms;
    let mut session = Session::new(seed, tuning, BestScore::load());
    log::info!("Demo seed: {}", seed);

    for run in 1..=runs {
        session.handle_input(InputAction::PrimaryPressed);

        for _ in 0..MAX_FRAMES {
            if let Some(action) = autopilot::decide(&session.state) {
                session.handle_input(action);
            }
            session.advance(frame_ms);

            for event in session.drain_events() {
                match event {
                    GameEvent::NewBest { .. } => session.state.best.save(),
                    GameEvent::DayNightToggled { is_day } => {
                        log::info!("Run {}: {}", run, if is_day { "day" } else { "night" });
                    }
                    _ => {}
                }
            }
            if session.phase() == GamePhase::GameOver {
                break;
            }
        }

        println!(
            "Run {}: score {} (best {}, speed {:.1}x)",
            run,
            pad_score(session.state.score),
            pad_score(session.state.best.value),
            session.state.speed
        );

        if session.phase() == GamePhase::Playing {
            log::info!("Run {} hit the frame limit, stopping", run);
            break;
        }
    }
}
