//! hypernav - Hyperbolic Navigation
//!
//! Opens a window and drives a hyperboloid navigator from its keyboard and
//! mouse events. The camera's distance from the origin is shown in the title.

mod systems;

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{ModifiersState, PhysicalKey},
    window::WindowId,
};

use hypernav::config::AppConfig;
use hypernav::input::{InputAction, InputMapper};
use hypernav_core::LorentzView;
use hypernav_input::{HyperboloidNavigator, Modifiers, RenderTrigger};

use systems::WindowSystem;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    navigator: HyperboloidNavigator<LorentzView>,
    modifiers: ModifiersState,
    cursor: (f64, f64),
}

impl App {
    fn new(config: AppConfig) -> Self {
        let navigator = HyperboloidNavigator::new(LorentzView::new())
            .with_params(config.navigation.to_params());

        Self {
            config,
            window: None,
            navigator,
            modifiers: ModifiersState::empty(),
            cursor: (0.0, 0.0),
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetView => {
                self.navigator.reset_view_state();
                log::info!("View reset to starting placement");
            }
            InputAction::NormalizeView => self.navigator.fix_view_state(),
            InputAction::DumpViewState => {
                log::info!("View state: {:?}", self.navigator.view_state());
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
        }

        if let Some(window) = &mut self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            match WindowSystem::create(event_loop, &self.config) {
                Ok(window) => self.window = Some(window),
                Err(e) => {
                    log::error!("{}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        let now = Instant::now();

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            self.navigator.key_press(key, now);
                        }
                        ElementState::Released => self.navigator.key_release(key, now),
                    }
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(event_loop, action);
                    }
                }
            }

            WindowEvent::CursorEntered { .. } => {
                self.navigator.pointer_enter(window);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x, position.y);
                self.navigator.button_drag(self.cursor, window);
            }

            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => {
                    let modifiers = Modifiers::from(self.modifiers);
                    self.navigator.button_press(button, self.cursor, modifiers, window);
                }
                ElementState::Released => self.navigator.button_release(button),
            },

            WindowEvent::RedrawRequested => {
                // No renderer is attached; the uniforms are what one would upload
                let view = self.navigator.view_state();
                let uniforms = view.uniforms();
                log::trace!("View matrix {:?}", uniforms.view_matrix);
                window.update_title(view.distance_from_origin(), self.navigator.is_moving());
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_mut() else {
            return;
        };

        if let Some(deadline) = self.navigator.next_tick() {
            let now = Instant::now();
            if now >= deadline {
                self.navigator.tick(now, window);
            }
        }

        match self.navigator.next_tick() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

fn main() {
    let config = AppConfig::load();

    // Initialize logging; RUST_LOG still overrides the configured level
    let level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting hypernav");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
