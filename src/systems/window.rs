//! Window management system
//!
//! Handles window creation, fullscreen toggle and title updates, and serves
//! as the navigator's host: redraw and focus requests go to the window, and
//! depth probes are answered from the window size.

use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use hypernav_input::{DepthSample, RenderTrigger, SceneQuery};
use hypernav::config::AppConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Window,
    base_title: String,
    fov: f64,
    probe_depth: f64,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &AppConfig,
    ) -> Result<Self, WindowError> {
        let attrs = Window::default_attributes()
            .with_title(&config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window.width,
                config.window.height,
            ));

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| WindowError::CreationFailed(e.to_string()))?;

        Ok(Self {
            window,
            base_title: config.window.title.clone(),
            fov: config.camera.fov,
            probe_depth: config.debug.probe_depth,
        })
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title with the camera's distance from the origin
    pub fn update_title(&self, distance: f64, moving: bool) {
        self.window.set_title(&format_title(&self.base_title, distance, moving));
    }
}

impl RenderTrigger for WindowSystem {
    fn request_redraw(&mut self) {
        self.window.request_redraw();
    }

    fn request_focus(&mut self) {
        self.window.focus_window();
    }
}

impl SceneQuery for WindowSystem {
    fn read_depth(&mut self, _x: f64, _y: f64) -> DepthSample {
        let size = self.window.inner_size();
        DepthSample {
            depth: self.probe_depth,
            width: size.width,
            height: size.height,
        }
    }

    fn fov_degrees(&self) -> f64 {
        self.fov
    }
}

fn format_title(base: &str, distance: f64, moving: bool) -> String {
    if moving {
        format!("{} - d = {:.3} [moving]", base, distance)
    } else {
        format!("{} - d = {:.3}", base, distance)
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
