//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HNAV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hypernav_input::NavigationParams;
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Navigation configuration
    #[serde(default)]
    pub navigation: NavigationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HNAV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // HNAV_NAVIGATION__TRANSLATION_VELOCITY=1.0 -> navigation.translation_velocity = 1.0
        figment = figment.merge(Env::prefixed("HNAV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "hypernav - Hyperbolic Navigation".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { fov: 90.0 }
    }
}

/// Navigation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Hyperbolic distance per second while a movement key is held
    pub translation_velocity: f64,
    /// Radians per second while a turn key is held
    pub rotation_velocity: f64,
    /// Distance or angle per pixel of pointer drag
    pub drag_sensitivity: f64,
    /// Milliseconds between motion ticks
    pub tick_interval_ms: u64,
    /// Milliseconds a key release waits for a re-press before it counts
    pub release_debounce_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            translation_velocity: 0.4,
            rotation_velocity: 0.4,
            drag_sensitivity: 0.01,
            tick_interval_ms: 10,
            release_debounce_ms: 5,
        }
    }
}

impl NavigationConfig {
    /// Convert to the navigator's parameters
    pub fn to_params(&self) -> NavigationParams {
        NavigationParams::default()
            .with_translation_velocity(self.translation_velocity)
            .with_rotation_velocity(self.rotation_velocity)
            .with_drag_sensitivity(self.drag_sensitivity)
            .with_tick_interval(Duration::from_millis(self.tick_interval_ms))
            .with_release_debounce(Duration::from_millis(self.release_debounce_ms))
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Depth reported for orbit picks while no renderer is attached
    pub probe_depth: f64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            probe_depth: 0.5,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
