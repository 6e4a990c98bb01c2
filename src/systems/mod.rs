//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod window;

pub use window::WindowSystem;
