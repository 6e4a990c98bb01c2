//! Hyperbolic Navigation Input
//!
//! This crate turns keyboard and pointer events into isometries of the
//! hyperboloid model and applies them to a view state.

mod bindings;
mod gesture;
mod host;
mod key_motion;
mod navigator;
mod params;

pub use bindings::{binding_for, MotionBinding, Sign};
pub use gesture::{unproject, Gesture, GestureMode, OrbitPivot};
pub use host::{DepthSample, Modifiers, RenderTrigger, SceneQuery};
pub use key_motion::KeyMotion;
pub use navigator::HyperboloidNavigator;
pub use params::NavigationParams;
