//! Core types for hypernav
//!
//! - [`ViewModel`] - How navigation applies Lorentz operators to a view state
//! - [`ViewState`] - Camera placement in the hyperboloid model
//! - [`LorentzView`] - Reference view model with drift correction
//! - [`ViewUniforms`] - View data packed for the renderer

mod view;

pub use view::{ViewModel, ViewState, LorentzView, ViewUniforms};

// Re-export commonly used types from hypernav_math for convenience
pub use hypernav_math::{Mat4, Vec3, Vec4};
