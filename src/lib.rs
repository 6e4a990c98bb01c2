//! hypernav - interactive navigation through hyperbolic 3-space
//!
//! The application crate: configuration and mapping of non-movement keys.
//! Navigation itself lives in [`hypernav_input`].

pub mod config;
pub mod input;
