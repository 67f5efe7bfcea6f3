//! Utility types and functions for W3D.
//!
//! - [`Error`] / [`Result`] - Error handling
//! - [`hex`] helpers used by the JSON bridge and the CLI
//! - Math type re-exports from glam

mod error;
pub mod hex;

pub use error::*;

pub use glam::{Quat, Vec2, Vec3};
