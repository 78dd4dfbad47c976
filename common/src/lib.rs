//! Shared utilities for the cosmic portfolio application
//!
//! This crate provides the graphics bootstrap (window + wgpu surface/device)
//! and the orbital camera used by the 3D solar-system scene.

pub mod graphics;
pub mod camera;

pub use graphics::*;
pub use camera::*;
