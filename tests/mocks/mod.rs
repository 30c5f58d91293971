//! Test doubles for the renderer contract.

pub mod renderer;

pub use renderer::*;
