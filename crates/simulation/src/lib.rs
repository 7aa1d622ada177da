//! Falling particle sandbox engine.
//!
//! A [`Grid`] of [`Material`] cells is advanced one tick at a time by
//! [`Engine::step`], which reads the frozen current grid and stages every
//! move into a second buffer. [`Sandbox`] owns the pair of buffers between
//! ticks and applies brush edits; [`Universe`] exports it to WebAssembly.

pub mod api;
pub mod config;
pub mod elements;
pub mod engine;
pub mod grid;
pub mod material;
pub mod sandbox;
pub mod universe;

pub use config::{ConfigError, SandboxConfig};
pub use engine::{step, Engine, Traversal};
pub use grid::{Grid, Point};
pub use material::{Material, MaterialError};
pub use sandbox::Sandbox;
pub use universe::Universe;
