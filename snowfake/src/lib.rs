//! Gravner-Griffeath mesoscopic snow crystal growth on a toroidal hexagonal
//! lattice.
//!
//! The public surface is deliberately small: construct an [`Engine`] from
//! [`Parameters`], drive it with [`Engine::step`] or [`Engine::run_until`],
//! and persist it with [`Engine::save`]/[`Engine::load`]/[`Engine::render`].
//! Everything else (the interactive console host, the X11 GUI, the image
//! viewer invocation) lives outside this crate and talks to it only through
//! that surface.

pub mod cell;
pub mod dynamics;
pub mod engine;
pub mod error;
pub mod initializer;
pub mod lattice;
pub mod parameters;
pub mod persistence;

pub use cell::Cell;
pub use engine::{Engine, EngineHeader};
pub use error::{Result, SnowfakeError};
pub use lattice::Lattice;
pub use parameters::Parameters;
