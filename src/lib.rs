// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod favorites;
pub mod glyphs;
pub mod logging;
pub mod persistence;
pub mod speech;

pub use crate::core::engine::AacEngine;
pub use crate::core::selection::{Effect, Intent, Phase, SelectionStateMachine, Snapshot};
