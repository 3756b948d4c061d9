// src/core/mod.rs

pub mod defaults;
pub mod engine;
pub mod resolver;
pub mod selection;
pub mod sentence;
pub mod types;
pub mod vocabulary;
