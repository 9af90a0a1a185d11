// src/core/mod.rs

pub mod engine;
pub mod index;
pub mod parser;
pub mod types;
