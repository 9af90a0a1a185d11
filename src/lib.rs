// src/lib.rs

pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod prompt;

pub use crate::config::{ErrorPolicy, LookupConfig};
pub use crate::core::engine::{LookupEngine, LookupResult};
pub use crate::core::index::AbbreviationIndex;
pub use crate::core::types::Entry;
pub use crate::error::{LookupError, ParseError, Result};
