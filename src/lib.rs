// src/lib.rs

pub mod cache;
pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;

pub use crate::cache::MemoCache;
pub use crate::config::RunConfig;
pub use crate::core::engine::NumberNamer;
pub use crate::core::types::{DigitGroup, GroupSeparator, ZillionIndex};
pub use crate::error::{NamingError, INVALID_INPUT_SENTINEL};
