// src/core/mod.rs

pub mod engine;
pub mod latin;
pub mod types;
pub mod units;
pub mod zillion;
