// src/lib.rs

pub mod cli;
pub mod core;
pub mod specs;

pub mod enrich;
pub mod params;
pub mod progress;
pub mod records;
pub mod runner;
pub mod store;

pub use crate::core::error::ScrapeError;
