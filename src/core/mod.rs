// src/core/mod.rs

pub mod error;
pub mod net;
pub mod paging;
pub mod retry;
pub mod sanitize;
pub mod xml;
