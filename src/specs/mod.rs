// src/specs/mod.rs
//! Endpoint specs: one module per portal handler.
//!
//! Each spec knows its URL shape, its payload format (XML cell order or
//! JSON keys) and how to normalize raw rows into the typed records from
//! `records`. Specs fetch and extract; persistence and cross-source
//! merging live with the higher layers (`runner`, `enrich`, `store`).
//!
//! Conventions:
//! - Normalization is idempotent and total: a missing or garbage cell
//!   becomes its documented placeholder or 0, never an error.
//! - Every page fetch goes through `core::retry`, and every unit goes
//!   through `core::paging`, so backoff and termination behave the same
//!   across endpoints.
//! - Specs are testable offline: `normalize` takes already-parsed rows.

pub mod execution_details;
pub mod executions;
pub mod salaries;
