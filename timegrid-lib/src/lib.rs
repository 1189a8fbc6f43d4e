//! Headless time-entry table library
//!
//! A schema-driven, immutable table engine with typed parsing, formatting and
//! sorting, pagination and drag reordering of rows and columns, plus the
//! gesture recognizer that turns pointer input into drop targets.

pub mod adapter;
pub mod config;
pub mod drag;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod table;

pub use table::Table;
