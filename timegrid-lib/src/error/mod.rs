//! Error types

mod adapter;
mod config;
mod drag;
mod table;

pub use adapter::*;
pub use config::*;
pub use drag::*;
pub use table::*;
