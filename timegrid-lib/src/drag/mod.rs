//! Drag gesture recognition
//!
//! Turns pointer sequences over a row of sibling elements into drop targets.
//! The recognizer knows nothing about tables: siblings are identified by a
//! caller-chosen key `K`, and the caller maps keys back to rows or columns
//! (see [`Table::drop_row`](crate::Table::drop_row) and
//! [`Table::drop_column`](crate::Table::drop_column)).

mod event;
mod geometry;
mod recognizer;
mod registry;

pub use event::*;
pub use geometry::*;
pub use recognizer::*;
pub use registry::*;
