//! Data model types

mod record;
mod schema;
mod typed;
mod value;

pub use record::*;
pub use schema::*;
pub use typed::*;
pub use value::*;
