//! Domain models for the clinic record keeper.

mod form;
mod record;

pub use form::*;
pub use record::*;
