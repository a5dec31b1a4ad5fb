//! Job posting entities and mapping.

pub mod model;
pub mod request;
pub mod wire;

pub use model::{JobRow, NewJob};
pub use request::{FieldError, ValidationErrors, from_create_request};
pub use wire::{Job, to_wire};
