//! Domain models
//!
//! `Item` is the stored record and the HTTP output shape. `NewItem` is the
//! insert input used by operator tooling.

pub mod item;
pub mod validation;

pub use item::{Item, NewItem};
pub use validation::ValidationError;
