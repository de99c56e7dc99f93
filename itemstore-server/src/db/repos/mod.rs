//! Repository implementations for database access
//!
//! Repositories borrow a session's connection, so every query runs inside
//! the caller's transaction.

pub mod items;

pub use items::ItemRepo;
