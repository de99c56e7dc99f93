//! Command implementations for the itemstore CLI

pub mod items;
pub mod serve;

pub use items::{run_add, run_init_db, run_list};
pub use serve::run_serve;
