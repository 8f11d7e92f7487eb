//! Domain building blocks shared by the Noteful persistence and HTTP crates.

pub mod error;
pub mod types;
pub mod validation;
