//! Row structs and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the API representation
//! - A `Deserialize` input DTO used for both create and update, since writes
//!   replace every mutable field

pub mod folder;
pub mod note;
pub mod tag;
