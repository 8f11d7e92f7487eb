pub mod fallback;
pub mod folders;
pub mod notes;
pub mod tags;
