//! Wire contracts shared between the professor registry frontend and the REST backend.
//!
//! Field names follow the backend JSON exactly (`nomeProfessor`, `HAE_O`, ...);
//! Rust-side names are snake_case with explicit serde renames.

pub mod domain;
pub mod shared;
pub mod system;
