//! Core traits and types consumed by the line search.

pub mod error;
pub mod objective;
pub mod types;
pub mod vector;

// Re-export core types
pub use error::*;
pub use objective::*;
pub use types::*;
pub use vector::*;
