//! Line search algorithms and their configuration.

pub mod bracket;
pub mod hooks;
pub mod line_search;
pub mod params;
pub mod strategy;

// Re-export optimization components
pub use bracket::*;
pub use hooks::*;
pub use line_search::*;
pub use params::*;
pub use strategy::*;
