//! Entity module - Contains the catalog record definitions.
//! Records are plain in-memory values; there is no backing table.

pub mod bag;

// Re-export specific types to avoid conflicts
pub use bag::{Brand, Color, Model as BagModel, Size};
