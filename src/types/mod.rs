//! Core domain types for tricount.
//!
//! - `Triangle` - a single parsed facet (normal + three vertices)
//! - `Solid` - a named collection of triangles parsed from one document

mod solid;
mod triangle;

pub use solid::Solid;
pub use triangle::Triangle;
