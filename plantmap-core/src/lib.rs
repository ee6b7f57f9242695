//! # plantmap-core
//!
//! Coordinate parsing and the import of plant records.

pub mod columns;
pub mod coordinates;
pub mod usecases;

pub mod entities {
    pub use plantmap_entities::{address::*, category::*, country::*, geo::*, plant::*, table::*};
}
