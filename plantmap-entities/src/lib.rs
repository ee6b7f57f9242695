//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # plantmap-entities
//!
//! Reusable, agnostic domain entities for plantmap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod category;
pub mod country;
pub mod geo;
pub mod plant;
pub mod table;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
