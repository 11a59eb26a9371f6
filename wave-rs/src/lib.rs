//! Building blocks for selecting an order *wave*: a subset of orders and a subset of aisles
//! maximizing the number of picked units per visited aisle.
//!
//! The crate holds the instance entities, the shared integer programming model and the
//! plumbing around the external solver engine. Search strategies live in `wave-opt`.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

#[cfg(not(any(feature = "microlp", feature = "highs")))]
compile_error!("enable at least one solver engine: `microlp` or `highs`");

/// Entities to model the wave selection problem
pub mod entities;

/// Importing instances into and exporting solutions out of this library
pub mod io;

/// Integer programming model shared by all search strategies
pub mod model;

/// Helper functions which do not belong to any specific module
pub mod util;
