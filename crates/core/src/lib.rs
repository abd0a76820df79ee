//! Functional core for the catalog service.
//!
//! Holds the product domain types, the partial-update expression builder and
//! the storage abstraction. Nothing in this crate performs I/O.

pub mod product;
pub mod storage;
