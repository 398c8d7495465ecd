//! Common types for Kurnik.
//!
//! This crate defines the `Kogut` entity and the input shape shared by
//! the create and update operations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod kogut;

pub use kogut::{Kogut, KogutId, KogutInput};
