//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod prescription_repository;

pub use prescription_repository::*;
