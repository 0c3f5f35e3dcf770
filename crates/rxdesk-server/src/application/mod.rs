//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations over the repository ports.

mod prescription_service;

pub use prescription_service::PrescriptionService;
