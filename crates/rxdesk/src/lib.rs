//! Rxdesk Domain Library
//!
//! Core domain types and interfaces for the prescription REST facade.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure entities and errors
//!   - `entities/`: Prescription, Medicine, stored row shape
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use rxdesk::{NewPrescription, Prescription, PrescriptionRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, Medicine, NewPrescription, Prescription, PrescriptionRow};
pub use ports::PrescriptionRepository;
