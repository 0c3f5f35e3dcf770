//! Domain Entities
//!
//! - Prescription: a doctor's medication order for a patient
//! - Medicine: a single drug entry embedded in a Prescription

mod prescription;

pub use prescription::*;
