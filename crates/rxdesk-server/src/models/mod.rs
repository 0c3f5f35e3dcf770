//! Rxdesk Data Models
//!
//! - Prescription: request/response wire shapes

mod prescription;

pub use prescription::*;
