//! Rxdesk API Routes
//!
//! - /prescriptions - Prescription create/list/get/delete

pub mod prescription;
pub mod swagger;
