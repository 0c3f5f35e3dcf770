//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

#[cfg(test)]
pub mod memory;
pub mod supabase;

// Re-exports
pub use supabase::SupabasePrescriptionRepository;
