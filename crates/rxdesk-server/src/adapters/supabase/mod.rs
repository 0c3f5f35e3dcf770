//! Supabase Repository Implementations

mod prescription_repository;

pub use prescription_repository::SupabasePrescriptionRepository;
