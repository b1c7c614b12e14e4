//! Synthetic contact generation.
//!
//! # Responsibility
//! - Produce realistic random Person values for seeding and bulk-create.
//!
//! # Invariants
//! - Generated records always pass model validation.
//! - Randomness is injected at construction so tests can seed it.

pub mod person_gen;
