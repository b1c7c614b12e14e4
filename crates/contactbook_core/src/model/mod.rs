//! Domain model for the contact book.
//!
//! # Responsibility
//! - Define the canonical Person record used by core business logic.
//! - Own field-level validation enforced before persistence.
//!
//! # Invariants
//! - Every stored Person is identified by a stable store-assigned `id`.
//! - Write paths never reach SQL with an invalid record.

pub mod person;
