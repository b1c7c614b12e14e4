//! Core domain logic for the contact book.
//! This crate is the single source of truth for contact-management invariants.

pub mod db;
pub mod generate;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use generate::person_gen::{PersonGenerator, PersonSource};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{NewPerson, Person, PersonValidationError};
pub use repo::person_repo::{
    PageQuery, PersonRepository, RepoError, RepoResult, SortKey, SqlitePersonRepository,
};
pub use service::person_service::PersonService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
