//! Person use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for contact listing, CRUD, search and
//!   bulk generation.
//! - Delegate persistence to repository implementations unchanged.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - The service layer remains storage-agnostic.

use crate::generate::person_gen::PersonSource;
use crate::model::person::{NewPerson, Person};
use crate::repo::person_repo::{PageQuery, PersonRepository, RepoResult};

const RANDOM_PEOPLE_COUNT: usize = 10;

/// Use-case service wrapper for contact operations.
pub struct PersonService<R: PersonRepository, G: PersonSource> {
    repo: R,
    generator: G,
}

impl<R: PersonRepository, G: PersonSource> PersonService<R, G> {
    /// Creates a service over the provided repository and generator.
    pub fn new(repo: R, generator: G) -> Self {
        Self { repo, generator }
    }

    /// Lists every contact without ordering guarantees.
    pub fn list_people(&self) -> RepoResult<Vec<Person>> {
        self.repo.find_all()
    }

    /// Lists one page of contacts ordered by the validated sort key.
    pub fn list_page(&self, query: &PageQuery) -> RepoResult<Vec<Person>> {
        self.repo.find_page(query)
    }

    /// Returns the total contact count.
    pub fn count(&self) -> RepoResult<i64> {
        self.repo.count()
    }

    /// Returns the number of listing pages for the given page size.
    ///
    /// # Contract
    /// - `size >= 1`.
    /// - Result is `ceil(count / size)`; zero for an empty table.
    pub fn page_count(&self, size: u32) -> RepoResult<i64> {
        let count = self.repo.count()?;
        let size = i64::from(size);
        Ok((count + size - 1) / size)
    }

    /// Gets one contact by id.
    pub fn find_person(&self, id: i64) -> RepoResult<Person> {
        self.repo.find_by_id(id)
    }

    /// Creates a contact and returns it with its store-assigned id.
    pub fn create_person(&self, person: &NewPerson) -> RepoResult<Person> {
        self.repo.save(person)
    }

    /// Updates the contact with the given id.
    pub fn update_person(&self, person: &NewPerson, id: i64) -> RepoResult<()> {
        self.repo.update(person, id)
    }

    /// Deletes one contact by id.
    pub fn delete_person(&self, id: i64) -> RepoResult<()> {
        self.repo.delete_by_id(id)
    }

    /// Deletes every contact.
    pub fn delete_all(&self) -> RepoResult<()> {
        self.repo.delete_all()
    }

    /// Finds contacts whose full name contains the query as a substring.
    pub fn search(&self, query: &str) -> RepoResult<Vec<Person>> {
        self.repo.search(query)
    }

    /// Generates and stores ten random contacts sequentially.
    ///
    /// Fails fast on the first error; rows saved before the failure stay
    /// committed.
    pub fn create_random_people(&mut self) -> RepoResult<()> {
        for _ in 0..RANDOM_PEOPLE_COUNT {
            let person = self.generator.generate_person();
            self.repo.save(&person)?;
        }
        Ok(())
    }
}
