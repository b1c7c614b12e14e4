//! Random Person generator.
//!
//! # Responsibility
//! - Draw name/surname pairs from fixed realistic pools.
//! - Derive the email convention `lowercase(name).lowercase(surname)@email.com`.
//! - Assign a uniform random avatar id in `1..=4`.
//!
//! # Invariants
//! - The generator never assigns an id; ids are store-assigned on insert.
//! - The same seed reproduces the same sequence of contacts.

use crate::model::person::NewPerson;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Adam", "Alice", "Anna", "Boris", "Clara", "Daniel", "Diana", "Elena", "Eva", "Felix",
    "Greta", "Henry", "Igor", "Irene", "James", "Julia", "Leo", "Maria", "Martin", "Nina",
    "Oliver", "Paula", "Robert", "Sofia", "Thomas", "Vera",
];

const SURNAMES: &[&str] = &[
    "Smith", "Johnson", "Brown", "Taylor", "Anderson", "Clark", "Wright", "Walker", "Hall",
    "Young", "King", "Scott", "Green", "Baker", "Adams", "Nelson", "Hill", "Campbell",
    "Mitchell", "Roberts", "Carter", "Phillips", "Evans", "Turner", "Parker", "Collins",
];

const EMAIL_DOMAIN: &str = "email.com";
const AVATAR_ID_MIN: i64 = 1;
const AVATAR_ID_MAX: i64 = 4;

/// Source of generated contacts.
///
/// Kept as a trait so service tests can substitute a deterministic fake.
pub trait PersonSource {
    /// Produces one synthetic contact without a store-assigned id.
    fn generate_person(&mut self) -> NewPerson;
}

/// Pool-based random contact generator.
pub struct PersonGenerator<R: Rng> {
    rng: R,
}

impl PersonGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a generator with a fixed seed for reproducible output.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for PersonGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PersonGenerator<R> {
    /// Creates a generator over a caller-provided randomness source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PersonSource for PersonGenerator<R> {
    fn generate_person(&mut self) -> NewPerson {
        let name = FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())];
        let surname = SURNAMES[self.rng.random_range(0..SURNAMES.len())];
        let email = format!(
            "{}.{}@{EMAIL_DOMAIN}",
            name.to_lowercase(),
            surname.to_lowercase()
        );
        let avatar_id = self.rng.random_range(AVATAR_ID_MIN..=AVATAR_ID_MAX);

        NewPerson::new(name, surname, email, Some(avatar_id))
    }
}
