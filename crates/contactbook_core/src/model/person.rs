//! Person domain model.
//!
//! # Responsibility
//! - Define the contact record shared by repository and service layers.
//! - Provide validation helpers used on every write path.
//!
//! # Invariants
//! - `id` uniquely identifies a stored row and is assigned by the store.
//! - `name`/`surname`/`email` are never empty once validation has run.
//! - `avatar_id`, when present, stays within the fixed avatar set `1..=4`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 30;
const AVATAR_ID_MIN: i64 = 1;
const AVATAR_ID_MAX: i64 = 4;

// Intentionally loose: one `@`, no whitespace, a dot in the domain part.
// Full RFC 5322 parsing is not a goal of this boundary check.
static EMAIL_SYNTAX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile"));

/// Stored contact record.
///
/// Serialized field names follow the external schema (`avatarId`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Store-assigned row id.
    pub id: i64,
    /// First name, 2..=30 characters.
    pub name: String,
    /// Last name, 2..=30 characters.
    pub surname: String,
    /// Contact email address.
    pub email: String,
    /// Avatar selector in `1..=4`. Absent for contacts without an avatar.
    #[serde(rename = "avatarId")]
    pub avatar_id: Option<i64>,
}

/// Insert shape for a contact that has no store-assigned id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(rename = "avatarId")]
    pub avatar_id: Option<i64>,
}

/// Field-level validation failure for Person data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    /// `name` or `surname` outside the 2..=30 character contract.
    FieldLength { field: &'static str, chars: usize },
    /// Email does not look like `local@domain.tld`.
    InvalidEmail(String),
    /// Avatar id outside `1..=4`.
    AvatarIdOutOfRange(i64),
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldLength { field, chars } => write!(
                f,
                "{field} must be {NAME_MIN_CHARS} to {NAME_MAX_CHARS} characters, got {chars}"
            ),
            Self::InvalidEmail(email) => write!(f, "invalid email address `{email}`"),
            Self::AvatarIdOutOfRange(value) => write!(
                f,
                "avatar id must be between {AVATAR_ID_MIN} and {AVATAR_ID_MAX}, got {value}"
            ),
        }
    }
}

impl Error for PersonValidationError {}

impl Person {
    /// Validates all writable fields against the model contract.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        validate_fields(&self.name, &self.surname, &self.email, self.avatar_id)
    }

    /// Returns the insert shape of this record, discarding the id.
    pub fn to_new(&self) -> NewPerson {
        NewPerson {
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            avatar_id: self.avatar_id,
        }
    }
}

impl NewPerson {
    /// Creates an insert record from owned or borrowed parts.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        avatar_id: Option<i64>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            avatar_id,
        }
    }

    /// Validates all fields against the model contract.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        validate_fields(&self.name, &self.surname, &self.email, self.avatar_id)
    }

    /// Attaches a store-assigned id, producing the stored shape.
    pub fn into_person(self, id: i64) -> Person {
        Person {
            id,
            name: self.name,
            surname: self.surname,
            email: self.email,
            avatar_id: self.avatar_id,
        }
    }
}

fn validate_fields(
    name: &str,
    surname: &str,
    email: &str,
    avatar_id: Option<i64>,
) -> Result<(), PersonValidationError> {
    check_name_field("name", name)?;
    check_name_field("surname", surname)?;

    if !EMAIL_SYNTAX.is_match(email) {
        return Err(PersonValidationError::InvalidEmail(email.to_string()));
    }

    if let Some(value) = avatar_id {
        if !(AVATAR_ID_MIN..=AVATAR_ID_MAX).contains(&value) {
            return Err(PersonValidationError::AvatarIdOutOfRange(value));
        }
    }

    Ok(())
}

fn check_name_field(field: &'static str, value: &str) -> Result<(), PersonValidationError> {
    let chars = value.trim().chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Err(PersonValidationError::FieldLength { field, chars });
    }
    Ok(())
}
