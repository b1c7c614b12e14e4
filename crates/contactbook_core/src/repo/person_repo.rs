//! Person repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD, pagination and search APIs over the `person` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `validate()` before SQL mutations.
//! - Sort keys are checked against a fixed allow-list before any query is
//!   prepared; the validated key maps to a compile-time column constant and
//!   user input never reaches SQL text.
//! - Search and pagination values are always bound as parameters.

use crate::db::DbError;
use crate::generate::person_gen::PersonSource;
use crate::model::person::{NewPerson, Person, PersonValidationError};
use log::info;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PERSON_SELECT_SQL: &str = "SELECT id, name, surname, email, avatar_id FROM person";
const SEED_ROWS: usize = 10;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for Person persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(PersonValidationError),
    Db(DbError),
    NotFound(i64),
    AlreadyExists(i64),
    InvalidSortParameter(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "person with id {id} not found"),
            Self::AlreadyExists(id) => write!(f, "person with id {id} already exists"),
            Self::InvalidSortParameter(value) => write!(f, "invalid sort parameter: {value}"),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_)
            | Self::AlreadyExists(_)
            | Self::InvalidSortParameter(_)
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<PersonValidationError> for RepoError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Allow-listed sort targets for paginated listing.
///
/// The enum is the only path from caller-supplied sort strings to SQL text:
/// parsing rejects unknown keys and `column()` returns fixed constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Surname,
    AvatarId,
}

impl SortKey {
    /// Parses an external sort key, returning `None` for anything outside
    /// the allow-list.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "surname" => Some(Self::Surname),
            "avatarId" => Some(Self::AvatarId),
            _ => None,
        }
    }

    /// External name of this sort key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Surname => "surname",
            Self::AvatarId => "avatarId",
        }
    }

    // Text columns collate case-insensitively to match the original store's
    // ordering behavior.
    fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name COLLATE NOCASE",
            Self::Surname => "surname COLLATE NOCASE",
            Self::AvatarId => "avatar_id",
        }
    }
}

/// Query options for paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page number. The caller contract requires `page >= 1`;
    /// a smaller value produces a negative offset, which SQLite treats
    /// as zero.
    pub page: u32,
    /// Rows per page, `size >= 1`.
    pub size: u32,
    /// External sort key, validated against [`SortKey`].
    pub sort: String,
    /// Descending order when set.
    pub reverse: bool,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: 10,
            sort: "id".to_string(),
            reverse: false,
        }
    }
}

/// Repository interface for Person CRUD, pagination and search.
pub trait PersonRepository {
    /// Returns every row without ordering guarantees.
    fn find_all(&self) -> RepoResult<Vec<Person>>;
    /// Returns one page of rows ordered by the validated sort key.
    fn find_page(&self, query: &PageQuery) -> RepoResult<Vec<Person>>;
    /// Returns the total row count.
    fn count(&self) -> RepoResult<i64>;
    /// Returns the row with the given id or `NotFound`.
    fn find_by_id(&self, id: i64) -> RepoResult<Person>;
    /// Inserts a new row and returns it with its store-assigned id.
    fn save(&self, person: &NewPerson) -> RepoResult<Person>;
    /// Inserts a row under a caller-chosen id; `AlreadyExists` on collision.
    fn save_with_id(&self, person: &Person) -> RepoResult<()>;
    /// Updates all non-id fields of the row with the given id.
    fn update(&self, person: &NewPerson, id: i64) -> RepoResult<()>;
    /// Deletes one row; `NotFound` when nothing was deleted.
    fn delete_by_id(&self, id: i64) -> RepoResult<()>;
    /// Deletes every row; succeeds on an empty table.
    fn delete_all(&self) -> RepoResult<()>;
    /// Returns rows whose `name surname` concatenation contains `query`.
    fn search(&self, query: &str) -> RepoResult<Vec<Person>>;
}

/// SQLite-backed Person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Constructs a repository and, when the table is empty, synchronously
    /// seeds it with ten generated contacts before returning.
    ///
    /// # Side effects
    /// - Emits a `person_seed` logging event when seeding runs.
    pub fn with_seed<G: PersonSource>(
        conn: &'conn Connection,
        source: &mut G,
    ) -> RepoResult<Self> {
        let repo = Self::new(conn);
        if repo.count()? == 0 {
            for _ in 0..SEED_ROWS {
                repo.save(&source.generate_person())?;
            }
            info!("event=person_seed module=repo status=ok rows={SEED_ROWS}");
        }
        Ok(repo)
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self.conn.prepare(PERSON_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut people = Vec::new();
        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }
        Ok(people)
    }

    fn find_page(&self, query: &PageQuery) -> RepoResult<Vec<Person>> {
        // Allow-list check strictly precedes statement preparation; an
        // invalid key never reaches SQL.
        let sort_key = SortKey::parse(&query.sort)
            .ok_or_else(|| RepoError::InvalidSortParameter(query.sort.clone()))?;
        let direction = if query.reverse { "DESC" } else { "ASC" };
        let offset = (i64::from(query.page) - 1) * i64::from(query.size);

        let sql = format!(
            "{PERSON_SELECT_SQL} ORDER BY {} {direction} LIMIT ?1 OFFSET ?2",
            sort_key.column()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![i64::from(query.size), offset])?;
        let mut people = Vec::new();
        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }
        Ok(people)
    }

    fn count(&self) -> RepoResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM person;", [], |row| row.get(0))?;
        Ok(count)
    }

    fn find_by_id(&self, id: i64) -> RepoResult<Person> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => parse_person_row(row),
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn save(&self, person: &NewPerson) -> RepoResult<Person> {
        person.validate()?;

        self.conn.execute(
            "INSERT INTO person (name, surname, email, avatar_id)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                person.name.as_str(),
                person.surname.as_str(),
                person.email.as_str(),
                person.avatar_id,
            ],
        )?;

        Ok(person.clone().into_person(self.conn.last_insert_rowid()))
    }

    fn save_with_id(&self, person: &Person) -> RepoResult<()> {
        person.validate()?;

        // The primary-key constraint is the duplicate-id signal; no
        // check-then-insert read precedes the statement.
        let inserted = self.conn.execute(
            "INSERT INTO person (id, name, surname, email, avatar_id)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                person.id,
                person.name.as_str(),
                person.surname.as_str(),
                person.email.as_str(),
                person.avatar_id,
            ],
        );

        match inserted {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(RepoError::AlreadyExists(person.id))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn update(&self, person: &NewPerson, id: i64) -> RepoResult<()> {
        person.validate()?;

        let changed = self.conn.execute(
            "UPDATE person
             SET name = ?1, surname = ?2, email = ?3, avatar_id = ?4
             WHERE id = ?5;",
            params![
                person.name.as_str(),
                person.surname.as_str(),
                person.email.as_str(),
                person.avatar_id,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_by_id(&self, id: i64) -> RepoResult<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM person WHERE id = ?1;", [id])?;

        if deleted == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_all(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM person;", [])?;
        Ok(())
    }

    fn search(&self, query: &str) -> RepoResult<Vec<Person>> {
        // Empty input wildcards both sides of an empty string and matches
        // every row.
        let pattern = format!("%{query}%");
        let mut stmt = self.conn.prepare(&format!(
            "{PERSON_SELECT_SQL} WHERE name || ' ' || surname LIKE ?1;"
        ))?;
        let mut rows = stmt.query([pattern.as_str()])?;
        let mut people = Vec::new();
        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }
        Ok(people)
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    let person = Person {
        id: row.get("id")?,
        name: row.get("name")?,
        surname: row.get("surname")?,
        email: row.get("email")?,
        avatar_id: row.get("avatar_id")?,
    };
    person.validate()?;
    Ok(person)
}

#[cfg(test)]
mod tests {
    use super::{PageQuery, SortKey};

    #[test]
    fn sort_key_parses_allow_listed_values() {
        assert_eq!(SortKey::parse("id"), Some(SortKey::Id));
        assert_eq!(SortKey::parse("name"), Some(SortKey::Name));
        assert_eq!(SortKey::parse("surname"), Some(SortKey::Surname));
        assert_eq!(SortKey::parse("avatarId"), Some(SortKey::AvatarId));
    }

    #[test]
    fn sort_key_rejects_unknown_values() {
        assert_eq!(SortKey::parse("email"), None);
        assert_eq!(SortKey::parse("id; DROP TABLE person"), None);
        assert_eq!(SortKey::parse(""), None);
        assert_eq!(SortKey::parse("Name"), None);
    }

    #[test]
    fn page_query_defaults_match_listing_defaults() {
        let query = PageQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.size, 10);
        assert_eq!(query.sort, "id");
        assert!(!query.reverse);
    }
}
