use contactbook_core::db::open_db_in_memory;
use contactbook_core::{
    NewPerson, Person, PersonRepository, RepoError, SqlitePersonRepository,
};

fn new_adam() -> NewPerson {
    NewPerson::new("Adam", "Smith", "adam.smith@email.com", Some(1))
}

#[test]
fn save_and_find_by_id_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let saved = repo.save(&new_adam()).unwrap();
    let loaded = repo.find_by_id(saved.id).unwrap();

    assert_eq!(loaded, saved);
    assert_eq!(loaded.name, "Adam");
    assert_eq!(loaded.surname, "Smith");
    assert_eq!(loaded.email, "adam.smith@email.com");
    assert_eq!(loaded.avatar_id, Some(1));
}

#[test]
fn save_assigns_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let first = repo.save(&new_adam()).unwrap();
    let second = repo
        .save(&NewPerson::new("Eva", "Smith", "eva.smith@email.com", Some(2)))
        .unwrap();

    assert!(second.id > first.id);
}

#[test]
fn save_rejects_invalid_person() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let err = repo
        .save(&NewPerson::new("A", "Smith", "a.smith@email.com", None))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn save_with_id_duplicate_returns_already_exists() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let person = Person {
        id: 5,
        name: "Adam".to_string(),
        surname: "Smith".to_string(),
        email: "adam.smith@email.com".to_string(),
        avatar_id: None,
    };
    repo.save_with_id(&person).unwrap();

    let err = repo.save_with_id(&person).unwrap_err();
    assert!(matches!(err, RepoError::AlreadyExists(5)));
    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn find_by_id_missing_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let err = repo.find_by_id(999).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(999)));
}

#[test]
fn update_changes_all_non_id_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let saved = repo.save(&new_adam()).unwrap();
    let updated = NewPerson::new("Eva", "Brown", "eva.brown@email.com", Some(3));
    repo.update(&updated, saved.id).unwrap();

    let loaded = repo.find_by_id(saved.id).unwrap();
    assert_eq!(loaded.name, "Eva");
    assert_eq!(loaded.surname, "Brown");
    assert_eq!(loaded.email, "eva.brown@email.com");
    assert_eq!(loaded.avatar_id, Some(3));
}

#[test]
fn update_missing_returns_not_found_and_leaves_table_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let saved = repo.save(&new_adam()).unwrap();
    let err = repo
        .update(
            &NewPerson::new("Eva", "Brown", "eva.brown@email.com", None),
            999,
        )
        .unwrap_err();

    assert!(matches!(err, RepoError::NotFound(999)));
    assert_eq!(repo.find_by_id(saved.id).unwrap(), saved);
    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn delete_by_id_twice_fails_the_second_time() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let saved = repo.save(&new_adam()).unwrap();
    repo.delete_by_id(saved.id).unwrap();

    let err = repo.delete_by_id(saved.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == saved.id));
}

#[test]
fn delete_all_succeeds_on_empty_table() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    repo.delete_all().unwrap();
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn delete_all_removes_every_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    repo.save(&new_adam()).unwrap();
    repo.save(&NewPerson::new("Eva", "Smith", "eva.smith@email.com", None))
        .unwrap();
    repo.delete_all().unwrap();

    assert_eq!(repo.count().unwrap(), 0);
    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn count_matches_find_all_length() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    for i in 0..7 {
        repo.save(&NewPerson::new(
            format!("Name{i}a"),
            format!("Surname{i}"),
            format!("name{i}@email.com"),
            None,
        ))
        .unwrap();
    }

    assert_eq!(
        repo.count().unwrap() as usize,
        repo.find_all().unwrap().len()
    );
}
