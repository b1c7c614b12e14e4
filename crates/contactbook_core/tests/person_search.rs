use contactbook_core::db::open_db_in_memory;
use contactbook_core::{NewPerson, PersonRepository, SqlitePersonRepository};

fn seed_smiths(repo: &SqlitePersonRepository<'_>) -> (i64, i64) {
    let adam = repo
        .save(&NewPerson::new("Adam", "Smith", "adam.smith@email.com", Some(1)))
        .unwrap();
    let eva = repo
        .save(&NewPerson::new("Eva", "Smith", "eva.smith@email.com", Some(2)))
        .unwrap();
    (adam.id, eva.id)
}

#[test]
fn search_by_surname_returns_both_matches() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);
    let (adam_id, eva_id) = seed_smiths(&repo);

    let hits = repo.search("Smith").unwrap();
    let ids: Vec<i64> = hits.iter().map(|p| p.id).collect();
    assert_eq!(hits.len(), 2);
    assert!(ids.contains(&adam_id));
    assert!(ids.contains(&eva_id));
}

#[test]
fn search_by_name_returns_single_match() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);
    let (adam_id, _) = seed_smiths(&repo);

    let hits = repo.search("Adam").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, adam_id);
}

#[test]
fn search_spanning_name_and_surname_matches() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);
    let (adam_id, _) = seed_smiths(&repo);

    // The haystack is `name surname`, so a query across the boundary hits.
    let hits = repo.search("Adam Smith").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, adam_id);
}

#[test]
fn search_without_match_returns_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);
    seed_smiths(&repo);

    assert!(repo.search("zzz").unwrap().is_empty());
}

#[test]
fn empty_query_matches_every_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);
    seed_smiths(&repo);

    assert_eq!(repo.search("").unwrap().len(), 2);
}

#[test]
fn search_on_empty_table_returns_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    assert!(repo.search("Smith").unwrap().is_empty());
}
