//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `contactbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use contactbook_core::db::open_db_in_memory;
use contactbook_core::{PersonGenerator, PersonRepository, SqlitePersonRepository};

fn main() {
    println!("contactbook_core version={}", contactbook_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory database: {err}");
            std::process::exit(1);
        }
    };

    let mut generator = PersonGenerator::from_seed(0);
    match SqlitePersonRepository::with_seed(&conn, &mut generator) {
        Ok(repo) => match repo.count() {
            Ok(count) => println!("seeded contacts={count}"),
            Err(err) => eprintln!("count failed: {err}"),
        },
        Err(err) => eprintln!("seed failed: {err}"),
    }
}
