//! Repository layer for database operations

pub mod admins;
pub mod books;
pub mod issues;
pub mod students;

use sqlx::{Pool, Sqlite};

/// Embedded schema migrations, applied at startup and in tests
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub admins: admins::AdminsRepository,
    pub books: books::BooksRepository,
    pub students: students::StudentsRepository,
    pub issues: issues::IssuesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            admins: admins::AdminsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            students: students::StudentsRepository::new(pool.clone()),
            issues: issues::IssuesRepository::new(pool.clone()),
            pool,
        }
    }
}
