//! Repository layer over the JSON document store

pub mod admins;
pub mod books;
pub mod issues;
pub mod store;
pub mod students;

use store::Store;

/// Main repository struct holding the store handle
#[derive(Clone)]
pub struct Repository {
    pub store: Store,
    pub admins: admins::AdminsRepository,
    pub students: students::StudentsRepository,
    pub books: books::BooksRepository,
    pub issues: issues::IssuesRepository,
}

impl Repository {
    /// Create a new repository with the given store handle
    pub fn new(store: Store) -> Self {
        Self {
            admins: admins::AdminsRepository::new(store.clone()),
            students: students::StudentsRepository::new(store.clone()),
            books: books::BooksRepository::new(store.clone()),
            issues: issues::IssuesRepository::new(store.clone()),
            store,
        }
    }
}
