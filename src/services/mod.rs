//! Business logic services

pub mod auth;
pub mod catalog;
pub mod issues;
pub mod roster;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub roster: roster::RosterService,
    pub issues: issues::IssuesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            roster: roster::RosterService::new(repository.clone()),
            issues: issues::IssuesService::new(repository),
        }
    }
}
