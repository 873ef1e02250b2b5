//! Business logic services

pub mod auth;
pub mod catalog;
pub mod ledger;
pub mod sessions;
pub mod stats;

use std::sync::Arc;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub ledger: ledger::LedgerService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, sessions: Arc<sessions::SessionStore>) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), sessions),
            catalog: catalog::CatalogService::new(repository.clone()),
            ledger: ledger::LedgerService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
