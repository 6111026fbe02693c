//! Admins repository

use crate::{
    error::AppResult,
    models::admin::Admin,
    repository::store::{Collection, Store},
};

#[derive(Clone)]
pub struct AdminsRepository {
    store: Store,
}

impl AdminsRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Load the full admin collection
    pub async fn list(&self) -> AppResult<Vec<Admin>> {
        let _guard = self.store.lock(Collection::Admins).await;
        Ok(self.store.read(Collection::Admins)?)
    }
}
