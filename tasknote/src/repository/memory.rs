//! In-memory repository
//!
//! Records live in a [`MemoryStore`] that the composer (process bootstrap or
//! a test) creates and hands to every repository by `Arc`. Ids come from a
//! monotonic counter, so a deleted id is never issued again.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{Repository, Result};
use crate::db::Mapped;
use crate::domain::NotFoundError;

struct Table<R> {
    records: Vec<R>,
    next_id: i64,
}

/// Process-lifetime record store for one resource kind
pub struct MemoryStore<E: Mapped> {
    table: Mutex<Table<E::Record>>,
}

impl<E: Mapped> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Convenience for the common `Arc` handle
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub async fn len(&self) -> usize {
        self.table.lock().await.records.len()
    }
}

impl<E: Mapped> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Repository over a shared [`MemoryStore`]
pub struct InMemoryRepository<E: Mapped> {
    store: Arc<MemoryStore<E>>,
}

impl<E: Mapped> InMemoryRepository<E> {
    pub fn new(store: Arc<MemoryStore<E>>) -> Self {
        Self { store }
    }
}

impl<E: Mapped> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[async_trait]
impl<E: Mapped> Repository<E> for InMemoryRepository<E> {
    async fn add(&self, entity: E) -> Result<E> {
        let new_record = entity.to_storage_record();

        // Id issue and append happen under one lock
        let mut table = self.store.table.lock().await;
        let id = table.next_id;
        table.next_id += 1;
        let record = E::assign_id(new_record, id);
        table.records.push(record.clone());

        Ok(E::to_domain(record))
    }

    async fn get(&self, id: i64) -> Result<E> {
        let table = self.store.table.lock().await;
        table
            .records
            .iter()
            .find(|r| E::record_id(r) == id)
            .cloned()
            .map(E::to_domain)
            .ok_or_else(|| NotFoundError::new(E::KIND, id).into())
    }

    async fn get_all(&self) -> Result<Vec<E>> {
        let table = self.store.table.lock().await;
        Ok(table.records.iter().cloned().map(E::to_domain).collect())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut table = self.store.table.lock().await;
        let position = table
            .records
            .iter()
            .position(|r| E::record_id(r) == id)
            .ok_or_else(|| NotFoundError::new(E::KIND, id))?;
        table.records.remove(position);
        Ok(())
    }
}
