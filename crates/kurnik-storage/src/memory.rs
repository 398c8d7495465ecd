//! In-memory store implementation.

use crate::{KogutStore, Result, StorageError};
use async_trait::async_trait;
use kurnik_types::{Kogut, KogutId, KogutInput};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// An in-memory kogut store for tests and local development.
///
/// Backed by a `BTreeMap`, so listing comes out ordered by id. The id
/// counter is monotonic and survives deletes, matching the serial
/// column behavior of the Postgres backend.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    koguts: BTreeMap<KogutId, Kogut>,
    next_id: KogutId,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                koguts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KogutStore for MemoryStore {
    async fn create(&self, input: KogutInput) -> Result<Kogut> {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let kogut = Kogut {
            id,
            name: input.name,
            age: input.age,
            sex: input.sex,
        };
        inner.koguts.insert(id, kogut.clone());
        Ok(kogut)
    }

    async fn get(&self, id: KogutId) -> Result<Kogut> {
        self.inner
            .read()
            .koguts
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Kogut>> {
        Ok(self.inner.read().koguts.values().cloned().collect())
    }

    async fn update(&self, id: KogutId, input: KogutInput) -> Result<Kogut> {
        let mut inner = self.inner.write();
        let kogut = inner
            .koguts
            .get_mut(&id)
            .ok_or(StorageError::NotFound(id))?;

        kogut.name = input.name;
        kogut.age = input.age;
        kogut.sex = input.sex;
        Ok(kogut.clone())
    }

    async fn delete(&self, id: KogutId) -> Result<()> {
        match self.inner.write().koguts.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(id)),
        }
    }
}
