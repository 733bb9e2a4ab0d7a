// talk-core-client/talk-store
//
// Copyright: 2024, the talk-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::Value;

use crate::{Entity, KeyType};

type Collection = BTreeMap<String, Value>;
type Overlay = BTreeMap<String, Option<Value>>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("unknown collection '{0}'")]
    UnknownCollection(String),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// An in-memory collection store with scoped read and write transactions.
///
/// A write transaction takes the write lock of every collection it touches
/// and stages its changes in an overlay. `commit` folds the overlay into the
/// locked collections; dropping the transaction without committing discards
/// every staged change. Readers only ever observe committed state.
pub struct Store {
    collections: Arc<HashMap<String, RwLock<Collection>>>,
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Store {
            collections: self.collections.clone(),
        }
    }
}

impl Store {
    pub fn open(collection_names: &[&str]) -> Self {
        Store {
            collections: Arc::new(
                collection_names
                    .iter()
                    .map(|name| (name.to_string(), RwLock::new(Collection::new())))
                    .collect(),
            ),
        }
    }

    pub fn transaction_for_reading(
        &self,
        collection_names: &[&str],
    ) -> Result<ReadTransaction<'_>, StoreError> {
        let mut guards = Vec::with_capacity(collection_names.len());
        for name in self.checked_names(collection_names)? {
            let lock = self
                .collections
                .get(&name)
                .ok_or_else(|| StoreError::UnknownCollection(name.clone()))?;
            guards.push((name, lock.read()));
        }
        Ok(ReadTransaction { guards })
    }

    pub fn transaction_for_reading_and_writing(
        &self,
        collection_names: &[&str],
    ) -> Result<WriteTransaction<'_>, StoreError> {
        let mut guards = Vec::with_capacity(collection_names.len());
        let mut overlays = HashMap::new();
        for name in self.checked_names(collection_names)? {
            let lock = self
                .collections
                .get(&name)
                .ok_or_else(|| StoreError::UnknownCollection(name.clone()))?;
            overlays.insert(name.clone(), Overlay::new());
            guards.push((name, lock.write()));
        }
        Ok(WriteTransaction { guards, overlays })
    }

    // Locks are always acquired in sorted name order so that transactions
    // spanning multiple collections cannot deadlock each other.
    fn checked_names(&self, collection_names: &[&str]) -> Result<Vec<String>, StoreError> {
        let mut names = collection_names
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        names.sort();
        names.dedup();

        for name in &names {
            if !self.collections.contains_key(name) {
                return Err(StoreError::UnknownCollection(name.clone()));
            }
        }
        Ok(names)
    }
}

pub struct ReadTransaction<'tx> {
    guards: Vec<(String, RwLockReadGuard<'tx, Collection>)>,
}

impl ReadTransaction<'_> {
    pub fn readable_collection(&self, name: &str) -> Result<ReadableCollection<'_>, StoreError> {
        let (_, guard) = self
            .guards
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| StoreError::UnknownCollection(name.to_string()))?;
        Ok(ReadableCollection { data: &**guard })
    }
}

pub struct WriteTransaction<'tx> {
    guards: Vec<(String, RwLockWriteGuard<'tx, Collection>)>,
    overlays: HashMap<String, Overlay>,
}

impl WriteTransaction<'_> {
    pub fn writeable_collection(
        &mut self,
        name: &str,
    ) -> Result<WritableCollection<'_>, StoreError> {
        let idx = self
            .guards
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| StoreError::UnknownCollection(name.to_string()))?;
        let Some(overlay) = self.overlays.get_mut(name) else {
            return Err(StoreError::UnknownCollection(name.to_string()));
        };
        Ok(WritableCollection {
            data: &*self.guards[idx].1,
            overlay,
        })
    }

    /// Applies all staged changes. The collections stay locked until the
    /// transaction is dropped, so the commit is atomic from the perspective
    /// of any concurrent reader.
    pub fn commit(mut self) -> Result<(), StoreError> {
        let overlays = std::mem::take(&mut self.overlays);
        for (name, overlay) in overlays {
            let Some((_, guard)) = self.guards.iter_mut().find(|(n, _)| *n == name) else {
                continue;
            };
            for (key, value) in overlay {
                match value {
                    Some(value) => {
                        guard.insert(key, value);
                    }
                    None => {
                        guard.remove(&key);
                    }
                }
            }
        }
        Ok(())
    }
}

pub struct ReadableCollection<'c> {
    data: &'c Collection,
}

impl ReadableCollection<'_> {
    pub fn get<E: Entity>(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
        let Some(value) = self.data.get(&id.to_raw_key()) else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_value(value.clone())?))
    }

    pub fn get_all<E: Entity>(&self) -> Result<Vec<E>, StoreError> {
        self.data
            .values()
            .map(|value| Ok(serde_json::from_value(value.clone())?))
            .collect()
    }

    pub fn contains_key<K: KeyType + ?Sized>(&self, key: &K) -> bool {
        self.data.contains_key(&key.to_raw_key())
    }
}

pub struct WritableCollection<'c> {
    data: &'c Collection,
    overlay: &'c mut Overlay,
}

impl WritableCollection<'_> {
    /// Reads through the staged overlay, i.e. the transaction sees its own
    /// uncommitted writes.
    pub fn get<E: Entity>(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
        match self.overlay.get(&id.to_raw_key()) {
            Some(Some(value)) => Ok(Some(serde_json::from_value(value.clone())?)),
            Some(None) => Ok(None),
            None => {
                let Some(value) = self.data.get(&id.to_raw_key()) else {
                    return Ok(None);
                };
                Ok(Some(serde_json::from_value(value.clone())?))
            }
        }
    }

    pub fn get_all<E: Entity>(&self) -> Result<Vec<E>, StoreError> {
        let mut entities = Vec::new();
        for (key, value) in self.data {
            match self.overlay.get(key) {
                Some(_) => continue,
                None => entities.push(serde_json::from_value(value.clone())?),
            }
        }
        for value in self.overlay.values().flatten() {
            entities.push(serde_json::from_value(value.clone())?);
        }
        Ok(entities)
    }

    pub fn put<E: Entity>(&mut self, entity: &E) -> Result<(), StoreError> {
        self.overlay.insert(
            entity.id().to_raw_key(),
            Some(serde_json::to_value(entity)?),
        );
        Ok(())
    }

    pub fn delete<K: KeyType + ?Sized>(&mut self, key: &K) {
        self.overlay.insert(key.to_raw_key(), None);
    }

    pub fn contains_key<K: KeyType + ?Sized>(&self, key: &K) -> bool {
        match self.overlay.get(&key.to_raw_key()) {
            Some(Some(_)) => true,
            Some(None) => false,
            None => self.data.contains_key(&key.to_raw_key()),
        }
    }
}
