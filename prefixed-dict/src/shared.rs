// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

use crate::error::*;
use crate::mapping::{Mapping, Read, Write};

/// A cloneable handle onto one backing mapping.
///
/// Every clone aliases the same map: a write through any handle, or through a
/// view built on it, is visible to all the others. The lock only provides the
/// interior mutability needed for that aliasing; no atomicity is promised
/// across separate calls.
#[derive(Default, Debug)]
pub struct SharedMap<M> {
    inner: Arc<RwLock<M>>,
}

impl<M> Clone for SharedMap<M> {
    fn clone(&self) -> Self {
        SharedMap {
            inner: self.inner.clone(),
        }
    }
}

impl<M> SharedMap<M> {
    pub fn new(map: M) -> Self {
        SharedMap {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// # Deadlocks
    ///
    /// Writing through a view on this map while the guard is held blocks forever.
    pub fn read(&self) -> RwLockReadGuard<M> {
        self.inner.read()
    }

    /// # Deadlocks
    ///
    /// Using a view on this map while the guard is held blocks forever.
    pub fn write(&self) -> RwLockWriteGuard<M> {
        self.inner.write()
    }

    /// Whether both handles point at the same map.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles, views included.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<M> From<M> for SharedMap<M> {
    fn from(map: M) -> Self {
        SharedMap::new(map)
    }
}

impl<M: Mapping> Read for SharedMap<M> {
    type Value = M::Value;

    fn get(&self, key: &str) -> Result<M::Value> {
        self.read().get(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.read().contains(key)
    }

    fn len(&self) -> usize {
        self.read().len()
    }

    fn keys(&self) -> Box<dyn Iterator<Item = String> + '_> {
        let keys: Vec<String> = self.read().keys().collect();
        Box::new(keys.into_iter())
    }
}

impl<M: Mapping> Write for SharedMap<M> {
    fn set(&mut self, key: String, value: M::Value) {
        self.write().set(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<M::Value> {
        self.write().delete(key)
    }

    fn clear(&mut self) {
        self.write().clear()
    }
}
