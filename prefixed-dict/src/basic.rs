// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use std::collections::{BTreeMap, HashMap};

use crate::error::*;
use crate::mapping::{Read, Write};

impl<V: Clone> Read for HashMap<String, V> {
    type Value = V;

    fn get(&self, key: &str) -> Result<V> {
        HashMap::get(self, key)
            .cloned()
            .ok_or_else(|| DictError::NotFound(key.to_string()))
    }

    fn contains(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(HashMap::keys(self).cloned())
    }
}

impl<V: Clone> Write for HashMap<String, V> {
    fn set(&mut self, key: String, value: V) {
        self.insert(key, value);
    }

    fn delete(&mut self, key: &str) -> Result<V> {
        self.remove(key)
            .ok_or_else(|| DictError::NotFound(key.to_string()))
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }
}

impl<V: Clone> Read for BTreeMap<String, V> {
    type Value = V;

    fn get(&self, key: &str) -> Result<V> {
        BTreeMap::get(self, key)
            .cloned()
            .ok_or_else(|| DictError::NotFound(key.to_string()))
    }

    fn contains(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(BTreeMap::keys(self).cloned())
    }
}

impl<V: Clone> Write for BTreeMap<String, V> {
    fn set(&mut self, key: String, value: V) {
        self.insert(key, value);
    }

    fn delete(&mut self, key: &str) -> Result<V> {
        self.remove(key)
            .ok_or_else(|| DictError::NotFound(key.to_string()))
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }
}
