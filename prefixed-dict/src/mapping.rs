// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::error::Result;

/// The read half of the mapping protocol, keyed by string.
pub trait Read {
    type Value;

    /// Returns a copy of the value stored at `key`, or `NotFound`.
    fn get(&self, key: &str) -> Result<Self::Value>;
    fn contains(&self, key: &str) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Enumerates every key in the mapping's own order.
    fn keys(&self) -> Box<dyn Iterator<Item = String> + '_>;
}

/// The write half of the mapping protocol.
pub trait Write: Read {
    /// Creates or overwrites the entry at `key`.
    fn set(&mut self, key: String, value: Self::Value);
    /// Removes the entry at `key` and returns its value, or `NotFound`
    /// without touching the mapping.
    fn delete(&mut self, key: &str) -> Result<Self::Value>;
    /// Removes every entry this mapping exposes.
    fn clear(&mut self);
}

/// A mutable string-keyed mapping, usable as the backing of a view.
pub trait Mapping: Read + Write {}

impl<T: Read + Write> Mapping for T {}
