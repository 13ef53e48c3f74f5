// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use std::iter::FusedIterator;
use std::vec;

use super::transform::PrefixTransform;
use crate::mapping::Mapping;
use crate::shared::SharedMap;

/// Logical keys of a view, captured when the iterator was created.
#[derive(Debug, Clone)]
pub struct Keys {
    inner: vec::IntoIter<String>,
}

impl Keys {
    pub(super) fn new(keys: Vec<String>) -> Self {
        Keys {
            inner: keys.into_iter(),
        }
    }
}

impl Iterator for Keys {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Keys {}
impl FusedIterator for Keys {}

/// `(logical key, value)` pairs of a view.
///
/// The physical keys are captured up front; each value is read from the
/// backing only when its pair is yielded. Entries removed in the meantime are
/// skipped.
pub struct Items<M> {
    backing: SharedMap<M>,
    transform: PrefixTransform,
    physical: vec::IntoIter<String>,
}

impl<M> Items<M> {
    pub(super) fn new(
        backing: SharedMap<M>,
        transform: PrefixTransform,
        physical: Vec<String>,
    ) -> Self {
        Items {
            backing,
            transform,
            physical: physical.into_iter(),
        }
    }
}

impl<M: Mapping> Iterator for Items<M> {
    type Item = (String, M::Value);

    fn next(&mut self) -> Option<Self::Item> {
        for physical in &mut self.physical {
            let value = match self.backing.read().get(&physical) {
                Ok(value) => value,
                Err(_) => continue,
            };
            if let Some(logical) = self.transform.invert_key(&physical) {
                return Some((logical.to_string(), value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.physical.size_hint().1)
    }
}

impl<M: Mapping> FusedIterator for Items<M> {}

/// Values of a view, in the same order as its keys.
pub struct Values<M> {
    items: Items<M>,
}

impl<M> Values<M> {
    pub(super) fn new(items: Items<M>) -> Self {
        Values { items }
    }
}

impl<M: Mapping> Iterator for Values<M> {
    type Item = M::Value;

    fn next(&mut self) -> Option<M::Value> {
        self.items.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<M: Mapping> FusedIterator for Values<M> {}
