// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! prefixed introduces a namespaced view over a string-keyed mapping, which
//! stores every key it is given under `prefix + SEPARATOR`.
//! Several views can share one backing without their keys colliding.
//! # For example:
//!
//! ```
//! use std::collections::HashMap;
//! use prefixed_dict::{PrefixedDict, SharedMap};
//!
//! let db = SharedMap::new(HashMap::<String, i32>::new());
//! let users = PrefixedDict::with_backing("users", &db);
//! users.set("john", 30); // now it's users-john
//! assert_eq!(users.get("john").unwrap(), 30);
//!
//! // and, in the underlying map
//! assert_eq!(db.read().get("users-john"), Some(&30));
//! ```

mod iter;
mod transform;

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

use crate::error::*;
use crate::mapping::{Mapping, Read, Write};
use crate::shared::SharedMap;

pub use iter::{Items, Keys, Values};
pub use transform::{PrefixTransform, SEPARATOR};

pub const LOG_TARGET: &str = "prefixeddict";

/// A view over a `HashMap` backing.
pub type PrefixedHashDict<V> = PrefixedDict<HashMap<String, V>>;

/// A view that scopes every operation to its own namespace of a backing map.
///
/// The backing is either private to the view (`new`, `from_map`) or shared by
/// reference with the caller and other views (`with_backing`). Values are
/// handed out as copies.
pub struct PrefixedDict<M> {
    transform: PrefixTransform,
    backing: SharedMap<M>,
}

impl<M: Mapping + Default> PrefixedDict<M> {
    /// Creates a view over a new, empty backing nobody else can reach.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` is empty.
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        let dict = PrefixedDict {
            transform: PrefixTransform::new(prefix),
            backing: SharedMap::default(),
        };
        debug!(
            target: LOG_TARGET,
            "new view {:?} over a private backing",
            dict.prefix()
        );
        dict
    }

    /// Creates a view over a private backing, storing each of `entries` under
    /// the prefix. The source entries are consumed, not aliased.
    pub fn from_map<S, I>(prefix: S, entries: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (String, M::Value)>,
    {
        let mut dict = Self::new(prefix);
        dict.extend(entries);
        dict
    }
}

impl<M: Mapping> PrefixedDict<M> {
    /// Creates a view over the map behind `backing`. Nothing is copied:
    /// changes made through the view and through any other handle are
    /// visible to each other.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` is empty.
    pub fn with_backing<S: Into<String>>(prefix: S, backing: &SharedMap<M>) -> Self {
        let dict = PrefixedDict {
            transform: PrefixTransform::new(prefix),
            backing: backing.clone(),
        };
        debug!(
            target: LOG_TARGET,
            "new view {:?} over a shared backing ({} handles)",
            dict.prefix(),
            backing.handle_count()
        );
        dict
    }

    pub fn prefix(&self) -> &str {
        self.transform.prefix()
    }

    pub fn namespace(&self) -> &str {
        self.transform.namespace()
    }

    /// The key `key` is stored under in the backing.
    pub fn physical_key(&self, key: &str) -> String {
        self.transform.convert_key(key)
    }

    /// Another handle onto this view's backing.
    pub fn backing(&self) -> SharedMap<M> {
        self.backing.clone()
    }

    pub fn get(&self, key: &str) -> Result<M::Value> {
        let physical = self.transform.convert_key(key);
        self.backing.read().get(&physical).map_err(|_| {
            trace!(target: LOG_TARGET, "get missed {:?}", physical);
            DictError::NotFound(key.to_string())
        })
    }

    pub fn set(&self, key: &str, value: M::Value) {
        let physical = self.transform.convert_key(key);
        self.backing.write().set(physical, value)
    }

    /// Removes `key` and returns its value. Keys outside this view's
    /// namespace are never touched.
    pub fn delete(&self, key: &str) -> Result<M::Value> {
        let physical = self.transform.convert_key(key);
        self.backing.write().delete(&physical).map_err(|_| {
            trace!(target: LOG_TARGET, "delete missed {:?}", physical);
            DictError::NotFound(key.to_string())
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.backing.read().contains(&self.transform.convert_key(key))
    }

    /// Logical keys, in the backing's own enumeration order: arbitrary for a
    /// `HashMap`, sorted for a `BTreeMap`. Every call reads the backing anew.
    pub fn keys(&self) -> Keys {
        let backing = self.backing.read();
        let keys = backing
            .keys()
            .filter_map(|k| self.transform.invert_key(&k).map(str::to_string))
            .collect();
        Keys::new(keys)
    }

    pub fn values(&self) -> Values<M> {
        Values::new(self.items())
    }

    pub fn items(&self) -> Items<M> {
        Items::new(
            self.backing.clone(),
            self.transform.clone(),
            self.physical_keys(),
        )
    }

    pub fn iter(&self) -> Keys {
        self.keys()
    }

    pub fn len(&self) -> usize {
        self.backing
            .read()
            .keys()
            .filter(|k| self.transform.owns(k))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        !self
            .backing
            .read()
            .keys()
            .any(|k| self.transform.owns(&k))
    }

    /// Deletes every key in this view's namespace, one at a time.
    pub fn clear(&self) {
        let physical = self.physical_keys();
        let mut backing = self.backing.write();
        let mut removed = 0;
        for key in physical.iter() {
            if backing.delete(key).is_ok() {
                removed += 1;
            }
        }
        debug!(
            target: LOG_TARGET,
            "cleared {} entries from view {:?}",
            removed,
            self.prefix()
        );
    }

    fn physical_keys(&self) -> Vec<String> {
        self.backing
            .read()
            .keys()
            .filter(|k| self.transform.owns(k))
            .collect()
    }
}

impl<'a, M: Mapping> IntoIterator for &'a PrefixedDict<M> {
    type Item = String;
    type IntoIter = Keys;

    fn into_iter(self) -> Keys {
        self.keys()
    }
}

// The source may read this same backing, so it is drained before locking.
impl<M: Mapping> Extend<(String, M::Value)> for PrefixedDict<M> {
    fn extend<I: IntoIterator<Item = (String, M::Value)>>(&mut self, iter: I) {
        let entries: Vec<_> = iter
            .into_iter()
            .map(|(key, value)| (self.transform.convert_key(&key), value))
            .collect();
        let mut backing = self.backing.write();
        for (physical, value) in entries {
            backing.set(physical, value);
        }
    }
}

impl<M> fmt::Debug for PrefixedDict<M>
where
    M: Mapping,
    M::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.items()).finish()
    }
}

// A view is itself a mapping, so it can back another view once wrapped in a
// `SharedMap`.
impl<M: Mapping> Read for PrefixedDict<M> {
    type Value = M::Value;

    fn get(&self, key: &str) -> Result<M::Value> {
        PrefixedDict::get(self, key)
    }

    fn contains(&self, key: &str) -> bool {
        PrefixedDict::contains(self, key)
    }

    fn len(&self) -> usize {
        PrefixedDict::len(self)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(PrefixedDict::keys(self))
    }
}

impl<M: Mapping> Write for PrefixedDict<M> {
    fn set(&mut self, key: String, value: M::Value) {
        PrefixedDict::set(self, &key, value)
    }

    fn delete(&mut self, key: &str) -> Result<M::Value> {
        PrefixedDict::delete(self, key)
    }

    fn clear(&mut self) {
        PrefixedDict::clear(self)
    }
}
