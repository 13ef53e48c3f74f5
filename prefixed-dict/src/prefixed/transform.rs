// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

/// Joins a view's prefix to each logical key.
pub const SEPARATOR: &str = "-";

/// PrefixTransform converts logical keys into physical ones by prepending
/// `prefix + SEPARATOR`, and back again.
///
/// Keys that already contain the separator are taken as-is: `"a"` + `"b-c"`
/// and `"a-b"` + `"c"` both land on `"a-b-c"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefixTransform {
    prefix: String,
    namespace: String,
}

impl PrefixTransform {
    /// # Panics
    ///
    /// Panics if `prefix` is empty.
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        let prefix = prefix.into();
        assert!(!prefix.is_empty(), "prefix of a prefixed dict can't be empty");
        let namespace = prefix.clone() + SEPARATOR;
        PrefixTransform { prefix, namespace }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `prefix + SEPARATOR`, the start shared by every physical key.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// ConvertKey adds the namespace.
    pub fn convert_key(&self, key: &str) -> String {
        let mut physical = String::with_capacity(self.namespace.len() + key.len());
        physical.push_str(&self.namespace);
        physical.push_str(key);
        physical
    }

    /// InvertKey strips the namespace, `None` for keys outside it.
    pub fn invert_key<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.namespace.as_str())
    }

    pub fn owns(&self, key: &str) -> bool {
        key.starts_with(self.namespace.as_str())
    }
}
