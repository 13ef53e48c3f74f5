// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! Namespaced views over a shared string-keyed mapping.

mod basic;
mod error;
mod mapping;
#[cfg(test)]
mod tests;

pub mod prefixed;
pub mod shared;

pub use self::error::{DictError, Result};
pub use self::mapping::{Mapping, Read, Write};
pub use self::prefixed::{
    Items, Keys, PrefixTransform, PrefixedDict, PrefixedHashDict, Values, SEPARATOR,
};
pub use self::shared::SharedMap;
