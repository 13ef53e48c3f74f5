// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DictError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictError {
    /// The logical key has no entry in the namespace it was looked up in.
    #[error("not found for key: {0}")]
    NotFound(String),
}
