//! Hard failures of the value tree.
//!
//! Only the strict key lookup ([`Value::at`](crate::Value::at)) reports
//! errors. Every other accessor degrades to a default value instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value being indexed by key is not an object.
    #[error("cannot index {found} by key")]
    TypeMismatch { found: &'static str },
    /// The object has no entry for the requested key.
    #[error("key `{0}` not found")]
    KeyNotFound(String),
}

pub type ValueResult<T> = Result<T, ValueError>;
