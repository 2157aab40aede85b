//! json-value - a dynamically-typed JSON tree with an indented printer.
//!
//! [`Value`] holds one of six payloads (`null`, boolean, number, string,
//! array, object) and owns its children. Host code builds trees through
//! [`Value::entry`] and `From` conversions, and reads them back through
//! [`Value::is`], [`Value::to`] and friends. Lookups that miss degrade to
//! defaults; only [`Value::at`] reports errors.
//!
//! ```
//! use json_value::{to_pretty_string, Value};
//!
//! let mut config = Value::default();
//! config.entry("k").set(vec![Value::from(1), Value::from(2)]);
//!
//! assert_eq!(config.get("k").get_index(1).to::<i32>(), 2);
//! assert_eq!(
//!     to_pretty_string(&config),
//!     "{\n  \"k\": [\n    1,\n    2\n  ]\n}"
//! );
//! ```

mod convert;
mod error;
mod format;
mod serde_interop;
mod value;

pub use convert::FromValue;
pub use error::{ValueError, ValueResult};
pub use format::{
    to_pretty_bytes, to_pretty_string, write_pretty, write_pretty_with, PrettyOptions,
};
pub use value::{Array, Null, Object, Value};
