//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Validation errors and diagnostics            |
//! | `field`  | Field paths locating values in the document  |
//! | `handle` | Reloadable document handle (thread-safe)     |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostics, ConfigError, ErrorKind, ValidationError};
pub use field::FieldPath;
pub use handle::ConfigHandle;
