//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Load/resolve errors and diagnostics          |
//! | `field`  | Field paths for diagnostics                  |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ErrorKind, LoadError};
pub use field::FieldPath;
