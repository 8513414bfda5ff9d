//! Unified error types for the robot console.
//!
//! This module uses anyhow for flexible error handling in a no_std
//! environment. Operator-facing paths never return errors (every response is
//! plain text); `ConsoleResult` covers configuration inspection, e.g. the
//! command-table checks in [`crate::registry::validate_table`].
//!
//! Creating errors:
//! ```ignore
//! anyhow::bail!("duplicate command token {:?}", token);
//! anyhow::ensure!(!token.is_empty(), "empty command token");
//! ```

/// Result type alias using anyhow::Error.
pub type ConsoleResult<T> = anyhow::Result<T>;
