//! Degrade-to-empty handling for read paths.
//!
//! Listing and detail views show an empty result when the backend is
//! unreachable instead of offering a retry. Mutations do not go through here;
//! their errors are reported to the user.

use crate::error::StoreError;

/// Returns the value, or logs the error at `warn` and returns `T::default()`.
pub fn or_default<T: Default>(operation: &str, result: Result<T, StoreError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(operation, error = %err, "request failed; showing empty result");
            T::default()
        }
    }
}
