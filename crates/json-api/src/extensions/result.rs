//! Response-building failures inside handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

pub(crate) trait ResultExt<T> {
    /// Log `action` with the underlying error and answer with a generic 500.
    fn or_500(self, action: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, action: &str) -> Result<T, StatusError> {
        self.map_err(|source| {
            error!(error = %source, "{action} failed");

            StatusError::internal_server_error().brief("Internal server error")
        })
    }
}
