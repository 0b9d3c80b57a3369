//! Depot lookups for handlers.

use std::any::{Any, type_name};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

pub(crate) trait DepotExt {
    /// Fetch an injected value, or fail the request with a 500 when the
    /// router was assembled without it.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(expected = type_name::<T>(), "depot value was not injected");

            StatusError::internal_server_error().brief("Internal server error")
        })
    }
}
