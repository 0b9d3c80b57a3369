//! Service error to HTTP status mapping.

use std::error::Error;

use salvo::http::StatusError;

use storefront_app::domain::{ErrorKind, orders::OrdersServiceError, products::ProductsServiceError};

/// Convert a service error into the status error returned to the client.
///
/// The status depends only on the error's kind. Storage failures were already
/// logged where they occurred, so the client only sees a generic 500.
pub(crate) trait IntoStatusError {
    fn into_status_error(self) -> StatusError;
}

impl IntoStatusError for ProductsServiceError {
    fn into_status_error(self) -> StatusError {
        from_kind(self.kind(), &self)
    }
}

impl IntoStatusError for OrdersServiceError {
    fn into_status_error(self) -> StatusError {
        from_kind(self.kind(), &self)
    }
}

fn from_kind(kind: ErrorKind, error: &dyn Error) -> StatusError {
    match kind {
        ErrorKind::NotFound => StatusError::not_found().brief(error.to_string()),
        ErrorKind::Validation => StatusError::bad_request().brief(error.to_string()),
        ErrorKind::Persistence => {
            StatusError::internal_server_error().brief("Internal server error")
        }
    }
}
