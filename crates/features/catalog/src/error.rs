use std::borrow::Cow;

/// Catalog slice error type.
#[whub_derive::whub_error]
pub enum CatalogError {
    /// Lookup of a single record that does not exist.
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Malformed request input (query parameters, unknown modes).
    #[error("Invalid input{}: {message}", format_context(.context))]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(feature = "server")]
mod response {
    use super::CatalogError;
    use axum::Json;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};

    impl CatalogError {
        #[must_use]
        pub const fn status(&self) -> StatusCode {
            match self {
                Self::NotFound { .. } => StatusCode::NOT_FOUND,
                Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
                Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for CatalogError {
        fn into_response(self) -> Response {
            let status = self.status();
            if status.is_server_error() {
                tracing::error!(error = %self, "Catalog request failed");
            } else {
                tracing::debug!(error = %self, "Catalog request rejected");
            }

            (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_rendered_in_message() {
        let result: Result<(), CatalogError> =
            Err(CatalogError::NotFound { message: "mug-xl".into(), context: None });
        let err = result.context("product type").expect_err("still an error");
        assert_eq!(err.to_string(), "Not found (product type): mug-xl");
    }

    #[test]
    fn strings_become_internal_errors() {
        let err = CatalogError::from("registry is corrupt");
        assert!(matches!(err, CatalogError::Internal { .. }));
    }

    #[cfg(feature = "server")]
    #[test]
    fn statuses_follow_variants() {
        use axum::http::StatusCode;

        let not_found = CatalogError::NotFound { message: "x".into(), context: None };
        let invalid = CatalogError::InvalidInput { message: "x".into(), context: None };
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(CatalogError::from("x").status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
