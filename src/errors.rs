use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("a reply is still being generated")]
    TurnInProgress,

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("unknown profile field: {0}")]
    UnknownField(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::TurnInProgress => StatusCode::CONFLICT,
            AppError::TemplateNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnknownField(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::TurnInProgress.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::TemplateNotFound("florist".into())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::UnknownField("owner".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AppError::TemplateNotFound("florist".into()).to_string(),
            "template not found: florist"
        );
    }
}
