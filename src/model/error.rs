//! Errors returned to HTTP clients.

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Client-facing failure of a controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// A required field is absent or empty.
    #[error("Missing param: {0}")]
    MissingParam(String),
    /// A field is present but semantically wrong.
    #[error("Invalid param: {0}")]
    InvalidParam(String),
    /// Unexpected failure of a collaborator. Carries no detail.
    #[error("Internal server error")]
    Server,
}

impl HttpError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingParam(field.into())
    }

    pub fn invalid(field: impl Into<String>) -> Self {
        Self::InvalidParam(field.into())
    }

    /// Name of the error kind, used as problem `type`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParam(_) => "MissingParamError",
            Self::InvalidParam(_) => "InvalidParamError",
            Self::Server => "ServerError",
        }
    }

    /// Field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingParam(field) | Self::InvalidParam(field) => {
                Some(field.as_str())
            },
            Self::Server => None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParam(_) | Self::InvalidParam(_) => {
                StatusCode::BAD_REQUEST
            },
            Self::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structure for detailed error responses.
#[derive(Debug, PartialEq, Serialize)]
pub struct ResponseError {
    r#type: Option<String>,
    title: String,
    status: u16,
    detail: String,
    instance: Option<String>,
    errors: Option<Vec<FieldError>>,
}

impl ResponseError {
    /// Update error status code.
    pub fn status(mut self, code: StatusCode) -> Self {
        self.status = code.as_u16();
        self
    }

    /// Update `title` field.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    /// Add detailed error.
    pub fn details(mut self, description: &str) -> Self {
        self.detail = description.into();
        self
    }

    /// Update `type` field.
    pub fn kind(mut self, kind: &str) -> Self {
        self.r#type = Some(kind.into());
        self
    }

    /// Attach an error on a single field.
    pub fn field(mut self, field: &str, message: &str) -> Self {
        self.errors.get_or_insert_with(Vec::new).push(FieldError {
            field: field.into(),
            message: message.into(),
        });
        self
    }
}

impl Default for ResponseError {
    fn default() -> Self {
        Self {
            r#type: None,
            title: "Internal server error.".to_owned(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            detail: String::default(),
            instance: None,
            errors: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
struct FieldError {
    field: String,
    message: String,
}

impl From<&HttpError> for ResponseError {
    fn from(err: &HttpError) -> Self {
        let response = ResponseError::default()
            .kind(err.kind())
            .status(err.status());

        match err {
            HttpError::MissingParam(field) | HttpError::InvalidParam(field) => {
                response
                    .title("There were validation errors with your request.")
                    .details(&err.to_string())
                    .field(field, &err.to_string())
            },
            HttpError::Server => response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages() {
        assert_eq!(HttpError::missing("name").to_string(), "Missing param: name");
        assert_eq!(
            HttpError::invalid("email").to_string(),
            "Invalid param: email"
        );
        assert_eq!(HttpError::Server.to_string(), "Internal server error");
    }

    #[test]
    fn test_status_and_field() {
        assert_eq!(HttpError::missing("email").status(), StatusCode::BAD_REQUEST);
        assert_eq!(HttpError::invalid("email").field(), Some("email"));
        assert_eq!(
            HttpError::Server.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(HttpError::Server.field(), None);
    }

    #[test]
    fn test_validation_problem_body() {
        let body =
            serde_json::to_value(ResponseError::from(&HttpError::missing("name")))
                .unwrap();

        assert_eq!(
            body,
            json!({
                "type": "MissingParamError",
                "title": "There were validation errors with your request.",
                "status": 400,
                "detail": "Missing param: name",
                "instance": null,
                "errors": [{ "field": "name", "message": "Missing param: name" }],
            })
        );
    }

    #[test]
    fn test_server_problem_body_has_no_detail() {
        let body = serde_json::to_value(ResponseError::from(&HttpError::Server))
            .unwrap();

        assert_eq!(body["status"], 500);
        assert_eq!(body["detail"], "");
        assert_eq!(body["errors"], serde_json::Value::Null);
    }
}
