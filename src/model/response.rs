use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::account::AccountModel;
use super::error::{HttpError, ResponseError};

/// Outcome of a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: HttpBody,
}

/// Either an error value or the created account.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpBody {
    Error(HttpError),
    Account(AccountModel),
}

impl HttpResponse {
    /// `400 Bad Request` carrying a client error.
    pub fn bad_request(error: HttpError) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST.as_u16(),
            body: HttpBody::Error(error),
        }
    }

    /// `500 Internal Server Error` with an opaque body.
    pub fn server_error() -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            body: HttpBody::Error(HttpError::Server),
        }
    }

    /// `200 OK` with the created account.
    pub fn ok(account: AccountModel) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            body: HttpBody::Account(account),
        }
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.body {
            HttpBody::Account(account) => (status, Json(account)).into_response(),
            HttpBody::Error(err) => {
                (status, Json(ResponseError::from(&err))).into_response()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use http_body_util::BodyExt;

    #[test]
    fn test_helpers() {
        let response = HttpResponse::bad_request(HttpError::missing("name"));
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, HttpBody::Error(HttpError::missing("name")));

        let response = HttpResponse::server_error();
        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, HttpBody::Error(HttpError::Server));

        let response = HttpResponse::ok(AccountModel::default());
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, HttpBody::Account(AccountModel::default()));
    }

    #[tokio::test]
    async fn test_account_into_response() {
        let account = AccountModel {
            id: "valid_id".into(),
            name: "valid_name".into(),
            email: "valid_email@example.com".into(),
            password: "valid_password".into(),
        };

        let response = HttpResponse::ok(account.clone()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: AccountModel = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, account);
    }

    #[tokio::test]
    async fn test_server_error_into_response() {
        let response = HttpResponse::server_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["type"], "ServerError");
        assert_eq!(body["title"], "Internal server error.");
    }
}
