use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use super::dto::ErrorMessage;
use crate::store::LedgerError;

pub const ACCOUNT_NOT_FOUND: &str = "Account not found";

/// An HTTP failure rendered as `{"error": "..."}`
#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<ErrorMessage>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(ErrorMessage::new(message)),
        }
    }

    pub fn account_not_found(code: StatusCode) -> Self {
        Self::new(code, ACCOUNT_NOT_FOUND)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

/// Malformed or incomplete request bodies keep axum's status and message
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), &rejection.body_text())
    }
}

/// Every ledger failure is a client error unless the endpoint says otherwise;
/// the statement reads answer a missing account with 401 themselves.
impl From<LedgerError> for Error {
    fn from(error: LedgerError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, &error.to_string())
    }
}
