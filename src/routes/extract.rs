use axum::extract::FromRequest;

use crate::models::Error;

/// `axum::Json` whose rejections render as `{"error": "..."}` like every
/// other failure
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);
