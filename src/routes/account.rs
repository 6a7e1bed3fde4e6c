use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{AccountResponse, NewAccount},
        Error,
    },
    AppState,
};

use super::extract::JsonBody;
use super::statement::statement_routes;

/// Defines the OpenAPI document for account endpoints
#[derive(OpenApi)]
#[openapi(paths(create_account_handler, list_accounts_handler))]
pub struct AccountsApi;

/// Used to group account endpoints together in the OpenAPI documentation
pub const ACCOUNT_API_GROUP: &str = "ACCOUNT";

/// Builds a router for account routes, statement routes included
pub fn account_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(create_account_handler))
        .route("/", get(list_accounts_handler))
        .merge(statement_routes(state))
}

/// Create account handler function
#[utoipa::path(
    post,
    path = "/account/create",
    tag = ACCOUNT_API_GROUP,
    request_body = NewAccount,
    responses(
        (status = 200, description = "Account successfully created", body = AccountResponse),
        (status = 400, description = "Email or cpf already in use", body = crate::models::dto::ErrorMessage),
    )
)]
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<NewAccount>,
) -> Result<Json<AccountResponse>, Error> {
    let account = state
        .store
        .create_account(body.name, body.email, body.password, body.cpf)
        .await
        .map_err(|error| {
            warn!("Account creation rejected: {error}");
            Error::from(error)
        })?;

    info!("Account {} created", account.id);
    Ok(Json(AccountResponse::from(account)))
}

/// List accounts handler function
#[utoipa::path(
    get,
    path = "/account",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Every account, in creation order", body = [AccountResponse]),
    )
)]
pub async fn list_accounts_handler(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<Vec<AccountResponse>>) {
    let accounts = state
        .store
        .list_accounts()
        .await
        .into_iter()
        .map(AccountResponse::from)
        .collect();

    (StatusCode::OK, Json(accounts))
}
