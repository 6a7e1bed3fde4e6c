use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    middleware,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use tracing::{debug, info, warn};
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{
            NewStatementEntry, StatementByDateResponse, StatementDateFilter, StatementResponse,
            WithdrawResponse,
        },
        AccountHolder, Error, StatementEntry,
    },
    store::LedgerError,
    AppState,
};

use super::extract::JsonBody;
use super::middlewares::{cpf_guard, cpf_header};

/// Defines the OpenAPI document for statement endpoints
#[derive(OpenApi)]
#[openapi(paths(
    get_statement_handler,
    get_statement_by_date_handler,
    deposit_handler,
    withdraw_handler,
    delete_statement_entry_handler
))]
pub struct StatementApi;

/// Used to group statement endpoints together in the OpenAPI documentation
pub const STATEMENT_API_GROUP: &str = "STATEMENT";

/// Builds a router for statement routes. Everything but delete sits behind
/// the cpf guard; delete resolves the account on its own.
pub fn statement_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let guarded = Router::new()
        .route(
            "/statement",
            get(get_statement_handler).post(get_statement_by_date_handler),
        )
        .route("/statement/deposit", post(deposit_handler))
        .route("/statement/withdraw", post(withdraw_handler))
        .route_layer(middleware::from_fn_with_state(state, cpf_guard));

    Router::new()
        .route(
            "/statement/delete/:id",
            delete(delete_statement_entry_handler),
        )
        .merge(guarded)
}

/// Reads answer a vanished account the same way the guard does
fn read_error(error: LedgerError) -> Error {
    match error {
        LedgerError::AccountNotFound => Error::account_not_found(StatusCode::UNAUTHORIZED),
        other => Error::from(other),
    }
}

/// Get statement handler function
#[utoipa::path(
    get,
    path = "/account/statement",
    tag = STATEMENT_API_GROUP,
    params(
        ("cpf" = String, Header, description = "CPF of the account")
    ),
    responses(
        (status = 200, description = "Full statement and balance", body = StatementResponse),
        (status = 401, description = "Account not found", body = crate::models::dto::ErrorMessage),
    )
)]
pub async fn get_statement_handler(
    State(state): State<Arc<AppState>>,
    Extension(holder): Extension<AccountHolder>,
) -> Result<Json<StatementResponse>, Error> {
    let (statement, total) = state.store.statement(&holder.cpf).await.map_err(read_error)?;

    Ok(Json(StatementResponse { statement, total }))
}

/// Get statement by date handler function
#[utoipa::path(
    post,
    path = "/account/statement",
    tag = STATEMENT_API_GROUP,
    request_body = StatementDateFilter,
    params(
        ("cpf" = String, Header, description = "CPF of the account")
    ),
    responses(
        (status = 200, description = "Entries of that day and the balance of the whole statement", body = StatementByDateResponse),
        (status = 401, description = "Account not found", body = crate::models::dto::ErrorMessage),
    )
)]
pub async fn get_statement_by_date_handler(
    State(state): State<Arc<AppState>>,
    Extension(holder): Extension<AccountHolder>,
    JsonBody(body): JsonBody<StatementDateFilter>,
) -> Result<Json<StatementByDateResponse>, Error> {
    let (statements, total) = state
        .store
        .statement_by_date(&holder.cpf, &body.date)
        .await
        .map_err(read_error)?;

    Ok(Json(StatementByDateResponse { statements, total }))
}

/// Deposit handler function
#[utoipa::path(
    post,
    path = "/account/statement/deposit",
    tag = STATEMENT_API_GROUP,
    request_body = NewStatementEntry,
    params(
        ("cpf" = String, Header, description = "CPF of the account")
    ),
    responses(
        (status = 200, description = "Entry appended", body = StatementEntry),
        (status = 400, description = "Account not found", body = crate::models::dto::ErrorMessage),
        (status = 401, description = "Account not found", body = crate::models::dto::ErrorMessage),
    )
)]
pub async fn deposit_handler(
    State(state): State<Arc<AppState>>,
    Extension(holder): Extension<AccountHolder>,
    JsonBody(body): JsonBody<NewStatementEntry>,
) -> Result<Json<StatementEntry>, Error> {
    let entry = state
        .store
        .deposit(&holder.cpf, body.kind, body.amount)
        .await?;

    info!(
        "Account {}: {:?} of {} recorded",
        holder.id, entry.kind, entry.amount
    );
    Ok(Json(entry))
}

/// Withdraw handler function
#[utoipa::path(
    post,
    path = "/account/statement/withdraw",
    tag = STATEMENT_API_GROUP,
    request_body = NewStatementEntry,
    params(
        ("cpf" = String, Header, description = "CPF of the account")
    ),
    responses(
        (status = 200, description = "Entry appended", body = WithdrawResponse),
        (status = 400, description = "Account not found or not enough balance", body = crate::models::dto::ErrorMessage),
        (status = 401, description = "Account not found", body = crate::models::dto::ErrorMessage),
    )
)]
pub async fn withdraw_handler(
    State(state): State<Arc<AppState>>,
    Extension(holder): Extension<AccountHolder>,
    JsonBody(body): JsonBody<NewStatementEntry>,
) -> Result<Json<WithdrawResponse>, Error> {
    let (new_statement, total) = state
        .store
        .withdraw(&holder.cpf, body.kind, body.amount)
        .await
        .map_err(|error| {
            warn!("Account {}: withdrawal of {} refused: {error}", holder.id, body.amount);
            Error::from(error)
        })?;

    info!(
        "Account {}: withdrawal of {} recorded, balance {}",
        holder.id, new_statement.amount, total
    );
    Ok(Json(WithdrawResponse {
        new_statement,
        total,
    }))
}

/// Delete statement entry handler function
#[utoipa::path(
    delete,
    path = "/account/statement/delete/{id}",
    tag = STATEMENT_API_GROUP,
    params(
        ("id" = String, Path, description = "Statement entry ID"),
        ("cpf" = String, Header, description = "CPF of the account")
    ),
    responses(
        (status = 200, description = "Entry removed, or there was no such entry"),
        (status = 400, description = "Account not found", body = crate::models::dto::ErrorMessage),
    )
)]
pub async fn delete_statement_entry_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, Error> {
    let cpf = cpf_header(&headers).ok_or_else(|| Error::account_not_found(StatusCode::BAD_REQUEST))?;

    if state.store.delete_statement_entry(cpf, &id).await? {
        info!("Statement entry {id} deleted");
    } else {
        debug!("Statement entry {id} not found, nothing deleted");
    }

    Ok(StatusCode::OK)
}
