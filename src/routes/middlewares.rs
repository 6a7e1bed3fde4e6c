use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{models::Error, AppState};

/// Header a client uses to say which account it is acting on
pub const CPF_HEADER: &str = "cpf";

pub fn cpf_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(CPF_HEADER).and_then(|value| value.to_str().ok())
}

/// Resolves the `cpf` header to an account and hands its identity to the
/// handler as an `AccountHolder` extension. Unknown or missing cpf stops the
/// request with 401.
pub async fn cpf_guard(
    State(state): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Error> {
    let cpf = cpf_header(req.headers()).map(str::to_owned);

    let holder = match cpf {
        Some(cpf) => state.store.resolve(&cpf).await,
        None => None,
    };

    let Some(holder) = holder else {
        debug!("Rejected {} {}: account not found", req.method(), req.uri());
        return Err(Error::account_not_found(StatusCode::UNAUTHORIZED));
    };

    req.extensions_mut().insert(holder);
    Ok(next.run(req).await)
}
