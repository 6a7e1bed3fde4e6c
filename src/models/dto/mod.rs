pub mod account;
pub mod message;
pub mod statement;
pub use account::*;
pub use message::{ErrorMessage, Message};
pub use statement::*;

use utoipa::OpenApi;

use crate::models::{EntryKind, StatementEntry};

#[derive(OpenApi)]
#[openapi(components(schemas(
    Message,
    ErrorMessage,
    NewAccount,
    AccountResponse,
    EntryKind,
    StatementEntry,
    NewStatementEntry,
    StatementDateFilter,
    StatementResponse,
    StatementByDateResponse,
    WithdrawResponse,
)))]
/// Captures OpenAPI schemas defined in the DTO module
pub struct OpenApiSchemas;
