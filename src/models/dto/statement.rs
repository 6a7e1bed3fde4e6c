use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{EntryKind, StatementEntry};

/// Body of deposit and withdraw requests
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewStatementEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub amount: f64,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct StatementDateFilter {
    #[schema(example = "19/10/2026")]
    pub date: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct StatementResponse {
    pub statement: Vec<StatementEntry>,
    pub total: f64,
}

/// Entries recorded on one day. `total` is the balance of the whole statement.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct StatementByDateResponse {
    pub statements: Vec<StatementEntry>,
    pub total: f64,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawResponse {
    pub new_statement: StatementEntry,
    pub total: f64,
}
