use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Account, StatementEntry};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    #[schema(example = "12345678900")]
    pub cpf: String,
}

/// The full account, as stored. The password is echoed back in plaintext.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Uuid,
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub statement: Vec<StatementEntry>,
    pub password: String,
    #[schema(example = "19/10/2026")]
    pub created_at: String,
    #[schema(example = "19/10/2026")]
    pub updated_at: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            cpf: account.cpf,
            name: account.name,
            email: account.email,
            statement: account.statement,
            password: account.password,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
