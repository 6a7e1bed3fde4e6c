use uuid::Uuid;

use super::StatementEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub cpf: String,
    pub statement: Vec<StatementEntry>,
    pub created_at: String,
    pub updated_at: String,
}

/// Identity of the account a request was resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountHolder {
    pub id: Uuid,
    pub cpf: String,
}
