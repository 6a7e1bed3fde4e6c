use std::collections::HashMap;

use chrono::Local;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{balance, Account, AccountHolder, EntryKind, StatementEntry};

/// Renders "today" the way accounts and entries are stamped
pub type Clock = fn() -> String;

/// Short `pt-BR` date, e.g. `19/10/2026`
pub fn today() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account email or cpf already exists")]
    DuplicateAccount,

    #[error("Account not found")]
    AccountNotFound,

    #[error("You don't have enough balance")]
    InsufficientBalance,
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Default)]
struct Accounts {
    /// Creation order, which is also listing order
    rows: Vec<Account>,
    by_cpf: HashMap<String, usize>,
}

impl Accounts {
    fn find(&self, cpf: &str) -> Option<&Account> {
        self.by_cpf.get(cpf).map(|&index| &self.rows[index])
    }

    fn find_mut(&mut self, cpf: &str) -> Result<&mut Account> {
        let index = *self.by_cpf.get(cpf).ok_or(LedgerError::AccountNotFound)?;
        Ok(&mut self.rows[index])
    }
}

/// In-memory account table. One instance is owned by the application state;
/// nothing survives a restart.
pub struct LedgerStore {
    accounts: RwLock<Accounts>,
    clock: Clock,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::with_clock(today)
    }

    pub fn with_clock(clock: Clock) -> Self {
        LedgerStore {
            accounts: RwLock::new(Accounts::default()),
            clock,
        }
    }

    /// Open an account with an empty statement. Fails when either the email
    /// or the cpf is already taken.
    pub async fn create_account(
        &self,
        name: String,
        email: String,
        password: String,
        cpf: String,
    ) -> Result<Account> {
        let mut accounts = self.accounts.write().await;

        let email_taken = accounts.rows.iter().any(|account| account.email == email);
        if email_taken || accounts.by_cpf.contains_key(&cpf) {
            return Err(LedgerError::DuplicateAccount);
        }

        // updated_at is stamped once here and never touched again
        let today = (self.clock)();
        let account = Account {
            id: Uuid::new_v4(),
            name,
            email,
            password,
            cpf,
            statement: Vec::new(),
            created_at: today.clone(),
            updated_at: today,
        };

        let index = accounts.rows.len();
        accounts.by_cpf.insert(account.cpf.clone(), index);
        accounts.rows.push(account.clone());

        Ok(account)
    }

    pub async fn list_accounts(&self) -> Vec<Account> {
        self.accounts.read().await.rows.clone()
    }

    /// Who `cpf` belongs to, if anyone
    pub async fn resolve(&self, cpf: &str) -> Option<AccountHolder> {
        self.accounts.read().await.find(cpf).map(|account| AccountHolder {
            id: account.id,
            cpf: account.cpf.clone(),
        })
    }

    /// The full statement and its balance
    pub async fn statement(&self, cpf: &str) -> Result<(Vec<StatementEntry>, f64)> {
        let accounts = self.accounts.read().await;
        let account = accounts.find(cpf).ok_or(LedgerError::AccountNotFound)?;

        Ok((account.statement.clone(), balance(&account.statement)))
    }

    /// Entries whose date string equals `date` exactly. The balance returned
    /// is over the whole statement, not the filtered entries.
    pub async fn statement_by_date(
        &self,
        cpf: &str,
        date: &str,
    ) -> Result<(Vec<StatementEntry>, f64)> {
        let accounts = self.accounts.read().await;
        let account = accounts.find(cpf).ok_or(LedgerError::AccountNotFound)?;

        let entries = account
            .statement
            .iter()
            .filter(|entry| entry.date == date)
            .cloned()
            .collect();

        Ok((entries, balance(&account.statement)))
    }

    /// Append an entry of whatever kind the caller asked for.
    pub async fn deposit(&self, cpf: &str, kind: EntryKind, amount: f64) -> Result<StatementEntry> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.find_mut(cpf)?;

        let entry = self.new_entry(kind, amount);
        account.statement.push(entry.clone());

        Ok(entry)
    }

    /// Append an entry if the current balance covers `amount`, returning it
    /// with the new balance. The check and the append happen under one lock.
    pub async fn withdraw(
        &self,
        cpf: &str,
        kind: EntryKind,
        amount: f64,
    ) -> Result<(StatementEntry, f64)> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.find_mut(cpf)?;

        if balance(&account.statement) < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        let entry = self.new_entry(kind, amount);
        account.statement.push(entry.clone());

        Ok((entry, balance(&account.statement)))
    }

    /// Remove the entry whose id renders exactly as `entry_id`. An unknown id
    /// leaves the statement untouched and reports `false`.
    pub async fn delete_statement_entry(&self, cpf: &str, entry_id: &str) -> Result<bool> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.find_mut(cpf)?;

        let position = account
            .statement
            .iter()
            .position(|entry| entry.id.to_string() == entry_id);

        match position {
            Some(index) => {
                account.statement.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn new_entry(&self, kind: EntryKind, amount: f64) -> StatementEntry {
        StatementEntry {
            id: Uuid::new_v4(),
            kind,
            amount,
            date: (self.clock)(),
        }
    }
}
