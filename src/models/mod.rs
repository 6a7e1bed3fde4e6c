pub mod account;
pub mod dto;
pub mod error;
pub mod statement;
pub use account::{Account, AccountHolder};
pub use error::Error;
pub use statement::{balance, EntryKind, StatementEntry};
