use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Direction of a statement entry
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Credit,
    Debit,
}

/// A single credit or debit attached to an account. Entries are never
/// edited once appended.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, ToSchema)]
pub struct StatementEntry {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub amount: f64,
    #[schema(example = "19/10/2026")]
    pub date: String,
}

/// Sum of credits minus sum of debits, folded in statement order.
pub fn balance(statement: &[StatementEntry]) -> f64 {
    statement.iter().fold(0.0, |total, entry| match entry.kind {
        EntryKind::Credit => total + entry.amount,
        EntryKind::Debit => total - entry.amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: EntryKind, amount: f64) -> StatementEntry {
        StatementEntry {
            id: Uuid::new_v4(),
            kind,
            amount,
            date: "01/01/2024".to_string(),
        }
    }

    #[test]
    fn empty_statement_has_zero_balance() {
        assert_eq!(balance(&[]), 0.0);
    }

    #[test]
    fn credits_add_and_debits_subtract() {
        let statement = vec![
            entry(EntryKind::Credit, 100.0),
            entry(EntryKind::Debit, 40.0),
            entry(EntryKind::Credit, 15.5),
        ];
        assert_eq!(balance(&statement), 75.5);
    }

    #[test]
    fn debits_alone_go_negative() {
        let statement = vec![entry(EntryKind::Debit, 10.0)];
        assert_eq!(balance(&statement), -10.0);
    }

    #[test]
    fn kind_uses_lowercase_wire_names() {
        let json = serde_json::to_value(entry(EntryKind::Debit, 1.0)).unwrap();
        assert_eq!(json["type"], "debit");
        let kind: EntryKind = serde_json::from_str("\"credit\"").unwrap();
        assert_eq!(kind, EntryKind::Credit);
    }
}
