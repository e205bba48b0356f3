use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn value(&self) -> &str {
        match *self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<String> for TransactionKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("unknown transaction kind: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_column_value() {
        assert_eq!(
            TransactionKind::try_from("income".to_string()),
            Ok(TransactionKind::Income)
        );
        assert_eq!(
            TransactionKind::try_from("expense".to_string()),
            Ok(TransactionKind::Expense)
        );
        assert!(TransactionKind::try_from("transfer".to_string()).is_err());
    }

    #[test]
    fn test_kind_defaults_to_expense() {
        assert_eq!(TransactionKind::default(), TransactionKind::Expense);
        assert_eq!(
            serde_json::from_str::<TransactionKind>("\"income\"").unwrap(),
            TransactionKind::Income
        );
        assert!(serde_json::from_str::<TransactionKind>("\"Income\"").is_err());
    }
}
