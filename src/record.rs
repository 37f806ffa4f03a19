use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

/// A row exactly as it came off the input source, before any validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Vec<String>);

impl RawRecord {
    pub fn fields(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Deposit,
    Withdraw,
}

impl TransactionType {
    /// Exact, case-sensitive match on the wire spelling.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "deposit" => Some(Self::Deposit),
            "withdraw" => Some(Self::Withdraw),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
        })
    }
}

/// A record that passed validation, with typed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub customer_id: String,
    pub kind: TransactionType,
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_wire_spellings() {
        assert_eq!(
            TransactionType::parse("deposit"),
            Some(TransactionType::Deposit)
        );
        assert_eq!(
            TransactionType::parse("withdraw"),
            Some(TransactionType::Withdraw)
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(TransactionType::parse("Deposit"), None);
        assert_eq!(TransactionType::parse("WITHDRAW"), None);
        assert_eq!(TransactionType::parse("transfer"), None);
        assert_eq!(TransactionType::parse(""), None);
    }

    #[test]
    fn display_capitalizes() {
        assert_eq!(TransactionType::Deposit.to_string(), "Deposit");
        assert_eq!(TransactionType::Withdraw.to_string(), "Withdraw");
    }
}
