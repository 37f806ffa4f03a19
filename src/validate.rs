use std::fmt;

use rust_decimal::Decimal;

use crate::record::{Transaction, TransactionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    ColumnCount,
    InvalidType,
    NonNumericAmount,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ColumnCount => "Row does not have exactly three columns.",
            Self::InvalidType => "Not a valid transaction type.",
            Self::NonNumericAmount => "Non-numeric transaction amount.",
        })
    }
}

/// A row that failed validation, kept verbatim for the report.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub fields: Vec<String>,
    pub reasons: Vec<RejectReason>,
}

impl Rejection {
    pub fn reason_text(&self) -> String {
        self.reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Classifies one raw row. A row without exactly three fields is rejected
/// outright; otherwise the type and amount checks both run so a rejection
/// carries every applicable reason, in check order.
pub fn validate(fields: &[String]) -> Result<Transaction, Rejection> {
    if fields.len() != 3 {
        return Err(Rejection {
            fields: fields.to_vec(),
            reasons: vec![RejectReason::ColumnCount],
        });
    }

    let mut reasons = Vec::new();

    let kind = TransactionType::parse(&fields[1]);
    if kind.is_none() {
        reasons.push(RejectReason::InvalidType);
    }

    let amount = fields[2].parse::<Decimal>().ok();
    if amount.is_none() {
        reasons.push(RejectReason::NonNumericAmount);
    }

    match (kind, amount) {
        (Some(kind), Some(amount)) => Ok(Transaction {
            customer_id: fields[0].clone(),
            kind,
            amount,
        }),
        _ => Err(Rejection {
            fields: fields.to_vec(),
            reasons,
        }),
    }
}
