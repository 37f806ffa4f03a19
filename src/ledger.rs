use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::record::{Transaction, TransactionType};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub amount: Decimal,
    pub kind: TransactionType,
}

#[derive(Debug, Default)]
pub struct Account {
    pub balance: Decimal,
    pub history: Vec<Entry>,
}

/// Per-customer balances and histories, folded from accepted records in
/// arrival order, plus the run-wide totals behind the average.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
    order: Vec<String>,
    count: u64,
    total: Decimal,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, tx: Transaction) {
        if !self.accounts.contains_key(&tx.customer_id) {
            self.order.push(tx.customer_id.clone());
        }
        let account = self.accounts.entry(tx.customer_id).or_default();

        match tx.kind {
            TransactionType::Deposit => account.balance += tx.amount,
            TransactionType::Withdraw => account.balance -= tx.amount,
        }
        account.history.push(Entry {
            amount: tx.amount,
            kind: tx.kind,
        });

        // Withdrawals count their magnitude into the total as well; the
        // average reports transaction size, not net flow.
        self.count += 1;
        self.total += tx.amount;
    }

    /// Accounts in first-appearance order.
    pub fn accounts(&self) -> impl Iterator<Item = (&str, &Account)> {
        self.order.iter().map(|id| (id.as_str(), &self.accounts[id]))
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn average(&self) -> Option<Decimal> {
        (self.count > 0).then(|| self.total / Decimal::from(self.count))
    }
}
