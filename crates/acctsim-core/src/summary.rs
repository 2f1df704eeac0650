use std::{fmt::Display, sync::Arc};

use prettytable::{row, Table};
use rust_decimal::Decimal;

use crate::{account::Account, format::Money};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub number: Arc<str>,
    pub account_type: &'static str,
    pub holder: Arc<str>,
    pub balance: Decimal,
}

/// Closing balances of a set of accounts, rendered as a table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BalanceSummary {
    rows: Vec<SummaryRow>,
}

impl BalanceSummary {
    pub fn from_accounts(accounts: &[&dyn Account]) -> Self {
        let rows = accounts
            .iter()
            .map(|account| SummaryRow {
                number: Arc::from(account.number()),
                account_type: account.account_type(),
                holder: Arc::from(account.holder()),
                balance: account.balance(),
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn total(&self) -> Decimal {
        self.rows.iter().map(|r| r.balance).sum()
    }
}

impl Display for BalanceSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut table = Table::new();
        table.add_row(row!["Account", "Type", "Holder", "Balance"]);
        table.add_empty_row();

        for item in &self.rows {
            table.add_row(row![item.number, item.account_type, item.holder, Money(item.balance)]);
        }

        table.add_empty_row();
        table.add_row(row!["Total", "", "", Money(self.total())]);

        write!(f, "\n{}\n", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CurrentAccount, SavingsAccount};
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_rows_follow_input_order() {
        let savings = SavingsAccount::new("S123", "John Doe", dec!(1200), dec!(0.02));
        let current = CurrentAccount::new("C456", "Jane Doe", dec!(1300), dec!(500));
        let summary = BalanceSummary::from_accounts(&[&savings, &current]);

        assert_eq!(summary.rows().len(), 2);
        assert_eq!(&*summary.rows()[0].number, "S123");
        assert_eq!(summary.rows()[0].account_type, "Savings Account");
        assert_eq!(&*summary.rows()[1].holder, "Jane Doe");
        assert_eq!(summary.total(), dec!(2500));
    }

    #[test]
    fn test_summary_table_contains_balances() {
        let current = CurrentAccount::new("C456", "Jane Doe", dec!(-20), dec!(500));
        let text = BalanceSummary::from_accounts(&[&current]).to_string();
        assert!(text.contains("Current Account"));
        assert!(text.contains("$-20.00"));
        assert!(text.contains("Total"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = BalanceSummary::from_accounts(&[]);
        assert!(summary.rows().is_empty());
        assert_eq!(summary.total(), Decimal::ZERO);
    }
}
