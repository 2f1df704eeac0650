use std::io::{self, Write};

use rust_decimal_macros::dec;

use acctsim_core::{Account, BalanceSummary, CurrentAccount, SavingsAccount};

use crate::teller::Teller;

/// Accounts as they stand once the scenario has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioAccounts {
    pub savings: SavingsAccount,
    pub current: CurrentAccount,
}

impl ScenarioAccounts {
    pub fn summary(&self) -> BalanceSummary {
        BalanceSummary::from_accounts(&[&self.savings, &self.current])
    }
}

/// Runs the fixed demonstration: display, deposit and withdraw, transfer.
pub fn run<W: Write>(teller: &mut Teller<W>) -> io::Result<ScenarioAccounts> {
    let mut savings = SavingsAccount::new("S123", "John Doe", dec!(1000), dec!(0.02));
    let mut current = CurrentAccount::new("C456", "Jane Doe", dec!(2000), dec!(500));

    teller.show(&savings)?;
    teller.show(&current)?;

    teller.deposit(&mut savings, dec!(500))?;
    teller.withdraw(&mut current, dec!(1000))?;

    teller.announce("Account Details after deposit and withdrawal:")?;
    teller.show(&savings)?;
    teller.show(&current)?;

    let updated = teller.transfer(&mut current, &mut savings)?;
    tracing::debug!(balance = %updated.balance(), "Current account after transfer");

    teller.announce("Account Details after transfer:")?;
    teller.show(&savings)?;
    teller.show(&current)?;

    Ok(ScenarioAccounts { savings, current })
}
