use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::errors::AssetError;
use crate::NativeCurrency;

/// Lamport balances keyed by account
#[derive(Clone, Debug, Default)]
pub struct NativeBank {
    lamports: BTreeMap<Pubkey, u64>,
}

impl NativeBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` lamports out of thin air (test validators and local hosts)
    pub fn airdrop(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        let balance = self
            .balance(to)
            .checked_add(amount)
            .ok_or(AssetError::BalanceOverflow)?;
        self.lamports.insert(*to, balance);
        Ok(())
    }
}

impl NativeCurrency for NativeBank {
    fn balance(&self, account: &Pubkey) -> u64 {
        self.lamports.get(account).copied().unwrap_or(0)
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let from_balance = self.balance(from);
        require_gte!(from_balance, amount, AssetError::InsufficientLamports);

        if from == to {
            return Ok(());
        }

        let to_balance = self
            .balance(to)
            .checked_add(amount)
            .ok_or(AssetError::BalanceOverflow)?;
        self.lamports.insert(*from, from_balance - amount);
        self.lamports.insert(*to, to_balance);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamport_transfer() {
        let alice = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let mut bank = NativeBank::new();
        bank.airdrop(&alice, 5_000_000_000_000_000).unwrap();

        bank.transfer(&alice, &vault, 5_000_000_000_000_000).unwrap();

        assert_eq!(bank.balance(&alice), 0);
        assert_eq!(bank.balance(&vault), 5_000_000_000_000_000);
    }

    #[test]
    fn test_insufficient_lamports() {
        let alice = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let mut bank = NativeBank::new();
        bank.airdrop(&alice, 1).unwrap();

        let err = bank.transfer(&alice, &vault, 2).unwrap_err();
        assert_eq!(err, AssetError::InsufficientLamports.into());
        assert_eq!(bank.balance(&alice), 1);
    }

    #[test]
    fn test_airdrop_overflow() {
        let alice = Pubkey::new_unique();
        let mut bank = NativeBank::new();
        bank.airdrop(&alice, u64::MAX).unwrap();

        let err = bank.airdrop(&alice, 1).unwrap_err();
        assert_eq!(err, AssetError::BalanceOverflow.into());
    }
}
