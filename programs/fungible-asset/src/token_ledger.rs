use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::errors::AssetError;
use crate::{FungibleAsset, UNLIMITED_ALLOWANCE};

/// In-memory token ledger with ERC20 transfer semantics
///
/// Used as the STC V1 / STC V2 asset by hosts that do not bring their own
/// token implementation, and by tests.
#[derive(Clone, Debug)]
pub struct TokenLedger {
    mint: Pubkey,
    name: String,
    symbol: String,
    decimals: u8,
    total_supply: u128,
    balances: BTreeMap<Pubkey, u128>,
    allowances: BTreeMap<(Pubkey, Pubkey), u128>,
}

impl TokenLedger {
    pub fn new(mint: Pubkey, name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            mint,
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            total_supply: 0,
            balances: BTreeMap::new(),
            allowances: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// Issue new units to `to`
    pub fn mint_to(&mut self, to: &Pubkey, amount: u128) -> Result<()> {
        require_keys_neq!(*to, Pubkey::default(), AssetError::InvalidRecipient);

        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(AssetError::SupplyOverflow)?;
        // Every balance is bounded by the supply
        let balance = self.balance_of(to) + amount;

        self.total_supply = supply;
        self.set_balance(to, balance);

        emit!(Transfer {
            mint: self.mint,
            from: Pubkey::default(),
            to: *to,
            amount,
        });

        Ok(())
    }

    /// Set the allowance of `spender` over `owner`'s balance
    pub fn approve(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u128) -> Result<()> {
        require_keys_neq!(*spender, Pubkey::default(), AssetError::InvalidSpender);

        if amount == 0 {
            self.allowances.remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), amount);
        }

        emit!(Approval {
            mint: self.mint,
            owner: *owner,
            spender: *spender,
            amount,
        });

        Ok(())
    }

    fn set_balance(&mut self, account: &Pubkey, amount: u128) {
        if amount == 0 {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, amount);
        }
    }

    fn move_balance(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        require_keys_neq!(*to, Pubkey::default(), AssetError::InvalidRecipient);

        let from_balance = self.balance_of(from);
        require_gte!(from_balance, amount, AssetError::InsufficientBalance);

        if from != to {
            let to_balance = self
                .balance_of(to)
                .checked_add(amount)
                .ok_or(AssetError::BalanceOverflow)?;
            self.set_balance(from, from_balance - amount);
            self.set_balance(to, to_balance);
        }

        emit!(Transfer {
            mint: self.mint,
            from: *from,
            to: *to,
            amount,
        });

        Ok(())
    }
}

impl FungibleAsset for TokenLedger {
    fn key(&self) -> Pubkey {
        self.mint
    }

    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn balance_of(&self, account: &Pubkey) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u128 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    fn transfer(&mut self, authority: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        self.move_balance(authority, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<()> {
        let allowance = self.allowance(from, spender);
        require_gte!(allowance, amount, AssetError::InsufficientAllowance);

        self.move_balance(from, to, amount)?;

        if allowance != UNLIMITED_ALLOWANCE {
            let remaining = allowance - amount;
            if remaining == 0 {
                self.allowances.remove(&(*from, *spender));
            } else {
                self.allowances.insert((*from, *spender), remaining);
            }
        }

        Ok(())
    }

    fn revert_transfer_from(
        &mut self,
        spender: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<()> {
        self.move_balance(to, from, amount)?;

        let allowance = self.allowance(from, spender);
        if allowance != UNLIMITED_ALLOWANCE && amount > 0 {
            let restored = allowance.saturating_add(amount);
            self.allowances.insert((*from, *spender), restored);

            emit!(Approval {
                mint: self.mint,
                owner: *from,
                spender: *spender,
                amount: restored,
            });
        }

        Ok(())
    }
}

/// Emitted on every balance movement (mints use the zero address as `from`)
#[event]
pub struct Transfer {
    pub mint: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u128,
}

#[event]
pub struct Approval {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(holder: &Pubkey, amount: u128) -> TokenLedger {
        let mut ledger = TokenLedger::new(Pubkey::new_unique(), "STC V1", "STC", 2);
        ledger.mint_to(holder, amount).unwrap();
        ledger
    }

    #[test]
    fn test_transfer_moves_balance() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut ledger = ledger_with(&alice, 1_000);

        ledger.transfer(&alice, &bob, 400).unwrap();

        assert_eq!(ledger.balance_of(&alice), 600);
        assert_eq!(ledger.balance_of(&bob), 400);
        assert_eq!(ledger.total_supply(), 1_000);
    }

    #[test]
    fn test_transfer_exceeding_balance_fails() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut ledger = ledger_with(&alice, 10);

        let err = ledger.transfer(&alice, &bob, 11).unwrap_err();
        assert_eq!(err, AssetError::InsufficientBalance.into());
        assert_eq!(ledger.balance_of(&alice), 10);
        assert_eq!(ledger.balance_of(&bob), 0);
    }

    #[test]
    fn test_transfer_to_zero_address_rejected() {
        let alice = Pubkey::new_unique();
        let mut ledger = ledger_with(&alice, 10);

        let err = ledger.transfer(&alice, &Pubkey::default(), 1).unwrap_err();
        assert_eq!(err, AssetError::InvalidRecipient.into());
    }

    #[test]
    fn test_zero_amount_transfer_allowed() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut ledger = TokenLedger::new(Pubkey::new_unique(), "STC V2", "STC", 18);

        ledger.transfer(&alice, &bob, 0).unwrap();
        assert_eq!(ledger.balance_of(&bob), 0);
    }

    #[test]
    fn test_transfer_from_requires_allowance() {
        let alice = Pubkey::new_unique();
        let spender = Pubkey::new_unique();
        let mut ledger = ledger_with(&alice, 500);

        let err = ledger
            .transfer_from(&spender, &alice, &spender, 500)
            .unwrap_err();
        assert_eq!(err, AssetError::InsufficientAllowance.into());

        ledger.approve(&alice, &spender, 300).unwrap();
        ledger.transfer_from(&spender, &alice, &spender, 200).unwrap();

        assert_eq!(ledger.balance_of(&spender), 200);
        assert_eq!(ledger.allowance(&alice, &spender), 100);
    }

    #[test]
    fn test_transfer_from_checks_balance_after_allowance() {
        let alice = Pubkey::new_unique();
        let spender = Pubkey::new_unique();
        let mut ledger = ledger_with(&alice, 50);
        ledger.approve(&alice, &spender, 100).unwrap();

        let err = ledger
            .transfer_from(&spender, &alice, &spender, 100)
            .unwrap_err();
        assert_eq!(err, AssetError::InsufficientBalance.into());
        // Failed transfer must not consume allowance
        assert_eq!(ledger.allowance(&alice, &spender), 100);
    }

    #[test]
    fn test_unlimited_allowance_is_not_decremented() {
        let alice = Pubkey::new_unique();
        let spender = Pubkey::new_unique();
        let mut ledger = ledger_with(&alice, 1_000);
        ledger.approve(&alice, &spender, UNLIMITED_ALLOWANCE).unwrap();

        ledger.transfer_from(&spender, &alice, &spender, 1_000).unwrap();

        assert_eq!(ledger.allowance(&alice, &spender), UNLIMITED_ALLOWANCE);
    }

    #[test]
    fn test_revert_transfer_from_restores_balance_and_allowance() {
        let alice = Pubkey::new_unique();
        let spender = Pubkey::new_unique();
        let mut ledger = ledger_with(&alice, 999);
        ledger.approve(&alice, &spender, 999).unwrap();

        ledger.transfer_from(&spender, &alice, &spender, 999).unwrap();
        assert_eq!(ledger.allowance(&alice, &spender), 0);

        ledger
            .revert_transfer_from(&spender, &alice, &spender, 999)
            .unwrap();

        assert_eq!(ledger.balance_of(&alice), 999);
        assert_eq!(ledger.balance_of(&spender), 0);
        assert_eq!(ledger.allowance(&alice, &spender), 999);
    }

    #[test]
    fn test_revert_transfer_from_keeps_unlimited_allowance() {
        let alice = Pubkey::new_unique();
        let spender = Pubkey::new_unique();
        let mut ledger = ledger_with(&alice, 1_000);
        ledger.approve(&alice, &spender, UNLIMITED_ALLOWANCE).unwrap();

        ledger.transfer_from(&spender, &alice, &spender, 600).unwrap();
        ledger
            .revert_transfer_from(&spender, &alice, &spender, 600)
            .unwrap();

        assert_eq!(ledger.balance_of(&alice), 1_000);
        assert_eq!(ledger.allowance(&alice, &spender), UNLIMITED_ALLOWANCE);
    }

    #[test]
    fn test_approve_zero_spender_rejected() {
        let alice = Pubkey::new_unique();
        let mut ledger = ledger_with(&alice, 1);

        let err = ledger.approve(&alice, &Pubkey::default(), 1).unwrap_err();
        assert_eq!(err, AssetError::InvalidSpender.into());
    }

    #[test]
    fn test_mint_supply_overflow() {
        let alice = Pubkey::new_unique();
        let mut ledger = ledger_with(&alice, u128::MAX);

        let err = ledger.mint_to(&alice, 1).unwrap_err();
        assert_eq!(err, AssetError::SupplyOverflow.into());
        assert_eq!(ledger.total_supply(), u128::MAX);
    }
}
