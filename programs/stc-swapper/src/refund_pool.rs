use anchor_lang::prelude::*;
use fungible_asset::NativeCurrency;

use crate::errors::SwapperError;

/// Lamport refund pool held at the swapper's own address
///
/// The pool has no bookkeeping of its own: its balance is whatever the
/// native ledger reports for the vault, so direct transfers to the swapper
/// address count as deposits.
pub struct RefundPool<'a> {
    vault: Pubkey,
    native: &'a mut dyn NativeCurrency,
}

impl<'a> RefundPool<'a> {
    pub fn new(vault: Pubkey, native: &'a mut dyn NativeCurrency) -> Self {
        Self { vault, native }
    }

    pub fn balance(&self) -> u64 {
        self.native.balance(&self.vault)
    }

    /// Open to any funder, no upper bound
    pub fn deposit(&mut self, funder: &Pubkey, amount: u64) -> Result<()> {
        self.native.transfer(funder, &self.vault, amount)
    }

    pub fn pay(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_gte!(self.balance(), amount, SwapperError::InsufficientRefundFunds);
        self.native.transfer(&self.vault, to, amount)
    }
}
