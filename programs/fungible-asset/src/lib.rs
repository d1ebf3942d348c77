use anchor_lang::prelude::*;

pub mod errors;
pub mod native_bank;
pub mod token_ledger;

pub use errors::AssetError;
pub use native_bank::NativeBank;
pub use token_ledger::{Approval, TokenLedger, Transfer};

/// Allowance value that `transfer_from` never decrements
pub const UNLIMITED_ALLOWANCE: u128 = u128::MAX;

/// Balance-bearing asset consumed by the swapper.
///
/// Amounts are base units. Implementations own every balance and allowance;
/// callers only observe them through this interface.
pub trait FungibleAsset {
    /// Asset identity (its mint address)
    fn key(&self) -> Pubkey;

    fn decimals(&self) -> u8;

    fn balance_of(&self, account: &Pubkey) -> u128;

    /// Amount `spender` may still move out of `owner`'s balance
    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u128;

    /// Move `amount` from `authority`'s own balance to `to`
    fn transfer(&mut self, authority: &Pubkey, to: &Pubkey, amount: u128) -> Result<()>;

    /// Move `amount` from `from` to `to` on behalf of `spender`, consuming allowance
    fn transfer_from(
        &mut self,
        spender: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<()>;

    /// Undo a completed `transfer_from` with the same arguments
    ///
    /// Moves `amount` from `to` back to `from` and gives back the allowance the
    /// original call consumed, leaving both exactly as before it.
    fn revert_transfer_from(
        &mut self,
        spender: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<()>;
}

/// Chain-native currency (lamports)
pub trait NativeCurrency {
    fn balance(&self, account: &Pubkey) -> u64;

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;
}
