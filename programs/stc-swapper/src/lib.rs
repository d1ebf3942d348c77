use anchor_lang::prelude::*;
use fungible_asset::NativeCurrency;

pub mod instructions;
pub mod state;
pub mod errors;
pub mod refund_pool;

#[cfg(test)]
mod test_fixtures;

use instructions::*;
pub use errors::SwapperError;
pub use fungible_asset;
pub use refund_pool::RefundPool;
pub use state::{AccessControl, SwapperState};

declare_id!("7nkr2FdKTdnMj54TojMdhewPUhBvHkzCTKXSgdTsKr5c");

/// Migration parameters fixed for the lifetime of every swapper
pub mod config {
    /// STC V1 precision (base units per token = 10^2)
    pub const LEGACY_DECIMALS: u8 = 2;

    /// STC V2 precision (base units per token = 10^18)
    pub const NEW_DECIMALS: u8 = 18;

    /// Minimum STC V1 batch (in base units) that earns the gas refund
    /// 1_000_000 = 10,000 STC V1
    pub const REFUND_THRESHOLD: u128 = 1_000_000;
}

/// Swapper entry points
///
/// Each call either completes fully or returns an error with every balance
/// and the swapper state exactly as before.
pub mod stc_swapper {
    use super::*;

    /// Create a swapper for the given STC V1 / STC V2 pair
    pub fn initialize(
        ctx: Initialize,
        initial_bonus: u64,
        owner: Pubkey,
    ) -> Result<SwapperState> {
        instructions::initialize::handler(ctx, initial_bonus, owner)
    }

    /// Swap the caller's whole STC V1 balance for STC V2 (plus a lamport
    /// refund on batches of at least 10,000 STC V1)
    pub fn do_swap(ctx: DoSwap) -> Result<SwapReceipt> {
        instructions::do_swap::handler(ctx)
    }

    /// Owner only: set the lamport refund paid per eligible swap
    pub fn set_migration_bonus(ctx: SetMigrationBonus, new_bonus: u64) -> Result<()> {
        instructions::set_migration_bonus::handler(ctx, new_bonus)
    }

    /// Owner only: zero the bonus and drain the STC V2 reserve
    pub fn close_migration(ctx: CloseMigration) -> Result<u128> {
        instructions::close_migration::handler(ctx)
    }

    /// Deposit lamports into the refund pool (open to anyone)
    pub fn fund_refund_pool(ctx: FundRefundPool, amount: u64) -> Result<()> {
        instructions::fund_refund_pool::handler(ctx, amount)
    }

    /// Owner only: hand the swapper to a new, non-zero owner
    pub fn transfer_ownership(ctx: TransferOwnership, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handler(ctx, new_owner)
    }

    pub fn migration_status(ctx: GetMigrationStatus) -> Result<MigrationStatus> {
        instructions::migration_status::handler(ctx)
    }
}

/// Lamports currently available for gas refunds
pub fn native_balance(swapper: &SwapperState, native: &dyn NativeCurrency) -> u64 {
    native.balance(&swapper.address())
}
