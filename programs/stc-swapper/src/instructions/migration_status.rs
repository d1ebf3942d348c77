use anchor_lang::prelude::*;
use fungible_asset::{FungibleAsset, NativeCurrency};

use crate::state::*;

pub struct GetMigrationStatus<'a> {
    pub swapper: &'a SwapperState,

    /// STC V1 (address = swapper.legacy_asset)
    pub legacy_asset: &'a dyn FungibleAsset,

    /// STC V2 (address = swapper.new_asset)
    pub new_asset: &'a dyn FungibleAsset,

    pub native: &'a dyn NativeCurrency,

    /// Account the status is evaluated for
    pub account: Pubkey,
}

/// Read model of the migration as seen by one account
///
/// Everything a front end needs to decide whether to offer "approve",
/// "swap", or nothing at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MigrationStatus {
    pub legacy_balance: u128,
    pub new_balance: u128,
    pub legacy_allowance: u128,
    pub refund_pool: u64,
    pub migration_bonus: u64,
    pub new_asset_reserve: u128,
    pub holds_legacy: bool,
    pub eligible_for_refund: bool,
    pub bonus_enabled: bool,
    /// Refund pool covers one bonus payout
    pub can_refund: bool,
    /// Reserve covers the account's whole balance
    pub can_swap: bool,
    /// Allowance covers the account's whole balance
    pub was_approved: bool,
}

pub fn handler(ctx: GetMigrationStatus) -> Result<MigrationStatus> {
    let swapper = ctx.swapper;
    swapper.check_assets(ctx.legacy_asset.key(), ctx.new_asset.key())?;

    let vault = swapper.address;
    let legacy_balance = ctx.legacy_asset.balance_of(&ctx.account);
    let legacy_allowance = ctx.legacy_asset.allowance(&ctx.account, &vault);
    let new_asset_reserve = ctx.new_asset.balance_of(&vault);
    let refund_pool = ctx.native.balance(&vault);
    let migration_bonus = swapper.migration_bonus;

    Ok(MigrationStatus {
        legacy_balance,
        new_balance: ctx.new_asset.balance_of(&ctx.account),
        legacy_allowance,
        refund_pool,
        migration_bonus,
        new_asset_reserve,
        holds_legacy: legacy_balance > 0,
        eligible_for_refund: SwapperState::is_refund_eligible(legacy_balance),
        bonus_enabled: migration_bonus > 0,
        can_refund: refund_pool >= migration_bonus,
        can_swap: new_asset_reserve >= swapper.convert(legacy_balance)?,
        was_approved: legacy_allowance >= legacy_balance,
    })
}
