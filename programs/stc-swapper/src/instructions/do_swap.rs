use anchor_lang::prelude::*;
use fungible_asset::{FungibleAsset, NativeCurrency};

use crate::errors::*;
use crate::refund_pool::RefundPool;
use crate::state::*;

pub struct DoSwap<'a> {
    /// Swapper state (mutated: statistics)
    pub swapper: &'a mut SwapperState,

    /// STC V1 (address = swapper.legacy_asset)
    pub legacy_asset: &'a mut dyn FungibleAsset,

    /// STC V2 (address = swapper.new_asset)
    pub new_asset: &'a mut dyn FungibleAsset,

    /// Native ledger holding the refund pool
    pub native: &'a mut dyn NativeCurrency,

    /// User swapping their whole STC V1 balance
    pub user: Pubkey,
}

/// Outcome of a completed swap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapReceipt {
    pub legacy_amount: u128,
    pub new_amount: u128,
    pub refund: u64,
}

/// Swap the user's entire STC V1 balance for STC V2
///
/// Flow:
/// 1. Read the user's whole STC V1 balance
/// 2. Check the STC V2 reserve covers the converted amount
/// 3. Check the refund pool covers the bonus (eligible batches only)
/// 4. Check the allowance covers the balance
/// 5. Pull STC V1 into the swapper
/// 6. Push STC V2 to the user
/// 7. Pay the lamport refund (eligible batches only)
///
/// Every check runs before the first transfer. A failing transfer after the
/// pull unwinds the earlier ones, restoring the allowance as well, so a batch
/// either lands completely or not at all. Whatever happens during the unwind,
/// the error returned is the one that aborted the swap.
pub fn handler(ctx: DoSwap) -> Result<SwapReceipt> {
    let DoSwap {
        swapper,
        legacy_asset,
        new_asset,
        native,
        user,
    } = ctx;

    swapper.check_assets(legacy_asset.key(), new_asset.key())?;

    let vault = swapper.address;
    let bonus = swapper.migration_bonus;

    msg!("╔════════════════════════════════════════╗");
    msg!("║        STC V1 → STC V2 Migration       ║");
    msg!("╚════════════════════════════════════════╝");

    // ===== STEP 1: Whole balance, converted exactly =====
    let amount = legacy_asset.balance_of(&user);
    require!(amount > 0, SwapperError::NothingToSwap);

    let converted = swapper.convert(amount)?;

    msg!("User: {}", user);
    msg!("STC V1 amount: {}", amount);
    msg!("STC V2 amount: {}", converted);

    // ===== STEP 2: Liquidity =====
    let reserve = new_asset.balance_of(&vault);
    require_gte!(reserve, converted, SwapperError::InsufficientNewAssetLiquidity);

    msg!("✓ STC V2 reserve covers swap ({} available)", reserve);

    // ===== STEP 3: Refund eligibility =====
    let eligible = SwapperState::is_refund_eligible(amount);
    let mut pool = RefundPool::new(vault, native);

    let refund = if eligible {
        require_gte!(pool.balance(), bonus, SwapperError::InsufficientRefundFunds);
        msg!("✓ Eligible for gas refund ({} lamports)", bonus);
        bonus
    } else {
        msg!("Below refund threshold - no gas refund");
        0
    };

    // ===== STEP 4: Allowance =====
    require_gte!(
        legacy_asset.allowance(&user, &vault),
        amount,
        SwapperError::AllowanceOrBalanceExceeded
    );

    // ===== STEP 5: Pull STC V1 =====
    legacy_asset
        .transfer_from(&vault, &user, &vault, amount)
        .map_err(|e| {
            msg!("STC V1 pull failed: {}", e);
            error!(SwapperError::AllowanceOrBalanceExceeded)
        })?;

    msg!("✓ Pulled {} STC V1", amount);

    // ===== STEP 6: Push STC V2 =====
    if let Err(e) = new_asset.transfer(&vault, &user, converted) {
        msg!("STC V2 push failed: {}", e);
        unwind_pull(legacy_asset, &vault, &user, amount);
        return Err(e);
    }

    msg!("✓ Sent {} STC V2", converted);

    // ===== STEP 7: Gas refund =====
    if refund > 0 {
        if let Err(e) = pool.pay(&user, refund) {
            msg!("Gas refund failed: {}", e);
            if let Err(undo) = new_asset.transfer(&user, &vault, converted) {
                msg!("✗ Unwind of STC V2 push failed: {}", undo);
            }
            unwind_pull(legacy_asset, &vault, &user, amount);
            return Err(e);
        }

        msg!("✓ Refunded {} lamports", refund);
    }

    // ===== STEP 8: Statistics =====
    swapper.record_swap(amount, converted, refund);

    emit!(Swapped {
        swapper: vault,
        user,
        legacy_amount: amount,
        new_amount: converted,
        refund,
    });

    msg!("Total swaps: {}", swapper.total_swaps);
    msg!("Total STC V1 swapped: {}", swapper.total_legacy_swapped);

    Ok(SwapReceipt {
        legacy_amount: amount,
        new_amount: converted,
        refund,
    })
}

/// Hand pulled STC V1 (and the allowance it used) back to the user
///
/// Runs on an error path: its own failure is logged, never returned, so the
/// caller always sees the error that aborted the swap.
fn unwind_pull(
    legacy_asset: &mut dyn FungibleAsset,
    vault: &Pubkey,
    user: &Pubkey,
    amount: u128,
) {
    if let Err(undo) = legacy_asset.revert_transfer_from(vault, user, vault, amount) {
        msg!("✗ Unwind of STC V1 pull failed: {}", undo);
    }
}

/// Event emitted for every completed swap
#[event]
pub struct Swapped {
    pub swapper: Pubkey,
    pub user: Pubkey,
    pub legacy_amount: u128,
    pub new_amount: u128,
    pub refund: u64,
}
