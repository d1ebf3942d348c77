use anchor_lang::prelude::*;
use fungible_asset::FungibleAsset;

use crate::errors::*;
use crate::state::*;

pub struct CloseMigration<'a> {
    pub swapper: &'a mut SwapperState,

    /// STC V2 (address = swapper.new_asset)
    pub new_asset: &'a mut dyn FungibleAsset,

    /// Must be the swapper owner (receives the drained reserve)
    pub authority: Pubkey,
}

/// Zero the migration bonus and drain the STC V2 reserve to the owner
///
/// STC V1 held by the swapper is never drained and the lamport pool is left
/// alone. Swaps stay callable afterwards; they resume (without refunds) as
/// soon as someone refills the reserve. Returns the drained amount.
pub fn handler(ctx: CloseMigration) -> Result<u128> {
    let CloseMigration {
        swapper,
        new_asset,
        authority,
    } = ctx;

    swapper.access.only_owner(&authority)?;
    require_keys_eq!(new_asset.key(), swapper.new_asset, SwapperError::NewAssetMismatch);

    msg!("╔════════════════════════════════════════╗");
    msg!("║          CLOSING STC MIGRATION         ║");
    msg!("╚════════════════════════════════════════╝");

    let vault = swapper.address;
    let drained = new_asset.balance_of(&vault);
    let bonus_before = std::mem::replace(&mut swapper.migration_bonus, 0);

    if let Err(e) = new_asset.transfer(&vault, &authority, drained) {
        swapper.migration_bonus = bonus_before;
        return Err(e);
    }

    emit!(MigrationClosed {
        swapper: vault,
        owner: authority,
        drained,
        bonus_before,
    });

    msg!("✓ Migration bonus reset (was {} lamports)", bonus_before);
    msg!("✓ Drained {} STC V2 to {}", drained, authority);
    msg!("   STC V1 and the refund pool stay in the swapper");

    Ok(drained)
}

#[event]
pub struct MigrationClosed {
    pub swapper: Pubkey,
    pub owner: Pubkey,
    pub drained: u128,
    pub bonus_before: u64,
}
