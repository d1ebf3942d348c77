use anchor_lang::prelude::*;

use crate::state::*;

pub struct SetMigrationBonus<'a> {
    pub swapper: &'a mut SwapperState,

    /// Must be the swapper owner
    pub authority: Pubkey,
}

/// Set the lamport bonus paid per eligible swap
///
/// Any value is accepted, including zero (disables refunds). Funding is
/// checked lazily at swap time.
pub fn handler(ctx: SetMigrationBonus, new_bonus: u64) -> Result<()> {
    let swapper = ctx.swapper;
    swapper.access.only_owner(&ctx.authority)?;

    let previous = std::mem::replace(&mut swapper.migration_bonus, new_bonus);

    emit!(MigrationBonusUpdated {
        swapper: swapper.address,
        previous,
        current: new_bonus,
    });

    msg!("Migration bonus updated: {} → {} lamports", previous, new_bonus);

    Ok(())
}

#[event]
pub struct MigrationBonusUpdated {
    pub swapper: Pubkey,
    pub previous: u64,
    pub current: u64,
}
