use anchor_lang::prelude::*;

use crate::state::*;

pub struct TransferOwnership<'a> {
    pub swapper: &'a mut SwapperState,

    /// Must be the current owner
    pub authority: Pubkey,
}

pub fn handler(ctx: TransferOwnership, new_owner: Pubkey) -> Result<()> {
    let swapper = ctx.swapper;
    let previous = swapper
        .access
        .transfer_ownership(&ctx.authority, new_owner)?;

    emit!(OwnershipTransferred {
        swapper: swapper.address,
        previous,
        current: new_owner,
    });

    msg!("Ownership transferred: {} → {}", previous, new_owner);

    Ok(())
}

#[event]
pub struct OwnershipTransferred {
    pub swapper: Pubkey,
    pub previous: Pubkey,
    pub current: Pubkey,
}
