use anchor_lang::prelude::*;
use fungible_asset::FungibleAsset;

use crate::config::{LEGACY_DECIMALS, NEW_DECIMALS};
use crate::errors::*;
use crate::state::*;

pub struct Initialize<'a> {
    /// Address the swapper lives at (holds the STC V2 reserve and refund pool)
    pub swapper: Pubkey,

    /// STC V1 (must have 2 decimals)
    pub legacy_asset: &'a dyn FungibleAsset,

    /// STC V2 (must have 18 decimals)
    pub new_asset: &'a dyn FungibleAsset,
}

pub fn handler(ctx: Initialize, initial_bonus: u64, owner: Pubkey) -> Result<SwapperState> {
    require!(
        ctx.legacy_asset.decimals() == LEGACY_DECIMALS,
        SwapperError::InvalidLegacyAsset
    );
    require!(
        ctx.new_asset.decimals() == NEW_DECIMALS,
        SwapperError::InvalidNewAsset
    );
    let access = AccessControl::new(owner)?;
    require_keys_neq!(ctx.swapper, Pubkey::default(), SwapperError::InvalidSwapperAddress);

    let conversion_ratio = SwapperState::ratio_for(LEGACY_DECIMALS, NEW_DECIMALS)?;

    let state = SwapperState::new(
        ctx.swapper,
        ctx.legacy_asset.key(),
        ctx.new_asset.key(),
        access,
        initial_bonus,
        conversion_ratio,
    );

    msg!("STC swapper initialized");
    msg!("Swapper: {}", state.address);
    msg!("Owner: {}", state.owner());
    msg!("STC V1: {}", state.legacy_asset);
    msg!("STC V2: {}", state.new_asset);
    msg!("Conversion ratio: {}", state.conversion_ratio);
    msg!("Migration bonus: {} lamports", state.migration_bonus);

    Ok(state)
}
