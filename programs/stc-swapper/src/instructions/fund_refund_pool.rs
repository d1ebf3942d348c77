use anchor_lang::prelude::*;
use fungible_asset::NativeCurrency;

use crate::refund_pool::RefundPool;
use crate::state::*;

pub struct FundRefundPool<'a> {
    pub swapper: &'a SwapperState,

    /// Native ledger holding the refund pool
    pub native: &'a mut dyn NativeCurrency,

    /// Anyone may fund the pool
    pub funder: Pubkey,
}

pub fn handler(ctx: FundRefundPool, amount: u64) -> Result<()> {
    let vault = ctx.swapper.address;
    let mut pool = RefundPool::new(vault, ctx.native);

    pool.deposit(&ctx.funder, amount)?;
    let pool_balance = pool.balance();

    emit!(RefundPoolFunded {
        swapper: vault,
        funder: ctx.funder,
        amount,
        pool_balance,
    });

    msg!("Refund pool funded with {} lamports by {}", amount, ctx.funder);
    msg!("Refund pool balance: {} lamports", pool_balance);

    Ok(())
}

#[event]
pub struct RefundPoolFunded {
    pub swapper: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub pool_balance: u64,
}
