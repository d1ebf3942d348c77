use anchor_lang::prelude::*;

#[error_code]
pub enum SwapperError {
    #[msg("Invalid legacy asset - STC V1 must have 2 decimals")]
    InvalidLegacyAsset,

    #[msg("Invalid new asset - STC V2 must have 18 decimals")]
    InvalidNewAsset,

    #[msg("Invalid owner - new owner is the zero address")]
    InvalidOwner,

    #[msg("Caller is not the owner")]
    NotOwner,

    #[msg("Insufficient STC V2 liquidity in the swapper")]
    InsufficientNewAssetLiquidity,

    #[msg("Insufficient lamports for granting a gas refund")]
    InsufficientRefundFunds,

    #[msg("Swap amount exceeds STC V1 allowance or balance")]
    AllowanceOrBalanceExceeded,

    #[msg("Nothing to swap - caller holds no STC V1")]
    NothingToSwap,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Legacy asset does not match swapper state")]
    LegacyAssetMismatch,

    #[msg("New asset does not match swapper state")]
    NewAssetMismatch,

    #[msg("Invalid swapper address - must not be the zero address")]
    InvalidSwapperAddress,
}
