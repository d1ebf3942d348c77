use anchor_lang::prelude::*;

#[error_code(offset = 7000)]
pub enum AssetError {
    #[msg("Transfer amount exceeds balance")]
    InsufficientBalance,

    #[msg("Transfer amount exceeds allowance")]
    InsufficientAllowance,

    #[msg("Invalid recipient - transfer to the zero address")]
    InvalidRecipient,

    #[msg("Invalid spender - approve to the zero address")]
    InvalidSpender,

    #[msg("Total supply overflow")]
    SupplyOverflow,

    #[msg("Insufficient lamports for transfer")]
    InsufficientLamports,

    #[msg("Balance overflow")]
    BalanceOverflow,
}
