use anchor_lang::prelude::*;

use crate::config::REFUND_THRESHOLD;
use crate::errors::SwapperError;

/// Single-owner access control embedded in the swapper state
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct AccessControl {
    owner: Pubkey,
}

impl AccessControl {
    pub fn new(owner: Pubkey) -> Result<Self> {
        require_keys_neq!(owner, Pubkey::default(), SwapperError::InvalidOwner);
        Ok(Self { owner })
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    pub fn only_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, SwapperError::NotOwner);
        Ok(())
    }

    /// Hand ownership to `new_owner`, returning the previous owner
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.only_owner(caller)?;
        require_keys_neq!(new_owner, Pubkey::default(), SwapperError::InvalidOwner);

        Ok(std::mem::replace(&mut self.owner, new_owner))
    }
}

/// Migration swapper state
///
/// `address` is the swapper's own identity: it holds the STC V2 reserve,
/// every STC V1 unit swapped in, and the lamport refund pool.
#[account]
#[derive(InitSpace, Debug)]
pub struct SwapperState {
    pub(crate) address: Pubkey,
    pub(crate) legacy_asset: Pubkey,
    pub(crate) new_asset: Pubkey,
    pub(crate) access: AccessControl,
    pub(crate) migration_bonus: u64,    // Lamports paid per eligible swap
    pub(crate) conversion_ratio: u128,  // 10^(new decimals - legacy decimals)
    pub(crate) total_swaps: u64,
    pub(crate) total_legacy_swapped: u128,
    pub(crate) total_new_issued: u128,
    pub(crate) total_refunds_paid: u64,
    pub(crate) total_refund_lamports: u64,
}

impl SwapperState {
    pub(crate) fn new(
        address: Pubkey,
        legacy_asset: Pubkey,
        new_asset: Pubkey,
        access: AccessControl,
        migration_bonus: u64,
        conversion_ratio: u128,
    ) -> Self {
        Self {
            address,
            legacy_asset,
            new_asset,
            access,
            migration_bonus,
            conversion_ratio,
            total_swaps: 0,
            total_legacy_swapped: 0,
            total_new_issued: 0,
            total_refunds_paid: 0,
            total_refund_lamports: 0,
        }
    }

    pub fn address(&self) -> Pubkey {
        self.address
    }

    pub fn legacy_asset(&self) -> Pubkey {
        self.legacy_asset
    }

    pub fn new_asset(&self) -> Pubkey {
        self.new_asset
    }

    pub fn owner(&self) -> Pubkey {
        self.access.owner()
    }

    pub fn migration_bonus(&self) -> u64 {
        self.migration_bonus
    }

    pub fn conversion_ratio(&self) -> u128 {
        self.conversion_ratio
    }

    pub fn total_swaps(&self) -> u64 {
        self.total_swaps
    }

    pub fn total_legacy_swapped(&self) -> u128 {
        self.total_legacy_swapped
    }

    pub fn total_new_issued(&self) -> u128 {
        self.total_new_issued
    }

    pub fn total_refunds_paid(&self) -> u64 {
        self.total_refunds_paid
    }

    pub fn total_refund_lamports(&self) -> u64 {
        self.total_refund_lamports
    }

    /// Scaling factor between two decimal precisions: 10^(new - legacy)
    pub fn ratio_for(legacy_decimals: u8, new_decimals: u8) -> Result<u128> {
        let exponent = new_decimals
            .checked_sub(legacy_decimals)
            .ok_or(SwapperError::ArithmeticOverflow)?;

        10u128
            .checked_pow(u32::from(exponent))
            .ok_or_else(|| error!(SwapperError::ArithmeticOverflow))
    }

    /// STC V2 base units owed for `legacy_amount` STC V1 base units
    pub fn convert(&self, legacy_amount: u128) -> Result<u128> {
        legacy_amount
            .checked_mul(self.conversion_ratio)
            .ok_or_else(|| error!(SwapperError::ArithmeticOverflow))
    }

    pub fn is_refund_eligible(legacy_amount: u128) -> bool {
        legacy_amount >= REFUND_THRESHOLD
    }

    /// Reject asset handles other than the ones recorded at construction
    pub fn check_assets(&self, legacy_asset: Pubkey, new_asset: Pubkey) -> Result<()> {
        require_keys_eq!(legacy_asset, self.legacy_asset, SwapperError::LegacyAssetMismatch);
        require_keys_eq!(new_asset, self.new_asset, SwapperError::NewAssetMismatch);
        Ok(())
    }

    pub(crate) fn record_swap(&mut self, legacy_amount: u128, new_amount: u128, refund: u64) {
        self.total_swaps = self.total_swaps.saturating_add(1);
        self.total_legacy_swapped = self.total_legacy_swapped.saturating_add(legacy_amount);
        self.total_new_issued = self.total_new_issued.saturating_add(new_amount);
        if refund > 0 {
            self.total_refunds_paid = self.total_refunds_paid.saturating_add(1);
            self.total_refund_lamports = self.total_refund_lamports.saturating_add(refund);
        }
    }
}
