//! Shared setup for instruction tests: STC V1 / STC V2 ledgers, a lamport
//! bank, and a freshly initialized swapper.

use anchor_lang::prelude::*;
use fungible_asset::{FungibleAsset, NativeBank, TokenLedger, UNLIMITED_ALLOWANCE};

use crate::instructions::*;
use crate::state::SwapperState;

pub const E16: u128 = 10_000_000_000_000_000;
pub const E18: u128 = 1_000_000_000_000_000_000;
pub const LAMPORTS_E15: u64 = 1_000_000_000_000_000;
pub const LAMPORTS_E16: u64 = 10_000_000_000_000_000;

pub struct Fixture {
    pub stcv1: TokenLedger,
    pub stcv2: TokenLedger,
    pub bank: NativeBank,
    pub owner: Pubkey,
    pub alice: Pubkey,
    pub state: SwapperState,
}

impl Fixture {
    /// Owner holds the whole STC V1 / STC V2 supply and plenty of lamports
    pub fn new(initial_bonus: u64) -> Self {
        let owner = Pubkey::new_unique();
        let alice = Pubkey::new_unique();

        let mut stcv1 = TokenLedger::new(Pubkey::new_unique(), "STC V1", "STC", 2);
        stcv1.mint_to(&owner, 1_000_000_000 * 100).unwrap();

        let mut stcv2 = TokenLedger::new(Pubkey::new_unique(), "STC V2", "STC", 18);
        stcv2.mint_to(&owner, 1_000_000_000 * E18).unwrap();

        let mut bank = NativeBank::new();
        bank.airdrop(&owner, 1_000 * LAMPORTS_E16).unwrap();
        bank.airdrop(&alice, 1_000 * LAMPORTS_E16).unwrap();

        let state = initialize::handler(
            Initialize {
                swapper: Pubkey::new_unique(),
                legacy_asset: &stcv1,
                new_asset: &stcv2,
            },
            initial_bonus,
            owner,
        )
        .unwrap();

        Self { stcv1, stcv2, bank, owner, alice, state }
    }

    pub fn swapper(&self) -> Pubkey {
        self.state.address()
    }

    /// Owner sends STC V2 to the swapper reserve
    pub fn fund_reserve(&mut self, amount: u128) {
        let swapper = self.swapper();
        self.stcv2.transfer(&self.owner, &swapper, amount).unwrap();
    }

    /// Owner sends STC V1 to `to`
    pub fn give_legacy(&mut self, to: &Pubkey, amount: u128) {
        self.stcv1.transfer(&self.owner, to, amount).unwrap();
    }

    pub fn approve_unlimited(&mut self, user: &Pubkey) {
        let swapper = self.swapper();
        self.stcv1.approve(user, &swapper, UNLIMITED_ALLOWANCE).unwrap();
    }

    pub fn swap(&mut self, user: Pubkey) -> Result<SwapReceipt> {
        do_swap::handler(DoSwap {
            swapper: &mut self.state,
            legacy_asset: &mut self.stcv1,
            new_asset: &mut self.stcv2,
            native: &mut self.bank,
            user,
        })
    }

    pub fn fund_pool(&mut self, funder: Pubkey, amount: u64) -> Result<()> {
        fund_refund_pool::handler(
            FundRefundPool {
                swapper: &self.state,
                native: &mut self.bank,
                funder,
            },
            amount,
        )
    }

    pub fn close(&mut self, authority: Pubkey) -> Result<u128> {
        close_migration::handler(CloseMigration {
            swapper: &mut self.state,
            new_asset: &mut self.stcv2,
            authority,
        })
    }

    pub fn set_bonus(&mut self, authority: Pubkey, bonus: u64) -> Result<()> {
        set_migration_bonus::handler(
            SetMigrationBonus {
                swapper: &mut self.state,
                authority,
            },
            bonus,
        )
    }
}
