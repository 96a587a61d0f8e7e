use anchor_lang::prelude::*;

declare_id!("3JJ2wZ2wtceihGEn7WqvuBbJ4Ry4YjqZSQNfoSCmg5Vz");

pub mod constants;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

use state::{InitializeParams, VestingInfo};

#[program]
pub mod guarded_token {
    use super::*;

    pub fn initialize_token(ctx: Context<InitializeToken>, params: InitializeParams) -> Result<()> {
        instructions::initialize_token::handle_initialize_token(ctx, params)
    }

    pub fn open_holder(ctx: Context<OpenHolder>, wallet: Pubkey) -> Result<()> {
        instructions::open_holder::handle_open_holder(ctx, wallet)
    }

    pub fn transfer(ctx: Context<TransferTokens>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::transfer::handle_transfer(ctx, to, amount)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handle_transfer_ownership(ctx, new_owner)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::handle_pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::handle_unpause(ctx)
    }

    pub fn black_list(ctx: Context<UpdateRestriction>, wallet: Pubkey) -> Result<()> {
        instructions::restrictions::handle_black_list(ctx, wallet)
    }

    pub fn remove_from_blacklist(ctx: Context<UpdateRestriction>, wallet: Pubkey) -> Result<()> {
        instructions::restrictions::handle_remove_from_blacklist(ctx, wallet)
    }

    pub fn freeze_wallet(ctx: Context<UpdateRestriction>, wallet: Pubkey) -> Result<()> {
        instructions::restrictions::handle_freeze_wallet(ctx, wallet)
    }

    pub fn unfreeze_wallet(ctx: Context<UpdateRestriction>, wallet: Pubkey) -> Result<()> {
        instructions::restrictions::handle_unfreeze_wallet(ctx, wallet)
    }

    pub fn add_to_whitelist(ctx: Context<UpdateRestriction>, wallet: Pubkey) -> Result<()> {
        instructions::restrictions::handle_add_to_whitelist(ctx, wallet)
    }

    pub fn remove_from_whitelist(ctx: Context<UpdateRestriction>, wallet: Pubkey) -> Result<()> {
        instructions::restrictions::handle_remove_from_whitelist(ctx, wallet)
    }

    pub fn set_max_transfer_amount(ctx: Context<Configure>, amount: u64) -> Result<()> {
        instructions::configure::handle_set_max_transfer_amount(ctx, amount)
    }

    pub fn set_transfer_delay(ctx: Context<Configure>, delay: i64) -> Result<()> {
        instructions::configure::handle_set_transfer_delay(ctx, delay)
    }

    pub fn set_deflationary(ctx: Context<Configure>, enabled: bool) -> Result<()> {
        instructions::configure::handle_set_deflationary(ctx, enabled)
    }

    pub fn set_burn_rate(ctx: Context<Configure>, percent: u8) -> Result<()> {
        instructions::configure::handle_set_burn_rate(ctx, percent)
    }

    pub fn set_liquidity_lock_duration(ctx: Context<Configure>, seconds: i64) -> Result<()> {
        instructions::configure::handle_set_liquidity_lock_duration(ctx, seconds)
    }

    pub fn mint(ctx: Context<MintTokens>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::mint::handle_mint(ctx, to, amount)
    }

    pub fn burn(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        instructions::burn::handle_burn(ctx, amount)
    }

    pub fn add_vesting_schedule(
        ctx: Context<AddVesting>,
        beneficiary: Pubkey,
        amount: u64,
        percentage: u8,
        interval: i64,
    ) -> Result<()> {
        instructions::add_vesting::handle_add_vesting_schedule(ctx, beneficiary, amount, percentage, interval)
    }

    pub fn add_vesting(
        ctx: Context<AddVesting>,
        beneficiary: Pubkey,
        amount: u64,
        start: i64,
        duration: i64,
    ) -> Result<()> {
        instructions::add_vesting::handle_add_vesting(ctx, beneficiary, amount, start, duration)
    }

    pub fn claim(ctx: Context<ClaimVested>) -> Result<()> {
        instructions::claim::handle_claim(ctx)
    }

    pub fn claim_vested_tokens(ctx: Context<ClaimVested>) -> Result<()> {
        instructions::claim::handle_claim(ctx)
    }

    pub fn lock_liquidity(ctx: Context<ManageLiquidity>, amount: u64) -> Result<()> {
        instructions::liquidity::handle_lock_liquidity(ctx, amount)
    }

    pub fn unlock_liquidity(ctx: Context<ManageLiquidity>, amount: u64) -> Result<()> {
        instructions::liquidity::handle_unlock_liquidity(ctx, amount)
    }

    pub fn balance_of(ctx: Context<ReadBalance>, wallet: Pubkey) -> Result<u64> {
        instructions::balance_of::handle_balance_of(ctx, wallet)
    }

    pub fn get_vesting_info(ctx: Context<ReadLedger>, wallet: Pubkey) -> Result<VestingInfo> {
        instructions::get_vesting_info::handle_get_vesting_info(ctx, wallet)
    }
}
