use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::state::{HolderEntry, Restriction, TokenLedger};

pub fn handle_black_list(ctx: Context<UpdateRestriction>, wallet: Pubkey) -> Result<()> {
    update_restriction(ctx, wallet, Restriction::Blacklist, true)
}

pub fn handle_remove_from_blacklist(ctx: Context<UpdateRestriction>, wallet: Pubkey) -> Result<()> {
    update_restriction(ctx, wallet, Restriction::Blacklist, false)
}

pub fn handle_freeze_wallet(ctx: Context<UpdateRestriction>, wallet: Pubkey) -> Result<()> {
    update_restriction(ctx, wallet, Restriction::Freeze, true)
}

pub fn handle_unfreeze_wallet(ctx: Context<UpdateRestriction>, wallet: Pubkey) -> Result<()> {
    update_restriction(ctx, wallet, Restriction::Freeze, false)
}

pub fn handle_add_to_whitelist(ctx: Context<UpdateRestriction>, wallet: Pubkey) -> Result<()> {
    update_restriction(ctx, wallet, Restriction::Whitelist, true)
}

pub fn handle_remove_from_whitelist(ctx: Context<UpdateRestriction>, wallet: Pubkey) -> Result<()> {
    update_restriction(ctx, wallet, Restriction::Whitelist, false)
}

fn update_restriction(
    ctx: Context<UpdateRestriction>,
    wallet: Pubkey,
    restriction: Restriction,
    enabled: bool,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let accounts = &mut *ctx.accounts;
    let ledger: &mut TokenLedger = &mut accounts.ledger;
    let changed = ledger.set_restriction(&owner, &mut accounts.holder, restriction, enabled)?;
    // Idempotent updates stay silent.
    if changed {
        emit!(RestrictionUpdated {
            wallet,
            restriction,
            enabled,
        });
    }
    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct UpdateRestriction<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, TokenLedger>,

    #[account(mut, seeds = [HOLDER_SEED, wallet.as_ref()], bump = holder.bump)]
    pub holder: Account<'info, HolderEntry>,

    pub owner: Signer<'info>,
}

#[event]
pub struct RestrictionUpdated {
    pub wallet: Pubkey,
    pub restriction: Restriction,
    pub enabled: bool,
}
