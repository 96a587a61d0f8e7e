use anchor_lang::prelude::*;

use crate::constants::HOLDER_SEED;
use crate::error::TokenError;
use crate::state::HolderEntry;

/// Creates the empty holder account of `wallet`. Anyone may pay for it; a
/// wallet needs one before it can receive, be restricted or hold a balance.
pub fn handle_open_holder(ctx: Context<OpenHolder>, wallet: Pubkey) -> Result<()> {
    require_keys_neq!(wallet, Pubkey::default(), TokenError::InvalidRecipient);
    ctx.accounts
        .holder
        .set_inner(HolderEntry::new(wallet, ctx.bumps.holder));
    emit!(HolderOpened {
        wallet,
        payer: ctx.accounts.payer.key(),
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct OpenHolder<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + HolderEntry::SIZE,
        seeds = [HOLDER_SEED, wallet.as_ref()],
        bump
    )]
    pub holder: Account<'info, HolderEntry>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct HolderOpened {
    pub wallet: Pubkey,
    pub payer: Pubkey,
}
