use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::state::{HolderEntry, TokenLedger};

pub fn handle_mint(ctx: Context<MintTokens>, to: Pubkey, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let accounts = &mut *ctx.accounts;
    let ledger: &mut TokenLedger = &mut accounts.ledger;
    let total_supply = ledger.mint(&owner, &mut accounts.recipient_holder, amount)?;
    emit!(TokensMinted {
        to,
        amount,
        total_supply,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct MintTokens<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, TokenLedger>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, to.as_ref()],
        bump = recipient_holder.bump
    )]
    pub recipient_holder: Account<'info, HolderEntry>,

    pub owner: Signer<'info>,
}

#[event]
pub struct TokensMinted {
    pub to: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
}
