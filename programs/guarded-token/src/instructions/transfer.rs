use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_SEED};
use crate::error::TokenError;
use crate::state::{HolderEntry, TokenLedger};

/// Omitting `recipient_holder` makes this a transfer to the sender itself.
pub fn handle_transfer(ctx: Context<TransferTokens>, to: Pubkey, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let from = ctx.accounts.sender.key();
    let accounts = &mut *ctx.accounts;
    let ledger: &mut TokenLedger = &mut accounts.ledger;

    let outcome = match accounts.recipient_holder.as_mut() {
        Some(recipient) => ledger.transfer(&mut accounts.sender_holder, recipient, amount, now)?,
        None => {
            require_keys_eq!(to, from, TokenError::HolderMismatch);
            ledger.transfer_to_self(&mut accounts.sender_holder, amount, now)?
        }
    };

    emit!(TokensTransferred {
        from,
        to,
        amount: outcome.debited,
        credited: outcome.credited,
        burned: outcome.burned,
        total_supply: ledger.total_supply,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct TransferTokens<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, TokenLedger>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, sender.key().as_ref()],
        bump = sender_holder.bump
    )]
    pub sender_holder: Account<'info, HolderEntry>,

    #[account(mut, seeds = [HOLDER_SEED, to.as_ref()], bump)]
    pub recipient_holder: Option<Account<'info, HolderEntry>>,

    pub sender: Signer<'info>,
}

#[event]
pub struct TokensTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub credited: u64,
    pub burned: u64,
    pub total_supply: u64,
}
