use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::TokenLedger;

pub fn handle_transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let ledger: &mut TokenLedger = &mut ctx.accounts.ledger;
    let previous_owner = ledger.transfer_ownership(&caller, new_owner)?;
    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, TokenLedger>,
    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
