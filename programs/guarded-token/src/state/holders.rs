use anchor_lang::prelude::*;

/// Per-wallet holder account, seeded `[HOLDER_SEED, wallet]`: the balance plus
/// membership in the blacklist, freeze and whitelist sets.
#[account]
#[derive(Copy, Debug, Default, PartialEq, Eq)]
pub struct HolderEntry {
    pub wallet: Pubkey,
    pub balance: u64,
    pub blacklisted: bool,
    pub frozen: bool,
    /// Exempt from the max-transfer cap and the transfer delay.
    pub whitelisted: bool,
    pub bump: u8,
}

impl HolderEntry {
    pub const SIZE: usize =
        32 + // wallet
        8 +  // balance
        1 +  // blacklisted
        1 +  // frozen
        1 +  // whitelisted
        1;   // bump

    pub fn new(wallet: Pubkey, bump: u8) -> Self {
        Self {
            wallet,
            bump,
            ..Self::default()
        }
    }

    pub fn flag(&self, restriction: Restriction) -> bool {
        match restriction {
            Restriction::Blacklist => self.blacklisted,
            Restriction::Freeze => self.frozen,
            Restriction::Whitelist => self.whitelisted,
        }
    }

    pub fn set_flag(&mut self, restriction: Restriction, enabled: bool) {
        match restriction {
            Restriction::Blacklist => self.blacklisted = enabled,
            Restriction::Freeze => self.frozen = enabled,
            Restriction::Whitelist => self.whitelisted = enabled,
        }
    }
}

/// Owner-managed address sets.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Restriction {
    Blacklist,
    Freeze,
    Whitelist,
}
