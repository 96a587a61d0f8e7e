use anchor_lang::prelude::*;

/// Liquidity held back inside the treasury until `unlock_at`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiquidityLock {
    pub locked: bool,
    pub amount: u64,
    /// Unix seconds; unlock is permitted at or after this time.
    pub unlock_at: i64,
}

impl LiquidityLock {
    pub const SIZE: usize =
        1 + // locked
        8 + // amount
        8;  // unlock_at

    /// Amount currently withheld from the treasury's spendable balance.
    pub fn withheld(&self) -> u64 {
        if self.locked {
            self.amount
        } else {
            0
        }
    }
}
