//! Unix-time helpers for the time-gated parts of the ledger.
//! - deadline = now + delay, checked, delay never negative
//! - elapsed intervals are counted inclusively at each boundary
//! - all gates compare `now >= at`

use crate::error::TokenError;

/// Timestamp `delay` seconds after `now`.
pub fn deadline_after(now: i64, delay: i64) -> Result<i64, TokenError> {
    if delay < 0 {
        return Err(TokenError::InvalidTimestamp);
    }
    now.checked_add(delay).ok_or(TokenError::ArithmeticOverflow)
}

/// True once `now` has reached `at` (inclusive).
pub fn has_reached(now: i64, at: i64) -> bool {
    now >= at
}

/// Number of whole `interval`s between `since` and `now`, inclusive at
/// boundaries. Zero before `since`.
pub fn elapsed_intervals(now: i64, since: i64, interval: i64) -> Result<u64, TokenError> {
    if interval <= 0 {
        return Err(TokenError::InvalidTimestamp);
    }
    if now < since {
        return Ok(0);
    }
    let elapsed = (now as i128)
        .checked_sub(since as i128)
        .ok_or(TokenError::ArithmeticUnderflow)?;
    let count = elapsed / interval as i128;
    u64::try_from(count).map_err(|_| TokenError::ArithmeticOverflow)
}
