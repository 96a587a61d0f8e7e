//! Property-based tests for the ledger invariants.
//!
//! - supply conservation: sum of balances == total supply after any call
//! - the owner is never the zero address
//! - vested amounts never decrease over time and never exceed the schedule

use anchor_lang::prelude::Pubkey;
use proptest::prelude::*;

use super::fixture::*;
use crate::state::{Restriction, VestingKind, VestingSchedule};

const WALLETS: usize = 5;

/// Random calls issued against the ledger; most of them are expected to fail.
#[derive(Clone, Debug)]
enum Op {
    Transfer { from: usize, to: usize, amount: u64 },
    Mint { caller: usize, to: usize, amount: u64 },
    Burn { caller: usize, amount: u64 },
    Claim { caller: usize },
    AddVesting { beneficiary: usize, amount: u64, percentage: u8 },
    SetDeflationary(bool),
    SetBurnRate(u8),
    Blacklist { wallet: usize, on: bool },
    Freeze { wallet: usize, on: bool },
    Lock(u64),
    Unlock(u64),
    HandOver { caller: usize, to: usize },
    Advance(i64),
}

fn wallet(i: usize) -> Pubkey {
    Pubkey::new_from_array([i as u8 + 1; 32])
}

fn amount() -> impl Strategy<Value = u64> {
    prop_oneof![0u64..1_000, 0u64..=MAX_TRANSFER * 2, Just(u64::MAX)]
}

fn value_op() -> impl Strategy<Value = Op> {
    let w = 0..=WALLETS;
    prop_oneof![
        (w.clone(), w.clone(), amount()).prop_map(|(from, to, amount)| Op::Transfer { from, to, amount }),
        (w.clone(), w.clone(), amount()).prop_map(|(caller, to, amount)| Op::Mint { caller, to, amount }),
        (w.clone(), amount()).prop_map(|(caller, amount)| Op::Burn { caller, amount }),
        w.clone().prop_map(|caller| Op::Claim { caller }),
        (w, amount(), 0u8..=100).prop_map(|(beneficiary, amount, percentage)| {
            Op::AddVesting { beneficiary, amount, percentage }
        }),
        amount().prop_map(Op::Lock),
        amount().prop_map(Op::Unlock),
    ]
}

fn admin_op() -> impl Strategy<Value = Op> {
    let w = 0..=WALLETS;
    prop_oneof![
        any::<bool>().prop_map(Op::SetDeflationary),
        (0u8..=100).prop_map(Op::SetBurnRate),
        (w.clone(), any::<bool>()).prop_map(|(wallet, on)| Op::Blacklist { wallet, on }),
        (w.clone(), any::<bool>()).prop_map(|(wallet, on)| Op::Freeze { wallet, on }),
        (w.clone(), w).prop_map(|(caller, to)| Op::HandOver { caller, to }),
        (0i64..=DELAY * 48).prop_map(Op::Advance),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![3 => value_op(), 1 => admin_op()]
}

/// Deployment whose owner is wallet(0) and whose treasury is wallet(WALLETS).
fn deployment() -> Fixture {
    deployed_with(wallet(0), wallet(WALLETS))
}

fn apply(f: &mut Fixture, op: &Op, now: &mut i64) {
    let owner = f.ledger.current_owner();
    // Results are deliberately ignored: the invariants must hold either way.
    let _ = match *op {
        Op::Transfer { from, to, amount } => f.transfer(wallet(from), wallet(to), amount, *now).map(|_| ()),
        Op::Mint { caller, to, amount } => f.mint(wallet(caller), wallet(to), amount).map(|_| ()),
        Op::Burn { caller, amount } => f.burn(wallet(caller), amount).map(|_| ()),
        Op::Claim { caller } => f.claim(wallet(caller), *now).map(|_| ()),
        Op::AddVesting { beneficiary, amount, percentage } => f
            .ledger
            .add_vesting_schedule(&owner, wallet(beneficiary), amount, percentage, DELAY, *now),
        Op::SetDeflationary(on) => f.ledger.set_deflationary(&owner, on),
        Op::SetBurnRate(p) => f.ledger.set_burn_rate(&owner, p),
        Op::Blacklist { wallet: w, on } => f
            .set_restriction(owner, wallet(w), Restriction::Blacklist, on)
            .map(|_| ()),
        Op::Freeze { wallet: w, on } => f
            .set_restriction(owner, wallet(w), Restriction::Freeze, on)
            .map(|_| ()),
        Op::Lock(amount) => f.lock(owner, amount, *now).map(|_| ()),
        Op::Unlock(amount) => f.ledger.unlock_liquidity(&owner, amount, *now).map(|_| ()),
        Op::HandOver { caller, to } => f
            .ledger
            .transfer_ownership(&wallet(caller), wallet(to))
            .map(|_| ()),
        Op::Advance(secs) => {
            *now += secs;
            Ok(())
        }
    };
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Any call sequence conserves supply and keeps a valid owner.
    #[test]
    fn prop_invariants_hold_for_any_call_sequence(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut f = deployment();
        let mut now = T0;
        for op in &ops {
            apply(&mut f, op, &mut now);
            prop_assert_eq!(f.balances_sum(), f.ledger.total_supply as u128, "after {:?}", op);
            prop_assert_ne!(f.ledger.current_owner(), Pubkey::default());
            prop_assert!(!f.ledger.entered);
            for s in &f.ledger.schedules {
                prop_assert!(s.claimed <= s.amount);
            }
        }
    }

    /// A rejected transfer changes nothing.
    #[test]
    fn prop_rejected_transfer_is_atomic(
        from in 0..=WALLETS,
        to in 0..=WALLETS,
        amount in amount(),
        offset in 0i64..DELAY * 2,
    ) {
        let mut f = deployment();
        f.transfer(wallet(0), wallet(1), MAX_TRANSFER, T0).unwrap();
        let holders = f.holders.clone();
        let supply = f.ledger.total_supply;
        if f.transfer(wallet(from), wallet(to), amount, T0 + offset).is_err() {
            prop_assert_eq!(&f.holders, &holders);
            prop_assert_eq!(f.ledger.total_supply, supply);
        }
    }

    /// The cap admits exactly the amounts up to `max_transfer_amount`.
    #[test]
    fn prop_cap_boundary(cap in 1u64..MAX_TRANSFER, amount in 1u64..MAX_TRANSFER) {
        let mut f = deployment();
        f.transfer(wallet(0), wallet(1), MAX_TRANSFER, T0).unwrap();
        f.ledger.set_max_transfer_amount(&wallet(0), cap).unwrap();
        let ok = f.transfer(wallet(1), wallet(2), amount, T0 + DELAY).is_ok();
        prop_assert_eq!(ok, amount <= cap);
    }
    /// Vesting never goes backwards and never over-releases.
    #[test]
    fn prop_vested_amount_is_monotonic(
        amount in 1u64..=u64::MAX,
        percentage in 1u8..=100,
        interval in 1i64..=86_400 * 30,
        t1 in 0i64..=86_400 * 365,
        dt in 0i64..=86_400 * 365,
    ) {
        let s = VestingSchedule {
            beneficiary: wallet(1),
            amount,
            claimed: 0,
            created_at: T0,
            kind: VestingKind::Interval { percentage, interval },
        };
        let a = s.vested_amount(T0 + t1).unwrap();
        let b = s.vested_amount(T0 + t1 + dt).unwrap();
        prop_assert!(a <= b);
        prop_assert!(b <= amount);
    }
}
