//! Monetary units.

pub type Amount = i64;

pub const COIN: Amount = 100_000_000;

/// True when `value` is a valid amount under a profile's supply cap.
pub fn money_range(value: Amount, max_money: Amount) -> bool {
    (0..=max_money).contains(&value)
}
