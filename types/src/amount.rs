//! Token amounts.
//!
//! Amounts are raw fixed-point integers (u128) with 18 decimals. Vote prices and
//! bonuses are computed in whole tokens and scaled by `TOKEN_UNIT`.

/// Raw units per whole token.
pub const TOKEN_UNIT: u128 = 1_000_000_000_000_000_000;

/// `n` whole tokens in raw units. Saturates rather than wrapping.
pub const fn tokens(n: u128) -> u128 {
    n.saturating_mul(TOKEN_UNIT)
}
