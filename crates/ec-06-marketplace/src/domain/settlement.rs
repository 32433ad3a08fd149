//! # Resale Settlement
//!
//! ```text
//! profit        = price - last_price            (0 when sold at a loss)
//! seller payout = last_price + profit * 80 / 100
//!               = price                         when price < last_price
//! retained      = value - seller payout
//! ```

use shared_types::U256;

/// Share of the resale profit paid to the seller, in percent.
pub const SELLER_PROFIT_SHARE_PERCENT: u64 = 80;

/// What one resale pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Native value credited to the seller.
    pub seller_payout: U256,
    /// Native value the marketplace keeps.
    pub retained: U256,
}

impl Settlement {
    /// Splits `value` attached to a purchase at `price` of a company the
    /// seller bought at `last_price`. Requires `value >= price`.
    #[must_use]
    pub fn split(value: U256, price: U256, last_price: U256) -> Self {
        let seller_payout = if price < last_price {
            price
        } else {
            let profit = price - last_price;
            last_price + seller_share(profit)
        };
        Self {
            seller_payout,
            retained: value.saturating_sub(seller_payout),
        }
    }
}

/// `floor(profit * 80 / 100)` without the intermediate product.
fn seller_share(profit: U256) -> U256 {
    let hundred = U256::from(100u8);
    let share = U256::from(SELLER_PROFIT_SHARE_PERCENT);
    (profit / hundred) * share + (profit % hundred) * share / hundred
}
