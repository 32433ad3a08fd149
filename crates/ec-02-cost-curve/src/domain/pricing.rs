//! # Pricing Functions

use shared_types::U256;

use super::bands::{PriceBand, CREATION_COST_STEPS, MULTIPLIER_DENOMINATOR, PRICE_BANDS};

/// Whole tokens charged to create a company when `company_count` user
/// companies already exist.
#[must_use]
pub fn creation_cost(company_count: u64) -> u64 {
    CREATION_COST_STEPS
        .iter()
        .rev()
        .find(|(from, _)| company_count >= *from)
        .map_or(CREATION_COST_STEPS[0].1, |(_, cost)| *cost)
}

fn band_of(price: U256) -> &'static PriceBand {
    PRICE_BANDS
        .iter()
        .rev()
        .find(|band| price >= band.lower())
        .unwrap_or(&PRICE_BANDS[0])
}

/// `floor(p * num / 10)` without the intermediate product overflowing.
/// Saturates at `U256::MAX`.
fn scale_up(price: U256, numerator: u64) -> U256 {
    let den = U256::from(MULTIPLIER_DENOMINATOR);
    let num = U256::from(numerator);
    let (q, r) = price.div_mod(den);
    q.saturating_mul(num).saturating_add(r * num / den)
}

/// `floor(10 * x / num)` and `ceil(10 * x / num)`.
fn scale_down(x: U256, numerator: u64) -> (U256, U256) {
    let den = U256::from(MULTIPLIER_DENOMINATOR);
    let num = U256::from(numerator);
    let (q, r) = x.div_mod(num);
    let scaled = r * den;
    let base = q * den;
    let floor = base + scaled / num;
    let ceil = if (scaled % num).is_zero() { floor } else { floor + 1 };
    (floor, ceil)
}

/// Resale price after a company sells at `price`.
#[must_use]
pub fn next_price(price: U256) -> U256 {
    scale_up(price, band_of(price).numerator)
}

/// A price whose [`next_price`] is `price`.
///
/// Bands are tried from the highest down; the first band holding an exact
/// pre-image wins. Band images overlap just above each band edge (0.08 and
/// 0.1 ether both step to 0.16), and there the higher pre-image is returned.
/// Inputs with no pre-image resolve to `floor(10x / num)` of the lowest band
/// whose image reaches above `x`, so `previous_price(1) == 0`.
#[must_use]
pub fn previous_price(price: U256) -> U256 {
    for band in PRICE_BANDS.iter().rev() {
        let (_, candidate) = scale_down(price, band.numerator);
        if band.contains(candidate) && next_price(candidate) == price {
            return candidate;
        }
    }

    let band = PRICE_BANDS
        .iter()
        .find(|band| band.image_upper().map_or(true, |upper| price < upper))
        .unwrap_or(&PRICE_BANDS[PRICE_BANDS.len() - 1]);
    scale_down(price, band.numerator).0
}
