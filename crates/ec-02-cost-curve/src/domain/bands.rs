//! # Band Tables

use shared_types::{milli_ether, U256};

/// Creation cost steps as `(first company count, whole tokens)`, ascending.
pub const CREATION_COST_STEPS: [(u64, u64); 5] = [(0, 8), (50, 10), (100, 13), (150, 16), (200, 20)];

/// Resale multiplier denominator.
pub const MULTIPLIER_DENOMINATOR: u64 = 10;

/// A half-open price range `[lower, upper)` with its resale multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand {
    /// Inclusive lower bound in milli-ether.
    pub lower_milli: u64,
    /// Exclusive upper bound in milli-ether; `None` for the open top band.
    pub upper_milli: Option<u64>,
    /// Multiplier numerator over [`MULTIPLIER_DENOMINATOR`].
    pub numerator: u64,
}

impl PriceBand {
    /// Lower bound in wei.
    #[must_use]
    pub fn lower(&self) -> U256 {
        milli_ether(self.lower_milli)
    }

    /// Upper bound in wei, if bounded.
    #[must_use]
    pub fn upper(&self) -> Option<U256> {
        self.upper_milli.map(milli_ether)
    }

    /// Whether `price` falls in this band.
    #[must_use]
    pub fn contains(&self, price: U256) -> bool {
        price >= self.lower() && self.upper().map_or(true, |upper| price < upper)
    }

    /// Exclusive upper bound of the prices this band maps to.
    #[must_use]
    pub fn image_upper(&self) -> Option<U256> {
        self.upper()
            .map(|upper| upper * U256::from(self.numerator) / U256::from(MULTIPLIER_DENOMINATOR))
    }
}

/// Resale bands, ascending.
pub const PRICE_BANDS: [PriceBand; 5] = [
    PriceBand { lower_milli: 0, upper_milli: Some(100), numerator: 20 },
    PriceBand { lower_milli: 100, upper_milli: Some(1_000), numerator: 16 },
    PriceBand { lower_milli: 1_000, upper_milli: Some(5_000), numerator: 14 },
    PriceBand { lower_milli: 5_000, upper_milli: Some(10_000), numerator: 12 },
    PriceBand { lower_milli: 10_000, upper_milli: None, numerator: 11 },
];
