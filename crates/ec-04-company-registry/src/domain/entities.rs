//! # Catalog Entities

use serde::{Deserialize, Serialize};
use shared_types::{BlockNumber, CompanyName, LogoUrl};

/// Default blocks between two consecutive releases.
pub const DEFAULT_BLOCKS_IN_BETWEEN: u64 = 240;

/// Default number of intervals `start_block` is backdated at deployment.
pub const DEFAULT_LAUNCH_BACKLOG: u64 = 100;

/// A seeded top company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCompany {
    /// Display name.
    pub name: CompanyName,
    /// Yield weight granted to its owner.
    pub performance: u64,
    /// Logo URL.
    pub logo_url: LogoUrl,
    /// 0-based auction index.
    pub index: u64,
}

/// When each auction index opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSchedule {
    /// Block at which index 0 opens.
    pub start_block: BlockNumber,
    /// Blocks between consecutive indices.
    pub blocks_in_between: u64,
}

impl ReleaseSchedule {
    /// Default schedule for a catalog deployed at `deploy_block`.
    #[must_use]
    pub fn launched_at(deploy_block: BlockNumber) -> Self {
        Self {
            start_block: deploy_block
                .saturating_sub(DEFAULT_LAUNCH_BACKLOG.saturating_mul(DEFAULT_BLOCKS_IN_BETWEEN)),
            blocks_in_between: DEFAULT_BLOCKS_IN_BETWEEN,
        }
    }

    /// Highest index open at `block`, or `None` before `start_block`.
    #[must_use]
    pub fn released_up_to(&self, block: BlockNumber) -> Option<u64> {
        if block < self.start_block {
            return None;
        }
        Some((block - self.start_block) / self.blocks_in_between.max(1))
    }

    /// Whether `index` is open at `block`.
    #[must_use]
    pub fn is_released(&self, index: u64, block: BlockNumber) -> bool {
        self.released_up_to(block).is_some_and(|max| index <= max)
    }
}
