//! # Marketplace Events
//!
//! Observable effects of marketplace operations.

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockNumber, CompanyName, LogoUrl, U256};

/// A domain event emitted by a state-changing marketplace operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// A company entered the marketplace (top-company purchase or creation).
    CompanyCreated {
        /// Company name.
        name: CompanyName,
        /// Registered price.
        price: U256,
        /// First owner.
        owner: Address,
    },

    /// A company changed hands.
    CompanyTransferred {
        /// Company name.
        name: CompanyName,
        /// Seller.
        old_owner: Address,
        /// Buyer.
        owner: Address,
        /// Next resale price.
        new_price: U256,
    },

    /// Owner replaced the logo.
    CompanyLogoUpdated {
        /// Company name.
        name: CompanyName,
        /// New logo URL.
        logo_url: LogoUrl,
    },

    /// Company went on or off sale.
    CompanySaleStatusChanged {
        /// Company name.
        name: CompanyName,
        /// True when now on sale.
        sale_status: bool,
    },

    /// Outcome of one lucky-draw ticket, won or lost.
    SuperPrivilegeLuckyDrawResult {
        /// Ticket holder.
        account: Address,
        /// Roll in `0..100`.
        roll: u64,
        /// Whether the roll met the threshold.
        won: bool,
        /// Holder's privilege count after the draw.
        privilege_count: u64,
    },

    /// Yield paid out to an owner.
    TokensClaimed {
        /// Claimer.
        account: Address,
        /// Token base units paid.
        amount: U256,
    },
}

impl MarketEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::CompanyCreated { .. }
            | Self::CompanyTransferred { .. }
            | Self::CompanySaleStatusChanged { .. } => EventTopic::Ownership,
            Self::CompanyLogoUpdated { .. } => EventTopic::Metadata,
            Self::SuperPrivilegeLuckyDrawResult { .. } => EventTopic::LuckyDraw,
            Self::TokensClaimed { .. } => EventTopic::Yield,
        }
    }

    /// Company the event concerns, if any.
    #[must_use]
    pub fn company(&self) -> Option<&CompanyName> {
        match self {
            Self::CompanyCreated { name, .. }
            | Self::CompanyTransferred { name, .. }
            | Self::CompanyLogoUpdated { name, .. }
            | Self::CompanySaleStatusChanged { name, .. } => Some(name),
            Self::SuperPrivilegeLuckyDrawResult { .. } | Self::TokensClaimed { .. } => None,
        }
    }

    /// Stable snake-case label, used as a metric dimension.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CompanyCreated { .. } => "company_created",
            Self::CompanyTransferred { .. } => "company_transferred",
            Self::CompanyLogoUpdated { .. } => "company_logo_updated",
            Self::CompanySaleStatusChanged { .. } => "company_sale_status_changed",
            Self::SuperPrivilegeLuckyDrawResult { .. } => "super_privilege_lucky_draw_result",
            Self::TokensClaimed { .. } => "tokens_claimed",
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Creation, transfer and sale-status changes.
    Ownership,
    /// Logo updates.
    Metadata,
    /// Lucky-draw outcomes.
    LuckyDraw,
    /// Yield claims.
    Yield,
    /// All events (no filtering).
    All,
}

/// A published event with its position in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the log, starting at 1.
    pub sequence: u64,
    /// Block of the call that emitted the event.
    pub block_number: BlockNumber,
    /// The event.
    pub event: MarketEvent,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &MarketEvent) -> bool {
        self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic())
    }
}
