//! # Event Publisher
//!
//! Defines the publishing side of the event log.

use crate::events::{EventFilter, EventRecord, MarketEvent};
use crate::subscriber::Subscription;
use crate::DEFAULT_CHANNEL_CAPACITY;
use parking_lot::RwLock;
use shared_types::BlockNumber;
use tokio::sync::broadcast;
use tracing::debug;

/// Sink for marketplace events.
///
/// The marketplace only publishes; retention and fan-out are the sink's
/// concern.
pub trait EventPublisher: Send + Sync {
    /// Appends an event and returns its sequence number.
    fn publish(&self, block_number: BlockNumber, event: MarketEvent) -> u64;

    /// Get the total number of events published.
    fn events_published(&self) -> u64;
}

/// In-memory append-only event log.
///
/// Keeps the full history and broadcasts each new record with
/// `tokio::sync::broadcast`. Publishing never blocks; a send with no live
/// receivers still lands in the history.
pub struct InMemoryEventLog {
    sender: broadcast::Sender<EventRecord>,
    history: RwLock<Vec<EventRecord>>,
    capacity: usize,
}

impl InMemoryEventLog {
    /// Create a new log with default channel capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new log with the given channel capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            history: RwLock::new(Vec::new()),
            capacity,
        }
    }

    /// Subscribe to records published from now on.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        debug!(topics = ?filter.topics, "New subscription created");
        Subscription::new(self.sender.subscribe(), filter)
    }

    /// Full history in publication order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.history.read().clone()
    }

    /// Records with a sequence number strictly greater than `sequence`.
    #[must_use]
    pub fn events_since(&self, sequence: u64) -> Vec<EventRecord> {
        let history = self.history.read();
        // sequence n sits at index n - 1
        let start = usize::try_from(sequence).unwrap_or(usize::MAX).min(history.len());
        history[start..].to_vec()
    }

    /// Most recent record.
    #[must_use]
    pub fn last(&self) -> Option<EventRecord> {
        self.history.read().last().cloned()
    }

    /// Get the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Get the channel capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryEventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for InMemoryEventLog {
    fn publish(&self, block_number: BlockNumber, event: MarketEvent) -> u64 {
        let record = {
            let mut history = self.history.write();
            let record = EventRecord {
                sequence: history.len() as u64 + 1,
                block_number,
                event,
            };
            history.push(record.clone());
            record
        };
        let sequence = record.sequence;
        let topic = record.event.topic();
        let receivers = self.sender.send(record).unwrap_or(0);
        debug!(sequence, topic = ?topic, receivers, "Event published");
        sequence
    }

    fn events_published(&self) -> u64 {
        self.history.read().len() as u64
    }
}
