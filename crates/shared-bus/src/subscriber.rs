//! # Event Subscriber
//!
//! Defines the subscription side of the event log.

use crate::events::{EventFilter, EventRecord};
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::debug;

/// Errors from subscription operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The event log was dropped.
    #[error("Event log closed")]
    Closed,
}

/// A live subscription handle.
pub struct Subscription {
    receiver: broadcast::Receiver<EventRecord>,
    filter: EventFilter,
}

impl Subscription {
    pub(crate) fn new(receiver: broadcast::Receiver<EventRecord>, filter: EventFilter) -> Self {
        Self { receiver, filter }
    }

    /// Receive the next record that matches the filter.
    ///
    /// Returns `None` once the log is dropped. A lagging subscriber skips the
    /// records it missed; they remain available through `events_since`.
    pub async fn recv(&mut self) -> Option<EventRecord> {
        loop {
            let record = match self.receiver.recv().await {
                Ok(r) => r,
                Err(broadcast::error::RecvError::Closed) => return None,
                Err(broadcast::error::RecvError::Lagged(count)) => {
                    debug!(lagged = count, "Subscriber lagged, some events dropped");
                    continue;
                }
            };

            if self.filter.matches(&record.event) {
                return Some(record);
            }
        }
    }

    /// Try to receive the next matching record without waiting.
    pub fn try_recv(&mut self) -> Result<Option<EventRecord>, SubscriptionError> {
        loop {
            let record = match self.receiver.try_recv() {
                Ok(r) => r,
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(broadcast::error::TryRecvError::Closed) => {
                    return Err(SubscriptionError::Closed)
                }
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
            };

            if self.filter.matches(&record.event) {
                return Ok(Some(record));
            }
        }
    }

    /// Get the filter for this subscription.
    #[must_use]
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }
}
