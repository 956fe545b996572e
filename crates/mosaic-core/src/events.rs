//! Registry event log
//!
//! Every mutation the registry performs is recorded as a typed event so a
//! host can observe the wall without wiring callbacks. The log is bounded;
//! the oldest records drop first.

use crate::types::{Provider, SlotId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Registry event types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A video was added at the end of the wall
    SlotAdded { slot: SlotId, provider: Provider },

    /// A slot swapped places with a neighbor
    SlotMoved { slot: SlotId, from: usize, to: usize },

    /// A video was removed
    SlotRemoved {
        slot: SlotId,
        provider: Provider,
        had_player: bool,
    },

    /// Column/row counts changed
    LayoutChanged {
        columns: u32,
        rows: u32,
        slot_count: usize,
    },

    /// An isolated player failure (command or teardown)
    PlayerFault {
        slot: SlotId,
        code: String,
        message: String,
    },
}

/// Registry event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique event ID
    pub id: Uuid,
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Sequence number
    pub sequence: u64,
    /// The event
    #[serde(flatten)]
    pub event: RegistryEvent,
}

/// Bounded, synchronous event log
#[derive(Debug)]
pub struct EventLog {
    sequence: u64,
    buffer: VecDeque<EventRecord>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            sequence: 0,
            buffer: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record an event, evicting the oldest record at capacity.
    pub fn record(&mut self, event: RegistryEvent) {
        self.sequence += 1;
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(EventRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            sequence: self.sequence,
            event,
        });
    }

    pub fn records(&self) -> impl Iterator<Item = &EventRecord> {
        self.buffer.iter()
    }

    pub fn drain(&mut self) -> Vec<EventRecord> {
        self.buffer.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Records as a JSON array
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.buffer.iter().collect::<Vec<_>>())
            .unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let mut log = EventLog::new(8);
        let slot = SlotId::new();
        log.record(RegistryEvent::SlotAdded {
            slot,
            provider: Provider::YouTube,
        });
        log.record(RegistryEvent::SlotRemoved {
            slot,
            provider: Provider::YouTube,
            had_player: true,
        });

        let sequences: Vec<u64> = log.records().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = EventLog::new(2);
        for _ in 0..3 {
            log.record(RegistryEvent::LayoutChanged {
                columns: 1,
                rows: 1,
                slot_count: 0,
            });
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.records().next().unwrap().sequence, 2);
    }

    #[test]
    fn test_json_shape() {
        let mut log = EventLog::new(4);
        log.record(RegistryEvent::SlotAdded {
            slot: SlotId::new(),
            provider: Provider::Twitch,
        });
        let json = log.to_json();
        assert!(json.contains("\"event\":\"slot_added\""));
        assert!(json.contains("\"provider\":\"twitch\""));
    }
}
