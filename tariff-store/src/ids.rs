//! Identifier generators
//!
//! The store draws ids from an injected generator and re-draws while an id
//! is already taken, so a generator only has to be collision-free in
//! practice.

use std::time::{SystemTime, UNIX_EPOCH};

use tariff_core::domain::ServiceId;

/// Source of fresh service identifiers
pub trait IdGenerator {
    /// Returns the next identifier
    fn next_id(&mut self) -> ServiceId;

    /// Called for every id loaded from storage
    ///
    /// Generators that can, should never hand out an observed id afterwards.
    fn observe(&mut self, _id: ServiceId) {}
}

/// Monotonic counter starting at 1
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ServiceId {
        let id = ServiceId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    fn observe(&mut self, id: ServiceId) {
        if id.get() >= self.next {
            self.next = id.get().saturating_add(1);
        }
    }
}

/// Milliseconds since the Unix epoch, kept strictly increasing
///
/// Two creates within the same millisecond get consecutive ids instead of
/// the same one.
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    last: u64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> ServiceId {
        let now = Self::now_millis();
        self.last = if now > self.last {
            now
        } else {
            self.last.saturating_add(1)
        };
        ServiceId(self.last)
    }

    fn observe(&mut self, id: ServiceId) {
        self.last = self.last.max(id.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(), ServiceId(1));
        assert_eq!(ids.next_id(), ServiceId(2));
    }

    #[test]
    fn test_sequential_ids_skip_observed() {
        let mut ids = SequentialIds::new();
        ids.observe(ServiceId(7));
        ids.observe(ServiceId(3));
        assert_eq!(ids.next_id(), ServiceId(8));
    }

    #[test]
    fn test_timestamp_ids_strictly_increase() {
        let mut ids = TimestampIds::new();
        let mut previous = ids.next_id();
        for _ in 0..1000 {
            let id = ids.next_id();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn test_timestamp_ids_skip_observed_future_id() {
        let mut ids = TimestampIds::new();
        let far_future = ServiceId(u64::MAX / 2);
        ids.observe(far_future);
        assert!(ids.next_id() > far_future);
    }
}
