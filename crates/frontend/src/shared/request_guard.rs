//! Sequencing helpers for the dashboard's network calls

use std::collections::HashSet;
use std::hash::Hash;

/// Keys of mutations currently in flight.
///
/// A second mutation for a key that is already running is rejected,
/// so a double click cannot send two deletes for the same record.
#[derive(Debug, Clone)]
pub struct InFlightGuard<K> {
    active: HashSet<K>,
}

impl<K> Default for InFlightGuard<K> {
    fn default() -> Self {
        Self {
            active: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> InFlightGuard<K> {
    /// Returns `false` when `key` is already in flight
    pub fn try_begin(&mut self, key: K) -> bool {
        self.active.insert(key)
    }

    pub fn finish(&mut self, key: &K) {
        self.active.remove(key);
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active.contains(key)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Tickets for list re-fetches.
///
/// Each re-fetch takes a ticket before it starts; a response is applied only
/// if no newer response has been applied already, so a slow early response
/// cannot overwrite a fresher collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResyncSequencer {
    issued: u64,
    applied: u64,
}

impl ResyncSequencer {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Returns `true` if the response for `ticket` should replace local state
    pub fn accept(&mut self, ticket: u64) -> bool {
        if ticket > self.applied && ticket <= self.issued {
            self.applied = ticket;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.applied < self.issued
    }
}
