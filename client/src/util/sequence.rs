//! Latest-wins ticket counter for debounced input and overlapping fetches.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use leptos::prelude::*;

/// Each [`Sequence::issue`] supersedes every earlier ticket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    latest: u64,
}

impl Sequence {
    pub fn issue(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Issue a ticket from a sequence kept in a component's `StoredValue`.
pub fn issue_ticket(seq: StoredValue<Sequence>) -> u64 {
    let mut next = seq.get_value();
    let ticket = next.issue();
    seq.set_value(next);
    ticket
}
