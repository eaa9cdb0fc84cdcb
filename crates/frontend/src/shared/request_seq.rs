//! Request sequencing.
//!
//! Every load takes a ticket; only the response that carries the newest
//! ticket may write state. Older responses are dropped on arrival.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new ticket, superseding every earlier one
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut seq = RequestSeq::new();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
