//! Versioned single-writer cell for values pulled from the simulation.
//!
//! Every outbound pull is issued a [`Ticket`] carrying a monotonically
//! increasing sequence number and the epoch of the session that issued it.
//! A response is applied only when its ticket is newer than the last applied
//! one and still belongs to the current epoch. Overlapping pulls may therefore
//! complete in any order without an older response overwriting a newer one,
//! and nothing that was in flight when the session ended can be applied.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    epoch: u64,
}

impl Ticket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What happened to a response handed to [`VersionedCell::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The held value was replaced
    Applied { seq: u64 },
    /// A newer response had already been applied; this one was dropped
    Stale { seq: u64, latest: u64 },
    /// The session that issued the ticket has ended
    Cancelled,
    /// The pull failed; the held value is unchanged
    Failed { error: String },
}

#[derive(Debug, Clone)]
pub struct VersionedCell<T> {
    value: Option<T>,
    issued_seq: u64,
    applied_seq: u64,
    epoch: u64,
    active: bool,
    last_error: Option<String>,
}

impl<T> Default for VersionedCell<T> {
    fn default() -> Self {
        Self {
            value: None,
            issued_seq: 0,
            applied_seq: 0,
            epoch: 0,
            active: false,
            last_error: None,
        }
    }
}

impl<T> VersionedCell<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start accepting pulls for a new session. No-op while already active.
    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.epoch += 1;
        }
    }

    /// End the session: drop the held value and invalidate every outstanding ticket
    pub fn cancel(&mut self) {
        self.active = false;
        self.epoch += 1;
        self.value = None;
        self.last_error = None;
    }

    /// Tag a new pull. Returns `None` while no session is active.
    pub fn issue(&mut self) -> Option<Ticket> {
        if !self.active {
            return None;
        }
        self.issued_seq += 1;
        Some(Ticket {
            seq: self.issued_seq,
            epoch: self.epoch,
        })
    }

    /// Settle a pull.
    ///
    /// Success replaces the value atomically. Failure leaves it untouched.
    /// Responses to tickets older than the last applied one are dropped
    /// whether they succeeded or not.
    pub fn apply(&mut self, ticket: Ticket, result: Result<T, String>) -> ApplyOutcome {
        if !self.active || ticket.epoch != self.epoch {
            return ApplyOutcome::Cancelled;
        }

        if ticket.seq <= self.applied_seq {
            return ApplyOutcome::Stale {
                seq: ticket.seq,
                latest: self.applied_seq,
            };
        }

        match result {
            Ok(value) => {
                self.value = Some(value);
                self.applied_seq = ticket.seq;
                self.last_error = None;
                ApplyOutcome::Applied { seq: ticket.seq }
            }
            Err(error) => {
                self.last_error = Some(error.clone());
                ApplyOutcome::Failed { error }
            }
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn applied_seq(&self) -> u64 {
        self.applied_seq
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_cell() -> VersionedCell<&'static str> {
        let mut cell = VersionedCell::new();
        cell.activate();
        cell
    }

    #[test]
    fn test_inactive_cell_issues_nothing() {
        let mut cell: VersionedCell<u32> = VersionedCell::new();
        assert!(cell.issue().is_none());
        assert!(cell.value().is_none());
    }

    #[test]
    fn test_applies_in_order() {
        let mut cell = active_cell();
        let first = cell.issue().expect("active cell should issue");
        assert_eq!(cell.apply(first, Ok("a")), ApplyOutcome::Applied { seq: 1 });
        let second = cell.issue().expect("active cell should issue");
        assert_eq!(cell.apply(second, Ok("b")), ApplyOutcome::Applied { seq: 2 });
        assert_eq!(cell.value(), Some(&"b"));
        assert_eq!(cell.applied_seq(), 2);
    }

    #[test]
    fn test_late_response_does_not_overwrite_newer() {
        let mut cell = active_cell();
        let tick_n = cell.issue().expect("active cell should issue");
        let tick_n1 = cell.issue().expect("active cell should issue");

        assert_eq!(cell.apply(tick_n1, Ok("n+1")), ApplyOutcome::Applied { seq: 2 });
        assert_eq!(
            cell.apply(tick_n, Ok("n")),
            ApplyOutcome::Stale { seq: 1, latest: 2 }
        );
        assert_eq!(cell.value(), Some(&"n+1"));
    }

    #[test]
    fn test_failure_keeps_previous_value() {
        let mut cell = active_cell();
        let ok = cell.issue().expect("active cell should issue");
        cell.apply(ok, Ok("good"));

        let failing = cell.issue().expect("active cell should issue");
        let outcome = cell.apply(failing, Err("Request failed: timeout".to_string()));
        assert_eq!(
            outcome,
            ApplyOutcome::Failed { error: "Request failed: timeout".to_string() }
        );
        assert_eq!(cell.value(), Some(&"good"));
        assert_eq!(cell.last_error(), Some("Request failed: timeout"));
    }

    #[test]
    fn test_failure_does_not_block_older_success() {
        let mut cell = active_cell();
        let older = cell.issue().expect("active cell should issue");
        let newer = cell.issue().expect("active cell should issue");

        cell.apply(newer, Err("boom".to_string()));
        assert_eq!(cell.apply(older, Ok("older")), ApplyOutcome::Applied { seq: 1 });
        assert_eq!(cell.value(), Some(&"older"));
        assert!(cell.last_error().is_none());
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut cell = active_cell();
        let older = cell.issue().expect("active cell should issue");
        let newer = cell.issue().expect("active cell should issue");

        cell.apply(newer, Ok("fresh"));
        assert_eq!(
            cell.apply(older, Err("late failure".to_string())),
            ApplyOutcome::Stale { seq: 1, latest: 2 }
        );
        assert!(cell.last_error().is_none());
    }

    #[test]
    fn test_cancel_discards_in_flight_responses() {
        let mut cell = active_cell();
        let in_flight = cell.issue().expect("active cell should issue");
        cell.cancel();

        assert_eq!(cell.apply(in_flight, Ok("late")), ApplyOutcome::Cancelled);
        assert!(cell.value().is_none());
        assert!(cell.issue().is_none());
    }

    #[test]
    fn test_old_session_ticket_rejected_after_restart() {
        let mut cell = active_cell();
        let old_session = cell.issue().expect("active cell should issue");
        cell.cancel();
        cell.activate();

        assert_eq!(cell.apply(old_session, Ok("old")), ApplyOutcome::Cancelled);

        let fresh = cell.issue().expect("active cell should issue");
        assert!(fresh.seq() > old_session.seq());
        assert_eq!(cell.apply(fresh, Ok("new")), ApplyOutcome::Applied { seq: 2 });
    }

    #[test]
    fn test_activate_twice_keeps_tickets_valid() {
        let mut cell = active_cell();
        let ticket = cell.issue().expect("active cell should issue");
        cell.activate();
        assert_eq!(cell.apply(ticket, Ok("still valid")), ApplyOutcome::Applied { seq: 1 });
    }
}
