//! Explicit state for a simulated asynchronous action.
//!
//! Every submission takes a ticket. Only the completion that carries the
//! ticket of the currently pending submission may settle the state, so a
//! timer that fires after a reset or a newer submission is dropped.

/// Identifier handed out per submission.
pub type Ticket = u64;

#[derive(Clone, Debug, PartialEq)]
pub enum AsyncState<R> {
    Idle,
    Pending { ticket: Ticket },
    Ready(R),
    Failed(String),
}

impl<R> Default for AsyncState<R> {
    fn default() -> Self {
        AsyncState::Idle
    }
}

impl<R> AsyncState<R> {
    pub fn is_idle(&self) -> bool {
        matches!(self, AsyncState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AsyncState::Pending { .. })
    }

    /// True once the action has settled, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, AsyncState::Ready(_) | AsyncState::Failed(_))
    }

    pub fn pending_ticket(&self) -> Option<Ticket> {
        match self {
            AsyncState::Pending { ticket } => Some(*ticket),
            _ => None,
        }
    }

    pub fn ready(&self) -> Option<&R> {
        match self {
            AsyncState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            AsyncState::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Moves to `Pending` under `ticket`, replacing whatever was there.
    pub fn begin(&mut self, ticket: Ticket) {
        *self = AsyncState::Pending { ticket };
    }

    /// Settles with a value. Returns `false` and leaves the state untouched
    /// when `ticket` is not the one currently pending.
    pub fn resolve(&mut self, ticket: Ticket, value: R) -> bool {
        if self.pending_ticket() != Some(ticket) {
            tracing::debug!(ticket, "discarding stale completion");
            return false;
        }
        *self = AsyncState::Ready(value);
        true
    }

    /// Settles with a failure reason, under the same ticket rule as `resolve`.
    pub fn fail(&mut self, ticket: Ticket, reason: impl Into<String>) -> bool {
        if self.pending_ticket() != Some(ticket) {
            tracing::debug!(ticket, "discarding stale failure");
            return false;
        }
        *self = AsyncState::Failed(reason.into());
        true
    }

    pub fn reset(&mut self) {
        *self = AsyncState::Idle;
    }
}

/// Monotonic ticket source owned by a screen's state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketCounter {
    last: Ticket,
}

impl TicketCounter {
    pub fn next(&mut self) -> Ticket {
        self.last += 1;
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_requires_matching_ticket() {
        let mut counter = TicketCounter::default();
        let mut state: AsyncState<u32> = AsyncState::default();

        let first = counter.next();
        state.begin(first);
        let second = counter.next();
        state.begin(second);

        // The first submission's timer fires late
        assert!(!state.resolve(first, 1));
        assert_eq!(state, AsyncState::Pending { ticket: second });

        assert!(state.resolve(second, 2));
        assert_eq!(state.ready(), Some(&2));
    }

    #[test]
    fn test_completion_after_reset_is_ignored() {
        let mut counter = TicketCounter::default();
        let mut state: AsyncState<&str> = AsyncState::default();

        let ticket = counter.next();
        state.begin(ticket);
        state.reset();

        assert!(!state.resolve(ticket, "late"));
        assert!(!state.fail(ticket, "late"));
        assert!(state.is_idle());
    }

    #[test]
    fn test_failure_carries_reason() {
        let mut state: AsyncState<()> = AsyncState::default();
        state.begin(7);
        assert!(state.fail(7, "rejected"));
        assert!(state.is_settled());
        assert_eq!(state.failure(), Some("rejected"));
        assert_eq!(state.pending_ticket(), None);
    }

    #[test]
    fn test_ticket_counter_is_monotonic() {
        let mut counter = TicketCounter::default();
        let a = counter.next();
        let b = counter.next();
        assert!(b > a);
    }
}
