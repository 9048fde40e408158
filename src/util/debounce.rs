//! Trailing-edge rate limiting.
//!
//! The host owns the real timers; the [`Debouncer`] only decides which timer
//! is allowed to act. Each [`poke`](Debouncer::poke) supersedes the previous
//! ticket, so after a burst of events only the timer scheduled by the last
//! one fires.

/// Identifies a timer scheduled on behalf of a [`Debouncer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket(pub u64);

/// Trailing-edge debouncer with a fixed quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Quiet period in milliseconds.
    wait_ms: f64,
    /// Ticket handed out by the most recent poke.
    latest: u64,
    /// Whether the latest ticket is still waiting to fire.
    pending: bool,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period (milliseconds).
    #[must_use]
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms: wait_ms.max(0.0),
            latest: 0,
            pending: false,
        }
    }

    /// Quiet period in milliseconds.
    #[must_use]
    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }

    /// Record a triggering event. The caller schedules a timer for
    /// [`wait_ms`](Self::wait_ms) carrying the returned ticket.
    pub fn poke(&mut self) -> TimerTicket {
        self.latest += 1;
        self.pending = true;
        TimerTicket(self.latest)
    }

    /// A timer elapsed. Returns `true` when it was the latest one, in which
    /// case the debounced action should run now.
    pub fn fire(&mut self, ticket: TimerTicket) -> bool {
        if self.pending && ticket.0 == self.latest {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Whether a timer is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
