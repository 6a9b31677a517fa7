/// Bookkeeping for a value that is built asynchronously and can be torn down
/// at any time, including while it is still being built.
///
/// Each build gets a ticket. A build only lands if its ticket is still the
/// pending one when it finishes; a teardown in between voids the ticket and
/// the finished value is handed back to be dropped.
pub struct MountSlot<T> {
    live: Option<T>,
    pending: Option<u64>,
    next_ticket: u64,
}

/// What a teardown found.
#[derive(Debug, PartialEq)]
pub enum Teardown<T> {
    /// A mounted value, now removed from the slot.
    Live(T),
    /// A build was in flight; its result will be discarded.
    Cancelled,
    Idle,
}

impl<T> MountSlot<T> {
    pub const fn new() -> Self {
        Self {
            live: None,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a build. `None` if something is already mounted or mounting.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_live() || self.is_pending() {
            return None;
        }
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Land a finished build. Returns the value back if its ticket was voided.
    pub fn finish(&mut self, ticket: u64, value: T) -> Option<T> {
        if self.pending != Some(ticket) {
            return Some(value);
        }
        self.pending = None;
        self.live = Some(value);
        None
    }

    /// A build failed; frees the slot if it was still pending.
    pub fn abort(&mut self, ticket: u64) {
        if self.pending == Some(ticket) {
            self.pending = None;
        }
    }

    pub fn take(&mut self) -> Teardown<T> {
        if let Some(value) = self.live.take() {
            Teardown::Live(value)
        } else if self.pending.take().is_some() {
            Teardown::Cancelled
        } else {
            Teardown::Idle
        }
    }
}

impl<T> Default for MountSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
