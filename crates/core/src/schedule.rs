//! One-shot delayed events tagged with the session that scheduled them.
//!
//! Every entry carries a [`TimerToken`] holding the session generation. The
//! controller compares it with the live session before applying the event, so
//! an entry scheduled before a reset can never touch the new board.

/// What to do when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledEvent {
    /// Resolve the two face-up cards.
    EvaluatePending,
    /// Show the win summary after the final match.
    AnnounceWin,
}

/// Identifies the session a timer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub token: TimerToken,
    pub due_ms: u64,
    pub event: ScheduledEvent,
}

/// Pending one-shot timers, fired in due order.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    entries: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, token: TimerToken, due_ms: u64, event: ScheduledEvent) {
        self.entries.push(Scheduled {
            token,
            due_ms,
            event,
        });
    }

    /// Earliest due time, if anything is scheduled
    pub fn next_due(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.due_ms).min()
    }

    /// Remove and return the earliest entry due at or before `now_ms`.
    ///
    /// Entries with equal due times come out in scheduling order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Scheduled> {
        let (idx, _) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= now_ms)
            .min_by_key(|(i, e)| (e.due_ms, *i))?;
        Some(self.entries.remove(idx))
    }

    /// Remove entries for `event` scheduled by `token`. Returns how many were removed.
    pub fn cancel(&mut self, token: TimerToken, event: ScheduledEvent) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !(e.token == token && e.event == event));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
