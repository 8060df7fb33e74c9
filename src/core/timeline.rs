use std::time::Duration;

/// Handle returned by [`Timeline::schedule`], used to cancel a pending task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<T> {
    id: TimerId,
    due: Duration,
    task: T,
}

/// Deferred tasks keyed on elapsed page time.
///
/// Nothing here reads a clock: callers pass `now` in, so the same sequencing
/// runs under requestAnimationFrame in the browser and under simulated time in
/// tests. Tasks due at the same instant fire in scheduling order.
#[derive(Debug)]
pub struct Timeline<T> {
    pending: Vec<Pending<T>>,
    next_id: u64,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending { id, due, task });
        id
    }

    /// Returns true if the task was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Duration) -> Vec<(Duration, T)> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        // stable: equal deadlines keep scheduling order
        due.sort_by_key(|p| (p.due, p.id.0));
        due.into_iter().map(|p| (p.due, p.task)).collect()
    }
}
