//! Cancellable deferred events on a virtual timeline.
//!
//! Every timed behavior in a page (message swaps, modal exit, session
//! expiry, celebration cleanup, delayed navigation) is scheduled here
//! instead of on free-floating timers. Time only moves when the host calls
//! [`Scheduler::pop_due`] / [`Scheduler::advance_to`], which makes timing
//! fully deterministic under test.
//!
//! Cancelled timers stay in the heap and are skipped lazily.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Handle to a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A scheduled event
#[derive(Debug)]
struct ScheduledEvent<E> {
    /// Virtual time the event is due
    run_at: Duration,
    /// Unique id, also the tie-breaker for equal deadlines
    id: u64,
    event: E,
}

impl<E> PartialEq for ScheduledEvent<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E> Eq for ScheduledEvent<E> {}

impl<E> PartialOrd for ScheduledEvent<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for ScheduledEvent<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .run_at
            .cmp(&self.run_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Virtual-time event queue.
#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    tasks: BinaryHeap<ScheduledEvent<E>>,
    live: HashSet<u64>,
    next_id: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            tasks: BinaryHeap::new(),
            live: HashSet::new(),
            next_id: 0,
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `event` to fire `delay` after the current virtual time.
    pub fn schedule_after(&mut self, delay: Duration, event: E) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;

        self.tasks.push(ScheduledEvent {
            run_at: self.now + delay,
            id,
            event,
        });
        self.live.insert(id);

        TimerId(id)
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.live.remove(&id.0)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.live.contains(&id.0)
    }

    /// Number of pending (non-cancelled) timers.
    pub fn pending(&self) -> usize {
        self.live.len()
    }

    /// Duration until the next pending timer is due.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.tasks
            .iter()
            .filter(|task| self.live.contains(&task.id))
            .map(|task| task.run_at.saturating_sub(self.now))
            .min()
    }

    /// Pop the earliest pending event due at or before `until`.
    ///
    /// Virtual time moves to the event's deadline, so anything the caller
    /// schedules while handling it is relative to that instant.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, E)> {
        while let Some(task) = self.tasks.peek() {
            if !self.live.contains(&task.id) {
                self.tasks.pop();
                continue;
            }
            if task.run_at > until {
                return None;
            }

            let task = self.tasks.pop()?;
            self.live.remove(&task.id);
            self.now = self.now.max(task.run_at);
            return Some((TimerId(task.id), task.event));
        }
        None
    }

    /// Fire everything due at or before `until`, in order, and move the
    /// clock to `until`.
    pub fn advance_to(&mut self, until: Duration) -> Vec<E> {
        let mut fired = Vec::new();
        while let Some((_, event)) = self.pop_due(until) {
            fired.push(event);
        }
        self.now = self.now.max(until);
        fired
    }

    /// Drop every pending timer. Used when the page context goes away.
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.live.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut sched = Scheduler::new();
        sched.schedule_after(ms(300), "late");
        sched.schedule_after(ms(100), "early");
        sched.schedule_after(ms(100), "early-second");

        assert_eq!(sched.advance_to(ms(1000)), vec!["early", "early-second", "late"]);
        assert_eq!(sched.now(), ms(1000));
    }

    #[test]
    fn test_nothing_fires_before_deadline() {
        let mut sched = Scheduler::new();
        sched.schedule_after(ms(500), ());

        assert!(sched.advance_to(ms(499)).is_empty());
        assert_eq!(sched.advance_to(ms(500)).len(), 1);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut sched = Scheduler::new();
        let id = sched.schedule_after(ms(100), "cancelled");
        sched.schedule_after(ms(200), "kept");

        assert!(sched.cancel(id));
        assert!(!sched.cancel(id));
        assert!(!sched.is_pending(id));
        assert_eq!(sched.advance_to(ms(1000)), vec!["kept"]);
    }

    #[test]
    fn test_time_until_next_skips_cancelled() {
        let mut sched = Scheduler::new();
        let first = sched.schedule_after(ms(100), 1);
        sched.schedule_after(ms(250), 2);
        sched.cancel(first);

        assert_eq!(sched.time_until_next(), Some(ms(250)));
        sched.advance_to(ms(50));
        assert_eq!(sched.time_until_next(), Some(ms(200)));
    }

    #[test]
    fn test_pop_due_moves_clock_to_deadline() {
        let mut sched = Scheduler::new();
        sched.schedule_after(ms(100), "a");

        let (_, event) = sched.pop_due(ms(1000)).unwrap();
        assert_eq!(event, "a");
        assert_eq!(sched.now(), ms(100));

        // Scheduled relative to the deadline that just fired
        sched.schedule_after(ms(100), "b");
        assert_eq!(sched.pop_due(ms(1000)).map(|(_, e)| e), Some("b"));
        assert_eq!(sched.now(), ms(200));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut sched = Scheduler::new();
        sched.schedule_after(ms(10), ());
        sched.schedule_after(ms(20), ());
        sched.clear();

        assert_eq!(sched.pending(), 0);
        assert_eq!(sched.time_until_next(), None);
        assert!(sched.advance_to(ms(100)).is_empty());
    }
}
