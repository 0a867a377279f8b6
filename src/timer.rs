//! Cancellable delayed events.
//!
//! `TimerQueue` is driven by an external monotonic clock expressed as a
//! `Duration` since some origin. The window feeds it the egui frame time;
//! tests feed it simulated time. Nothing fires on its own: owners call
//! [`TimerQueue::pop_due`] with the current time and handle each event.

use std::time::Duration;

/// Identifies a scheduled event so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<E> {
    handle: TimerHandle,
    due: Duration,
    event: E,
}

/// Queue of delayed events ordered by deadline.
#[derive(Debug)]
pub struct TimerQueue<E> {
    next_id: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due: now + delay,
            event,
        });
        handle
    }

    /// Cancel a scheduled event. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest deadline still pending
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove and return the earliest event whose deadline is at or before `now`.
    ///
    /// Events with equal deadlines come out in scheduling order.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, E)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= now)
            .min_by_key(|(_, p)| (p.due, p.handle.0))
            .map(|(i, _)| i)?;

        let pending = self.pending.remove(idx);
        Some((pending.due, pending.event))
    }
}
