//! Hold-to-repeat schedule
//!
//! After `start`, nothing fires during `delay`; from then on the timer fires
//! once every `interval` until cancelled. The delay and the repeat share one
//! task, so a single cancel stops both.

/// Token for one started schedule. Cancelling a stale token is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepeatHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
struct RepeatTask {
    handle: RepeatHandle,
    /// Time since start
    elapsed: f32,
    /// Fires delivered so far
    fired: u32,
}

/// Cancellable delayed fixed-rate timer, advanced by the caller's clock
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatTimer {
    delay: f32,
    interval: f32,
    task: Option<RepeatTask>,
    next_handle: u64,
}

impl RepeatTimer {
    pub fn new(delay: f32, interval: f32) -> Self {
        Self {
            delay,
            interval,
            task: None,
            next_handle: 1,
        }
    }

    /// Start (or restart) the schedule
    pub fn start(&mut self) -> RepeatHandle {
        let handle = RepeatHandle(self.next_handle);
        self.next_handle += 1;
        self.task = Some(RepeatTask {
            handle,
            elapsed: 0.0,
            fired: 0,
        });
        handle
    }

    /// Stop the schedule only if `handle` is still the running one.
    /// Safe to call repeatedly or after a restart.
    pub fn cancel_handle(&mut self, handle: RepeatHandle) -> bool {
        match self.task {
            Some(task) if task.handle == handle => {
                self.task = None;
                true
            }
            _ => false,
        }
    }

    pub fn active_handle(&self) -> Option<RepeatHandle> {
        self.task.map(|t| t.handle)
    }

    /// Advance by `dt` seconds and return how many times the timer fired
    pub fn advance(&mut self, dt: f32) -> u32 {
        let (delay, interval) = (self.delay, self.interval);
        let Some(task) = self.task.as_mut() else {
            return 0;
        };
        if dt.is_finite() && dt > 0.0 {
            task.elapsed += dt;
        }

        let repeating_for = task.elapsed - delay;
        if repeating_for < interval {
            return 0;
        }
        let due = (repeating_for / interval).floor() as u32;
        let new_fires = due.saturating_sub(task.fired);
        task.fired = due;
        new_fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer() -> RepeatTimer {
        RepeatTimer::new(0.3, 0.1)
    }

    #[test]
    fn test_idle_never_fires() {
        let mut t = timer();
        assert_eq!(t.advance(10.0), 0);
        assert_eq!(t.active_handle(), None);
    }

    #[test]
    fn test_delay_then_fixed_rate() {
        let mut t = timer();
        t.start();
        assert_eq!(t.advance(0.25), 0);
        // Repeat clock starts at 0.3, first fire one interval later
        assert_eq!(t.advance(0.1), 0);
        assert_eq!(t.advance(0.1), 1);
        // 0.45 -> 1.05 s covers six more intervals
        assert_eq!(t.advance(0.6), 6);
    }

    #[test]
    fn test_cancel_stops_delay_and_repeat() {
        let mut t = timer();
        let h = t.start();
        t.advance(0.2);
        assert!(t.cancel_handle(h));
        assert_eq!(t.advance(5.0), 0);

        let h = t.start();
        t.advance(0.55);
        assert!(t.cancel_handle(h));
        assert_eq!(t.advance(5.0), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut t = timer();
        let h = t.start();
        assert!(t.cancel_handle(h));
        assert!(!t.cancel_handle(h));
        assert_eq!(t.active_handle(), None);
    }

    #[test]
    fn test_stale_handle_does_not_cancel_restart() {
        let mut t = timer();
        let first = t.start();
        let second = t.start();
        assert_ne!(first, second);
        assert!(!t.cancel_handle(first));
        assert_eq!(t.active_handle(), Some(second));
    }

    #[test]
    fn test_restart_resets_delay() {
        let mut t = timer();
        t.start();
        t.advance(0.55);
        t.start();
        assert_eq!(t.advance(0.35), 0);
    }
}
