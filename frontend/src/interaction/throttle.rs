//! Rate limiting for bursty event handlers, expressed over virtual time so
//! the browser wrappers in `browser::timers` stay thin.

use super::clock::Millis;

/// Trailing-edge throttle: the first call in a quiet period opens a window
/// of `interval`, later calls inside the window only replace the pending
/// arguments, and the latest arguments run once when the window closes.
/// Sustained bursts therefore run at most once per `interval`.
#[derive(Debug)]
pub struct Throttle<A> {
    interval: Millis,
    window_end: Option<Millis>,
    pending: Option<A>,
}

impl<A> Throttle<A> {
    pub fn new(interval: Millis) -> Self {
        Self {
            interval,
            window_end: None,
            pending: None,
        }
    }

    /// Records a call. Returns the deadline a timer must be armed for when
    /// this call opened a new window.
    pub fn call(&mut self, now: Millis, args: A) -> Option<Millis> {
        self.pending = Some(args);
        match self.window_end {
            Some(_) => None,
            None => {
                let end = now + self.interval;
                self.window_end = Some(end);
                Some(end)
            }
        }
    }

    /// Returns the arguments to run with once the window has closed.
    pub fn fire(&mut self, now: Millis) -> Option<A> {
        match self.window_end {
            Some(end) if now >= end => {
                self.window_end = None;
                self.pending.take()
            }
            _ => None,
        }
    }
}

/// Trailing-edge debounce: every call pushes the deadline back, so the
/// function only runs after `wait` of silence.
#[derive(Debug)]
pub struct Debounce<A> {
    wait: Millis,
    deadline: Option<Millis>,
    pending: Option<A>,
}

impl<A> Debounce<A> {
    pub fn new(wait: Millis) -> Self {
        Self {
            wait,
            deadline: None,
            pending: None,
        }
    }

    /// Records a call and returns the new deadline. Any timer armed for an
    /// earlier deadline should be cancelled.
    pub fn call(&mut self, now: Millis, args: A) -> Millis {
        let deadline = now + self.wait;
        self.deadline = Some(deadline);
        self.pending = Some(args);
        deadline
    }

    pub fn fire(&mut self, now: Millis) -> Option<A> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }
}
