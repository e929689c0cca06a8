use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

use crate::interaction::clock::{Clock, Millis, SystemClock};
use crate::interaction::throttle::{Debounce, Throttle};

struct Throttled<A> {
    throttle: Throttle<A>,
    timer: Option<Timeout>,
    callback: Rc<dyn Fn(A)>,
}

/// Browser-timer driven `Throttle`. Dropping it cancels the pending run.
pub struct ThrottledFn<A: 'static> {
    inner: Rc<RefCell<Throttled<A>>>,
}

impl<A: 'static> ThrottledFn<A> {
    pub fn new(interval: Millis, callback: impl Fn(A) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Throttled {
                throttle: Throttle::new(interval),
                timer: None,
                callback: Rc::new(callback),
            })),
        }
    }

    pub fn call(&self, args: A) {
        let now = SystemClock.now();
        let mut inner = self.inner.borrow_mut();
        if let Some(deadline) = inner.throttle.call(now, args) {
            let weak = Rc::downgrade(&self.inner);
            inner.timer = Some(Timeout::new(delay(now, deadline), move || {
                Self::fire(&weak, deadline);
            }));
        }
    }

    fn fire(weak: &Weak<RefCell<Throttled<A>>>, deadline: Millis) {
        let Some(inner) = weak.upgrade() else { return };
        let (args, callback) = {
            let mut inner = inner.borrow_mut();
            inner.timer = None;
            (inner.throttle.fire(deadline), inner.callback.clone())
        };
        if let Some(args) = args {
            callback(args);
        }
    }
}

struct Debounced<A> {
    debounce: Debounce<A>,
    timer: Option<Timeout>,
    callback: Rc<dyn Fn(A)>,
}

/// Browser-timer driven `Debounce`. Dropping it cancels the pending run.
pub struct DebouncedFn<A: 'static> {
    inner: Rc<RefCell<Debounced<A>>>,
}

impl<A: 'static> DebouncedFn<A> {
    pub fn new(wait: Millis, callback: impl Fn(A) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Debounced {
                debounce: Debounce::new(wait),
                timer: None,
                callback: Rc::new(callback),
            })),
        }
    }

    pub fn call(&self, args: A) {
        let now = SystemClock.now();
        let mut inner = self.inner.borrow_mut();
        let deadline = inner.debounce.call(now, args);
        let weak = Rc::downgrade(&self.inner);
        // Replacing the handle cancels the previous timer.
        inner.timer = Some(Timeout::new(delay(now, deadline), move || {
            let Some(inner) = weak.upgrade() else { return };
            let (args, callback) = {
                let mut inner = inner.borrow_mut();
                inner.timer = None;
                (inner.debounce.fire(deadline), inner.callback.clone())
            };
            if let Some(args) = args {
                callback(args);
            }
        }));
    }
}

pub(crate) fn delay(now: Millis, deadline: Millis) -> u32 {
    deadline.saturating_sub(now).min(u32::MAX as Millis) as u32
}
