/// Milliseconds on whatever time base the host clock uses.
pub type Millis = u64;

pub trait Clock {
    fn now(&self) -> Millis;
}

/// Monotonic clock: `performance.now()` in the browser, an `Instant`
/// elsewhere. Deadlines never move when the wall clock is adjusted.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        monotonic_now()
    }
}

#[cfg(target_arch = "wasm32")]
fn monotonic_now() -> Millis {
    match web_sys::window().and_then(|w| w.performance()) {
        Some(performance) => performance.now().max(0.0) as Millis,
        // No window (e.g. a worker); the wall clock is the only time source.
        None => chrono::Utc::now().timestamp_millis().max(0) as Millis,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn monotonic_now() -> Millis {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static STARTED: Lazy<Instant> = Lazy::new(Instant::now);
    STARTED.elapsed().as_millis() as Millis
}
