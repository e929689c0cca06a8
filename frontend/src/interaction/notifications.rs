use std::collections::BTreeMap;

use log::{debug, warn};

use super::clock::{Clock, Millis};
use super::severity::Severity;
use super::style;
use super::surface::DisplaySurface;
use super::timeline::Timeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    /// Lets the browser commit the off-screen position before the entry
    /// transition starts.
    pub enter_delay: Millis,
    pub display: Millis,
    pub exit: Millis,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            enter_delay: 100,
            display: 4_000,
            exit: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationState {
    Entering,
    Visible,
    Exiting,
    Removed,
}

impl NotificationState {
    /// Next phase and how long the current one lasts.
    fn successor(self, timing: &NotificationTiming, display: Millis) -> Option<(NotificationState, Millis)> {
        match self {
            NotificationState::Entering => Some((NotificationState::Visible, timing.enter_delay)),
            NotificationState::Visible => Some((NotificationState::Exiting, display)),
            NotificationState::Exiting => Some((NotificationState::Removed, timing.exit)),
            NotificationState::Removed => None,
        }
    }
}

struct Notification<N> {
    message: String,
    severity: Severity,
    state: NotificationState,
    created_at: Millis,
    display: Millis,
    node: N,
}

/// Owns every live toast and walks each one through
/// entering → visible → exiting → removed on its own schedule.
pub struct NotificationCenter<S: DisplaySurface, C: Clock> {
    surface: S,
    clock: C,
    timing: NotificationTiming,
    live: BTreeMap<NotificationHandle, Notification<S::Node>>,
    timeline: Timeline<NotificationHandle>,
    next_id: u64,
}

impl<S: DisplaySurface, C: Clock> NotificationCenter<S, C> {
    pub fn new(surface: S, clock: C) -> Self {
        Self::with_timing(surface, clock, NotificationTiming::default())
    }

    pub fn with_timing(surface: S, clock: C, timing: NotificationTiming) -> Self {
        Self {
            surface,
            clock,
            timing,
            live: BTreeMap::new(),
            timeline: Timeline::default(),
            next_id: 0,
        }
    }

    pub fn notify(&mut self, message: &str, severity: Severity) -> NotificationHandle {
        let display = self.timing.display;
        self.notify_for(message, severity, display)
    }

    /// Like `notify` with a caller-chosen display duration.
    pub fn notify_for(&mut self, message: &str, severity: Severity, display: Millis) -> NotificationHandle {
        let handle = NotificationHandle(self.next_id);
        self.next_id += 1;

        if message.trim().is_empty() {
            warn!("Ignoring empty {} notification", severity);
            return handle;
        }

        let node = match self
            .surface
            .create_toast(&severity.class_name(), message, &style::toast_base(severity))
        {
            Ok(node) => node,
            Err(e) => {
                warn!("Dropping notification {:?}: {}", message, e);
                return handle;
            }
        };

        let now = self.clock.now();
        self.timeline.schedule(now + self.timing.enter_delay, handle);
        self.live.insert(
            handle,
            Notification {
                message: message.to_string(),
                severity,
                state: NotificationState::Entering,
                created_at: now,
                display,
                node,
            },
        );
        debug!("Notification {:?} entering ({})", handle, severity);
        handle
    }

    /// Applies every transition that is due by the clock's current time.
    pub fn advance(&mut self) {
        let now = self.clock.now();
        while let Some((due, handle)) = self.timeline.pop_due(now) {
            self.transition(handle, due);
        }
    }

    fn transition(&mut self, handle: NotificationHandle, due: Millis) {
        let Some(notification) = self.live.get_mut(&handle) else {
            return;
        };
        let Some((next, _)) = notification.state.successor(&self.timing, notification.display) else {
            return;
        };
        notification.state = next;

        match next {
            NotificationState::Visible => {
                self.surface.apply_style(&notification.node, &style::toast_position(true));
            }
            NotificationState::Exiting => {
                self.surface.apply_style(&notification.node, &style::toast_position(false));
            }
            NotificationState::Removed => {
                if !self.surface.detach(&notification.node) {
                    debug!("Notification {:?} was already detached", handle);
                }
                debug!(
                    "{} notification {:?} removed after {} ms",
                    notification.severity,
                    notification.message,
                    due.saturating_sub(notification.created_at)
                );
                self.live.remove(&handle);
                return;
            }
            NotificationState::Entering => {}
        }

        if let Some((_, lasts)) = next.successor(&self.timing, notification.display) {
            self.timeline.schedule(due + lasts, handle);
        }
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.timeline.next_due()
    }

    pub fn active_count(&self) -> usize {
        self.live.len()
    }

    /// Cancels all pending transitions and detaches every live toast.
    pub fn shutdown(&mut self) {
        self.timeline.clear();
        for (_, notification) in std::mem::take(&mut self.live) {
            self.surface.detach(&notification.node);
        }
    }
}

#[cfg(test)]
impl<S: DisplaySurface, C: Clock> NotificationCenter<S, C> {
    /// Unknown and finished handles report `Removed`.
    pub fn state(&self, handle: NotificationHandle) -> NotificationState {
        self.live
            .get(&handle)
            .map(|n| n.state)
            .unwrap_or(NotificationState::Removed)
    }

    pub fn message(&self, handle: NotificationHandle) -> Option<&str> {
        self.live.get(&handle).map(|n| n.message.as_str())
    }

    pub fn severity(&self, handle: NotificationHandle) -> Option<Severity> {
        self.live.get(&handle).map(|n| n.severity)
    }

    pub fn created_at(&self, handle: NotificationHandle) -> Option<Millis> {
        self.live.get(&handle).map(|n| n.created_at)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::interaction::clock::testing::ManualClock;
    use crate::interaction::surface::testing::FakeSurface;

    fn center() -> (NotificationCenter<FakeSurface, ManualClock>, FakeSurface, ManualClock) {
        let surface = FakeSurface::default();
        let clock = ManualClock::new(0);
        (NotificationCenter::new(surface.clone(), clock.clone()), surface, clock)
    }

    #[test]
    fn follows_default_timing_contract() {
        let (mut center, surface, clock) = center();
        let handle = center.notify("Saved", Severity::Success);
        assert_eq!(center.state(handle), NotificationState::Entering);
        assert_eq!(surface.style_of(0, "transform").as_deref(), Some("translateX(100%)"));

        clock.set(99);
        center.advance();
        assert_eq!(center.state(handle), NotificationState::Entering);

        clock.set(100);
        center.advance();
        assert_eq!(center.state(handle), NotificationState::Visible);
        assert_eq!(surface.style_of(0, "transform").as_deref(), Some("translateX(0)"));

        clock.set(4_099);
        center.advance();
        assert_eq!(center.state(handle), NotificationState::Visible);

        clock.set(4_100);
        center.advance();
        assert_eq!(center.state(handle), NotificationState::Exiting);
        assert_eq!(surface.style_of(0, "transform").as_deref(), Some("translateX(100%)"));

        clock.set(4_400);
        center.advance();
        assert_eq!(center.state(handle), NotificationState::Removed);
        assert!(surface.attached_toasts().is_empty());
        assert_eq!(center.active_count(), 0);
    }

    #[test]
    fn custom_display_duration_shifts_exit() {
        let (mut center, _surface, clock) = center();
        let handle = center.notify_for("Sending", Severity::Info, 1_500);
        clock.set(1_600);
        center.advance();
        assert_eq!(center.state(handle), NotificationState::Exiting);
        clock.advance(300);
        center.advance();
        assert_eq!(center.state(handle), NotificationState::Removed);
    }

    #[test]
    fn jumping_past_all_phases_replays_them_in_order() {
        let (mut center, surface, clock) = center();
        let handle = center.notify("Hello", Severity::Info);
        clock.set(60_000);
        center.advance();
        assert_eq!(center.state(handle), NotificationState::Removed);
        assert_eq!(center.next_deadline(), None);
        assert!(!surface.node(0).attached);
    }

    #[test]
    fn concurrent_notifications_keep_independent_timers() {
        let (mut center, surface, clock) = center();
        let first = center.notify("first", Severity::Info);
        clock.set(2_000);
        let second = center.notify("second", Severity::Error);

        clock.set(4_400);
        center.advance();
        assert_eq!(center.state(first), NotificationState::Removed);
        assert_eq!(center.state(second), NotificationState::Visible);
        assert_eq!(surface.attached_toasts().len(), 1);
        assert_eq!(surface.attached_toasts()[0].text, "second");

        clock.set(6_400);
        center.advance();
        assert_eq!(center.state(second), NotificationState::Removed);
    }

    #[test]
    fn toast_carries_severity_styling() {
        let (mut center, surface, _clock) = center();
        center.notify("bad", Severity::Error);
        center.notify("odd", Severity::parse("mystery"));
        let toasts = surface.attached_toasts();
        assert_eq!(toasts[0].class_name, "notification notification-error");
        assert_eq!(toasts[0].style.get("background").map(String::as_str), Some("#EF4444"));
        assert_eq!(toasts[1].class_name, "notification notification-info");
        assert_eq!(toasts[1].style.get("background").map(String::as_str), Some("#6366F1"));
    }

    #[test]
    fn externally_detached_node_is_not_an_error() {
        let (mut center, surface, clock) = center();
        let handle = center.notify("gone early", Severity::Info);
        surface.remove_externally(0);
        clock.set(10_000);
        center.advance();
        assert_eq!(center.state(handle), NotificationState::Removed);
    }

    #[test]
    fn unavailable_surface_makes_notify_a_noop() {
        let surface = FakeSurface::unavailable();
        let mut center = NotificationCenter::new(surface.clone(), ManualClock::new(0));
        let handle = center.notify("nobody sees this", Severity::Success);
        assert_eq!(center.state(handle), NotificationState::Removed);
        assert_eq!(center.next_deadline(), None);
        assert_eq!(surface.toasts_created(), 0);
    }

    #[test]
    fn empty_message_is_ignored() {
        let (mut center, surface, _clock) = center();
        let handle = center.notify("   ", Severity::Error);
        assert_matches!(center.state(handle), NotificationState::Removed);
        assert_eq!(surface.toasts_created(), 0);
    }

    #[test]
    fn handles_are_unique() {
        let (mut center, _surface, _clock) = center();
        let a = center.notify("a", Severity::Info);
        let b = center.notify("b", Severity::Info);
        assert_ne!(a, b);
        assert_eq!(center.message(b), Some("b"));
        assert_eq!(center.severity(b), Some(Severity::Info));
        assert_eq!(center.created_at(a), Some(0));
    }

    #[test]
    fn shutdown_cancels_timers_and_detaches_nodes() {
        let (mut center, surface, clock) = center();
        center.notify("one", Severity::Info);
        center.notify("two", Severity::Success);
        center.shutdown();
        assert!(surface.attached_toasts().is_empty());
        assert_eq!(center.next_deadline(), None);

        clock.set(10_000);
        center.advance();
        assert_eq!(center.active_count(), 0);
    }
}
