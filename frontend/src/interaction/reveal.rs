use std::collections::{BTreeMap, HashMap};

use log::debug;

use super::clock::Millis;
use super::style;
use super::surface::DisplaySurface;

/// Browsers report ratios at the threshold slightly below it.
const RATIO_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealGroup {
    pub name: &'static str,
    pub stagger: Millis,
}

pub const FEATURE_CARDS: RevealGroup = RevealGroup { name: "feature-card", stagger: 0 };
pub const SERVICE_CARDS: RevealGroup = RevealGroup { name: "service-card", stagger: 100 };
pub const PRODUCT_CARDS: RevealGroup = RevealGroup { name: "product-card", stagger: 150 };

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction that triggers a reveal.
    pub threshold: f64,
    /// Pixels added to the viewport's bottom edge; negative shrinks it.
    pub bottom_margin: i32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: -50,
        }
    }
}

impl ObserverOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEvent {
    pub id: RevealId,
    pub is_intersecting: bool,
    pub ratio: f64,
    /// The element is no longer part of the page.
    pub detached: bool,
}

/// Source of intersection events. Implementations push events back into
/// `RevealScheduler::handle_intersections`.
pub trait VisibilityObserver<N> {
    fn observe(&mut self, id: RevealId, node: &N);
    fn unobserve(&mut self, id: RevealId, node: &N);
    fn disconnect(&mut self);
}

struct RevealTarget<N> {
    node: N,
    order: usize,
    delay: Millis,
    state: RevealState,
}

pub struct RevealScheduler<S: DisplaySurface, O: VisibilityObserver<S::Node>> {
    surface: S,
    options: ObserverOptions,
    observer: Option<O>,
    targets: BTreeMap<RevealId, RevealTarget<S::Node>>,
    group_orders: HashMap<&'static str, usize>,
    next_id: u64,
}

impl<S: DisplaySurface, O: VisibilityObserver<S::Node>> RevealScheduler<S, O> {
    pub fn new(surface: S, options: ObserverOptions) -> Self {
        Self {
            surface,
            options,
            observer: None,
            targets: BTreeMap::new(),
            group_orders: HashMap::new(),
            next_id: 0,
        }
    }

    /// Hides `node` and queues it for reveal. Its stagger delay is its
    /// position within `group` times the group's increment.
    pub fn register(&mut self, group: RevealGroup, node: S::Node) -> RevealId {
        let id = RevealId(self.next_id);
        self.next_id += 1;

        let order = self.group_orders.entry(group.name).or_insert(0);
        let target = RevealTarget {
            node,
            order: *order,
            delay: *order as Millis * group.stagger,
            state: RevealState::Hidden,
        };
        *order += 1;

        self.surface.apply_style(&target.node, &style::reveal_hidden(target.delay));
        if let Some(observer) = self.observer.as_mut() {
            observer.observe(id, &target.node);
        }
        self.targets.insert(id, target);
        id
    }

    /// Starts observing every hidden target. Later registrations are
    /// observed as they arrive.
    pub fn start(&mut self, mut observer: O) {
        for (id, target) in &self.targets {
            if target.state == RevealState::Hidden {
                observer.observe(*id, &target.node);
            }
        }
        debug!("Reveal scheduler observing {} targets", self.targets.len());
        self.observer = Some(observer);
    }

    /// Returns how many targets were revealed by this batch. Events for
    /// detached elements release their target instead.
    pub fn handle_intersections(&mut self, events: impl IntoIterator<Item = IntersectionEvent>) -> usize {
        events.into_iter().filter(|event| self.handle(event)).count()
    }

    fn handle(&mut self, event: &IntersectionEvent) -> bool {
        if event.detached {
            self.release(event.id);
            return false;
        }
        let Some(target) = self.targets.get_mut(&event.id) else {
            return false;
        };
        if target.state == RevealState::Revealed
            || !event.is_intersecting
            || event.ratio + RATIO_TOLERANCE < self.options.threshold
        {
            return false;
        }

        target.state = RevealState::Revealed;
        debug!("Revealing {:?} (#{} in group, {} ms delay)", event.id, target.order, target.delay);
        self.surface.apply_style(&target.node, &style::reveal_shown());
        if let Some(observer) = self.observer.as_mut() {
            observer.unobserve(event.id, &target.node);
        }
        true
    }

    /// Forgets a target whose element left the page.
    pub fn release(&mut self, id: RevealId) {
        if let Some(target) = self.targets.remove(&id) {
            debug!("Releasing {:?}", id);
            if target.state == RevealState::Hidden {
                if let Some(observer) = self.observer.as_mut() {
                    observer.unobserve(id, &target.node);
                }
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.targets
            .values()
            .filter(|t| t.state == RevealState::Hidden)
            .count()
    }

    pub fn shutdown(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
        self.targets.clear();
    }
}

#[cfg(test)]
impl<S: DisplaySurface, O: VisibilityObserver<S::Node>> RevealScheduler<S, O> {
    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn is_started(&self) -> bool {
        self.observer.is_some()
    }

    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.targets.get(&id).map(|t| t.state)
    }

    pub fn order(&self, id: RevealId) -> Option<usize> {
        self.targets.get(&id).map(|t| t.order)
    }

    pub fn stagger_delay(&self, id: RevealId) -> Option<Millis> {
        self.targets.get(&id).map(|t| t.delay)
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    use super::*;
    use crate::interaction::geometry::{Rect, Viewport};

    /// Fraction of `rect` inside the viewport after moving the viewport's
    /// bottom edge by `bottom_margin` pixels (negative shrinks it), the way
    /// an intersection observer with a root margin measures it.
    pub fn visible_fraction(rect: &Rect, viewport: &Viewport, bottom_margin: f64) -> f64 {
        let bottom_edge = viewport.height + bottom_margin;
        let visible_w = rect.right().min(viewport.width) - rect.left.max(0.0);
        let visible_h = rect.bottom().min(bottom_edge) - rect.top.max(0.0);
        if visible_w < 0.0 || visible_h < 0.0 {
            return 0.0;
        }
        let area = rect.width * rect.height;
        if area <= 0.0 {
            return 1.0;
        }
        (visible_w * visible_h / area).clamp(0.0, 1.0)
    }

    #[derive(Default)]
    pub struct Recorded {
        pub observed: BTreeSet<RevealId>,
        pub observe_calls: usize,
        pub disconnected: bool,
    }

    #[derive(Clone, Default)]
    pub struct RecordingObserver {
        pub log: Rc<RefCell<Recorded>>,
    }

    impl<N> VisibilityObserver<N> for RecordingObserver {
        fn observe(&mut self, id: RevealId, _node: &N) {
            let mut log = self.log.borrow_mut();
            log.observed.insert(id);
            log.observe_calls += 1;
        }

        fn unobserve(&mut self, id: RevealId, _node: &N) {
            self.log.borrow_mut().observed.remove(&id);
        }

        fn disconnect(&mut self) {
            let mut log = self.log.borrow_mut();
            log.observed.clear();
            log.disconnected = true;
        }
    }
}
