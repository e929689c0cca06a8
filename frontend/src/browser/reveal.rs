use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};

use super::dom::{document, query_all, DomSurface};
use super::visibility::DomVisibilityObserver;
use crate::error::SiteError;
use crate::interaction::reveal::{ObserverOptions, RevealGroup, RevealScheduler};

pub type DomRevealScheduler = RevealScheduler<DomSurface, DomVisibilityObserver>;

/// Reveal scheduler wired to the live page.
pub struct RevealHost {
    scheduler: Rc<RefCell<DomRevealScheduler>>,
}

impl RevealHost {
    /// Registers every element matching `.<group name>` for each group and
    /// starts observing. Fails without touching any element when the
    /// browser has no intersection support, so content stays visible.
    pub fn bootstrap(groups: &[RevealGroup], options: ObserverOptions) -> Result<Self, SiteError> {
        let document = document().ok_or(SiteError::EnvironmentUnsupported("document"))?;
        let scheduler = Rc::new(RefCell::new(RevealScheduler::new(DomSurface::new(), options)));

        let weak = Rc::downgrade(&scheduler);
        let observer = DomVisibilityObserver::new(&options, move |events| {
            if let Some(scheduler) = weak.upgrade() {
                let revealed = scheduler.borrow_mut().handle_intersections(events);
                if revealed > 0 {
                    debug!("Revealed {} elements", revealed);
                }
            }
        })?;

        {
            let mut scheduler = scheduler.borrow_mut();
            for group in groups {
                for element in query_all(&document, &format!(".{}", group.name)) {
                    scheduler.register(*group, element);
                }
            }
            scheduler.start(observer);
            info!("Reveal animations armed for {} elements", scheduler.pending());
        }

        Ok(Self { scheduler })
    }

    pub fn shutdown(&self) {
        self.scheduler.borrow_mut().shutdown();
    }
}
