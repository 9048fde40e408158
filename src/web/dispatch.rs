//! Hand-off from browser callbacks to the site.
//!
//! Callbacks only ever push onto the queue. The queue is drained into the
//! site whenever it is not already borrowed; an event that arrives while the
//! site is busy (or before it exists) waits for the next drain.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use web_sys::Element;

use super::WebHost;
use crate::host::PageEvent;
use crate::site::Site;

/// Shared handle to a running site.
pub type SharedSite = Rc<RefCell<Site<WebHost>>>;

#[derive(Debug, Default)]
pub(crate) struct EventQueue {
    pending: RefCell<VecDeque<PageEvent<Element>>>,
    site: RefCell<Weak<RefCell<Site<WebHost>>>>,
}

impl EventQueue {
    pub(crate) fn attach(&self, site: &SharedSite) {
        *self.site.borrow_mut() = Rc::downgrade(site);
        self.drain();
    }

    pub(crate) fn push(&self, event: PageEvent<Element>) {
        self.pending.borrow_mut().push_back(event);
        self.drain();
    }

    fn drain(&self) {
        let Some(site) = self.site.borrow().upgrade() else {
            return;
        };
        let Ok(mut site) = site.try_borrow_mut() else {
            return;
        };
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            site.handle(event);
        }
    }
}
