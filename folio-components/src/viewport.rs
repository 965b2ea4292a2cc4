//! Viewport measurement and width-driven page sizing.
//!
//! ## Usage
//!
//! Classify window widths into coarse buckets and fan resize notifications
//! out to the sections that subscribed to them.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use smallvec::SmallVec;
use tracing::trace;

const DEFAULT_NARROW_BELOW: u32 = 640;
const DEFAULT_MEDIUM_BELOW: u32 = 1024;

/// Coarse bucket derived from a measured viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    /// Below the narrow breakpoint; phones.
    Narrow,
    /// Between the two breakpoints; tablets and small windows.
    Medium,
    /// At or above the medium breakpoint; desktop windows.
    Wide,
}

/// Breakpoint table mapping measured widths to a [`ViewportClass`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoints {
    /// Widths strictly below this value classify as [`ViewportClass::Narrow`].
    pub narrow_below: u32,
    /// Widths in `narrow_below..medium_below` classify as
    /// [`ViewportClass::Medium`]; everything at or above is
    /// [`ViewportClass::Wide`].
    pub medium_below: u32,
}

impl Breakpoints {
    /// Creates a breakpoint table, swapping the bounds if given out of order.
    pub fn new(narrow_below: u32, medium_below: u32) -> Self {
        Self {
            narrow_below: narrow_below.min(medium_below),
            medium_below: narrow_below.max(medium_below),
        }
    }

    /// Classifies a measured width. Pure: the same width always maps to the
    /// same class.
    pub fn classify(&self, width: u32) -> ViewportClass {
        if width < self.narrow_below {
            ViewportClass::Narrow
        } else if width < self.medium_below {
            ViewportClass::Medium
        } else {
            ViewportClass::Wide
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            narrow_below: DEFAULT_NARROW_BELOW,
            medium_below: DEFAULT_MEDIUM_BELOW,
        }
    }
}

/// Items-per-view for each viewport class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSizeRule {
    /// Items shown on a narrow viewport.
    pub narrow: usize,
    /// Items shown on a medium viewport.
    pub medium: usize,
    /// Items shown on a wide viewport.
    pub wide: usize,
}

impl PageSizeRule {
    /// Rule showing a single item regardless of viewport, as quote rotations
    /// do.
    pub fn single() -> Self {
        Self {
            narrow: 1,
            medium: 1,
            wide: 1,
        }
    }

    /// Resolves the page size for a class. Never returns zero; a zero entry
    /// resolves to one.
    pub fn page_size(&self, class: ViewportClass) -> usize {
        let size = match class {
            ViewportClass::Narrow => self.narrow,
            ViewportClass::Medium => self.medium,
            ViewportClass::Wide => self.wide,
        };
        size.max(1)
    }
}

impl Default for PageSizeRule {
    fn default() -> Self {
        Self {
            narrow: 1,
            medium: 2,
            wide: 3,
        }
    }
}

type ResizeListener = Arc<dyn Fn(u32) + Send + Sync>;

struct ObserverShared {
    width: u32,
    next_id: u64,
    listeners: SmallVec<[(u64, ResizeListener); 2]>,
}

/// Shared source of viewport width measurements.
///
/// Sections subscribe once when they mount and drop the returned
/// [`ViewportSubscription`] when they unmount; [`ViewportObserver::set_width`]
/// fans each new measurement out to the live subscribers. Repeated
/// measurements of an unchanged width are absorbed at the source, so
/// subscribers can be driven at resize-event frequency without seeing
/// redundant notifications.
#[derive(Clone)]
pub struct ViewportObserver {
    shared: Arc<RwLock<ObserverShared>>,
}

impl ViewportObserver {
    /// Creates an observer seeded with an initial measurement.
    pub fn new(width: u32) -> Self {
        Self {
            shared: Arc::new(RwLock::new(ObserverShared {
                width,
                next_id: 0,
                listeners: SmallVec::new(),
            })),
        }
    }

    /// Last measured width.
    pub fn width(&self) -> u32 {
        self.shared.read().width
    }

    /// Records a new measurement and notifies subscribers of the change.
    pub fn set_width(&self, width: u32) {
        let listeners: SmallVec<[ResizeListener; 2]> = {
            let mut shared = self.shared.write();
            if shared.width == width {
                return;
            }
            shared.width = width;
            shared
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect()
        };
        trace!(width, "viewport width changed");
        for listener in listeners {
            listener(width);
        }
    }

    /// Registers a resize listener and returns the guard that keeps it
    /// registered.
    pub fn subscribe(
        &self,
        listener: impl Fn(u32) + Send + Sync + 'static,
    ) -> ViewportSubscription {
        let mut shared = self.shared.write();
        let id = shared.next_id;
        shared.next_id += 1;
        shared.listeners.push((id, Arc::new(listener)));
        ViewportSubscription {
            shared: Arc::downgrade(&self.shared),
            id,
        }
    }
}

/// Guard for a registered resize listener.
///
/// Dropping the guard unregisters the listener, so a section that unmounts
/// stops receiving notifications.
pub struct ViewportSubscription {
    shared: Weak<RwLock<ObserverShared>>,
    id: u64,
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.write().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
