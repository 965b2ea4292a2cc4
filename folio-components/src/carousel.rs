//! Windowed carousel state for paginated content rows.
//!
//! ## Usage
//!
//! Drive a book shelf or a testimonial rotation as a sliding window over an
//! ordered collection, with arrow, dot and auto-advance navigation.
use derive_setters::Setters;
use tracing::trace;

use crate::viewport::{Breakpoints, PageSizeRule};

/// Width assumed before the first real viewport measurement arrives.
const DEFAULT_INITIAL_WIDTH: u32 = 1280;

/// Configuration for a [`CarouselController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Setters)]
pub struct CarouselArgs {
    /// Breakpoint table used to classify viewport widths.
    pub breakpoints: Breakpoints,
    /// Items-per-view rule applied to the classified width.
    pub page_sizes: PageSizeRule,
    /// Width assumed until the first
    /// [`set_viewport_width`](CarouselController::set_viewport_width) call.
    pub initial_width: u32,
}

impl Default for CarouselArgs {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            page_sizes: PageSizeRule::default(),
            initial_width: DEFAULT_INITIAL_WIDTH,
        }
    }
}

/// Sliding-window navigation over an ordered, immutable collection.
///
/// The controller owns its items for the lifetime of the section. The window
/// `[start_index, start_index + page_size)` is clipped to the collection when
/// read, and `start_index` itself stays inside `0..=max(0, len - page_size)`
/// across every transition, so a full window is shown whenever enough items
/// exist.
///
/// Every operation is total: an empty collection yields an empty window and
/// turns the navigation calls into no-ops.
pub struct CarouselController<T> {
    items: Vec<T>,
    start_index: usize,
    page_size: usize,
    breakpoints: Breakpoints,
    page_sizes: PageSizeRule,
}

impl<T> CarouselController<T> {
    /// Creates a controller over `items` with the default configuration.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_args(items, CarouselArgs::default())
    }

    /// Creates a controller with explicit breakpoints and page sizing.
    pub fn with_args(items: Vec<T>, args: CarouselArgs) -> Self {
        let class = args.breakpoints.classify(args.initial_width);
        Self {
            items,
            start_index: 0,
            page_size: args.page_sizes.page_size(class),
            breakpoints: args.breakpoints,
            page_sizes: args.page_sizes,
        }
    }

    /// Number of items in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read access to the full collection.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Current start of the visible window.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Items shown at once for the current viewport.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Recomputes the page size from a new width measurement.
    ///
    /// Pure in `width`: repeated calls with the same measurement leave the
    /// state untouched. When the page size changes, the window start is
    /// re-clamped into the valid range for the new size.
    pub fn set_viewport_width(&mut self, width: u32) {
        let page_size = self.page_sizes.page_size(self.breakpoints.classify(width));
        if page_size == self.page_size {
            return;
        }
        trace!(width, page_size, "carousel page size changed");
        self.page_size = page_size;
        self.start_index = self.start_index.min(self.max_start());
    }

    /// Advances the window by a single item, wrapping to the start once the
    /// window reaches the end of the collection.
    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.start_index + self.page_size < self.items.len() {
            self.start_index += 1;
        } else {
            self.start_index = 0;
        }
    }

    /// Steps the window back by a single item, wrapping to the last valid
    /// start when already at the beginning.
    pub fn prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.start_index > 0 {
            self.start_index -= 1;
        } else {
            self.start_index = self.max_start();
        }
    }

    /// Jumps to a dot page. Out-of-range pages clip to the last valid window
    /// start instead of failing.
    pub fn go_to_page(&mut self, page_index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.start_index = page_index
            .saturating_mul(self.page_size)
            .min(self.max_start());
    }

    /// The visible window, clipped to the collection bounds.
    pub fn visible_items(&self) -> &[T] {
        let start = self.start_index.min(self.items.len());
        let end = (self.start_index + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Number of dot pages: `ceil(len / page_size)`.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Index of the highlighted dot.
    ///
    /// Single-item stepping can leave the window between dot boundaries, so
    /// the nearest page is reported rather than the floor of the division;
    /// the result always addresses an existing dot.
    pub fn active_dot_index(&self) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        let nearest = (self.start_index + self.page_size / 2) / self.page_size;
        nearest.min(self.page_count() - 1)
    }

    fn max_start(&self) -> usize {
        self.items.len().saturating_sub(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::ViewportClass;

    fn shelf(len: usize) -> CarouselController<usize> {
        CarouselController::new((0..len).collect())
    }

    #[test]
    fn window_always_holds_min_of_page_size_and_len() {
        let mut carousel = shelf(6);
        carousel.set_viewport_width(1200);
        for _ in 0..20 {
            carousel.next();
            assert_eq!(carousel.visible_items().len(), 3);
        }

        let mut short = shelf(2);
        short.set_viewport_width(1200);
        assert_eq!(short.visible_items().len(), 2);
        short.next();
        assert_eq!(short.visible_items().len(), 2);
    }

    #[test]
    fn prev_undoes_next_away_from_boundaries() {
        let mut carousel = shelf(6);
        carousel.set_viewport_width(1200);
        carousel.next();
        assert_eq!(carousel.start_index(), 1);
        carousel.prev();
        assert_eq!(carousel.start_index(), 0);
    }

    #[test]
    fn next_wraps_once_window_reaches_end() {
        let mut carousel = shelf(6);
        carousel.set_viewport_width(1200);
        assert_eq!(carousel.visible_items(), [0, 1, 2]);

        carousel.next();
        assert_eq!(carousel.visible_items(), [1, 2, 3]);

        carousel.next();
        carousel.next();
        assert_eq!(carousel.start_index(), 3);
        carousel.next();
        assert_eq!(carousel.start_index(), 0);
        assert_eq!(carousel.visible_items(), [0, 1, 2]);
    }

    #[test]
    fn prev_from_start_wraps_to_last_valid_window() {
        let mut quotes = CarouselController::with_args(
            (0..5).collect(),
            CarouselArgs::default().page_sizes(PageSizeRule::single()),
        );
        assert_eq!(quotes.page_size(), 1);
        quotes.prev();
        assert_eq!(quotes.start_index(), 4);
        assert_eq!(quotes.visible_items(), [4]);

        let mut shelf = shelf(6);
        shelf.set_viewport_width(1200);
        shelf.prev();
        assert_eq!(shelf.start_index(), 3);
    }

    #[test]
    fn go_to_page_lands_on_page_boundaries() {
        let mut carousel = shelf(6);
        carousel.set_viewport_width(800);
        assert_eq!(carousel.page_size(), 2);
        assert_eq!(carousel.page_count(), 3);

        for page in 0..carousel.page_count() {
            carousel.go_to_page(page);
            assert_eq!(carousel.start_index(), page * 2);
            assert_eq!(carousel.visible_items()[0], page * 2);
        }
    }

    #[test]
    fn out_of_range_page_clips_instead_of_panicking() {
        let mut carousel = shelf(6);
        carousel.set_viewport_width(1200);
        carousel.go_to_page(17);
        assert_eq!(carousel.start_index(), 3);
        assert_eq!(carousel.visible_items(), [3, 4, 5]);
    }

    #[test]
    fn set_viewport_width_is_idempotent() {
        let mut carousel = shelf(6);
        carousel.set_viewport_width(800);
        let after_first = (carousel.start_index(), carousel.page_size());
        carousel.set_viewport_width(800);
        assert_eq!((carousel.start_index(), carousel.page_size()), after_first);
    }

    #[test]
    fn shrinking_viewport_keeps_start_then_growing_reclamps() {
        let mut carousel = shelf(5);
        carousel.set_viewport_width(500);
        assert_eq!(carousel.page_size(), 1);
        carousel.go_to_page(4);
        assert_eq!(carousel.start_index(), 4);

        carousel.set_viewport_width(1200);
        assert_eq!(carousel.page_size(), 3);
        assert_eq!(carousel.start_index(), 2);
        assert_eq!(carousel.visible_items(), [2, 3, 4]);
    }

    #[test]
    fn empty_collection_is_total() {
        let mut empty: CarouselController<usize> = CarouselController::new(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.visible_items().is_empty());
        empty.next();
        empty.prev();
        empty.go_to_page(3);
        empty.set_viewport_width(100);
        assert_eq!(empty.start_index(), 0);
        assert_eq!(empty.page_count(), 0);
        assert_eq!(empty.active_dot_index(), 0);
    }

    #[test]
    fn active_dot_reports_nearest_page() {
        let mut carousel = shelf(6);
        carousel.set_viewport_width(1200);
        assert_eq!(carousel.active_dot_index(), 0);
        carousel.next();
        assert_eq!(carousel.active_dot_index(), 0);
        carousel.next();
        assert_eq!(carousel.active_dot_index(), 1);
        carousel.next();
        assert_eq!(carousel.active_dot_index(), 1);
    }

    #[test]
    fn custom_breakpoints_drive_page_size() {
        let args = CarouselArgs::default()
            .breakpoints(Breakpoints::new(400, 800))
            .initial_width(300);
        assert_eq!(args.breakpoints.classify(300), ViewportClass::Narrow);

        let mut carousel = CarouselController::with_args((0..6).collect::<Vec<_>>(), args);
        assert_eq!(carousel.page_size(), 1);
        carousel.set_viewport_width(600);
        assert_eq!(carousel.page_size(), 2);
        carousel.set_viewport_width(900);
        assert_eq!(carousel.page_size(), 3);
    }
}
