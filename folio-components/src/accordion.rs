//! Exclusive-expand accordion state for the FAQ section.
//!
//! ## Usage
//!
//! Toggle entries by id; opening one closes whichever entry was open before,
//! so at most a single answer is expanded at a time.
use tracing::trace;

/// State of an exclusive-expand accordion over entries keyed by id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionController {
    expanded: Option<usize>,
}

impl AccordionController {
    /// Creates an accordion with every entry collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The id of the expanded entry, if any.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Whether the entry with `id` is expanded.
    pub fn is_expanded(&self, id: usize) -> bool {
        self.expanded == Some(id)
    }

    /// Toggles the entry with `id`: expands it, or collapses it if it is the
    /// one currently expanded.
    pub fn toggle(&mut self, id: usize) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
        trace!(id, expanded = ?self.expanded, "accordion toggled");
    }

    /// Expands the entry with `id`, collapsing any other.
    pub fn open(&mut self, id: usize) {
        self.expanded = Some(id);
    }

    /// Collapses whichever entry is expanded.
    pub fn close(&mut self) {
        self.expanded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_expands_then_collapses() {
        let mut accordion = AccordionController::new();
        assert_eq!(accordion.expanded(), None);

        accordion.toggle(2);
        assert!(accordion.is_expanded(2));

        accordion.toggle(2);
        assert_eq!(accordion.expanded(), None);
    }

    #[test]
    fn opening_another_entry_closes_the_first() {
        let mut accordion = AccordionController::new();
        accordion.toggle(1);
        accordion.toggle(4);
        assert!(!accordion.is_expanded(1));
        assert!(accordion.is_expanded(4));
    }

    #[test]
    fn close_collapses_everything() {
        let mut accordion = AccordionController::new();
        accordion.open(3);
        accordion.close();
        assert_eq!(accordion.expanded(), None);
    }
}
