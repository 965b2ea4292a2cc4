//! Headless state machines for the folio bookstore landing page.
//!
//! Every interactive section of the page owns a small controller: the book
//! shelf and testimonial rotation share the windowed [`carousel`], the FAQ
//! uses the exclusive-expand [`accordion`], the events section stacks its
//! modals with [`dialog`], and the booking and registration forms run through
//! [`form`]. Controllers hold plain state and transition functions; drawing,
//! input routing and layout stay with the embedding presentation layer.
//!
//! # Example
//!
//! ```
//! use folio_components::carousel::CarouselController;
//!
//! let mut shelf = CarouselController::new(vec!["a", "b", "c", "d"]);
//! shelf.set_viewport_width(1200);
//! shelf.next();
//! assert_eq!(shelf.visible_items(), ["b", "c", "d"]);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod accordion;
pub mod autoplay;
pub mod carousel;
pub mod dialog;
pub mod form;
pub mod viewport;
