//! Headless walkthrough of the bookstore landing page.
//!
//! Assembles every section's state from the built-in content, then drives a
//! scripted interaction sequence: resizes, arrow and dot navigation,
//! auto-advance ticks, accordion toggles, an event registration and a booking
//! submission. State transitions are reported through tracing.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use folio_components::{
    accordion::AccordionController,
    autoplay::AutoAdvance,
    carousel::{CarouselArgs, CarouselController},
    dialog::DialogFlow,
    form::FormController,
    viewport::{PageSizeRule, ViewportObserver},
};
use folio_content::{Book, Event, Testimonial, book, event, faq, site, testimonial};
use parking_lot::RwLock;
use tracing::info;

const INITIAL_WIDTH: u32 = 1200;

type Shared<T> = Arc<RwLock<CarouselController<T>>>;

pub fn run() {
    let site = site::bookstore_site();
    info!(title = %site.title, locale = %site.locale, "assembling landing page");
    info!(
        services = site::services().len(),
        nav_links = site.nav.len(),
        "static shell ready"
    );

    let viewport = ViewportObserver::new(INITIAL_WIDTH);

    let shelf: Shared<Book> = Arc::new(RwLock::new(CarouselController::with_args(
        book::recommended_books(),
        CarouselArgs::default().initial_width(INITIAL_WIDTH),
    )));
    let _shelf_resize = viewport.subscribe({
        let shelf = shelf.clone();
        move |width| shelf.write().set_viewport_width(width)
    });

    let quotes: Shared<Testimonial> = Arc::new(RwLock::new(CarouselController::with_args(
        testimonial::default_testimonials(),
        CarouselArgs::default()
            .page_sizes(PageSizeRule::single())
            .initial_width(INITIAL_WIDTH),
    )));
    let _quotes_resize = viewport.subscribe({
        let quotes = quotes.clone();
        move |width| quotes.write().set_viewport_width(width)
    });

    browse_the_shelf(&shelf, &viewport);
    rotate_testimonials(&quotes);
    read_the_faq();
    register_for_an_event();
    book_a_consultation();

    info!("walkthrough finished");
}

fn shelf_snapshot(shelf: &CarouselController<Book>) -> Vec<String> {
    shelf
        .visible_items()
        .iter()
        .map(|book| book.title.clone())
        .collect()
}

fn browse_the_shelf(shelf: &Shared<Book>, viewport: &ViewportObserver) {
    info!(titles = ?shelf_snapshot(&shelf.read()), "shelf mounted");

    shelf.write().next();
    info!(titles = ?shelf_snapshot(&shelf.read()), "shelf advanced");
    shelf.write().prev();

    {
        let mut shelf = shelf.write();
        let last_page = shelf.page_count() - 1;
        shelf.go_to_page(last_page);
        info!(
            page = last_page,
            dot = shelf.active_dot_index(),
            titles = ?shelf_snapshot(&shelf),
            "shelf jumped to last page"
        );
    }

    for width in [800, 500, INITIAL_WIDTH] {
        viewport.set_width(width);
        let shelf = shelf.read();
        info!(
            width,
            page_size = shelf.page_size(),
            pages = shelf.page_count(),
            "shelf resized"
        );
    }
}

fn rotate_testimonials(quotes: &Shared<Testimonial>) {
    let mut schedule = AutoAdvance::default();
    let mounted = Instant::now();
    schedule.tick(mounted);

    // Three quiet intervals, then a hovered stretch that must not advance.
    let after_three = mounted + schedule.interval() * 3;
    for _ in 0..schedule.tick(after_three) {
        quotes.write().next();
    }
    info!(
        name = %quotes.read().visible_items()[0].name,
        dot = quotes.read().active_dot_index(),
        "testimonials after three auto-advances"
    );

    schedule.set_hovered(true);
    let hovered_fires = schedule.tick(after_three + schedule.interval() * 2);
    schedule.set_hovered(false);
    info!(hovered_fires, "hover suspended the rotation");

    quotes.write().prev();
    info!(
        name = %quotes.read().visible_items()[0].name,
        "stepped back manually"
    );
}

fn read_the_faq() {
    let entries = faq::default_entries();
    let mut accordion = AccordionController::new();

    accordion.toggle(entries[0].id);
    accordion.toggle(entries[2].id);
    let expanded = accordion
        .expanded()
        .and_then(|id| entries.iter().find(|entry| entry.id == id));
    if let Some(entry) = expanded {
        info!(question = %entry.question, "faq entry expanded");
    }

    accordion.toggle(entries[2].id);
    info!(expanded = ?accordion.expanded(), "faq collapsed");
}

fn register_for_an_event() {
    let events = event::upcoming_events();
    let mut flow: DialogFlow<Event> = DialogFlow::new();
    let mut form = FormController::registration();

    flow.show_details(events[0].clone());
    if let Some(selected) = flow.selected() {
        info!(event = %selected.title, presenter = %selected.presenter, "event details open");
    }

    flow.register_selected();
    form.set_value("name", "נועה ברק");
    form.set_value("email", "noa@example.co.il");
    form.set_value("phone", "0541234567");

    let submitted_at = Instant::now();
    let accepted = form.submit(submitted_at);
    info!(accepted, "registration submitted");

    form.tick(submitted_at + Duration::from_millis(1_500));
    info!(phase = ?form.phase(), "registration round trip finished");
    flow.close();
    info!(open = flow.is_open(), "event modals closed");
}

fn book_a_consultation() {
    let mut form = FormController::booking();

    form.set_value("name", "אורי שגב");
    form.set_value("phone", "12-345");
    form.set_value("email", "uri@example");
    form.set_value("message", "אשמח לקבוע תור לייעוץ ספרותי");

    let first_try = Instant::now();
    if !form.submit(first_try) {
        for field in form.fields() {
            if let Some(error) = form.error(field.key) {
                info!(field = field.key, %error, "booking field rejected");
            }
        }
    }

    form.set_value("phone", "0521234567");
    form.set_value("email", "uri@example.co.il");
    let second_try = Instant::now();
    let accepted = form.submit(second_try);
    info!(accepted, "booking resubmitted");

    form.tick(second_try + Duration::from_millis(1_500));
    info!(phase = ?form.phase(), "booking confirmed");
    form.tick(second_try + Duration::from_millis(6_500));
    info!(phase = ?form.phase(), "success notice dismissed");
}
