pub use repovista_api::github::ORGANIZATION;
pub use repovista_api::query::{DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// The org listing endpoint never reports a total count, so pagination math
/// has to lean on this hardcoded value. It goes stale whenever the
/// organization gains or loses repositories, and the "page X of Y" footer
/// will be off by however much it has drifted. Update it by hand.
pub const TOTAL_REPOSITORY_COUNT: u32 = 192;

/// Page sizes the presentation layer offers
pub const PER_PAGE_CHOICES: [u32; 4] = [5, 10, 20, 50];

/// Number of pages the hardcoded total works out to at a given page size.
pub fn total_pages(per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    (TOTAL_REPOSITORY_COUNT + per_page - 1) / per_page
}
