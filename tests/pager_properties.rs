//! Property-based tests for the page window.

use proptest::prelude::*;
use tmpl_kit::utils::{compute_window, PagerState};

fn state(total: i64, limit: i64, page: i64) -> PagerState {
    let mut state = PagerState::new(total, limit);
    state.set_current_page(page);
    state
}

proptest! {
    /// Once the page count is known the window stays inside it
    #[test]
    fn window_within_bounds(
        total in 0i64..100_000,
        limit in 1i64..500,
        page in 1i64..2_000
    ) {
        prop_assume!(total > limit);
        let window = compute_window(&state(total, limit, page));

        prop_assert!(window.first_page() >= 1, "first page {} < 1", window.first_page());
        prop_assert!(
            window.last_page() <= window.total_pages(),
            "last page {} > {}", window.last_page(), window.total_pages()
        );
    }

    /// At most ten page numbers are shown
    #[test]
    fn window_at_most_ten_wide(
        total in 0i64..100_000,
        limit in 1i64..500,
        page in 1i64..2_000
    ) {
        prop_assume!(total > limit);
        let window = compute_window(&state(total, limit, page));
        prop_assert!(window.pages().count() <= 10);
    }

    /// A page inside the range is always part of its own window
    #[test]
    fn current_page_is_visible(
        total in 11i64..100_000,
        limit in 1i64..10,
        page_seed in any::<u32>()
    ) {
        let total_pages = (total + limit - 1) / limit;
        let page = 1 + i64::from(page_seed) % total_pages;
        let window = compute_window(&state(total, limit, page));

        prop_assert_eq!(window.total_pages(), total_pages);
        prop_assert!(window.pages().contains(&page));
    }

    /// Offsets step by the page size
    #[test]
    fn offset_is_page_start(limit in 1i64..500, page in 2i64..10_000) {
        let state = state(0, limit, page);
        prop_assert_eq!(state.offset(), (page - 1) * limit);
    }

    /// Arbitrary inputs never panic
    #[test]
    fn window_never_panics(
        total in any::<i64>(),
        limit in any::<i64>(),
        page in any::<i64>()
    ) {
        let _ = compute_window(&state(total, limit, page));
    }
}
