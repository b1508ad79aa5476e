use std::ops::RangeInclusive;

use maud::{html, Markup, PreEscaped};
use serde::Deserialize;

/// Width of the visible page window.
const WINDOW_WIDTH: i64 = 10;

/// Pages below this one keep the window pinned at page 1.
const PIN_THRESHOLD: i64 = 7;

const SEPARATOR: &str = "&nbsp;";

#[derive(Debug, Clone, Deserialize)]
pub struct PagerConfig {
    #[serde(default = "default_prev_label")]
    pub prev_label: String,
    #[serde(default = "default_next_label")]
    pub next_label: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default = "default_info_format")]
    pub info_format: String,
    #[serde(default = "default_pager_function")]
    pub pager_function: String,
}

pub(crate) fn default_prev_label() -> String {
    "前へ".to_string()
}

pub(crate) fn default_next_label() -> String {
    "次へ".to_string()
}

pub(crate) fn default_limit() -> i64 {
    10
}

pub(crate) fn default_info_format() -> String {
    "%total件中%nowPageページ目 (%start～%end件)".to_string()
}

pub(crate) fn default_pager_function() -> String {
    "pagerFunction".to_string()
}

impl Default for PagerConfig {
    fn default() -> Self {
        PagerConfig {
            prev_label: default_prev_label(),
            next_label: default_next_label(),
            limit: default_limit(),
            info_format: default_info_format(),
            pager_function: default_pager_function(),
        }
    }
}

/// Caller-held pagination state.
///
/// `offset` is only recomputed by [`PagerState::set_current_page`] and
/// `total_pages` only when a [`Pager`] stores the window it computed. A
/// state whose `total` never exceeded `limit` keeps `total_pages` at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerState {
    total: i64,
    limit: i64,
    now_page: i64,
    offset: i64,
    total_pages: i64,
}

impl PagerState {
    pub fn new(total: i64, limit: i64) -> Self {
        PagerState {
            total,
            limit,
            now_page: 1,
            offset: 0,
            total_pages: 0,
        }
    }

    /// Moves to `now_page` without checking it against the page count.
    pub fn set_current_page(&mut self, now_page: i64) {
        self.now_page = now_page;
        self.offset = if now_page > 1 {
            (now_page - 1).saturating_mul(self.limit)
        } else {
            0
        };
    }

    pub fn set_total(&mut self, total: i64) {
        self.total = total;
    }

    pub(crate) fn apply_window(&mut self, window: &PageWindow) {
        self.total_pages = window.total_pages;
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn now_page(&self) -> i64 {
        self.now_page
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    total_pages: i64,
    first_page: i64,
    last_page: i64,
}

impl PageWindow {
    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    pub fn first_page(&self) -> i64 {
        self.first_page
    }

    pub fn last_page(&self) -> i64 {
        self.last_page
    }

    /// Page numbers to display; empty when `first_page > last_page`.
    pub fn pages(&self) -> RangeInclusive<i64> {
        self.first_page..=self.last_page
    }
}

/// Computes the sliding window of at most ten page numbers around the
/// current page.
pub fn compute_window(state: &PagerState) -> PageWindow {
    let mut total_pages = state.total_pages;
    if state.limit > 0 && state.total > state.limit {
        total_pages = state.total / state.limit + i64::from(state.total % state.limit != 0);
    }

    let now = state.now_page;
    let mut first_page = if now < PIN_THRESHOLD { 1 } else { now - 5 };
    let overrun = first_page.saturating_add(WINDOW_WIDTH - 1);
    if total_pages > WINDOW_WIDTH - 1 && overrun > total_pages {
        first_page -= overrun - total_pages;
    }

    let last_page = if now < PIN_THRESHOLD {
        WINDOW_WIDTH
    } else {
        first_page.saturating_add(WINDOW_WIDTH - 1)
    };

    let window = PageWindow {
        total_pages,
        first_page,
        last_page: last_page.min(total_pages),
    };
    log::trace!("page {now} of {total_pages}: window {:?}", window.pages());
    window
}

/// Fills the info template. Tokens are replaced in a fixed order and only
/// their first occurrence is substituted.
pub fn render_info_string(state: &PagerState, window: &PageWindow, format: &str) -> String {
    let end = if state.now_page == window.last_page {
        state.total
    } else {
        state.offset.saturating_add(state.limit)
    };

    let tokens = [
        ("%total", state.total),
        ("%start", state.offset.saturating_add(1)),
        ("%end", end),
        ("%nowPage", state.now_page),
        ("%limit", state.limit),
    ];

    tokens
        .iter()
        .fold(format.to_string(), |acc, (token, value)| {
            acc.replacen(token, &value.to_string(), 1)
        })
}

/// Builds the `href` of a page link.
pub trait PageLink {
    fn href(&self, page: i64) -> String;
}

/// Links that call a page-level JavaScript function, e.g.
/// `javascript:pagerFunction(3)`.
#[derive(Debug, Clone, Copy)]
pub struct JsCallback<'a> {
    name: &'a str,
}

impl<'a> JsCallback<'a> {
    pub fn new(name: &'a str) -> Self {
        JsCallback { name }
    }
}

impl PageLink for JsCallback<'_> {
    fn href(&self, page: i64) -> String {
        format!("javascript:{}({})", self.name, page)
    }
}

impl<F> PageLink for F
where
    F: Fn(i64) -> String,
{
    fn href(&self, page: i64) -> String {
        self(page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Prev(i64),
    Current(i64),
    Page(i64),
    Next(i64),
}

pub fn navigation_items(state: &PagerState, window: &PageWindow) -> Vec<NavItem> {
    let now = state.now_page;
    let mut items = Vec::new();

    if now > 1 {
        items.push(NavItem::Prev(now - 1));
    }

    for page in window.pages() {
        if (now == 0 && page == 1) || now == page {
            items.push(NavItem::Current(page));
        } else {
            items.push(NavItem::Page(page));
        }
    }

    if now < window.total_pages {
        items.push(NavItem::Next(now + 1));
    }

    items
}

pub fn render_navigation<L>(
    state: &PagerState,
    window: &PageWindow,
    config: &PagerConfig,
    link: &L,
) -> Markup
where
    L: PageLink + ?Sized,
{
    let items = navigation_items(state, window);

    html! {
        @for item in &items {
            @match *item {
                NavItem::Prev(page) => {
                    a href=(link.href(page)) { (PreEscaped(&config.prev_label)) }
                    (PreEscaped("&lt;"))
                    (PreEscaped(SEPARATOR))
                },
                NavItem::Current(page) => {
                    (page)
                    (PreEscaped(SEPARATOR))
                },
                NavItem::Page(page) => {
                    a href=(link.href(page)) { (page) }
                    (PreEscaped(SEPARATOR))
                },
                NavItem::Next(page) => {
                    (PreEscaped("&gt;"))
                    a href=(link.href(page)) { (PreEscaped(&config.next_label)) }
                },
            }
        }
    }
}

/// Pager state bundled with its presentation settings. Every render
/// recomputes the window first and keeps the resulting page count.
#[derive(Debug, Clone)]
pub struct Pager {
    config: PagerConfig,
    state: PagerState,
}

impl Pager {
    pub fn new(config: PagerConfig, total: i64) -> Self {
        let state = PagerState::new(total, config.limit);
        Pager { config, state }
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    pub fn set_current_page(&mut self, now_page: i64) {
        self.state.set_current_page(now_page);
    }

    pub fn set_total(&mut self, total: i64) {
        self.state.set_total(total);
    }

    pub fn calc_page(&mut self) -> PageWindow {
        let window = compute_window(&self.state);
        self.state.apply_window(&window);

        if window.total_pages > 0 && self.state.now_page > window.total_pages {
            log::debug!(
                "page {} is past the last page {}",
                self.state.now_page,
                window.total_pages
            );
        }

        window
    }

    pub fn render_info_string(&mut self) -> String {
        let window = self.calc_page();
        render_info_string(&self.state, &window, &self.config.info_format)
    }

    pub fn render_navigation<L>(&mut self, link: &L) -> Markup
    where
        L: PageLink + ?Sized,
    {
        let window = self.calc_page();
        render_navigation(&self.state, &window, &self.config, link)
    }

    /// Renders links that call the configured `pager_function`.
    pub fn render_navigation_default(&mut self) -> Markup {
        let window = self.calc_page();
        let link = JsCallback::new(&self.config.pager_function);
        render_navigation(&self.state, &window, &self.config, &link)
    }
}
