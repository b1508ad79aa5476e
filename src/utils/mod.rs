pub mod date_format;
pub mod dumper;
pub mod escape;
pub mod pagination;
pub mod query;
pub mod relative_time;

pub use date_format::{DateFormat, DateFormatError};
pub use dumper::dump;
pub use escape::{html_escape, line_break};
pub use pagination::{
    compute_window, JsCallback, NavItem, PageLink, PageWindow, Pager, PagerConfig, PagerState,
};
pub use query::{create_query, encode_uri_component};
pub use relative_time::{
    diff, diff_millis, format_absolute, format_date, format_relative, format_smart,
    format_smart_now, format_time, RelativeTime, TimeUnit,
};
