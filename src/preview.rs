use chrono::NaiveDateTime;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::Config;
use crate::utils::{format_smart, html_escape, Pager};

#[derive(Debug, Clone)]
pub struct PreviewRequest {
    pub total: i64,
    pub page: i64,
    pub dates: Vec<String>,
}

/// Renders a standalone HTML page showing the pager and the smart date
/// output for each requested date.
pub fn render_page(config: &Config, request: &PreviewRequest, now: NaiveDateTime) -> Markup {
    let mut pager = Pager::new(config.pager.clone(), request.total);
    pager.set_current_page(request.page);
    let info = pager.render_info_string();
    let navigation = pager.render_navigation_default();

    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Template Preview" }
                script {
                    (PreEscaped(format!(
                        "function {}(page) {{ console.log('page', page); }}",
                        config.pager.pager_function
                    )))
                }
            }
            body {
                div class="container" {
                    h1 { "Template Preview" }

                    // Pager
                    div class="pager" {
                        p class="pager-info" { (info) }
                        div class="pager-nav" { (navigation) }
                    }

                    // Dates
                    @if !request.dates.is_empty() {
                        table class="dates" {
                            thead {
                                tr {
                                    th { "Input" }
                                    th { "Display" }
                                }
                            }
                            tbody {
                                @for date in &request.dates {
                                    tr {
                                        td { code { (PreEscaped(html_escape(date))) } }
                                        td {
                                            @let shown = format_smart(date, now, &config.date_format);
                                            @if shown.is_empty() {
                                                span class="invalid" { "-" }
                                            } @else {
                                                (shown)
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_page_contains_pager_and_dates() {
        let request = PreviewRequest {
            total: 25,
            page: 2,
            dates: vec!["2024-06-15 11:30:00".to_string(), "garbage".to_string()],
        };
        let html = render_page(&Config::default(), &request, now()).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("25件中2ページ目 (11～20件)"));
        assert!(html.contains(r#"<a href="javascript:pagerFunction(3)">3</a>&nbsp;"#));
        assert!(html.contains("function pagerFunction(page)"));
        assert!(html.contains("11:30(30分前)"));
        assert!(html.contains(r#"<span class="invalid">-</span>"#));
    }

    #[test]
    fn test_page_without_dates_has_no_table() {
        let request = PreviewRequest {
            total: 5,
            page: 1,
            dates: Vec::new(),
        };
        let html = render_page(&Config::default(), &request, now()).into_string();
        assert!(!html.contains("<table"));
    }
}
