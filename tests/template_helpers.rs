use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde_json::json;
use tmpl_kit::utils::{
    create_query, diff, dump, format_relative, format_smart, html_escape, line_break,
    DateFormat, Pager, PagerConfig, TimeUnit,
};
use tmpl_kit::Config;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn test_pager_walkthrough() {
    let mut pager = Pager::new(PagerConfig::default(), 300);

    pager.set_current_page(15);
    let window = pager.calc_page();
    assert_eq!((window.first_page(), window.last_page()), (10, 19));
    assert_eq!(pager.render_info_string(), "300件中15ページ目 (141～150件)");

    pager.set_current_page(28);
    let window = pager.calc_page();
    assert_eq!((window.first_page(), window.last_page()), (21, 30));

    pager.set_current_page(30);
    assert_eq!(pager.render_info_string(), "300件中30ページ目 (291～300件)");
    let nav = pager.render_navigation_default().into_string();
    assert!(nav.starts_with(r#"<a href="javascript:pagerFunction(29)">前へ</a>&lt;&nbsp;"#));
    assert!(nav.ends_with("30&nbsp;"));
}

#[test]
fn test_pager_with_custom_labels_and_links() {
    let config = PagerConfig {
        prev_label: "Prev".to_string(),
        next_label: "Next".to_string(),
        limit: 20,
        info_format: "%start-%end of %total".to_string(),
        pager_function: "unused".to_string(),
    };
    let mut pager = Pager::new(config, 45);
    pager.set_current_page(2);

    assert_eq!(pager.render_info_string(), "21-40 of 45");

    let link = |page: i64| format!("/list?{}", create_query(&[("page", page.to_string())]));
    let nav = pager.render_navigation(&link).into_string();
    assert_eq!(
        nav,
        concat!(
            r#"<a href="/list?page=1">Prev</a>&lt;&nbsp;"#,
            r#"<a href="/list?page=1">1</a>&nbsp;"#,
            "2&nbsp;",
            r#"<a href="/list?page=3">3</a>&nbsp;"#,
            r#"&gt;<a href="/list?page=3">Next</a>"#,
        )
    );
}

#[test]
fn test_relative_time_examples() {
    let relative = diff(now(), now() - Duration::milliseconds(90_000));
    assert_eq!((relative.magnitude, relative.unit), (1, TimeUnit::Minute));

    let relative = diff(now(), now() - Duration::milliseconds(86_400_000));
    assert!(relative.is_past);
    assert_eq!(format_relative(&relative), "1日前");
}

#[test]
fn test_smart_format_uses_configured_pattern() {
    let config = Config::from_lookup(|key| match key {
        "DATE_FORMAT" => Some("dd/MM/yyyy HH:mm".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(
        format_smart("15/06/2024 09:00", now(), &config.date_format),
        "09:00(3時間前)"
    );
    assert_eq!(format_smart("2024-06-15 09:00:00", now(), &config.date_format), "");
    assert_eq!(format_smart("not-a-date", now(), &DateFormat::default()), "");
}

#[test]
fn test_markup_helpers_compose() {
    let comment = "a < b\nc & d";
    assert_eq!(
        line_break(&html_escape(comment)),
        "a&nbsp;&lt;&nbsp;b<br />c&nbsp;&amp;&nbsp;d"
    );
}

#[test]
fn test_dump_document() {
    let value = json!({"user": {"name": "taro", "tags": []}});
    assert_eq!(
        dump(&value),
        "{\n  \"user\": {\n    \"name\": \"taro\",\n    \"tags\": [\n      \n    ]\n  }\n}"
    );
}
