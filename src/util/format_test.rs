use super::*;

#[test]
fn humanize_title_cases_each_word() {
    assert_eq!(humanize("fetch_user_orders"), "Fetch User Orders");
}

#[test]
fn humanize_single_word() {
    assert_eq!(humanize("delivered"), "Delivered");
}

#[test]
fn humanize_keeps_existing_capitals() {
    assert_eq!(humanize("out_for_delivery"), "Out For Delivery");
}

#[test]
fn step_label_is_one_based() {
    assert_eq!(step_label(0, "main_agent"), "1. Main Agent");
    assert_eq!(step_label(4, "send_email"), "5. Send Email");
}

#[test]
fn format_duration_rounds_to_whole_milliseconds() {
    assert_eq!(format_duration(Some(123.7)), "124ms");
    assert_eq!(format_duration(Some(123.2)), "123ms");
}

#[test]
fn format_duration_absent_is_a_dash() {
    assert_eq!(format_duration(None), "-");
}

#[test]
fn format_duration_measured_zero_is_not_a_dash() {
    assert_eq!(format_duration(Some(0.0)), "0ms");
}

#[test]
fn format_currency_always_shows_two_decimals() {
    assert_eq!(format_currency(19.5), "$19.50");
    assert_eq!(format_currency(100.0), "$100.00");
    assert_eq!(format_currency(0.125), "$0.13");
}

#[test]
fn preview_truncates_long_bodies_with_ellipsis() {
    let body = "x".repeat(250);
    let cut = preview(&body);
    assert_eq!(cut.len(), BODY_PREVIEW_CHARS + 3);
    assert!(cut.ends_with("..."));
    assert_eq!(&cut[..BODY_PREVIEW_CHARS], &body[..BODY_PREVIEW_CHARS]);
}

#[test]
fn preview_leaves_short_bodies_unmodified() {
    let body = "y".repeat(150);
    assert_eq!(preview(&body), body);
}

#[test]
fn preview_exact_length_has_no_ellipsis() {
    let body = "z".repeat(BODY_PREVIEW_CHARS);
    assert_eq!(preview(&body), body);
}
