use super::*;

#[test]
fn orders_endpoint_without_user_filters_by_days_only() {
    assert_eq!(orders_endpoint(None, 14), "/api/data/orders?days=14");
}

#[test]
fn orders_endpoint_with_user_appends_user_id() {
    assert_eq!(orders_endpoint(Some("u2"), 14), "/api/data/orders?days=14&user_id=u2");
}

#[test]
fn orders_endpoint_honors_a_custom_window() {
    assert_eq!(orders_endpoint(None, 30), "/api/data/orders?days=30");
}

#[test]
fn resolve_endpoint_formats_expected_path() {
    assert_eq!(resolve_endpoint("q1"), "/api/queue/q1/resolve");
}

#[test]
fn default_order_window_is_two_weeks() {
    assert_eq!(DEFAULT_ORDER_WINDOW_DAYS, 14);
}
