use super::*;

fn order(id: &str) -> Order {
    Order {
        order_id: id.to_owned(),
        user_id: "u1".to_owned(),
        product_name: "Smart Watch".to_owned(),
        status: "shipped".to_owned(),
        tracking_number: None,
        estimated_delivery: None,
        order_date: String::new(),
        total_amount: 19.5,
    }
}

fn sent(subject: &str) -> SentEmail {
    SentEmail {
        to_email: "a@b.c".to_owned(),
        subject: subject.to_owned(),
        body: String::new(),
        timestamp: String::new(),
    }
}

#[test]
fn filter_option_label_is_name_then_email() {
    let user = User {
        user_id: "u2".to_owned(),
        name: "Jane Smith".to_owned(),
        email: "jane.smith@email.com".to_owned(),
    };
    assert_eq!(filter_option_label(&user), "Jane Smith (jane.smith@email.com)");
}

#[test]
fn orders_tokens_increase_monotonically() {
    let mut state = DataState::default();
    let first = state.next_orders_token();
    let second = state.next_orders_token();
    assert!(second > first);
}

#[test]
fn latest_orders_result_is_applied() {
    let mut state = DataState::default();
    let token = state.next_orders_token();
    assert!(state.apply_orders(token, Ok(vec![order("o1")])));
    assert_eq!(state.orders.len(), 1);
    assert!(!state.orders_failed);
}

#[test]
fn stale_orders_result_is_dropped() {
    let mut state = DataState::default();
    let stale = state.next_orders_token();
    let latest = state.next_orders_token();

    // The newer request completes first.
    assert!(state.apply_orders(latest, Ok(vec![order("o2")])));
    // The older one finishes afterwards and must not overwrite it.
    assert!(!state.apply_orders(stale, Ok(vec![order("o1")])));
    assert_eq!(state.orders[0].order_id, "o2");
}

#[test]
fn orders_failure_sets_the_flag_and_success_clears_it() {
    let mut state = DataState::default();
    let token = state.next_orders_token();
    assert!(state.apply_orders(token, Err(TransportError::Status(500))));
    assert!(state.orders_failed);

    let token = state.next_orders_token();
    assert!(state.apply_orders(token, Ok(vec![order("o1")])));
    assert!(!state.orders_failed);
}

#[test]
fn stale_sent_result_is_dropped() {
    let mut state = DataState::default();
    let stale = state.next_sent_token();
    let latest = state.next_sent_token();

    assert!(state.apply_sent(latest, Ok(vec![sent("new")])));
    assert!(!state.apply_sent(stale, Ok(vec![sent("old")])));
    assert_eq!(state.sent_emails[0].subject, "new");
}

#[test]
fn sent_failure_keeps_previously_loaded_emails() {
    let mut state = DataState::default();
    let token = state.next_sent_token();
    assert!(state.apply_sent(token, Ok(vec![sent("kept")])));

    let token = state.next_sent_token();
    assert!(state.apply_sent(token, Err(TransportError::Unreachable("down".to_owned()))));
    assert!(state.sent_failed);
    assert_eq!(state.sent_emails[0].subject, "kept");
}
