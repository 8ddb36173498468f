use super::*;

#[test]
fn preset_lookup_fills_the_expected_sender() {
    assert_eq!(preset("order_status").unwrap().sender_email, "john.doe@email.com");
    assert_eq!(preset("unknown_user").unwrap().sender_email, "unknown@email.com");
    assert_eq!(preset("refund_request").unwrap().sender_email, "jane.smith@email.com");
}

#[test]
fn unknown_preset_key_is_none() {
    assert!(preset("").is_none());
    assert!(preset("nope").is_none());
}

#[test]
fn preset_keys_are_unique() {
    for (i, a) in PRESETS.iter().enumerate() {
        for b in &PRESETS[i + 1..] {
            assert_ne!(a.key, b.key);
        }
    }
}
