use super::*;

#[test]
fn email_input_serializes_with_wire_field_names() {
    let input = EmailInput {
        sender_email: "john.doe@email.com".to_owned(),
        subject: "Where is my order?".to_owned(),
        body: "Hi".to_owned(),
    };
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "sender_email": "john.doe@email.com",
            "subject": "Where is my order?",
            "body": "Hi"
        })
    );
}

#[test]
fn process_result_deserializes_an_escalation() {
    let result: ProcessResult = serde_json::from_str(
        r#"{
            "success": true,
            "response_email": null,
            "routed_to": "human_queue",
            "escalation_reason": "Unknown sender",
            "trace": [
                {"node": "input_guardrail", "timestamp": "2025-06-03T14:41:05Z", "duration_ms": 123.7},
                {"node": "human_queue", "timestamp": "2025-06-03T14:41:06Z"}
            ],
            "error": null
        }"#,
    )
    .unwrap();

    assert!(result.success);
    assert_eq!(result.routed_to, ROUTED_HUMAN_QUEUE);
    assert!(result.response_email.is_none());
    assert_eq!(result.escalation_reason.as_deref(), Some("Unknown sender"));
    assert_eq!(result.trace.len(), 2);
    assert_eq!(result.trace[0].duration_ms, Some(123.7));
    assert!(result.trace[1].duration_ms.is_none());
    assert!(result.trace[1].input_summary.is_none());
}

#[test]
fn process_result_tolerates_a_missing_trace() {
    let result: ProcessResult = serde_json::from_str(
        r#"{"success": false, "routed_to": "error", "error": "agent unavailable"}"#,
    )
    .unwrap();
    assert!(result.trace.is_empty());
    assert_eq!(result.error.as_deref(), Some("agent unavailable"));
}

#[test]
fn process_result_keeps_unknown_routing_outcomes_verbatim() {
    let result: ProcessResult =
        serde_json::from_str(r#"{"success": true, "routed_to": "quarantine"}"#).unwrap();
    assert_eq!(result.routed_to, "quarantine");
}

#[test]
fn trace_step_order_survives_deserialization() {
    let envelope: ProcessResult = serde_json::from_str(
        r#"{
            "success": true,
            "routed_to": "automated_response",
            "trace": [
                {"node": "c", "timestamp": "t3"},
                {"node": "a", "timestamp": "t1"},
                {"node": "b", "timestamp": "t2"}
            ]
        }"#,
    )
    .unwrap();
    let nodes: Vec<&str> = envelope.trace.iter().map(|s| s.node.as_str()).collect();
    assert_eq!(nodes, ["c", "a", "b"]);
}

#[test]
fn queue_envelope_deserializes_items() {
    let envelope: QueueEnvelope = serde_json::from_str(
        r#"{"queue": [{
            "id": "q1",
            "email_input": {"sender_email": "a@b.c", "subject": "s", "body": "b"},
            "reason": "Unknown user",
            "timestamp": "2025-06-03T14:41:05Z",
            "resolved": false
        }]}"#,
    )
    .unwrap();
    assert_eq!(envelope.queue.len(), 1);
    assert_eq!(envelope.queue[0].id, "q1");
    assert!(!envelope.queue[0].resolved);
}

#[test]
fn queue_envelope_tolerates_a_missing_array() {
    let envelope: QueueEnvelope = serde_json::from_str("{}").unwrap();
    assert!(envelope.queue.is_empty());
}

#[test]
fn order_tolerates_missing_optionals() {
    let order: Order = serde_json::from_str(
        r#"{
            "order_id": "o1",
            "user_id": "u1",
            "product_name": "Smart Watch",
            "status": "out_for_delivery",
            "total_amount": 19.5
        }"#,
    )
    .unwrap();
    assert!(order.tracking_number.is_none());
    assert!(order.estimated_delivery.is_none());
    assert_eq!(order.order_date, "");
    assert!((order.total_amount - 19.5).abs() < f64::EPSILON);
}

#[test]
fn graph_definition_envelope_extracts_the_diagram() {
    let envelope: GraphDefinitionEnvelope =
        serde_json::from_str(r#"{"mermaid": "graph TD; A-->B", "description": "agent"}"#).unwrap();
    assert_eq!(envelope.mermaid, "graph TD; A-->B");
    assert_eq!(envelope.description, "agent");
}

#[test]
fn resolve_ack_deserializes() {
    let ack: ResolveAck =
        serde_json::from_str(r#"{"success": true, "message": "Item q1 marked as resolved"}"#).unwrap();
    assert!(ack.success);
    assert_eq!(ack.message, "Item q1 marked as resolved");
}
