use domain::{Message, MessageFields, MessageId};
use serde_json::{Value, json};

#[test]
fn fields_coerce_request_body() {
    let payload = json!({
        "devEui": "AA:BB",
        "rssi": "-42",
        "ack": "true",
        "port": 10,
        "gwRxTime": "2024-05-01T12:00:00Z",
        "unknown": "ignored"
    });
    let fields: MessageFields = serde_json::from_value(payload).expect("parse");
    assert_eq!(fields.dev_eui, Some(Some("AA:BB".to_string())));
    assert_eq!(fields.rssi, Some(Some(-42.0)));
    assert_eq!(fields.ack, Some(Some(true)));
    assert_eq!(fields.port, Some(Some(10.0)));
    assert!(fields.gw_rx_time.is_some());
    assert!(fields.snr.is_none());
}

#[test]
fn fields_accept_gateway_timestamp_formats() {
    let fields: MessageFields = serde_json::from_value(json!({
        "gwRxTime": "2024-05-01",
        "txtime": "1714564800000"
    }))
    .expect("parse");
    let gw_rx_time = fields.gw_rx_time.flatten().expect("gwRxTime");
    assert_eq!(gw_rx_time.to_rfc3339(), "2024-05-01T00:00:00+00:00");
    let txtime = fields.txtime.flatten().expect("txtime");
    assert_eq!(txtime.to_rfc3339(), "2024-05-01T12:00:00+00:00");

    let fields: MessageFields =
        serde_json::from_value(json!({ "txtime": "2024-05-01 12:00:00" })).expect("parse");
    assert_eq!(fields.txtime, Some(Some(txtime)));

    let result = serde_json::from_value::<MessageFields>(json!({ "txtime": "soon" }));
    assert!(result.is_err());
}

#[test]
fn fields_reject_uncoercible_values() {
    let result = serde_json::from_value::<MessageFields>(json!({ "rssi": "strong" }));
    assert!(result.is_err());
    let result = serde_json::from_value::<MessageFields>(json!({ "devEui": ["AA"] }));
    assert!(result.is_err());
}

#[test]
fn fields_distinguish_null_from_absent() {
    let fields: MessageFields = serde_json::from_value(json!({ "snr": null })).expect("parse");
    assert_eq!(fields.snr, Some(None));
    assert_eq!(fields.rssi, None);
    assert!(!fields.is_empty());
    assert!(MessageFields::default().is_empty());
}

#[test]
fn fields_serialize_only_named_keys() {
    let fields: MessageFields =
        serde_json::from_value(json!({ "snr": 7.5, "pdu": null })).expect("parse");
    let value = serde_json::to_value(&fields).expect("serialize");
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), 2);
    assert_eq!(object["snr"], json!(7.5));
    assert_eq!(object["pdu"], Value::Null);
}

#[test]
fn apply_replaces_named_fields_only() {
    let id = MessageId::new();
    let mut message = Message::create(
        id,
        serde_json::from_value(json!({ "devEui": "AA:BB", "pdu": "0102" })).expect("parse"),
    );
    message.apply(serde_json::from_value(json!({ "snr": 7.5, "pdu": null })).expect("parse"));
    assert_eq!(message.id, id);
    assert_eq!(message.dev_eui.as_deref(), Some("AA:BB"));
    assert_eq!(message.snr, Some(7.5));
    assert_eq!(message.pdu, None);
}

#[test]
fn message_json_uses_wire_names() {
    let message = Message::create(
        MessageId::new(),
        serde_json::from_value(json!({ "devEui": "AA:BB", "rssi": -42, "snr": 7.5 }))
            .expect("parse"),
    );
    let value = serde_json::to_value(&message).expect("serialize");
    assert!(value.get("_id").is_some());
    assert_eq!(value["devEui"], json!("AA:BB"));
    assert_eq!(value["rssi"], json!(-42));
    assert_eq!(value["snr"], json!(7.5));
    assert!(value.get("ack").is_none());
    assert!(value.get("dev_eui").is_none());
}

#[test]
fn message_document_round_trips() {
    let message = Message::create(
        MessageId::new(),
        serde_json::from_value(json!({ "txtime": 1_714_564_800_000_i64, "dup": false }))
            .expect("parse"),
    );
    let document = serde_json::to_value(&message).expect("serialize");
    let restored: Message = serde_json::from_value(document).expect("parse");
    assert_eq!(restored, message);
}

#[test]
fn message_id_parses_and_rejects() {
    let id = MessageId::new();
    let parsed: MessageId = id.to_string().parse().expect("parse");
    assert_eq!(parsed, id);
    assert!("not-an-id".parse::<MessageId>().is_err());
}
