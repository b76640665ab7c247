use domain::MessageFields;
use senra_storage::{InMemoryMessageStore, MessageStore, StorageError};
use serde_json::json;

fn fields(value: serde_json::Value) -> MessageFields {
    serde_json::from_value(value).expect("fields")
}

#[tokio::test]
async fn message_in_memory_crud() {
    let store = InMemoryMessageStore::new();
    let created = store
        .create_message(fields(json!({ "devEui": "AA:BB", "rssi": -42 })))
        .await
        .expect("create");
    assert_eq!(created.dev_eui.as_deref(), Some("AA:BB"));
    assert_eq!(created.rssi, Some(-42.0));

    let id = created.id.to_string();
    let got = store.find_message(&id).await.expect("find").expect("exists");
    assert_eq!(got, created);

    let list = store.list_messages().await.expect("list");
    assert_eq!(list.len(), 1);

    let deleted = store
        .delete_message(&id)
        .await
        .expect("delete")
        .expect("deleted");
    assert_eq!(deleted, created);
    assert!(store.find_message(&id).await.expect("find").is_none());
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let store = InMemoryMessageStore::new();
    let list = store.list_messages().await.expect("list");
    assert!(list.is_empty());
}

#[tokio::test]
async fn empty_record_is_accepted() {
    let store = InMemoryMessageStore::new();
    let created = store
        .create_message(MessageFields::default())
        .await
        .expect("create");
    assert!(created.dev_eui.is_none());
    assert!(
        store
            .find_message(&created.id.to_string())
            .await
            .expect("find")
            .is_some()
    );
}

#[tokio::test]
async fn update_keeps_unnamed_fields() {
    let store = InMemoryMessageStore::new();
    let created = store
        .create_message(fields(json!({ "devEui": "AA:BB", "pdu": "0102" })))
        .await
        .expect("create");
    let id = created.id.to_string();

    let updated = store
        .update_message(&id, fields(json!({ "snr": 7.5, "pdu": null })))
        .await
        .expect("update")
        .expect("exists");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.dev_eui.as_deref(), Some("AA:BB"));
    assert_eq!(updated.snr, Some(7.5));
    assert!(updated.pdu.is_none());

    let got = store.find_message(&id).await.expect("find").expect("exists");
    assert_eq!(got, updated);
}

#[tokio::test]
async fn missing_id_yields_none() {
    let store = InMemoryMessageStore::new();
    let missing = "6f1c2a0e-9a4b-4c1d-8e2f-3b5a7c9d1e0f";
    assert!(store.find_message(missing).await.expect("find").is_none());
    assert!(
        store
            .update_message(missing, fields(json!({ "snr": 1 })))
            .await
            .expect("update")
            .is_none()
    );
    assert!(store.delete_message(missing).await.expect("delete").is_none());
}

#[tokio::test]
async fn malformed_id_is_an_error() {
    let store = InMemoryMessageStore::new();
    let err = store.find_message("not-an-id").await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidId(_)));
    let err = store.delete_message("not-an-id").await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidId(_)));
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let store = InMemoryMessageStore::new();
    for seqno in 0..3 {
        store
            .create_message(fields(json!({ "seqno": seqno })))
            .await
            .expect("create");
    }
    let seqnos: Vec<f64> = store
        .list_messages()
        .await
        .expect("list")
        .into_iter()
        .filter_map(|item| item.seqno)
        .collect();
    assert_eq!(seqnos, vec![0.0, 1.0, 2.0]);
}
