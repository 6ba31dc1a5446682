use chrono::{TimeZone, Utc};
use fractic_play_receipt::{
    domain::entities::{
        purchase_envelope::PurchaseEnvelope, purchase_record::PurchaseRecord,
        purchase_state::PurchaseState,
    },
    errors::ReceiptError,
    util::parse_receipt,
};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn refunded_receipt() {
    let record =
        parse_receipt(r#"{"purchaseToken":"tok123","purchaseState":2,"purchaseTime":1609459200000}"#)
            .unwrap();
    assert_eq!(record.purchase_token(), "tok123");
    assert_eq!(record.purchase_state(), PurchaseState::Refunded);
    assert_eq!(
        record.purchase_time(),
        Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(record.order_id(), "");
    assert!(!record.auto_renewing());
}

#[test]
fn unknown_state_code_is_canceled() {
    let record = parse_receipt(r#"{"purchaseState":9,"purchaseToken":"t"}"#).unwrap();
    assert_eq!(record.purchase_state(), PurchaseState::Canceled);
    assert!(!record.purchase_state().grants_entitlement());
}

#[test]
fn empty_object_is_missing_token() {
    assert!(matches!(
        parse_receipt("{}"),
        Err(ReceiptError::MissingRequiredField("purchaseToken"))
    ));
}

#[test]
fn broken_json_is_malformed() {
    assert!(matches!(
        parse_receipt("{not json"),
        Err(ReceiptError::Malformed(_))
    ));
}

#[test]
fn purchase_time_one_second_after_epoch() {
    let record = parse_receipt(r#"{"purchaseToken":"t","purchaseTime":1000}"#).unwrap();
    assert_eq!(
        record.purchase_time(),
        Some(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 1).unwrap())
    );
}

#[test]
fn envelope_parses_and_forwards() {
    let payload = r#"{"productId":"sword_001","purchaseState":0,"purchaseToken":"tok"}"#;
    let envelope = PurchaseEnvelope::new(payload, "c2ln");
    let record = envelope.parse().unwrap();
    assert!(record.purchase_state().grants_entitlement());

    let forwarded = serde_json::to_string(&envelope).unwrap();
    let received: PurchaseEnvelope = serde_json::from_str(&forwarded).unwrap();
    assert_eq!(received, envelope);
    assert_eq!(received.parse().unwrap(), record);
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn receipt_types_are_shareable_across_threads() {
    assert_send_sync::<PurchaseEnvelope>();
    assert_send_sync::<PurchaseRecord>();
    assert_send_sync::<PurchaseState>();
    assert_send_sync::<ReceiptError>();
}

#[test]
fn envelope_parsed_concurrently() {
    let envelope = std::sync::Arc::new(PurchaseEnvelope::new(
        r#"{"purchaseToken":"tok","purchaseState":0}"#,
        "c2ln",
    ));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let envelope = envelope.clone();
            std::thread::spawn(move || envelope.parse().unwrap())
        })
        .collect();
    let expected = envelope.parse().unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

fn optional_fields() -> impl Strategy<Value = serde_json::Value> {
    (
        proptest::option::of("\\PC{0,32}"),
        proptest::option::of(any::<i64>()),
        proptest::option::of(-2i64..6),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(order_id, purchase_time, purchase_state, auto_renewing)| {
            let mut object = serde_json::Map::new();
            if let Some(v) = order_id {
                object.insert("orderId".to_string(), json!(v));
            }
            if let Some(v) = purchase_time {
                object.insert("purchaseTime".to_string(), json!(v));
            }
            if let Some(v) = purchase_state {
                object.insert("purchaseState".to_string(), json!(v));
            }
            if let Some(v) = auto_renewing {
                object.insert("autoRenewing".to_string(), json!(v));
            }
            serde_json::Value::Object(object)
        })
}

proptest! {
    #[test]
    fn token_round_trips(token in "\\PC{1,64}", fields in optional_fields()) {
        let mut payload = fields;
        payload["purchaseToken"] = json!(token.clone());
        let record = parse_receipt(&payload.to_string()).unwrap();
        prop_assert_eq!(record.purchase_token(), token.as_str());
    }

    #[test]
    fn missing_token_never_yields_record(fields in optional_fields()) {
        let result = parse_receipt(&fields.to_string());
        prop_assert!(matches!(
            result,
            Err(ReceiptError::MissingRequiredField("purchaseToken"))
        ));
    }

    #[test]
    fn unrecognized_codes_are_canceled(code in any::<i64>().prop_filter("known code", |c| !(0..=3).contains(c))) {
        prop_assert_eq!(PurchaseState::from_code(code), PurchaseState::Canceled);
    }

    #[test]
    fn parsing_is_deterministic(raw in ".{0,128}") {
        match (parse_receipt(&raw), parse_receipt(&raw)) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "parse results diverged"),
        }
    }

    #[test]
    fn parsing_structured_payloads_is_deterministic(token in "\\PC{1,16}", fields in optional_fields()) {
        let mut payload = fields;
        payload["purchaseToken"] = json!(token);
        let raw = payload.to_string();
        prop_assert_eq!(parse_receipt(&raw).unwrap(), parse_receipt(&raw).unwrap());
    }
}
