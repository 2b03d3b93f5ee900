use super::*;

#[test]
fn success_response_keeps_breakdown_order() {
    let body = r#"{
        "success": true,
        "prediction": "Malignant",
        "confidence": 87.5,
        "all_predictions": { "Malignant": 87.5, "Benign": 12.5 }
    }"#;
    let resp: PredictionResponse = serde_json::from_str(body).unwrap();
    assert!(resp.success);
    assert_eq!(resp.prediction.as_deref(), Some("Malignant"));
    assert_eq!(resp.confidence, Some(87.5));
    let rows = resp.all_predictions.unwrap();
    let names: Vec<_> = rows.iter().map(|r| r.class_name.as_str()).collect();
    assert_eq!(names, ["Malignant", "Benign"]);
    assert_eq!(rows[1].percentage, 12.5);
}

#[test]
fn breakdown_order_is_not_sorted() {
    let body = r#"{"success":true,"all_predictions":{"zeta":1,"alpha":2,"mid":97}}"#;
    let resp: PredictionResponse = serde_json::from_str(body).unwrap();
    let names: Vec<_> = resp
        .all_predictions
        .unwrap()
        .into_iter()
        .map(|r| r.class_name)
        .collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn failure_response_carries_message() {
    let resp: PredictionResponse = serde_json::from_str(r#"{"success":false,"message":"model unavailable"}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("model unavailable"));
    assert!(resp.all_predictions.is_none());
}

#[test]
fn missing_success_defaults_to_false() {
    let resp: PredictionResponse = serde_json::from_str(r#"{"prediction":"Benign"}"#).unwrap();
    assert!(!resp.success);
}

#[test]
fn null_breakdown_decodes_as_none() {
    let resp: PredictionResponse = serde_json::from_str(r#"{"success":true,"all_predictions":null}"#).unwrap();
    assert!(resp.all_predictions.is_none());
}

#[test]
fn non_numeric_percentage_is_rejected() {
    let err = serde_json::from_str::<PredictionResponse>(r#"{"success":true,"all_predictions":{"a":"high"}}"#);
    assert!(err.is_err());
}

#[test]
fn duplicate_class_keeps_first_position_and_last_value() {
    let body = r#"{"success":true,"all_predictions":{"A":10,"B":40,"A":50}}"#;
    let resp: PredictionResponse = serde_json::from_str(body).unwrap();
    let rows: Vec<_> = resp
        .all_predictions
        .unwrap()
        .into_iter()
        .map(|r| (r.class_name, r.percentage))
        .collect();
    assert_eq!(rows, [("A".to_owned(), 50.0), ("B".to_owned(), 40.0)]);
}
