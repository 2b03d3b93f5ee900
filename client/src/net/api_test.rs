use super::*;

#[test]
fn predict_endpoint_formats_expected_path() {
    assert_eq!(predict_endpoint("brain_tumor"), "/predict/brain_tumor");
}

#[test]
fn interpret_success_builds_result() {
    let body = r#"{"success":true,"prediction":"Malignant","confidence":87.5,"all_predictions":{"Malignant":87.5,"Benign":12.5}}"#;
    let result = interpret_response(true, 200, body).unwrap();
    assert_eq!(result.prediction, "Malignant");
    assert!((result.confidence - 87.5).abs() < f64::EPSILON);
    assert_eq!(result.all_predictions.len(), 2);
    assert_eq!(result.all_predictions[0].class_name, "Malignant");
    assert_eq!(result.all_predictions[1].class_name, "Benign");
}

#[test]
fn interpret_success_without_breakdown_renders_empty_rows() {
    let result = interpret_response(true, 200, r#"{"success":true,"prediction":"Normal","confidence":99}"#).unwrap();
    assert!(result.all_predictions.is_empty());
}

#[test]
fn interpret_server_failure_uses_message() {
    let err = interpret_response(true, 200, r#"{"success":false,"message":"model unavailable"}"#).unwrap_err();
    assert_eq!(err.to_string(), "model unavailable");
}

#[test]
fn interpret_server_failure_without_message_falls_back() {
    let err = interpret_response(true, 200, r#"{"success":false}"#).unwrap_err();
    assert_eq!(err.to_string(), FALLBACK_FAILURE_MESSAGE);

    let err = interpret_response(true, 200, r#"{"success":false,"message":""}"#).unwrap_err();
    assert_eq!(err.to_string(), FALLBACK_FAILURE_MESSAGE);
}

#[test]
fn interpret_non_2xx_fails_even_when_success_flag_set() {
    let err = interpret_response(false, 500, r#"{"success":true,"prediction":"x","confidence":1}"#).unwrap_err();
    assert_eq!(err, PredictError::Rejected { status: 500, message: None });
}

#[test]
fn interpret_non_json_body_surfaces_parse_error() {
    let err = interpret_response(false, 502, "<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, PredictError::Parse(_)));
    assert!(!err.to_string().is_empty());
    assert_ne!(err.to_string(), FALLBACK_FAILURE_MESSAGE);
}

#[test]
fn interpret_success_missing_label_is_parse_error() {
    let err = interpret_response(true, 200, r#"{"success":true,"confidence":50}"#).unwrap_err();
    assert_eq!(err.to_string(), "missing field `prediction`");
}

#[test]
fn transport_error_displays_fallback_and_keeps_detail() {
    let err = PredictError::Transport("Failed to fetch".to_owned());
    assert_eq!(err.to_string(), FALLBACK_FAILURE_MESSAGE);
    assert_eq!(err.detail(), "Failed to fetch");
}

#[test]
fn rejected_detail_includes_status() {
    let err = PredictError::Rejected { status: 503, message: Some("busy".to_owned()) };
    assert_eq!(err.detail(), "status 503: busy");
}
