use super::*;

#[test]
fn data_url_embeds_media_type_and_payload() {
    assert_eq!(data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
}

#[test]
fn data_url_handles_empty_payload() {
    assert_eq!(data_url("image/jpeg", &[]), "data:image/jpeg;base64,");
}
