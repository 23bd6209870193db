use super::*;

#[test]
fn data_url_encodes_payload_with_mime() {
    assert_eq!(data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
}

#[test]
fn data_url_falls_back_when_mime_missing() {
    assert_eq!(data_url("  ", b"hi"), "data:application/octet-stream;base64,aGk=");
}

#[test]
fn data_url_handles_empty_file() {
    assert_eq!(data_url("image/jpeg", &[]), "data:image/jpeg;base64,");
}

#[test]
fn image_error_message_is_user_facing() {
    assert_eq!(ImageError::Read.to_string(), "No se pudo leer la imagen seleccionada");
}
