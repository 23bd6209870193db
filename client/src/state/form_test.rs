use super::*;

#[test]
fn require_accepts_filled_values() {
    assert_eq!(require(&["Juan", "Pérez"]), Ok(()));
}

#[test]
fn require_rejects_blank_value() {
    assert_eq!(require(&["Juan", "   "]), Err(FormError::MissingRequired));
    assert_eq!(require(&["", "Pérez"]), Err(FormError::MissingRequired));
}

#[test]
fn require_with_no_fields_passes() {
    assert_eq!(require(&[]), Ok(()));
}

#[test]
fn check_email_only_looks_for_at_sign() {
    assert_eq!(check_email("a@b"), Ok(()));
    assert_eq!(check_email("@"), Ok(()));
    assert_eq!(check_email("juan.perez.email.com"), Err(FormError::InvalidEmail));
}

#[test]
fn optional_drops_blank_input() {
    assert_eq!(optional(""), None);
    assert_eq!(optional("  "), None);
    assert_eq!(optional("Empresa ABC S.L."), Some("Empresa ABC S.L.".to_owned()));
}

#[test]
fn form_error_messages_match_banners() {
    assert_eq!(
        FormError::MissingRequired.to_string(),
        "Por favor, complete todos los campos obligatorios"
    );
    assert_eq!(FormError::InvalidEmail.to_string(), "Por favor, ingrese un email válido");
    assert_eq!(
        FormError::SaveFailed("Error al guardar el cliente. Inténtelo de nuevo.").to_string(),
        "Error al guardar el cliente. Inténtelo de nuevo."
    );
}
