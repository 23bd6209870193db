use super::*;
use crate::state::registry::Registry;
use crate::state::section::{Banner, FormMode, SectionState};

// 2024-03-01T00:00:00Z
const NOW: i64 = 1_709_251_200_000;

fn filled_draft() -> ClientDraft {
    ClientDraft {
        nombre: "Lucía".into(),
        apellidos: "Martín Ruiz".into(),
        email: "lucia@correo.es".into(),
        telefono: "+34 611 222 333".into(),
        ciudad: "Sevilla".into(),
        tipo_cliente: "autonomo".into(),
        ..ClientDraft::default()
    }
}

// =============================================================
// ClientKind
// =============================================================

#[test]
fn client_kind_parse_round_trips_select_values() {
    for kind in ClientKind::ALL {
        assert_eq!(ClientKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(ClientKind::parse(""), None);
    assert_eq!(ClientKind::parse("Empresa"), None);
}

#[test]
fn client_kind_labels_are_spanish() {
    assert_eq!(ClientKind::Autonomo.label(), "Autónomo");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_accepts_complete_draft() {
    assert_eq!(Client::validate(&filled_draft()), Ok(()));
}

#[test]
fn validate_requires_phone() {
    let draft = ClientDraft { telefono: String::new(), ..filled_draft() };
    assert_eq!(Client::validate(&draft), Err(FormError::MissingRequired));
}

#[test]
fn validate_reports_missing_before_bad_email() {
    let draft = ClientDraft { nombre: String::new(), email: "nope".into(), ..filled_draft() };
    assert_eq!(Client::validate(&draft), Err(FormError::MissingRequired));
}

#[test]
fn validate_rejects_email_without_at() {
    let draft = ClientDraft { email: "lucia.correo.es".into(), ..filled_draft() };
    assert_eq!(Client::validate(&draft), Err(FormError::InvalidEmail));
}

#[test]
fn optional_address_fields_are_not_required() {
    let draft = ClientDraft { ciudad: String::new(), tipo_cliente: String::new(), ..filled_draft() };
    assert_eq!(Client::validate(&draft), Ok(()));
}

// =============================================================
// Record conversion
// =============================================================

#[test]
fn from_draft_stamps_registration_date() {
    let client = Client::from_draft(NOW, filled_draft(), NOW);
    assert_eq!(client.id, NOW);
    assert_eq!(client.fecha_registro, "2024-03-01");
    assert_eq!(client.tipo_cliente, Some(ClientKind::Autonomo));
    assert_eq!(client.empresa, None);
    assert_eq!(client.notas, None);
}

#[test]
fn revise_keeps_id_and_registration_date() {
    let original = seed().remove(0);
    let draft = ClientDraft { ciudad: "Toledo".into(), ..original.to_draft() };
    let revised = original.revise(draft);
    assert_eq!(revised.id, original.id);
    assert_eq!(revised.fecha_registro, original.fecha_registro);
    assert_eq!(revised.ciudad, "Toledo");
    assert_eq!(revised.notas, original.notas);
}

#[test]
fn to_draft_flattens_optional_fields() {
    let maria = seed().remove(1);
    let draft = maria.to_draft();
    assert_eq!(draft.tipo_cliente, "empresa");
    assert_eq!(draft.empresa, "Empresa ABC S.L.");
    assert_eq!(draft.notas, "");
    assert!(draft.shows_company());
}

#[test]
fn full_name_joins_names() {
    assert_eq!(seed()[0].full_name(), "Juan Pérez García");
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_matches_name_surname_and_email_case_insensitively() {
    let registry = Registry::new(seed());
    assert_eq!(registry.list("JUAN").len(), 1);
    assert_eq!(registry.list("lópez")[0].nombre, "María");
    assert_eq!(registry.list("@EMPRESA.com")[0].id, 2);
}

#[test]
fn search_ignores_non_designated_fields() {
    let registry = Registry::new(seed());
    assert!(registry.list("Madrid").is_empty());
    assert!(registry.list("600").is_empty());
}

// =============================================================
// Section flow
// =============================================================

#[test]
fn submit_creates_client_and_shows_success() {
    let mut section = SectionState::new(seed());
    section.open_create();
    section.draft = filled_draft();

    let created = section.submit(NOW).unwrap();

    assert_eq!(section.registry.len(), 3);
    assert_eq!(section.registry.get(created.id), Some(&created));
    assert_eq!(section.mode, FormMode::Hidden);
    assert_eq!(section.banner, Some(Banner::Success("Cliente registrado correctamente".into())));
}

#[test]
fn submit_with_missing_field_keeps_form_open() {
    let mut section = SectionState::new(seed());
    section.open_create();
    section.draft = ClientDraft { apellidos: String::new(), ..filled_draft() };

    assert_eq!(section.submit(NOW), Err(FormError::MissingRequired));
    assert_eq!(section.registry.len(), 2);
    assert_eq!(section.mode, FormMode::Creating);
    assert_eq!(
        section.banner,
        Some(Banner::Error("Por favor, complete todos los campos obligatorios".into()))
    );
}

#[test]
fn edit_flow_updates_only_target() {
    let mut section = SectionState::new(seed());
    assert!(section.open_edit(2));
    section.draft.telefono = "+34 699 000 111".into();

    section.submit(NOW).unwrap();

    assert_eq!(section.registry.get(2).unwrap().telefono, "+34 699 000 111");
    assert_eq!(section.registry.get(1), Some(&seed()[0]));
    assert_eq!(section.banner, Some(Banner::Success("Cliente actualizado correctamente".into())));
}

#[test]
fn delete_shows_deleted_banner() {
    let mut section = SectionState::new(seed());
    section.delete(1).unwrap();
    assert_eq!(section.registry.len(), 1);
    assert_eq!(section.banner, Some(Banner::Success("Cliente eliminado correctamente".into())));
}
