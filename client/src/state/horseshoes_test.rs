use super::*;
use crate::state::registry::Registry;
use crate::state::section::{Banner, FormMode, SectionState};

const NOW: i64 = 1_709_251_200_000;

fn therapeutic() -> HorseshoeDraft {
    HorseshoeDraft {
        codigo: "HRD-010".into(),
        tipo: "Herradura Terapéutica".into(),
        estado: "Reparada".into(),
        owner: OwnerContact { propietario: "Pablo Ortega".into(), ..OwnerContact::default() },
        ..HorseshoeDraft::default()
    }
}

#[test]
fn condition_parse_accepts_only_known_states() {
    for condition in HorseshoeCondition::ALL {
        assert_eq!(HorseshoeCondition::parse(condition.as_str()), Some(condition));
    }
    assert_eq!(HorseshoeCondition::parse("nueva"), None);
    assert_eq!(HorseshoeCondition::parse(""), None);
}

#[test]
fn blank_form_preselects_new_state() {
    assert_eq!(HorseshoeDraft::default().estado, "Nueva");
    assert_eq!(HorseshoeDraft::default().imagen, None);
}

#[test]
fn validate_requires_code_type_and_owner() {
    assert_eq!(Horseshoe::validate(&therapeutic()), Ok(()));
    let missing_owner = HorseshoeDraft { owner: OwnerContact::default(), ..therapeutic() };
    assert_eq!(Horseshoe::validate(&missing_owner), Err(FormError::MissingRequired));
    let missing_code = HorseshoeDraft { codigo: String::new(), ..therapeutic() };
    assert_eq!(Horseshoe::validate(&missing_code), Err(FormError::MissingRequired));
}

#[test]
fn owner_email_is_not_validated() {
    let draft = HorseshoeDraft {
        owner: OwnerContact { email: "sin-arroba".into(), ..therapeutic().owner },
        ..therapeutic()
    };
    assert_eq!(Horseshoe::validate(&draft), Ok(()));
}

#[test]
fn new_horseshoe_defaults_image_and_parses_state() {
    let horseshoe = Horseshoe::from_draft(NOW, therapeutic(), NOW);
    assert_eq!(horseshoe.imagen, DEFAULT_HORSESHOE_IMAGE);
    assert_eq!(horseshoe.estado, Some(HorseshoeCondition::Reparada));
    assert_eq!(horseshoe.owner.propietario, "Pablo Ortega");
}

#[test]
fn revise_keeps_image_when_none_picked() {
    let first = seed().remove(0);
    let draft = HorseshoeDraft { imagen: None, estado: "Usada".into(), ..first.to_draft() };
    let revised = first.revise(draft);
    assert_eq!(revised.imagen, "/herradura-acero.svg");
    assert_eq!(revised.estado, Some(HorseshoeCondition::Usada));
}

#[test]
fn search_covers_code_type_and_owner() {
    let registry = Registry::new(seed());
    assert_eq!(registry.list("hrd-00").len(), 2);
    assert_eq!(registry.list("terapéutica")[0].codigo, "HRD-002");
    assert_eq!(registry.list("MENDOZA")[0].id, 1);
    assert!(registry.list("aluminio").is_empty());
}

#[test]
fn serialises_owner_fields_flat() {
    let value = serde_json::to_value(&seed()[0]).unwrap();
    assert_eq!(value["propietario"], "Carlos Mendoza");
    assert_eq!(value["tamaño"], "Talla 3");
    assert_eq!(value["fechaFabricacion"], "2024-01-15");
}

#[test]
fn count_label_pluralises() {
    assert_eq!(count_label(1), "1 herradura");
    assert_eq!(count_label(5), "5 herraduras");
}

#[test]
fn delete_removes_only_target() {
    let mut section = SectionState::new(seed());
    let removed = section.delete(2).unwrap();
    assert_eq!(removed.codigo, "HRD-002");
    assert_eq!(section.registry.items(), &seed()[..1]);
    assert_eq!(section.banner, Some(Banner::Success("Herradura eliminada correctamente".into())));
}

#[test]
fn deleting_record_under_edit_closes_form() {
    let mut section = SectionState::new(seed());
    section.open_edit(1);
    section.delete(1).unwrap();
    assert_eq!(section.mode, FormMode::Hidden);
}
