use super::*;
use crate::state::clients::{self, Client, ClientDraft};

const NOW: i64 = 1_709_251_200_000;

fn draft(nombre: &str) -> ClientDraft {
    ClientDraft {
        nombre: nombre.into(),
        apellidos: "Ruiz".into(),
        email: format!("{}@correo.es", nombre.to_lowercase()),
        telefono: "600 000 000".into(),
        ..ClientDraft::default()
    }
}

#[test]
fn new_registry_keeps_seed_order() {
    let registry = Registry::new(clients::seed());
    let ids: Vec<_> = registry.items().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn default_registry_is_empty() {
    let registry = Registry::<Client>::default();
    assert!(registry.is_empty());
    assert!(registry.list("").is_empty());
}

#[test]
fn empty_term_lists_everything() {
    let registry = Registry::new(clients::seed());
    assert_eq!(registry.list("").len(), 2);
}

#[test]
fn search_term_is_not_trimmed() {
    let registry = Registry::new(clients::seed());
    assert!(registry.list(" juan").is_empty());
    assert_eq!(registry.list("juan").len(), 1);
}

#[test]
fn create_appends_with_clock_id() {
    let mut registry = Registry::new(clients::seed());
    let created = registry.create(draft("Elena"), NOW);
    assert_eq!(created.id, NOW);
    assert_eq!(registry.items().last(), Some(&created));
}

#[test]
fn creates_in_same_millisecond_get_distinct_ids() {
    let mut registry = Registry::new(Vec::new());
    let a: Client = registry.create(draft("Ana"), NOW);
    let b = registry.create(draft("Berta"), NOW);
    let c = registry.create(draft("Carla"), NOW - 5);
    assert_eq!(a.id, NOW);
    assert_eq!(b.id, NOW + 1);
    assert_eq!(c.id, NOW + 2);
}

#[test]
fn ids_stay_above_seeded_ids() {
    let mut registry = Registry::new(clients::seed());
    let created = registry.create(draft("Elena"), 0);
    assert_eq!(created.id, 3);
}

#[test]
fn update_replaces_in_place() {
    let mut registry = Registry::new(clients::seed());
    let updated = registry.update(2, draft("Marta")).unwrap();
    assert_eq!(updated.id, 2);
    assert_eq!(registry.items()[1].nombre, "Marta");
    assert_eq!(registry.items()[1].fecha_registro, "2024-01-20");
}

#[test]
fn update_missing_is_not_found() {
    let mut registry = Registry::new(clients::seed());
    assert_eq!(registry.update(99, draft("X")), Err(RegistryError::NotFound(99)));
    assert_eq!(registry.items(), clients::seed().as_slice());
}

#[test]
fn delete_removes_and_returns_record() {
    let mut registry = Registry::new(clients::seed());
    let removed = registry.delete(1).unwrap();
    assert_eq!(removed.nombre, "Juan");
    assert!(registry.get(1).is_none());
    assert_eq!(registry.delete(1), Err(RegistryError::NotFound(1)));
}

#[test]
fn not_found_message_names_id() {
    assert_eq!(RegistryError::NotFound(7).to_string(), "record not found: 7");
}
