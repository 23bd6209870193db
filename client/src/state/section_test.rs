use super::*;
use crate::state::clients::{self, Client, ClientDraft};

const NOW: i64 = 1_709_251_200_000;

fn section() -> SectionState<Client> {
    SectionState::new(clients::seed())
}

fn valid_draft() -> ClientDraft {
    ClientDraft {
        nombre: "Elena".into(),
        apellidos: "Sanz".into(),
        email: "elena@correo.es".into(),
        telefono: "600 111 222".into(),
        ..ClientDraft::default()
    }
}

#[test]
fn starts_hidden_without_banner() {
    let state = section();
    assert_eq!(state.mode, FormMode::Hidden);
    assert!(!state.form_open());
    assert!(!state.busy);
    assert_eq!(state.banner, None);
}

#[test]
fn open_create_resets_draft_and_banner() {
    let mut state = section();
    state.banner = Some(Banner::Success("x".into()));
    state.draft.nombre = "resto".into();
    state.open_create();
    assert_eq!(state.mode, FormMode::Creating);
    assert_eq!(state.draft, ClientDraft::default());
    assert_eq!(state.banner, None);
}

#[test]
fn open_edit_loads_record() {
    let mut state = section();
    assert!(state.open_edit(2));
    assert!(state.is_editing());
    assert_eq!(state.draft.nombre, "María");
    assert_eq!(state.draft.tipo_cliente, "empresa");
}

#[test]
fn open_edit_missing_record_is_refused() {
    let mut state = section();
    assert!(!state.open_edit(42));
    assert_eq!(state.mode, FormMode::Hidden);
}

#[test]
fn invalid_draft_never_reaches_registry() {
    let mut state = section();
    state.open_create();
    state.draft = ClientDraft { telefono: String::new(), ..valid_draft() };

    assert_eq!(state.begin_submit(), Err(FormError::MissingRequired));
    assert!(!state.busy);
    assert_eq!(state.registry.len(), 2);
    assert_eq!(
        state.banner,
        Some(Banner::Error("Por favor, complete todos los campos obligatorios".into()))
    );
    assert!(state.form_open());
}

#[test]
fn begin_then_finish_creates_record() {
    let mut state = section();
    state.open_create();
    state.draft = valid_draft();

    state.begin_submit().unwrap();
    assert!(state.busy);
    assert_eq!(state.registry.len(), 2);

    let created = state.finish_submit(NOW).unwrap().unwrap();
    assert!(!state.busy);
    assert!(!state.has_pending());
    assert_eq!(created.id, NOW);
    assert_eq!(state.registry.len(), 3);
    assert_eq!(state.mode, FormMode::Hidden);
    assert!(state.banner.as_ref().is_some_and(|b| !b.is_error()));
}

#[test]
fn edit_submit_updates_in_place() {
    let mut state = section();
    state.open_edit(1);
    state.draft.telefono = "+34 611 000 000".into();
    let updated = state.submit(NOW).unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(state.registry.len(), 2);
    assert_eq!(state.registry.get(1).unwrap().telefono, "+34 611 000 000");
    assert_eq!(state.banner.as_ref().map(Banner::text), Some("Cliente actualizado correctamente"));
}

#[test]
fn finish_after_record_vanished_reports_save_failure() {
    let mut state = section();
    state.open_edit(1);
    state.begin_submit().unwrap();
    state.registry.delete(1).unwrap();

    let err = state.finish_submit(NOW).unwrap_err();
    assert_eq!(err, FormError::SaveFailed("Error al guardar el cliente. Inténtelo de nuevo."));
    assert!(state.banner.as_ref().is_some_and(Banner::is_error));
    assert!(!state.busy);
}

#[test]
fn finish_without_begin_commits_nothing() {
    let mut state = section();
    state.open_create();
    state.draft = valid_draft();
    assert_eq!(state.finish_submit(NOW), Ok(None));
    assert_eq!(state.registry.len(), 2);
    assert!(state.form_open());
}

#[test]
fn cancel_during_pending_create_then_reopen_persists_nothing() {
    let mut state = section();
    state.open_create();
    state.draft = valid_draft();
    state.begin_submit().unwrap();
    state.cancel();
    assert!(!state.busy);
    state.open_create();

    assert_eq!(state.finish_submit(NOW), Ok(None));
    assert_eq!(state.registry.len(), 2);
    assert_eq!(state.mode, FormMode::Creating);
    assert_eq!(state.banner, None);
}

#[test]
fn reopening_another_record_drops_pending_create() {
    let mut state = section();
    state.open_create();
    state.draft = valid_draft();
    state.begin_submit().unwrap();
    state.cancel();
    state.open_edit(1);
    state.draft.email = String::new();

    assert_eq!(state.finish_submit(NOW), Ok(None));
    assert_eq!(state.registry.get(1).unwrap().email, "juan.perez@email.com");
    assert_eq!(state.registry.len(), 2);
    assert!(state.is_editing());
}

#[test]
fn pending_commit_uses_validated_snapshot() {
    let mut state = section();
    state.open_edit(2);
    state.begin_submit().unwrap();
    state.draft.nombre = String::new();

    let saved = state.finish_submit(NOW).unwrap().unwrap();
    assert_eq!(saved.nombre, "María");
    assert_eq!(state.registry.get(2).unwrap().nombre, "María");
}

#[test]
fn visible_follows_search_term() {
    let mut state = section();
    state.search = "gonzález".into();
    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 2);
    state.search.clear();
    assert_eq!(state.visible().len(), 2);
}

#[test]
fn delete_missing_record_leaves_banner_alone() {
    let mut state = section();
    assert_eq!(state.delete(9), Err(RegistryError::NotFound(9)));
    assert_eq!(state.banner, None);
}
