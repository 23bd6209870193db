use super::*;

#[test]
fn paths_are_under_dashboard() {
    for section in NavSection::ALL {
        assert!(section.path().starts_with("/dashboard"));
    }
}

#[test]
fn from_path_resolves_each_entry() {
    for section in NavSection::ALL {
        assert_eq!(NavSection::from_path(section.path()), Some(section));
    }
    assert_eq!(NavSection::from_path("/dashboard/clientes/"), Some(NavSection::Clientes));
    assert_eq!(NavSection::from_path("/login"), None);
}

#[test]
fn labels_match_menu_entries() {
    assert_eq!(NavSection::Clientes.label(), "Registrar Clientes");
    assert_eq!(NavSection::Documentos.label(), "Generar Documentos");
}
