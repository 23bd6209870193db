use super::*;

#[test]
fn metrics_are_fixed_figures() {
    let titles: Vec<_> = METRICS.iter().map(|m| m.title).collect();
    assert_eq!(
        titles,
        vec!["Total Clientes", "Animales Registrados", "Herraduras Registradas", "Documentos Generados"]
    );
    assert_eq!(METRICS[0].value, "1,234");
    assert_eq!(METRICS[1].change, "+15%");
}

#[test]
fn quick_actions_cover_each_section_once() {
    let sections: Vec<_> = QUICK_ACTIONS.iter().map(|a| a.section).collect();
    assert_eq!(
        sections,
        vec![NavSection::Clientes, NavSection::Animales, NavSection::Herraduras, NavSection::Documentos]
    );
}

#[test]
fn quick_actions_target_section_routes() {
    assert_eq!(QUICK_ACTIONS[3].section.path(), "/dashboard/documentos");
    assert_eq!(QUICK_ACTIONS[0].primary, "Registrar Nuevo Cliente");
}

#[test]
fn recent_activity_has_three_entries() {
    assert_eq!(RECENT_ACTIVITY.len(), 3);
    assert_eq!(RECENT_ACTIVITY[1].0, "Documento generado: Contrato #1234");
}
