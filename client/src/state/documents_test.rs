use super::*;
use crate::state::registry::Registry;
use crate::state::section::{Banner, SectionState};

const NOW: i64 = 1_709_251_200_000;

fn juan() -> Client {
    clients::seed().remove(0)
}

fn invoice_draft() -> DocumentDraft {
    DocumentDraft {
        cliente: Some(juan()),
        tipo: Some(DocumentKind::Factura),
        titulo: "Factura #003".into(),
        fecha: "2024-03-01".into(),
        importe: "320".into(),
        concepto: "Herrado completo".into(),
        numero_documento: "FAC-2024-003".into(),
        ..DocumentDraft::default()
    }
}

#[test]
fn kind_parse_and_labels() {
    for kind in DocumentKind::ALL {
        assert_eq!(DocumentKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(DocumentKind::Carta.label(), "Carta Comercial");
    assert_eq!(DocumentKind::parse("albaran"), None);
}

#[test]
fn fields_switch_on_kind() {
    let contract: Vec<_> = DocumentKind::Contrato.fields().iter().map(|f| f.field).collect();
    assert_eq!(
        contract,
        vec![DocumentField::Importe, DocumentField::ValidoHasta, DocumentField::Condiciones]
    );

    let invoice = DocumentKind::Factura.fields();
    assert_eq!(invoice[0].label, "Número de Factura");
    assert_eq!(invoice[1].label, "Importe Total");

    assert_eq!(DocumentKind::Presupuesto.fields()[0].label, "Importe del Presupuesto");
    assert!(DocumentKind::Certificado.fields().is_empty());
    assert!(DocumentKind::Recibo.fields().is_empty());
}

#[test]
fn draft_defaults_date_to_today() {
    let draft = DocumentDraft::default();
    assert_eq!(draft.fecha, clock::today());
    assert!(draft.cliente.is_none());
}

#[test]
fn validate_requires_client_kind_and_title() {
    assert_eq!(Document::validate(&invoice_draft()), Ok(()));
    for incomplete in [
        DocumentDraft { cliente: None, ..invoice_draft() },
        DocumentDraft { tipo: None, ..invoice_draft() },
        DocumentDraft { titulo: "  ".into(), ..invoice_draft() },
    ] {
        assert_eq!(Document::validate(&incomplete), Err(FormError::MissingRequired));
    }
}

#[test]
fn datos_keeps_only_filled_fields_with_camel_case_keys() {
    let datos = invoice_draft().datos();
    assert_eq!(datos.get("numeroDocumento").map(String::as_str), Some("FAC-2024-003"));
    assert_eq!(datos.get("importe").map(String::as_str), Some("320"));
    assert!(!datos.contains_key("condiciones"));
    assert!(!datos.contains_key("validoHasta"));
}

#[test]
fn set_field_writes_matching_slot() {
    let mut draft = DocumentDraft::default();
    draft.set_field(DocumentField::ValidoHasta, "2024-12-31".into());
    assert_eq!(draft.field(DocumentField::ValidoHasta), "2024-12-31");
    assert_eq!(draft.valido_hasta, "2024-12-31");
}

#[test]
fn preview_requires_complete_header() {
    let draft = DocumentDraft { titulo: String::new(), ..invoice_draft() };
    assert_eq!(draft.preview(), Err(FormError::PreviewIncomplete));
    assert_eq!(
        FormError::PreviewIncomplete.to_string(),
        "Complete los campos obligatorios para ver la vista previa"
    );
}

#[test]
fn preview_projects_client_and_amount() {
    let preview = invoice_draft().preview().unwrap();
    assert_eq!(preview.titulo, "Factura #003");
    assert_eq!(preview.cliente_nombre, "Juan Pérez García");
    assert_eq!(preview.cliente_direccion.as_deref(), Some("Calle Mayor 123, Madrid"));
    assert_eq!(preview.importe.as_deref(), Some("€320"));
    assert_eq!(preview.observaciones, None);
}

#[test]
fn client_candidates_empty_until_typed() {
    let clients = clients::seed();
    assert!(client_candidates(&clients, "").is_empty());
    assert_eq!(client_candidates(&clients, "gonz")[0].nombre, "María");
    assert_eq!(client_candidates(&clients, "JUAN").len(), 1);
    assert!(client_candidates(&clients, "madrid").is_empty());
}

#[test]
fn generated_document_embeds_client_copy() {
    let doc = Document::from_draft(NOW, invoice_draft(), NOW);
    assert_eq!(doc.cliente, juan());
    assert_eq!(doc.estado, DocumentStatus::Generado);
    assert_eq!(doc.fecha_creacion, "2024-03-01");
    assert_eq!(doc.importe_label().as_deref(), Some("€320"));
}

#[test]
fn round_trips_through_draft() {
    let doc = seed().remove(0);
    let draft = doc.to_draft();
    assert_eq!(draft.concepto, "Servicios de consultoría");
    assert_eq!(draft.fecha, "2024-01-15");
    let revised = doc.revise(DocumentDraft { titulo: "Contrato #001-b".into(), ..draft });
    assert_eq!(revised.fecha_creacion, doc.fecha_creacion);
    assert_eq!(revised.titulo, "Contrato #001-b");
}

#[test]
fn search_covers_title_and_client_names() {
    let registry = Registry::new(seed());
    assert_eq!(registry.list("factura")[0].id, 2);
    assert_eq!(registry.list("pérez")[0].id, 1);
    assert!(registry.list("consultoría").is_empty());
}

#[test]
fn log_json_uses_camel_case() {
    let json = seed()[1].to_log_json();
    assert!(json.contains("\"fechaCreacion\":\"2024-01-20\""));
    assert!(json.contains("\"estado\":\"enviado\""));
}

#[test]
fn section_generate_uses_document_messages() {
    let mut section = SectionState::new(seed());
    section.open_create();
    section.draft = invoice_draft();
    section.begin_submit().unwrap();
    assert!(section.busy);
    let created = section.finish_submit(NOW).unwrap().unwrap();
    assert_eq!(section.registry.len(), 3);
    assert_eq!(created.tipo, DocumentKind::Factura);
    assert_eq!(section.banner, Some(Banner::Success("Documento generado correctamente".into())));
}
