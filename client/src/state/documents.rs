//! Document drafts, previews and the generated-document list.
//!
//! DESIGN
//! ======
//! A document embeds a full copy of the chosen client rather than a
//! reference, and keeps its type-specific values in an open string map
//! (`datos`) keyed by the form field names. Nothing is rendered to a file:
//! the preview is a straight projection of the draft, and print/download are
//! notices only.
//!
//! The only branching is [`DocumentKind::fields`], which decides which
//! optional inputs the form shows for each type.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::clients::{self, Client};
use super::form::{self, FormError};
use super::registry::{Record, RecordId, SectionMessages};
use crate::util::clock;

pub const PRINT_NOTICE: &str = "Función de impresión activada";
pub const DOWNLOAD_NOTICE: &str = "Función de descarga activada";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    #[default]
    Contrato,
    Factura,
    Presupuesto,
    Certificado,
    Carta,
    Recibo,
}

/// Optional, type-specific form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentField {
    Importe,
    ValidoHasta,
    Condiciones,
    NumeroDocumento,
}

impl DocumentField {
    /// Key used in [`Document::datos`].
    pub fn key(self) -> &'static str {
        match self {
            Self::Importe => "importe",
            Self::ValidoHasta => "validoHasta",
            Self::Condiciones => "condiciones",
            Self::NumeroDocumento => "numeroDocumento",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Date,
    TextArea,
}

/// How one type-specific field is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    pub field: DocumentField,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: InputKind,
}

const CONTRACT_FIELDS: &[FieldLayout] = &[
    FieldLayout {
        field: DocumentField::Importe,
        label: "Importe del Contrato",
        placeholder: "1500.00",
        input: InputKind::Text,
    },
    FieldLayout { field: DocumentField::ValidoHasta, label: "Válido Hasta", placeholder: "", input: InputKind::Date },
    FieldLayout {
        field: DocumentField::Condiciones,
        label: "Condiciones del Contrato",
        placeholder: "Términos y condiciones del contrato...",
        input: InputKind::TextArea,
    },
];

const INVOICE_FIELDS: &[FieldLayout] = &[
    FieldLayout {
        field: DocumentField::NumeroDocumento,
        label: "Número de Factura",
        placeholder: "FAC-2024-001",
        input: InputKind::Text,
    },
    FieldLayout { field: DocumentField::Importe, label: "Importe Total", placeholder: "850.00", input: InputKind::Text },
];

const QUOTE_FIELDS: &[FieldLayout] = &[
    FieldLayout {
        field: DocumentField::Importe,
        label: "Importe del Presupuesto",
        placeholder: "2500.00",
        input: InputKind::Text,
    },
    FieldLayout { field: DocumentField::ValidoHasta, label: "Válido Hasta", placeholder: "", input: InputKind::Date },
];

impl DocumentKind {
    pub const ALL: [Self; 6] =
        [Self::Contrato, Self::Factura, Self::Presupuesto, Self::Certificado, Self::Carta, Self::Recibo];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contrato => "contrato",
            Self::Factura => "factura",
            Self::Presupuesto => "presupuesto",
            Self::Certificado => "certificado",
            Self::Carta => "carta",
            Self::Recibo => "recibo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Contrato => "Contrato de Servicios",
            Self::Factura => "Factura",
            Self::Presupuesto => "Presupuesto",
            Self::Certificado => "Certificado",
            Self::Carta => "Carta Comercial",
            Self::Recibo => "Recibo",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }

    /// Optional inputs shown for this type, in display order.
    pub fn fields(self) -> &'static [FieldLayout] {
        match self {
            Self::Contrato => CONTRACT_FIELDS,
            Self::Factura => INVOICE_FIELDS,
            Self::Presupuesto => QUOTE_FIELDS,
            Self::Certificado | Self::Carta | Self::Recibo => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Generado,
    Enviado,
}

impl DocumentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generado => "generado",
            Self::Enviado => "enviado",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: RecordId,
    pub tipo: DocumentKind,
    pub titulo: String,
    pub cliente: Client,
    pub datos: BTreeMap<String, String>,
    pub fecha_creacion: String,
    pub estado: DocumentStatus,
}

impl Document {
    fn dato(&self, key: &str) -> String {
        self.datos.get(key).cloned().unwrap_or_default()
    }

    /// Formatted amount, if the document carries one.
    pub fn importe_label(&self) -> Option<String> {
        self.datos
            .get(DocumentField::Importe.key())
            .filter(|v| !v.trim().is_empty())
            .map(|v| format!("€{v}"))
    }

    /// JSON body logged by the print/download stubs.
    pub fn to_log_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("document {}", self.id))
    }
}

/// Document form state, including the chosen client and type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentDraft {
    pub cliente: Option<Client>,
    pub tipo: Option<DocumentKind>,
    pub titulo: String,
    pub descripcion: String,
    pub fecha: String,
    pub importe: String,
    pub concepto: String,
    pub observaciones: String,
    pub valido_hasta: String,
    pub numero_documento: String,
    pub condiciones: String,
}

impl Default for DocumentDraft {
    fn default() -> Self {
        Self {
            cliente: None,
            tipo: None,
            titulo: String::new(),
            descripcion: String::new(),
            fecha: clock::today(),
            importe: String::new(),
            concepto: String::new(),
            observaciones: String::new(),
            valido_hasta: String::new(),
            numero_documento: String::new(),
            condiciones: String::new(),
        }
    }
}

/// Rendered preview of a draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentPreview {
    pub titulo: String,
    pub fecha: String,
    pub cliente_nombre: String,
    pub cliente_email: String,
    pub cliente_telefono: String,
    pub cliente_direccion: Option<String>,
    pub concepto: Option<String>,
    pub importe: Option<String>,
    pub observaciones: Option<String>,
}

impl DocumentDraft {
    pub fn field(&self, field: DocumentField) -> &str {
        match field {
            DocumentField::Importe => &self.importe,
            DocumentField::ValidoHasta => &self.valido_hasta,
            DocumentField::Condiciones => &self.condiciones,
            DocumentField::NumeroDocumento => &self.numero_documento,
        }
    }

    pub fn set_field(&mut self, field: DocumentField, value: String) {
        match field {
            DocumentField::Importe => self.importe = value,
            DocumentField::ValidoHasta => self.valido_hasta = value,
            DocumentField::Condiciones => self.condiciones = value,
            DocumentField::NumeroDocumento => self.numero_documento = value,
        }
    }

    fn is_complete(&self) -> bool {
        self.cliente.is_some() && self.tipo.is_some() && !self.titulo.trim().is_empty()
    }

    /// Non-empty form values keyed by field name.
    pub fn datos(&self) -> BTreeMap<String, String> {
        [
            ("titulo", &self.titulo),
            ("descripcion", &self.descripcion),
            ("fecha", &self.fecha),
            ("importe", &self.importe),
            ("concepto", &self.concepto),
            ("observaciones", &self.observaciones),
            (DocumentField::ValidoHasta.key(), &self.valido_hasta),
            (DocumentField::NumeroDocumento.key(), &self.numero_documento),
            (DocumentField::Condiciones.key(), &self.condiciones),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (key.to_owned(), value.clone()))
        .collect()
    }

    /// Project the draft into the preview pane.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::PreviewIncomplete`] until a client, a type and a
    /// title are set.
    pub fn preview(&self) -> Result<DocumentPreview, FormError> {
        let Some(cliente) = self.cliente.as_ref().filter(|_| self.is_complete()) else {
            return Err(FormError::PreviewIncomplete);
        };
        let cliente_direccion = (!cliente.direccion.trim().is_empty())
            .then(|| format!("{}, {}", cliente.direccion, cliente.ciudad));
        Ok(DocumentPreview {
            titulo: self.titulo.clone(),
            fecha: self.fecha.clone(),
            cliente_nombre: cliente.full_name(),
            cliente_email: cliente.email.clone(),
            cliente_telefono: cliente.telefono.clone(),
            cliente_direccion,
            concepto: form::optional(&self.concepto),
            importe: form::optional(&self.importe).map(|v| format!("€{v}")),
            observaciones: form::optional(&self.observaciones),
        })
    }
}

impl Record for Document {
    type Draft = DocumentDraft;

    const MESSAGES: SectionMessages = SectionMessages {
        created: "Documento generado correctamente",
        // Only reachable through `revise`, which the page never triggers.
        updated: "Documento actualizado correctamente",
        deleted: "Documento eliminado correctamente",
        confirm_delete: "¿Está seguro de que desea eliminar este documento?",
        save_failed: "Error al generar el documento. Inténtelo de nuevo.",
    };

    const SUBMIT_DELAY_MS: u32 = 1500;

    fn id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.titulo.as_str(), self.cliente.nombre.as_str(), self.cliente.apellidos.as_str()]
    }

    fn validate(draft: &DocumentDraft) -> Result<(), FormError> {
        if draft.is_complete() { Ok(()) } else { Err(FormError::MissingRequired) }
    }

    fn from_draft(id: RecordId, draft: DocumentDraft, now_millis: i64) -> Self {
        let datos = draft.datos();
        Self {
            id,
            tipo: draft.tipo.unwrap_or_default(),
            titulo: draft.titulo,
            cliente: draft.cliente.unwrap_or_default(),
            datos,
            fecha_creacion: clock::iso_date(now_millis),
            estado: DocumentStatus::Generado,
        }
    }

    /// Documents have no edit form; `Record` requires the update path so
    /// the shared section state can treat every record kind alike.
    fn revise(&self, draft: DocumentDraft) -> Self {
        let datos = draft.datos();
        Self {
            id: self.id,
            tipo: draft.tipo.unwrap_or(self.tipo),
            titulo: draft.titulo,
            cliente: draft.cliente.unwrap_or_else(|| self.cliente.clone()),
            datos,
            fecha_creacion: self.fecha_creacion.clone(),
            estado: self.estado,
        }
    }

    fn to_draft(&self) -> DocumentDraft {
        DocumentDraft {
            cliente: Some(self.cliente.clone()),
            tipo: Some(self.tipo),
            titulo: self.titulo.clone(),
            descripcion: self.dato("descripcion"),
            fecha: self.datos.get("fecha").cloned().unwrap_or_else(|| self.fecha_creacion.clone()),
            importe: self.dato("importe"),
            concepto: self.dato("concepto"),
            observaciones: self.dato("observaciones"),
            valido_hasta: self.dato(DocumentField::ValidoHasta.key()),
            numero_documento: self.dato(DocumentField::NumeroDocumento.key()),
            condiciones: self.dato(DocumentField::Condiciones.key()),
        }
    }
}

/// Clients offered by the picker: nothing until the user types, then
/// case-insensitive matches on first name or surname.
pub fn client_candidates<'a>(clients: &'a [Client], term: &str) -> Vec<&'a Client> {
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    clients
        .iter()
        .filter(|c| c.nombre.to_lowercase().contains(&needle) || c.apellidos.to_lowercase().contains(&needle))
        .collect()
}

/// Example documents shown on first load.
pub fn seed() -> Vec<Document> {
    let mut clients = clients::seed().into_iter();
    let juan = clients.next().unwrap_or_default();
    let maria = clients.next().unwrap_or_default();
    vec![
        Document {
            id: 1,
            tipo: DocumentKind::Contrato,
            titulo: "Contrato de Servicios #001".into(),
            cliente: juan,
            datos: BTreeMap::from([
                ("importe".to_owned(), "1500".to_owned()),
                ("concepto".to_owned(), "Servicios de consultoría".to_owned()),
            ]),
            fecha_creacion: "2024-01-15".into(),
            estado: DocumentStatus::Generado,
        },
        Document {
            id: 2,
            tipo: DocumentKind::Factura,
            titulo: "Factura #002".into(),
            cliente: maria,
            datos: BTreeMap::from([
                ("importe".to_owned(), "850".to_owned()),
                ("concepto".to_owned(), "Desarrollo web".to_owned()),
            ]),
            fecha_creacion: "2024-01-20".into(),
            estado: DocumentStatus::Enviado,
        },
    ]
}
