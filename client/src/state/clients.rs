//! Client (contact) records.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

use serde::{Deserialize, Serialize};

use super::form::{self, FormError};
use super::registry::{Record, RecordId, SectionMessages};
use crate::util::clock;

/// Kind of customer. Drives the badge colour and the company field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientKind {
    Particular,
    Empresa,
    Autonomo,
}

impl ClientKind {
    pub const ALL: [Self; 3] = [Self::Particular, Self::Empresa, Self::Autonomo];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Particular => "particular",
            Self::Empresa => "empresa",
            Self::Autonomo => "autonomo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Particular => "Particular",
            Self::Empresa => "Empresa",
            Self::Autonomo => "Autónomo",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: RecordId,
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
    pub telefono: String,
    pub direccion: String,
    pub ciudad: String,
    pub codigo_postal: String,
    pub tipo_cliente: Option<ClientKind>,
    pub empresa: Option<String>,
    pub notas: Option<String>,
    pub fecha_registro: String,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellidos)
    }

    pub fn is_company(&self) -> bool {
        self.tipo_cliente == Some(ClientKind::Empresa)
    }

    pub fn kind_str(&self) -> &'static str {
        self.tipo_cliente.map_or("", ClientKind::as_str)
    }
}

/// Form fields as typed; `tipo_cliente` holds the raw select value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
    pub telefono: String,
    pub direccion: String,
    pub ciudad: String,
    pub codigo_postal: String,
    pub tipo_cliente: String,
    pub empresa: String,
    pub notas: String,
}

impl ClientDraft {
    /// The company name input is only offered for business clients.
    pub fn shows_company(&self) -> bool {
        ClientKind::parse(&self.tipo_cliente) == Some(ClientKind::Empresa)
    }
}

impl Record for Client {
    type Draft = ClientDraft;

    const MESSAGES: SectionMessages = SectionMessages {
        created: "Cliente registrado correctamente",
        updated: "Cliente actualizado correctamente",
        deleted: "Cliente eliminado correctamente",
        confirm_delete: "¿Está seguro de que desea eliminar este cliente?",
        save_failed: "Error al guardar el cliente. Inténtelo de nuevo.",
    };

    const SUBMIT_DELAY_MS: u32 = 1000;

    fn id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.nombre.as_str(), self.apellidos.as_str(), self.email.as_str()]
    }

    fn validate(draft: &ClientDraft) -> Result<(), FormError> {
        form::require(&[
            draft.nombre.as_str(),
            draft.apellidos.as_str(),
            draft.email.as_str(),
            draft.telefono.as_str(),
        ])?;
        form::check_email(&draft.email)
    }

    fn from_draft(id: RecordId, draft: ClientDraft, now_millis: i64) -> Self {
        let mut client = Self {
            id,
            nombre: String::new(),
            apellidos: String::new(),
            email: String::new(),
            telefono: String::new(),
            direccion: String::new(),
            ciudad: String::new(),
            codigo_postal: String::new(),
            tipo_cliente: None,
            empresa: None,
            notas: None,
            fecha_registro: clock::iso_date(now_millis),
        };
        client.apply(draft);
        client
    }

    fn revise(&self, draft: ClientDraft) -> Self {
        let mut client = self.clone();
        client.apply(draft);
        client
    }

    fn to_draft(&self) -> ClientDraft {
        ClientDraft {
            nombre: self.nombre.clone(),
            apellidos: self.apellidos.clone(),
            email: self.email.clone(),
            telefono: self.telefono.clone(),
            direccion: self.direccion.clone(),
            ciudad: self.ciudad.clone(),
            codigo_postal: self.codigo_postal.clone(),
            tipo_cliente: self.kind_str().to_owned(),
            empresa: self.empresa.clone().unwrap_or_default(),
            notas: self.notas.clone().unwrap_or_default(),
        }
    }
}

impl Client {
    fn apply(&mut self, draft: ClientDraft) {
        self.tipo_cliente = ClientKind::parse(&draft.tipo_cliente);
        self.empresa = form::optional(&draft.empresa);
        self.notas = form::optional(&draft.notas);
        self.nombre = draft.nombre;
        self.apellidos = draft.apellidos;
        self.email = draft.email;
        self.telefono = draft.telefono;
        self.direccion = draft.direccion;
        self.ciudad = draft.ciudad;
        self.codigo_postal = draft.codigo_postal;
    }
}

/// Example clients shown on first load.
pub fn seed() -> Vec<Client> {
    vec![
        Client {
            id: 1,
            nombre: "Juan".into(),
            apellidos: "Pérez García".into(),
            email: "juan.perez@email.com".into(),
            telefono: "+34 600 123 456".into(),
            direccion: "Calle Mayor 123".into(),
            ciudad: "Madrid".into(),
            codigo_postal: "28001".into(),
            tipo_cliente: Some(ClientKind::Particular),
            empresa: None,
            notas: Some("Cliente preferente".into()),
            fecha_registro: "2024-01-15".into(),
        },
        Client {
            id: 2,
            nombre: "María".into(),
            apellidos: "González López".into(),
            email: "maria.gonzalez@empresa.com".into(),
            telefono: "+34 600 789 012".into(),
            direccion: "Avenida Principal 456".into(),
            ciudad: "Barcelona".into(),
            codigo_postal: "08001".into(),
            tipo_cliente: Some(ClientKind::Empresa),
            empresa: Some("Empresa ABC S.L.".into()),
            notas: None,
            fecha_registro: "2024-01-20".into(),
        },
    ]
}
