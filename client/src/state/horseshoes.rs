//! Horseshoe records with embedded owner contact details.

#[cfg(test)]
#[path = "horseshoes_test.rs"]
mod horseshoes_test;

use serde::{Deserialize, Serialize};

use super::form::{self, FormError};
use super::registry::{Record, RecordId, SectionMessages};

pub const DEFAULT_HORSESHOE_IMAGE: &str = "/herradura-generica.svg";

/// Wear state of a horseshoe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorseshoeCondition {
    Nueva,
    Usada,
    Reparada,
    Descartada,
}

impl HorseshoeCondition {
    pub const ALL: [Self; 4] = [Self::Nueva, Self::Usada, Self::Reparada, Self::Descartada];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nueva => "Nueva",
            Self::Usada => "Usada",
            Self::Reparada => "Reparada",
            Self::Descartada => "Descartada",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Owner details copied onto each horseshoe; there is no link to the client registry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerContact {
    pub propietario: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Horseshoe {
    pub id: RecordId,
    pub codigo: String,
    pub tipo: String,
    #[serde(rename = "tamaño")]
    pub tamano: String,
    pub material: String,
    pub peso: String,
    pub estado: Option<HorseshoeCondition>,
    pub fecha_fabricacion: String,
    #[serde(flatten)]
    pub owner: OwnerContact,
    pub observaciones: String,
    pub imagen: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HorseshoeDraft {
    pub codigo: String,
    pub tipo: String,
    pub tamano: String,
    pub material: String,
    pub peso: String,
    pub estado: String,
    pub fecha_fabricacion: String,
    pub owner: OwnerContact,
    pub observaciones: String,
    pub imagen: Option<String>,
}

impl Default for HorseshoeDraft {
    /// New forms start with the "Nueva" state selected.
    fn default() -> Self {
        Self {
            codigo: String::new(),
            tipo: String::new(),
            tamano: String::new(),
            material: String::new(),
            peso: String::new(),
            estado: HorseshoeCondition::Nueva.as_str().to_owned(),
            fecha_fabricacion: String::new(),
            owner: OwnerContact::default(),
            observaciones: String::new(),
            imagen: None,
        }
    }
}

impl Record for Horseshoe {
    type Draft = HorseshoeDraft;

    const MESSAGES: SectionMessages = SectionMessages {
        created: "Herradura registrada correctamente",
        updated: "Herradura actualizada correctamente",
        deleted: "Herradura eliminada correctamente",
        confirm_delete: "¿Está seguro de que desea eliminar esta herradura?",
        save_failed: "Error al guardar la herradura. Inténtelo de nuevo.",
    };

    fn id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.codigo.as_str(), self.tipo.as_str(), self.owner.propietario.as_str()]
    }

    fn validate(draft: &HorseshoeDraft) -> Result<(), FormError> {
        form::require(&[draft.codigo.as_str(), draft.tipo.as_str(), draft.owner.propietario.as_str()])
    }

    fn from_draft(id: RecordId, draft: HorseshoeDraft, _now_millis: i64) -> Self {
        let imagen = draft
            .imagen
            .clone()
            .unwrap_or_else(|| DEFAULT_HORSESHOE_IMAGE.to_owned());
        let mut horseshoe = Self {
            id,
            codigo: String::new(),
            tipo: String::new(),
            tamano: String::new(),
            material: String::new(),
            peso: String::new(),
            estado: None,
            fecha_fabricacion: String::new(),
            owner: OwnerContact::default(),
            observaciones: String::new(),
            imagen,
        };
        horseshoe.apply(draft);
        horseshoe
    }

    fn revise(&self, draft: HorseshoeDraft) -> Self {
        let mut horseshoe = self.clone();
        if let Some(imagen) = draft.imagen.clone() {
            horseshoe.imagen = imagen;
        }
        horseshoe.apply(draft);
        horseshoe
    }

    fn to_draft(&self) -> HorseshoeDraft {
        HorseshoeDraft {
            codigo: self.codigo.clone(),
            tipo: self.tipo.clone(),
            tamano: self.tamano.clone(),
            material: self.material.clone(),
            peso: self.peso.clone(),
            estado: self.estado.map(HorseshoeCondition::as_str).unwrap_or_default().to_owned(),
            fecha_fabricacion: self.fecha_fabricacion.clone(),
            owner: self.owner.clone(),
            observaciones: self.observaciones.clone(),
            imagen: Some(self.imagen.clone()),
        }
    }
}

impl Horseshoe {
    fn apply(&mut self, draft: HorseshoeDraft) {
        self.estado = HorseshoeCondition::parse(&draft.estado);
        self.codigo = draft.codigo;
        self.tipo = draft.tipo;
        self.tamano = draft.tamano;
        self.material = draft.material;
        self.peso = draft.peso;
        self.fecha_fabricacion = draft.fecha_fabricacion;
        self.owner = draft.owner;
        self.observaciones = draft.observaciones;
    }
}

/// "1 herradura" / "3 herraduras".
pub fn count_label(count: usize) -> String {
    if count == 1 { format!("{count} herradura") } else { format!("{count} herraduras") }
}

/// Example horseshoes shown on first load.
pub fn seed() -> Vec<Horseshoe> {
    vec![
        Horseshoe {
            id: 1,
            codigo: "HRD-001".into(),
            tipo: "Herradura Estándar".into(),
            tamano: "Talla 3".into(),
            material: "Acero Forjado".into(),
            peso: "250g".into(),
            estado: Some(HorseshoeCondition::Nueva),
            fecha_fabricacion: "2024-01-15".into(),
            owner: OwnerContact {
                propietario: "Carlos Mendoza".into(),
                telefono: "555-0789".into(),
                email: "carlos@email.com".into(),
                direccion: "Calle Principal 123".into(),
            },
            observaciones: "Herradura para caballo de trabajo".into(),
            imagen: "/herradura-acero.svg".into(),
        },
        Horseshoe {
            id: 2,
            codigo: "HRD-002".into(),
            tipo: "Herradura Terapéutica".into(),
            tamano: "Talla 4".into(),
            material: "Aluminio".into(),
            peso: "180g".into(),
            estado: Some(HorseshoeCondition::Usada),
            fecha_fabricacion: "2023-12-10".into(),
            owner: OwnerContact {
                propietario: "Ana Rodríguez".into(),
                telefono: "555-0321".into(),
                email: "ana@email.com".into(),
                direccion: "Avenida Central 456".into(),
            },
            observaciones: "Herradura especial para rehabilitación".into(),
            imagen: "/herradura-aluminio.svg".into(),
        },
    ]
}
