//! Animal records with an optional picture.

#[cfg(test)]
#[path = "animals_test.rs"]
mod animals_test;

use serde::{Deserialize, Serialize};

use super::form::{self, FormError};
use super::registry::{Record, RecordId, SectionMessages};

/// Picture used when a new animal is saved without one.
pub const DEFAULT_ANIMAL_IMAGE: &str = "/animal-generico.svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimalSex {
    Macho,
    Hembra,
}

impl AnimalSex {
    pub const ALL: [Self; 2] = [Self::Macho, Self::Hembra];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Macho => "Macho",
            Self::Hembra => "Hembra",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sex| sex.as_str() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: RecordId,
    pub nombre: String,
    pub especie: String,
    pub raza: String,
    pub edad: String,
    pub peso: String,
    pub color: String,
    pub sexo: Option<AnimalSex>,
    pub propietario: String,
    pub telefono: String,
    pub observaciones: String,
    /// Data URL or static asset path.
    pub imagen: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimalDraft {
    pub nombre: String,
    pub especie: String,
    pub raza: String,
    pub edad: String,
    pub peso: String,
    pub color: String,
    pub sexo: String,
    pub propietario: String,
    pub telefono: String,
    pub observaciones: String,
    /// Image picked in this form session, if any.
    pub imagen: Option<String>,
}

impl Record for Animal {
    type Draft = AnimalDraft;

    const MESSAGES: SectionMessages = SectionMessages {
        created: "Animal registrado correctamente",
        updated: "Animal actualizado correctamente",
        deleted: "Animal eliminado correctamente",
        confirm_delete: "¿Está seguro de que desea eliminar este animal?",
        save_failed: "Error al guardar el animal. Inténtelo de nuevo.",
    };

    fn id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.nombre.as_str(), self.especie.as_str(), self.propietario.as_str()]
    }

    fn validate(draft: &AnimalDraft) -> Result<(), FormError> {
        form::require(&[draft.nombre.as_str(), draft.especie.as_str(), draft.propietario.as_str()])
    }

    fn from_draft(id: RecordId, draft: AnimalDraft, _now_millis: i64) -> Self {
        let imagen = draft.imagen.clone().unwrap_or_else(|| DEFAULT_ANIMAL_IMAGE.to_owned());
        let mut animal = Self {
            id,
            nombre: String::new(),
            especie: String::new(),
            raza: String::new(),
            edad: String::new(),
            peso: String::new(),
            color: String::new(),
            sexo: None,
            propietario: String::new(),
            telefono: String::new(),
            observaciones: String::new(),
            imagen,
        };
        animal.apply(draft);
        animal
    }

    fn revise(&self, draft: AnimalDraft) -> Self {
        let mut animal = self.clone();
        if let Some(imagen) = draft.imagen.clone() {
            animal.imagen = imagen;
        }
        animal.apply(draft);
        animal
    }

    fn to_draft(&self) -> AnimalDraft {
        AnimalDraft {
            nombre: self.nombre.clone(),
            especie: self.especie.clone(),
            raza: self.raza.clone(),
            edad: self.edad.clone(),
            peso: self.peso.clone(),
            color: self.color.clone(),
            sexo: self.sexo.map(AnimalSex::as_str).unwrap_or_default().to_owned(),
            propietario: self.propietario.clone(),
            telefono: self.telefono.clone(),
            observaciones: self.observaciones.clone(),
            imagen: Some(self.imagen.clone()),
        }
    }
}

impl Animal {
    fn apply(&mut self, draft: AnimalDraft) {
        self.sexo = AnimalSex::parse(&draft.sexo);
        self.nombre = draft.nombre;
        self.especie = draft.especie;
        self.raza = draft.raza;
        self.edad = draft.edad;
        self.peso = draft.peso;
        self.color = draft.color;
        self.propietario = draft.propietario;
        self.telefono = draft.telefono;
        self.observaciones = draft.observaciones;
    }
}

/// "1 animal" / "3 animales".
pub fn count_label(count: usize) -> String {
    if count == 1 { format!("{count} animal") } else { format!("{count} animales") }
}

/// Example animals shown on first load.
pub fn seed() -> Vec<Animal> {
    vec![
        Animal {
            id: 1,
            nombre: "Thunder".into(),
            especie: "Equino".into(),
            raza: "Pura Sangre".into(),
            edad: "5 años".into(),
            peso: "450 kg".into(),
            color: "Castaño".into(),
            sexo: Some(AnimalSex::Macho),
            propietario: "Juan Pérez".into(),
            telefono: "555-0123".into(),
            observaciones: "Animal de competición".into(),
            imagen: "/caballo-castano.svg".into(),
        },
        Animal {
            id: 2,
            nombre: "Bella".into(),
            especie: "Bovino".into(),
            raza: "Holstein".into(),
            edad: "3 años".into(),
            peso: "600 kg".into(),
            color: "Blanco y Negro".into(),
            sexo: Some(AnimalSex::Hembra),
            propietario: "María García".into(),
            telefono: "555-0456".into(),
            observaciones: "Excelente productora de leche".into(),
            imagen: "/vaca-holstein.svg".into(),
        },
    ]
}
