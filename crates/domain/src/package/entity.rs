use serde::{Deserialize, Serialize};

use super::{PackageId, SearchTerm, lenient};

/// A travel offer as stored in the catalog.
///
/// Field names follow the public JSON contract consumed by the browser
/// client (`destino`, `duracion`, `precio`, `descripcion`). A field the
/// creator left out is stored and returned as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    pub destino: Option<String>,
    pub duracion: Option<String>,
    pub precio: Option<f64>,
    pub descripcion: Option<String>,
}

impl Package {
    pub fn new(id: PackageId, fields: NewPackage) -> Self {
        Self {
            id,
            destino: fields.destino,
            duracion: fields.duracion,
            precio: fields.precio,
            descripcion: fields.descripcion,
        }
    }

    /// A missing description never matches
    pub fn description_contains(&self, term: &SearchTerm) -> bool {
        self.descripcion.as_deref().is_some_and(|d| term.matches(d))
    }

    pub fn destination_contains(&self, term: &SearchTerm) -> bool {
        self.destino.as_deref().is_some_and(|d| term.matches(d))
    }
}

/// Field set accepted by the create operation. The id is always assigned
/// by the store; an `id` key in the payload is ignored.
///
/// Every field is optional. Text fields also accept numbers and `precio`
/// also accepts numeric strings; any other value is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPackage {
    #[serde(default, deserialize_with = "lenient::text")]
    pub destino: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub duracion: Option<String>,
    #[serde(default, deserialize_with = "lenient::price")]
    pub precio: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub descripcion: Option<String>,
}

impl NewPackage {
    /// A fully populated field set
    pub fn new(
        destino: impl Into<String>,
        duracion: impl Into<String>,
        precio: f64,
        descripcion: impl Into<String>,
    ) -> Self {
        Self {
            destino: Some(destino.into()),
            duracion: Some(duracion.into()),
            precio: Some(precio),
            descripcion: Some(descripcion.into()),
        }
    }
}
