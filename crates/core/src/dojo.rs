//! Dojo records. Inert pass-through data; only shape validation applies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// A training school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Dojo {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[validate(length(min = 1, max = 200))]
    pub ubicacion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_field_lengths() {
        let mut dojo = Dojo {
            id: "d1".into(),
            nombre: "Dojo Shotokan Centro".into(),
            ubicacion: "Av. Libertad 742".into(),
        };
        assert!(dojo.validate().is_ok());

        dojo.nombre = String::new();
        assert!(dojo.validate().is_err());
    }
}
