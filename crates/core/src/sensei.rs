//! Sensei records: instructor users scoped to one dojo.
//!
//! This is the read shape; credentials never travel back from the API, so
//! there is no password field here.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// An instructor account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Sensei {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[validate(length(min = 1, max = 50))]
    pub usuario: String,
    pub dojo_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_parses_without_password() {
        let json = r#"{
            "_id": "s1",
            "nombre": "Marta Ibáñez",
            "usuario": "mibanez",
            "dojoId": "d1"
        }"#;
        let sensei: Sensei = serde_json::from_str(json).unwrap();
        assert_eq!(sensei.dojo_id, "d1");
        assert!(sensei.validate().is_ok());
    }

    #[test]
    fn empty_usuario_rejected() {
        let sensei = Sensei {
            id: "s1".into(),
            nombre: "Marta".into(),
            usuario: String::new(),
            dojo_id: "d1".into(),
        };
        assert!(sensei.validate().is_err());
    }
}
