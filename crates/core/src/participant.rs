//! Participant records and their invariants.
//!
//! Field names mirror the JSON the REST collaborator exchanges (Spanish
//! camelCase). A participant's selected modality set must stay consistent
//! with its own age; the form layer enforces that at edit time, but
//! [`Participant::is_consistent`] lets any layer re-check before persisting.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modality::{self, Modalities};
use crate::types::EntityId;

/// Participant gender, as stored on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Masculino,
    Femenino,
}

/// The eleven ranked belt levels, lowest to highest.
///
/// Declaration order gives the ranking, so `Grade::Kyu10 < Grade::Dan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "10 Kyu")]
    Kyu10,
    #[serde(rename = "9 Kyu")]
    Kyu9,
    #[serde(rename = "8 Kyu")]
    Kyu8,
    #[serde(rename = "7 Kyu")]
    Kyu7,
    #[serde(rename = "6 Kyu")]
    Kyu6,
    #[serde(rename = "5 Kyu")]
    Kyu5,
    #[serde(rename = "4 Kyu")]
    Kyu4,
    #[serde(rename = "3 Kyu")]
    Kyu3,
    #[serde(rename = "2 Kyu")]
    Kyu2,
    #[serde(rename = "1 Kyu")]
    Kyu1,
    #[serde(rename = "Dan")]
    Dan,
}

/// A tournament participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[validate(range(min = 1, max = 100))]
    pub edad: u8,
    pub genero: Gender,
    pub grado: Grade,
    pub dojo_id: EntityId,
    pub modalidades: Modalities,
}

impl Participant {
    /// The modality set corrected against this participant's age.
    pub fn corrected_modalities(&self) -> Modalities {
        modality::evaluate(Some(self.edad), self.modalidades)
    }

    /// Whether the stored modality set already satisfies the age rules.
    pub fn is_consistent(&self) -> bool {
        self.modalidades == self.corrected_modalities()
    }
}
