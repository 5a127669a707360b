//! Competition categories: discipline × age range × gender.
//!
//! A category decides which participants may join a team competing in it:
//! age inside the closed `[edadMin, edadMax]` interval, and gender equal to
//! the category's unless the category is `Mixto`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::participant::{Gender, Participant};
use crate::types::EntityId;

/// An inclusive age bracket, as configured by the organizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRange {
    pub edad_min: u8,
    pub edad_max: u8,
}

impl AgeRange {
    /// Whether `age` falls inside the bracket, boundaries included.
    pub fn contains(&self, age: u8) -> bool {
        (self.edad_min..=self.edad_max).contains(&age)
    }
}

/// Gender constraint on a category. `Mixto` admits everyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryGender {
    Masculino,
    Femenino,
    Mixto,
}

impl CategoryGender {
    /// Whether a participant of the given gender is admitted.
    pub fn admits(self, gender: Gender) -> bool {
        match self {
            Self::Mixto => true,
            Self::Masculino => gender == Gender::Masculino,
            Self::Femenino => gender == Gender::Femenino,
        }
    }
}

/// A competition category teams register under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    pub disciplina_id: EntityId,
    pub rango_edad: AgeRange,
    pub genero: CategoryGender,
}

impl Category {
    /// Whether the participant satisfies this category's age and gender
    /// constraints. Dojo and team-commitment checks live in [`crate::roster`].
    pub fn admits(&self, participant: &Participant) -> bool {
        self.rango_edad.contains(participant.edad) && self.genero.admits(participant.genero)
    }
}
