//! Team records, membership bounds, and the activation state machine.
//!
//! A team starts as a draft (`borrador`) and becomes active (`activo`) only
//! once it reaches the configured minimum size. Reverting to draft is always
//! permitted and re-enables edits. Deletion is an orthogonal destructive
//! operation handled by the persistence collaborator from either state.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::EntityId;

/// Team lifecycle states. Stored on the wire in Spanish lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamState {
    #[default]
    #[serde(rename = "borrador")]
    Borrador,
    #[serde(rename = "activo")]
    Activo,
}

/// The set of states reachable from `from`.
///
/// Kept as an explicit table so the two-state machine reads the same as a
/// larger one would; no other transitions exist.
pub fn valid_transitions(from: TeamState) -> &'static [TeamState] {
    match from {
        TeamState::Borrador => &[TeamState::Activo],
        TeamState::Activo => &[TeamState::Borrador],
    }
}

/// Whether a transition from `from` to `to` is defined.
pub fn can_transition(from: TeamState, to: TeamState) -> bool {
    valid_transitions(from).contains(&to)
}

/// A registered team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: EntityId,
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    pub categoria_id: EntityId,
    pub dojo_id: EntityId,
    /// Member participant ids. Order carries no meaning.
    pub miembros: Vec<EntityId>,
    pub estado: TeamState,
    /// Sequence number assigned by the organizers on activation.
    pub numero_equipo: Option<u32>,
}

impl Team {
    pub fn member_count(&self) -> usize {
        self.miembros.len()
    }

    pub fn is_member(&self, participant_id: &str) -> bool {
        self.miembros.iter().any(|id| id == participant_id)
    }

    /// Whether another member fits under `max_size` (`maxMiembrosEquipo`).
    pub fn can_add_member(&self, max_size: u32) -> bool {
        self.miembros.len() < max_size as usize
    }

    /// Add a participant, rejecting overflow instead of truncating.
    ///
    /// # Errors
    /// [`CoreError::CapacityExceeded`] when the team already holds
    /// `max_size` members; [`CoreError::Validation`] when the participant is
    /// already on the roster.
    pub fn add_member(&mut self, participant_id: EntityId, max_size: u32) -> Result<(), CoreError> {
        if self.is_member(&participant_id) {
            return Err(CoreError::Validation(format!(
                "participant {participant_id} is already a member of team {}",
                self.id
            )));
        }
        if !self.can_add_member(max_size) {
            return Err(CoreError::CapacityExceeded {
                current: self.miembros.len(),
                max: max_size,
            });
        }
        self.miembros.push(participant_id);
        Ok(())
    }

    /// Remove a participant from the roster. Returns whether it was present.
    pub fn remove_member(&mut self, participant_id: &str) -> bool {
        let before = self.miembros.len();
        self.miembros.retain(|id| id != participant_id);
        self.miembros.len() != before
    }

    /// Transition `borrador → activo`.
    ///
    /// # Errors
    /// [`CoreError::MinimumNotMet`] when the roster is below `min_size`
    /// (`minMiembrosEquipo`).
    pub fn activate(&mut self, min_size: u32) -> Result<(), CoreError> {
        if self.miembros.len() < min_size as usize {
            tracing::debug!(team = %self.id, current = self.miembros.len(), min = min_size, "activation rejected");
            return Err(CoreError::MinimumNotMet {
                current: self.miembros.len(),
                min: min_size,
            });
        }
        self.estado = TeamState::Activo;
        Ok(())
    }

    /// Transition `activo → borrador`. Always permitted; re-enables edits.
    pub fn revert_to_draft(&mut self) {
        self.estado = TeamState::Borrador;
    }
}
