//! Tournament configuration: team size bounds.
//!
//! The organizers store settings as named records
//! (`{ "nombre": "minMiembrosEquipo", "valor": 3 }`) behind the
//! `configuracion` collection. Values arrive as JSON and may be numbers or
//! numeric strings depending on which admin screen last saved them, so
//! parsing is forgiving; anything unusable falls back to the default.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default for both team size settings when absent.
pub const DEFAULT_TEAM_SIZE: u32 = 3;

/// Setting name for the minimum team size.
pub const SETTING_MIN_MIEMBROS: &str = "minMiembrosEquipo";

/// Setting name for the maximum team size.
pub const SETTING_MAX_MIEMBROS: &str = "maxMiembrosEquipo";

/// A named setting record as the collaborator returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub nombre: String,
    pub valor: serde_json::Value,
}

/// The two integer settings bounding team size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentConfig {
    pub min_miembros_equipo: u32,
    pub max_miembros_equipo: u32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            min_miembros_equipo: DEFAULT_TEAM_SIZE,
            max_miembros_equipo: DEFAULT_TEAM_SIZE,
        }
    }
}

impl TournamentConfig {
    /// Build the config from the collaborator's setting records.
    ///
    /// Missing or unparseable settings fall back to [`DEFAULT_TEAM_SIZE`].
    pub fn from_settings(settings: &[Setting]) -> Self {
        Self {
            min_miembros_equipo: lookup(settings, SETTING_MIN_MIEMBROS),
            max_miembros_equipo: lookup(settings, SETTING_MAX_MIEMBROS),
        }
    }

    /// Reject inverted or zero bounds before they reach the team rules.
    ///
    /// # Errors
    /// [`CoreError::Validation`] naming the offending setting.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.min_miembros_equipo == 0 {
            return Err(CoreError::Validation(format!(
                "{SETTING_MIN_MIEMBROS} must be at least 1"
            )));
        }
        if self.max_miembros_equipo < self.min_miembros_equipo {
            return Err(CoreError::Validation(format!(
                "{SETTING_MAX_MIEMBROS} ({}) must not be below {SETTING_MIN_MIEMBROS} ({})",
                self.max_miembros_equipo, self.min_miembros_equipo
            )));
        }
        Ok(())
    }
}

fn lookup(settings: &[Setting], name: &str) -> u32 {
    settings
        .iter()
        .find(|s| s.nombre == name)
        .and_then(|s| coerce_u32(&s.valor))
        .unwrap_or(DEFAULT_TEAM_SIZE)
}

/// Accept `3`, `3.0`, and `"3"`; anything else is unusable.
fn coerce_u32(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
