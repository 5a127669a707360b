//! Engine error taxonomy.
//!
//! Malformed-but-expected input (missing age, empty lists) never raises an
//! error here — the rule functions degrade to the most restrictive permitted
//! state instead. Only the two user-facing rule violations and record-shape
//! validation surface as `Err`.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Attempt to add a member beyond the configured team maximum.
    #[error("Team is full: {current} members, maximum is {max}")]
    CapacityExceeded { current: usize, max: u32 },

    /// Attempt to activate a team below the configured minimum.
    #[error("Team has {current} members, needs at least {min} to activate")]
    MinimumNotMet { current: usize, min: u32 },
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
