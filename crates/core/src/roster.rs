//! Roster queries: team composition filtering and the roster panel search.
//!
//! Pure filters over in-memory record slices; the persistence collaborator
//! loads the slices, the form layer calls these on every selection change.

use std::collections::HashSet;

use crate::category::Category;
use crate::participant::Participant;
use crate::team::Team;

/// The participants of a dojo eligible to join a team in `category`.
///
/// A candidate qualifies when it belongs to `dojo_id`, satisfies the
/// category's age and gender constraints, and is not already committed to
/// another team of the same category. Pass the team being edited as
/// `exclude_team_id` so its current members remain selectable.
pub fn available_participants<'a>(
    category: &Category,
    dojo_id: &str,
    participants: &'a [Participant],
    teams: &[Team],
    exclude_team_id: Option<&str>,
) -> Vec<&'a Participant> {
    let committed: HashSet<&str> = teams
        .iter()
        .filter(|t| t.categoria_id == category.id)
        .filter(|t| exclude_team_id != Some(t.id.as_str()))
        .flat_map(|t| t.miembros.iter().map(String::as_str))
        .collect();

    let eligible: Vec<&Participant> = participants
        .iter()
        .filter(|p| p.dojo_id == dojo_id)
        .filter(|p| category.admits(p))
        .filter(|p| !committed.contains(p.id.as_str()))
        .collect();

    tracing::debug!(
        category = %category.id,
        dojo = %dojo_id,
        eligible = eligible.len(),
        committed = committed.len(),
        "computed available participants"
    );
    eligible
}

/// Roster panel filter: case-insensitive name search plus optional dojo.
///
/// Mirrors the `?search=&dojoId=` query the participant list supports, for
/// when the records are already loaded client-side.
pub fn filter_roster<'a>(
    participants: &'a [Participant],
    search: Option<&str>,
    dojo_id: Option<&str>,
) -> Vec<&'a Participant> {
    let needle = search.map(str::to_lowercase).filter(|s| !s.is_empty());
    participants
        .iter()
        .filter(|p| dojo_id.is_none_or(|d| p.dojo_id == d))
        .filter(|p| {
            needle
                .as_deref()
                .is_none_or(|n| p.nombre.to_lowercase().contains(n))
        })
        .collect()
}
