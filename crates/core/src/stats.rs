//! Derived statistics over the participant list.
//!
//! A pure reduction with no hidden state: per-modality counts and name
//! lists, plus total participants, total inscriptions (a participant with
//! three modalities contributes three), and the average inscriptions per
//! participant. Tolerates an empty input list.

use serde::Serialize;

use crate::modality::{Modality, ALL_MODALITIES};
use crate::participant::Participant;

/// Count and participant names for one modality, input order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModalityBreakdown {
    pub count: usize,
    pub nombres: Vec<String>,
}

/// The roll-up the statistics tab renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentStats {
    pub kata_individual: ModalityBreakdown,
    pub kata_equipos: ModalityBreakdown,
    pub kumite_individual: ModalityBreakdown,
    pub kumite_equipos: ModalityBreakdown,
    pub kihon_ippon: ModalityBreakdown,
    /// Unique participants in the input.
    pub total_participantes: usize,
    /// Sum of the five per-modality counts.
    pub total_inscripciones: usize,
    /// `total_inscripciones / total_participantes`, `0.0` when empty.
    pub promedio_inscripciones: f64,
}

impl TournamentStats {
    /// The breakdown for one modality.
    pub fn breakdown(&self, modality: Modality) -> &ModalityBreakdown {
        match modality {
            Modality::KataIndividual => &self.kata_individual,
            Modality::KataEquipos => &self.kata_equipos,
            Modality::KumiteIndividual => &self.kumite_individual,
            Modality::KumiteEquipos => &self.kumite_equipos,
            Modality::KihonIppon => &self.kihon_ippon,
        }
    }

    fn breakdown_mut(&mut self, modality: Modality) -> &mut ModalityBreakdown {
        match modality {
            Modality::KataIndividual => &mut self.kata_individual,
            Modality::KataEquipos => &mut self.kata_equipos,
            Modality::KumiteIndividual => &mut self.kumite_individual,
            Modality::KumiteEquipos => &mut self.kumite_equipos,
            Modality::KihonIppon => &mut self.kihon_ippon,
        }
    }
}

/// Compute the full statistics roll-up from the participant list.
pub fn compute(participants: &[Participant]) -> TournamentStats {
    let mut stats = TournamentStats {
        total_participantes: participants.len(),
        ..TournamentStats::default()
    };

    for participant in participants {
        for modality in ALL_MODALITIES {
            if participant.modalidades.get(modality) {
                let breakdown = stats.breakdown_mut(modality);
                breakdown.count += 1;
                breakdown.nombres.push(participant.nombre.clone());
            }
        }
    }

    stats.total_inscripciones = ALL_MODALITIES
        .iter()
        .map(|&m| stats.breakdown(m).count)
        .sum();
    stats.promedio_inscripciones = if participants.is_empty() {
        0.0
    } else {
        stats.total_inscripciones as f64 / participants.len() as f64
    };

    stats
}
