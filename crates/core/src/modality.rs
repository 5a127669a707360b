//! Modality eligibility rules for individual registration.
//!
//! The five competition events carry age gates: kumite (both variants)
//! requires age 11+, kihon ippon is reserved for the 6–10 bracket, and kata
//! (both variants) is open to everyone. The form layer calls
//! [`permissions`] to disable checkboxes and [`evaluate`] every time the
//! age field changes, before the modality set is persisted. [`evaluate`]
//! never errors and is idempotent, so it is safe to run on every keystroke.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Age thresholds
// ---------------------------------------------------------------------------

/// Minimum age for both kumite modalities (inclusive).
///
/// Earlier registration forms used 10; the current business rule is 11.
pub const KUMITE_MIN_AGE: u8 = 11;

/// Lower bound of the kihon ippon bracket (inclusive).
pub const KIHON_MIN_AGE: u8 = 6;

/// Upper bound of the kihon ippon bracket (inclusive).
pub const KIHON_MAX_AGE: u8 = 10;

// ---------------------------------------------------------------------------
// Modality set
// ---------------------------------------------------------------------------

/// The five competition events a participant can register for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Modality {
    KataIndividual,
    KataEquipos,
    KumiteIndividual,
    KumiteEquipos,
    KihonIppon,
}

/// All modalities, in the order the registration form and exports list them.
pub const ALL_MODALITIES: [Modality; 5] = [
    Modality::KataIndividual,
    Modality::KataEquipos,
    Modality::KumiteIndividual,
    Modality::KumiteEquipos,
    Modality::KihonIppon,
];

impl Modality {
    /// Display label used by the roster table and exports.
    pub fn label(self) -> &'static str {
        match self {
            Self::KataIndividual => "Kata Individual",
            Self::KataEquipos => "Kata Equipos",
            Self::KumiteIndividual => "Kumite Individual",
            Self::KumiteEquipos => "Kumite Equipos",
            Self::KihonIppon => "Kihon Ippon",
        }
    }
}

/// A participant's selected modality flags, matching the `modalidades`
/// object on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modalities {
    pub kata_individual: bool,
    pub kata_equipos: bool,
    pub kumite_individual: bool,
    pub kumite_equipos: bool,
    pub kihon_ippon: bool,
}

impl Modalities {
    /// Read a single flag.
    pub fn get(&self, modality: Modality) -> bool {
        match modality {
            Modality::KataIndividual => self.kata_individual,
            Modality::KataEquipos => self.kata_equipos,
            Modality::KumiteIndividual => self.kumite_individual,
            Modality::KumiteEquipos => self.kumite_equipos,
            Modality::KihonIppon => self.kihon_ippon,
        }
    }

    /// Set a single flag.
    pub fn set(&mut self, modality: Modality, enabled: bool) {
        match modality {
            Modality::KataIndividual => self.kata_individual = enabled,
            Modality::KataEquipos => self.kata_equipos = enabled,
            Modality::KumiteIndividual => self.kumite_individual = enabled,
            Modality::KumiteEquipos => self.kumite_equipos = enabled,
            Modality::KihonIppon => self.kihon_ippon = enabled,
        }
    }

    /// Whether at least one flag is set.
    ///
    /// The registration form asks for at least one modality but this has
    /// never been hard-enforced on submission; the form layer uses this for
    /// the hint text only.
    pub fn any(&self) -> bool {
        ALL_MODALITIES.iter().any(|&m| self.get(m))
    }

    /// Number of flags set. A participant with three modalities counts as
    /// three inscriptions in the statistics roll-up.
    pub fn count(&self) -> usize {
        ALL_MODALITIES.iter().filter(|&&m| self.get(m)).count()
    }

    /// The enabled modalities, in form order.
    pub fn enabled(&self) -> impl Iterator<Item = Modality> + '_ {
        ALL_MODALITIES.into_iter().filter(|&m| self.get(m))
    }
}

// ---------------------------------------------------------------------------
// Eligibility rules
// ---------------------------------------------------------------------------

/// Whether a participant of the given age may select `modality`.
///
/// `None` (age not yet entered on the form) fails every age-gated
/// threshold; the kata modalities are permitted regardless of age.
pub fn is_permitted(age: Option<u8>, modality: Modality) -> bool {
    match modality {
        Modality::KataIndividual | Modality::KataEquipos => true,
        Modality::KumiteIndividual | Modality::KumiteEquipos => {
            age.is_some_and(|a| a >= KUMITE_MIN_AGE)
        }
        Modality::KihonIppon => age.is_some_and(|a| (KIHON_MIN_AGE..=KIHON_MAX_AGE).contains(&a)),
    }
}

/// Per-modality permission flags for UI gating (checkbox enable/disable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalityPermissions {
    pub kata_individual: bool,
    pub kata_equipos: bool,
    pub kumite_individual: bool,
    pub kumite_equipos: bool,
    pub kihon_ippon: bool,
}

impl ModalityPermissions {
    /// Read the permission for a single modality.
    pub fn allows(&self, modality: Modality) -> bool {
        match modality {
            Modality::KataIndividual => self.kata_individual,
            Modality::KataEquipos => self.kata_equipos,
            Modality::KumiteIndividual => self.kumite_individual,
            Modality::KumiteEquipos => self.kumite_equipos,
            Modality::KihonIppon => self.kihon_ippon,
        }
    }
}

/// Compute all five permission predicates for the given age.
pub fn permissions(age: Option<u8>) -> ModalityPermissions {
    ModalityPermissions {
        kata_individual: is_permitted(age, Modality::KataIndividual),
        kata_equipos: is_permitted(age, Modality::KataEquipos),
        kumite_individual: is_permitted(age, Modality::KumiteIndividual),
        kumite_equipos: is_permitted(age, Modality::KumiteEquipos),
        kihon_ippon: is_permitted(age, Modality::KihonIppon),
    }
}

/// Correct a modality set against the age rules.
///
/// Flags whose age gate is not met are forced off; ungated flags pass
/// through untouched. Total and idempotent: applying it twice yields the
/// same result as applying it once, and no input errors.
pub fn evaluate(age: Option<u8>, selected: Modalities) -> Modalities {
    let mut corrected = selected;
    for modality in ALL_MODALITIES {
        if corrected.get(modality) && !is_permitted(age, modality) {
            corrected.set(modality, false);
        }
    }
    if corrected != selected {
        tracing::debug!(?age, "forced off age-gated modalities");
    }
    corrected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_bits(bits: u8) -> Modalities {
        let mut m = Modalities::default();
        for (i, modality) in ALL_MODALITIES.into_iter().enumerate() {
            m.set(modality, bits & (1 << i) != 0);
        }
        m
    }

    fn all_selected() -> Modalities {
        from_bits(0b11111)
    }

    // -- kumite threshold -----------------------------------------------------

    #[test]
    fn kumite_forced_off_below_eleven() {
        for age in 1..KUMITE_MIN_AGE {
            let corrected = evaluate(Some(age), all_selected());
            assert!(!corrected.kumite_individual, "age {age}");
            assert!(!corrected.kumite_equipos, "age {age}");
        }
    }

    #[test]
    fn kumite_preserved_from_eleven() {
        for age in KUMITE_MIN_AGE..=100 {
            let corrected = evaluate(Some(age), all_selected());
            assert!(corrected.kumite_individual, "age {age}");
            assert!(corrected.kumite_equipos, "age {age}");
        }
    }

    #[test]
    fn kumite_enabled_exactly_at_eleven() {
        assert!(is_permitted(Some(11), Modality::KumiteIndividual));
        assert!(is_permitted(Some(11), Modality::KumiteEquipos));
        assert!(!is_permitted(Some(10), Modality::KumiteIndividual));
        assert!(!is_permitted(Some(10), Modality::KumiteEquipos));
    }

    // -- kihon ippon bracket --------------------------------------------------

    #[test]
    fn kihon_preserved_inside_bracket() {
        for age in KIHON_MIN_AGE..=KIHON_MAX_AGE {
            assert!(evaluate(Some(age), all_selected()).kihon_ippon, "age {age}");
        }
    }

    #[test]
    fn kihon_forced_off_outside_bracket() {
        assert!(!evaluate(Some(5), all_selected()).kihon_ippon);
        assert!(!evaluate(Some(11), all_selected()).kihon_ippon);
        assert!(!evaluate(Some(40), all_selected()).kihon_ippon);
    }

    #[test]
    fn kihon_boundaries_inclusive() {
        assert!(evaluate(Some(6), all_selected()).kihon_ippon);
        assert!(evaluate(Some(10), all_selected()).kihon_ippon);
    }

    // -- kata always permitted ------------------------------------------------

    #[test]
    fn kata_untouched_at_any_age() {
        for age in [None, Some(1), Some(5), Some(10), Some(11), Some(100)] {
            let corrected = evaluate(age, all_selected());
            assert!(corrected.kata_individual, "age {age:?}");
            assert!(corrected.kata_equipos, "age {age:?}");
        }
    }

    // -- missing age ----------------------------------------------------------

    #[test]
    fn missing_age_disables_all_gated_flags() {
        let corrected = evaluate(None, all_selected());
        assert!(corrected.kata_individual);
        assert!(corrected.kata_equipos);
        assert!(!corrected.kumite_individual);
        assert!(!corrected.kumite_equipos);
        assert!(!corrected.kihon_ippon);
    }

    #[test]
    fn evaluate_never_enables_flags() {
        // Correction only revokes; a cleared flag stays cleared.
        let corrected = evaluate(Some(12), Modalities::default());
        assert_eq!(corrected, Modalities::default());
    }

    // -- idempotence ----------------------------------------------------------

    #[test]
    fn evaluate_is_idempotent_for_all_inputs() {
        let ages = std::iter::once(None).chain((0..=100).map(Some));
        for age in ages {
            for bits in 0..32u8 {
                let once = evaluate(age, from_bits(bits));
                let twice = evaluate(age, once);
                assert_eq!(once, twice, "age {age:?}, bits {bits:#07b}");
            }
        }
    }

    // -- permissions ----------------------------------------------------------

    #[test]
    fn permissions_match_per_modality_predicate() {
        for age in [None, Some(5), Some(6), Some(10), Some(11), Some(30)] {
            let perms = permissions(age);
            for modality in ALL_MODALITIES {
                assert_eq!(perms.allows(modality), is_permitted(age, modality), "{modality:?} at {age:?}");
            }
        }
    }

    // -- set helpers ----------------------------------------------------------

    #[test]
    fn count_and_any() {
        let mut m = Modalities::default();
        assert!(!m.any());
        assert_eq!(m.count(), 0);

        m.kata_individual = true;
        m.kumite_individual = true;
        assert!(m.any());
        assert_eq!(m.count(), 2);
        assert_eq!(
            m.enabled().collect::<Vec<_>>(),
            vec![Modality::KataIndividual, Modality::KumiteIndividual]
        );
    }

    #[test]
    fn wire_format_uses_camel_case_keys() {
        let json = serde_json::to_value(all_selected()).unwrap();
        assert_eq!(json["kataIndividual"], true);
        assert_eq!(json["kumiteEquipos"], true);
        assert_eq!(json["kihonIppon"], true);
    }
}
