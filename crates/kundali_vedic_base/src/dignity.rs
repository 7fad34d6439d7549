//! Graha dignity: exaltation data, own signs, natural friendship and the
//! six-tier dignity classification.
//!
//! Exaltation degrees follow BPHS: Sun 10 Ari, Moon 3 Tau, Mars 28 Cap,
//! Mercury 15 Vir, Jupiter 5 Can, Venus 27 Pis, Saturn 20 Lib.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;

// ---------------------------------------------------------------------------
// Exaltation & Debilitation
// ---------------------------------------------------------------------------

/// Exaltation degree for sapta grahas. Returns None for Rahu/Ketu.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),   // 10 Aries
        Graha::Chandra => Some(33.0), // 3 Taurus
        Graha::Mangal => Some(298.0), // 28 Capricorn
        Graha::Buddh => Some(165.0),  // 15 Virgo
        Graha::Guru => Some(95.0),    // 5 Cancer
        Graha::Shukra => Some(357.0), // 27 Pisces
        Graha::Shani => Some(200.0),  // 20 Libra
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation degree = exaltation + 180 mod 360. Returns None for Rahu/Ketu.
pub const fn debilitation_degree(graha: Graha) -> Option<f64> {
    match exaltation_degree(graha) {
        Some(e) => {
            let d = e + 180.0;
            if d >= 360.0 { Some(d - 360.0) } else { Some(d) }
        }
        None => None,
    }
}

/// Sign of exaltation. Defined for the nodes too (Rahu Mithuna, Ketu Dhanu).
pub const fn exaltation_rashi(graha: Graha) -> Rashi {
    match graha {
        Graha::Surya => Rashi::Mesha,
        Graha::Chandra => Rashi::Vrishabha,
        Graha::Mangal => Rashi::Makara,
        Graha::Buddh => Rashi::Kanya,
        Graha::Guru => Rashi::Karka,
        Graha::Shukra => Rashi::Meena,
        Graha::Shani => Rashi::Tula,
        Graha::Rahu => Rashi::Mithuna,
        Graha::Ketu => Rashi::Dhanu,
    }
}

/// Sign of debilitation: the 7th from the exaltation sign.
pub const fn debilitation_rashi(graha: Graha) -> Rashi {
    Rashi::from_index(exaltation_rashi(graha).index() + 6)
}

/// Own-sign rashis for sapta grahas. Returns empty slice for Rahu/Ketu.
pub fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

// ---------------------------------------------------------------------------
// Natural Friendship
// ---------------------------------------------------------------------------

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaturalRelation {
    Friend,
    Enemy,
    Neutral,
}

/// Natural friendship of `graha` towards `other` (BPHS table).
/// Returns Neutral for any pairing involving Rahu/Ketu.
pub const fn natural_relation(graha: Graha, other: Graha) -> NaturalRelation {
    use Graha::*;
    use NaturalRelation::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        // Moon: friends=Sun,Mercury; no enemies
        (Chandra, Surya | Buddh) => Friend,

        // Mars: friends=Sun,Moon,Jupiter; enemies=Mercury
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        // Mercury: friends=Sun,Venus; enemies=Moon
        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        // Venus: friends=Mercury,Saturn; enemies=Sun,Moon
        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        // Saturn: friends=Mercury,Venus; enemies=Sun,Moon,Mars
        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

// ---------------------------------------------------------------------------
// Dignity
// ---------------------------------------------------------------------------

/// Six-tier classical dignity of a graha in a sign.
///
/// Serializes as the lowercase tier name and deserializes from any spelling
/// [`FromStr`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Dignity {
    Exalted,
    Own,
    Friend,
    Neutral,
    Enemy,
    Debilitated,
}

impl Dignity {
    /// Lowercase tier name, as serialized.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "exalted",
            Self::Own => "own",
            Self::Friend => "friend",
            Self::Neutral => "neutral",
            Self::Enemy => "enemy",
            Self::Debilitated => "debilitated",
        }
    }

    /// Simplified positional-strength lookup.
    pub const fn positional_points(self) -> f64 {
        match self {
            Self::Exalted => 100.0,
            Self::Own => 75.0,
            Self::Friend => 50.0,
            Self::Neutral => 25.0,
            Self::Enemy => 10.0,
            Self::Debilitated => 0.0,
        }
    }
}

impl FromStr for Dignity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exalted" => Ok(Self::Exalted),
            "own" | "own sign" | "ownsign" => Ok(Self::Own),
            "friend" | "friendly" => Ok(Self::Friend),
            "neutral" => Ok(Self::Neutral),
            "enemy" => Ok(Self::Enemy),
            "debilitated" => Ok(Self::Debilitated),
            _ => Err(ParseError::UnknownDignity(s.to_string())),
        }
    }
}

impl TryFrom<String> for Dignity {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Derive a graha's dignity from its sign alone.
///
/// Priority: exaltation > debilitation > own sign > natural relation with
/// the sign lord. Nodes have no own signs and are Neutral elsewhere.
pub fn dignity_in_rashi(graha: Graha, rashi: Rashi) -> Dignity {
    if rashi == exaltation_rashi(graha) {
        return Dignity::Exalted;
    }
    if rashi == debilitation_rashi(graha) {
        return Dignity::Debilitated;
    }
    if own_signs(graha).contains(&rashi) {
        return Dignity::Own;
    }
    match natural_relation(graha, rashi_lord(rashi)) {
        NaturalRelation::Friend => Dignity::Friend,
        NaturalRelation::Neutral => Dignity::Neutral,
        NaturalRelation::Enemy => Dignity::Enemy,
    }
}
