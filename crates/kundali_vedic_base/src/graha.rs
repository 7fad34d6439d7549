//! Vedic planet (graha) enum, rashi lordship and the fixed planet
//! classifications used by the strength calculations.
//!
//! The 9 grahas are the closed key set for every lookup table in this crate,
//! so a missing table entry is a compile error rather than a runtime hole.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
///
/// Deserializes from any name [`FromStr`] accepts; serializes as the
/// Sanskrit variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Benefic/malefic classification used by Drik Bala.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

/// Which half of the day a graha rules for Kaala Bala.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayNightAffinity {
    /// Sun, Jupiter, Venus.
    Day,
    /// Moon, Mars, Saturn.
    Night,
    /// Mercury and the nodes favour neither half.
    Neither,
}

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// True for Rahu and Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Masculine grahas for odd/even sign affinity: Sun, Mars, Jupiter.
    pub const fn is_masculine(self) -> bool {
        matches!(self, Self::Surya | Self::Mangal | Self::Guru)
    }

    /// Natural benefics are Jupiter, Venus, Mercury and Moon; all others malefic.
    pub const fn benefic_nature(self) -> BeneficNature {
        match self {
            Self::Chandra | Self::Buddh | Self::Guru | Self::Shukra => BeneficNature::Benefic,
            Self::Surya | Self::Mangal | Self::Shani | Self::Rahu | Self::Ketu => {
                BeneficNature::Malefic
            }
        }
    }

    /// Whether the graha gains temporal strength in day or night births.
    pub const fn day_night_affinity(self) -> DayNightAffinity {
        match self {
            Self::Surya | Self::Guru | Self::Shukra => DayNightAffinity::Day,
            Self::Chandra | Self::Mangal | Self::Shani => DayNightAffinity::Night,
            Self::Buddh | Self::Rahu | Self::Ketu => DayNightAffinity::Neither,
        }
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Accepts the English or the Sanskrit name, case-insensitively.
impl FromStr for Graha {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_GRAHAS
            .into_iter()
            .find(|g| {
                g.english_name().eq_ignore_ascii_case(needle) || g.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseError::UnknownGraha(s.to_string()))
    }
}

impl TryFrom<String> for Graha {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal
/// - Vrishabha/Tula → Shukra
/// - Mithuna/Kanya → Buddh
/// - Karka → Chandra
/// - Simha → Surya
/// - Dhanu/Meena → Guru
/// - Makara/Kumbha → Shani
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn sapta_grahas_exclude_nodes() {
        assert!(SAPTA_GRAHAS.iter().all(|g| !g.is_node()));
    }

    #[test]
    fn parse_english_and_sanskrit() {
        assert_eq!("Sun".parse::<Graha>(), Ok(Graha::Surya));
        assert_eq!("mercury".parse::<Graha>(), Ok(Graha::Buddh));
        assert_eq!("Shani".parse::<Graha>(), Ok(Graha::Shani));
        assert_eq!(" Ketu ".parse::<Graha>(), Ok(Graha::Ketu));
    }

    #[test]
    fn parse_unknown_fails() {
        assert!("Pluto".parse::<Graha>().is_err());
    }

    #[test]
    fn display_is_english() {
        assert_eq!(Graha::Guru.to_string(), "Jupiter");
    }

    #[test]
    fn masculine_set() {
        let masc: Vec<Graha> = ALL_GRAHAS.into_iter().filter(|g| g.is_masculine()).collect();
        assert_eq!(masc, vec![Graha::Surya, Graha::Mangal, Graha::Guru]);
    }

    #[test]
    fn benefic_set() {
        let benefics: Vec<Graha> = ALL_GRAHAS
            .into_iter()
            .filter(|g| g.benefic_nature() == BeneficNature::Benefic)
            .collect();
        assert_eq!(
            benefics,
            vec![Graha::Chandra, Graha::Buddh, Graha::Guru, Graha::Shukra]
        );
    }

    #[test]
    fn day_and_night_planets_disjoint() {
        for g in ALL_GRAHAS {
            match g {
                Graha::Surya | Graha::Guru | Graha::Shukra => {
                    assert_eq!(g.day_night_affinity(), DayNightAffinity::Day)
                }
                Graha::Chandra | Graha::Mangal | Graha::Shani => {
                    assert_eq!(g.day_night_affinity(), DayNightAffinity::Night)
                }
                _ => assert_eq!(g.day_night_affinity(), DayNightAffinity::Neither),
            }
        }
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrishabha), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Tula), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn deserializes_any_parseable_name() {
        let grahas: Vec<Graha> = serde_json::from_str(r#"["Sun", "Shani", "mercury", " Ketu "]"#).unwrap();
        assert_eq!(grahas, vec![Graha::Surya, Graha::Shani, Graha::Buddh, Graha::Ketu]);
        assert!(serde_json::from_str::<Graha>(r#""Pluto""#).is_err());
    }

    #[test]
    fn serialized_name_reads_back() {
        for g in ALL_GRAHAS {
            let json = serde_json::to_string(&g).unwrap();
            assert_eq!(json, format!("{:?}", g.name()));
            assert_eq!(serde_json::from_str::<Graha>(&json).unwrap(), g);
        }
    }
}
