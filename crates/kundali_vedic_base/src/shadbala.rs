//! Shadbala (six-fold planetary strength) computation.
//!
//! Pure math over a graha and its already-classified position. All nine
//! grahas are scored; terms that have no classical value for the nodes
//! (exaltation, mean motion) contribute 0 for Rahu/Ketu.
//!
//! The six components:
//! 1. Sthana Bala (positional): uchcha + saptavargaja + ojhayugma + kendra + drekkana
//! 2. Kala Bala (temporal): day/night + paksha + tribhaga
//! 3. Dig Bala (directional)
//! 4. Cheshta Bala (motional)
//! 5. Naisargika Bala (natural)
//! 6. Drik Bala (aspectual)
//!
//! Saptavargaja and drekkana are flat approximations, and the three Kala Bala
//! terms are binary bonuses rather than the full classical multi-part values.

use serde::{Deserialize, Serialize};

use crate::aspect::aspect_between;
use crate::bhava::{bhava_distance, is_kendra};
use crate::dignity::{Dignity, dignity_in_rashi, exaltation_degree};
use crate::graha::{BeneficNature, DayNightAffinity, Graha};
use crate::rashi::Rashi;
use crate::util::{angular_separation, normalize_360};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Natural strength in shashtiamsas, indexed by `Graha::index()`.
pub const NAISARGIKA_BALA: [f64; 9] = [60.0, 51.43, 17.14, 25.71, 34.29, 42.86, 8.57, 30.0, 30.0];

/// Bhava of maximum directional strength, indexed by `Graha::index()`.
/// Sun=10, Moon=4, Mars=10, Mercury=1, Jupiter=1, Venus=4, Saturn=7, Rahu=3, Ketu=6.
pub const DIG_BALA_BHAVA: [u8; 9] = [10, 4, 10, 1, 1, 4, 7, 3, 6];

pub const MAX_UCHCHA_BALA: f64 = 60.0;
pub const SAPTAVARGAJA_APPROX: f64 = 30.0;
pub const OJHAYUGMA_POINTS: f64 = 15.0;
pub const KENDRA_POINTS: f64 = 20.0;
pub const DREKKANA_APPROX: f64 = 10.0;

pub const DAY_NIGHT_POINTS: f64 = 30.0;
pub const PAKSHA_POINTS: f64 = 15.0;
pub const TRIBHAGA_POINTS: f64 = 20.0;

pub const MAX_DIG_BALA: f64 = 60.0;
/// Dig Bala lost per house of distance from the strong house.
pub const DIG_BALA_STEP: f64 = 10.0;

pub const MAX_CHESHTA_BALA: f64 = 60.0;
pub const RETROGRADE_BONUS: f64 = 20.0;

/// Day births run from 06:00 (inclusive) to 18:00 (exclusive) local clock time.
pub const DAY_START_HOUR: u32 = 6;
pub const DAY_END_HOUR: u32 = 18;

/// Mean daily motion in degrees/day. None for the nodes.
pub const fn mean_daily_motion(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(0.9856),
        Graha::Chandra => Some(13.1764),
        Graha::Mangal => Some(0.5240),
        Graha::Buddh => Some(1.3833),
        Graha::Guru => Some(0.0831),
        Graha::Shukra => Some(1.1022),
        Graha::Shani => Some(0.0335),
        Graha::Rahu | Graha::Ketu => None,
    }
}

// ---------------------------------------------------------------------------
// Sthana Bala
// ---------------------------------------------------------------------------

/// Uchcha Bala: 60 * (1 - distance_from_exaltation / 180). 0 for the nodes.
pub fn uchcha_bala(graha: Graha, lon: f64) -> f64 {
    match exaltation_degree(graha) {
        Some(exalt) => MAX_UCHCHA_BALA * (1.0 - angular_separation(lon, exalt) / 180.0),
        None => 0.0,
    }
}

/// Saptavargaja Bala. Flat approximation: divisional charts are not cast.
pub fn saptavargaja_bala(_graha: Graha) -> f64 {
    SAPTAVARGAJA_APPROX
}

/// Ojhayugma Bala: 15 for a masculine graha in an odd sign or any other graha
/// in an even sign.
pub fn ojhayugma_bala(graha: Graha, rashi: Rashi) -> f64 {
    if graha.is_masculine() == rashi.is_odd() {
        OJHAYUGMA_POINTS
    } else {
        0.0
    }
}

/// Kendra Bala: 20 in an angular house (1, 4, 7, 10), else 0.
pub fn kendra_bala(bhava: u8) -> f64 {
    if is_kendra(bhava) { KENDRA_POINTS } else { 0.0 }
}

/// Drekkana Bala. Flat approximation: decanates are not evaluated.
pub fn drekkana_bala(_graha: Graha) -> f64 {
    DREKKANA_APPROX
}

/// Sthana Bala breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SthanaBalaBreakdown {
    pub uchcha: f64,
    pub saptavargaja: f64,
    pub ojhayugma: f64,
    pub kendra: f64,
    pub drekkana: f64,
    pub total: f64,
}

/// Five-term Sthana Bala for a single graha.
pub fn sthana_bala(graha: Graha, lon: f64, rashi: Rashi, bhava: u8) -> SthanaBalaBreakdown {
    let u = uchcha_bala(graha, lon);
    let s = saptavargaja_bala(graha);
    let o = ojhayugma_bala(graha, rashi);
    let k = kendra_bala(bhava);
    let d = drekkana_bala(graha);
    SthanaBalaBreakdown {
        uchcha: u,
        saptavargaja: s,
        ojhayugma: o,
        kendra: k,
        drekkana: d,
        total: u + s + o + k + d,
    }
}

/// Simplified Sthana Bala from a dignity tier alone.
///
/// A missing tag is derived from the graha's sign with [`dignity_in_rashi`].
pub fn dignity_sthana_bala(graha: Graha, rashi: Rashi, dignity: Option<Dignity>) -> f64 {
    dignity
        .unwrap_or_else(|| dignity_in_rashi(graha, rashi))
        .positional_points()
}

// ---------------------------------------------------------------------------
// Kala Bala
// ---------------------------------------------------------------------------

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paksha {
    /// Bright fortnight, favours the day planets.
    Shukla,
    /// Dark fortnight, favours the night planets.
    Krishna,
}

/// Day birth when the local clock hour is in [6, 18).
pub fn is_day_birth(hour: u32) -> bool {
    (DAY_START_HOUR..DAY_END_HOUR).contains(&hour)
}

/// Fortnight from raw Sun/Moon longitudes: bright when `|moon - sun| >= 180`.
///
/// The difference is taken on normalized longitudes without folding, so it
/// spans [0, 360).
pub fn paksha_from_longitudes(sun_lon: f64, moon_lon: f64) -> Paksha {
    let raw = (normalize_360(moon_lon) - normalize_360(sun_lon)).abs();
    if raw >= 180.0 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    }
}

/// The three grahas that rule the current half of the day.
pub const fn tribhaga_rulers(is_daytime: bool) -> [Graha; 3] {
    if is_daytime {
        [Graha::Surya, Graha::Guru, Graha::Shukra]
    } else {
        [Graha::Chandra, Graha::Mangal, Graha::Shani]
    }
}

/// Day/night bala: 30 for a day planet in a day birth or a night planet at night.
pub fn day_night_bala(graha: Graha, is_daytime: bool) -> f64 {
    match (graha.day_night_affinity(), is_daytime) {
        (DayNightAffinity::Day, true) | (DayNightAffinity::Night, false) => DAY_NIGHT_POINTS,
        _ => 0.0,
    }
}

/// Paksha Bala: 15 for a day planet in Shukla paksha or a night planet in Krishna.
pub fn paksha_bala(graha: Graha, paksha: Paksha) -> f64 {
    match (graha.day_night_affinity(), paksha) {
        (DayNightAffinity::Day, Paksha::Shukla) | (DayNightAffinity::Night, Paksha::Krishna) => {
            PAKSHA_POINTS
        }
        _ => 0.0,
    }
}

/// Tribhaga Bala: 20 when the graha is one of the current tribhaga rulers.
pub fn tribhaga_bala(graha: Graha, is_daytime: bool) -> f64 {
    if tribhaga_rulers(is_daytime).contains(&graha) {
        TRIBHAGA_POINTS
    } else {
        0.0
    }
}

/// Kala Bala inputs, shared by every graha of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KalaBalaInputs {
    pub is_daytime: bool,
    pub paksha: Paksha,
}

/// Kala Bala breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KalaBalaBreakdown {
    pub day_night: f64,
    pub paksha: f64,
    pub tribhaga: f64,
    pub total: f64,
}

/// Kala bala for a single graha.
pub fn kala_bala(graha: Graha, inputs: &KalaBalaInputs) -> KalaBalaBreakdown {
    let dn = day_night_bala(graha, inputs.is_daytime);
    let p = paksha_bala(graha, inputs.paksha);
    let t = tribhaga_bala(graha, inputs.is_daytime);
    KalaBalaBreakdown {
        day_night: dn,
        paksha: p,
        tribhaga: t,
        total: dn + p + t,
    }
}

// ---------------------------------------------------------------------------
// Dig Bala
// ---------------------------------------------------------------------------

/// Dig Bala: 60 in the strong house, minus 10 per house of circular distance,
/// floored at 0. Out-of-range bhava numbers score 0.
pub fn dig_bala(graha: Graha, bhava: u8) -> f64 {
    if bhava == 0 || bhava > 12 {
        return 0.0;
    }
    let strong = DIG_BALA_BHAVA[graha.index() as usize];
    let dist = bhava_distance(bhava, strong);
    (MAX_DIG_BALA - dist as f64 * DIG_BALA_STEP).max(0.0)
}

// ---------------------------------------------------------------------------
// Cheshta Bala
// ---------------------------------------------------------------------------

/// Ratio of actual to mean daily motion.
///
/// With no supplied speed the mean itself is used, so the ratio is exactly 1.
/// None for the nodes, which have no mean-motion entry.
pub fn speed_factor(graha: Graha, daily_motion: Option<f64>) -> Option<f64> {
    let mean = mean_daily_motion(graha)?;
    Some(daily_motion.map_or(mean, f64::abs) / mean)
}

/// Cheshta Bala.
///
/// Sun and Moon: always 0. Mercury and Venus gain strength moving slowly:
/// `max(0, 60 - 30 * factor)`. Mars, Jupiter and Saturn gain strength moving
/// fast: `min(60, 30 * factor)`. Nodes have no speed term. Every graha other
/// than the luminaries adds 20 when retrograde.
pub fn cheshta_bala(graha: Graha, daily_motion: Option<f64>, is_retrograde: bool) -> f64 {
    let speed_term = match graha {
        Graha::Surya | Graha::Chandra => return 0.0,
        Graha::Buddh | Graha::Shukra => speed_factor(graha, daily_motion)
            .map_or(0.0, |f| (MAX_CHESHTA_BALA - f * 30.0).max(0.0)),
        Graha::Mangal | Graha::Guru | Graha::Shani => speed_factor(graha, daily_motion)
            .map_or(0.0, |f| (f * 30.0).min(MAX_CHESHTA_BALA)),
        Graha::Rahu | Graha::Ketu => 0.0,
    };
    let bonus = if is_retrograde { RETROGRADE_BONUS } else { 0.0 };
    speed_term + bonus
}

// ---------------------------------------------------------------------------
// Naisargika Bala
// ---------------------------------------------------------------------------

/// Naisargika (natural) bala for a graha.
pub const fn naisargika_bala(graha: Graha) -> f64 {
    NAISARGIKA_BALA[graha.index() as usize]
}

// ---------------------------------------------------------------------------
// Drik Bala
// ---------------------------------------------------------------------------

/// Drik Bala received by `graha` at `lon` from the other bodies of the chart.
///
/// Each aspecting body adds its aspect's Drik weight when benefic and
/// subtracts it when malefic. The sum is floored at 0. Entries for `graha`
/// itself are skipped.
pub fn drik_bala(graha: Graha, lon: f64, others: &[(Graha, f64)]) -> f64 {
    let total: f64 = others
        .iter()
        .filter(|(src, _)| *src != graha)
        .filter_map(|(src, src_lon)| {
            aspect_between(lon, *src_lon).map(|m| match src.benefic_nature() {
                BeneficNature::Benefic => m.kind.drik_weight(),
                BeneficNature::Malefic => -m.kind.drik_weight(),
            })
        })
        .sum();
    total.max(0.0)
}

// ---------------------------------------------------------------------------
// Complete Shadbala
// ---------------------------------------------------------------------------

/// Complete Shadbala breakdown. `total` is always the sum of the six parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadbalaBreakdown {
    pub positional: f64,
    pub temporal: f64,
    pub directional: f64,
    pub motional: f64,
    pub natural: f64,
    pub aspectual: f64,
    pub total: f64,
}

impl ShadbalaBreakdown {
    pub fn new(
        positional: f64,
        temporal: f64,
        directional: f64,
        motional: f64,
        natural: f64,
        aspectual: f64,
    ) -> Self {
        Self {
            positional,
            temporal,
            directional,
            motional,
            natural,
            aspectual,
            total: positional + temporal + directional + motional + natural + aspectual,
        }
    }

    /// Total in rupas (60 shashtiamsas each).
    pub fn rupas(&self) -> f64 {
        self.total / 60.0
    }
}
