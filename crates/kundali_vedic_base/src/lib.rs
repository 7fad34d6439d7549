//! Context-free Vedic chart primitives.
//!
//! This crate provides:
//! - Longitude normalization and angular separation
//! - Rashi (sign) and nakshatra (lunar mansion) classification
//! - Equal-house and cusp-based bhava (house) location
//! - Classical aspect classification with orbs
//! - Dignity tables and the six Shadbala strength components
//!
//! Every lookup table is keyed by the closed [`Graha`] enum. No function here
//! fails on a finite longitude: inputs are normalized, never rejected.

pub mod aspect;
pub mod bhava;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod shadbala;
pub mod util;
pub mod vimshottari;

pub use aspect::{
    ALL_ASPECT_KINDS, AspectKind, AspectMatch, aspect_between, aspect_strength, classify_separation,
};
pub use bhava::{
    EQUAL_BHAVA_SPAN, HouseCusp, KENDRA_BHAVAS, bhava_distance, bhava_from_cusps, equal_bhava,
    equal_cusps, is_kendra, is_longitude_in_arc,
};
pub use dignity::{
    Dignity, NaturalRelation, debilitation_degree, debilitation_rashi, dignity_in_rashi,
    exaltation_degree, exaltation_rashi, natural_relation, own_signs,
};
pub use error::ParseError;
pub use graha::{ALL_GRAHAS, BeneficNature, DayNightAffinity, Graha, SAPTA_GRAHAS, rashi_lord};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude,
};
pub use shadbala::{
    KalaBalaBreakdown, KalaBalaInputs, Paksha, ShadbalaBreakdown, SthanaBalaBreakdown,
    cheshta_bala, dig_bala, dignity_sthana_bala, drik_bala, is_day_birth, kala_bala,
    mean_daily_motion, naisargika_bala, paksha_from_longitudes, sthana_bala, uchcha_bala,
};
pub use util::{angular_separation, normalize_360};
pub use vimshottari::{VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, vimshottari_years};
