//! Chart-level Vedic analysis on top of `kundali_vedic_base`.
//!
//! A [`ChartContext`] is validated once at construction. Past that point the
//! pipeline is infallible:
//! - [`classify_planets`]: rashi, nakshatra and bhava per planet
//! - [`detect_aspects`]: pairwise classical aspects
//! - [`all_shadbalas`]: six-fold strength per planet
//! - [`house_strengths`]: planet strength folded into houses
//! - [`analyze_chart`]: all of the above in one pass
//!
//! Behaviour choices live in [`ChartConfig`].

pub mod analysis;
pub mod aspects;
pub mod config;
pub mod context;
pub mod error;
pub mod position;
pub mod strength;

pub use analysis::{ChartAnalysis, analyze_chart};
pub use aspects::{Aspect, detect_aspects};
pub use config::{ChartConfig, HouseMethod, MotionModel, PositionalModel};
pub use context::{BIRTH_TIME_FORMAT, ChartContext, ChartInput, Planet};
pub use error::ChartError;
pub use position::{PlanetPosition, classify_planet, classify_planets, locate_bhava};
pub use strength::{
    HouseStrength, HouseStrengthTable, ShadbalaEntry, all_shadbalas, house_strengths,
    planet_shadbala,
};
