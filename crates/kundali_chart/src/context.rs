//! Validated chart input.
//!
//! [`ChartContext`] is the only fallible boundary of the crate. Once built,
//! its longitudes are finite and normalized, its cusps (if any) are twelve
//! and numbered 1..12 in order, and no graha appears twice. Every
//! computation downstream reads it and never fails.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use kundali_vedic_base::{
    Dignity, Graha, HouseCusp, KalaBalaInputs, Paksha, is_day_birth, normalize_360,
    paksha_from_longitudes,
};

use crate::error::ChartError;

/// Format of the birth-time string: 24-hour local clock.
pub const BIRTH_TIME_FORMAT: &str = "%H:%M";

/// One body as delivered by the ephemeris collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub graha: Graha,
    /// Ecliptic longitude in degrees, any range.
    pub longitude: f64,
    #[serde(default)]
    pub is_retrograde: bool,
    /// Dignity tag for the dignity positional model. Derived from the sign when absent.
    #[serde(default)]
    pub dignity: Option<Dignity>,
    /// Instantaneous speed in degrees/day, used by the ephemeris-speed motion model.
    #[serde(default)]
    pub daily_motion: Option<f64>,
}

impl Planet {
    /// A direct-moving planet with no dignity tag and no speed.
    pub const fn new(graha: Graha, longitude: f64) -> Self {
        Self {
            graha,
            longitude,
            is_retrograde: false,
            dignity: None,
            daily_motion: None,
        }
    }

    /// Mark the planet retrograde.
    pub const fn retrograde(mut self) -> Self {
        self.is_retrograde = true;
        self
    }

    /// Attach a dignity tag; it takes precedence over the sign-derived one.
    pub const fn with_dignity(mut self, dignity: Dignity) -> Self {
        self.dignity = Some(dignity);
        self
    }

    /// Attach the ephemeris speed in degrees/day. Negative when retrograde.
    pub const fn with_daily_motion(mut self, deg_per_day: f64) -> Self {
        self.daily_motion = Some(deg_per_day);
        self
    }
}

/// Unvalidated chart input in the collaborator's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub ascendant: f64,
    #[serde(default)]
    pub house_cusps: Option<Vec<HouseCusp>>,
    /// `"HH:MM"`, 24-hour.
    pub birth_time: String,
    pub planets: Vec<Planet>,
}

/// A validated chart: ascendant, optional cusps, birth time and planets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ChartInput")]
pub struct ChartContext {
    ascendant: f64,
    cusps: Option<[HouseCusp; 12]>,
    birth_time: NaiveTime,
    planets: Vec<Planet>,
}

impl ChartContext {
    /// Validate and normalize chart input.
    ///
    /// Longitudes of the ascendant, cusps and planets are reduced to [0, 360).
    pub fn new(
        ascendant: f64,
        house_cusps: Option<&[HouseCusp]>,
        birth_time: &str,
        planets: &[Planet],
    ) -> Result<Self, ChartError> {
        if !ascendant.is_finite() {
            return Err(ChartError::NonFiniteAscendant(ascendant));
        }
        let cusps = house_cusps.map(validate_cusps).transpose()?;
        let birth_time = parse_birth_time(birth_time)?;

        let mut seen = [false; 9];
        let mut validated = Vec::with_capacity(planets.len());
        for p in planets {
            if !p.longitude.is_finite() {
                return Err(ChartError::NonFiniteLongitude {
                    graha: p.graha,
                    value: p.longitude,
                });
            }
            if let Some(speed) = p.daily_motion.filter(|s| !s.is_finite()) {
                return Err(ChartError::NonFiniteDailyMotion {
                    graha: p.graha,
                    value: speed,
                });
            }
            let slot = &mut seen[p.graha.index() as usize];
            if *slot {
                return Err(ChartError::DuplicateGraha(p.graha));
            }
            *slot = true;
            validated.push(Planet {
                longitude: normalize_360(p.longitude),
                ..*p
            });
        }

        Ok(Self {
            ascendant: normalize_360(ascendant),
            cusps,
            birth_time,
            planets: validated,
        })
    }

    /// Ascendant longitude in [0, 360).
    pub fn ascendant(&self) -> f64 {
        self.ascendant
    }

    /// The twelve cusps, ordered by house, when supplied.
    pub fn cusps(&self) -> Option<&[HouseCusp; 12]> {
        self.cusps.as_ref()
    }

    pub fn birth_time(&self) -> NaiveTime {
        self.birth_time
    }

    /// Planets in input order, longitudes normalized.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet(&self, graha: Graha) -> Option<&Planet> {
        self.planets.iter().find(|p| p.graha == graha)
    }

    /// Birth hour in [06:00, 18:00).
    pub fn is_day_birth(&self) -> bool {
        is_day_birth(self.birth_time.hour())
    }

    /// Lunar fortnight from the Sun and Moon. Shukla when either is absent.
    pub fn paksha(&self) -> Paksha {
        match (self.planet(Graha::Surya), self.planet(Graha::Chandra)) {
            (Some(sun), Some(moon)) => paksha_from_longitudes(sun.longitude, moon.longitude),
            _ => Paksha::Shukla,
        }
    }

    /// Chart-wide inputs of the temporal strength terms.
    pub fn kala_inputs(&self) -> KalaBalaInputs {
        KalaBalaInputs {
            is_daytime: self.is_day_birth(),
            paksha: self.paksha(),
        }
    }
}

impl TryFrom<ChartInput> for ChartContext {
    type Error = ChartError;

    fn try_from(input: ChartInput) -> Result<Self, Self::Error> {
        Self::new(
            input.ascendant,
            input.house_cusps.as_deref(),
            &input.birth_time,
            &input.planets,
        )
    }
}

fn validate_cusps(cusps: &[HouseCusp]) -> Result<[HouseCusp; 12], ChartError> {
    let mut out =
        <[HouseCusp; 12]>::try_from(cusps).map_err(|_| ChartError::CuspCount(cusps.len()))?;
    for (position, cusp) in out.iter_mut().enumerate() {
        if usize::from(cusp.house_number) != position + 1 {
            return Err(ChartError::CuspNumbering {
                position,
                found: cusp.house_number,
            });
        }
        if !cusp.longitude.is_finite() {
            return Err(ChartError::NonFiniteCusp {
                house: cusp.house_number,
                value: cusp.longitude,
            });
        }
        cusp.longitude = normalize_360(cusp.longitude);
    }
    Ok(out)
}

fn parse_birth_time(s: &str) -> Result<NaiveTime, ChartError> {
    NaiveTime::parse_from_str(s.trim(), BIRTH_TIME_FORMAT).map_err(|source| {
        ChartError::BirthTime {
            input: s.to_string(),
            source,
        }
    })
}
