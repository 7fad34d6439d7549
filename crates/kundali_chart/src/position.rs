//! Per-planet classification: rashi, nakshatra and bhava.

use log::warn;
use serde::Serialize;

use kundali_vedic_base::{
    Graha, NakshatraInfo, RashiInfo, bhava_from_cusps, equal_bhava, nakshatra_from_longitude,
    rashi_from_longitude,
};

use crate::config::{ChartConfig, HouseMethod};
use crate::context::{ChartContext, Planet};

/// House (1-12) of a longitude in this chart.
///
/// Uses the cusps when the context has them and the configuration allows it,
/// otherwise equal houses from the ascendant. A longitude no cusp pair
/// contains means the cusps are not ordered around the circle; it is logged
/// and placed in house 1.
pub fn locate_bhava(longitude: f64, ctx: &ChartContext, config: &ChartConfig) -> u8 {
    let cusps = match config.house_method {
        HouseMethod::CuspsWhenAvailable => ctx.cusps(),
        HouseMethod::Equal => None,
    };
    match cusps {
        Some(cusps) => bhava_from_cusps(longitude, cusps).unwrap_or_else(|| {
            warn!("longitude {longitude} matched no cusp interval, placing it in house 1");
            1
        }),
        None => equal_bhava(longitude, ctx.ascendant()),
    }
}

/// Classification of one planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Longitude in [0, 360).
    pub longitude: f64,
    pub is_retrograde: bool,
    pub rashi: RashiInfo,
    pub nakshatra: NakshatraInfo,
    /// House, 1-12.
    pub bhava: u8,
}

pub fn classify_planet(planet: &Planet, ctx: &ChartContext, config: &ChartConfig) -> PlanetPosition {
    let rashi = rashi_from_longitude(planet.longitude);
    PlanetPosition {
        graha: planet.graha,
        longitude: rashi.longitude,
        is_retrograde: planet.is_retrograde,
        rashi,
        nakshatra: nakshatra_from_longitude(planet.longitude),
        bhava: locate_bhava(planet.longitude, ctx, config),
    }
}

/// Classify every planet of the chart, in input order.
pub fn classify_planets(ctx: &ChartContext, config: &ChartConfig) -> Vec<PlanetPosition> {
    ctx.planets()
        .iter()
        .map(|p| classify_planet(p, ctx, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_vedic_base::{HouseCusp, Nakshatra, Rashi, equal_cusps};

    fn ctx(asc: f64, cusps: Option<&[HouseCusp]>) -> ChartContext {
        ChartContext::new(asc, cusps, "12:00", &[]).unwrap()
    }

    #[test]
    fn equal_house_without_cusps() {
        let c = ctx(0.0, None);
        assert_eq!(locate_bhava(91.0, &c, &ChartConfig::default()), 4);
        assert_eq!(locate_bhava(0.0, &c, &ChartConfig::default()), 1);
        assert_eq!(locate_bhava(359.9, &c, &ChartConfig::default()), 12);
    }

    #[test]
    fn cusps_take_precedence() {
        // Unequal houses: house 1 spans 350..20
        let lons = [350.0, 20.0, 50.0, 80.0, 110.0, 140.0, 170.0, 200.0, 230.0, 260.0, 290.0, 320.0];
        let cusps: Vec<HouseCusp> = lons
            .iter()
            .enumerate()
            .map(|(i, &l)| HouseCusp::new(i as u8 + 1, l))
            .collect();
        let c = ctx(350.0, Some(cusps.as_slice()));
        assert_eq!(locate_bhava(5.0, &c, &ChartConfig::default()), 1);
        assert_eq!(locate_bhava(25.0, &c, &ChartConfig::default()), 2);
        assert_eq!(locate_bhava(345.0, &c, &ChartConfig::default()), 12);

        let equal = ChartConfig {
            house_method: HouseMethod::Equal,
            ..ChartConfig::default()
        };
        // Equal houses from 350: 25 is 35 degrees past the ascendant
        assert_eq!(locate_bhava(25.0, &c, &equal), 2);
        assert_eq!(locate_bhava(21.0, &c, &equal), 2);
        assert_eq!(locate_bhava(19.0, &c, &equal), 1);
    }

    #[test]
    fn unmatched_cusp_falls_back_to_first_house() {
        // All cusps at the same point: every arc is empty
        let cusps: Vec<HouseCusp> = (1..=12).map(|h| HouseCusp::new(h, 100.0)).collect();
        let c = ctx(0.0, Some(cusps.as_slice()));
        assert_eq!(locate_bhava(200.0, &c, &ChartConfig::default()), 1);
    }

    #[test]
    fn classify_moon() {
        let cusps = equal_cusps(30.0);
        let c = ctx(30.0, Some(cusps.as_slice()));
        let moon = Planet::new(Graha::Chandra, 45.0).retrograde();
        let pos = classify_planet(&moon, &c, &ChartConfig::default());
        assert_eq!(pos.rashi.rashi, Rashi::Vrishabha);
        assert_eq!(pos.nakshatra.nakshatra, Nakshatra::Rohini);
        assert_eq!(pos.nakshatra.pada, 2);
        assert_eq!(pos.bhava, 1);
        assert!(pos.is_retrograde);
    }
}
