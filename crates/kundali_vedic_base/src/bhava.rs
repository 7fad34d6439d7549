//! Bhava (house) location for a longitude.
//!
//! Two strategies:
//! - cusp-based: 12 caller-supplied cusps, house `i` spans `[cusp_i, cusp_{i+1})`
//!   with wraparound past 360 degrees;
//! - equal houses: 30-degree houses measured from the ascendant.
//!
//! Both partition the full circle: every longitude lands in exactly one house.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Width of an equal house in degrees.
pub const EQUAL_BHAVA_SPAN: f64 = 30.0;

/// Kendra (angular) houses.
pub const KENDRA_BHAVAS: [u8; 4] = [1, 4, 7, 10];

/// A house cusp: the longitude where `house_number` begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number, 1-12.
    pub house_number: u8,
    /// Ecliptic longitude of the cusp in degrees.
    pub longitude: f64,
}

impl HouseCusp {
    /// Cusp of `house_number` (1-12) at `longitude`, stored as given.
    pub const fn new(house_number: u8, longitude: f64) -> Self {
        Self {
            house_number,
            longitude,
        }
    }
}

/// Whether `lon` lies in the half-open arc `[start, end)`, walking forward.
///
/// Arcs with `start > end` cross 0 degrees. A zero-width arc contains nothing.
pub fn is_longitude_in_arc(lon: f64, start: f64, end: f64) -> bool {
    let lon = normalize_360(lon);
    let start = normalize_360(start);
    let end = normalize_360(end);
    if start > end {
        lon >= start || lon < end
    } else {
        lon >= start && lon < end
    }
}

/// House containing `lon` under the cusp strategy.
///
/// Returns None only when no cusp pair contains the longitude, which cannot
/// happen for 12 cusps ordered forward around the circle.
pub fn bhava_from_cusps(lon: f64, cusps: &[HouseCusp; 12]) -> Option<u8> {
    (0..12).find_map(|i| {
        let current = cusps[i];
        let next = cusps[(i + 1) % 12];
        is_longitude_in_arc(lon, current.longitude, next.longitude).then_some(current.house_number)
    })
}

/// House containing `lon` under equal houses from the ascendant.
///
/// `floor(((lon - asc) mod 360) / 30) + 1`; 13 wraps to 1.
pub fn equal_bhava(lon: f64, ascendant: f64) -> u8 {
    let offset = normalize_360(normalize_360(lon) - normalize_360(ascendant));
    let house = (offset / EQUAL_BHAVA_SPAN).floor() as u8 + 1;
    if house > 12 { house - 12 } else { house }
}

/// Equal-house cusps starting at the ascendant.
pub fn equal_cusps(ascendant: f64) -> [HouseCusp; 12] {
    std::array::from_fn(|i| {
        HouseCusp::new(
            i as u8 + 1,
            normalize_360(ascendant + i as f64 * EQUAL_BHAVA_SPAN),
        )
    })
}

/// Shortest distance between two house numbers around the 12-house cycle, 0..=6.
pub fn bhava_distance(a: u8, b: u8) -> u8 {
    let diff = (a as i16 - b as i16).unsigned_abs() as u8 % 12;
    diff.min(12 - diff)
}

/// Houses 1, 4, 7 and 10.
pub fn is_kendra(bhava: u8) -> bool {
    KENDRA_BHAVAS.contains(&bhava)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uneven_cusps() -> [HouseCusp; 12] {
        let lons = [
            350.0, 20.0, 48.0, 75.0, 104.0, 140.0, 170.0, 200.0, 228.0, 255.0, 284.0, 320.0,
        ];
        std::array::from_fn(|i| HouseCusp::new(i as u8 + 1, lons[i]))
    }

    #[test]
    fn arc_plain() {
        assert!(is_longitude_in_arc(15.0, 10.0, 20.0));
        assert!(is_longitude_in_arc(10.0, 10.0, 20.0));
        assert!(!is_longitude_in_arc(20.0, 10.0, 20.0));
    }

    #[test]
    fn arc_crossing_zero() {
        assert!(is_longitude_in_arc(355.0, 350.0, 20.0));
        assert!(is_longitude_in_arc(5.0, 350.0, 20.0));
        assert!(!is_longitude_in_arc(25.0, 350.0, 20.0));
    }

    #[test]
    fn equal_bhava_91_from_aries() {
        assert_eq!(equal_bhava(91.0, 0.0), 4);
    }

    #[test]
    fn equal_bhava_behind_ascendant() {
        // 10 deg behind the ascendant is the 12th house
        assert_eq!(equal_bhava(90.0, 100.0), 12);
    }

    #[test]
    fn equal_bhava_at_ascendant() {
        assert_eq!(equal_bhava(123.4, 123.4), 1);
    }

    #[test]
    fn cusp_bhava_wraparound_house() {
        let cusps = uneven_cusps();
        assert_eq!(bhava_from_cusps(355.0, &cusps), Some(1));
        assert_eq!(bhava_from_cusps(5.0, &cusps), Some(1));
        assert_eq!(bhava_from_cusps(20.0, &cusps), Some(2));
        assert_eq!(bhava_from_cusps(150.0, &cusps), Some(6));
        assert_eq!(bhava_from_cusps(349.9, &cusps), Some(12));
    }

    #[test]
    fn cusp_bhava_unordered_has_gap() {
        // Every cusp at the same longitude: all arcs are empty
        let cusps: [HouseCusp; 12] = std::array::from_fn(|i| HouseCusp::new(i as u8 + 1, 40.0));
        assert_eq!(bhava_from_cusps(100.0, &cusps), None);
    }

    #[test]
    fn equal_cusps_match_equal_bhava() {
        let asc = 217.3;
        let cusps = equal_cusps(asc);
        for step in 0..720 {
            let lon = step as f64 * 0.5 + 0.25;
            assert_eq!(bhava_from_cusps(lon, &cusps), Some(equal_bhava(lon, asc)), "lon {lon}");
        }
    }

    #[test]
    fn bhava_distance_circular() {
        assert_eq!(bhava_distance(10, 10), 0);
        assert_eq!(bhava_distance(10, 4), 6);
        assert_eq!(bhava_distance(1, 12), 1);
        assert_eq!(bhava_distance(2, 10), 4);
    }

    #[test]
    fn kendras() {
        assert!(is_kendra(1) && is_kendra(4) && is_kendra(7) && is_kendra(10));
        assert!(!is_kendra(2) && !is_kendra(12));
    }
}
