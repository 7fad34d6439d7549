//! Classical angular aspects between two longitudes.
//!
//! Separation is the shortest arc between the points, in [0, 180]. A
//! separation qualifies for an aspect kind when it is within that kind's orb
//! of the canonical angle. Kinds are tried in a fixed priority order and the
//! first match wins, so a pair has at most one aspect.

use serde::{Deserialize, Serialize};

use crate::util::angular_separation;

/// The five classical aspect kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Aspect kinds in match priority order.
pub const ALL_ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }

    /// Exact angle of the aspect in degrees.
    pub const fn exact_angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    /// Largest allowed deviation from the exact angle.
    pub const fn max_orb(self) -> f64 {
        match self {
            Self::Sextile => 6.0,
            Self::Conjunction | Self::Square | Self::Trine | Self::Opposition => 8.0,
        }
    }

    /// Weight this aspect contributes to the aspected graha's Drik Bala.
    pub const fn drik_weight(self) -> f64 {
        match self {
            Self::Conjunction => 60.0,
            Self::Opposition => 40.0,
            Self::Trine => 30.0,
            Self::Square => 20.0,
            Self::Sextile => 15.0,
        }
    }
}

/// A qualifying aspect between two longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    pub kind: AspectKind,
    /// Shortest angular separation, [0, 180].
    pub distance: f64,
    /// |distance - exact angle|.
    pub orb: f64,
    /// Exactness, 100 at orb 0 down to 0 at the orb limit.
    pub strength: f64,
}

/// First aspect kind (in priority order) whose orb admits `distance`.
pub fn classify_separation(distance: f64) -> Option<AspectKind> {
    ALL_ASPECT_KINDS
        .into_iter()
        .find(|k| (distance - k.exact_angle()).abs() <= k.max_orb())
}

/// `max(0, 100 * (1 - orb / max_orb))`.
pub fn aspect_strength(orb: f64, max_orb: f64) -> f64 {
    (100.0 * (1.0 - orb / max_orb)).max(0.0)
}

/// Aspect between two longitudes, if any. Symmetric in its arguments.
pub fn aspect_between(lon1: f64, lon2: f64) -> Option<AspectMatch> {
    let distance = angular_separation(lon1, lon2);
    classify_separation(distance).map(|kind| {
        let orb = (distance - kind.exact_angle()).abs();
        AspectMatch {
            kind,
            distance,
            orb,
            strength: aspect_strength(orb, kind.max_orb()),
        }
    })
}
