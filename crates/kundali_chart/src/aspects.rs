//! Pairwise aspect detection over a chart's planets.

use serde::Serialize;

use kundali_vedic_base::{AspectKind, Graha, aspect_between};

use crate::context::Planet;

/// An aspect between two planets. `planet1` precedes `planet2` in the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    pub planet1: Graha,
    pub planet2: Graha,
    pub kind: AspectKind,
    /// Shortest angular separation, [0, 180].
    pub distance: f64,
    pub orb: f64,
    /// [0, 100].
    pub strength: f64,
}

impl Aspect {
    pub fn involves(&self, graha: Graha) -> bool {
        self.planet1 == graha || self.planet2 == graha
    }

    /// The planet on the other end from `graha`, if `graha` takes part.
    pub fn other(&self, graha: Graha) -> Option<Graha> {
        if self.planet1 == graha {
            Some(self.planet2)
        } else if self.planet2 == graha {
            Some(self.planet1)
        } else {
            None
        }
    }
}

/// Every qualifying aspect among `planets`, at most one per unordered pair.
///
/// Pairs are visited as `(i, j)` with `i < j`, so output order follows input
/// order.
pub fn detect_aspects(planets: &[Planet]) -> Vec<Aspect> {
    let mut out = Vec::new();
    for (i, a) in planets.iter().enumerate() {
        for b in &planets[i + 1..] {
            if let Some(m) = aspect_between(a.longitude, b.longitude) {
                out.push(Aspect {
                    planet1: a.graha,
                    planet2: b.graha,
                    kind: m.kind,
                    distance: m.distance,
                    orb: m.orb,
                    strength: m.strength,
                });
            }
        }
    }
    out
}
