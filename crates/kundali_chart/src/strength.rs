//! Shadbala over a chart and the per-house strength table.

use log::debug;
use serde::Serialize;

use kundali_vedic_base::{
    Graha, ShadbalaBreakdown, cheshta_bala, dig_bala, dignity_sthana_bala, drik_bala, kala_bala,
    naisargika_bala, rashi_from_longitude, sthana_bala,
};

use crate::config::{ChartConfig, MotionModel, PositionalModel};
use crate::context::{ChartContext, Planet};
use crate::position::locate_bhava;

/// Shadbala of one planet in the context of its chart.
///
/// `planet` is normally one of `ctx.planets()`; the other chart planets act
/// as the aspecting bodies for Drik Bala.
pub fn planet_shadbala(planet: &Planet, ctx: &ChartContext, config: &ChartConfig) -> ShadbalaBreakdown {
    let graha = planet.graha;
    let lon = planet.longitude;
    let bhava = locate_bhava(lon, ctx, config);

    let rashi = rashi_from_longitude(lon).rashi;
    let positional = match config.positional_model {
        PositionalModel::Classical => sthana_bala(graha, lon, rashi, bhava).total,
        PositionalModel::Dignity => dignity_sthana_bala(graha, rashi, planet.dignity),
    };
    let temporal = kala_bala(graha, &ctx.kala_inputs()).total;
    let directional = dig_bala(graha, bhava);
    let speed = match config.motion_model {
        MotionModel::MeanMotion => None,
        MotionModel::EphemerisSpeed => planet.daily_motion,
    };
    let motional = cheshta_bala(graha, speed, planet.is_retrograde);
    let natural = naisargika_bala(graha);
    let others: Vec<(Graha, f64)> = ctx.planets().iter().map(|p| (p.graha, p.longitude)).collect();
    let aspectual = drik_bala(graha, lon, &others);

    ShadbalaBreakdown::new(positional, temporal, directional, motional, natural, aspectual)
}

/// Shadbala of a single graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadbalaEntry {
    pub graha: Graha,
    #[serde(flatten)]
    pub bala: ShadbalaBreakdown,
}

/// Shadbala for every planet of the chart, in input order.
pub fn all_shadbalas(ctx: &ChartContext, config: &ChartConfig) -> Vec<ShadbalaEntry> {
    debug!("computing shadbala for {} planets", ctx.planets().len());
    ctx.planets()
        .iter()
        .map(|p| ShadbalaEntry {
            graha: p.graha,
            bala: planet_shadbala(p, ctx, config),
        })
        .collect()
}

/// Strength accumulated in one house.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HouseStrength {
    /// Sum of the Shadbala totals of the planets in the house.
    pub planetary_influence: f64,
    /// Reserved for house-level aspect scoring. Always 0.
    pub aspectual_influence: f64,
    pub total: f64,
}

/// Strength of houses 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HouseStrengthTable {
    houses: [HouseStrength; 12],
}

impl HouseStrengthTable {
    /// Fold `(bhava, shadbala total)` pairs into their houses.
    ///
    /// Out-of-range house numbers are ignored; the locators never produce them.
    pub fn from_placements(placements: impl IntoIterator<Item = (u8, f64)>) -> Self {
        let mut houses = [HouseStrength::default(); 12];
        for (bhava, total) in placements {
            if (1..=12).contains(&bhava) {
                houses[usize::from(bhava) - 1].planetary_influence += total;
            }
        }
        for h in &mut houses {
            h.total = h.planetary_influence + h.aspectual_influence;
        }
        Self { houses }
    }

    /// House strength for `bhava` in 1..=12.
    pub fn get(&self, bhava: u8) -> Option<&HouseStrength> {
        usize::from(bhava).checked_sub(1).and_then(|i| self.houses.get(i))
    }

    /// `(bhava, strength)` for houses 1 through 12.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &HouseStrength)> {
        (1u8..).zip(self.houses.iter())
    }

    /// House with the highest total; the lowest-numbered one on ties.
    pub fn strongest(&self) -> (u8, &HouseStrength) {
        let mut best = (1u8, &self.houses[0]);
        for (bhava, h) in self.iter().skip(1) {
            if h.total > best.1.total {
                best = (bhava, h);
            }
        }
        best
    }

    /// Sum of all twelve house totals.
    pub fn sum(&self) -> f64 {
        self.houses.iter().map(|h| h.total).sum()
    }
}

/// Rebuild the house-strength table from the chart's planets.
pub fn house_strengths(ctx: &ChartContext, config: &ChartConfig) -> HouseStrengthTable {
    debug!("computing house strengths");
    HouseStrengthTable::from_placements(ctx.planets().iter().map(|p| {
        (
            locate_bhava(p.longitude, ctx, config),
            planet_shadbala(p, ctx, config).total,
        )
    }))
}
