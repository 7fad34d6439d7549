//! One-call chart analysis.

use log::debug;
use serde::Serialize;

use crate::aspects::{Aspect, detect_aspects};
use crate::config::ChartConfig;
use crate::context::ChartContext;
use crate::position::{PlanetPosition, classify_planets};
use crate::strength::{HouseStrengthTable, ShadbalaEntry, all_shadbalas};

/// Everything derived from one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAnalysis {
    pub positions: Vec<PlanetPosition>,
    pub aspects: Vec<Aspect>,
    pub shadbala: Vec<ShadbalaEntry>,
    pub house_strengths: HouseStrengthTable,
}

/// Classify, detect aspects, score, then fold the scores into houses.
///
/// `positions[i]` and `shadbala[i]` describe `ctx.planets()[i]`.
pub fn analyze_chart(ctx: &ChartContext, config: &ChartConfig) -> ChartAnalysis {
    debug!(
        "analyzing chart: {} planets, ascendant {:.4}, cusps {}",
        ctx.planets().len(),
        ctx.ascendant(),
        if ctx.cusps().is_some() { "supplied" } else { "absent" }
    );
    let positions = classify_planets(ctx, config);
    let aspects = detect_aspects(ctx.planets());
    let shadbala = all_shadbalas(ctx, config);
    let house_strengths = HouseStrengthTable::from_placements(
        positions
            .iter()
            .zip(&shadbala)
            .map(|(pos, entry)| (pos.bhava, entry.bala.total)),
    );
    debug!("found {} aspects", aspects.len());

    ChartAnalysis {
        positions,
        aspects,
        shadbala,
        house_strengths,
    }
}
