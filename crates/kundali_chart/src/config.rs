//! Chart computation configuration.
//!
//! Every field is a small closed enum with a default, so a caller can embed
//! `ChartConfig` in its own settings file and override only what it needs.

use serde::{Deserialize, Serialize};

/// How planets are placed into houses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseMethod {
    /// Use the supplied cusps, falling back to equal houses when there are none.
    #[default]
    CuspsWhenAvailable,
    /// Always use 30-degree houses from the ascendant.
    Equal,
}

/// Which Sthana (positional) Bala formula is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionalModel {
    /// Exaltation + saptavargaja + odd/even + kendra + drekkana.
    #[default]
    Classical,
    /// Lookup on the planet's supplied dignity tier.
    Dignity,
}

/// Source of the speed ratio in Cheshta (motional) Bala.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionModel {
    /// Ratio fixed at 1: the score is a constant plus the retrograde bonus.
    #[default]
    MeanMotion,
    /// Ratio of the planet's supplied daily motion to its mean motion.
    EphemerisSpeed,
}

/// Options for a chart computation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub house_method: HouseMethod,
    pub positional_model: PositionalModel,
    pub motion_model: MotionModel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ChartConfig::default();
        assert_eq!(c.house_method, HouseMethod::CuspsWhenAvailable);
        assert_eq!(c.positional_model, PositionalModel::Classical);
        assert_eq!(c.motion_model, MotionModel::MeanMotion);
    }
}
