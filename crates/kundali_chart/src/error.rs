//! Error types for chart-context validation.

use kundali_vedic_base::Graha;
use thiserror::Error;

/// Malformed chart input, detected once when a [`ChartContext`] is built.
///
/// [`ChartContext`]: crate::ChartContext
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error("ascendant longitude is not finite: {0}")]
    NonFiniteAscendant(f64),
    #[error("longitude of {graha} is not finite: {value}")]
    NonFiniteLongitude { graha: Graha, value: f64 },
    #[error("daily motion of {graha} is not finite: {value}")]
    NonFiniteDailyMotion { graha: Graha, value: f64 },
    #[error("expected 12 house cusps, got {0}")]
    CuspCount(usize),
    #[error("cusp at position {position} is numbered {found}, expected {}", .position + 1)]
    CuspNumbering { position: usize, found: u8 },
    #[error("cusp of house {house} is not finite: {value}")]
    NonFiniteCusp { house: u8, value: f64 },
    #[error("invalid birth time {input:?}: {source}")]
    BirthTime {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("{0} appears more than once in the planet list")]
    DuplicateGraha(Graha),
}
