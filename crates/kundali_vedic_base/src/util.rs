//! Shared angle helpers for the classifiers and strength functions.

/// Normalize any finite angle to [0, 360) degrees.
///
/// Idempotent: `normalize_360(normalize_360(x)) == normalize_360(x)`.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest angular separation between two longitudes, in [0, 180].
pub fn angular_separation(a_deg: f64, b_deg: f64) -> f64 {
    let diff = (normalize_360(a_deg) - normalize_360(b_deg)).abs();
    diff.min(360.0 - diff)
}
