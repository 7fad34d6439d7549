//! Vimshottari period-length table.
//!
//! Only the static 120-year table and lord order live here. Scheduling the
//! mahadasha timeline from a birth Moon is a caller concern.

use crate::graha::Graha;

/// Total length of the Vimshottari cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Lord order, starting from Ketu (ruler of Ashwini).
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Mahadasha length in years for each graha.
pub const fn vimshottari_years(graha: Graha) -> f64 {
    match graha {
        Graha::Ketu => 7.0,
        Graha::Shukra => 20.0,
        Graha::Surya => 6.0,
        Graha::Chandra => 10.0,
        Graha::Mangal => 7.0,
        Graha::Rahu => 18.0,
        Graha::Guru => 16.0,
        Graha::Shani => 19.0,
        Graha::Buddh => 17.0,
    }
}
