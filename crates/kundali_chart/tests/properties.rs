//! Property tests over random charts.

use proptest::prelude::*;

use kundali_chart::{
    ChartConfig, ChartContext, HouseMethod, Planet, all_shadbalas, detect_aspects,
    house_strengths,
};
use kundali_vedic_base::{ALL_GRAHAS, Graha};

fn graha_longitudes() -> impl Strategy<Value = Vec<(Graha, f64)>> {
    (
        proptest::sample::subsequence(ALL_GRAHAS.to_vec(), 0..=9),
        proptest::collection::vec(-720.0f64..720.0, 9),
    )
        .prop_map(|(grahas, lons)| grahas.into_iter().zip(lons).collect())
}

proptest! {
    #[test]
    fn aspect_detection_ignores_order(a in -720.0f64..720.0, b in -720.0f64..720.0) {
        let ab = detect_aspects(&[Planet::new(Graha::Surya, a), Planet::new(Graha::Chandra, b)]);
        let ba = detect_aspects(&[Planet::new(Graha::Chandra, b), Planet::new(Graha::Surya, a)]);
        prop_assert!(ab.len() <= 1);
        prop_assert_eq!(ab.len(), ba.len());
        if let (Some(x), Some(y)) = (ab.first(), ba.first()) {
            prop_assert_eq!(x.kind, y.kind);
            prop_assert!((x.orb - y.orb).abs() < 1e-9);
            prop_assert!((0.0..=100.0).contains(&x.strength));
        }
    }

    #[test]
    fn house_strength_conservation(
        placed in graha_longitudes(),
        asc in 0.0f64..360.0,
        hour in 0u32..24,
        equal in any::<bool>(),
    ) {
        let planets: Vec<Planet> = placed
            .iter()
            .enumerate()
            .map(|(i, &(g, lon))| {
                let p = Planet::new(g, lon);
                if i % 2 == 0 { p.retrograde() } else { p }
            })
            .collect();
        let ctx = ChartContext::new(asc, None, &format!("{hour:02}:30"), &planets).unwrap();
        let config = ChartConfig {
            house_method: if equal { HouseMethod::Equal } else { HouseMethod::CuspsWhenAvailable },
            ..ChartConfig::default()
        };

        let entries = all_shadbalas(&ctx, &config);
        let planet_sum: f64 = entries.iter().map(|e| e.bala.total).sum();
        let table = house_strengths(&ctx, &config);
        prop_assert!((table.sum() - planet_sum).abs() < 1e-6);

        for e in &entries {
            let b = e.bala;
            let parts = b.positional + b.temporal + b.directional + b.motional + b.natural + b.aspectual;
            prop_assert!((b.total - parts).abs() < 1e-9);
            prop_assert!(b.aspectual >= 0.0);
        }
    }
}
