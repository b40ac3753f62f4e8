//! Moon longitude and mean lunar node.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed.), ch. 47: the longitude terms of
//! Table 47.A plus the Venus, Jupiter and flattening corrections.

/// Periodic terms: multiples of D, M, M', F and the amplitude in 1e-6 degrees.
#[rustfmt::skip]
static LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 59] = [
    (0, 0, 1, 0, 6_288_774.0),
    (2, 0, -1, 0, 1_274_027.0),
    (2, 0, 0, 0, 658_314.0),
    (0, 0, 2, 0, 213_618.0),
    (0, 1, 0, 0, -185_116.0),
    (0, 0, 0, 2, -114_332.0),
    (2, 0, -2, 0, 58_793.0),
    (2, -1, -1, 0, 57_066.0),
    (2, 0, 1, 0, 53_322.0),
    (2, -1, 0, 0, 45_758.0),
    (0, 1, -1, 0, -40_923.0),
    (1, 0, 0, 0, -34_720.0),
    (0, 1, 1, 0, -30_383.0),
    (2, 0, 0, -2, 15_327.0),
    (0, 0, 1, 2, -12_528.0),
    (0, 0, 1, -2, 10_980.0),
    (4, 0, -1, 0, 10_675.0),
    (0, 0, 3, 0, 10_034.0),
    (4, 0, -2, 0, 8_548.0),
    (2, 1, -1, 0, -7_888.0),
    (2, 1, 0, 0, -6_766.0),
    (1, 0, -1, 0, -5_163.0),
    (1, 1, 0, 0, 4_987.0),
    (2, -1, 1, 0, 4_036.0),
    (2, 0, 2, 0, 3_994.0),
    (4, 0, 0, 0, 3_861.0),
    (2, 0, -3, 0, 3_665.0),
    (0, 1, -2, 0, -2_689.0),
    (2, 0, -1, 2, -2_602.0),
    (2, -1, -2, 0, 2_390.0),
    (1, 0, 1, 0, -2_348.0),
    (2, -2, 0, 0, 2_236.0),
    (0, 1, 2, 0, -2_120.0),
    (0, 2, 0, 0, -2_069.0),
    (2, -2, -1, 0, 2_048.0),
    (2, 0, 1, -2, -1_773.0),
    (2, 0, 0, 2, -1_595.0),
    (4, -1, -1, 0, 1_215.0),
    (0, 0, 2, 2, -1_110.0),
    (3, 0, -1, 0, -892.0),
    (2, 1, 1, 0, -810.0),
    (4, -1, -2, 0, 759.0),
    (0, 2, -1, 0, -713.0),
    (2, 2, -1, 0, -700.0),
    (2, 1, -2, 0, 691.0),
    (2, -1, 0, -2, 596.0),
    (4, 0, 1, 0, 549.0),
    (0, 0, 4, 0, 537.0),
    (4, -1, 0, 0, 520.0),
    (1, 0, -2, 0, -487.0),
    (2, 1, 0, -2, -399.0),
    (0, 0, 2, -2, -381.0),
    (1, 1, 1, 0, 351.0),
    (3, 0, -2, 0, -340.0),
    (4, 0, -3, 0, 330.0),
    (2, -1, 2, 0, 327.0),
    (0, 2, 1, 0, -323.0),
    (1, 1, -1, 0, 299.0),
    (2, 0, 3, 0, 294.0),
];

/// Geometric longitude of the Moon, mean equinox of date, degrees.
pub fn moon_longitude(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean_longitude =
        218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0 - t4 / 65194000.0;
    let elongation =
        297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0 - t4 / 113065000.0;
    let sun_anomaly = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0;
    let moon_anomaly =
        134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0 - t4 / 14712000.0;
    let latitude_arg =
        93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0 + t4 / 863310000.0;

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let (d, m, mp, f) = (
        elongation.to_radians(),
        sun_anomaly.to_radians(),
        moon_anomaly.to_radians(),
        latitude_arg.to_radians(),
    );

    let mut sum: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&(nd, nm, nmp, nf, amplitude)| {
            let arg = nd as f64 * d + nm as f64 * m + nmp as f64 * mp + nf as f64 * f;
            let eccentricity = match nm.abs() {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            amplitude * eccentricity * arg.sin()
        })
        .sum();

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    sum += 3958.0 * a1.sin()
        + 1962.0 * (mean_longitude - latitude_arg).to_radians().sin()
        + 318.0 * a2.sin();

    mean_longitude + sum / 1_000_000.0
}

/// Mean longitude of the Moon's ascending node (Rahu), degrees.
///
/// Meeus eq. 47.7.
pub fn mean_node_longitude(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    125.0445479 - 1934.1362891 * t + 0.0020754 * t2 + t3 / 467441.0 - t4 / 60616000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeus_example_47a() {
        // 1992-04-12 0h TD: geometric longitude 133.162655
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let lon = moon_longitude(t).rem_euclid(360.0);
        assert!((lon - 133.162655).abs() < 0.01, "{}", lon);
    }

    #[test]
    fn test_mean_node_at_j2000() {
        assert_eq!(mean_node_longitude(0.0), 125.0445479);
    }

    #[test]
    fn test_mean_node_regresses() {
        assert!(mean_node_longitude(0.01) < mean_node_longitude(0.0));
    }
}
