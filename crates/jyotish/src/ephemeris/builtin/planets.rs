//! Sun and Keplerian planets.

use crate::ephemeris::types::{Body, JulianDay, DAYS_PER_CENTURY, J2000_JD};

/// Light travel time for one astronomical unit, days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Aberration of the Sun's longitude, degrees.
const SOLAR_ABERRATION_DEG: f64 = -0.005_69;

/// Keplerian elements at J2000 with rates per Julian century.
///
/// Order: a (AU), e, I, L, long. perihelion, long. ascending node (degrees),
/// each as `[value, rate]`. Mean ecliptic and equinox of J2000, valid
/// 1800-2050 (Standish, "Keplerian Elements for Approximate Positions of the
/// Major Planets").
#[rustfmt::skip]
const ELEMENTS: &[(Body, [[f64; 2]; 6])] = &[
    (Body::Mercury, [
        [0.38709927, 0.00000037], [0.20563593, 0.00001906], [7.00497902, -0.00594749],
        [252.25032350, 149472.67411175], [77.45779628, 0.16047689], [48.33076593, -0.12534081],
    ]),
    (Body::Venus, [
        [0.72333566, 0.00000390], [0.00677672, -0.00004107], [3.39467605, -0.00078890],
        [181.97909950, 58517.81538729], [131.60246718, 0.00268329], [76.67984255, -0.27769418],
    ]),
    (Body::Mars, [
        [1.52371034, 0.00001847], [0.09339410, 0.00007882], [1.84969142, -0.00813131],
        [-4.55343205, 19140.30268499], [-23.94362959, 0.44441088], [49.55953891, -0.29257343],
    ]),
    (Body::Jupiter, [
        [5.20288700, -0.00011607], [0.04838624, -0.00013253], [1.30439695, -0.00183714],
        [34.39644051, 3034.74612775], [14.72847983, 0.21252668], [100.47390909, 0.20469106],
    ]),
    (Body::Saturn, [
        [9.53667594, -0.00125060], [0.05386179, -0.00050991], [2.48599187, 0.00193609],
        [49.95424423, 1222.49362201], [92.59887831, -0.41897216], [113.66242448, -0.28867794],
    ]),
];

/// Earth-Moon barycenter.
#[rustfmt::skip]
const EARTH_MOON_BARYCENTER: [[f64; 2]; 6] = [
    [1.00000261, 0.00000562], [0.01671123, -0.00004392], [-0.00001531, -0.01294668],
    [100.46457166, 35999.37244981], [102.93768193, 0.32327364], [0.0, 0.0],
];

/// Geometric longitude of the Sun, mean equinox of date, degrees.
///
/// Meeus, "Astronomical Algorithms", ch. 25 (low accuracy), with aberration.
pub fn sun_longitude(t: f64) -> f64 {
    let mean_longitude = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let mean_anomaly = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * mean_anomaly.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * mean_anomaly).sin()
        + 0.000289 * (3.0 * mean_anomaly).sin();
    mean_longitude + center + SOLAR_ABERRATION_DEG
}

/// Heliocentric ecliptic position (AU), mean equinox of J2000.
fn heliocentric_position(elements: &[[f64; 2]; 6], jd: f64) -> [f64; 3] {
    let t = (jd - J2000_JD) / DAYS_PER_CENTURY;
    let at = |i: usize| elements[i][0] + elements[i][1] * t;

    let a = at(0);
    let e = at(1);
    let inclination = at(2).to_radians();
    let mean_longitude = at(3);
    let perihelion = at(4);
    let node = at(5);

    let arg_perihelion = (perihelion - node).to_radians();
    let mean_anomaly =
        ((mean_longitude - perihelion + 180.0).rem_euclid(360.0) - 180.0).to_radians();
    let eccentric_anomaly = solve_kepler(mean_anomaly, e);

    let x_orb = a * (eccentric_anomaly.cos() - e);
    let y_orb = a * (1.0 - e * e).sqrt() * eccentric_anomaly.sin();

    let (sin_w, cos_w) = arg_perihelion.sin_cos();
    let (sin_n, cos_n) = node.to_radians().sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();

    [
        (cos_w * cos_n - sin_w * sin_n * cos_i) * x_orb
            + (-sin_w * cos_n - cos_w * sin_n * cos_i) * y_orb,
        (cos_w * sin_n + sin_w * cos_n * cos_i) * x_orb
            + (-sin_w * sin_n + cos_w * cos_n * cos_i) * y_orb,
        (sin_w * sin_i) * x_orb + (cos_w * sin_i) * y_orb,
    ]
}

/// Newton iteration on `E - e sin E = M`, radians.
fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..30 {
        let delta = (ecc - e * ecc.sin() - mean_anomaly) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

/// Geocentric ecliptic longitude (degrees) referred to the J2000 equinox,
/// corrected for light time. `None` for bodies without orbital elements.
pub fn geocentric_longitude_j2000(body: Body, jd: JulianDay) -> Option<f64> {
    let elements = ELEMENTS
        .iter()
        .find(|(b, _)| *b == body)
        .map(|(_, el)| el)?;

    let earth = heliocentric_position(&EARTH_MOON_BARYCENTER, jd.0);
    let mut planet = heliocentric_position(elements, jd.0);
    let mut geo = [planet[0] - earth[0], planet[1] - earth[1], planet[2] - earth[2]];

    let distance = (geo[0] * geo[0] + geo[1] * geo[1] + geo[2] * geo[2]).sqrt();
    planet = heliocentric_position(elements, jd.0 - distance * LIGHT_TIME_DAYS_PER_AU);
    geo = [planet[0] - earth[0], planet[1] - earth[1], planet[2] - earth[2]];

    Some(geo[1].atan2(geo[0]).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kepler_circular_orbit() {
        assert_eq!(solve_kepler(1.0, 0.0), 1.0);
    }

    #[test]
    fn test_kepler_residual() {
        let (m, e) = (0.3, 0.2);
        let ecc = solve_kepler(m, e);
        assert!((ecc - e * ecc.sin() - m).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_body_has_no_elements() {
        assert!(geocentric_longitude_j2000(Body::Moon, JulianDay(J2000_JD)).is_none());
    }
}
