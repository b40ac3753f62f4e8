//! Sidereal time, ascendant and house cusps.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::ephemeris::provider::EphemerisError;
use crate::ephemeris::types::{normalize_degrees, JulianDay, J2000_JD};

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// Earth Rotation Angle plus the Capitaine et al. (2003) polynomial; UT1 is
/// taken as UTC.
pub fn gmst_degrees(jd: JulianDay) -> f64 {
    let du = jd.0 - J2000_JD;
    let era = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    let t = jd.centuries_since_j2000();
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t * t
        - 0.00000044 * t.powi(3)
        - 0.000029956 * t.powi(4)
        - 0.0000000368 * t.powi(5);
    normalize_degrees(era.to_degrees() + poly_arcsec / 3600.0)
}

/// Mean obliquity of the ecliptic, degrees (Meeus eq. 22.2).
pub fn mean_obliquity_degrees(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

fn check_coordinates(latitude: f64, longitude: f64) -> Result<(), EphemerisError> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(EphemerisError::HouseCalculationFailed {
            message: format!("invalid location lat={latitude} lon={longitude}"),
        });
    }
    Ok(())
}

/// Local sidereal time (radians), latitude (radians) and obliquity (radians).
fn local_frame(jd: JulianDay, latitude: f64, longitude: f64) -> (f64, f64, f64) {
    let lst = normalize_degrees(gmst_degrees(jd) + longitude).to_radians();
    let eps = mean_obliquity_degrees(jd.centuries_since_j2000()).to_radians();
    (lst, latitude.to_radians(), eps)
}

fn ascendant_rad(lst: f64, phi: f64, eps: f64) -> f64 {
    f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin())).rem_euclid(TAU)
}

fn mc_rad(lst: f64, eps: f64) -> f64 {
    f64::atan2(lst.sin(), lst.cos() * eps.cos()).rem_euclid(TAU)
}

/// Tropical ascendant and MC in degrees for an east-positive longitude.
pub fn ascendant_and_mc(jd: JulianDay, latitude: f64, longitude: f64) -> (f64, f64) {
    let (lst, phi, eps) = local_frame(jd, latitude, longitude);
    (
        normalize_degrees(ascendant_rad(lst, phi, eps).to_degrees()),
        normalize_degrees(mc_rad(lst, eps).to_degrees()),
    )
}

/// Equal houses from the ascendant.
pub fn equal_cusps(
    jd: JulianDay,
    latitude: f64,
    longitude: f64,
) -> Result<[f64; 12], EphemerisError> {
    check_coordinates(latitude, longitude)?;
    let (asc, _) = ascendant_and_mc(jd, latitude, longitude);
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_degrees(asc + 30.0 * i as f64);
    }
    Ok(cusps)
}

/// Placidus: time trisection of the diurnal and nocturnal semi-arcs.
///
/// Inside the polar circles the semi-arcs are undefined for part of the
/// ecliptic and the intermediate cusps fall back to Porphyry (quadrant
/// trisection). The ascendant and MC are exact in both cases.
pub fn placidus_cusps(
    jd: JulianDay,
    latitude: f64,
    longitude: f64,
) -> Result<[f64; 12], EphemerisError> {
    check_coordinates(latitude, longitude)?;
    let (lst, phi, eps) = local_frame(jd, latitude, longitude);
    let asc = normalize_degrees(ascendant_rad(lst, phi, eps).to_degrees());
    let mc = normalize_degrees(mc_rad(lst, eps).to_degrees());

    let mut cusps = [0.0; 12];
    cusps[0] = asc;
    cusps[3] = normalize_degrees(mc + 180.0);
    cusps[6] = normalize_degrees(asc + 180.0);
    cusps[9] = mc;

    let polar = phi.abs() >= FRAC_PI_2 - eps;
    if polar {
        log::debug!("Placidus undefined at latitude {latitude}, using Porphyry intermediates");
        let upper = (asc - mc).rem_euclid(360.0) / 3.0;
        let lower = (cusps[3] - asc).rem_euclid(360.0) / 3.0;
        cusps[10] = normalize_degrees(mc + upper);
        cusps[11] = normalize_degrees(mc + 2.0 * upper);
        cusps[1] = normalize_degrees(asc + lower);
        cusps[2] = normalize_degrees(asc + 2.0 * lower);
    } else {
        cusps[10] = placidus_cusp(lst, phi, eps, 1.0 / 3.0, true);
        cusps[11] = placidus_cusp(lst, phi, eps, 2.0 / 3.0, true);
        cusps[1] = placidus_cusp(lst, phi, eps, 2.0 / 3.0, false);
        cusps[2] = placidus_cusp(lst, phi, eps, 1.0 / 3.0, false);
    }

    cusps[4] = normalize_degrees(cusps[10] + 180.0);
    cusps[5] = normalize_degrees(cusps[11] + 180.0);
    cusps[7] = normalize_degrees(cusps[1] + 180.0);
    cusps[8] = normalize_degrees(cusps[2] + 180.0);

    if cusps.iter().any(|c| !c.is_finite()) {
        return Err(EphemerisError::HouseCalculationFailed {
            message: format!("non-finite cusp at lat={latitude} lon={longitude}"),
        });
    }
    Ok(cusps)
}

/// One intermediate Placidus cusp, degrees.
///
/// Above the horizon (cusps 11, 12) the cusp sits `fraction` of its diurnal
/// semi-arc east of the meridian. Below the horizon (cusps 2, 3) it sits
/// `fraction` of its nocturnal semi-arc west of the lower meridian.
fn placidus_cusp(ramc: f64, phi: f64, eps: f64, fraction: f64, above_horizon: bool) -> f64 {
    let target = |semi_arc_day: f64| {
        if above_horizon {
            ramc + fraction * semi_arc_day
        } else {
            ramc + PI - fraction * (PI - semi_arc_day)
        }
    };

    let mut ra = target(FRAC_PI_2);
    for _ in 0..50 {
        let dec = (eps.tan() * ra.sin()).atan();
        let cos_h = (-(dec.tan() * phi.tan())).clamp(-1.0, 1.0);
        let next = target(cos_h.acos());
        let converged = (next - ra).abs() < 1e-10;
        ra = next;
        if converged {
            break;
        }
    }

    normalize_degrees(f64::atan2(ra.sin(), ra.cos() * eps.cos()).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gmst_at_j2000() {
        // 18h 41m 50.5s = 280.46 degrees
        assert!((gmst_degrees(JulianDay(J2000_JD)) - 280.4606).abs() < 0.001);
    }

    #[test]
    fn test_obliquity_at_j2000() {
        assert!((mean_obliquity_degrees(0.0) - 23.439291).abs() < 1e-6);
    }

    #[test]
    fn test_ascendant_on_equator_at_zero_sidereal_time() {
        // With 0 Aries culminating at the equator, 0 Cancer rises.
        let eps = 23.44_f64.to_radians();
        assert!((ascendant_rad(0.0, 0.0, eps).to_degrees() - 90.0).abs() < 1e-9);
        assert!(mc_rad(0.0, eps).abs() < 1e-9);
    }

    #[test]
    fn test_placidus_quadrants_are_ordered() {
        let jd = JulianDay(2_447_892.5);
        let cusps = placidus_cusps(jd, 40.7, -74.0).unwrap();
        let mut total = 0.0;
        for i in 0..12 {
            let arc = (cusps[(i + 1) % 12] - cusps[i]).rem_euclid(360.0);
            assert!(arc > 0.0 && arc < 90.0, "house {} arc {}", i + 1, arc);
            total += arc;
        }
        assert!((total - 360.0).abs() < 1e-6);
    }

    #[test]
    fn test_polar_latitude_falls_back() {
        let cusps = placidus_cusps(JulianDay(J2000_JD), 78.2, 15.6).unwrap();
        assert!(cusps.iter().all(|c| (0.0..360.0).contains(c)));
    }

    #[test]
    fn test_equal_cusps_spacing() {
        let cusps = equal_cusps(JulianDay(J2000_JD), 12.97, 77.59).unwrap();
        for i in 1..12 {
            let arc = (cusps[i] - cusps[i - 1]).rem_euclid(360.0);
            assert!((arc - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rejects_bad_latitude() {
        assert!(placidus_cusps(JulianDay(J2000_JD), 95.0, 0.0).is_err());
    }
}
