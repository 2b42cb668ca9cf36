// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Astronomical prayer-time calculation.
//!
//! Computes Fajr and Maghrib instants for a calendar date and coordinates
//! from the sun's position: Julian day, solar declination and equation of
//! time, then hour-angle offsets from solar noon for the relevant solar
//! depression angle. Uses the Muslim World League convention of dawn at
//! 18° below the horizon; sunset accounts for refraction and the solar
//! radius (0.833°).

use chrono::{NaiveDate, NaiveTime, TimeDelta};

/// Solar depression angle for Fajr (Muslim World League).
pub const FAJR_ANGLE: f64 = 18.0;

/// Depression angle for sunset: atmospheric refraction plus solar radius.
const SUNSET_ANGLE: f64 = 0.833;

/// Fajr and Maghrib instants for one date, as UTC date-times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerInstants {
    pub fajr: chrono::DateTime<chrono::Utc>,
    pub maghrib: chrono::DateTime<chrono::Utc>,
}

/// Errors from prayer-time calculation.
#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    #[error("sun never reaches {angle}° below the horizon at latitude {latitude} on {date}")]
    SunNeverReachesAngle {
        angle: f64,
        latitude: f64,
        date: NaiveDate,
    },
}

/// Compute Fajr and Maghrib for a date at the given coordinates.
///
/// Pure and deterministic: identical inputs always yield identical output.
/// Fails at extreme latitudes when the sun never crosses the required
/// depression angle (polar day or night).
pub fn prayer_instants(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
) -> Result<PrayerInstants, CalculationError> {
    let jd = julian_day(date);

    let fajr_hours = event_hours(jd, latitude, longitude, FAJR_ANGLE, Event::Dawn)
        .ok_or(CalculationError::SunNeverReachesAngle {
            angle: FAJR_ANGLE,
            latitude,
            date,
        })?;
    let maghrib_hours = event_hours(jd, latitude, longitude, SUNSET_ANGLE, Event::Sunset)
        .ok_or(CalculationError::SunNeverReachesAngle {
            angle: SUNSET_ANGLE,
            latitude,
            date,
        })?;

    Ok(PrayerInstants {
        fajr: utc_instant(date, fajr_hours),
        maghrib: utc_instant(date, maghrib_hours),
    })
}

enum Event {
    Dawn,
    Sunset,
}

/// UTC hours (possibly outside [0, 24)) at which the sun crosses `angle`
/// below the horizon, before or after solar noon.
fn event_hours(jd: f64, latitude: f64, longitude: f64, angle: f64, event: Event) -> Option<f64> {
    // Start from mean solar noon, then refine with the sun's position at
    // the estimated event time. Two passes bring the error under a minute.
    let mut hours = 12.0 - longitude / 15.0;
    for _ in 0..2 {
        let sun = sun_position(jd + hours / 24.0);
        let noon = fix_hour(12.0 - sun.equation_of_time) - longitude / 15.0;
        let offset = hour_angle_offset(angle, latitude, sun.declination)?;
        hours = match event {
            Event::Dawn => noon - offset,
            Event::Sunset => noon + offset,
        };
    }
    Some(hours)
}

/// Sun declination (degrees) and equation of time (hours) at a Julian day.
///
/// Low-precision ephemeris from the Astronomical Almanac; good to well
/// under a minute of time over the current century.
struct SunPosition {
    declination: f64,
    equation_of_time: f64,
}

fn sun_position(jd: f64) -> SunPosition {
    let d = jd - 2451545.0;

    let g = fix_angle(357.529 + 0.98560028 * d); // mean anomaly
    let q = fix_angle(280.459 + 0.98564736 * d); // mean longitude
    let l = fix_angle(q + 1.915 * sin_deg(g) + 0.020 * sin_deg(2.0 * g)); // ecliptic longitude
    let e = 23.439 - 0.00000036 * d; // obliquity

    let declination = asin_deg(sin_deg(e) * sin_deg(l));
    let right_ascension = fix_hour(atan2_deg(cos_deg(e) * sin_deg(l), cos_deg(l)) / 15.0);
    let equation_of_time = q / 15.0 - right_ascension;

    SunPosition {
        declination,
        equation_of_time,
    }
}

/// Hours between solar noon and the sun standing `angle` degrees below the
/// horizon, or `None` when the sun never reaches that depression.
fn hour_angle_offset(angle: f64, latitude: f64, declination: f64) -> Option<f64> {
    let cos_h = (-sin_deg(angle) - sin_deg(latitude) * sin_deg(declination))
        / (cos_deg(latitude) * cos_deg(declination));
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(acos_deg(cos_h) / 15.0)
}

/// Anchor fractional UTC hours to a calendar date.
fn utc_instant(date: NaiveDate, hours: f64) -> chrono::DateTime<chrono::Utc> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    midnight + TimeDelta::milliseconds((hours * 3_600_000.0).round() as i64)
}

/// Julian day at 0h UT for a calendar date.
fn julian_day(date: NaiveDate) -> f64 {
    use chrono::Datelike;

    let mut year = date.year() as f64;
    let mut month = date.month() as f64;
    let day = date.day() as f64;
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }
    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + b - 1524.5
}

fn fix_angle(degrees: f64) -> f64 {
    degrees - 360.0 * (degrees / 360.0).floor()
}

fn fix_hour(hours: f64) -> f64 {
    hours - 24.0 * (hours / 24.0).floor()
}

fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const MECCA: (f64, f64) = (21.4225, 39.8262);
    const SVALBARD: (f64, f64) = (78.2232, 15.6267);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deterministic() {
        let day = date(2025, 3, 1);
        let first = prayer_instants(day, MECCA.0, MECCA.1).unwrap();
        let second = prayer_instants(day, MECCA.0, MECCA.1).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mecca_early_march() {
        // Mecca is UTC+3; expected Fajr around 05:30 local, Maghrib around
        // 18:30 local in early March.
        let times = prayer_instants(date(2025, 3, 1), MECCA.0, MECCA.1).unwrap();

        let fajr_local = times.fajr + TimeDelta::hours(3);
        let maghrib_local = times.maghrib + TimeDelta::hours(3);

        assert_eq!(fajr_local.hour(), 5);
        assert_eq!(maghrib_local.hour(), 18);
        assert!(times.fajr < times.maghrib);
    }

    #[test]
    fn test_fasting_window_is_plausible() {
        // Daylight-ish window between dawn and sunset near the equator
        // should be roughly 12-15 hours.
        let times = prayer_instants(date(2025, 3, 10), -6.2088, 106.8456).unwrap();
        let window = times.maghrib - times.fajr;
        assert!(window > TimeDelta::hours(12));
        assert!(window < TimeDelta::hours(15));
    }

    #[test]
    fn test_polar_day_has_no_fajr() {
        // Midnight sun in Svalbard: the sun never dips 18° below the horizon.
        let result = prayer_instants(date(2025, 6, 21), SVALBARD.0, SVALBARD.1);
        assert!(matches!(
            result,
            Err(CalculationError::SunNeverReachesAngle { .. })
        ));
    }

    #[test]
    fn test_polar_night_has_no_sunset() {
        let result = prayer_instants(date(2025, 12, 21), SVALBARD.0, SVALBARD.1);
        assert!(matches!(
            result,
            Err(CalculationError::SunNeverReachesAngle { .. })
        ));
    }

    #[test]
    fn test_julian_day_epoch() {
        // J2000.0 reference: 2000-01-01 at 0h UT is JD 2451544.5.
        assert_eq!(julian_day(date(2000, 1, 1)), 2451544.5);
    }
}
