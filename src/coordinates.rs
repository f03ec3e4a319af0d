pub mod direction;
pub mod sidereal;

use crate::catalog::star::StarCatalogEntry;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use log::trace;
use serde_derive::{Deserialize, Serialize};

/// below this, cos(lat)*cos(alt) is treated as zero and the azimuth is undefined
const AZIMUTH_DENOMINATOR_EPSILON: f64 = 1e-12;

/// the civil timestamp a position is computed for
pub type ObservationTime = DateTime<Utc>;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverLocation {
    /// degrees, [-90, 90]
    pub latitude: f64,
    /// degrees, [-180, 180], east-positive
    pub longitude: f64,
}

impl ObserverLocation {
    /// Melbourne, Australia. Used when no real reading is available.
    pub const MELBOURNE: ObserverLocation = ObserverLocation {
        latitude: -37.8136,
        longitude: 144.9631,
    };

    pub fn new(latitude: f64, longitude: f64) -> Result<ObserverLocation> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLocation {
                latitude,
                longitude,
            });
        }
        Ok(ObserverLocation {
            latitude,
            longitude,
        })
    }
}

/// where a star is on the observer's sky at a given moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalPosition {
    /// degrees above the horizon, [-90, 90]
    pub altitude: f64,
    /// degrees clockwise from north, [0, 360)
    pub azimuth: f64,
    /// altitude > 0
    pub is_visible: bool,
    /// approximate time of day of rising, "HH:MM"; None if the star never crosses the horizon
    pub rise_time: Option<String>,
    pub set_time: Option<String>,
}

/// maps any finite angle into [0, 360)
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds up to 360.0 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// maps any finite angle into [-180, 180]
pub fn wrap_degrees(angle: f64) -> f64 {
    let a = normalize_degrees(angle);
    if a > 180.0 {
        a - 360.0
    } else {
        a
    }
}

/// hour angle in degrees, [-180, 180], measured westward from the meridian
/// lst - local sidereal time in degrees
/// right_ascension - in hours
pub fn hour_angle(lst: f64, right_ascension: f64) -> f64 {
    wrap_degrees(lst - right_ascension * 15.0)
}

/// computes the altitude and azimuth of a star as seen from the given location at the given time,
/// together with approximate rise and set times
/// at a pole the azimuth is 0 and the altitude is +-declination (every direction is north or south)
pub fn horizontal_position(
    star: &StarCatalogEntry,
    location: &ObserverLocation,
    time: &ObservationTime,
) -> HorizontalPosition {
    let lst = sidereal::local_sidereal_time(time, location.longitude);
    let ha = hour_angle(lst, star.right_ascension);

    let (altitude, azimuth) = altitude_azimuth(location.latitude, star.declination, ha);
    let (rise_time, set_time) = match rise_set_hours(star, location, lst) {
        Some((rise, set)) => (Some(format_hhmm(rise)), Some(format_hhmm(set))),
        None => (None, None),
    };

    trace!(
        "{} at lst {:.4}: ha {:.4}, alt {:.4}, az {:.4}",
        star.name,
        lst,
        ha,
        altitude,
        azimuth
    );

    HorizontalPosition {
        altitude,
        azimuth,
        is_visible: altitude > 0.0,
        rise_time,
        set_time,
    }
}

/// spherical triangle solution for (altitude, azimuth), all in degrees
/// ha - hour angle in degrees, positive west of the meridian
fn altitude_azimuth(latitude: f64, declination: f64, ha: f64) -> (f64, f64) {
    let lat = latitude.to_radians();
    let dec = declination.to_radians();
    let ha = ha.to_radians();

    let sin_alt = (lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos()).clamp(-1.0, 1.0);
    let alt = sin_alt.asin();

    // at a pole, or with the star at the zenith/nadir, every azimuth is the same direction
    let denominator = lat.cos() * alt.cos();
    if denominator.abs() < AZIMUTH_DENOMINATOR_EPSILON {
        return (alt.to_degrees(), 0.0);
    }

    let cos_az = ((dec.sin() - lat.sin() * sin_alt) / denominator).clamp(-1.0, 1.0);
    let mut azimuth = cos_az.acos().to_degrees();
    // past the meridian the star is in the western half of the sky
    if ha.sin() > 0.0 {
        azimuth = 360.0 - azimuth;
    }

    (alt.to_degrees(), normalize_degrees(azimuth))
}

/// hours of the day, [0, 24), at which the star rises and sets, or None when it is circumpolar or
/// never rises at this latitude
fn rise_set_hours(
    star: &StarCatalogEntry,
    location: &ObserverLocation,
    lst: f64,
) -> Option<(f64, f64)> {
    let lat = location.latitude.to_radians();
    let dec = star.declination.to_radians();
    let cos_h0 = -lat.tan() * dec.tan();
    if !(-1.0..=1.0).contains(&cos_h0) {
        return None;
    }
    let h0 = cos_h0.acos().to_degrees();
    let ra = star.right_ascension_degrees();

    let hour_of = |ha: f64| ((ra + ha - lst + location.longitude) / 15.0).rem_euclid(24.0);
    Some((hour_of(-h0), hour_of(h0)))
}

/// formats hours of the day as "HH:MM", with minutes rounded down and wrapped modulo 24h
pub fn format_hhmm(hours: f64) -> String {
    let total_minutes = ((hours * 60.0).floor() as i64).rem_euclid(24 * 60);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
