use crate::coordinates::normalize_degrees;
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian date of the J2000.0 epoch, 2000-01-01 12:00 TT
pub const J2000: f64 = 2451545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// converts a UTC date and time into a Julian date, using the Gregorian calendar algorithm
/// (January and February are counted as months 13 and 14 of the previous year)
pub fn julian_date(time: &DateTime<Utc>) -> f64 {
    let mut y = time.year() as f64;
    let mut m = time.month() as f64;
    let day = time.day() as f64;
    let hour = time.hour() as f64
        + time.minute() as f64 / 60.0
        + (time.second() as f64 + time.nanosecond() as f64 * 1e-9) / 3600.0;

    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + hour / 24.0 + b
        - 1524.5
}

/// Greenwich mean sidereal time in degrees, [0, 360)
pub fn greenwich_mean_sidereal_time(time: &DateTime<Utc>) -> f64 {
    let d = julian_date(time) - J2000;
    let t = d / DAYS_PER_JULIAN_CENTURY;
    let gmst = 280.46061837 + 360.98564736629 * d + 0.000387933 * t * t
        - t * t * t / 38710000.0;
    normalize_degrees(gmst)
}

/// local sidereal time in degrees, [0, 360)
/// longitude - observer longitude in degrees, east-positive
pub fn local_sidereal_time(time: &DateTime<Utc>, longitude: f64) -> f64 {
    normalize_degrees(greenwich_mean_sidereal_time(time) + longitude)
}
