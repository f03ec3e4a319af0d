use crate::coordinates::{wrap_degrees, HorizontalPosition};
use serde_derive::{Deserialize, Serialize};

pub const DEFAULT_TOLERANCE_DEGREES: f64 = 15.0;

/// distance reported when the device direction is unknown
pub const UNKNOWN_DISTANCE_DEGREES: f64 = 180.0;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointingComparison {
    pub is_pointing: bool,
    /// flat euclidean combination of the azimuth and altitude errors, in degrees
    pub angular_distance_degrees: f64,
}

impl PointingComparison {
    pub const UNKNOWN: PointingComparison = PointingComparison {
        is_pointing: false,
        angular_distance_degrees: UNKNOWN_DISTANCE_DEGREES,
    };
}

/// one reading of the platform orientation sensors, all angles in degrees
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceOrientation {
    /// rotation around the z axis, 0 = north when `absolute`
    pub alpha: Option<f64>,
    /// front-to-back tilt, [-180, 180]
    pub beta: Option<f64>,
    /// left-to-right tilt, [-90, 90]
    pub gamma: Option<f64>,
    pub absolute: bool,
    /// true compass heading reported by platforms that provide one (webkitCompassHeading)
    #[serde(default)]
    pub compass_heading: Option<f64>,
}

impl DeviceOrientation {
    /// compass heading of the device, preferring the platform's own heading over alpha
    pub fn heading(&self) -> Option<f64> {
        self.compass_heading.or(self.alpha)
    }

    /// how high above the horizon the device is pointing
    pub fn altitude(&self) -> Option<f64> {
        device_altitude(self.beta)
    }

    pub fn compare_with(&self, target: &HorizontalPosition, tolerance: f64) -> PointingComparison {
        compare_pointing(
            self.heading(),
            self.altitude(),
            target.azimuth,
            target.altitude,
            tolerance,
        )
    }
}

/// converts the front-to-back tilt of a device into an altitude: upright (beta = 90) looks at the
/// horizon, tilted back past vertical looks up into the sky
pub fn device_altitude(beta: Option<f64>) -> Option<f64> {
    beta.map(|b| 90.0 - b)
}

/// scores how close a device direction is to a target on the sky
/// the azimuth difference wraps around north, so 359 vs 1 is 2 degrees apart
/// an unknown or non-finite device angle is never pointing, at distance 180
pub fn compare_pointing(
    device_azimuth: Option<f64>,
    device_altitude: Option<f64>,
    target_azimuth: f64,
    target_altitude: f64,
    tolerance: f64,
) -> PointingComparison {
    let (device_azimuth, device_altitude) = match (device_azimuth, device_altitude) {
        (Some(az), Some(alt)) if az.is_finite() && alt.is_finite() => (az, alt),
        _ => return PointingComparison::UNKNOWN,
    };

    let azimuth_diff = wrap_degrees(device_azimuth - target_azimuth);
    let altitude_diff = device_altitude - target_altitude;
    let distance = azimuth_diff.hypot(altitude_diff);
    if !distance.is_finite() {
        return PointingComparison::UNKNOWN;
    }

    PointingComparison {
        is_pointing: distance <= tolerance,
        angular_distance_degrees: distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::Rng;

    #[test]
    fn azimuth_wraps_around_north() {
        let c = compare_pointing(Some(359.0), Some(10.0), 1.0, 10.0, 5.0);
        assert!(c.is_pointing);
        assert_abs_diff_eq!(c.angular_distance_degrees, 2.0, epsilon = 1e-9);

        let c = compare_pointing(Some(1.0), Some(10.0), 359.0, 10.0, 5.0);
        assert_abs_diff_eq!(c.angular_distance_degrees, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn unknown_device_is_never_pointing() {
        assert_eq!(
            compare_pointing(None, None, 120.0, 30.0, 360.0),
            PointingComparison::UNKNOWN
        );
        let c = compare_pointing(Some(120.0), None, 120.0, 30.0, 15.0);
        assert!(!c.is_pointing);
        assert_eq!(c.angular_distance_degrees, 180.0);
        let c = compare_pointing(Some(f64::NAN), Some(30.0), 120.0, 30.0, 15.0);
        assert_eq!(c, PointingComparison::UNKNOWN);
    }

    #[test]
    fn euclidean_distance_and_tolerance_edge() {
        let c = compare_pointing(Some(103.0), Some(24.0), 100.0, 20.0, 5.0);
        assert_abs_diff_eq!(c.angular_distance_degrees, 5.0, epsilon = 1e-12);
        assert!(c.is_pointing);
        let c = compare_pointing(Some(103.0), Some(24.0), 100.0, 20.0, 4.99);
        assert!(!c.is_pointing);
    }

    #[test]
    fn distance_is_never_negative_and_bounded() {
        let mut rng = rand::thread_rng();
        for _ in 0..2000 {
            let c = compare_pointing(
                Some(rng.gen_range(0.0..360.0)),
                Some(rng.gen_range(-90.0..=90.0)),
                rng.gen_range(0.0..360.0),
                rng.gen_range(-90.0..=90.0),
                DEFAULT_TOLERANCE_DEGREES,
            );
            assert!(c.angular_distance_degrees >= 0.0);
            // at most 180 in azimuth and 180 in altitude
            assert!(c.angular_distance_degrees <= 180.0 * 2f64.sqrt() + 1e-9);
            assert_eq!(c.is_pointing, c.angular_distance_degrees <= DEFAULT_TOLERANCE_DEGREES);
        }
    }

    #[test]
    fn orientation_prefers_compass_heading() {
        let mut o = DeviceOrientation {
            alpha: Some(10.0),
            beta: Some(60.0),
            ..Default::default()
        };
        assert_eq!(o.heading(), Some(10.0));
        assert_eq!(o.altitude(), Some(30.0));
        o.compass_heading = Some(200.0);
        assert_eq!(o.heading(), Some(200.0));
        assert_eq!(DeviceOrientation::default().heading(), None);
    }

    #[test]
    fn device_altitude_from_tilt() {
        assert_eq!(device_altitude(None), None);
        assert_eq!(device_altitude(Some(90.0)), Some(0.0));
        assert_eq!(device_altitude(Some(0.0)), Some(90.0));
        assert_eq!(device_altitude(Some(-30.0)), Some(120.0));
    }

    #[test]
    fn orientation_against_target() {
        let target = HorizontalPosition {
            altitude: 40.0,
            azimuth: 150.0,
            is_visible: true,
            rise_time: None,
            set_time: None,
        };
        let o = DeviceOrientation {
            alpha: Some(160.0),
            beta: Some(50.0),
            absolute: true,
            ..Default::default()
        };
        let c = o.compare_with(&target, 20.0);
        assert!(c.is_pointing);
        assert_abs_diff_eq!(c.angular_distance_degrees, 10.0, epsilon = 1e-9);

        let blind = DeviceOrientation {
            beta: Some(50.0),
            ..Default::default()
        };
        assert_eq!(blind.compare_with(&target, 20.0), PointingComparison::UNKNOWN);
    }
}
