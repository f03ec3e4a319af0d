use crate::coordinates::ObserverLocation;
use crate::error::{Error, Result};
use log::debug;
use serde_derive::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// settings for turning sky positions into scene placement and pointing feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// used when the location provider has nothing better
    pub fallback_location: ObserverLocation,
    /// how close, in degrees, the device has to be to count as pointing at the star
    pub pointing_tolerance_degrees: f64,
    /// below this distance the user is told they are getting warmer
    pub warmer_threshold_degrees: f64,
    /// distance from the observer at which the star is placed in the scene
    pub scene_distance: f64,
    /// where the star is drawn before the first fix is available
    pub default_scene_position: [f64; 3],
    /// how often callers should recompute the position
    pub refresh_interval_secs: u64,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        LocatorConfig {
            fallback_location: ObserverLocation::MELBOURNE,
            pointing_tolerance_degrees: 20.0,
            warmer_threshold_degrees: 45.0,
            scene_distance: 10.0,
            default_scene_position: [8.0, 4.0, -6.0],
            refresh_interval_secs: 60,
        }
    }
}

impl LocatorConfig {
    /// reads a json config file, missing fields take their default values
    pub fn load<P: AsRef<Path>>(path: P) -> Result<LocatorConfig> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: display.clone(),
            source,
        })?;
        let config: LocatorConfig =
            serde_json::from_str(&contents).map_err(|source| Error::Json {
                path: display.clone(),
                source,
            })?;
        debug!("loaded locator config from {}: {:?}", display, config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_locator_view() {
        let c = LocatorConfig::default();
        assert_eq!(c.fallback_location, ObserverLocation::MELBOURNE);
        assert_eq!(c.pointing_tolerance_degrees, 20.0);
        assert_eq!(c.refresh_interval_secs, 60);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"pointing_tolerance_degrees": 7.5,
                "fallback_location": {{"latitude": 51.5, "longitude": -0.1}}}}"#
        )
        .unwrap();
        let c = LocatorConfig::load(file.path()).unwrap();
        assert_eq!(c.pointing_tolerance_degrees, 7.5);
        assert_eq!(c.fallback_location.latitude, 51.5);
        assert_eq!(c.scene_distance, 10.0);
        assert_eq!(c.default_scene_position, [8.0, 4.0, -6.0]);
    }

    #[test]
    fn broken_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"tolerance = 3").unwrap();
        assert!(matches!(
            LocatorConfig::load(file.path()),
            Err(Error::Json { .. })
        ));
        assert!(matches!(
            LocatorConfig::load("/no/such/config.json"),
            Err(Error::Io { .. })
        ));
    }
}
