use serde_derive::{Deserialize, Serialize};

const TRILLION_KM_PER_LIGHT_YEAR: f64 = 9.461;
const TRILLION_MILES_PER_LIGHT_YEAR: f64 = 5.879;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarCatalogEntry {
    /// the name the star is looked up by, e.g. "Sirius"
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    /// where the star "leads"; purely decorative
    #[serde(default)]
    pub destination: Option<String>,
    /// right ascension in hours, [0, 24)
    pub right_ascension: f64,
    /// declination in degrees, [-90, 90]
    pub declination: f64,
    /// the visual brightness of the star in magnitudes
    #[serde(default)]
    pub magnitude: f64,
    /// display color as a hex string, e.g. "#A3C9FF"
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub light_years: Option<f64>,
}

fn default_color() -> String {
    String::from("#FFFFFF")
}

impl StarCatalogEntry {
    pub fn new(name: &str, right_ascension: f64, declination: f64, magnitude: f64) -> StarCatalogEntry {
        StarCatalogEntry {
            name: name.to_string(),
            nickname: None,
            destination: None,
            right_ascension,
            declination,
            magnitude,
            color: default_color(),
            light_years: None,
        }
    }

    /// right ascension converted from hours to degrees
    pub fn right_ascension_degrees(&self) -> f64 {
        self.right_ascension * 15.0
    }

    pub fn distance_trillion_km(&self) -> Option<f64> {
        self.light_years.map(|ly| ly * TRILLION_KM_PER_LIGHT_YEAR)
    }

    pub fn distance_trillion_miles(&self) -> Option<f64> {
        self.light_years.map(|ly| ly * TRILLION_MILES_PER_LIGHT_YEAR)
    }

    /// checks the ranges of the equatorial coordinates, returning the reason on failure
    pub fn check(&self) -> Result<(), String> {
        if !(0.0..24.0).contains(&self.right_ascension) {
            return Err(format!(
                "right ascension {}h is outside [0, 24)",
                self.right_ascension
            ));
        }
        if !(-90.0..=90.0).contains(&self.declination) {
            return Err(format!(
                "declination {} deg is outside [-90, 90]",
                self.declination
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn check_rejects_bad_coordinates() {
        assert!(StarCatalogEntry::new("a", 24.0, 0.0, 0.0).check().is_err());
        assert!(StarCatalogEntry::new("b", 1.0, -91.0, 0.0).check().is_err());
        assert!(StarCatalogEntry::new("c", 23.99, 89.9, 0.0).check().is_ok());
    }

    #[test]
    fn distance_conversions() {
        let mut s = StarCatalogEntry::new("d", 1.0, 1.0, 1.0);
        assert_eq!(s.distance_trillion_km(), None);
        s.light_years = Some(2.0);
        assert_abs_diff_eq!(s.distance_trillion_km().unwrap(), 18.922, epsilon = 1e-9);
        assert_abs_diff_eq!(s.distance_trillion_miles().unwrap(), 11.758, epsilon = 1e-9);
    }
}
