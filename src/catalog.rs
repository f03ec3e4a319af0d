pub mod star;

use crate::error::{Error, Result};
use log::debug;
use star::StarCatalogEntry;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Sirius (HIP 32349), the brightest star in the night sky and the way to Neverland
pub fn sirius() -> StarCatalogEntry {
    StarCatalogEntry {
        name: String::from("Sirius"),
        nickname: Some(String::from("The Dog Star")),
        destination: Some(String::from("Neverland")),
        // 6h 45m 8.9s
        right_ascension: 6.7525,
        // -16° 42' 58"
        declination: -16.7161,
        magnitude: -1.46,
        color: String::from("#A3C9FF"),
        light_years: Some(8.6),
    }
}

/// a fixed list of stars, either the built-in one or read from a json file holding an array of
/// entries
#[derive(Debug, Clone)]
pub struct StarCatalog {
    stars: Vec<StarCatalogEntry>,
}

impl Default for StarCatalog {
    fn default() -> Self {
        StarCatalog {
            stars: vec![sirius()],
        }
    }
}

impl StarCatalog {
    /// builds a catalog, rejecting it if it is empty or any entry has out of range coordinates
    pub fn new(stars: Vec<StarCatalogEntry>) -> Result<StarCatalog> {
        if stars.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        for s in &stars {
            s.check().map_err(|reason| Error::InvalidCatalogEntry {
                name: s.name.clone(),
                reason,
            })?;
        }
        Ok(StarCatalog { stars })
    }

    pub fn from_json_str(json: &str) -> Result<StarCatalog> {
        let stars: Vec<StarCatalogEntry> =
            serde_json::from_str(json).map_err(|source| Error::Json {
                path: String::from("<inline>"),
                source,
            })?;
        StarCatalog::new(stars)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<StarCatalog> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let file = File::open(path).map_err(|source| Error::Io {
            path: display.clone(),
            source,
        })?;
        let stars: Vec<StarCatalogEntry> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| Error::Json {
                path: display.clone(),
                source,
            })?;
        debug!("read {} stars from {}", stars.len(), display);
        StarCatalog::new(stars)
    }

    /// case-insensitive lookup by name or nickname
    pub fn find(&self, name: &str) -> Result<&StarCatalogEntry> {
        self.stars
            .iter()
            .find(|s| {
                s.name.eq_ignore_ascii_case(name)
                    || s.nickname
                        .as_deref()
                        .map_or(false, |n| n.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| Error::UnknownStar(name.to_string()))
    }

    /// the brightest star, i.e. the one with the smallest magnitude
    pub fn brightest(&self) -> &StarCatalogEntry {
        let mut best = &self.stars[0];
        for s in &self.stars[1..] {
            if s.magnitude < best.magnitude {
                best = s;
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = &StarCatalogEntry> {
        self.stars.iter()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
