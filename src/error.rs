use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed json in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// latitude must lie in [-90, 90] and longitude in [-180, 180]
    #[error("invalid observer location: lat {latitude}, lon {longitude}")]
    InvalidLocation { latitude: f64, longitude: f64 },

    #[error("catalog entry {name}: {reason}")]
    InvalidCatalogEntry { name: String, reason: String },

    #[error("no star named {0} in the catalog")]
    UnknownStar(String),

    #[error("the star catalog is empty")]
    EmptyCatalog,
}
