pub mod catalog;
pub mod compass;
pub mod config;
pub mod coordinates;
pub mod error;
pub mod locator;
pub mod pointing;

pub use catalog::star::StarCatalogEntry;
pub use catalog::{sirius, StarCatalog};
pub use compass::compass_label;
pub use config::LocatorConfig;
pub use coordinates::direction::{to_direction_vector, DirectionVector3D};
pub use coordinates::sidereal::{greenwich_mean_sidereal_time, julian_date, local_sidereal_time};
pub use coordinates::{horizontal_position, HorizontalPosition, ObservationTime, ObserverLocation};
pub use error::{Error, Result};
pub use locator::{Guidance, SkyFix};
pub use pointing::{compare_pointing, device_altitude, DeviceOrientation, PointingComparison};
