//! Glue between the position engine and whatever shows the star to the user: one `SkyFix` per
//! refresh, pointing checks against it for every orientation reading, and the line of guidance
//! to show for the result.

use crate::catalog::star::StarCatalogEntry;
use crate::compass::compass_label;
use crate::config::LocatorConfig;
use crate::coordinates::direction::{to_direction_vector, DirectionVector3D};
use crate::coordinates::{horizontal_position, HorizontalPosition, ObservationTime, ObserverLocation};
use crate::pointing::{DeviceOrientation, PointingComparison};
use nalgebra::Vector3;
use serde_derive::Serialize;
use std::fmt;

/// everything the scene needs to know about a star at one moment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyFix {
    pub star: String,
    pub location: ObserverLocation,
    pub time: ObservationTime,
    pub position: HorizontalPosition,
    pub scene_position: DirectionVector3D,
    pub compass: &'static str,
}

impl SkyFix {
    pub fn compute(
        star: &StarCatalogEntry,
        location: &ObserverLocation,
        time: &ObservationTime,
        config: &LocatorConfig,
    ) -> SkyFix {
        let position = horizontal_position(star, location, time);
        let scene_position =
            to_direction_vector(position.altitude, position.azimuth, config.scene_distance);
        SkyFix {
            star: star.name.clone(),
            location: *location,
            time: *time,
            compass: compass_label(position.azimuth),
            position,
            scene_position,
        }
    }

    pub fn assess(&self, orientation: &DeviceOrientation, config: &LocatorConfig) -> PointingComparison {
        orientation.compare_with(&self.position, config.pointing_tolerance_degrees)
    }

    /// what to tell the user; pass None when there is no orientation data at all
    pub fn guidance(&self, comparison: Option<&PointingComparison>, config: &LocatorConfig) -> Guidance {
        let altitude = self.position.altitude.round() as i32;
        if !self.position.is_visible {
            return Guidance::BelowHorizon {
                star: self.star.clone(),
            };
        }
        match comparison {
            None => Guidance::LookAt {
                compass: self.compass,
                altitude,
            },
            Some(c) if c.is_pointing => Guidance::Found {
                star: self.star.clone(),
            },
            Some(c) if c.angular_distance_degrees < config.warmer_threshold_degrees => {
                Guidance::Warmer {
                    compass: self.compass,
                    altitude,
                }
            }
            Some(_) => Guidance::Searching {
                star: self.star.clone(),
                compass: self.compass,
                altitude,
            },
        }
    }
}

/// where to draw the star before any fix exists
pub fn default_scene_position(config: &LocatorConfig) -> DirectionVector3D {
    Vector3::from(config.default_scene_position)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guidance {
    BelowHorizon { star: String },
    LookAt { compass: &'static str, altitude: i32 },
    Found { star: String },
    Warmer { compass: &'static str, altitude: i32 },
    Searching { star: String, compass: &'static str, altitude: i32 },
}

impl fmt::Display for Guidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guidance::BelowHorizon { star } => write!(f, "{} is below the horizon right now", star),
            Guidance::LookAt { compass, altitude } => {
                write!(f, "Look {}, {}° above horizon", compass, altitude)
            }
            Guidance::Found { star } => write!(f, "You found Neverland! {} is right there!", star),
            Guidance::Warmer { compass, altitude } => write!(
                f,
                "Point your phone at {}, {}° up. Getting warmer...",
                compass, altitude
            ),
            Guidance::Searching {
                star,
                compass,
                altitude,
            } => write!(
                f,
                "Point your phone at {}, {}° up. Searching for {}...",
                compass, altitude, star
            ),
        }
    }
}
