use nalgebra::Vector3;

/// a direction in the observer's scene frame: +x east, +y up, +z north
pub type DirectionVector3D = Vector3<f64>;

/// converts a horizontal position into a point at `distance` from the observer
/// altitude, azimuth - degrees
pub fn to_direction_vector(altitude: f64, azimuth: f64, distance: f64) -> DirectionVector3D {
    let alt = altitude.to_radians();
    let az = azimuth.to_radians();
    Vector3::new(
        distance * alt.cos() * az.sin(),
        distance * alt.sin(),
        distance * alt.cos() * az.cos(),
    )
}

/// inverse of `to_direction_vector`, returns (altitude, azimuth) in degrees
/// a zero vector maps to (0, 0)
pub fn from_direction_vector(v: &DirectionVector3D) -> (f64, f64) {
    let norm = v.norm();
    if norm == 0.0 {
        return (0.0, 0.0);
    }
    let altitude = (v.y / norm).clamp(-1.0, 1.0).asin().to_degrees();
    let azimuth = super::normalize_degrees(v.x.atan2(v.z).to_degrees());
    (altitude, azimuth)
}
