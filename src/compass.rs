use crate::coordinates::normalize_degrees;

pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// width of one compass point in degrees
const POINT_WIDTH: f64 = 360.0 / 16.0;

/// the nearest of the 16 compass points to an azimuth given in degrees clockwise from north
pub fn compass_label(azimuth: f64) -> &'static str {
    let index = (normalize_degrees(azimuth) / POINT_WIDTH).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_points() {
        assert_eq!(compass_label(0.0), "N");
        assert_eq!(compass_label(90.0), "E");
        assert_eq!(compass_label(180.0), "S");
        assert_eq!(compass_label(270.0), "W");
    }

    #[test]
    fn boundaries_round_to_nearest() {
        assert_eq!(compass_label(359.0), "N");
        assert_eq!(compass_label(348.75), "N");
        assert_eq!(compass_label(348.7), "NNW");
        assert_eq!(compass_label(22.5), "NNE");
        assert_eq!(compass_label(11.24), "N");
        assert_eq!(compass_label(11.25), "NNE");
        assert_eq!(compass_label(176.2), "S");
        assert_eq!(compass_label(218.9), "SW");
    }

    #[test]
    fn out_of_range_azimuths_wrap() {
        assert_eq!(compass_label(360.0), "N");
        assert_eq!(compass_label(-90.0), "W");
        assert_eq!(compass_label(450.0), "E");
    }
}
