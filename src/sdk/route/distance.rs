pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in degrees, via the
/// haversine formula. Performs no range validation; out-of-range inputs
/// are the caller's problem.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DELHI: (f64, f64) = (28.6139, 77.209);
    const JAIPUR: (f64, f64) = (26.9124, 75.7873);
    const GOA: (f64, f64) = (15.2993, 74.1240);

    #[test]
    fn identical_points_are_exactly_zero() {
        assert_eq!(haversine_km(DELHI.0, DELHI.1, DELHI.0, DELHI.1), 0.0);
        assert_eq!(haversine_km(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = haversine_km(DELHI.0, DELHI.1, GOA.0, GOA.1);
        let ba = haversine_km(GOA.0, GOA.1, DELHI.0, DELHI.1);
        assert_relative_eq!(ab, ba, max_relative = 1e-12);
    }

    #[test]
    fn known_city_distances() {
        // Road-atlas figures: Delhi-Jaipur about 240 km as the crow
        // flies, Delhi-Goa about 1710 km.
        let delhi_jaipur = haversine_km(DELHI.0, DELHI.1, JAIPUR.0, JAIPUR.1);
        assert!((230.0..250.0).contains(&delhi_jaipur), "{delhi_jaipur}");

        let delhi_goa = haversine_km(DELHI.0, DELHI.1, GOA.0, GOA.1);
        assert!((1450.0..1550.0).contains(&delhi_goa), "{delhi_goa}");
        assert!(delhi_jaipur < delhi_goa);
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert_relative_eq!(haversine_km(0.0, 0.0, 0.0, 180.0), half, max_relative = 1e-6);
    }
}
