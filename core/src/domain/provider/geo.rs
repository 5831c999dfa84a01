use crate::domain::provider::entities::GeoPoint;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (to.lon - from.lon).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Deduplication key, about 11 m resolution.
pub fn coordinate_key(point: GeoPoint) -> String {
    format!("{:.4},{:.4}", point.lat, point.lon)
}

pub fn directions_url(from: GeoPoint, to: GeoPoint) -> String {
    format!(
        "https://www.google.com/maps/dir/{},{}/{},{}",
        from.lat, from.lon, to.lat, to.lon
    )
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delhi_sample_distance() {
        let distance = haversine_km(GeoPoint::new(28.6139, 77.2090), GeoPoint::new(28.7000, 77.3000));
        assert!((distance - 13.0).abs() < 0.5, "got {distance}");
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = GeoPoint::new(19.0760, 72.8777);
        let b = GeoPoint::new(18.5204, 73.8567);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
        assert_eq!(haversine_km(a, a), 0.0);
    }

    #[test]
    fn keys_round_to_four_places() {
        assert_eq!(
            coordinate_key(GeoPoint::new(28.613_91, 77.209_04)),
            coordinate_key(GeoPoint::new(28.613_94, 77.208_96))
        );
        assert_eq!(coordinate_key(GeoPoint::new(1.0, -2.5)), "1.0000,-2.5000");
    }

    #[test]
    fn directions_link() {
        assert_eq!(
            directions_url(GeoPoint::new(1.5, 2.0), GeoPoint::new(3.25, 4.0)),
            "https://www.google.com/maps/dir/1.5,2/3.25,4"
        );
        assert_eq!(round2(12.3456), 12.35);
    }
}
