use serde::{Deserialize, Serialize};

/// A WGS84 coordinate. Polygon rings and map centers both use this ordering
/// (latitude first), matching the polygon resource's `[[lat, lng], ...]` wire format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Bounding box of a polygon ring as (min_lat, min_lng, max_lat, max_lng).
/// `None` for rings with fewer than 3 vertices.
pub fn ring_bounds(ring: &[[f64; 2]]) -> Option<(f64, f64, f64, f64)> {
    if ring.len() < 3 {
        return None;
    }
    let (mut min_lat, mut min_lng, mut max_lat, mut max_lng) = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
    for &[lat, lng] in ring {
        min_lat = min_lat.min(lat);
        min_lng = min_lng.min(lng);
        max_lat = max_lat.max(lat);
        max_lng = max_lng.max(lng);
    }
    Some((min_lat, min_lng, max_lat, max_lng))
}

/// Point-in-polygon test for a boundary ring, with a bounding-box pre-check so
/// per-click hit-testing across all district rings stays cheap.
pub fn ring_contains(ring: &[[f64; 2]], point: LatLng) -> bool {
    let Some((min_lat, min_lng, max_lat, max_lng)) = ring_bounds(ring) else {
        return false;
    };
    if point.lat < min_lat || point.lat > max_lat || point.lng < min_lng || point.lng > max_lng {
        return false;
    }

    // Even-odd ray cast along the +lng axis.
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let [lat_i, lng_i] = ring[i];
        let [lat_j, lng_j] = ring[j];
        if (lat_i > point.lat) != (lat_j > point.lat)
            && point.lng < (lng_j - lng_i) * (point.lat - lat_i) / (lat_j - lat_i) + lng_i
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &[[f64; 2]] = &[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]];

    #[test]
    fn ring_contains_interior_point() {
        assert!(ring_contains(SQUARE, LatLng::new(5.0, 5.0)));
    }

    #[test]
    fn ring_contains_rejects_exterior_point() {
        assert!(!ring_contains(SQUARE, LatLng::new(15.0, 5.0)));
        assert!(!ring_contains(SQUARE, LatLng::new(5.0, -1.0)));
    }

    #[test]
    fn ring_contains_concave_ring() {
        // L-shape: the notch around (7, 7) is outside.
        let ring = &[
            [0.0, 0.0],
            [0.0, 10.0],
            [5.0, 10.0],
            [5.0, 5.0],
            [10.0, 5.0],
            [10.0, 0.0],
        ];
        assert!(ring_contains(ring, LatLng::new(2.0, 8.0)));
        assert!(ring_contains(ring, LatLng::new(8.0, 2.0)));
        assert!(!ring_contains(ring, LatLng::new(7.0, 7.0)));
    }

    #[test]
    fn degenerate_ring_contains_nothing() {
        assert!(!ring_contains(&[], LatLng::new(0.0, 0.0)));
        assert!(!ring_contains(&[[0.0, 0.0], [1.0, 1.0]], LatLng::new(0.5, 0.5)));
    }

    #[test]
    fn ring_bounds_covers_all_vertices() {
        let ring = &[[37.5, 127.0], [37.6, 126.9], [37.55, 127.1]];
        assert_eq!(ring_bounds(ring), Some((37.5, 126.9, 37.6, 127.1)));
    }
}
