//! Built-in watchlist of world cities
//!
//! Default locations shown when the application starts without a `--at` or
//! `--search` target. Coordinates are city centers in decimal degrees.

use super::Location;

/// Watchlist entries as (id, name, latitude, longitude)
const WATCHLIST: [(&str, &str, f64, f64); 10] = [
    ("bangalore", "Bangalore, India", 12.9716, 77.5946),
    ("delhi", "New Delhi, India", 28.6139, 77.2090),
    ("beijing", "Beijing, China", 39.9042, 116.4074),
    ("jakarta", "Jakarta, Indonesia", -6.2088, 106.8456),
    ("sao-paulo", "São Paulo, Brazil", -23.5505, -46.6333),
    ("lagos", "Lagos, Nigeria", 6.5244, 3.3792),
    ("mexico-city", "Mexico City, Mexico", 19.4326, -99.1332),
    ("london", "London, UK", 51.5074, -0.1278),
    ("sydney", "Sydney, Australia", -33.8688, 151.2093),
    ("vancouver", "Vancouver, Canada", 49.2827, -123.1207),
];

/// Returns the default watchlist locations in display order
pub fn watchlist() -> Vec<Location> {
    WATCHLIST
        .iter()
        .map(|(id, name, lat, lng)| Location::new(*id, *name, *lat, *lng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watchlist_has_ten_entries() {
        assert_eq!(watchlist().len(), 10);
    }

    #[test]
    fn test_watchlist_ids_are_unique() {
        let locations = watchlist();
        for (i, a) in locations.iter().enumerate() {
            for b in locations.iter().skip(i + 1) {
                assert_ne!(a.id, b.id, "Duplicate watchlist id: {}", a.id);
            }
        }
    }

    #[test]
    fn test_watchlist_coordinates_are_plausible() {
        for location in watchlist() {
            assert!(location.latitude.abs() <= 90.0, "{}", location.id);
            assert!(location.longitude.abs() <= 180.0, "{}", location.id);
        }
    }

    #[test]
    fn test_watchlist_contains_southern_and_western_hemispheres() {
        let locations = watchlist();
        assert!(locations.iter().any(|l| l.latitude < 0.0));
        assert!(locations.iter().any(|l| l.longitude < 0.0));
    }
}
