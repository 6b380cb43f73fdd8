use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Whether the point can take part in distance calculations.
    /// Deserialized input skips `new`, so NaN or out-of-range values can reach us.
    pub fn is_usable(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Haversine distance in meters
    pub fn distance_meters_to(&self, other: &Coordinates) -> f64 {
        self.distance_to(other) * 1000.0
    }

    /// Point `meters` due north of this one. Handy for building fixtures at a known spacing.
    pub fn offset_north(&self, meters: f64) -> Coordinates {
        let delta_lat = (meters / 1000.0 / EARTH_RADIUS_KM).to_degrees();
        Coordinates {
            lat: self.lat + delta_lat,
            lng: self.lng,
        }
    }
}

/// Total haversine length of a path in kilometers.
pub fn path_length_km(path: &[Coordinates]) -> f64 {
    path.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}
