//! Location model for storage and API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A city for which Ramadan schedules can be generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub city: String,
    pub country: String,
    /// Degrees north, -90..=90
    pub latitude: f64,
    /// Degrees east, -180..=180
    pub longitude: f64,
    /// IANA timezone name, e.g. "Asia/Riyadh"
    pub timezone: String,
}

/// Payload for creating a location.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLocation {
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(length(min = 1))]
    pub timezone: String,
}

/// Partial update for a location; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLocation {
    pub city: Option<String>,
    pub country: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

impl Location {
    /// Apply a partial update in place.
    pub fn apply(&mut self, update: UpdateLocation) {
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(country) = update.country {
            self.country = country;
        }
        if let Some(latitude) = update.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = update.longitude {
            self.longitude = longitude;
        }
        if let Some(timezone) = update.timezone {
            self.timezone = timezone;
        }
    }
}
