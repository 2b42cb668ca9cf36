//! User model for storage and API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// How the user wants to be notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationPreference {
    Push,
    Email,
    Sms,
    None,
}

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location_id: String,
    pub preferred_language: String,
    pub notification_preference: NotificationPreference,
}

/// Payload for creating a user.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub location_id: String,
    pub preferred_language: String,
    pub notification_preference: NotificationPreference,
}

/// Partial update for a user; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub location_id: Option<String>,
    pub preferred_language: Option<String>,
    pub notification_preference: Option<NotificationPreference>,
}

impl User {
    /// Apply a partial update in place.
    pub fn apply(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(location_id) = update.location_id {
            self.location_id = location_id;
        }
        if let Some(preferred_language) = update.preferred_language {
            self.preferred_language = preferred_language;
        }
        if let Some(notification_preference) = update.notification_preference {
            self.notification_preference = notification_preference;
        }
    }
}
