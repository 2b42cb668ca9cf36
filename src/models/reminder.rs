//! Reminder model for storage and API.

use serde::{Deserialize, Serialize};

/// Which meal a reminder is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderType {
    Sahur,
    Iftar,
}

/// A per-user reminder anchored to one Ramadan day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub user_id: String,
    pub ramadan_day_id: String,
    #[serde(rename = "type")]
    pub reminder_type: ReminderType,
    pub minutes_before: u32,
    pub is_active: bool,
}

/// Payload for creating a reminder.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReminder {
    pub user_id: String,
    pub ramadan_day_id: String,
    #[serde(rename = "type")]
    pub reminder_type: ReminderType,
    pub minutes_before: u32,
    pub is_active: bool,
}

/// Partial update for a reminder; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReminder {
    pub user_id: Option<String>,
    pub ramadan_day_id: Option<String>,
    #[serde(rename = "type")]
    pub reminder_type: Option<ReminderType>,
    pub minutes_before: Option<u32>,
    pub is_active: Option<bool>,
}

impl Reminder {
    /// Apply a partial update in place. Referential checks against the
    /// user directory and schedule repository happen in the service before
    /// this is called.
    pub fn apply(&mut self, update: UpdateReminder) {
        if let Some(user_id) = update.user_id {
            self.user_id = user_id;
        }
        if let Some(ramadan_day_id) = update.ramadan_day_id {
            self.ramadan_day_id = ramadan_day_id;
        }
        if let Some(reminder_type) = update.reminder_type {
            self.reminder_type = reminder_type;
        }
        if let Some(minutes_before) = update.minutes_before {
            self.minutes_before = minutes_before;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }
}
