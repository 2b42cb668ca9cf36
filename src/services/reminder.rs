// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user reminders anchored to Ramadan days.

use crate::error::{AppError, Result};
use crate::models::{CreateReminder, Reminder, UpdateReminder};
use crate::store::{ScheduleRepository, UserDirectory};
use dashmap::DashMap;
use std::sync::Arc;

/// Manages reminders and their referential integrity: every stored
/// reminder points at an existing user and an existing Ramadan day, both
/// checked at create time and re-checked when an update changes them.
pub struct ReminderService {
    users: Arc<UserDirectory>,
    schedule: Arc<ScheduleRepository>,
    reminders: DashMap<String, Reminder>,
}

impl ReminderService {
    pub fn new(users: Arc<UserDirectory>, schedule: Arc<ScheduleRepository>) -> Self {
        Self {
            users,
            schedule,
            reminders: DashMap::new(),
        }
    }

    /// Validate references, assign a fresh id, and store.
    pub fn create(&self, data: CreateReminder) -> Result<Reminder> {
        if !self.users.contains(&data.user_id) {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if !self.schedule.contains(&data.ramadan_day_id) {
            return Err(AppError::NotFound("Ramadan day not found".to_string()));
        }

        let reminder = Reminder {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: data.user_id,
            ramadan_day_id: data.ramadan_day_id,
            reminder_type: data.reminder_type,
            minutes_before: data.minutes_before,
            is_active: data.is_active,
        };
        self.reminders.insert(reminder.id.clone(), reminder.clone());
        Ok(reminder)
    }

    /// Shallow-merge an update over the stored reminder.
    ///
    /// `Ok(None)` if the id is unknown; changed references are re-validated
    /// before anything is written.
    pub fn update(&self, id: &str, data: UpdateReminder) -> Result<Option<Reminder>> {
        if !self.reminders.contains_key(id) {
            return Ok(None);
        }
        if let Some(user_id) = &data.user_id {
            if !self.users.contains(user_id) {
                return Err(AppError::NotFound("User not found".to_string()));
            }
        }
        if let Some(day_id) = &data.ramadan_day_id {
            if !self.schedule.contains(day_id) {
                return Err(AppError::NotFound("Ramadan day not found".to_string()));
            }
        }

        match self.reminders.get_mut(id) {
            Some(mut entry) => {
                entry.value_mut().apply(data);
                Ok(Some(entry.value().clone()))
            }
            None => Ok(None),
        }
    }

    /// Remove a reminder; true if one existed. No cascading effects.
    pub fn delete(&self, id: &str) -> bool {
        self.reminders.remove(id).is_some()
    }

    /// All reminders for a user; empty for unknown users (no existence
    /// check).
    pub fn reminders_for_user(&self, user_id: &str) -> Vec<Reminder> {
        self.reminders
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Reminder> {
        self.reminders.get(id).map(|entry| entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotificationPreference, RamadanDay, ReminderType, User};

    fn fixture() -> (ReminderService, String) {
        let users = Arc::new(UserDirectory::new());
        users.insert(User {
            id: "u1".to_string(),
            name: "Aisha".to_string(),
            email: "aisha@example.com".to_string(),
            location_id: "1".to_string(),
            preferred_language: "en".to_string(),
            notification_preference: NotificationPreference::Push,
        });

        let schedule = Arc::new(ScheduleRepository::new());
        schedule.append_run(vec![RamadanDay {
            id: "day-1".to_string(),
            date: "2025-03-01".to_string(),
            day_of_ramadan: 1,
            sahur_start: "04:00".to_string(),
            sahur_end: "05:30".to_string(),
            fajr_time: "05:30".to_string(),
            iftar_time: "18:45".to_string(),
            maghrib_time: "18:45".to_string(),
            location_id: "1".to_string(),
        }]);

        let service = ReminderService::new(users, schedule);
        let reminder = service
            .create(CreateReminder {
                user_id: "u1".to_string(),
                ramadan_day_id: "day-1".to_string(),
                reminder_type: ReminderType::Sahur,
                minutes_before: 15,
                is_active: true,
            })
            .unwrap();
        (service, reminder.id)
    }

    #[test]
    fn test_create_rejects_missing_user() {
        let (service, _) = fixture();
        let err = service
            .create(CreateReminder {
                user_id: "missing".to_string(),
                ramadan_day_id: "day-1".to_string(),
                reminder_type: ReminderType::Sahur,
                minutes_before: 15,
                is_active: true,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "User not found"));
    }

    #[test]
    fn test_create_rejects_missing_day() {
        let (service, _) = fixture();
        let err = service
            .create(CreateReminder {
                user_id: "u1".to_string(),
                ramadan_day_id: "missing".to_string(),
                reminder_type: ReminderType::Iftar,
                minutes_before: 5,
                is_active: true,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Ramadan day not found"));
    }

    #[test]
    fn test_update_merges_and_revalidates() {
        let (service, id) = fixture();

        let updated = service
            .update(
                &id,
                UpdateReminder {
                    minutes_before: Some(30),
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.minutes_before, 30);
        assert!(!updated.is_active);
        // Untouched fields survive the merge.
        assert_eq!(updated.reminder_type, ReminderType::Sahur);

        let err = service
            .update(
                &id,
                UpdateReminder {
                    ramadan_day_id: Some("missing".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        // Failed validation leaves the record untouched.
        assert_eq!(service.get(&id).unwrap().ramadan_day_id, "day-1");
    }

    #[test]
    fn test_update_unknown_id_is_none() {
        let (service, _) = fixture();
        assert!(service.update("missing", UpdateReminder::default()).unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let (service, id) = fixture();
        assert!(service.delete(&id));
        assert!(!service.delete(&id));
        assert!(service.get(&id).is_none());
    }

    #[test]
    fn test_reminders_for_user_filters() {
        let (service, _) = fixture();
        assert_eq!(service.reminders_for_user("u1").len(), 1);
        assert!(service.reminders_for_user("someone-else").is_empty());
    }
}
