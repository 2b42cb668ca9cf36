//! Ramadan day model.

use serde::{Deserialize, Serialize};

/// One day of a generated Ramadan schedule.
///
/// Immutable once created: days are only ever produced by a full 30-day
/// generation run and are never updated or deleted afterwards. Clock times
/// are local to the owning location, formatted `HH:MM` in 24-hour notation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RamadanDay {
    pub id: String,
    /// Calendar date, ISO format `YYYY-MM-DD`
    pub date: String,
    /// 1..=30 within one generation run
    pub day_of_ramadan: u32,
    pub sahur_start: String,
    /// Always equal to `fajr_time`
    pub sahur_end: String,
    pub fajr_time: String,
    /// Always equal to `maghrib_time`
    pub iftar_time: String,
    pub maghrib_time: String,
    pub location_id: String,
}
