use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakDto {
    pub habit_id: String,
    pub habit_name: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_days: u32,
    pub last_completed: Option<String>,
}

/// Streak a completion change would produce, computed without saving
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakPreviewDto {
    pub habit_id: String,
    pub date: String,
    pub completed: bool,
    pub current_streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayHabitDto {
    pub id: String,
    pub name: String,
    pub tiny_version: String,
    pub cue_time: String,
    pub current_streak: u32,
    pub done_today: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayDto {
    pub date: String,
    pub total: usize,
    pub done: usize,
    pub habits: Vec<TodayHabitDto>,
}

/// Completion level of one calendar day across the habits scheduled on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    None,
    Partial,
    Full,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDayDto {
    pub date: String,
    pub scheduled: usize,
    pub completed: usize,
    /// Absent for future days and days with nothing scheduled
    pub status: Option<DayStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonthDto {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDayDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestStreakDto {
    pub habit_id: String,
    pub habit_name: String,
    pub current_streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_habits: usize,
    pub done_today: usize,
    pub best_streak: Option<BestStreakDto>,
    pub completions_last_30_days: usize,
    pub completion_rate: u32,
    pub month_days_logged: usize,
}
