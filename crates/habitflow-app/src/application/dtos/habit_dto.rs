use serde::{Deserialize, Serialize};

use habitflow_domain::habit::{CompletionRecord, Habit};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub cue_time: String,
    pub cue_location: String,
    pub stack_after: String,
    pub tiny_version: String,
    pub frequency: Vec<u8>,
    pub frequency_label: String,
    pub completions: Vec<CompletionRecord>,
    pub current_streak: u32,
    pub created_at: String,
}

impl From<&Habit> for HabitDto {
    fn from(habit: &Habit) -> Self {
        let plan = habit.plan();
        Self {
            id: habit.id().to_string(),
            user_id: habit.user_id().to_string(),
            name: habit.name().to_string(),
            description: habit.description().to_string(),
            cue_time: plan.cue_time.clone(),
            cue_location: plan.cue_location.clone(),
            stack_after: plan.stack_after.clone(),
            tiny_version: plan.tiny_version.clone(),
            frequency: habit.schedule().days().collect(),
            frequency_label: habit.schedule().describe(),
            completions: habit.completions().records(),
            current_streak: habit.current_streak(),
            created_at: habit.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitListDto {
    pub count: usize,
    pub habits: Vec<HabitDto>,
}

impl HabitListDto {
    pub fn from_habits(habits: &[Habit]) -> Self {
        Self {
            count: habits.len(),
            habits: habits.iter().map(HabitDto::from).collect(),
        }
    }
}

/// Outcome of any completion mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResultDto {
    pub current_streak: u32,
    pub habit: HabitDto,
}
