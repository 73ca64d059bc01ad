use habitflow_domain::DateInput;

use crate::application::commands::command_handler::Command;

/// Create habit command
#[derive(Debug, Clone)]
pub struct CreateHabitCommand {
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub cue_time: Option<String>,
    pub cue_location: Option<String>,
    pub stack_after: Option<String>,
    pub tiny_version: Option<String>,
    pub frequency: Option<Vec<i64>>,
}

impl Command for CreateHabitCommand {}

/// Update habit command. Plan fields and frequency change only when present.
#[derive(Debug, Clone)]
pub struct UpdateHabitCommand {
    pub habit_id: String,
    pub name: String,
    pub description: Option<String>,
    pub cue_time: Option<String>,
    pub cue_location: Option<String>,
    pub stack_after: Option<String>,
    pub tiny_version: Option<String>,
    pub frequency: Option<Vec<i64>>,
}

impl Command for UpdateHabitCommand {}

#[derive(Debug, Clone)]
pub struct DeleteHabitCommand {
    pub habit_id: String,
}

impl Command for DeleteHabitCommand {}

/// Mark today complete; fails if already done
#[derive(Debug, Clone)]
pub struct CompleteHabitTodayCommand {
    pub habit_id: String,
}

impl Command for CompleteHabitTodayCommand {}

/// Remove today's completion; fails if not done
#[derive(Debug, Clone)]
pub struct UndoHabitTodayCommand {
    pub habit_id: String,
}

impl Command for UndoHabitTodayCommand {}

/// Set the completion state of any past day or today
#[derive(Debug, Clone)]
pub struct SetHabitCompletionCommand {
    pub habit_id: String,
    pub date: DateInput,
    pub completed: bool,
}

impl Command for SetHabitCompletionCommand {}

#[derive(Debug, Clone)]
pub struct DeleteHabitResult {
    pub success: bool,
}
