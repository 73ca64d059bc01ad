use serde::{Deserialize, Serialize};

pub const MAX_PLAN_FIELD_LENGTH: usize = 120;
pub const MAX_CUE_TIME_LENGTH: usize = 8;

/// Implementation-intention fields attached to a habit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitPlan {
    pub cue_time: String,
    pub cue_location: String,
    pub stack_after: String,
    pub tiny_version: String,
}

impl HabitPlan {
    pub fn new(
        cue_time: Option<&str>,
        cue_location: Option<&str>,
        stack_after: Option<&str>,
        tiny_version: Option<&str>,
    ) -> Self {
        Self {
            cue_time: normalize_plan_field(cue_time, MAX_CUE_TIME_LENGTH),
            cue_location: normalize_plan_field(cue_location, MAX_PLAN_FIELD_LENGTH),
            stack_after: normalize_plan_field(stack_after, MAX_PLAN_FIELD_LENGTH),
            tiny_version: normalize_plan_field(tiny_version, MAX_PLAN_FIELD_LENGTH),
        }
    }
}

/// Trim and cap at `max_chars` characters. Missing values become "".
pub fn normalize_plan_field(value: Option<&str>, max_chars: usize) -> String {
    value
        .map(|v| v.trim().chars().take(max_chars).collect())
        .unwrap_or_default()
}
