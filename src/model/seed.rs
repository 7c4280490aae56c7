use chrono::NaiveDate;
use log::warn;

use super::Task;

const SEED_JSON: &str = include_str!("../../assets/seed_tasks.json");

/// First day of the week the sample tasks are planned around.
pub fn seed_week_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 2).unwrap_or_default()
}

/// Parse a JSON task list, dropping entries that break the task invariants.
pub fn tasks_from_json(json: &str) -> Result<Vec<Task>, serde_json::Error> {
    let raw: Vec<Task> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .filter(|task| match task.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("dropping seed task '{}': {}", task.id, e);
                false
            }
        })
        .collect())
}

/// The sample tasks shown on first launch.
pub fn sample_tasks() -> Vec<Task> {
    tasks_from_json(SEED_JSON).unwrap_or_else(|e| {
        warn!("failed to parse bundled seed tasks: {}", e);
        Vec::new()
    })
}
