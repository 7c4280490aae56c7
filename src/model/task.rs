use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ScheduleError, ScheduleResult};

/// The fixed set of lanes a task can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneId {
    Backend,
    Frontend,
    Qa,
}

impl LaneId {
    pub const ALL: [LaneId; 3] = [LaneId::Backend, LaneId::Frontend, LaneId::Qa];

    pub fn as_str(self) -> &'static str {
        match self {
            LaneId::Backend => "backend",
            LaneId::Frontend => "frontend",
            LaneId::Qa => "qa",
        }
    }

    pub fn lane(self) -> &'static Lane {
        match self {
            LaneId::Backend => &LANES[0],
            LaneId::Frontend => &LANES[1],
            LaneId::Qa => &LANES[2],
        }
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaneId {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "backend" => Ok(LaneId::Backend),
            "frontend" => Ok(LaneId::Frontend),
            "qa" => Ok(LaneId::Qa),
            other => Err(ScheduleError::UnknownLane(other.to_string())),
        }
    }
}

/// A named horizontal track. Static for the lifetime of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub id: LaneId,
    pub label: &'static str,
    /// Accent color for bars in this lane (RGB).
    pub color: [u8; 3],
}

/// Lanes in display order.
pub static LANES: [Lane; 3] = [
    Lane {
        id: LaneId::Backend,
        label: "Backend",
        color: [99, 102, 241], // Indigo
    },
    Lane {
        id: LaneId::Frontend,
        label: "Frontend",
        color: [16, 185, 129], // Emerald
    },
    Lane {
        id: LaneId::Qa,
        label: "QA",
        color: [251, 191, 36], // Amber
    },
];

/// Opaque, unique task identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random id for user-created tasks.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single scheduled task. `start` and `end` are both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(rename = "laneId")]
    pub lane: LaneId,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Task {
    /// Build a task, enforcing a non-empty title and `start <= end`.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        lane: LaneId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ScheduleResult<Self> {
        let task = Self {
            id,
            title: title.into(),
            lane,
            start,
            end,
        };
        task.validate()?;
        Ok(task)
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        if self.title.trim().is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }
        if self.end < self.start {
            return Err(ScheduleError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Inclusive length in days (a single-day task is 1).
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// A creation request coming from the add-task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub lane: LaneId,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl NewTask {
    /// Turn the request into a task with a fresh id. The title is trimmed.
    pub fn into_task(self) -> ScheduleResult<Task> {
        Task::new(
            TaskId::generate(),
            self.title.trim(),
            self.lane,
            self.start,
            self.end,
        )
    }
}
