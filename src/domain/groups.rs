use crate::domain::deadline::normalize_deadline;
use crate::types::{Scope, Task, TaskStatus};
use chrono::NaiveDate;

/// Bucket a task lands in for grouped rendering. Per-day keys carry the
/// calendar day itself so upcoming groups order chronologically instead of
/// by whatever the formatted label happens to sort as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Today,
    Overdue,
    Pending,
    InProgress,
    Cancelled,
    Completed,
    Day(NaiveDate),
}

impl GroupKey {
    /// Fixed presentation rank; per-day groups come after every named group
    /// and sort among themselves by day.
    pub fn rank(self) -> (u8, NaiveDate) {
        let far_past = NaiveDate::MIN;
        match self {
            GroupKey::Today => (0, far_past),
            GroupKey::Overdue => (1, far_past),
            GroupKey::Pending => (2, far_past),
            GroupKey::InProgress => (3, far_past),
            GroupKey::Cancelled => (4, far_past),
            GroupKey::Completed => (5, far_past),
            GroupKey::Day(day) => (6, day),
        }
    }

    pub fn collapsed_by_default(self) -> bool {
        self == GroupKey::Completed
    }

    pub fn label(self, day_label: &dyn Fn(NaiveDate) -> String) -> String {
        match self {
            GroupKey::Today => "Today".to_string(),
            GroupKey::Overdue => "Overdue".to_string(),
            GroupKey::Pending => "Pending".to_string(),
            GroupKey::InProgress => "In Progress".to_string(),
            GroupKey::Cancelled => "Cancelled".to_string(),
            GroupKey::Completed => "Completed".to_string(),
            GroupKey::Day(day) => day_label(day),
        }
    }
}

/// Default locale label for per-day groups, e.g. "Friday 15 March".
pub fn default_day_label(day: NaiveDate) -> String {
    day.format("%A %d %B").to_string()
}

/// Assigns the group key for one task. The status-derived key is the
/// default; date conditions override it under the today and upcoming scopes.
pub fn group_key(task: &Task, scope: Scope, today: NaiveDate) -> GroupKey {
    let by_status = match task.status {
        TaskStatus::Completed => GroupKey::Completed,
        TaskStatus::Cancelled => GroupKey::Cancelled,
        TaskStatus::InProgress => GroupKey::InProgress,
        TaskStatus::Pending => GroupKey::Pending,
    };

    let deadline = normalize_deadline(task.deadline.as_deref());
    match scope {
        Scope::Today => match deadline {
            Some(day) if day < today => GroupKey::Overdue,
            Some(day) if day == today => GroupKey::Today,
            _ => by_status,
        },
        Scope::Upcoming => match deadline {
            Some(day) => GroupKey::Day(day),
            None => by_status,
        },
        Scope::Inbox | Scope::Project => by_status,
    }
}
