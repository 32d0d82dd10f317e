use crate::errors::TareaError;
use crate::types::{Scope, StatusTab, TaskStatus};
use chrono::{Local, NaiveDate, SecondsFormat, Utc};
use std::path::PathBuf;

pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The one wall-clock read per derivation pass. Everything below the
/// service boundary takes the day as a value.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn find_tarea_root() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        if dir.join(".tarea").exists() {
            return Some(dir);
        }
        let parent = dir.parent()?.to_path_buf();
        if parent == dir {
            return None;
        }
        dir = parent;
    }
}

pub fn get_repo_root() -> PathBuf {
    find_tarea_root()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

pub fn parse_scope(raw: &str) -> Result<Scope, TareaError> {
    match raw {
        "inbox" => Ok(Scope::Inbox),
        "today" => Ok(Scope::Today),
        "upcoming" => Ok(Scope::Upcoming),
        "project" => Ok(Scope::Project),
        _ => Err(TareaError::validation(
            "scope must be one of: inbox, today, upcoming, project",
        )),
    }
}

pub fn parse_status(raw: &str) -> Result<TaskStatus, TareaError> {
    match raw {
        "pending" => Ok(TaskStatus::Pending),
        "in-progress" => Ok(TaskStatus::InProgress),
        "completed" => Ok(TaskStatus::Completed),
        "cancelled" => Ok(TaskStatus::Cancelled),
        _ => Err(TareaError::validation(
            "status must be one of: pending, in-progress, completed, cancelled",
        )),
    }
}

pub fn parse_status_tab(raw: &str) -> Result<StatusTab, TareaError> {
    if raw == "all" {
        return Ok(StatusTab::All);
    }
    Ok(StatusTab::Only(parse_status(raw).map_err(|_| {
        TareaError::validation(
            "status tab must be one of: all, pending, in-progress, completed, cancelled",
        )
    })?))
}

pub fn status_to_string(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "pending",
        TaskStatus::InProgress => "in-progress",
        TaskStatus::Completed => "completed",
        TaskStatus::Cancelled => "cancelled",
    }
}

pub fn scope_to_string(scope: Scope) -> &'static str {
    match scope {
        Scope::Inbox => "inbox",
        Scope::Today => "today",
        Scope::Upcoming => "upcoming",
        Scope::Project => "project",
    }
}
