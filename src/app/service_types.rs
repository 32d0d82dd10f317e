use crate::types::{Scope, StatusTab, Task, TaskGroup, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct ServiceContext {
    pub repo_root: String,
    pub now: Arc<dyn Fn() -> String + Send + Sync>,
    pub today: Arc<dyn Fn() -> NaiveDate + Send + Sync>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateInput {
    pub description: String,
    pub long_description: Option<String>,
    pub deadline: Option<String>,
    pub project_id: Option<String>,
    pub parent_id: Option<String>,
}

/// Patch-style update: only the fields present change. Clearing and setting
/// the same field in one patch is rejected.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub status: Option<TaskStatus>,
    pub deadline: Option<String>,
    pub clear_deadline: bool,
}

#[derive(Debug, Clone)]
pub struct ViewInput {
    pub scope: Scope,
    pub project_id: Option<String>,
    pub status_tab: StatusTab,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResult {
    pub scope: String,
    pub today: NaiveDate,
    pub groups: Vec<TaskGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitResult {
    pub initialized: bool,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted: Task,
}
