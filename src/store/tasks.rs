use crate::domain::deadline::normalize_deadline;
use crate::errors::TareaError;
use crate::store::files::{read_json, write_json_atomic};
use crate::store::paths::get_paths;
use crate::types::{SCHEMA_VERSION, Task, TaskFile};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// The fetch contract the derivation layer consumes. Project and parent
/// scoping live here, not in the view core: `Some(None)` selects tasks
/// without a project (the inbox) or without a parent (root tasks),
/// `Some(Some(id))` selects one project or one parent.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub project_id: Option<Option<String>>,
    pub parent_id: Option<Option<String>>,
    pub date_exact: Option<NaiveDate>,
    pub date_on_or_after: Option<NaiveDate>,
    pub search: Option<String>,
}

pub trait TaskSource {
    fn fetch_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>, TareaError>;
}

/// File-backed task store under `.tarea/tasks.json`.
pub struct JsonTaskStore {
    repo_root: PathBuf,
}

impl JsonTaskStore {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    pub fn init(&self) -> Result<Vec<String>, TareaError> {
        if !get_paths(&self.repo_root).tasks_file.exists() {
            self.save(&[])?;
        }
        Ok(vec![".tarea/tasks.json".to_string()])
    }

    pub fn load(&self) -> Result<Vec<Task>, TareaError> {
        let paths = get_paths(&self.repo_root);
        let file: Option<TaskFile> = read_json(&paths.tasks_file)?;
        match file {
            Some(file) => Ok(file.tasks),
            None => Err(TareaError::new(
                "NOT_INITIALIZED",
                "No .tarea directory found. Run 'trea init' first.",
                2,
            )),
        }
    }

    pub fn save(&self, tasks: &[Task]) -> Result<(), TareaError> {
        let paths = get_paths(&self.repo_root);
        let file = TaskFile {
            schema_version: SCHEMA_VERSION,
            tasks: tasks.to_vec(),
        };
        write_json_atomic(&paths.tasks_file, &file)
    }

    pub fn is_initialized(repo_root: impl AsRef<Path>) -> bool {
        get_paths(repo_root).tasks_file.exists()
    }
}

impl TaskSource for JsonTaskStore {
    fn fetch_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>, TareaError> {
        Ok(apply_query(&self.load()?, query))
    }
}

pub fn apply_query(tasks: &[Task], query: &TaskQuery) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| {
            if let Some(project_id) = &query.project_id
                && &task.project_id != project_id
            {
                return false;
            }
            if let Some(parent_id) = &query.parent_id
                && &task.parent_id != parent_id
            {
                return false;
            }
            if let Some(date_exact) = query.date_exact
                && normalize_deadline(task.deadline.as_deref()) != Some(date_exact)
            {
                return false;
            }
            if let Some(date_on_or_after) = query.date_on_or_after
                && !normalize_deadline(task.deadline.as_deref())
                    .map(|day| day >= date_on_or_after)
                    .unwrap_or(false)
            {
                return false;
            }
            if let Some(search) = &query.search
                && !matches_search(task, search)
            {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

fn matches_search(task: &Task, search: &str) -> bool {
    let needle = search.to_lowercase();
    if task.description.to_lowercase().contains(&needle) {
        return true;
    }
    task.long_description
        .as_deref()
        .map(|text| text.to_lowercase().contains(&needle))
        .unwrap_or(false)
}
