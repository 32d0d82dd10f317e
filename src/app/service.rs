use crate::app::service_types::{
    CreateInput, DeleteResult, InitResult, ServiceContext, TaskPatch, ViewInput, ViewResult,
};
use crate::domain::groups::default_day_label;
use crate::domain::resolve::{resolve_project_id, resolve_task_id};
use crate::domain::view::derive_view;
use crate::errors::TareaError;
use crate::store::{JsonProjectStore, JsonTaskStore, TaskQuery, TaskSource};
use crate::types::{Project, Scope, Task};
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;
use ulid::Ulid;

pub struct TareaService {
    ctx: ServiceContext,
}

impl TareaService {
    pub fn new(
        repo_root: impl Into<String>,
        now: impl Fn() -> String + Send + Sync + 'static,
        today: impl Fn() -> NaiveDate + Send + Sync + 'static,
    ) -> Self {
        Self {
            ctx: ServiceContext {
                repo_root: repo_root.into(),
                now: Arc::new(now),
                today: Arc::new(today),
            },
        }
    }

    fn store(&self) -> JsonTaskStore {
        JsonTaskStore::new(self.ctx.repo_root.clone())
    }

    fn projects(&self) -> JsonProjectStore {
        JsonProjectStore::new(self.ctx.repo_root.clone())
    }

    pub fn init(&self) -> Result<InitResult, TareaError> {
        let mut files = self.store().init()?;
        files.extend(self.projects().init()?);
        Ok(InitResult {
            initialized: true,
            files,
        })
    }

    pub fn create(&self, input: CreateInput) -> Result<Task, TareaError> {
        let description = input.description.trim().to_string();
        if description.is_empty() {
            return Err(TareaError::validation("description must not be empty"));
        }

        let project_id = match none_if_blank(input.project_id) {
            Some(raw) => Some(self.resolve_project(&raw)?),
            None => None,
        };

        let store = self.store();
        let mut tasks = store.load()?;
        let task = Task {
            id: Ulid::new().to_string(),
            description,
            long_description: none_if_blank(input.long_description),
            status: crate::types::TaskStatus::Pending,
            deadline: none_if_blank(input.deadline),
            project_id,
            parent_id: none_if_blank(input.parent_id),
            created_at: self.ctx.now.as_ref()(),
        };
        tasks.push(task.clone());
        store.save(&tasks)?;
        Ok(task)
    }

    pub fn show(&self, id_raw: &str) -> Result<Task, TareaError> {
        let tasks = self.store().load()?;
        let id = resolve_task_id(&tasks, id_raw)?;
        tasks
            .into_iter()
            .find(|task| task.id == id)
            .ok_or_else(|| TareaError::not_found(format!("task not found: {}", id)))
    }

    pub fn update(&self, id_raw: &str, patch: TaskPatch) -> Result<Task, TareaError> {
        if patch.deadline.is_some() && patch.clear_deadline {
            return Err(TareaError::validation(
                "cannot combine a new deadline with clearing the deadline",
            ));
        }
        if let Some(description) = &patch.description
            && description.trim().is_empty()
        {
            return Err(TareaError::validation("description must not be empty"));
        }

        let store = self.store();
        let mut tasks = store.load()?;
        let id = resolve_task_id(&tasks, id_raw)?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| TareaError::not_found(format!("task not found: {}", id)))?;

        if let Some(description) = patch.description {
            task.description = description.trim().to_string();
        }
        if let Some(long_description) = patch.long_description {
            task.long_description = none_if_blank(Some(long_description));
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(deadline) = patch.deadline {
            task.deadline = none_if_blank(Some(deadline));
        }
        if patch.clear_deadline {
            task.deadline = None;
        }

        let updated = task.clone();
        store.save(&tasks)?;
        Ok(updated)
    }

    pub fn delete(&self, id_raw: &str) -> Result<DeleteResult, TareaError> {
        let store = self.store();
        let mut tasks = store.load()?;
        let id = resolve_task_id(&tasks, id_raw)?;
        let index = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| TareaError::not_found(format!("task not found: {}", id)))?;
        let deleted = tasks.remove(index);
        store.save(&tasks)?;
        Ok(DeleteResult { deleted })
    }

    pub fn project_create(&self, name: &str) -> Result<Project, TareaError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TareaError::validation("project name must not be empty"));
        }

        let store = self.projects();
        let mut projects = store.load()?;
        if projects.iter().any(|project| project.name == name) {
            return Err(TareaError::new(
                "PROJECT_EXISTS",
                "A project with this name already exists",
                1,
            )
            .with_details(json!({ "name": name })));
        }

        let project = Project {
            id: Ulid::new().to_string(),
            name: name.to_string(),
            created_at: self.ctx.now.as_ref()(),
        };
        projects.push(project.clone());
        store.save(&projects)?;
        Ok(project)
    }

    pub fn project_list(&self) -> Result<Vec<Project>, TareaError> {
        self.projects().load()
    }

    fn resolve_project(&self, raw: &str) -> Result<String, TareaError> {
        resolve_project_id(&self.projects().load()?, raw)
    }

    /// Derives the grouped view for one scope. The data source handles
    /// project membership; the pure core handles dates, tabs and grouping.
    /// `today` is read exactly once here and threaded through as a value.
    pub fn view(&self, input: &ViewInput) -> Result<ViewResult, TareaError> {
        let query = match input.scope {
            Scope::Inbox => TaskQuery {
                project_id: Some(None),
                ..TaskQuery::default()
            },
            Scope::Project => {
                let raw = input
                    .project_id
                    .as_deref()
                    .ok_or_else(|| TareaError::validation("project scope requires --project"))?;
                TaskQuery {
                    project_id: Some(Some(self.resolve_project(raw)?)),
                    ..TaskQuery::default()
                }
            }
            Scope::Today | Scope::Upcoming => TaskQuery::default(),
        };
        let tasks = self.store().fetch_tasks(&query)?;

        let today = self.ctx.today.as_ref()();
        let groups = derive_view(&tasks, input.scope, input.status_tab, today, &default_day_label);
        Ok(ViewResult {
            scope: crate::app::runtime::scope_to_string(input.scope).to_string(),
            today,
            groups,
        })
    }

    pub fn search(&self, query: &str) -> Result<Vec<Task>, TareaError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(TareaError::validation("search query must not be empty"));
        }
        self.store().fetch_tasks(&TaskQuery {
            search: Some(trimmed.to_string()),
            ..TaskQuery::default()
        })
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
