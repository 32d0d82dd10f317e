use crate::errors::TareaError;
use crate::types::{Project, Task};
use serde_json::json;

/// Resolves a raw id argument against the store, accepting any unambiguous
/// prefix of a full task id.
pub fn resolve_task_id(tasks: &[Task], raw: &str) -> Result<String, TareaError> {
    if tasks.iter().any(|task| task.id == raw) {
        return Ok(raw.to_string());
    }

    let mut matches: Vec<String> = tasks
        .iter()
        .filter(|task| task.id.starts_with(raw))
        .map(|task| task.id.clone())
        .collect();
    matches.sort();

    if matches.len() == 1 {
        return Ok(matches.remove(0));
    }

    if matches.is_empty() {
        return Err(TareaError::not_found("Task ID not found").with_details(json!({
          "input": raw
        })));
    }

    Err(
        TareaError::new("TASK_ID_AMBIGUOUS", "Task ID is ambiguous", 1).with_details(json!({
          "input": raw,
          "candidates": matches
        })),
    )
}

/// Resolves a project reference: an exact id, an exact name, or an
/// unambiguous id prefix. Names are unique at creation so name lookup
/// never needs disambiguation.
pub fn resolve_project_id(projects: &[Project], raw: &str) -> Result<String, TareaError> {
    if let Some(project) = projects.iter().find(|project| project.id == raw) {
        return Ok(project.id.clone());
    }
    if let Some(project) = projects.iter().find(|project| project.name == raw) {
        return Ok(project.id.clone());
    }

    let mut matches: Vec<String> = projects
        .iter()
        .filter(|project| project.id.starts_with(raw))
        .map(|project| project.id.clone())
        .collect();
    matches.sort();

    if matches.len() == 1 {
        return Ok(matches.remove(0));
    }

    if matches.is_empty() {
        return Err(TareaError::not_found("Project not found").with_details(json!({
          "input": raw
        })));
    }

    Err(
        TareaError::new("PROJECT_ID_AMBIGUOUS", "Project ID is ambiguous", 1).with_details(
            json!({
              "input": raw,
              "candidates": matches
            }),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Task, TaskStatus};

    fn task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            description: "t".to_string(),
            long_description: None,
            status: TaskStatus::Pending,
            deadline: None,
            project_id: None,
            parent_id: None,
            created_at: "2024-03-01T00:00:00.000Z".to_string(),
        }
    }

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            created_at: "2024-03-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn exact_id_wins_even_when_it_prefixes_another() {
        let tasks = vec![task("01AB"), task("01ABCD")];
        assert_eq!(resolve_task_id(&tasks, "01AB").unwrap(), "01AB");
    }

    #[test]
    fn unique_prefix_resolves() {
        let tasks = vec![task("01AB"), task("02CD")];
        assert_eq!(resolve_task_id(&tasks, "02").unwrap(), "02CD");
    }

    #[test]
    fn ambiguous_prefix_reports_candidates() {
        let tasks = vec![task("01AB"), task("01AC")];
        let error = resolve_task_id(&tasks, "01A").unwrap_err();
        assert_eq!(error.code, "TASK_ID_AMBIGUOUS");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let error = resolve_task_id(&[task("01AB")], "99").unwrap_err();
        assert_eq!(error.code, "NOT_FOUND");
    }

    #[test]
    fn projects_resolve_by_name_before_id_prefix() {
        let projects = vec![project("01AB", "work"), project("01AC", "home")];
        assert_eq!(resolve_project_id(&projects, "work").unwrap(), "01AB");
        let error = resolve_project_id(&projects, "01A").unwrap_err();
        assert_eq!(error.code, "PROJECT_ID_AMBIGUOUS");
    }

    #[test]
    fn unknown_project_is_not_found() {
        let error = resolve_project_id(&[project("01AB", "work")], "garden").unwrap_err();
        assert_eq!(error.code, "NOT_FOUND");
    }
}
