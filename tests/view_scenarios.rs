mod common;

use common::{add_task, make_repo, make_service};
use tarea::app::service_types::{TaskPatch, ViewInput};
use tarea::types::{Scope, StatusTab, TaskGroup, TaskStatus};

fn view(service: &tarea::app::TareaService, scope: Scope) -> Vec<TaskGroup> {
    service
        .view(&ViewInput {
            scope,
            project_id: None,
            status_tab: StatusTab::All,
        })
        .expect("derive view")
        .groups
}

fn labels(groups: &[TaskGroup]) -> Vec<&str> {
    groups.iter().map(|group| group.label.as_str()).collect()
}

#[test]
fn today_view_buckets_overdue_and_today_and_excludes_undated() {
    let repo = make_repo();
    let service = make_service(repo.path());

    let overdue = add_task(&service, "water plants", Some("2024-03-09"));
    let due_today = add_task(&service, "pay rent", Some("2024-03-10"));
    let undated = add_task(&service, "someday maybe", None);
    service
        .update(
            &undated,
            TaskPatch {
                status: Some(TaskStatus::Completed),
                ..TaskPatch::default()
            },
        )
        .expect("complete task");

    let groups = view(&service, Scope::Today);
    assert_eq!(labels(&groups), vec!["Today", "Overdue"]);
    assert_eq!(groups[0].tasks[0].id, due_today);
    assert_eq!(groups[1].tasks[0].id, overdue);
    assert!(
        groups
            .iter()
            .all(|group| group.tasks.iter().all(|task| task.id != undated))
    );
}

#[test]
fn inbox_view_groups_by_status_with_completed_collapsed() {
    let repo = make_repo();
    let service = make_service(repo.path());

    let first = add_task(&service, "water plants", Some("2024-03-09"));
    let second = add_task(&service, "pay rent", Some("2024-03-10"));
    let third = add_task(&service, "old chore", None);
    service
        .update(
            &third,
            TaskPatch {
                status: Some(TaskStatus::Completed),
                ..TaskPatch::default()
            },
        )
        .expect("complete task");

    let groups = view(&service, Scope::Inbox);
    assert_eq!(labels(&groups), vec!["Pending", "Completed"]);
    assert_eq!(
        groups[0]
            .tasks
            .iter()
            .map(|task| task.id.as_str())
            .collect::<Vec<_>>(),
        vec![first.as_str(), second.as_str()]
    );
    assert_eq!(groups[1].tasks[0].id, third);
    assert!(groups[1].collapsed_by_default);
    assert!(!groups[0].collapsed_by_default);
}

#[test]
fn upcoming_view_emits_per_day_groups_and_drops_past_deadlines() {
    let repo = make_repo();
    let service = make_service(repo.path());

    let future = add_task(&service, "dentist", Some("2024-03-15"));
    add_task(&service, "already late", Some("2024-03-05"));

    let groups = view(&service, Scope::Upcoming);
    assert_eq!(labels(&groups), vec!["Friday 15 March"]);
    assert_eq!(groups[0].tasks[0].id, future);
}

#[test]
fn status_tab_narrows_inside_the_scope() {
    let repo = make_repo();
    let service = make_service(repo.path());

    add_task(&service, "water plants", Some("2024-03-09"));
    let started = add_task(&service, "pay rent", Some("2024-03-08"));
    service
        .update(
            &started,
            TaskPatch {
                status: Some(TaskStatus::InProgress),
                ..TaskPatch::default()
            },
        )
        .expect("start task");

    let groups = service
        .view(&ViewInput {
            scope: Scope::Today,
            project_id: None,
            status_tab: StatusTab::Only(TaskStatus::InProgress),
        })
        .expect("derive view")
        .groups;
    assert_eq!(labels(&groups), vec!["Overdue"]);
    assert_eq!(groups[0].tasks.len(), 1);
    assert_eq!(groups[0].tasks[0].id, started);
}

#[test]
fn project_scope_requires_a_project_id() {
    let repo = make_repo();
    let service = make_service(repo.path());

    let error = service
        .view(&ViewInput {
            scope: Scope::Project,
            project_id: None,
            status_tab: StatusTab::All,
        })
        .unwrap_err();
    assert_eq!(error.code, "VALIDATION_ERROR");
}

#[test]
fn project_scope_is_narrowed_by_the_store_not_the_core() {
    let repo = make_repo();
    let service = make_service(repo.path());

    let project = service.project_create("work").expect("create project");
    let in_project = service
        .create(tarea::app::service_types::CreateInput {
            description: "write report".to_string(),
            project_id: Some(project.name.clone()),
            ..tarea::app::service_types::CreateInput::default()
        })
        .expect("create task")
        .id;
    add_task(&service, "inbox only", None);

    let groups = service
        .view(&ViewInput {
            scope: Scope::Project,
            project_id: Some(project.id.clone()),
            status_tab: StatusTab::All,
        })
        .expect("derive view")
        .groups;
    assert_eq!(labels(&groups), vec!["Pending"]);
    assert_eq!(groups[0].tasks.len(), 1);
    assert_eq!(groups[0].tasks[0].id, in_project);

    // The inbox view only sees projectless tasks.
    let inbox = view(&service, Scope::Inbox);
    assert_eq!(inbox[0].tasks.len(), 1);
    assert_eq!(inbox[0].tasks[0].description, "inbox only");
}

#[test]
fn malformed_deadlines_never_break_a_view() {
    let repo = make_repo();
    let service = make_service(repo.path());

    add_task(&service, "broken deadline", Some("not-a-date"));
    let keep = add_task(&service, "fine", Some("2024-03-10"));

    let today_groups = view(&service, Scope::Today);
    assert_eq!(labels(&today_groups), vec!["Today"]);
    assert_eq!(today_groups[0].tasks[0].id, keep);

    // In the inbox the malformed task still shows, bucketed by status.
    let inbox_groups = view(&service, Scope::Inbox);
    assert_eq!(labels(&inbox_groups), vec!["Pending"]);
    assert_eq!(inbox_groups[0].tasks.len(), 2);
}
