mod common;

use common::{add_task, make_repo, make_service};
use tarea::app::service_types::{CreateInput, TaskPatch};
use tarea::types::TaskStatus;

#[test]
fn create_rejects_blank_descriptions() {
    let repo = make_repo();
    let service = make_service(repo.path());

    let error = service
        .create(CreateInput {
            description: "   ".to_string(),
            ..CreateInput::default()
        })
        .unwrap_err();
    assert_eq!(error.code, "VALIDATION_ERROR");
}

#[test]
fn create_trims_and_persists_across_service_instances() {
    let repo = make_repo();
    let service = make_service(repo.path());

    let id = service
        .create(CreateInput {
            description: "  water plants  ".to_string(),
            deadline: Some("2024-03-12".to_string()),
            ..CreateInput::default()
        })
        .expect("create task")
        .id;

    let reopened = make_service(repo.path());
    let task = reopened.show(&id).expect("show task");
    assert_eq!(task.description, "water plants");
    assert_eq!(task.deadline.as_deref(), Some("2024-03-12"));
    assert_eq!(task.status, TaskStatus::Pending);
}

#[test]
fn update_applies_only_the_patched_fields() {
    let repo = make_repo();
    let service = make_service(repo.path());
    let id = add_task(&service, "water plants", Some("2024-03-12"));

    let updated = service
        .update(
            &id,
            TaskPatch {
                status: Some(TaskStatus::InProgress),
                ..TaskPatch::default()
            },
        )
        .expect("patch task");
    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(updated.description, "water plants");
    assert_eq!(updated.deadline.as_deref(), Some("2024-03-12"));
}

#[test]
fn update_rejects_setting_and_clearing_the_deadline_together() {
    let repo = make_repo();
    let service = make_service(repo.path());
    let id = add_task(&service, "water plants", Some("2024-03-12"));

    let error = service
        .update(
            &id,
            TaskPatch {
                deadline: Some("2024-03-13".to_string()),
                clear_deadline: true,
                ..TaskPatch::default()
            },
        )
        .unwrap_err();
    assert_eq!(error.code, "VALIDATION_ERROR");
}

#[test]
fn clear_deadline_removes_the_deadline() {
    let repo = make_repo();
    let service = make_service(repo.path());
    let id = add_task(&service, "water plants", Some("2024-03-12"));

    let updated = service
        .update(
            &id,
            TaskPatch {
                clear_deadline: true,
                ..TaskPatch::default()
            },
        )
        .expect("patch task");
    assert_eq!(updated.deadline, None);
}

#[test]
fn delete_removes_the_task_and_returns_it() {
    let repo = make_repo();
    let service = make_service(repo.path());
    let id = add_task(&service, "water plants", None);

    let result = service.delete(&id).expect("delete task");
    assert_eq!(result.deleted.id, id);

    let error = service.show(&id).unwrap_err();
    assert_eq!(error.code, "NOT_FOUND");
}

#[test]
fn ids_resolve_by_unique_prefix() {
    let repo = make_repo();
    let service = make_service(repo.path());
    let id = add_task(&service, "water plants", None);

    let prefix = &id[..10];
    let task = service.show(prefix).expect("show by prefix");
    assert_eq!(task.id, id);
}

#[test]
fn search_matches_descriptions_case_insensitively() {
    let repo = make_repo();
    let service = make_service(repo.path());
    let hit = add_task(&service, "Water the plants", None);
    add_task(&service, "pay rent", None);

    let results = service.search("PLANTS").expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, hit);

    let error = service.search("   ").unwrap_err();
    assert_eq!(error.code, "VALIDATION_ERROR");
}

#[test]
fn unknown_status_values_in_the_store_load_as_pending() {
    let repo = make_repo();
    let service = make_service(repo.path());
    let id = add_task(&service, "water plants", None);

    let tasks_file = repo.path().join(".tarea").join("tasks.json");
    let raw = std::fs::read_to_string(&tasks_file).expect("read store");
    let patched = raw.replace("\"pending\"", "\"archived\"");
    std::fs::write(&tasks_file, patched).expect("write store");

    let task = service.show(&id).expect("show task");
    assert_eq!(task.status, TaskStatus::Pending);
}
