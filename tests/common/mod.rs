use chrono::NaiveDate;
use std::path::Path;
use tarea::app::TareaService;
use tarea::app::service_types::CreateInput;
use tempfile::TempDir;

pub fn make_repo() -> TempDir {
    TempDir::new().expect("create temp repo")
}

/// Service with a pinned clock and a pinned "today" so view derivations are
/// reproducible regardless of when the suite runs.
pub fn make_service(root: &Path) -> TareaService {
    let service = TareaService::new(
        root.to_string_lossy().to_string(),
        || "2024-03-01T00:00:00.000Z".to_string(),
        || NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid pinned date"),
    );
    service.init().expect("init store");
    service
}

pub fn add_task(service: &TareaService, description: &str, deadline: Option<&str>) -> String {
    service
        .create(CreateInput {
            description: description.to_string(),
            deadline: deadline.map(String::from),
            ..CreateInput::default()
        })
        .expect("create task")
        .id
}
