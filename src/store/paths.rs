use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct TareaPaths {
    pub tarea_dir: PathBuf,
    pub tasks_file: PathBuf,
    pub projects_file: PathBuf,
}

pub fn get_paths(repo_root: impl AsRef<Path>) -> TareaPaths {
    let tarea_dir = repo_root.as_ref().join(".tarea");
    TareaPaths {
        tasks_file: tarea_dir.join("tasks.json"),
        projects_file: tarea_dir.join("projects.json"),
        tarea_dir,
    }
}
