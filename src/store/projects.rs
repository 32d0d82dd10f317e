use crate::errors::TareaError;
use crate::store::files::{read_json, write_json_atomic};
use crate::store::paths::get_paths;
use crate::types::{Project, ProjectFile, SCHEMA_VERSION};
use std::path::PathBuf;

/// File-backed project registry under `.tarea/projects.json`. A missing
/// file reads as an empty registry so stores created before projects
/// existed keep working.
pub struct JsonProjectStore {
    repo_root: PathBuf,
}

impl JsonProjectStore {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    pub fn init(&self) -> Result<Vec<String>, TareaError> {
        if !get_paths(&self.repo_root).projects_file.exists() {
            self.save(&[])?;
        }
        Ok(vec![".tarea/projects.json".to_string()])
    }

    pub fn load(&self) -> Result<Vec<Project>, TareaError> {
        let paths = get_paths(&self.repo_root);
        let file: Option<ProjectFile> = read_json(&paths.projects_file)?;
        Ok(file.map(|file| file.projects).unwrap_or_default())
    }

    pub fn save(&self, projects: &[Project]) -> Result<(), TareaError> {
        let paths = get_paths(&self.repo_root);
        let file = ProjectFile {
            schema_version: SCHEMA_VERSION,
            projects: projects.to_vec(),
        };
        write_json_atomic(&paths.projects_file, &file)
    }
}
