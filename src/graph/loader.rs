//! Reactor graph file loading
//!
//! A reactor graph file is a JSON array of project records, emitted by the
//! build tool in reactor order. Example:
//!
//! ```json
//! [
//!   {
//!     "group_id": "com.example",
//!     "artifact_id": "app",
//!     "version": "1.0",
//!     "packaging": "gwt-app",
//!     "compile_source_roots": ["app/src/main/java"],
//!     "output_directory": "app/target/classes",
//!     "build_directory": "app/target",
//!     "dependency_artifacts": [
//!       {
//!         "group_id": "com.example",
//!         "artifact_id": "lib",
//!         "version": "1.0",
//!         "scope": "compile",
//!         "kind": "gwt-lib",
//!         "file": "lib/target/lib-1.0.jar"
//!       }
//!     ],
//!     "project_references": {
//!       "com.example:lib:1.0": "com.example:lib:1.0"
//!     },
//!     "plugin": { "module_name": "com.example.App" }
//!   }
//! ]
//! ```
//!
//! Loading validates the graph invariants up front: project keys are unique
//! and every project reference resolves within the graph.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use super::project::{Project, ProjectGraph};

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Failed to read reactor graph {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse reactor graph {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Duplicate project key in the reactor: {0}")]
    DuplicateProject(String),

    #[error("Project {project} references {key}, which is not in the reactor")]
    DanglingReference { project: String, key: String },
}

impl ProjectGraph {
    /// Loads and validates a reactor graph file.
    pub fn from_file(path: &Path) -> Result<Self, GraphError> {
        let content = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let projects: Vec<Project> =
            serde_json::from_str(&content).map_err(|source| GraphError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            path = %path.display(),
            projects = projects.len(),
            "loaded reactor graph"
        );

        Self::new(projects)
    }
}
