//! Reactor projects and the project arena

use serde::Deserialize;
use std::collections::HashMap;

use super::artifact::Artifact;
use super::loader::GraphError;

/// Per-project configuration of the GWT build plugin.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginConfig {
    /// The GWT module this project declares, e.g. `com.example.App`.
    pub module_name: String,
}

/// One buildable module unit within the reactor.
///
/// `project_references` maps dependency keys (`group:artifact:version`) to
/// the keys of sibling projects in the same graph; external artifacts never
/// appear in it. `execution_view` is an optional substitute project used for
/// source-root resolution instead of the nominal one (forked-lifecycle
/// builds expose processed source roots this way).
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default = "default_packaging")]
    pub packaging: String,
    #[serde(default)]
    pub compile_source_roots: Vec<String>,
    pub output_directory: String,
    pub build_directory: String,
    #[serde(default)]
    pub dependency_artifacts: Vec<Artifact>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub project_references: HashMap<String, String>,
    #[serde(default)]
    pub plugin: Option<PluginConfig>,
    #[serde(default)]
    pub execution_view: Option<Box<Project>>,
}

fn default_packaging() -> String {
    "jar".to_string()
}

impl Project {
    /// Arena key: `group:artifact:version`.
    pub fn key(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// Versionless key used in warnings: `group:artifact`.
    pub fn versionless_key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

/// Arena of reactor projects, indexed by key.
///
/// The graph owns every project record; inter-project references are plain
/// key strings resolved through the arena, which keeps the naturally cyclic
/// reference structure representable without reference counting.
#[derive(Debug)]
pub struct ProjectGraph {
    projects: Vec<Project>,
    index: HashMap<String, usize>,
}

impl ProjectGraph {
    /// Builds a graph from reactor order project records.
    ///
    /// Validates that every `project_references` entry (including those of
    /// execution views) points at a project present in the graph.
    pub fn new(projects: Vec<Project>) -> Result<Self, GraphError> {
        let mut index = HashMap::new();
        for (position, project) in projects.iter().enumerate() {
            if index.insert(project.key(), position).is_some() {
                return Err(GraphError::DuplicateProject(project.key()));
            }
        }

        for project in &projects {
            validate_references(project, &index)?;
        }

        Ok(Self { projects, index })
    }

    /// All projects in reactor order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Project> {
        self.index.get(key).map(|&position| &self.projects[position])
    }

    /// Resolves a dependency key through a project's reference map.
    ///
    /// Returns `None` when the project has no reference entry for the key,
    /// i.e. the dependency is an external artifact rather than a sibling.
    pub fn reference(&self, project: &Project, dependency_key: &str) -> Option<&Project> {
        project
            .project_references
            .get(dependency_key)
            .and_then(|key| self.get(key))
    }
}

fn validate_references(
    project: &Project,
    index: &HashMap<String, usize>,
) -> Result<(), GraphError> {
    for referenced in project.project_references.values() {
        if !index.contains_key(referenced) {
            return Err(GraphError::DanglingReference {
                project: project.key(),
                key: referenced.clone(),
            });
        }
    }
    if let Some(view) = &project.execution_view {
        validate_references(view, index)?;
    }
    Ok(())
}
