//! Target project selection

use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::ResolveError;
use crate::graph::{Project, ProjectGraph};

/// Packaging kind marking a project as a runnable GWT application.
pub const APP_PACKAGING: &str = "gwt-app";

/// Selects the reactor projects to act on.
///
/// Without explicit identifiers, a single-project reactor selects that
/// project and a multi-project reactor selects every `gwt-app` project.
/// With explicit identifiers, each comma-delimited token is resolved
/// against a lookup keyed three ways per project: the bare artifact id,
/// `:artifactId`, and `groupId:artifactId`. A key claimed by more than one
/// project is ambiguous and stays ambiguous, no matter how many projects
/// claim it; resolving such a token is an error rather than an arbitrary
/// pick. Result order follows token order.
pub fn select_projects<'g>(
    graph: &'g ProjectGraph,
    explicit_ids: Option<&str>,
) -> Result<Vec<&'g Project>, ResolveError> {
    let mut selected: Vec<&Project> = Vec::new();

    match explicit_ids.filter(|ids| !ids.trim().is_empty()) {
        None => {
            if graph.len() == 1 {
                selected.push(&graph.projects()[0]);
            } else {
                selected.extend(
                    graph
                        .projects()
                        .iter()
                        .filter(|p| p.packaging == APP_PACKAGING),
                );
            }
        }
        Some(ids) => {
            let mut lookup: HashMap<String, &Project> = HashMap::new();
            let mut ambiguous: HashSet<String> = HashSet::new();

            for project in graph.projects() {
                let keys = [
                    project.artifact_id.clone(),
                    format!(":{}", project.artifact_id),
                    format!("{}:{}", project.group_id, project.artifact_id),
                ];
                for key in keys {
                    if ambiguous.contains(&key) {
                        continue;
                    }
                    if lookup.remove(&key).is_some() {
                        debug!(key = %key, "project identifier is ambiguous in the reactor");
                        ambiguous.insert(key);
                    } else {
                        lookup.insert(key, project);
                    }
                }
            }

            for token in ids.split(',').filter(|token| !token.is_empty()) {
                match lookup.get(token).copied() {
                    Some(project) => selected.push(project),
                    None if ambiguous.contains(token) => {
                        return Err(ResolveError::AmbiguousProject(token.to_string()))
                    }
                    None => return Err(ResolveError::ProjectNotFound(token.to_string())),
                }
            }
        }
    }

    if selected.is_empty() {
        return Err(ResolveError::NoProject);
    }

    debug!(count = selected.len(), "selected reactor projects");
    Ok(selected)
}
