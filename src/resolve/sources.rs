//! Transitive source-root collection

use std::collections::HashSet;
use tracing::debug;

use crate::graph::{Project, ProjectGraph, ScopeFilter};

/// Packaging kind of dependency artifacts that are buildable from source.
pub const LIB_PACKAGING: &str = "gwt-lib";

/// Classifier marking an explicit sources artifact.
pub const SOURCES_CLASSIFIER: &str = "sources";

/// Collects the ordered, deduplicated set of compile source roots for the
/// selected projects, walking inter-project dependency references.
///
/// Only dependency artifacts that are themselves buildable-from-source
/// sibling modules contribute: the artifact must be on the classpath, pass
/// the scope filter, be a `gwt-lib` or carry the `sources` classifier, and
/// have a project reference in the graph. Ordinary binary dependencies do
/// not pull in source roots. The walk is diamond- and cycle-safe.
pub fn collect_sources(
    graph: &ProjectGraph,
    projects: &[&Project],
    scope_filter: ScopeFilter,
) -> Vec<String> {
    let mut sources: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut visited: HashSet<String> = HashSet::new();

    for project in projects {
        add_sources(graph, project, scope_filter, &mut sources, &mut seen, &mut visited);
    }

    sources
}

fn add_sources(
    graph: &ProjectGraph,
    project: &Project,
    scope_filter: ScopeFilter,
    sources: &mut Vec<String>,
    seen: &mut HashSet<String>,
    visited: &mut HashSet<String>,
) {
    if !visited.insert(project.key()) {
        return;
    }
    debug!(project = %project.key(), "adding source roots");

    // Forked-lifecycle builds substitute an execution view whose source
    // roots include generated/processed directories.
    let effective = project.execution_view.as_deref().unwrap_or(project);

    for root in &effective.compile_source_roots {
        if seen.insert(root.clone()) {
            sources.push(root.clone());
        }
    }

    for artifact in &effective.dependency_artifacts {
        if !artifact.added_to_classpath {
            continue;
        }
        if !scope_filter.includes(artifact.scope) {
            continue;
        }
        if artifact.kind != LIB_PACKAGING
            && artifact.classifier.as_deref() != Some(SOURCES_CLASSIFIER)
        {
            debug!(
                artifact = %artifact.id(),
                "ignoring artifact; neither a gwt-lib nor jar:sources"
            );
            continue;
        }
        match graph.reference(effective, &artifact.key()) {
            Some(reference) => {
                add_sources(graph, reference, scope_filter, sources, seen, visited)
            }
            None => debug!(
                artifact = %artifact.id(),
                "ignoring artifact; no corresponding project reference"
            ),
        }
    }
}
