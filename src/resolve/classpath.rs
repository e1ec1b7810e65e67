//! Classpath assembly

use std::collections::HashSet;

use super::ResolveError;
use crate::graph::{Project, ScopeFilter};

/// Builds the ordered, deduplicated classpath for the forked JVM.
///
/// When `prepend_sources` is set the collected source roots seed the
/// classpath, in order. Each selected project then contributes its build
/// output directory followed by the files of its fully resolved artifacts
/// that are classpath-flagged and pass the scope filter. An included
/// artifact without a resolved file is an error here, unlike in source
/// collection.
pub fn build_classpath(
    projects: &[&Project],
    scope_filter: ScopeFilter,
    prepend_sources: bool,
    sources: &[String],
) -> Result<Vec<String>, ResolveError> {
    let mut entries: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    if prepend_sources {
        for source in sources {
            if seen.insert(source.clone()) {
                entries.push(source.clone());
            }
        }
    }

    for project in projects {
        if seen.insert(project.output_directory.clone()) {
            entries.push(project.output_directory.clone());
        }
        for artifact in &project.artifacts {
            if !artifact.added_to_classpath {
                continue;
            }
            if !scope_filter.includes(artifact.scope) {
                continue;
            }
            let file = artifact
                .file
                .as_ref()
                .ok_or_else(|| ResolveError::UnresolvedArtifact(artifact.id()))?;
            if seen.insert(file.clone()) {
                entries.push(file.clone());
            }
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Artifact, Scope};
    use std::collections::HashMap;

    fn artifact(name: &str, scope: Scope, file: Option<&str>) -> Artifact {
        Artifact {
            group_id: "com.example".to_string(),
            artifact_id: name.to_string(),
            version: "1.0".to_string(),
            classifier: None,
            scope,
            kind: "jar".to_string(),
            added_to_classpath: true,
            file: file.map(String::from),
        }
    }

    fn project(name: &str, artifacts: Vec<Artifact>) -> Project {
        Project {
            group_id: "com.example".to_string(),
            artifact_id: name.to_string(),
            version: "1.0".to_string(),
            packaging: "gwt-app".to_string(),
            compile_source_roots: vec![],
            output_directory: format!("{}/target/classes", name),
            build_directory: format!("{}/target", name),
            dependency_artifacts: vec![],
            artifacts,
            project_references: HashMap::new(),
            plugin: None,
            execution_view: None,
        }
    }

    #[test]
    fn test_output_directory_then_artifact_files() {
        let p = project(
            "app",
            vec![
                artifact("gwt-user", Scope::Compile, Some("repo/gwt-user.jar")),
                artifact("guava", Scope::Runtime, Some("repo/guava.jar")),
            ],
        );

        let cp = build_classpath(&[&p], ScopeFilter::Runtime, false, &[]).unwrap();
        assert_eq!(
            cp,
            vec!["app/target/classes", "repo/gwt-user.jar", "repo/guava.jar"]
        );
    }

    #[test]
    fn test_scope_filter_excludes_artifacts() {
        let p = project(
            "app",
            vec![
                artifact("gwt-user", Scope::Compile, Some("repo/gwt-user.jar")),
                artifact("junit", Scope::Test, Some("repo/junit.jar")),
            ],
        );

        let cp = build_classpath(&[&p], ScopeFilter::Runtime, false, &[]).unwrap();
        assert_eq!(cp, vec!["app/target/classes", "repo/gwt-user.jar"]);
    }

    #[test]
    fn test_classpath_flag_excludes_artifacts() {
        let mut pom_dep = artifact("parent", Scope::Compile, Some("repo/parent.pom"));
        pom_dep.added_to_classpath = false;
        let p = project("app", vec![pom_dep]);

        let cp = build_classpath(&[&p], ScopeFilter::Runtime, false, &[]).unwrap();
        assert_eq!(cp, vec!["app/target/classes"]);
    }

    #[test]
    fn test_prepended_sources_lead_and_deduplicate() {
        let p = project(
            "app",
            vec![artifact("gwt-user", Scope::Compile, Some("repo/gwt-user.jar"))],
        );
        let sources = vec!["app/src".to_string(), "lib/src".to_string()];

        let cp = build_classpath(&[&p], ScopeFilter::Runtime, true, &sources).unwrap();
        assert_eq!(
            cp,
            vec!["app/src", "lib/src", "app/target/classes", "repo/gwt-user.jar"]
        );
    }

    #[test]
    fn test_unresolved_artifact_is_an_error() {
        let p = project("app", vec![artifact("ghost", Scope::Compile, None)]);

        match build_classpath(&[&p], ScopeFilter::Runtime, false, &[]) {
            Err(ResolveError::UnresolvedArtifact(id)) => {
                assert_eq!(id, "com.example:ghost:jar:1.0")
            }
            other => panic!("expected UnresolvedArtifact, got {:?}", other),
        }
    }

    #[test]
    fn test_unresolved_but_excluded_artifact_is_tolerated() {
        let p = project("app", vec![artifact("ghost", Scope::Test, None)]);
        assert!(build_classpath(&[&p], ScopeFilter::Runtime, false, &[]).is_ok());
    }

    #[test]
    fn test_shared_artifacts_deduplicate_across_projects() {
        let a = project(
            "a",
            vec![artifact("gwt-user", Scope::Compile, Some("repo/gwt-user.jar"))],
        );
        let b = project(
            "b",
            vec![artifact("gwt-user", Scope::Compile, Some("repo/gwt-user.jar"))],
        );

        let cp = build_classpath(&[&a, &b], ScopeFilter::Runtime, false, &[]).unwrap();
        assert_eq!(
            cp,
            vec!["a/target/classes", "repo/gwt-user.jar", "b/target/classes"]
        );
    }
}
