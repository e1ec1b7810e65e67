//! Project, module, source, and classpath resolution
//!
//! Resolution is a single deterministic pass over the reactor graph:
//! [`select_projects`] picks the target projects, [`discover_modules`]
//! determines the GWT modules to run, [`collect_sources`] walks
//! inter-project references for source roots, and [`build_classpath`]
//! assembles the forked JVM's classpath. All derived collections preserve
//! insertion order; the deduplicating ones forbid duplicates.

pub mod classpath;
pub mod modules;
pub mod projects;
pub mod sources;

pub use classpath::build_classpath;
pub use modules::discover_modules;
pub use projects::select_projects;
pub use sources::collect_sources;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No project found")]
    NoProject,

    #[error("Ambiguous project identifier, there are several matching projects in the reactor: {0}")]
    AmbiguousProject(String),

    #[error("Could not find the selected project in the reactor: {0}")]
    ProjectNotFound(String),

    #[error("No module found")]
    NoModule,

    #[error("Artifact {0} is on the classpath but was not resolved to a file")]
    UnresolvedArtifact(String),
}
