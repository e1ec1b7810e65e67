//! Reactor graph model
//!
//! This module holds the read-only build metadata the launcher operates on:
//! - [`Project`]: one buildable module unit in a multi-module reactor
//! - [`Artifact`]: a resolved dependency with scope and packaging metadata
//! - [`ProjectGraph`]: the arena of reactor projects, indexed by key
//! - [`ScopeFilter`]: named dependency-scope filters for classpath assembly
//!
//! Graphs are ingested from a reactor graph file (JSON) via
//! [`ProjectGraph::from_file`]; see [`loader`] for the format and the
//! invariants validated at load time.

pub mod artifact;
pub mod loader;
pub mod project;

pub use artifact::{Artifact, Scope, ScopeFilter};
pub use loader::GraphError;
pub use project::{PluginConfig, Project, ProjectGraph};
