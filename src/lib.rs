//! gwtrun - reactor-aware launcher for GWT DevMode and CodeServer
//!
//! This library resolves a multi-module build's project and module
//! selection from a reactor graph file, assembles the Java classpath and
//! source path from the reactor metadata, and forks the GWT DevMode or
//! CodeServer JVM with the derived arguments.
//!
//! # Core Concepts
//!
//! - **Reactor graph**: the build tool's view of the multi-module build -
//!   projects, their dependency artifacts, and the references between
//!   sibling projects - ingested from a JSON file
//! - **Resolution**: a single deterministic pass selecting target projects,
//!   discovering GWT modules, collecting source roots transitively, and
//!   assembling the classpath under a dependency scope filter
//! - **Launchers**: the DevMode and CodeServer front-ends over the shared
//!   orchestration, differing in main class, work directory, and how they
//!   hand the collected sources to the forked JVM
//!
//! # Example Usage
//!
//! ```no_run
//! use gwtrun::launch::{self, DevMode};
//! use gwtrun::{LaunchOptions, ProjectGraph};
//! use std::path::Path;
//!
//! async fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     let graph = ProjectGraph::from_file(Path::new("reactor.json"))?;
//!     let options = LaunchOptions::default();
//!     let devmode = DevMode::new(None, vec![]);
//!
//!     launch::launch(&graph, &options, &devmode).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`graph`]: reactor graph model and loader
//! - [`resolve`]: project/module/source/classpath resolution
//! - [`launch`]: orchestration, launchers, process execution

// Public modules
pub mod cli;
pub mod config;
pub mod graph;
pub mod launch;
pub mod resolve;
pub mod util;

// Re-export key types for convenient access
pub use config::{LaunchOptions, LogLevel};
pub use graph::{Artifact, GraphError, PluginConfig, Project, ProjectGraph, Scope, ScopeFilter};
pub use launch::{launch, CodeServer, DevMode, LaunchError, Launcher};
pub use resolve::{
    build_classpath, collect_sources, discover_modules, select_projects, ResolveError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
