//! Launch orchestration for the forked GWT process
//!
//! The orchestrator drives resolution (project selection, module discovery,
//! source collection, classpath assembly), assembles the forked JVM's
//! argument list and `CLASSPATH` environment, guarantees the needed
//! directories exist, and delegates to [`process::run`]. Launcher-specific
//! behavior (DevMode vs. CodeServer) hangs off the [`Launcher`] trait.

pub mod codeserver;
pub mod devmode;
pub mod process;

pub use codeserver::CodeServer;
pub use devmode::DevMode;

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{LaunchOptions, LogLevel};
use crate::graph::{Project, ProjectGraph};
use crate::resolve::{
    build_classpath, collect_sources, discover_modules, select_projects, ResolveError,
};

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Failed to prepare or start the GWT process: {0}")]
    Io(#[from] io::Error),

    #[error("GWT exited with status {0}")]
    ExitStatus(i32),
}

/// Launcher-specific extension points.
///
/// A launcher names the main class to fork, derives its work directory and
/// extra arguments from the primary selected project, and may require extra
/// directories or want the collected source roots prepended to the
/// classpath instead of passed as arguments.
pub trait Launcher {
    fn main_class(&self) -> &str;

    fn work_dir(&self, project: &Project) -> PathBuf;

    /// Arguments appended after the common option block, before the module
    /// names. Receives the collected source roots.
    fn specific_args(&self, project: &Project, sources: &[String]) -> Vec<String>;

    /// Creates any launcher-specific directories before the fork.
    fn ensure_dirs(&self, project: &Project) -> io::Result<()>;

    fn prepend_sources_to_classpath(&self) -> bool {
        false
    }
}

/// Resolves the selection, assembles arguments and classpath, and runs the
/// forked GWT process to completion.
///
/// The child's standard output and standard error are streamed line-by-line
/// to the info and warn log channels while it runs. A non-zero exit status
/// is reported as [`LaunchError::ExitStatus`].
pub async fn launch(
    graph: &ProjectGraph,
    options: &LaunchOptions,
    launcher: &dyn Launcher,
) -> Result<(), LaunchError> {
    let projects = select_projects(graph, options.projects.as_deref())?;
    let modules = discover_modules(&projects, options.modules.as_deref())?;
    let sources = collect_sources(graph, &projects, options.classpath_scope);

    let primary = projects[0];
    let work_dir = launcher.work_dir(primary);
    let args = assemble_args(options, launcher, primary, &work_dir, &sources, &modules);

    let classpath = build_classpath(
        &projects,
        options.classpath_scope,
        launcher.prepend_sources_to_classpath(),
        &sources,
    )?;
    let classpath_var =
        env::join_paths(&classpath).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    fs::create_dir_all(&primary.build_directory)?;
    fs::create_dir_all(&work_dir)?;
    launcher.ensure_dirs(primary)?;

    let java = java_executable();
    debug!(arguments = %args.join(" "), "forked JVM arguments");
    debug!(classpath = %classpath_var.to_string_lossy(), "forked JVM classpath");

    let status = process::run(
        &java,
        Path::new(&primary.build_directory),
        &classpath_var,
        &args,
        |line| info!("{}", line),
        |line| warn!("{}", line),
    )
    .await?;

    if status != 0 {
        return Err(LaunchError::ExitStatus(status));
    }
    Ok(())
}

/// Assembles the forked JVM's argument list:
/// jvm args, `-D` properties, main class, `-logLevel`, `-workDir`,
/// optional `-sourceLevel`, launcher-specific arguments, module names.
fn assemble_args(
    options: &LaunchOptions,
    launcher: &dyn Launcher,
    primary: &Project,
    work_dir: &Path,
    sources: &[String],
    modules: &[String],
) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();
    args.extend(options.jvm_args.iter().cloned());
    for (key, value) in &options.system_properties {
        args.push(format!("-D{}={}", key, value));
    }
    args.push(launcher.main_class().to_string());
    args.push("-logLevel".to_string());
    args.push(
        options
            .log_level
            .unwrap_or_else(LogLevel::from_ambient)
            .to_string(),
    );
    args.push("-workDir".to_string());
    args.push(work_dir.display().to_string());
    if let Some(level) = &options.source_level {
        args.push("-sourceLevel".to_string());
        args.push(level.clone());
    }
    args.extend(launcher.specific_args(primary, sources));
    args.extend(modules.iter().cloned());
    args
}

fn java_executable() -> PathBuf {
    match env::var_os("JAVA_HOME") {
        Some(home) => Path::new(&home).join("bin").join("java"),
        None => PathBuf::from("java"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ScopeFilter;
    use serial_test::serial;
    use std::collections::HashMap;

    struct StubLauncher;

    impl Launcher for StubLauncher {
        fn main_class(&self) -> &str {
            "com.example.Main"
        }

        fn work_dir(&self, project: &Project) -> PathBuf {
            Path::new(&project.build_directory).join("work")
        }

        fn specific_args(&self, _project: &Project, sources: &[String]) -> Vec<String> {
            sources
                .iter()
                .flat_map(|s| ["-src".to_string(), s.clone()])
                .collect()
        }

        fn ensure_dirs(&self, _project: &Project) -> io::Result<()> {
            Ok(())
        }
    }

    fn project() -> Project {
        Project {
            group_id: "com.example".to_string(),
            artifact_id: "app".to_string(),
            version: "1.0".to_string(),
            packaging: "gwt-app".to_string(),
            compile_source_roots: vec![],
            output_directory: "app/target/classes".to_string(),
            build_directory: "app/target".to_string(),
            dependency_artifacts: vec![],
            artifacts: vec![],
            project_references: HashMap::new(),
            plugin: None,
            execution_view: None,
        }
    }

    #[test]
    fn test_argument_assembly_order() {
        let options = LaunchOptions {
            log_level: Some(LogLevel::Info),
            classpath_scope: ScopeFilter::Runtime,
            source_level: Some("17".to_string()),
            jvm_args: vec!["-Xmx1g".to_string()],
            system_properties: vec![
                ("gwt.persistentunitcache".to_string(), "false".to_string()),
                ("java.awt.headless".to_string(), "true".to_string()),
            ],
            ..Default::default()
        };
        let primary = project();
        let sources = vec!["app/src".to_string()];
        let modules = vec!["com.example.App".to_string()];

        let args = assemble_args(
            &options,
            &StubLauncher,
            &primary,
            Path::new("app/target/work"),
            &sources,
            &modules,
        );

        assert_eq!(
            args,
            vec![
                "-Xmx1g",
                "-Dgwt.persistentunitcache=false",
                "-Djava.awt.headless=true",
                "com.example.Main",
                "-logLevel",
                "INFO",
                "-workDir",
                "app/target/work",
                "-sourceLevel",
                "17",
                "-src",
                "app/src",
                "com.example.App",
            ]
        );
    }

    #[test]
    fn test_source_level_omitted_when_absent() {
        let options = LaunchOptions {
            log_level: Some(LogLevel::Warn),
            ..Default::default()
        };
        let primary = project();

        let args = assemble_args(
            &options,
            &StubLauncher,
            &primary,
            Path::new("app/target/work"),
            &[],
            &[],
        );

        assert!(!args.contains(&"-sourceLevel".to_string()));
    }

    #[test]
    #[serial]
    fn test_java_executable_prefers_java_home() {
        let previous = env::var_os("JAVA_HOME");

        env::set_var("JAVA_HOME", "/opt/jdk");
        assert_eq!(java_executable(), PathBuf::from("/opt/jdk/bin/java"));

        env::remove_var("JAVA_HOME");
        assert_eq!(java_executable(), PathBuf::from("java"));

        if let Some(home) = previous {
            env::set_var("JAVA_HOME", home);
        }
    }
}
