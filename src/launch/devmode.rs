//! DevMode launcher

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Launcher;
use crate::graph::Project;

/// Launches `com.google.gwt.dev.DevMode`.
///
/// DevMode serves compiled output from a war directory and reads module
/// sources from the classpath, so the collected source roots are prepended
/// to it.
pub struct DevMode {
    war: Option<PathBuf>,
    startup_urls: Vec<String>,
}

impl DevMode {
    pub fn new(war: Option<PathBuf>, startup_urls: Vec<String>) -> Self {
        Self { war, startup_urls }
    }

    fn war_dir(&self, project: &Project) -> PathBuf {
        self.war.clone().unwrap_or_else(|| {
            Path::new(&project.build_directory)
                .join("gwt")
                .join("devmode")
                .join("war")
        })
    }
}

impl Launcher for DevMode {
    fn main_class(&self) -> &str {
        "com.google.gwt.dev.DevMode"
    }

    fn work_dir(&self, project: &Project) -> PathBuf {
        Path::new(&project.build_directory)
            .join("gwt")
            .join("devmode")
            .join("work")
    }

    fn specific_args(&self, project: &Project, _sources: &[String]) -> Vec<String> {
        let mut args = vec![
            "-war".to_string(),
            self.war_dir(project).display().to_string(),
        ];
        for url in &self.startup_urls {
            args.push("-startupUrl".to_string());
            args.push(url.clone());
        }
        args
    }

    fn ensure_dirs(&self, project: &Project) -> io::Result<()> {
        fs::create_dir_all(self.war_dir(project))
    }

    fn prepend_sources_to_classpath(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

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
    fn test_devmode_main_class() {
        let devmode = DevMode::new(None, vec![]);
        assert_eq!(devmode.main_class(), "com.google.gwt.dev.DevMode");
    }

    #[test]
    fn test_devmode_prepends_sources() {
        assert!(DevMode::new(None, vec![]).prepend_sources_to_classpath());
    }

    #[test]
    fn test_devmode_default_directories() {
        let devmode = DevMode::new(None, vec![]);
        let project = project();
        assert_eq!(
            devmode.work_dir(&project),
            PathBuf::from("app/target/gwt/devmode/work")
        );
        assert_eq!(
            devmode.war_dir(&project),
            PathBuf::from("app/target/gwt/devmode/war")
        );
    }

    #[test]
    fn test_devmode_war_override_and_startup_urls() {
        let devmode = DevMode::new(
            Some(PathBuf::from("custom/war")),
            vec!["index.html".to_string()],
        );

        let args = devmode.specific_args(&project(), &[]);
        assert_eq!(args, vec!["-war", "custom/war", "-startupUrl", "index.html"]);
    }
}
