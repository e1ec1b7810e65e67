//! CodeServer launcher

use std::io;
use std::path::{Path, PathBuf};

use super::Launcher;
use crate::graph::Project;

/// Launches `com.google.gwt.codeserver.CodeServer`.
///
/// The code server takes its source search path as explicit `-src`
/// arguments, one per collected source root, rather than from the
/// classpath.
pub struct CodeServer {
    launcher_dir: Option<PathBuf>,
}

impl CodeServer {
    pub fn new(launcher_dir: Option<PathBuf>) -> Self {
        Self { launcher_dir }
    }
}

impl Launcher for CodeServer {
    fn main_class(&self) -> &str {
        "com.google.gwt.codeserver.CodeServer"
    }

    fn work_dir(&self, project: &Project) -> PathBuf {
        Path::new(&project.build_directory)
            .join("gwt")
            .join("codeserver")
    }

    fn specific_args(&self, _project: &Project, sources: &[String]) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(dir) = &self.launcher_dir {
            args.push("-launcherDir".to_string());
            args.push(dir.display().to_string());
        }
        for source in sources {
            args.push("-src".to_string());
            args.push(source.clone());
        }
        args
    }

    fn ensure_dirs(&self, _project: &Project) -> io::Result<()> {
        Ok(())
    }
}
