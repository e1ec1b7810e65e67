//! Dependency artifacts and scope filtering

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Dependency scope of an [`Artifact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    System,
    Provided,
    Compile,
    Runtime,
    Test,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::System => "system",
            Scope::Provided => "provided",
            Scope::Compile => "compile",
            Scope::Runtime => "runtime",
            Scope::Test => "test",
        };
        f.write_str(name)
    }
}

/// Named scope filter controlling which dependency artifacts end up on the
/// classpath.
///
/// Each name expands to a fixed set of included scopes:
///
/// | name              | included scopes                            |
/// |-------------------|--------------------------------------------|
/// | `compile`         | system, provided, compile                  |
/// | `runtime`         | compile, runtime                           |
/// | `compile+runtime` | system, provided, compile, runtime         |
/// | `runtime+system`  | system, compile, runtime                   |
/// | `test`            | system, provided, compile, runtime, test   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeFilter {
    Compile,
    Runtime,
    CompileRuntime,
    RuntimeSystem,
    Test,
}

impl ScopeFilter {
    /// Returns true when an artifact with the given scope passes this filter.
    pub fn includes(self, scope: Scope) -> bool {
        match self {
            ScopeFilter::Compile => {
                matches!(scope, Scope::System | Scope::Provided | Scope::Compile)
            }
            ScopeFilter::Runtime => matches!(scope, Scope::Compile | Scope::Runtime),
            ScopeFilter::CompileRuntime => matches!(
                scope,
                Scope::System | Scope::Provided | Scope::Compile | Scope::Runtime
            ),
            ScopeFilter::RuntimeSystem => {
                matches!(scope, Scope::System | Scope::Compile | Scope::Runtime)
            }
            ScopeFilter::Test => true,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScopeFilter::Compile => "compile",
            ScopeFilter::Runtime => "runtime",
            ScopeFilter::CompileRuntime => "compile+runtime",
            ScopeFilter::RuntimeSystem => "runtime+system",
            ScopeFilter::Test => "test",
        }
    }
}

impl Default for ScopeFilter {
    fn default() -> Self {
        ScopeFilter::Runtime
    }
}

impl fmt::Display for ScopeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScopeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compile" => Ok(ScopeFilter::Compile),
            "runtime" => Ok(ScopeFilter::Runtime),
            "compile+runtime" => Ok(ScopeFilter::CompileRuntime),
            "runtime+system" => Ok(ScopeFilter::RuntimeSystem),
            "test" => Ok(ScopeFilter::Test),
            _ => Err(format!(
                "Invalid classpath scope: {}. Valid options: compile, runtime, compile+runtime, runtime+system, test",
                s
            )),
        }
    }
}

/// A resolved dependency of a reactor project.
///
/// `kind` is the packaging/handler kind (`jar`, `gwt-lib`, ...);
/// `added_to_classpath` mirrors the handler's classpath flag. `file` is the
/// resolved artifact location and may be absent for artifacts that were
/// never downloaded or built.
#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default)]
    pub classifier: Option<String>,
    pub scope: Scope,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_true")]
    pub added_to_classpath: bool,
    #[serde(default)]
    pub file: Option<String>,
}

fn default_kind() -> String {
    "jar".to_string()
}

fn default_true() -> bool {
    true
}

impl Artifact {
    /// Dependency key used by project reference maps: `group:artifact:version`.
    pub fn key(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// Full identifier for log messages: `group:artifact:kind[:classifier]:version`.
    pub fn id(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}:{}:{}:{}:{}",
                self.group_id, self.artifact_id, self.kind, classifier, self.version
            ),
            None => format!(
                "{}:{}:{}:{}",
                self.group_id, self.artifact_id, self.kind, self.version
            ),
        }
    }
}
