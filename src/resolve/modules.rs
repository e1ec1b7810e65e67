//! GWT module discovery

use tracing::warn;

use super::ResolveError;
use crate::graph::Project;

/// Determines the GWT modules to pass to the forked process.
///
/// An explicit comma-delimited list is used verbatim, in the given order,
/// duplicates included. Otherwise each selected project contributes its
/// declared plugin `module_name`; projects without plugin configuration are
/// skipped with a single warning listing them all.
pub fn discover_modules(
    projects: &[&Project],
    explicit_modules: Option<&str>,
) -> Result<Vec<String>, ResolveError> {
    let mut modules: Vec<String> = Vec::new();

    match explicit_modules.filter(|list| !list.trim().is_empty()) {
        Some(list) => {
            modules.extend(
                list.split(',')
                    .filter(|token| !token.is_empty())
                    .map(String::from),
            );
        }
        None => {
            let mut non_gwt_projects: Vec<String> = Vec::new();
            for project in projects {
                match &project.plugin {
                    Some(config) => modules.push(config.module_name.clone()),
                    None => non_gwt_projects.push(project.versionless_key()),
                }
            }
            if !non_gwt_projects.is_empty() {
                warn!(
                    "Found projects without a declared GWT module name when discovering modules; they've been ignored: {}",
                    non_gwt_projects.join(", ")
                );
            }
        }
    }

    if modules.is_empty() {
        return Err(ResolveError::NoModule);
    }

    Ok(modules)
}
