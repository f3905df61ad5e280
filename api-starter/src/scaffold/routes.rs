//! Resource route registration

use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::component::ComponentKind;
use super::naming::NameVariantSet;
use crate::config::NamespaceSettings;
use crate::error::{Result, ScaffoldError};

/// What happened to the routing file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "lowercase")]
pub enum RouteOutcome {
    /// The route declaration was appended
    Appended(PathBuf),
    /// The routing file does not exist; nothing was written
    Skipped(PathBuf),
}

/// `Route::apiResource(...)` statement for a model
#[must_use]
pub fn route_line(names: &NameVariantSet, namespaces: &NamespaceSettings) -> String {
    format!(
        "Route::apiResource('{route}', {namespace}\\{controller}::class);",
        route = names.route_name(),
        namespace = namespaces.controller_namespace,
        controller = ComponentKind::Controller.class_name(names),
    )
}

/// Comment line plus [`route_line`], as appended to the routing file
#[must_use]
pub fn route_declaration(names: &NameVariantSet, namespaces: &NamespaceSettings) -> String {
    format!(
        "\n// {model} API Routes\n{line}\n",
        model = names.studly,
        line = route_line(names, namespaces),
    )
}

/// Append the resource route for `names` to `routes_file` if it exists
///
/// A missing file is not an error: the outcome is [`RouteOutcome::Skipped`]
/// and the file system is left untouched.
///
/// # Errors
///
/// Returns [`ScaffoldError::Filesystem`] if the file exists but cannot be
/// appended to.
pub fn register_route(
    routes_file: &Path,
    names: &NameVariantSet,
    namespaces: &NamespaceSettings,
) -> Result<RouteOutcome> {
    if !routes_file.is_file() {
        tracing::warn!(path = %routes_file.display(), "routing file not found, skipping route registration");
        return Ok(RouteOutcome::Skipped(routes_file.to_path_buf()));
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(routes_file)
        .map_err(|e| ScaffoldError::filesystem(routes_file, e))?;
    file.write_all(route_declaration(names, namespaces).as_bytes())
        .map_err(|e| ScaffoldError::filesystem(routes_file, e))?;

    tracing::debug!(path = %routes_file.display(), route = %names.route_name(), "registered resource route");
    Ok(RouteOutcome::Appended(routes_file.to_path_buf()))
}
