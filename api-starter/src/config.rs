//! Configuration management for api-starter
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `API_STARTER_` prefix, `__` for nesting)
//! 2. An explicit file passed with `--config`
//! 3. `<project root>/api-starter.toml`
//! 4. `~/.config/api-starter/config.toml` (user config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # api-starter.toml
//! [namespaces]
//! model_namespace = "Domain\\Models"
//! controller_namespace = "App\\Http\\Controllers\\Api\\V1"
//!
//! [stubs]
//! override_dir = "resources/stubs/api-starter"
//!
//! [routes]
//! file = "routes/api.php"
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Project-local configuration file name
pub const PROJECT_CONFIG_FILE: &str = "api-starter.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "API_STARTER_";

/// Default namespace for each generated PHP class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceSettings {
    /// Namespace of generated models
    pub model_namespace: String,
    /// Namespace of generated API controllers
    pub controller_namespace: String,
    /// Namespace of generated form requests
    pub request_namespace: String,
    /// Namespace of generated API resources
    pub resource_namespace: String,
    /// Namespace of generated services
    pub service_namespace: String,
}

impl Default for NamespaceSettings {
    fn default() -> Self {
        Self {
            model_namespace: r"App\Models".to_string(),
            controller_namespace: r"App\Http\Controllers\Api".to_string(),
            request_namespace: r"App\Http\Requests".to_string(),
            resource_namespace: r"App\Http\Resources".to_string(),
            service_namespace: r"App\Services".to_string(),
        }
    }
}

/// Stub lookup settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubSettings {
    /// Override directory, relative to the project root unless absolute
    pub override_dir: PathBuf,
}

impl Default for StubSettings {
    fn default() -> Self {
        Self {
            override_dir: PathBuf::from("resources/stubs/api-starter"),
        }
    }
}

/// Route registration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSettings {
    /// Routing file, relative to the project root unless absolute
    pub file: PathBuf,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("routes/api.php"),
        }
    }
}

/// Complete api-starter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Per-kind namespaces
    #[serde(default)]
    pub namespaces: NamespaceSettings,

    /// Stub override settings
    #[serde(default)]
    pub stubs: StubSettings,

    /// Routing file settings
    #[serde(default)]
    pub routes: RouteSettings,
}

impl ScaffoldConfig {
    /// Load configuration for a project
    ///
    /// `explicit` is a file given on the command line; it must exist if set.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is malformed, an explicit file
    /// is missing, or a value has the wrong type.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                figment = figment.merge(Toml::file(user_config));
            }
        }

        let project_config = project_root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            figment = figment.merge(Toml::file(project_config));
        }

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))
                .into());
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Self = figment.extract()?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Load configuration from a TOML string layered over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or has the wrong shape.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(source))
            .extract()?)
    }

    /// Get the user-level configuration path
    ///
    /// Returns `~/.config/api-starter/config.toml` on Linux, or `None` when no
    /// config directory can be determined.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("api-starter").join("config.toml"))
    }

    /// Override directory resolved against `project_root`
    #[must_use]
    pub fn override_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.stubs.override_dir)
    }

    /// Routing file resolved against `project_root`
    #[must_use]
    pub fn routes_file(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.routes.file)
    }
}
