//! Scaffold generator orchestrator
//!
//! This module coordinates the generation of all files for one model:
//! - Model
//! - Migration
//! - Controller
//! - Form request
//! - API resource
//! - Service
//! - Seeder
//! - Route registration (optional)
//!
//! Components are generated one at a time in [`ComponentKind::ALL`] order. The
//! first failure aborts the run; files already written stay on disk.

use chrono::{Local, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use super::component::{ComponentKind, OutputLayout};
use super::naming::NameVariantSet;
use super::routes::{register_route, RouteOutcome};
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::stubs::{write_artifact, StubRenderer};

/// Sortable timestamp prefix for migration and seeder filenames
pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// Which component kinds a run should produce
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindSelection {
    all: bool,
    kinds: BTreeSet<ComponentKind>,
}

impl KindSelection {
    /// Select every kind
    #[must_use]
    pub fn all() -> Self {
        Self {
            all: true,
            kinds: BTreeSet::new(),
        }
    }

    /// Select only the given kinds
    #[must_use]
    pub fn only(kinds: impl IntoIterator<Item = ComponentKind>) -> Self {
        Self {
            all: false,
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Kinds to generate, in generation order
    ///
    /// An empty selection without `all` means every kind.
    #[must_use]
    pub fn kinds(&self) -> Vec<ComponentKind> {
        if self.all || self.kinds.is_empty() {
            ComponentKind::ALL.to_vec()
        } else {
            self.kinds.iter().copied().collect()
        }
    }
}

/// Input for one generation run
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Model identifier as typed by the user
    pub identifier: String,
    /// Kinds to generate
    pub selection: KindSelection,
    /// Append a resource route to the routing file
    pub routes: bool,
}

impl GenerationRequest {
    /// Request every kind for `identifier`, without routes
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            selection: KindSelection::default(),
            routes: false,
        }
    }

    /// Replace the kind selection
    #[must_use]
    pub fn with_selection(mut self, selection: KindSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Enable route registration
    #[must_use]
    pub const fn with_routes(mut self, routes: bool) -> Self {
        self.routes = routes;
        self
    }
}

/// One rendered file, before it is written
#[derive(Debug, Clone)]
pub struct RenderedArtifact {
    /// Kind that produced it
    pub kind: ComponentKind,
    /// Path relative to the output root
    pub path: PathBuf,
    /// Rendered file contents
    pub contents: String,
}

/// Result of a successful run
#[derive(Debug, Serialize)]
pub struct GenerationReport {
    /// Naming variants used for the run
    pub names: NameVariantSet,
    /// Written file per kind
    pub artifacts: BTreeMap<ComponentKind, PathBuf>,
    /// Route registration result, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<RouteOutcome>,
    /// Soft failures that did not abort the run
    #[serde(serialize_with = "serialize_warnings")]
    pub warnings: Vec<ScaffoldError>,
}

fn serialize_warnings<S: Serializer>(warnings: &[ScaffoldError], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(warnings.iter().map(ToString::to_string))
}

/// Scaffold generator
pub struct ScaffoldGenerator {
    /// Loaded configuration
    config: ScaffoldConfig,
    /// Stub resolution chain
    renderer: StubRenderer,
    /// Project root; stubs overrides and the routing file live here
    project_root: PathBuf,
    /// Directory generated files are written under
    output_root: PathBuf,
    /// Directory convention for generated files
    layout: OutputLayout,
}

impl ScaffoldGenerator {
    /// Create a generator writing into a Laravel project at `project_root`
    #[must_use]
    pub fn new(config: ScaffoldConfig, project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let renderer = StubRenderer::with_override_dir(config.override_dir(&project_root));

        Self {
            config,
            renderer,
            output_root: project_root.clone(),
            project_root,
            layout: OutputLayout::Framework,
        }
    }

    /// Write into flat per-kind directories under `output_dir` instead
    #[must_use]
    pub fn standalone(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_root = output_dir.into();
        self.layout = OutputLayout::Standalone;
        self
    }

    /// Replace the stub resolution chain
    #[must_use]
    pub fn with_renderer(mut self, renderer: StubRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Directory generated files are written under
    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Generate the requested components, stamped with the current local time
    ///
    /// # Errors
    ///
    /// See [`ScaffoldGenerator::generate_at`].
    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationReport> {
        self.generate_at(request, Local::now().naive_local())
    }

    /// Generate the requested components using `now` for timestamped filenames
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is invalid, a stub cannot be found,
    /// or a file cannot be written. A missing routing file is reported as a
    /// warning in the returned report instead.
    pub fn generate_at(
        &self,
        request: &GenerationRequest,
        now: NaiveDateTime,
    ) -> Result<GenerationReport> {
        let names = NameVariantSet::derive(&request.identifier)?;
        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();

        tracing::info!(
            model = %names.studly,
            output = %self.output_root.display(),
            "generating components"
        );

        let mut artifacts = BTreeMap::new();
        for kind in request.selection.kinds() {
            let artifact = self.render(kind, &names, &timestamp)?;
            let path = self.output_root.join(&artifact.path);
            write_artifact(&path, &artifact.contents)?;
            artifacts.insert(kind, path);
        }

        let mut warnings = Vec::new();
        let routes = if request.routes {
            let routes_file = self.config.routes_file(&self.project_root);
            let outcome = register_route(&routes_file, &names, &self.config.namespaces)?;
            if let RouteOutcome::Skipped(path) = &outcome {
                warnings.push(ScaffoldError::RoutingFileMissing { path: path.clone() });
            }
            Some(outcome)
        } else {
            None
        };

        tracing::info!(count = artifacts.len(), "generation finished");

        Ok(GenerationReport {
            names,
            artifacts,
            routes,
            warnings,
        })
    }

    /// Render one component without touching the file system
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateNotFound`] if the stub is missing.
    pub fn render(
        &self,
        kind: ComponentKind,
        names: &NameVariantSet,
        timestamp: &str,
    ) -> Result<RenderedArtifact> {
        let tokens = kind.tokens(names, &self.config.namespaces, timestamp);
        let contents = self.renderer.render(kind.spec().stub, &tokens)?;
        let path = kind.output_path(self.layout, &tokens);

        Ok(RenderedArtifact {
            kind,
            path,
            contents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stubs::DirectoryResolver;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn moment() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(9, 30, 5))
            .unwrap()
    }

    #[test]
    fn test_empty_selection_means_all() {
        assert_eq!(KindSelection::default().kinds(), ComponentKind::ALL.to_vec());
        assert_eq!(KindSelection::all().kinds(), ComponentKind::ALL.to_vec());
    }

    #[test]
    fn test_selection_is_ordered() {
        let selection = KindSelection::only([ComponentKind::Seeder, ComponentKind::Model]);
        assert_eq!(
            selection.kinds(),
            vec![ComponentKind::Model, ComponentKind::Seeder]
        );
    }

    #[test]
    fn test_render_controller() {
        let temp_dir = tempdir().unwrap();
        let generator = ScaffoldGenerator::new(ScaffoldConfig::default(), temp_dir.path());
        let names = NameVariantSet::derive("Order").unwrap();

        let artifact = generator
            .render(ComponentKind::Controller, &names, "2026_10_16_093005")
            .unwrap();

        assert_eq!(
            artifact.path,
            PathBuf::from("app/Http/Controllers/Api/OrderController.php")
        );
        assert!(artifact.contents.contains("class OrderController"));
        assert!(artifact.contents.contains(r"namespace App\Http\Controllers\Api;"));
        assert!(artifact.contents.contains(r"use App\Models\Order;"));
        assert!(!artifact.contents.contains("{{ "));
    }

    #[test]
    fn test_generate_single_kind() {
        let temp_dir = tempdir().unwrap();
        let generator = ScaffoldGenerator::new(ScaffoldConfig::default(), temp_dir.path());
        let request = GenerationRequest::new("order_item")
            .with_selection(KindSelection::only([ComponentKind::Model]));

        let report = generator.generate_at(&request, moment()).unwrap();

        assert_eq!(report.artifacts.len(), 1);
        let path = &report.artifacts[&ComponentKind::Model];
        assert_eq!(path, &temp_dir.path().join("app/Models/OrderItem.php"));
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("class OrderItem extends Model"));
        assert!(contents.contains("protected $table = 'order_items';"));
    }

    #[test]
    fn test_generate_migration_timestamp() {
        let temp_dir = tempdir().unwrap();
        let generator = ScaffoldGenerator::new(ScaffoldConfig::default(), temp_dir.path());
        let request = GenerationRequest::new("Category")
            .with_selection(KindSelection::only([ComponentKind::Migration]));

        let report = generator.generate_at(&request, moment()).unwrap();

        assert_eq!(
            report.artifacts[&ComponentKind::Migration],
            temp_dir
                .path()
                .join("database/migrations/2026_10_16_093005_create_categorys_table.php")
        );
    }

    #[test]
    fn test_custom_namespace_flows_into_output() {
        let temp_dir = tempdir().unwrap();
        let mut config = ScaffoldConfig::default();
        config.namespaces.service_namespace = r"Domain\Billing".to_string();
        let generator = ScaffoldGenerator::new(config, temp_dir.path());
        let request = GenerationRequest::new("Invoice")
            .with_selection(KindSelection::only([ComponentKind::Service]));

        let report = generator.generate_at(&request, moment()).unwrap();
        let contents = fs::read_to_string(&report.artifacts[&ComponentKind::Service]).unwrap();
        assert!(contents.contains(r"namespace Domain\Billing;"));
        assert!(contents.contains("class InvoiceService"));
    }

    #[test]
    fn test_invalid_identifier_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let generator = ScaffoldGenerator::new(ScaffoldConfig::default(), temp_dir.path());

        let err = generator
            .generate_at(&GenerationRequest::new("  "), moment())
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::InvalidIdentifier { .. }));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_stub_aborts_after_prior_writes() {
        let temp_dir = tempdir().unwrap();
        let stubs = temp_dir.path().join("only-model");
        fs::create_dir_all(stubs.join("models")).unwrap();
        fs::write(stubs.join("models/model.stub"), "class {{ CLASS_NAME }}").unwrap();

        let generator = ScaffoldGenerator::new(ScaffoldConfig::default(), temp_dir.path())
            .with_renderer(StubRenderer::new(vec![Box::new(DirectoryResolver::new(&stubs))]));
        let request = GenerationRequest::new("Order").with_selection(KindSelection::only([
            ComponentKind::Model,
            ComponentKind::Migration,
        ]));

        let err = generator.generate_at(&request, moment()).unwrap_err();

        assert!(matches!(err, ScaffoldError::TemplateNotFound { .. }));
        assert!(temp_dir.path().join("app/Models/Order.php").exists());
    }

    #[test]
    fn test_routes_missing_is_a_warning() {
        let temp_dir = tempdir().unwrap();
        let generator = ScaffoldGenerator::new(ScaffoldConfig::default(), temp_dir.path());
        let request = GenerationRequest::new("Order")
            .with_selection(KindSelection::only([ComponentKind::Controller]))
            .with_routes(true);

        let report = generator.generate_at(&request, moment()).unwrap();

        assert!(matches!(report.routes, Some(RouteOutcome::Skipped(_))));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].is_soft());
        assert!(!temp_dir.path().join("routes/api.php").exists());
    }

    #[test]
    fn test_report_serializes_kind_keys() {
        let temp_dir = tempdir().unwrap();
        let generator = ScaffoldGenerator::new(ScaffoldConfig::default(), temp_dir.path());
        let request = GenerationRequest::new("Order")
            .with_selection(KindSelection::only([ComponentKind::Request]))
            .with_routes(true);

        let report = generator.generate_at(&request, moment()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["artifacts"]["request"].is_string());
        assert_eq!(json["routes"]["status"], "skipped");
        assert!(json["warnings"][0]
            .as_str()
            .unwrap()
            .starts_with("routing file not found"));
    }
}
