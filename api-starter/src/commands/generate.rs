//! `generate` command: scaffold an API resource for one model
//!
//! ```bash
//! api-starter generate Order --routes
//! api-starter generate order_item --model --migration
//! api-starter generate Invoice --output ./build --json
//! ```

use anyhow::{Context, Result};
use api_starter::config::NamespaceSettings;
use api_starter::scaffold::route_line;
use api_starter::{
    ComponentKind, GenerationReport, GenerationRequest, KindSelection, RouteOutcome,
    ScaffoldConfig, ScaffoldGenerator,
};
use clap::Args;
use console::{style, Emoji};
use std::path::{Path, PathBuf};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "! ");
static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Generate model, migration, controller, request, resource, service and seeder
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateCommand {
    /// Model name (e.g. `Order`, `OrderItem`, `order_item`)
    name: String,

    /// Generate every component (the default when no component flag is given)
    #[arg(long)]
    all: bool,

    /// Generate the Eloquent model
    #[arg(long)]
    model: bool,

    /// Generate the create-table migration
    #[arg(long)]
    migration: bool,

    /// Generate the API controller
    #[arg(long)]
    controller: bool,

    /// Generate the form request
    #[arg(long)]
    request: bool,

    /// Generate the API resource
    #[arg(long)]
    resource: bool,

    /// Generate the service class
    #[arg(long)]
    service: bool,

    /// Generate the database seeder
    #[arg(long)]
    seeder: bool,

    /// Append an `apiResource` route to the routing file
    #[arg(long)]
    routes: bool,

    /// Overwrite existing files (generation always overwrites)
    #[arg(long)]
    force: bool,

    /// Write into flat per-kind directories under this path
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Laravel project root (default: current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Print the generated paths as JSON
    #[arg(long)]
    json: bool,
}

impl GenerateCommand {
    /// Execute the generate command
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, the model name is
    /// invalid, or any file cannot be generated.
    pub fn execute(&self, config_file: Option<&Path>) -> Result<()> {
        let project_root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        let config = ScaffoldConfig::load(&project_root, config_file)
            .context("Failed to load configuration")?;

        let namespaces = config.namespaces.clone();
        let mut generator = ScaffoldGenerator::new(config, &project_root);
        if let Some(output) = &self.output {
            generator = generator.standalone(output);
        }

        if self.force {
            tracing::debug!("--force given; existing files are always overwritten");
        }

        if !self.json {
            println!(
                "\n{} {} {}",
                style("Generating API resource for").cyan().bold(),
                style(&self.name).green().bold(),
                style("...").cyan().bold()
            );
        }

        let report = generator
            .generate(&self.request())
            .with_context(|| format!("Failed to generate scaffold for '{}'", self.name))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?
            );
        } else {
            print_report(&report, generator.output_root(), &namespaces);
        }

        Ok(())
    }

    fn request(&self) -> GenerationRequest {
        let selection = if self.all {
            KindSelection::all()
        } else {
            KindSelection::only(self.selected_kinds())
        };

        GenerationRequest::new(&self.name)
            .with_selection(selection)
            .with_routes(self.routes)
    }

    fn selected_kinds(&self) -> Vec<ComponentKind> {
        [
            (self.model, ComponentKind::Model),
            (self.migration, ComponentKind::Migration),
            (self.controller, ComponentKind::Controller),
            (self.request, ComponentKind::Request),
            (self.resource, ComponentKind::Resource),
            (self.service, ComponentKind::Service),
            (self.seeder, ComponentKind::Seeder),
        ]
        .into_iter()
        .filter_map(|(selected, kind)| selected.then_some(kind))
        .collect()
    }
}

fn print_report(report: &GenerationReport, output_root: &Path, namespaces: &NamespaceSettings) {
    println!(
        "\n{} {} files:",
        style("Generated").green().bold(),
        report.artifacts.len()
    );

    for (kind, path) in &report.artifacts {
        let shown = path.strip_prefix(output_root).unwrap_or(path);
        println!(
            "  {CHECK}{} ({})",
            style(shown.display()).dim(),
            style(kind).dim()
        );
    }

    match &report.routes {
        Some(RouteOutcome::Appended(path)) => {
            println!("  {CHECK}Route registered in {}", style(path.display()).dim());
        }
        Some(RouteOutcome::Skipped(_)) | None => {}
    }

    for warning in &report.warnings {
        println!("  {WARN}{}", style(warning).yellow());
    }

    println!(
        "\n{SPARKLE}API resource for {} is ready!",
        style(&report.names.studly).green().bold()
    );

    print_next_steps(report, namespaces);
}

fn print_next_steps(report: &GenerationReport, namespaces: &NamespaceSettings) {
    let steps = next_steps(report, namespaces);
    if steps.is_empty() {
        return;
    }

    println!("\n{}", style("Next steps:").cyan().bold());
    for (index, step) in steps.iter().enumerate() {
        println!("  {}. {step}", index + 1);
    }
}

fn next_steps(report: &GenerationReport, namespaces: &NamespaceSettings) -> Vec<String> {
    let mut steps = Vec::new();

    if report.artifacts.contains_key(&ComponentKind::Migration) {
        steps.push(format!(
            "Run the migration: {}",
            style("php artisan migrate").yellow()
        ));
    }
    if report.artifacts.contains_key(&ComponentKind::Request) {
        steps.push(format!(
            "Adjust validation rules in {}",
            style(format!("{}Request", report.names.studly)).yellow()
        ));
    }
    if report.artifacts.contains_key(&ComponentKind::Seeder) {
        steps.push(format!(
            "Seed the table: {}",
            style(format!(
                "php artisan db:seed --class={}Seeder",
                report.names.studly
            ))
            .yellow()
        ));
    }
    if !matches!(report.routes, Some(RouteOutcome::Appended(_))) {
        steps.push(format!(
            "Register the route: {}",
            style(route_line(&report.names, namespaces)).yellow()
        ));
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_starter::NameVariantSet;
    use clap::Parser;
    use std::collections::BTreeMap;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        generate: GenerateCommand,
    }

    fn parse(args: &[&str]) -> GenerateCommand {
        let argv = std::iter::once("api-starter").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().generate
    }

    #[test]
    fn test_no_flags_selects_every_kind() {
        let request = parse(&["Order"]).request();
        assert_eq!(request.identifier, "Order");
        assert_eq!(request.selection.kinds(), ComponentKind::ALL.to_vec());
        assert!(!request.routes);
    }

    #[test]
    fn test_routes_alone_still_selects_every_kind() {
        let request = parse(&["Order", "--routes"]).request();
        assert_eq!(request.selection.kinds(), ComponentKind::ALL.to_vec());
        assert!(request.routes);
    }

    #[test]
    fn test_specific_flags_select_only_those_kinds() {
        let request = parse(&["Order", "--seeder", "--model", "--controller"]).request();
        assert_eq!(
            request.selection.kinds(),
            vec![
                ComponentKind::Model,
                ComponentKind::Controller,
                ComponentKind::Seeder
            ]
        );
    }

    #[test]
    fn test_all_wins_over_specific_flags() {
        let request = parse(&["Order", "--all", "--model"]).request();
        assert_eq!(request.selection.kinds(), ComponentKind::ALL.to_vec());
    }

    #[test]
    fn test_output_and_root_are_parsed() {
        let command = parse(&["Order", "--output", "build", "--root", "shop", "--json", "--force"]);
        assert_eq!(command.output, Some(PathBuf::from("build")));
        assert_eq!(command.root, Some(PathBuf::from("shop")));
        assert!(command.json);
        assert!(command.force);
    }

    #[test]
    fn test_model_name_is_required() {
        assert!(TestCli::try_parse_from(["api-starter", "--model"]).is_err());
    }

    #[test]
    fn test_route_hint_uses_controller_namespace() {
        let report = GenerationReport {
            names: NameVariantSet::derive("Order").unwrap(),
            artifacts: BTreeMap::new(),
            routes: None,
            warnings: Vec::new(),
        };
        let namespaces = NamespaceSettings {
            controller_namespace: r"App\Http\Controllers\Api\V2".to_string(),
            ..NamespaceSettings::default()
        };

        let steps = next_steps(&report, &namespaces);

        assert_eq!(steps.len(), 1);
        assert!(steps[0].contains(
            r"Route::apiResource('orders', App\Http\Controllers\Api\V2\OrderController::class);"
        ));
    }

    #[test]
    fn test_no_route_hint_after_registration() {
        let mut artifacts = BTreeMap::new();
        artifacts.insert(ComponentKind::Seeder, PathBuf::from("seeder.php"));
        let report = GenerationReport {
            names: NameVariantSet::derive("Order").unwrap(),
            artifacts,
            routes: Some(RouteOutcome::Appended(PathBuf::from("routes/api.php"))),
            warnings: Vec::new(),
        };

        let steps = next_steps(&report, &NamespaceSettings::default());

        assert_eq!(steps.len(), 1);
        assert!(steps[0].contains("php artisan db:seed --class=OrderSeeder"));
    }
}
