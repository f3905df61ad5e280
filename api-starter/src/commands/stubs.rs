//! Stub management commands
//!
//! - `publish` - Copy bundled stubs into the project override directory
//! - `list` - Show every stub and whether the project overrides it
//! - `diff` - Show changes from the bundled default

use anyhow::{bail, Context, Result};
use api_starter::stubs::bundled::bundled_stub;
use api_starter::stubs::{write_artifact, DirectoryResolver, BUNDLED_STUBS};
use api_starter::ScaffoldConfig;
use clap::{Args, Subcommand};
use console::{style, Emoji};
use similar::{ChangeTag, TextDiff};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static SKIP: Emoji<'_, '_> = Emoji("- ", "- ");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
static FILE: Emoji<'_, '_> = Emoji("📄 ", "");
static CUSTOM: Emoji<'_, '_> = Emoji("✨ ", "");
static DEFAULT: Emoji<'_, '_> = Emoji("  ", "");

/// Stub management arguments
#[derive(Debug, Args)]
pub struct StubsArgs {
    /// Laravel project root (default: current directory)
    #[arg(long, value_name = "DIR", global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: StubsCommand,
}

/// Stub management subcommands
#[derive(Debug, Subcommand)]
pub enum StubsCommand {
    /// Copy the bundled stubs into the override directory for customization
    Publish {
        /// Overwrite stubs that were already published
        #[arg(long)]
        force: bool,
    },
    /// List all stubs and their status
    List,
    /// Show diff between a customized stub and its bundled default
    Diff {
        /// Stub name (e.g., controllers/api_controller.stub)
        name: String,
    },
}

impl StubsArgs {
    /// Execute the stubs command
    ///
    /// # Errors
    ///
    /// Returns error if configuration cannot be loaded or a stub operation fails.
    pub fn execute(&self, config_file: Option<&Path>) -> Result<()> {
        let project_root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };
        let config = ScaffoldConfig::load(&project_root, config_file)
            .context("Failed to load configuration")?;
        let overrides = DirectoryResolver::new(config.override_dir(&project_root));

        match &self.command {
            StubsCommand::Publish { force } => publish_stubs(&overrides, *force),
            StubsCommand::List => {
                list_stubs(&overrides);
                Ok(())
            }
            StubsCommand::Diff { name } => diff_stub(&overrides, name),
        }
    }
}

/// Copy every bundled stub into the override directory
fn publish_stubs(overrides: &DirectoryResolver, force: bool) -> Result<()> {
    println!(
        "{FOLDER}Publishing stubs to {}",
        style(overrides.root().display()).cyan()
    );
    println!();

    let mut published = 0;
    let mut skipped = 0;

    for &(name, contents) in BUNDLED_STUBS {
        let path = overrides.stub_path(name);
        if path.exists() && !force {
            println!("  {SKIP}{} (exists)", style(name).dim());
            skipped += 1;
            continue;
        }

        write_artifact(&path, contents)
            .with_context(|| format!("Failed to publish stub: {name}"))?;
        println!("  {CHECK}{}", style(name).green());
        published += 1;
    }

    println!();
    println!("{CHECK}Published {published} stubs");
    if skipped > 0 {
        println!(
            "  {skipped} already present; use {} to overwrite",
            style("--force").yellow()
        );
    }

    Ok(())
}

/// List stubs grouped by directory with their customization status
fn list_stubs(overrides: &DirectoryResolver) {
    println!("{FOLDER}Stubs");
    println!();
    println!("  Overrides: {}", style(overrides.root().display()).cyan());
    println!();

    let mut by_group: BTreeMap<&str, Vec<(&str, bool)>> = BTreeMap::new();
    for &(name, _) in BUNDLED_STUBS {
        let group = name.split('/').next().unwrap_or("other");
        let customized = overrides.stub_path(name).is_file();
        by_group.entry(group).or_default().push((name, customized));
    }

    let mut total_customized = 0;
    let mut total_default = 0;

    for (group, stubs) in &by_group {
        println!("  {}", style(group).bold());
        for (name, customized) in stubs {
            if *customized {
                println!("    {CUSTOM}{}", style(name).yellow());
                total_customized += 1;
            } else {
                println!("    {DEFAULT}{}", style(name).dim());
                total_default += 1;
            }
        }
        println!();
    }

    println!(
        "  {} customized, {} default",
        style(total_customized).yellow(),
        style(total_default).dim()
    );
}

/// Show the line diff of an override against the bundled default
fn diff_stub(overrides: &DirectoryResolver, name: &str) -> Result<()> {
    let Some(default_content) = bundled_stub(name) else {
        bail!("Unknown stub '{name}'. Run 'api-starter stubs list' to see available stubs");
    };

    let custom_path = overrides.stub_path(name);
    if !custom_path.is_file() {
        println!("Stub '{name}' is not customized (using default)");
        return Ok(());
    }
    let custom_content = std::fs::read_to_string(&custom_path)
        .with_context(|| format!("Failed to read {}", custom_path.display()))?;

    println!("{FILE}{}", style(name).bold());
    println!();

    let diff = TextDiff::from_lines(default_content, custom_content.as_str());
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => print!("{}", style(format!("-{change}")).red()),
            ChangeTag::Insert => print!("{}", style(format!("+{change}")).green()),
            ChangeTag::Equal => print!(" {change}"),
        }
    }
    println!();

    Ok(())
}
