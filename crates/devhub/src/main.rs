// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Devhub - frontend plugin configuration resolver.
//!
//! This is the binary entry point for inspecting and linting the dynamic
//! plugin configuration of a Devhub portal.

mod columns;
mod lint;
mod output;
mod resolve;
mod visible;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use devhub_catalog::ViewContext;
use devhub_config::{load_app_config, AppConfig, DevhubSettings};
use devhub_core::DevhubError;
use tracing::warn;

/// Devhub - frontend plugin configuration resolver.
#[derive(Parser, Debug)]
#[command(name = "devhub", version, about, long_about = None)]
struct Cli {
    /// App-config file to load. Repeat to layer files; later files win.
    /// Defaults to `sources.app_config` from devhub.toml. Must precede the
    /// subcommand.
    #[arg(long = "config", value_name = "FILE")]
    config: Vec<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the resolved dynamic plugin registry as JSON.
    Resolve,
    /// Print the catalog table columns for a view.
    Columns {
        /// Entity kind filter of the view.
        #[arg(long)]
        kind: Option<String>,
        /// `spec.type` filter of the view.
        #[arg(long = "type", value_name = "TYPE")]
        spec_type: Option<String>,
        /// The listed entities span several namespaces.
        #[arg(long)]
        spans_namespaces: bool,
    },
    /// Print the mount points that render for an entity.
    Visible {
        /// Mount point id, e.g. `entity.page.overview/cards`.
        #[arg(long)]
        mount_point: String,
        /// Entity document (YAML or JSON).
        #[arg(long, value_name = "FILE")]
        entity: PathBuf,
    },
    /// Report configuration problems.
    Lint,
}

fn main() {
    let cli = Cli::parse();

    let settings = match devhub_config::load_and_validate_settings() {
        Ok(settings) => settings,
        Err(errors) => {
            devhub_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&settings.logging.level);

    let code = match run(cli, &settings) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli, settings: &DevhubSettings) -> Result<i32, DevhubError> {
    let app = load_sources(&cli.config, settings)?;
    let pretty = settings.output.pretty;

    match cli.command {
        Commands::Resolve => println!("{}", resolve::run_resolve(&app, pretty)?),
        Commands::Columns {
            kind,
            spec_type,
            spans_namespaces,
        } => {
            let view = ViewContext {
                kind,
                spec_type,
                spans_namespaces,
            };
            println!("{}", columns::run_columns(&app, &view, pretty)?);
        }
        Commands::Visible {
            mount_point,
            entity,
        } => {
            let entity = visible::read_entity(&entity)?;
            println!(
                "{}",
                visible::run_visible(&app, &mount_point, &entity, pretty)?
            );
        }
        Commands::Lint => {
            let findings = lint::run_lint(&app);
            if !findings.is_empty() {
                devhub_config::render_errors(&findings);
                eprintln!("devhub: {} issue(s) found", findings.len());
                return Ok(1);
            }
            println!("devhub: no issues found");
        }
    }
    Ok(0)
}

/// Explicit `--config` files must exist. Files named in devhub.toml are
/// skipped when missing.
fn load_sources(cli_paths: &[PathBuf], settings: &DevhubSettings) -> Result<AppConfig, DevhubError> {
    if !cli_paths.is_empty() {
        return load_app_config(cli_paths);
    }
    let existing: Vec<PathBuf> = settings
        .sources
        .app_config
        .iter()
        .filter(|path| path.exists())
        .cloned()
        .collect();
    if existing.is_empty() {
        warn!("no app-config sources found; using an empty configuration");
    }
    load_app_config(existing.as_slice())
}

/// Initializes the tracing subscriber with the given log level. Logs go to
/// stderr so command output stays parseable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("devhub={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
