use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use namewright_config::{load_default, load_from_path};
use namewright_core::{
    resolve, CliOverrides, GeneratedName, NamingContext, NamingError, RawConfig, ResourceKind,
    ResourceNamingService,
};
use serde::Serialize;

/// namewright - deterministic cloud resource names
///
/// Reads the service configuration, applies command-line overrides, and
/// prints the name of every resource a deployment of that service uses.
///
/// Configuration discovery rules:
/// 1. If `--config PATH` (or `-c PATH`) is provided, that path is used.
/// 2. Otherwise `./namewright.toml`, then `./serverless.toml`.
#[derive(Debug, Parser)]
#[command(
    name = "namewright",
    version,
    about = "Derive cloud resource names for a service",
    disable_help_subcommand = true
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Target region (overrides provider.region).
    #[arg(long, short = 'r', value_name = "REGION")]
    region: Option<String>,

    /// Deployment stage (overrides provider.stage).
    #[arg(long, short = 's', value_name = "STAGE")]
    stage: Option<String>,

    /// Resource group name (overrides provider.resourceGroup).
    #[arg(long = "resource-group", value_name = "NAME")]
    resource_group: Option<String>,

    /// Explicit name for one resource kind, e.g. `storage-account=ordersstore`.
    #[arg(long = "name", value_name = "KIND=NAME", value_parser = parse_name_override)]
    names: Vec<(ResourceKind, String)>,

    /// Session timestamp to reuse instead of the current time.
    ///
    /// Pass the timestamp of an earlier run to reproduce its deployment and
    /// artifact names.
    #[arg(long, short = 't', value_name = "MILLIS")]
    timestamp: Option<i64>,

    /// Only print names for these kinds (repeatable).
    #[arg(long = "kind", short = 'k', value_name = "KIND", value_parser = parse_kind)]
    kinds: Vec<ResourceKind>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level (overrides RUST_LOG if set).
    ///
    /// Accepts standard tracing levels (trace, debug, info, warn, error) or a
    /// full filter expression (e.g. "warn,namewright_core=debug").
    #[arg(long = "log-level", short = 'L', value_name = "LEVEL")]
    log_level: Option<String>,

    /// Validate configuration (with the other flags applied) and exit without
    /// printing names.
    #[arg(long = "check-config", action = ArgAction::SetTrue)]
    check_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    context: &'a NamingContext,
    timestamp: Option<i64>,
    names: Vec<GeneratedName>,
    artifact: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = namewright_telemetry::init(cli.log_level.as_deref()) {
        eprintln!("namewright: failed to initialise telemetry: {}", err);
        process::exit(1);
    }

    if let Err(err) = run(&cli) {
        tracing::error!("{}", err);
        eprintln!("namewright: {}", err);
        process::exit(if err.is_fatal() { 2 } else { 1 });
    }
}

fn run(cli: &Cli) -> Result<(), NamingError> {
    let raw = load_config(cli)?;
    let context = resolve(&raw, &overrides(cli))?;

    if cli.check_config {
        tracing::info!("configuration is valid");
        return Ok(());
    }

    tracing::info!(
        service = context.service_name(),
        region = context.region(),
        stage = context.stage(),
        prefix = context.prefix(),
        rollback = context.rollback_enabled(),
        "resolved naming context"
    );

    let service = ResourceNamingService::new(context);
    let kinds: &[ResourceKind] = if cli.kinds.is_empty() {
        &ResourceKind::ALL
    } else {
        &cli.kinds
    };

    let names: Vec<GeneratedName> = kinds.iter().map(|kind| service.generate(*kind)).collect();
    let artifact = service.artifact_name(&service.deployment_name());

    match cli.format {
        Format::Text => {
            for name in &names {
                println!("{:<20} {}", name.kind, name);
            }
            println!("{:<20} {}", "artifact", artifact);
        }
        Format::Json => {
            let report = Report {
                context: service.context(),
                timestamp: service
                    .context()
                    .rollback_enabled()
                    .then(|| service.timestamp()),
                names,
                artifact,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<RawConfig, NamingError> {
    match cli.config {
        Some(ref path) => {
            let cfg = load_from_path(path)?;
            tracing::info!("loaded configuration from {}", path.display());
            Ok(cfg)
        }
        None => {
            let cfg = load_default()?;
            tracing::info!("loaded configuration from default locations");
            Ok(cfg)
        }
    }
}

fn overrides(cli: &Cli) -> CliOverrides {
    CliOverrides {
        region: cli.region.clone(),
        stage: cli.stage.clone(),
        resource_group: cli.resource_group.clone(),
        names: cli.names.iter().cloned().collect(),
        timestamp: cli.timestamp,
    }
}

fn parse_kind(s: &str) -> Result<ResourceKind, String> {
    s.parse().map_err(|err: NamingError| err.to_string())
}

fn parse_name_override(s: &str) -> Result<(ResourceKind, String), String> {
    let (kind, name) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=NAME, got '{}'", s))?;
    Ok((parse_kind(kind)?, name.to_string()))
}
