//! Turning raw configuration plus CLI overrides into a [`NamingContext`].
//!
//! [`RawConfig`] mirrors the configuration record as an operator writes it
//! (loading it from disk is the job of `namewright-config`). [`resolve`]
//! applies precedence and defaults and performs no I/O:
//!
//! - CLI overrides win over file values.
//! - The placeholder region some tooling fills in when nothing was configured
//!   counts as unset on either side; with no real region left the context
//!   gets [`DEFAULT_REGION`].
//! - Overrides longer than their kind's ceiling and non-positive session
//!   timestamps are rejected after the CLI values have been merged in.
//! - Stage defaults to [`DEFAULT_STAGE`], prefix to [`DEFAULT_PREFIX`].
//! - Rollback is enabled unless `deploy.rollback = false`.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::context::NamingContext;
use crate::error::{NamingError, Result};
use crate::kind::ResourceKind;

/// Region used when none (or only the placeholder) is configured.
pub const DEFAULT_REGION: &str = "westus";

/// Region value that means "nothing was configured".
pub const PLACEHOLDER_REGION: &str = "us-east-1";

pub const DEFAULT_STAGE: &str = "dev";

pub const DEFAULT_PREFIX: &str = "sls";

/// Root of the configuration record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    /// Service name; required.
    #[serde(default)]
    pub service: Option<String>,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    /// Timestamp fixed by an earlier packaging step, if any.
    #[serde(default, alias = "package_timestamp")]
    pub package_timestamp: Option<i64>,
}

/// `provider` section of the configuration record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub stage: Option<String>,

    #[serde(default)]
    pub prefix: Option<String>,

    #[serde(default, alias = "resource_group")]
    pub resource_group: Option<String>,

    #[serde(default, alias = "deployment_name")]
    pub deployment_name: Option<String>,

    #[serde(default, alias = "function_app")]
    pub function_app: Option<NamedResource>,

    #[serde(default, alias = "app_service_plan")]
    pub app_service_plan: Option<NamedResource>,

    #[serde(default, alias = "storage_account")]
    pub storage_account: Option<NamedResource>,

    #[serde(default, alias = "virtual_network")]
    pub virtual_network: Option<NamedResource>,

    #[serde(default)]
    pub apim: Option<NamedResource>,

    #[serde(default, alias = "app_insights")]
    pub app_insights: Option<NamedResource>,

    #[serde(default, alias = "hosting_environment")]
    pub hosting_environment: Option<NamedResource>,
}

impl ProviderConfig {
    /// Name configured in the file for `kind`, if any.
    pub fn configured_name(&self, kind: ResourceKind) -> Option<&str> {
        let section = match kind {
            ResourceKind::ResourceGroup => return self.resource_group.as_deref(),
            ResourceKind::Deployment => return self.deployment_name.as_deref(),
            ResourceKind::FunctionApp => &self.function_app,
            ResourceKind::AppServicePlan => &self.app_service_plan,
            ResourceKind::StorageAccount => &self.storage_account,
            ResourceKind::VirtualNetwork => &self.virtual_network,
            ResourceKind::ApiManagement => &self.apim,
            ResourceKind::AppInsights => &self.app_insights,
            ResourceKind::HostingEnvironment => &self.hosting_environment,
        };
        section.as_ref().and_then(|s| s.name.as_deref())
    }
}

/// A provider sub-section that may carry an explicit resource name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: Option<String>,
}

/// `deploy` section of the configuration record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeployConfig {
    #[serde(default)]
    pub rollback: Option<bool>,
}

/// Values supplied on the command line. Every field takes precedence over
/// the configuration file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub region: Option<String>,
    pub stage: Option<String>,
    pub resource_group: Option<String>,
    pub names: BTreeMap<ResourceKind, String>,
    pub timestamp: Option<i64>,
}

/// Build a [`NamingContext`] from `raw` and `cli`.
pub fn resolve(raw: &RawConfig, cli: &CliOverrides) -> Result<NamingContext> {
    let service = non_blank(raw.service.as_deref())
        .ok_or_else(|| NamingError::config("service name required"))?;

    let region = usable_region(cli.region.as_deref())
        .or_else(|| usable_region(raw.provider.region.as_deref()))
        .unwrap_or(DEFAULT_REGION);

    let stage = non_blank(cli.stage.as_deref())
        .or_else(|| non_blank(raw.provider.stage.as_deref()))
        .unwrap_or(DEFAULT_STAGE);

    let prefix = non_blank(raw.provider.prefix.as_deref()).unwrap_or(DEFAULT_PREFIX);

    let mut context = NamingContext::new(service, region, stage, prefix)
        .with_rollback(raw.deploy.rollback.unwrap_or(true));

    let timestamp = cli
        .timestamp
        .map(|ts| ("timestamp", ts))
        .or(raw.package_timestamp.map(|ts| ("packageTimestamp", ts)));
    if let Some((field, timestamp)) = timestamp {
        if timestamp <= 0 {
            return Err(NamingError::invalid_config(
                field,
                "session timestamp must be a positive number of milliseconds",
            ));
        }
        context = context.with_session_timestamp(timestamp);
    }

    for kind in ResourceKind::ALL {
        let from_cli = cli.names.get(&kind).map(String::as_str).or(match kind {
            ResourceKind::ResourceGroup => cli.resource_group.as_deref(),
            _ => None,
        });
        let name = non_blank(from_cli).or_else(|| non_blank(raw.provider.configured_name(kind)));

        if let Some(name) = name {
            context = context.with_override(kind, name)?;
        }
    }

    Ok(context)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A region value that names a real region: set, not blank, and not the
/// placeholder tooling fills in by default.
fn usable_region(value: Option<&str>) -> Option<&str> {
    non_blank(value).filter(|region| *region != PLACEHOLDER_REGION)
}
