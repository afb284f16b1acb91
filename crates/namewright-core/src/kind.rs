//! Resource kinds and their static naming templates.
//!
//! Each kind of target-platform entity has its own length ceiling, delimiter
//! and alphabet. The set of kinds is closed; parsing an unknown identifier is
//! the only way to reach [`NamingError::UnsupportedResourceType`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compose::CharFilter;
use crate::error::{NamingError, Result};

/// Category of target-platform entity being named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    ResourceGroup,
    /// Compute host for the service's functions.
    FunctionApp,
    AppServicePlan,
    StorageAccount,
    VirtualNetwork,
    /// API gateway in front of the function app.
    ApiManagement,
    /// Monitoring instance.
    AppInsights,
    HostingEnvironment,
    /// Template deployment record.
    Deployment,
}

/// Role a component plays inside a composed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartRole {
    Prefix,
    Region,
    Stage,
    /// Short digest of the service name; may be re-sliced from the raw name
    /// when the budget has slack.
    ServiceHash,
    /// Raw service name, used verbatim by configured names.
    ServiceName,
    Literal(&'static str),
    Timestamp,
}

/// Static naming constraints for one resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceTemplate {
    pub roles: &'static [PartRole],
    pub max_length: usize,
    pub delimiter: &'static str,
    pub filter: CharFilter,
    /// Whether the name is built from the hashed service token and fitted by
    /// the budget allocator.
    pub budgeted: bool,
}

use PartRole::{Literal, Prefix, Region, ServiceHash, ServiceName, Stage, Timestamp};

const RESOURCE_GROUP: ResourceTemplate = ResourceTemplate {
    roles: &[Prefix, Region, Stage, ServiceName, Literal("rg")],
    max_length: 90,
    delimiter: "-",
    filter: CharFilter::ResourceGroup,
    budgeted: false,
};

const FUNCTION_APP: ResourceTemplate = ResourceTemplate {
    roles: &[Prefix, Region, Stage, ServiceName],
    max_length: 60,
    delimiter: "-",
    filter: CharFilter::Hyphenated,
    budgeted: false,
};

const APP_SERVICE_PLAN: ResourceTemplate = ResourceTemplate {
    roles: &[Prefix, Region, Stage, Literal("asp")],
    max_length: 40,
    delimiter: "-",
    filter: CharFilter::Hyphenated,
    budgeted: false,
};

const STORAGE_ACCOUNT: ResourceTemplate = ResourceTemplate {
    roles: &[Prefix, Region, Stage, ServiceHash],
    max_length: 24,
    delimiter: "",
    filter: CharFilter::Alphanumeric,
    budgeted: true,
};

const VIRTUAL_NETWORK: ResourceTemplate = ResourceTemplate {
    roles: &[Prefix, Region, Stage, Literal("vnet")],
    max_length: 64,
    delimiter: "-",
    filter: CharFilter::DeploymentSafe,
    budgeted: false,
};

const API_MANAGEMENT: ResourceTemplate = ResourceTemplate {
    roles: &[Prefix, Region, Stage, Literal("apim")],
    max_length: 50,
    delimiter: "-",
    filter: CharFilter::Hyphenated,
    budgeted: false,
};

const APP_INSIGHTS: ResourceTemplate = ResourceTemplate {
    roles: &[Prefix, Region, Stage, Literal("appinsights")],
    max_length: 260,
    delimiter: "-",
    filter: CharFilter::DeploymentSafe,
    budgeted: false,
};

const HOSTING_ENVIRONMENT: ResourceTemplate = ResourceTemplate {
    roles: &[Prefix, Region, Stage, Literal("ase")],
    max_length: 40,
    delimiter: "-",
    filter: CharFilter::Hyphenated,
    budgeted: false,
};

const DEPLOYMENT: ResourceTemplate = ResourceTemplate {
    roles: &[Prefix, Region, Stage, ServiceHash, Literal("deployment"), Timestamp],
    max_length: 64,
    delimiter: "-",
    filter: CharFilter::DeploymentSafe,
    budgeted: true,
};

impl ResourceKind {
    /// Every kind, in the order names are reported.
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::ResourceGroup,
        ResourceKind::Deployment,
        ResourceKind::FunctionApp,
        ResourceKind::AppServicePlan,
        ResourceKind::StorageAccount,
        ResourceKind::VirtualNetwork,
        ResourceKind::ApiManagement,
        ResourceKind::AppInsights,
        ResourceKind::HostingEnvironment,
    ];

    /// Naming template for this kind.
    pub fn template(self) -> &'static ResourceTemplate {
        match self {
            ResourceKind::ResourceGroup => &RESOURCE_GROUP,
            ResourceKind::FunctionApp => &FUNCTION_APP,
            ResourceKind::AppServicePlan => &APP_SERVICE_PLAN,
            ResourceKind::StorageAccount => &STORAGE_ACCOUNT,
            ResourceKind::VirtualNetwork => &VIRTUAL_NETWORK,
            ResourceKind::ApiManagement => &API_MANAGEMENT,
            ResourceKind::AppInsights => &APP_INSIGHTS,
            ResourceKind::HostingEnvironment => &HOSTING_ENVIRONMENT,
            ResourceKind::Deployment => &DEPLOYMENT,
        }
    }

    /// Canonical kebab-case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::ResourceGroup => "resource-group",
            ResourceKind::FunctionApp => "function-app",
            ResourceKind::AppServicePlan => "app-service-plan",
            ResourceKind::StorageAccount => "storage-account",
            ResourceKind::VirtualNetwork => "virtual-network",
            ResourceKind::ApiManagement => "api-management",
            ResourceKind::AppInsights => "app-insights",
            ResourceKind::HostingEnvironment => "hosting-environment",
            ResourceKind::Deployment => "deployment",
        }
    }

    /// Configuration key an explicit name for this kind is read from.
    pub fn config_key(self) -> &'static str {
        match self {
            ResourceKind::ResourceGroup => "provider.resourceGroup",
            ResourceKind::FunctionApp => "provider.functionApp.name",
            ResourceKind::AppServicePlan => "provider.appServicePlan.name",
            ResourceKind::StorageAccount => "provider.storageAccount.name",
            ResourceKind::VirtualNetwork => "provider.virtualNetwork.name",
            ResourceKind::ApiManagement => "provider.apim.name",
            ResourceKind::AppInsights => "provider.appInsights.name",
            ResourceKind::HostingEnvironment => "provider.hostingEnvironment.name",
            ResourceKind::Deployment => "provider.deploymentName",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "resource-group" | "resourcegroup" | "rg" => ResourceKind::ResourceGroup,
            "function-app" | "functionapp" | "func" => ResourceKind::FunctionApp,
            "app-service-plan" | "appserviceplan" | "asp" => ResourceKind::AppServicePlan,
            "storage-account" | "storageaccount" | "storage" => ResourceKind::StorageAccount,
            "virtual-network" | "virtualnetwork" | "vnet" => ResourceKind::VirtualNetwork,
            "api-management" | "apimanagement" | "apim" => ResourceKind::ApiManagement,
            "app-insights" | "appinsights" => ResourceKind::AppInsights,
            "hosting-environment" | "hostingenvironment" | "ase" => {
                ResourceKind::HostingEnvironment
            }
            "deployment" => ResourceKind::Deployment,
            _ => return Err(NamingError::unsupported(s)),
        };
        Ok(kind)
    }
}
