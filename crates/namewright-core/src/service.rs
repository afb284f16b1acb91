//! Resource naming façade.
//!
//! [`ResourceNamingService`] owns one [`NamingContext`] and one
//! [`SessionTimestamp`] and exposes an operation per logical name. Use one
//! service per deployment run: every name it returns that carries a
//! timestamp carries the same one, and a second service would read the clock
//! again.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::budget::{char_len, NamePart};
use crate::clock::{Clock, SessionTimestamp, SystemClock};
use crate::compose::compose;
use crate::context::NamingContext;
use crate::error::Result;
use crate::hash::hash_token;
use crate::kind::{PartRole, ResourceKind, ResourceTemplate};
use crate::shortform::{short_region, short_stage};

/// Token that ends a deployment name derived from the resource group.
pub const DEPLOYMENT_SUFFIX: &str = "deployment";

/// Token artifact names carry in place of [`DEPLOYMENT_SUFFIX`].
pub const ARTIFACT_SUFFIX: &str = "artifact";

/// A name together with the kind it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedName {
    pub kind: ResourceKind,
    pub name: String,
}

impl fmt::Display for GeneratedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Derives every resource name for one deployment run.
#[derive(Debug)]
pub struct ResourceNamingService {
    context: NamingContext,
    timestamp: SessionTimestamp,
}

impl ResourceNamingService {
    /// Create a service that reads the system clock the first time a
    /// timestamp is needed.
    pub fn new(context: NamingContext) -> Self {
        Self::with_clock(context, SystemClock)
    }

    /// Create a service with an injected clock. A timestamp pinned on the
    /// context wins over the clock.
    pub fn with_clock<C: Clock + 'static>(context: NamingContext, clock: C) -> Self {
        let timestamp = match context.session_timestamp() {
            Some(pinned) => SessionTimestamp::pinned(pinned),
            None => SessionTimestamp::new(clock),
        };
        Self { context, timestamp }
    }

    pub fn context(&self) -> &NamingContext {
        &self.context
    }

    /// Session timestamp, fixed on first use.
    pub fn timestamp(&self) -> i64 {
        self.timestamp.get()
    }

    /// Name of the resource group: explicit override, else
    /// `prefix-region-stage-service-rg`.
    pub fn resource_group_name(&self) -> String {
        self.override_or_compose(ResourceKind::ResourceGroup)
    }

    /// Name of the template deployment record.
    ///
    /// Starts from the configured deployment name or
    /// `<resource group>-deployment`, appends `-t<timestamp>` when rollback is
    /// enabled, and falls back to a budgeted, hash-based name that keeps the
    /// timestamp when the result would exceed the deployment ceiling.
    pub fn deployment_name(&self) -> String {
        let template = ResourceKind::Deployment.template();

        let base = match self.context.override_for(ResourceKind::Deployment) {
            Some(name) => name.to_string(),
            None => format!("{}-{}", self.resource_group_name(), DEPLOYMENT_SUFFIX),
        };

        let name = if self.context.rollback_enabled() {
            format!("{}-t{}", base, self.timestamp())
        } else {
            base
        };

        if char_len(&name) <= template.max_length {
            return name;
        }

        let budgeted = compose(&self.parts_for(template), template);
        debug!(
            original = %name,
            name = %budgeted,
            max_length = template.max_length,
            "deployment name over limit, re-derived"
        );
        budgeted
    }

    /// Name of the uploaded artifact for `deployment_name`.
    ///
    /// `rg-deployment` collapses to `artifact`, any remaining `deployment`
    /// token becomes `artifact`, and `.zip` is appended.
    pub fn artifact_name(&self, deployment_name: &str) -> String {
        let resource_group_token = format!("rg-{}", DEPLOYMENT_SUFFIX);
        format!(
            "{}.zip",
            deployment_name
                .replace(&resource_group_token, ARTIFACT_SUFFIX)
                .replace(DEPLOYMENT_SUFFIX, ARTIFACT_SUFFIX)
        )
    }

    /// Name for `kind`.
    pub fn resource_name(&self, kind: ResourceKind) -> String {
        match kind {
            ResourceKind::Deployment => self.deployment_name(),
            _ => self.override_or_compose(kind),
        }
    }

    /// Name for a kind given by identifier, e.g. `"storage-account"`.
    pub fn resource_name_str(&self, kind: &str) -> Result<String> {
        Ok(self.resource_name(kind.parse()?))
    }

    pub fn generate(&self, kind: ResourceKind) -> GeneratedName {
        GeneratedName {
            kind,
            name: self.resource_name(kind),
        }
    }

    /// Names for every known kind, resource group first.
    pub fn generate_all(&self) -> Vec<GeneratedName> {
        ResourceKind::ALL.iter().map(|kind| self.generate(*kind)).collect()
    }

    fn override_or_compose(&self, kind: ResourceKind) -> String {
        if let Some(name) = self.context.override_for(kind) {
            return name.to_string();
        }

        let template = kind.template();
        let name = compose(&self.parts_for(template), template);
        debug!(kind = %kind, name = %name, budgeted = template.budgeted, "composed resource name");
        name
    }

    fn parts_for(&self, template: &ResourceTemplate) -> Vec<NamePart> {
        let ctx = &self.context;
        template
            .roles
            .iter()
            .map(|role| match role {
                PartRole::Prefix => NamePart::new(*role, ctx.prefix()),
                PartRole::Region => NamePart::new(*role, short_region(ctx.region())),
                PartRole::Stage => NamePart::new(*role, short_stage(ctx.stage())),
                PartRole::ServiceHash => {
                    NamePart::service_hash(hash_token(ctx.service_name()), ctx.service_name())
                }
                PartRole::ServiceName => NamePart::new(*role, ctx.service_name()),
                PartRole::Literal(text) => NamePart::new(*role, *text),
                PartRole::Timestamp => NamePart::new(*role, format!("t{}", self.timestamp())),
            })
            .collect()
    }
}
