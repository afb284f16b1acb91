//! Deterministic cloud resource naming for namewright.
//!
//! This crate turns a small configuration context (service name, region,
//! stage, prefix, rollback flag) into names for every resource a deployment
//! creates, within each resource kind's length and alphabet limits:
//!
//! - **Context**: [`NamingContext`], built once per run by [`resolve`]
//! - **Short forms**: region and stage codes ([`shortform`])
//! - **Hashing**: fixed-width service tokens ([`hash`])
//! - **Timestamps**: one memoized rollback timestamp per session ([`clock`])
//! - **Budgeting**: the length allocator ([`budget`]) and composer ([`compose`])
//! - **Façade**: [`ResourceNamingService`], one operation per logical name
//!
//! # Overview
//!
//! Everything here is pure computation: no I/O, no global state. Reading
//! configuration files lives in `namewright-config`; the names produced are
//! handed to provisioning and upload clients outside this workspace.
//!
//! # Examples
//!
//! ## Naming a deployment
//!
//! ```rust
//! use namewright_core::{resolve, CliOverrides, FixedClock, RawConfig, ResourceNamingService};
//!
//! let mut raw = RawConfig::default();
//! raw.service = Some("orders".to_string());
//! raw.provider.region = Some("West US".to_string());
//!
//! let ctx = resolve(&raw, &CliOverrides::default()).unwrap();
//! let names = ResourceNamingService::with_clock(ctx, FixedClock(1700000000));
//!
//! assert_eq!(names.resource_group_name(), "sls-wus-dev-orders-rg");
//! let deployment = names.deployment_name();
//! assert_eq!(deployment, "sls-wus-dev-orders-rg-deployment-t1700000000");
//! assert_eq!(
//!     names.artifact_name(&deployment),
//!     "sls-wus-dev-orders-artifact-t1700000000.zip"
//! );
//! ```
//!
//! ## Error handling
//!
//! ```rust
//! use namewright_core::{resolve, CliOverrides, NamingError, RawConfig};
//!
//! match resolve(&RawConfig::default(), &CliOverrides::default()) {
//!     Err(NamingError::Config(msg)) => assert_eq!(msg, "service name required"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

pub mod budget;
pub mod clock;
pub mod compose;
pub mod context;
pub mod error;
pub mod hash;
pub mod kind;
pub mod resolver;
pub mod service;
pub mod shortform;

// Re-export commonly used types for convenience
pub use budget::{allocate, fit, NamePart};
pub use clock::{Clock, FixedClock, SessionTimestamp, SystemClock};
pub use compose::{compose, CharFilter};
pub use context::NamingContext;
pub use error::{NamingError, Result};
pub use kind::{PartRole, ResourceKind, ResourceTemplate};
pub use resolver::{resolve, CliOverrides, DeployConfig, NamedResource, ProviderConfig, RawConfig};
pub use service::{GeneratedName, ResourceNamingService};

/// Prelude module for convenient imports.
///
/// ```rust
/// use namewright_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::context::NamingContext;
    pub use crate::error::{NamingError, Result};
    pub use crate::kind::ResourceKind;
    pub use crate::service::{GeneratedName, ResourceNamingService};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let ctx = NamingContext::new("orders", "westus", "dev", "sls");
        let _service = ResourceNamingService::new(ctx);
        let _error = NamingError::config("test");
        let _kind = ResourceKind::StorageAccount;
    }

    #[test]
    fn test_service_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResourceNamingService>();
    }
}
