//! The immutable input to every naming operation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::budget::char_len;
use crate::error::{NamingError, Result};
use crate::kind::ResourceKind;

/// Configuration values driving every name computed during one deployment
/// or packaging run.
///
/// A context is assembled once (normally by [`resolve`](crate::resolve)) and
/// then only read. Builder-style `with_*` methods consume the context, so a
/// context shared with a [`ResourceNamingService`](crate::ResourceNamingService)
/// can no longer change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingContext {
    service_name: String,
    region: String,
    stage: String,
    prefix: String,
    rollback_enabled: bool,
    overrides: BTreeMap<ResourceKind, String>,
    session_timestamp: Option<i64>,
}

impl NamingContext {
    /// Create a context from already-resolved values. Rollback is off and no
    /// names are overridden.
    pub fn new<S, R, T, P>(service_name: S, region: R, stage: T, prefix: P) -> Self
    where
        S: Into<String>,
        R: Into<String>,
        T: Into<String>,
        P: Into<String>,
    {
        Self {
            service_name: service_name.into(),
            region: region.into(),
            stage: stage.into(),
            prefix: prefix.into(),
            rollback_enabled: false,
            overrides: BTreeMap::new(),
            session_timestamp: None,
        }
    }

    /// Enable or disable rollback timestamps on deployment names.
    pub fn with_rollback(mut self, enabled: bool) -> Self {
        self.rollback_enabled = enabled;
        self
    }

    /// Pin the session timestamp instead of reading the clock.
    pub fn with_session_timestamp(mut self, timestamp: i64) -> Self {
        self.session_timestamp = Some(timestamp);
        self
    }

    /// Use `name` verbatim for `kind`.
    ///
    /// Fails if the name is longer than the kind's length ceiling, so that
    /// operator-supplied names obey the same limit as composed ones.
    pub fn with_override<S: Into<String>>(mut self, kind: ResourceKind, name: S) -> Result<Self> {
        let name = name.into();
        let max = kind.template().max_length;
        if char_len(&name) > max {
            return Err(NamingError::invalid_config(
                kind.config_key(),
                format!("'{}' exceeds the {} character limit for {}", name, max, kind),
            ));
        }
        self.overrides.insert(kind, name);
        Ok(self)
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn rollback_enabled(&self) -> bool {
        self.rollback_enabled
    }

    pub fn session_timestamp(&self) -> Option<i64> {
        self.session_timestamp
    }

    /// Explicit name configured for `kind`, if any.
    pub fn override_for(&self, kind: ResourceKind) -> Option<&str> {
        self.overrides.get(&kind).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let ctx = NamingContext::new("orders", "westus", "dev", "sls")
            .with_rollback(true)
            .with_session_timestamp(42);

        assert_eq!(ctx.service_name(), "orders");
        assert!(ctx.rollback_enabled());
        assert_eq!(ctx.session_timestamp(), Some(42));
        assert_eq!(ctx.override_for(ResourceKind::StorageAccount), None);
    }

    #[test]
    fn test_override_is_stored() {
        let ctx = NamingContext::new("orders", "westus", "dev", "sls")
            .with_override(ResourceKind::StorageAccount, "ordersstore")
            .unwrap();
        assert_eq!(ctx.override_for(ResourceKind::StorageAccount), Some("ordersstore"));
    }

    #[test]
    fn test_override_over_limit_is_rejected() {
        let err = NamingContext::new("orders", "westus", "dev", "sls")
            .with_override(ResourceKind::StorageAccount, "x".repeat(25))
            .unwrap_err();
        match err {
            NamingError::InvalidConfig { field, .. } => {
                assert_eq!(field, "provider.storageAccount.name")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
