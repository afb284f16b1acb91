//! Session timestamps for rollback disambiguation.
//!
//! Every name produced during one deployment run must carry the same
//! timestamp. A [`SessionTimestamp`] reads its [`Clock`] at most once and
//! hands the memoized value to every later caller, including callers on
//! other threads that share the same naming service.

use std::fmt;
use std::sync::OnceLock;

use chrono::Utc;

/// Source of the current time, in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that always reports the same instant. Useful for reproducing the
/// names of an earlier deployment run and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

/// Lazily computed, write-once timestamp for one naming session.
pub struct SessionTimestamp {
    clock: Box<dyn Clock>,
    value: OnceLock<i64>,
}

impl SessionTimestamp {
    /// Create a session that will read `clock` on first use.
    pub fn new<C: Clock + 'static>(clock: C) -> Self {
        Self {
            clock: Box::new(clock),
            value: OnceLock::new(),
        }
    }

    /// Create a session whose timestamp is already fixed.
    pub fn pinned(timestamp: i64) -> Self {
        Self {
            clock: Box::new(FixedClock(timestamp)),
            value: OnceLock::from(timestamp),
        }
    }

    /// Return the session timestamp, computing it on the first call.
    pub fn get(&self) -> i64 {
        *self.value.get_or_init(|| self.clock.now())
    }

    /// Whether the timestamp has been fixed yet.
    pub fn is_fixed(&self) -> bool {
        self.value.get().is_some()
    }
}

impl fmt::Debug for SessionTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTimestamp")
            .field("value", &self.value.get())
            .finish_non_exhaustive()
    }
}
