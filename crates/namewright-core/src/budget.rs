//! Length-budget allocation for composed names.
//!
//! Given the ordered components of a name and a hard ceiling, the allocator
//! shrinks or extends components so their combined length fits:
//!
//! - **Over budget** by `n` chars: prefix, stage and service hash are each cut
//!   to at most `n / 3` chars. Region, literals and timestamps are untouched.
//! - **Under budget** by `n` chars: the service hash is replaced by the first
//!   `n + len(hash) - 1` chars of the raw service name, which reads better
//!   than a digest whenever there is room for it.
//! - **Exactly on budget**: nothing changes.
//!
//! The over-budget rule does not always reach the ceiling (a 50 char prefix
//! against a limit of 10 cuts to 17 chars). Whatever is still over is then
//! trimmed from the end of components, service tokens first and timestamp
//! last, so the result never exceeds the ceiling and the stage and region
//! that tell names apart survive as long as possible.
//!
//! Kinds that are not budgeted skip the shrink and extend rules and go
//! through [`fit`], which only applies that final trim.
//!
//! Delimiters are not counted here; callers pass a ceiling that already
//! reserves room for them.

use crate::kind::PartRole;

/// One component of a name, before allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePart {
    pub role: PartRole,
    pub value: String,
    /// Full token a [`PartRole::ServiceHash`] part may be re-sliced from.
    pub source: Option<String>,
}

impl NamePart {
    pub fn new<S: Into<String>>(role: PartRole, value: S) -> Self {
        Self {
            role,
            value: value.into(),
            source: None,
        }
    }

    /// Service hash component with the raw name it can be extended from.
    pub fn service_hash<H: Into<String>, S: Into<String>>(hash: H, source: S) -> Self {
        Self {
            role: PartRole::ServiceHash,
            value: hash.into(),
            source: Some(source.into()),
        }
    }

    fn is_truncatable(&self) -> bool {
        matches!(
            self.role,
            PartRole::Prefix | PartRole::Stage | PartRole::ServiceHash
        )
    }
}

/// Position of a role in the order components give up trailing chars when
/// the shrink rule alone cannot meet the ceiling.
fn clamp_rank(role: &PartRole) -> usize {
    match role {
        PartRole::ServiceName => 0,
        PartRole::ServiceHash => 1,
        PartRole::Prefix => 2,
        PartRole::Stage => 3,
        PartRole::Region => 4,
        PartRole::Literal(_) => 5,
        PartRole::Timestamp => 6,
    }
}

/// Fit `parts` into `max_length` chars and return the adjusted values in the
/// same order.
pub fn allocate(parts: &[NamePart], max_length: usize) -> Vec<String> {
    let mut values: Vec<String> = parts.iter().map(|p| p.value.clone()).collect();
    let used: usize = values.iter().map(|v| char_len(v)).sum();
    let remaining = max_length as i64 - used as i64;

    if remaining < 0 {
        let cut = (remaining.unsigned_abs() / 3) as usize;
        for (part, value) in parts.iter().zip(values.iter_mut()) {
            if part.is_truncatable() {
                truncate_chars(value, cut);
            }
        }
    } else if remaining > 0 {
        let extension = parts
            .iter()
            .zip(values.iter_mut())
            .find(|(part, _)| part.role == PartRole::ServiceHash);

        if let Some((part, value)) = extension {
            if let Some(source) = &part.source {
                // The trailing `- 1` leaves one char of slack unused. Existing
                // deployments were named with it, so it stays.
                let len = remaining as usize + char_len(value) - 1;
                *value = source.chars().take(len).collect();
            }
        }
    }

    clamp(parts, &mut values, max_length);
    values
}

/// Fit `parts` into `max_length` chars by trimming trailing chars only.
///
/// Used for names joined directly from their components: nothing is cut to
/// a third and nothing is extended, so a name that already fits is returned
/// unchanged.
pub fn fit(parts: &[NamePart], max_length: usize) -> Vec<String> {
    let mut values: Vec<String> = parts.iter().map(|p| p.value.clone()).collect();
    clamp(parts, &mut values, max_length);
    values
}

fn clamp(parts: &[NamePart], values: &mut [String], max_length: usize) {
    let total: usize = values.iter().map(|v| char_len(v)).sum();
    let mut excess = total.saturating_sub(max_length);

    for rank in 0..=6 {
        if excess == 0 {
            return;
        }
        for (part, value) in parts.iter().zip(values.iter_mut()) {
            if excess == 0 || clamp_rank(&part.role) != rank {
                continue;
            }
            let len = char_len(value);
            let keep = len.saturating_sub(excess);
            excess -= len - keep;
            truncate_chars(value, keep);
        }
    }
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn truncate_chars(s: &mut String, max_chars: usize) {
    if let Some((idx, _)) = s.char_indices().nth(max_chars) {
        s.truncate(idx);
    }
}
