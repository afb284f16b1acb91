//! Assembling final names from components.
//!
//! Composition runs in a fixed order for every resource kind:
//!
//! 1. Lowercase each component and strip the chars its template forbids, so
//!    filtered chars never count toward the length budget.
//! 2. Fit the components into the ceiling minus the room delimiters need:
//!    budgeted kinds through [`allocate`], every other kind through [`fit`],
//!    which joins the components as they are and only trims the overflow.
//! 3. Join the non-empty components with the template's delimiter.

use crate::budget::{allocate, char_len, fit, NamePart};
use crate::kind::ResourceTemplate;

/// Alphabet allowed in a resource name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharFilter {
    /// ASCII letters and digits only (storage accounts).
    Alphanumeric,
    /// ASCII letters, digits and `-`.
    Hyphenated,
    /// Letters, digits, `-`, `_`, `.`, `(` and `)`.
    ResourceGroup,
    /// ASCII letters, digits, `-`, `_` and `.`.
    DeploymentSafe,
}

impl CharFilter {
    pub fn allows(self, c: char) -> bool {
        match self {
            CharFilter::Alphanumeric => c.is_ascii_alphanumeric(),
            CharFilter::Hyphenated => c.is_ascii_alphanumeric() || c == '-',
            CharFilter::ResourceGroup => {
                c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '(' | ')')
            }
            CharFilter::DeploymentSafe => {
                c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
            }
        }
    }

    /// Drop every char the filter does not allow. Where `-` is allowed,
    /// whitespace becomes `-` instead of disappearing.
    pub fn sanitize(self, input: &str) -> String {
        let dash = self.allows('-');
        input
            .chars()
            .map(|c| if dash && c.is_whitespace() { '-' } else { c })
            .filter(|c| self.allows(*c))
            .collect()
    }
}

/// Lowercase and filter a single component for `template`.
pub fn normalize(value: &str, template: &ResourceTemplate) -> String {
    template.filter.sanitize(&value.to_lowercase())
}

/// Build a name for `template` out of `parts`.
///
/// The result never exceeds `template.max_length` chars and contains only
/// chars allowed by `template.filter` (plus the delimiter).
pub fn compose(parts: &[NamePart], template: &ResourceTemplate) -> String {
    let prepared: Vec<NamePart> = parts
        .iter()
        .map(|part| NamePart {
            role: part.role,
            value: normalize(&part.value, template),
            source: part.source.as_deref().map(|s| normalize(s, template)),
        })
        .collect();

    let overhead = char_len(template.delimiter) * prepared.len().saturating_sub(1);
    let budget = template.max_length.saturating_sub(overhead);
    let values = if template.budgeted {
        allocate(&prepared, budget)
    } else {
        fit(&prepared, budget)
    };

    values
        .iter()
        .filter(|v| !v.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(template.delimiter)
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{PartRole, ResourceKind};

    #[test]
    fn alphanumeric_filter_strips_everything_else() {
        assert_eq!(CharFilter::Alphanumeric.sanitize("my-app_01 x"), "myapp01x");
    }

    #[test]
    fn hyphenated_filter_maps_whitespace_to_dash() {
        assert_eq!(CharFilter::Hyphenated.sanitize("My Service!"), "My-Service");
    }

    #[test]
    fn resource_group_filter_keeps_parentheses() {
        assert_eq!(CharFilter::ResourceGroup.sanitize("rg(1).a_b"), "rg(1).a_b");
    }

    #[test]
    fn compose_joins_with_delimiter_and_lowercases() {
        let parts = vec![
            NamePart::new(PartRole::Prefix, "SLS"),
            NamePart::new(PartRole::Region, "wus"),
            NamePart::new(PartRole::Stage, "dev"),
            NamePart::new(PartRole::Literal("asp"), "asp"),
        ];
        let name = compose(&parts, ResourceKind::AppServicePlan.template());
        assert_eq!(name, "sls-wus-dev-asp");
    }

    #[test]
    fn filtered_prefix_does_not_consume_budget() {
        // "s.l.s" filters to "sls": 3 + 3 + 3 + 6 = 15 leaves 9 spare, which
        // extends the service token to 14 chars.
        let parts = vec![
            NamePart::new(PartRole::Prefix, "s.l.s"),
            NamePart::new(PartRole::Region, "wus"),
            NamePart::new(PartRole::Stage, "dev"),
            NamePart::service_hash("abcdef", "Orders Service Name"),
        ];
        let name = compose(&parts, ResourceKind::StorageAccount.template());
        assert_eq!(name, "slswusdevordersservicen");
        assert_eq!(name.len(), 23);
    }

    #[test]
    fn degenerate_prefix_fits_a_tiny_template() {
        let template = ResourceTemplate {
            roles: &[],
            max_length: 10,
            delimiter: "-",
            filter: CharFilter::Hyphenated,
            budgeted: true,
        };
        let parts = vec![
            NamePart::new(PartRole::Prefix, "p".repeat(50)),
            NamePart::new(PartRole::Region, "wus"),
            NamePart::new(PartRole::Stage, "dev"),
            NamePart::service_hash("abcdef", "orders"),
        ];
        let name = compose(&parts, &template);
        assert!(name.chars().count() <= 10, "{name}");
    }

    #[test]
    fn unbudgeted_kinds_trim_only_the_overflow() {
        // 40 + 3 + 3 + 4 plus three delimiters is 53 against 50: only the
        // prefix loses chars, stage and region stay whole.
        let parts = vec![
            NamePart::new(PartRole::Prefix, "p".repeat(40)),
            NamePart::new(PartRole::Region, "wus"),
            NamePart::new(PartRole::Stage, "dev"),
            NamePart::new(PartRole::Literal("apim"), "apim"),
        ];
        let name = compose(&parts, ResourceKind::ApiManagement.template());
        assert_eq!(name, format!("{}-wus-dev-apim", "p".repeat(37)));
        assert_eq!(name.len(), 50);
    }

    #[test]
    fn empty_components_do_not_leave_double_delimiters() {
        let parts = vec![
            NamePart::new(PartRole::Prefix, "!!!"),
            NamePart::new(PartRole::Region, "wus"),
            NamePart::new(PartRole::Literal("vnet"), "vnet"),
        ];
        let name = compose(&parts, ResourceKind::VirtualNetwork.template());
        assert_eq!(name, "wus-vnet");
    }
}
