//! # Cost Type Selection Resolver
//!
//! Merges the catalog's mandatory cost types with a product's explicitly
//! selected optional cost types into one ordered list, ready for the
//! cascade.

use std::collections::HashSet;

use crate::types::CostType;

/// Resolves the ordered cost-type list for one product.
///
/// ## Rules
/// - Keeps catalog entries that are active AND (mandatory OR selected)
/// - Inactive cost types are always excluded, even if mandatory or selected
/// - Deduplicated by id: a cost type that is both mandatory and selected
///   appears exactly once (idempotent union, not concatenation)
/// - Sorted ascending by `(priority, id)`; the id tie-break keeps equal
///   priorities deterministic
///
/// ## Example
/// ```rust
/// use std::collections::HashSet;
/// use cascada_core::cost_types::resolve_cost_types;
///
/// let selection: HashSet<String> = HashSet::new();
/// let resolved = resolve_cost_types(&[], &selection);
/// assert!(resolved.is_empty());
/// ```
pub fn resolve_cost_types(catalog: &[CostType], selection: &HashSet<String>) -> Vec<CostType> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(catalog.len());

    let mut resolved: Vec<CostType> = catalog
        .iter()
        .filter(|ct| ct.is_active && (ct.is_mandatory || selection.contains(&ct.id)))
        .filter(|ct| seen.insert(ct.id.as_str()))
        .cloned()
        .collect();

    resolved.sort_by(|a, b| (a.priority, a.id.as_str()).cmp(&(b.priority, b.id.as_str())));
    resolved
}

// =============================================================================
// Unit Tests
// =============================================================================
