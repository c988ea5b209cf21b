//! # Supply Cost Resolver
//!
//! Turns a product's bill of supplies into a single base cost figure.
//!
//! ## Costing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Bill of supplies: [flour × 2.5 kg, sugar × 0.5 kg]                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  resolve_base_cost ← THIS MODULE                                        │
//! │       │                                                                 │
//! │       ├── non-empty bill → Σ unit_cost × quantity                       │
//! │       │     └── unknown supply_id → contributes $0.00 + warn log        │
//! │       │                                                                 │
//! │       └── empty bill → stored fallback price (or $0.00 if absent)       │
//! │                                                                         │
//! │  base_cost ──► CascadeCalculator                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use crate::money::Money;
use crate::types::{Supply, SupplyLine};
use crate::validation::{validate_non_negative, validate_quantity, ValidationResult};

/// Resolves a product's base cost from its bill of supplies.
///
/// ## Arguments
/// * `lines` - The product's recipe lines; unordered, may be empty
/// * `supplies` - Supply catalog keyed by id, pre-fetched by the caller
/// * `fallback` - The product's stored base price, used only when `lines`
///   is empty; `None` defaults to zero
///
/// ## Rules
/// - Empty bill → `fallback` (products without a recipe keep their stored
///   price as the costing base)
/// - Non-empty bill → sum of `unit_cost × quantity` over all lines
/// - A line referencing a supply absent from `supplies` contributes zero
///   and emits a `tracing` warning. This mirrors long-standing production
///   behavior; whether it should instead hard-fail is an open product
///   question (see DESIGN.md)
/// - Negative unit costs, quantities or fallback are rejected here with a
///   `ValidationError` rather than clamped, so bad catalog rows surface
///   instead of silently pricing a product at less than nothing
///
/// The result is always ≥ 0.
///
/// ## Example
/// ```rust
/// use std::collections::HashMap;
/// use cascada_core::money::Money;
/// use cascada_core::supply_cost::resolve_base_cost;
///
/// // Empty bill falls back to the stored base price
/// let base = resolve_base_cost(&[], &HashMap::new(), Some(Money::from_cents(5_000)));
/// assert_eq!(base.unwrap().cents(), 5_000);
/// ```
pub fn resolve_base_cost(
    lines: &[SupplyLine],
    supplies: &HashMap<String, Supply>,
    fallback: Option<Money>,
) -> ValidationResult<Money> {
    if lines.is_empty() {
        let fallback = fallback.unwrap_or_default();
        validate_non_negative("fallback_cost", fallback)?;
        return Ok(fallback);
    }

    let mut total = Money::zero();
    for line in lines {
        validate_quantity(&line.supply_id, line.quantity)?;

        match supplies.get(&line.supply_id) {
            Some(supply) => {
                validate_non_negative("unit_cost", supply.unit_cost)?;
                total += supply.unit_cost.multiply_quantity(line.quantity);
            }
            None => {
                // Recoverable data-quality issue: the line is costed at zero
                tracing::warn!(
                    supply_id = %line.supply_id,
                    "bill-of-supplies line references unknown supply, contributing zero cost"
                );
            }
        }
    }

    Ok(total)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Quantity;
    use chrono::Utc;

    fn supply(id: &str, unit_cost_cents: i64) -> Supply {
        Supply {
            id: id.to_string(),
            name: format!("Supply {id}"),
            unit: "kg".to_string(),
            unit_cost: Money::from_cents(unit_cost_cents),
            current_stock: Quantity::from_units(100),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn catalog(supplies: Vec<Supply>) -> HashMap<String, Supply> {
        supplies.into_iter().map(|s| (s.id.clone(), s)).collect()
    }

    fn line(supply_id: &str, milli: i64) -> SupplyLine {
        SupplyLine {
            supply_id: supply_id.to_string(),
            quantity: Quantity::from_milli(milli),
        }
    }

    #[test]
    fn test_sums_lines() {
        // flour $8.00 × 2.5 + sugar $4.00 × 0.5 = $20.00 + $2.00
        let supplies = catalog(vec![supply("flour", 800), supply("sugar", 400)]);
        let lines = vec![line("flour", 2_500), line("sugar", 500)];

        let base = resolve_base_cost(&lines, &supplies, None).unwrap();
        assert_eq!(base.cents(), 2_200);
    }

    #[test]
    fn test_empty_bill_uses_fallback() {
        let base = resolve_base_cost(&[], &HashMap::new(), Some(Money::from_cents(5_000)));
        assert_eq!(base.unwrap().cents(), 5_000);
    }

    #[test]
    fn test_empty_bill_missing_fallback_is_zero() {
        let base = resolve_base_cost(&[], &HashMap::new(), None);
        assert_eq!(base.unwrap().cents(), 0);
    }

    #[test]
    fn test_missing_supply_contributes_zero() {
        let supplies = catalog(vec![supply("flour", 800)]);
        let lines = vec![line("flour", 1_000), line("ghost", 9_000)];

        let base = resolve_base_cost(&lines, &supplies, None).unwrap();
        assert_eq!(base.cents(), 800);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let supplies = catalog(vec![supply("flour", 800)]);
        let lines = vec![line("flour", -1_000)];

        assert!(resolve_base_cost(&lines, &supplies, None).is_err());
    }

    #[test]
    fn test_negative_unit_cost_rejected() {
        let supplies = catalog(vec![supply("flour", -800)]);
        let lines = vec![line("flour", 1_000)];

        assert!(resolve_base_cost(&lines, &supplies, None).is_err());
    }

    #[test]
    fn test_negative_fallback_rejected() {
        let result = resolve_base_cost(&[], &HashMap::new(), Some(Money::from_cents(-1)));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_quantity_line_is_free() {
        let supplies = catalog(vec![supply("flour", 800)]);
        let lines = vec![line("flour", 0)];

        let base = resolve_base_cost(&lines, &supplies, None).unwrap();
        assert_eq!(base.cents(), 0);
    }
}
