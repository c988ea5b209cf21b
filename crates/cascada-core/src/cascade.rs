//! # Cascade Calculator
//!
//! The core pure function of the engine: applies the profit margin, then
//! folds the ordered cost-type list over a running subtotal.
//!
//! ## The Cascade
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base_cost: $100.00          profit: 30%                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  profit_amount = $30.00 ──► subtotal = $130.00                          │
//! │       │                                                                 │
//! │       ▼  running = subtotal                                             │
//! │  IVA 12% (priority 1):  amount = $130.00 × 12% = $15.60                 │
//! │       │                 running = $145.60                               │
//! │       ▼                                                                 │
//! │  ISR  5% (priority 2):  amount = $145.60 × 5%  = $7.28                  │
//! │       │                 running = $152.88                               │
//! │       ▼                                                                 │
//! │  final_price = $152.88                                                  │
//! │                                                                         │
//! │  COMPOUNDING: each step's percentage applies to the subtotal that      │
//! │  already includes all previous steps, NOT to the original base.        │
//! │  Reordering two nonzero steps changes the final price — intentional.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! No I/O, no clock, no shared state: identical inputs always produce
//! bit-identical output, so results are safe to memoize and per-product
//! calculations can run in parallel. The fold itself is strictly
//! sequential — each step depends on the previous step's running value.

use crate::money::Money;
use crate::types::{CascadeStep, CostType, Rate};
use crate::validation::{
    validate_cost_type_rate, validate_distinct_cost_types, validate_non_negative, ValidationResult,
};

// =============================================================================
// Cascade Result
// =============================================================================

/// The raw output of one cascade computation.
///
/// Shaped for consumers by [`crate::breakdown`]; this struct is the
/// calculator's own contract and carries no product identity.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeResult {
    /// `base_cost × profit_rate`.
    pub profit_amount: Money,
    /// `base_cost + profit_amount` — the pre-cascade subtotal. This is NOT
    /// the final price unless the cost-type list is empty.
    pub subtotal: Money,
    /// One entry per applied cost type, in application order. Zero-rate
    /// steps are kept with `amount == 0`.
    pub steps: Vec<CascadeStep>,
    /// The running subtotal after the last step.
    pub final_price: Money,
}

// =============================================================================
// Calculator
// =============================================================================

/// Computes a full price breakdown from a base cost, a profit margin and
/// an ordered cost-type list.
///
/// ## Arguments
/// * `base_cost` - Resolved raw-material cost; must be ≥ 0
/// * `profit_rate` - Profit margin in basis points; no upper bound
/// * `cost_types` - Already filtered and ordered (see
///   [`crate::cost_types::resolve_cost_types`]); the calculator still
///   re-validates rates and `(priority, id)` uniqueness because it may be
///   called directly
///
/// ## Algorithm
/// 1. `profit_amount = base_cost × profit_rate`
/// 2. `subtotal = base_cost + profit_amount`
/// 3. Left fold over `cost_types`: each step computes
///    `amount = running × rate`, records a [`CascadeStep`], and carries
///    `running + amount` forward
/// 4. `final_price` = the accumulator after the last step
///
/// ## Guarantees
/// - Empty `cost_types` → `final_price == subtotal` and `steps == []`
/// - A 0% cost type still produces a step with `amount == 0` (steps are
///   never elided, so UIs can render every configured cost type)
/// - Deterministic: no hidden state, no rounding beyond one half-up
///   rounding per multiplication
///
/// ## Example
/// ```rust
/// use cascada_core::cascade::compute_breakdown;
/// use cascada_core::money::Money;
/// use cascada_core::types::Rate;
///
/// let result = compute_breakdown(Money::from_cents(10_000), Rate::from_bps(3000), &[]).unwrap();
/// assert_eq!(result.subtotal.cents(), 13_000);
/// assert_eq!(result.final_price, result.subtotal);
/// ```
pub fn compute_breakdown(
    base_cost: Money,
    profit_rate: Rate,
    cost_types: &[CostType],
) -> ValidationResult<CascadeResult> {
    validate_non_negative("base_cost", base_cost)?;
    for ct in cost_types {
        validate_cost_type_rate(&ct.name, ct.rate)?;
    }
    validate_distinct_cost_types(cost_types)?;

    let profit_amount = base_cost.apply_rate(profit_rate);
    let subtotal = base_cost + profit_amount;

    // Strict sequential left fold: step N's amount depends on the running
    // subtotal produced by steps 0..N
    let (final_price, steps) = cost_types.iter().fold(
        (subtotal, Vec::with_capacity(cost_types.len())),
        |(running, mut steps), ct| {
            let amount = running.apply_rate(ct.rate);
            steps.push(CascadeStep {
                cost_type_id: ct.id.clone(),
                name: ct.name.clone(),
                rate: ct.rate,
                amount,
                priority: ct.priority,
                is_mandatory: ct.is_mandatory,
            });
            (running + amount, steps)
        },
    );

    Ok(CascadeResult {
        profit_amount,
        subtotal,
        steps,
        final_price,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn cost_type(id: &str, name: &str, bps: u32, priority: i32) -> CostType {
        CostType {
            id: id.to_string(),
            name: name.to_string(),
            rate: Rate::from_bps(bps),
            priority,
            is_mandatory: true,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// The worked example the whole engine is specified against:
    /// $100.00 base, 30% profit, IVA 12% then ISR 5% → $152.88.
    #[test]
    fn test_worked_example_iva_then_isr() {
        let cascade = vec![
            cost_type("iva", "IVA", 1200, 1),
            cost_type("isr", "ISR", 500, 2),
        ];

        let result =
            compute_breakdown(Money::from_cents(10_000), Rate::from_bps(3000), &cascade).unwrap();

        assert_eq!(result.profit_amount.cents(), 3_000);
        assert_eq!(result.subtotal.cents(), 13_000);

        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[0].name, "IVA");
        assert_eq!(result.steps[0].amount.cents(), 1_560); // 130.00 × 12%
        assert_eq!(result.steps[1].name, "ISR");
        assert_eq!(result.steps[1].amount.cents(), 728); // 145.60 × 5%

        assert_eq!(result.final_price.cents(), 15_288); // $152.88
    }

    #[test]
    fn test_no_cost_types_final_price_is_subtotal() {
        let result =
            compute_breakdown(Money::from_cents(10_000), Rate::from_bps(3000), &[]).unwrap();

        assert!(result.steps.is_empty());
        assert_eq!(result.final_price.cents(), 13_000);
        assert_eq!(result.final_price, result.subtotal);
    }

    #[test]
    fn test_zero_base_and_zero_profit() {
        let result = compute_breakdown(Money::zero(), Rate::zero(), &[]).unwrap();

        assert_eq!(result.profit_amount.cents(), 0);
        assert_eq!(result.subtotal.cents(), 0);
        assert_eq!(result.final_price.cents(), 0);
    }

    #[test]
    fn test_order_sensitivity() {
        // A 10% then B 20% vs. B then A. Per-step amounts always differ
        // between the orderings; the final price additionally diverges
        // wherever the per-step cent rounding lands differently, which is
        // why reordering cost types is an observable change and must not
        // be "fixed" into additive application.
        let forward = vec![
            cost_type("a", "A", 1000, 1),
            cost_type("b", "B", 2000, 2),
        ];
        let reversed = vec![
            cost_type("b", "B", 2000, 1),
            cost_type("a", "A", 1000, 2),
        ];

        // Subtotal of 10 004¢ (zero profit keeps it equal to base)
        let base = Money::from_cents(10_004);
        let profit = Rate::zero();

        let fwd = compute_breakdown(base, profit, &forward).unwrap();
        let rev = compute_breakdown(base, profit, &reversed).unwrap();

        // A on 10 004 → 1 000; B on 11 004 → 2 201
        assert_eq!(fwd.steps[0].amount.cents(), 1_000);
        assert_eq!(fwd.steps[1].amount.cents(), 2_201);
        assert_eq!(fwd.final_price.cents(), 13_205);

        // B on 10 004 → 2 001; A on 12 005 → 1 201
        assert_eq!(rev.steps[0].amount.cents(), 2_001);
        assert_eq!(rev.steps[1].amount.cents(), 1_201);
        assert_eq!(rev.final_price.cents(), 13_206);

        assert_ne!(fwd.final_price, rev.final_price);
    }

    #[test]
    fn test_idempotence() {
        let cascade = vec![
            cost_type("iva", "IVA", 1200, 1),
            cost_type("isr", "ISR", 500, 2),
        ];
        let base = Money::from_cents(9_973);
        let profit = Rate::from_bps(2750);

        let first = compute_breakdown(base, profit, &cascade).unwrap();
        let second = compute_breakdown(base, profit, &cascade).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_rate_step_not_elided() {
        let cascade = vec![cost_type("promo", "Promo", 0, 1)];

        let result =
            compute_breakdown(Money::from_cents(10_000), Rate::from_bps(3000), &cascade).unwrap();

        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].amount.cents(), 0);
        assert_eq!(result.final_price, result.subtotal);
    }

    #[test]
    fn test_negative_base_cost_rejected() {
        let result = compute_breakdown(Money::from_cents(-1), Rate::zero(), &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rate_above_100_percent_rejected() {
        let cascade = vec![cost_type("iva", "IVA", 10_001, 1)];
        let result = compute_breakdown(Money::from_cents(10_000), Rate::zero(), &cascade);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_priority_id_pair_rejected() {
        let cascade = vec![
            cost_type("iva", "IVA", 1200, 1),
            cost_type("iva", "IVA", 1200, 1),
        ];
        let result = compute_breakdown(Money::from_cents(10_000), Rate::zero(), &cascade);
        assert!(result.is_err());
    }

    #[test]
    fn test_profit_rate_above_100_percent_allowed() {
        // A 150% margin is unusual but legal; only cost-type rates are
        // capped at 100%
        let result =
            compute_breakdown(Money::from_cents(10_000), Rate::from_bps(15_000), &[]).unwrap();
        assert_eq!(result.subtotal.cents(), 25_000);
    }

    #[test]
    fn test_steps_carry_cost_type_fields() {
        let mut ct = cost_type("mkt", "Marketing", 800, 5);
        ct.is_mandatory = false;

        let result =
            compute_breakdown(Money::from_cents(10_000), Rate::zero(), &[ct]).unwrap();

        let step = &result.steps[0];
        assert_eq!(step.cost_type_id, "mkt");
        assert_eq!(step.rate.bps(), 800);
        assert_eq!(step.priority, 5);
        assert!(!step.is_mandatory);
    }
}
