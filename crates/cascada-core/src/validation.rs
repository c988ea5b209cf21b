//! # Validation Module
//!
//! Numeric input validation for the pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Persistence (outside this repo)                              │
//! │  ├── CHECK constraints on unit_cost, percentage, priority              │
//! │  └── Should reject bad rows before they reach the engine               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Re-checks every numeric input at the engine boundary              │
//! │  └── The legacy system let negative costs flow silently through the    │
//! │      cascade; these checks make that a surfaced ValidationError        │
//! │                                                                         │
//! │  The calculator validates independently of the resolvers, since it     │
//! │  may be called directly                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CostType, Quantity, Rate};
use crate::MAX_RATE_BPS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a monetary amount is not negative.
///
/// ## Rules
/// - Zero is allowed (free supplies, zero fallback cost)
/// - Negative amounts are rejected, never clamped
///
/// ## Example
/// ```rust
/// use cascada_core::money::Money;
/// use cascada_core::validation::validate_non_negative;
///
/// assert!(validate_non_negative("base_cost", Money::from_cents(0)).is_ok());
/// assert!(validate_non_negative("base_cost", Money::from_cents(-100)).is_err());
/// ```
pub fn validate_non_negative(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
            cents: amount.cents(),
        });
    }

    Ok(())
}

/// Validates a bill-of-supplies quantity.
///
/// ## Rules
/// - Zero is allowed (a zero-quantity line contributes nothing)
/// - Negative quantities are rejected
pub fn validate_quantity(supply_id: &str, qty: Quantity) -> ValidationResult<()> {
    if qty.is_negative() {
        return Err(ValidationError::NegativeQuantity {
            supply_id: supply_id.to_string(),
            milli: qty.milli(),
        });
    }

    Ok(())
}

/// Validates a cost-type rate.
///
/// ## Rules
/// - Must be between 0 and 10000 basis points (0% to 100%)
/// - Zero is allowed: a 0% cost type still produces a cascade step
///
/// Profit rates are deliberately NOT checked against this bound; a margin
/// above 100% is unusual but legal.
pub fn validate_cost_type_rate(field: &str, rate: Rate) -> ValidationResult<()> {
    if rate.bps() > MAX_RATE_BPS {
        return Err(ValidationError::RateOutOfRange {
            field: field.to_string(),
            bps: rate.bps(),
            max_bps: MAX_RATE_BPS,
        });
    }

    Ok(())
}

// =============================================================================
// Cascade Validators
// =============================================================================

/// Validates that no two cost types in one cascade share a (priority, id)
/// pair.
///
/// The selection resolver already deduplicates by id, so this only fires
/// when the calculator is handed a raw list directly.
pub fn validate_distinct_cost_types(cost_types: &[CostType]) -> ValidationResult<()> {
    let mut keys: Vec<(i32, &str)> = cost_types
        .iter()
        .map(|ct| (ct.priority, ct.id.as_str()))
        .collect();
    keys.sort_unstable();

    for pair in keys.windows(2) {
        if pair[0] == pair[1] {
            return Err(ValidationError::DuplicateCostType {
                cost_type_id: pair[0].1.to_string(),
                priority: pair[0].0,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn cost_type(id: &str, priority: i32) -> CostType {
        CostType {
            id: id.to_string(),
            name: id.to_string(),
            rate: Rate::from_bps(1000),
            priority,
            is_mandatory: true,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("base_cost", Money::zero()).is_ok());
        assert!(validate_non_negative("base_cost", Money::from_cents(1099)).is_ok());
        assert!(validate_non_negative("base_cost", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity("s-1", Quantity::zero()).is_ok());
        assert!(validate_quantity("s-1", Quantity::from_milli(2500)).is_ok());

        let err = validate_quantity("s-1", Quantity::from_milli(-250)).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeQuantity { .. }));
    }

    #[test]
    fn test_validate_cost_type_rate() {
        assert!(validate_cost_type_rate("IVA", Rate::zero()).is_ok());
        assert!(validate_cost_type_rate("IVA", Rate::from_bps(10_000)).is_ok());
        assert!(validate_cost_type_rate("IVA", Rate::from_bps(10_001)).is_err());
    }

    #[test]
    fn test_validate_distinct_cost_types() {
        // Distinct ids at the same priority are fine (id breaks the tie)
        let ok = vec![cost_type("a", 1), cost_type("b", 1), cost_type("c", 2)];
        assert!(validate_distinct_cost_types(&ok).is_ok());

        // Same (priority, id) pair is not
        let dup = vec![cost_type("a", 1), cost_type("a", 1)];
        let err = validate_distinct_cost_types(&dup).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateCostType { .. }));
    }

    #[test]
    fn test_validate_distinct_allows_same_id_different_priority() {
        let list = vec![cost_type("a", 1), cost_type("a", 2)];
        assert!(validate_distinct_cost_types(&list).is_ok());
    }
}
