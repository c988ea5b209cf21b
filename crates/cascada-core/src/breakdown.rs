//! # Breakdown Assembler
//!
//! Shapes the calculator's raw [`CascadeResult`] into the two contracts the
//! rest of the system consumes:
//!
//! - the **dynamic** shape — the general N-cost-type view, one record per
//!   product, serialized for the "all products" breakdown report
//! - the **legacy** shape — the fixed IVA-then-ISR record persisted per
//!   product, kept for backward compatibility with existing consumers
//!
//! Both are views over the same cascade; the assembler computes nothing,
//! it only attaches identity fields and maps step amounts.

use crate::cascade::CascadeResult;
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::types::{DynamicBreakdown, LegacyBreakdown, Rate};
use crate::{LEGACY_INCOME_TAX_NAME, LEGACY_VAT_NAME};

// =============================================================================
// Dynamic Shape
// =============================================================================

/// Assembles the dynamic breakdown for one product.
///
/// Direct pass-through of the cascade result plus the owning product's
/// identity fields, which the caller supplies (they are not computed
/// here).
pub fn assemble_dynamic(
    product_id: &str,
    product_name: &str,
    product_sku: &str,
    base_cost: Money,
    profit_rate: Rate,
    result: CascadeResult,
) -> DynamicBreakdown {
    DynamicBreakdown {
        product_id: product_id.to_string(),
        product_name: product_name.to_string(),
        product_sku: product_sku.to_string(),
        base_cost,
        profit_rate,
        profit_amount: result.profit_amount,
        subtotal: result.subtotal,
        costs: result.steps,
        final_price: result.final_price,
    }
}

// =============================================================================
// Legacy Shape
// =============================================================================

/// Assembles the legacy fixed-shape record.
///
/// ## Shape Requirement
/// Valid only when the cascade is exactly two steps named `IVA` then
/// `ISR`, in that order. Anything else — extra steps, renamed taxes,
/// reordered priorities — fails with [`PricingError::ShapeMismatch`]
/// rather than silently mis-mapping a step amount into the wrong column.
///
/// `production_cost` and `marketing_cost` are historical static inputs the
/// general cascade does not derive; the caller supplies them from the
/// persisted product record.
pub fn assemble_legacy(
    base_cost: Money,
    profit_rate: Rate,
    production_cost: Money,
    marketing_cost: Money,
    result: &CascadeResult,
) -> PricingResult<LegacyBreakdown> {
    let names: Vec<&str> = result.steps.iter().map(|s| s.name.as_str()).collect();
    if names != [LEGACY_VAT_NAME, LEGACY_INCOME_TAX_NAME] {
        return Err(PricingError::ShapeMismatch {
            expected: format!("{LEGACY_VAT_NAME}, {LEGACY_INCOME_TAX_NAME}"),
            found: names.join(", "),
        });
    }

    let iva = &result.steps[0];
    let isr = &result.steps[1];

    Ok(LegacyBreakdown {
        base_cost,
        production_cost,
        marketing_cost,
        profit_margin: profit_rate,
        subtotal: result.subtotal,
        iva_amount: iva.amount,
        isr_amount: isr.amount,
        iva_percentage: iva.rate,
        isr_percentage: isr.rate,
        final_price: result.final_price,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
