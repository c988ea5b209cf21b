//! # Batch Breakdown Runner
//!
//! Applies the full pipeline — supply costing, selection resolution,
//! cascade, dynamic assembly — per product across an entire catalog for
//! the "breakdown report" view.
//!
//! ## Partial-Failure Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products: [P1, P2 (bad data), P3]                                      │
//! │       │                                                                 │
//! │       ▼  each product priced independently, in input order              │
//! │  P1 → DynamicBreakdown ──────────────► report.succeeded                 │
//! │  P2 → ValidationError  ──────────────► report.failed (id + message)     │
//! │  P3 → DynamicBreakdown ──────────────► report.succeeded                 │
//! │                                                                         │
//! │  One malformed product never blocks the catalog-wide report.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each product's computation is a pure function of pre-fetched inputs, so
//! entries are independent and could be priced in parallel; only the
//! report envelope carries a timestamp.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::breakdown::assemble_dynamic;
use crate::cascade::compute_breakdown;
use crate::cost_types::resolve_cost_types;
use crate::error::PricingResult;
use crate::supply_cost::resolve_base_cost;
use crate::types::{CostType, DynamicBreakdown, ProductCosting, Rate, Supply};

// =============================================================================
// Report Types
// =============================================================================

/// One product that could not be priced.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FailedBreakdown {
    pub product_id: String,
    pub product_name: String,
    /// Human-readable error; the typed error stays inside the engine.
    pub error: String,
}

/// The catalog-wide breakdown report.
///
/// Succeeded and failed entries each preserve the input product order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BatchReport {
    /// When the report was generated (the only non-pure value in the
    /// engine, stamped on the envelope, never inside a calculation).
    #[ts(as = "String")]
    pub generated_at: DateTime<Utc>,
    pub succeeded: Vec<DynamicBreakdown>,
    pub failed: Vec<FailedBreakdown>,
}

// =============================================================================
// Runner
// =============================================================================

/// Prices every product in the batch, independently.
///
/// ## Arguments
/// * `products` - Per-product costing inputs, pre-fetched by the caller
/// * `supplies` - Supply catalog keyed by id
/// * `catalog` - The full cost-type catalog; selection happens per product
/// * `default_profit_rate` - Used when a product carries no margin of its
///   own. An explicit argument, never ambient config, so the same call
///   behaves identically in tests and production (the system default is
///   [`crate::DEFAULT_PROFIT_RATE`])
///
/// A product that fails validation is reported in `failed` with its error
/// message and the batch continues.
pub fn compute_all(
    products: &[ProductCosting],
    supplies: &HashMap<String, Supply>,
    catalog: &[CostType],
    default_profit_rate: Rate,
) -> BatchReport {
    let mut succeeded = Vec::with_capacity(products.len());
    let mut failed = Vec::new();

    for product in products {
        match compute_one(product, supplies, catalog, default_profit_rate) {
            Ok(breakdown) => succeeded.push(breakdown),
            Err(err) => {
                tracing::debug!(
                    product_id = %product.product_id,
                    error = %err,
                    "product excluded from breakdown report"
                );
                failed.push(FailedBreakdown {
                    product_id: product.product_id.clone(),
                    product_name: product.product_name.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    BatchReport {
        generated_at: Utc::now(),
        succeeded,
        failed,
    }
}

/// Runs the full pipeline for a single product.
fn compute_one(
    product: &ProductCosting,
    supplies: &HashMap<String, Supply>,
    catalog: &[CostType],
    default_profit_rate: Rate,
) -> PricingResult<DynamicBreakdown> {
    let base_cost = resolve_base_cost(&product.lines, supplies, product.fallback_cost)?;
    let cost_types = resolve_cost_types(catalog, &product.selected_cost_type_ids);
    let profit_rate = product.profit_rate.unwrap_or(default_profit_rate);

    let result = compute_breakdown(base_cost, profit_rate, &cost_types)?;

    Ok(assemble_dynamic(
        &product.product_id,
        &product.product_name,
        &product.product_sku,
        base_cost,
        profit_rate,
        result,
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================
