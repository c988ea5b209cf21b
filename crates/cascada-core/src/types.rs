//! # Domain Types
//!
//! Core domain types used throughout the pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Supply      │   │    CostType     │   │  CascadeStep    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID str)  │   │  id (UUID str)  │   │  cost_type_id   │       │
//! │  │  unit_cost      │   │  rate (bps)     │   │  amount (cents) │       │
//! │  │  current_stock  │   │  priority       │   │  priority       │       │
//! │  └─────────────────┘   │  is_mandatory   │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Rate       │   │    Quantity     │   │ DynamicBreakdown│       │
//! │  │  ─────────────  │   │  ─────────────  │   │ LegacyBreakdown │       │
//! │  │  bps (u32)      │   │  milli (i64)    │   │  (output shapes)│       │
//! │  │  1200 = 12%     │   │  2500 = 2.5     │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Split
//! `Supply` and `CostType` are persistence-owned and read-only here; the
//! breakdown shapes are computed fresh on every call, never mutated after
//! creation, and carry no identity beyond the calculation that produced
//! them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// Percentage rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1200 bps = 12% (e.g., IVA), 3000 bps = 30% (default profit margin)
///
/// Cost-type rates must stay within `0..=10000` (0%–100%); profit rates
/// have no upper bound. Negative rates are unrepresentable by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        Rate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A fractional quantity in milli-units (thousandths).
///
/// Bill-of-supplies recipes use fractional amounts (0.250 kg of flour),
/// so quantities follow the same integer convention as [`Rate`]:
/// `2500` milli-units = 2.5 units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quantity(i64);

impl Quantity {
    /// Creates a quantity from milli-units (thousandths).
    #[inline]
    pub const fn from_milli(milli: i64) -> Self {
        Quantity(milli)
    }

    /// Creates a quantity from whole units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Quantity(units * 1000)
    }

    /// Returns the quantity in milli-units.
    #[inline]
    pub const fn milli(&self) -> i64 {
        self.0
    }

    /// Zero quantity.
    #[inline]
    pub const fn zero() -> Self {
        Quantity(0)
    }

    /// Checks if the quantity is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::zero()
    }
}

// =============================================================================
// Supply
// =============================================================================

/// A raw material used in product recipes.
///
/// Owned by inventory; read-only to the engine. The engine only consults
/// `unit_cost` — stock and timestamps ride along for the CRUD layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Supply {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the back office.
    pub name: String,

    /// Unit of measure ("kg", "l", "pz").
    pub unit: String,

    /// Cost per unit in cents.
    pub unit_cost: Money,

    /// Current stock level in milli-units.
    pub current_stock: Quantity,

    /// Whether supply is active (soft delete).
    pub is_active: bool,

    /// When the supply was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the supply was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Supply Line (Bill of Supplies)
// =============================================================================

/// One recipe line in a product's bill of supplies.
///
/// The collection of lines is unordered and may be empty (products with an
/// empty bill fall back to their stored base price).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplyLine {
    /// The referenced supply (UUID v4).
    pub supply_id: String,

    /// Quantity of the supply consumed, in milli-units.
    pub quantity: Quantity,
}

// =============================================================================
// Cost Type
// =============================================================================

/// A named, prioritized, percentage-based charge (tax, overhead, marketing).
///
/// ## Ordering Invariant
/// Among active cost types in a single calculation, application order is
/// ascending `(priority, id)`. The id tie-break keeps equal priorities
/// deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostType {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name ("IVA", "Producción", "Marketing").
    pub name: String,

    /// Percentage applied to the running subtotal, in basis points (0-10000).
    pub rate: Rate,

    /// Application order within the cascade; lower applies first.
    pub priority: i32,

    /// Mandatory cost types apply to every product; optional ones only when
    /// the product explicitly selects them.
    pub is_mandatory: bool,

    /// Whether cost type is active (soft delete). Inactive cost types never
    /// participate in a cascade, even if mandatory or selected.
    pub is_active: bool,

    /// When the cost type was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the cost type was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Cascade Step
// =============================================================================

/// One applied cost type within a computed cascade.
///
/// Derived, never persisted: produced fresh on every calculation and never
/// mutated after creation. Zero-rate steps are kept (with `amount == 0`) so
/// UIs can render every configured cost type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CascadeStep {
    /// The applied cost type (UUID v4).
    #[serde(rename = "id")]
    pub cost_type_id: String,

    /// Cost type name at calculation time.
    pub name: String,

    /// Rate applied, in basis points.
    #[serde(rename = "percentage")]
    pub rate: Rate,

    /// Amount this step added to the running subtotal, in cents.
    pub amount: Money,

    /// Priority the step was applied at.
    pub priority: i32,

    /// Whether the cost type was mandatory or opted into.
    pub is_mandatory: bool,
}

// =============================================================================
// Breakdown Shapes
// =============================================================================

/// The general N-cost-type breakdown, computed on demand per product.
///
/// ## JSON Boundary
/// Field names are frozen for the existing Angular consumers:
/// `baseCost`, `profitPercentage`, `profitAmount`, `subtotal`,
/// `costs[{id,name,percentage,amount,priority,isMandatory}]`, `finalPrice`.
/// Money serializes as integer cents, rates as basis points; the UI formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DynamicBreakdown {
    pub product_id: String,
    pub product_name: String,
    pub product_sku: String,
    pub base_cost: Money,
    #[serde(rename = "profitPercentage")]
    pub profit_rate: Rate,
    pub profit_amount: Money,
    pub subtotal: Money,
    pub costs: Vec<CascadeStep>,
    pub final_price: Money,
}

/// The legacy fixed-shape breakdown record (IVA then ISR, nothing else).
///
/// Kept 1:1 with the persisted per-product record for backward
/// compatibility. `production_cost` and `marketing_cost` are static inputs
/// supplied by the caller — historical fields the general cascade does not
/// derive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LegacyBreakdown {
    pub base_cost: Money,
    pub production_cost: Money,
    pub marketing_cost: Money,
    pub profit_margin: Rate,
    pub subtotal: Money,
    pub iva_amount: Money,
    pub isr_amount: Money,
    pub iva_percentage: Rate,
    pub isr_percentage: Rate,
    pub final_price: Money,
}

// =============================================================================
// Product Costing Input
// =============================================================================

/// Everything the batch runner needs to price one product.
///
/// Assembled by the caller from persistence before invoking the engine;
/// the engine never performs its own lookups.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductCosting {
    /// Product identifier (UUID v4).
    pub product_id: String,

    /// Product name, attached to the breakdown for display.
    pub product_name: String,

    /// Product SKU, attached to the breakdown for display.
    pub product_sku: String,

    /// The product's bill of supplies; may be empty.
    pub lines: Vec<SupplyLine>,

    /// Ids of the optional cost types this product opted into.
    /// Mandatory cost types are implicitly included and need no entry here.
    pub selected_cost_type_ids: HashSet<String>,

    /// Stored base price, used only when `lines` is empty.
    pub fallback_cost: Option<Money>,

    /// Per-product profit margin; falls back to the system default.
    pub profit_rate: Option<Rate>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_bps() {
        let rate = Rate::from_bps(1200);
        assert_eq!(rate.bps(), 1200);
        assert!((rate.percentage() - 12.0).abs() < 0.001);
    }

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(12.5);
        assert_eq!(rate.bps(), 1250);
    }

    #[test]
    fn test_quantity_units_and_milli() {
        assert_eq!(Quantity::from_units(3).milli(), 3000);
        assert_eq!(Quantity::from_milli(250).milli(), 250);
        assert!(Quantity::from_milli(-1).is_negative());
    }

    #[test]
    fn test_cascade_step_json_field_names() {
        let step = CascadeStep {
            cost_type_id: "ct-1".to_string(),
            name: "IVA".to_string(),
            rate: Rate::from_bps(1200),
            amount: Money::from_cents(1560),
            priority: 1,
            is_mandatory: true,
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["id"], "ct-1");
        assert_eq!(json["percentage"], 1200);
        assert_eq!(json["amount"], 1560);
        assert_eq!(json["isMandatory"], true);
    }

    #[test]
    fn test_dynamic_breakdown_json_field_names() {
        let breakdown = DynamicBreakdown {
            product_id: "p-1".to_string(),
            product_name: "Pan dulce".to_string(),
            product_sku: "PAN-001".to_string(),
            base_cost: Money::from_cents(10_000),
            profit_rate: Rate::from_bps(3000),
            profit_amount: Money::from_cents(3_000),
            subtotal: Money::from_cents(13_000),
            costs: vec![],
            final_price: Money::from_cents(13_000),
        };
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["baseCost"], 10_000);
        assert_eq!(json["profitPercentage"], 3000);
        assert_eq!(json["profitAmount"], 3_000);
        assert_eq!(json["finalPrice"], 13_000);
        assert!(json["costs"].as_array().unwrap().is_empty());
    }
}
