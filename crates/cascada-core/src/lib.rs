//! # cascada-core: Pure Pricing Cascade Engine
//!
//! This crate is the **heart** of Cascada. It contains the dynamic
//! cost-breakdown / pricing cascade logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cascada Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             Angular back office + POS front end                 │   │
//! │  │    Catalog UI ──► Cost-type UI ──► Live price preview           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST/JSON                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              API + persistence layer (separate repos)           │   │
//! │  │    fetches supplies, cost types, selections, profit margins     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cascada-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌────────────┐ ┌────────────┐ ┌──────────┐ ┌──────────────┐  │   │
//! │  │  │supply_cost │ │ cost_types │ │ cascade  │ │  breakdown   │  │   │
//! │  │  │ base cost  │ │  ordered   │ │  fold    │ │ dynamic +    │  │   │
//! │  │  │ from bill  │ │  selection │ │ compound │ │ legacy shape │  │   │
//! │  │  └────────────┘ └────────────┘ └──────────┘ └──────────────┘  │   │
//! │  │            └──────── batch: per-product report ────────┘       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Supply, CostType, breakdown shapes)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Numeric input validation
//! - [`supply_cost`] - Bill-of-supplies → base cost
//! - [`cost_types`] - Mandatory + selected → ordered cost-type list
//! - [`cascade`] - The compounding cascade fold
//! - [`breakdown`] - Dynamic and legacy output shapes
//! - [`batch`] - Catalog-wide breakdown report with partial-failure
//!   semantics
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic - same input
//!    = same output
//! 2. **No I/O**: All data is fetched by the caller before invoking the
//!    engine; the engine never performs its own lookups
//! 3. **Integer Money**: All monetary values are cents (i64), all rates
//!    are basis points (u32) — no float drift between preview and record
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use cascada_core::cascade::compute_breakdown;
//! use cascada_core::money::Money;
//! use cascada_core::types::Rate;
//!
//! // $100.00 base cost at the default 30% margin, no cost types yet
//! let result = compute_breakdown(
//!     Money::from_cents(10_000),
//!     cascada_core::DEFAULT_PROFIT_RATE,
//!     &[],
//! )
//! .unwrap();
//!
//! assert_eq!(result.profit_amount, Money::from_cents(3_000));
//! assert_eq!(result.final_price, Money::from_cents(13_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod batch;
pub mod breakdown;
pub mod cascade;
pub mod cost_types;
pub mod error;
pub mod money;
pub mod supply_cost;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cascada_core::Money` instead of
// `use cascada_core::money::Money`

pub use batch::{compute_all, BatchReport, FailedBreakdown};
pub use breakdown::{assemble_dynamic, assemble_legacy};
pub use cascade::{compute_breakdown, CascadeResult};
pub use cost_types::resolve_cost_types;
pub use error::{PricingError, PricingResult, ValidationError};
pub use money::Money;
pub use supply_cost::resolve_base_cost;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// System default profit margin: 30%, in basis points.
///
/// ## Why a constant?
/// The legacy system hard-coded `30` deep inside two separate calculators.
/// Here it is a named default that callers pass explicitly (see
/// [`batch::compute_all`]), so tests and production run the exact same
/// code path.
pub const DEFAULT_PROFIT_RATE: types::Rate = types::Rate::from_bps(3000);

/// Upper bound for a cost-type rate: 100%, in basis points.
pub const MAX_RATE_BPS: u32 = 10_000;

/// Cost-type name the legacy breakdown record expects in step one.
pub const LEGACY_VAT_NAME: &str = "IVA";

/// Cost-type name the legacy breakdown record expects in step two.
pub const LEGACY_INCOME_TAX_NAME: &str = "ISR";
