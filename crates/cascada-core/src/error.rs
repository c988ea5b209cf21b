//! # Error Types
//!
//! Domain-specific error types for cascada-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cascada-core errors (this file)                                       │
//! │  ├── PricingError      - Cascade/assembly failures                     │
//! │  └── ValidationError   - Numeric input failures                        │
//! │                                                                         │
//! │  API layer (separate service)                                          │
//! │  └── maps ValidationError/ShapeMismatch → 4xx,                         │
//! │      batch partial failures → 200-with-warnings                        │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError → API response → Frontend        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (cost type id, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. The engine never silently corrects bad input; the only recoverable
//!    condition is a missing supply reference, which is logged, not raised

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Pricing engine errors.
///
/// These represent a calculation or assembly that could not proceed. They
/// should be caught by the API layer and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Legacy-shape assembly attempted on a cascade that is not exactly
    /// IVA followed by ISR.
    ///
    /// ## When This Occurs
    /// - The cost-type catalog was extended but a consumer still requests
    ///   the fixed two-step persisted record
    /// - Cost-type priorities were reordered so ISR applies before IVA
    ///
    /// Failing loudly here prevents silently mis-mapping a third cost
    /// type's amount into `isr_amount`.
    #[error("Legacy breakdown requires steps [{expected}], found [{found}]")]
    ShapeMismatch { expected: String, found: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Numeric input validation errors.
///
/// Raised before any arithmetic runs, and always surfaced to the caller —
/// never clamped or silently corrected.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A monetary amount is negative.
    #[error("{field} must not be negative, got {cents} cents")]
    NegativeAmount { field: String, cents: i64 },

    /// A bill-of-supplies quantity is negative.
    #[error("quantity for supply {supply_id} must not be negative, got {milli} milli-units")]
    NegativeQuantity { supply_id: String, milli: i64 },

    /// A cost-type rate is above 100%.
    #[error("{field} must be at most {max_bps} basis points, got {bps}")]
    RateOutOfRange { field: String, bps: u32, max_bps: u32 },

    /// Two cost types in one cascade share the same (priority, id) pair.
    ///
    /// The selection resolver deduplicates by id, so this should be
    /// impossible downstream of it — but the calculator can be called
    /// directly and defends independently.
    #[error("duplicate cost type {cost_type_id} at priority {priority} in one cascade")]
    DuplicateCostType { cost_type_id: String, priority: i32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
