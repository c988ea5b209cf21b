//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A pricing cascade compounds step after step; float error compounds    │
//! │  right along with it and the preview price drifts from the stored one. │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every amount is an i64 of cents. Rounding happens exactly once per  │
//! │    cascade step, half-up, and is therefore reproducible everywhere.    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cascada_core::money::Money;
//! use cascada_core::types::Rate;
//!
//! // Create from cents (preferred)
//! let base = Money::from_cents(10_000); // $100.00
//!
//! // Apply a basis-point rate (3000 bps = 30%)
//! let profit = base.apply_rate(Rate::from_bps(3000));
//! assert_eq!(profit.cents(), 3_000); // $30.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::{Quantity, Rate};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Malformed persisted data can carry negative costs;
///   the type represents them so validation can reject them explicitly
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Supply.unit_cost ──► line cost ──► base_cost                           │
/// │                                        │                                │
/// │  base_cost ──► profit_amount ──► subtotal ──► per-step amounts          │
/// │                                                   │                     │
/// │                                                   ▼                     │
/// │                                              final_price                │
/// │                                                                         │
/// │  EVERY monetary value in the engine flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use cascada_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a basis-point rate and returns the resulting amount.
    ///
    /// This is the single rounding point of the whole engine: one half-up
    /// rounding per cascade step, nowhere else.
    ///
    /// ## Implementation
    /// Integer math: `(cents * bps + 5000) / 10000`. The `+5000` provides
    /// half-up rounding (5000/10000 = 0.5). `i128` intermediates prevent
    /// overflow on large amounts.
    ///
    /// Callers must validate non-negative amounts first; the rounding term
    /// assumes a non-negative product.
    ///
    /// ## Example
    /// ```rust
    /// use cascada_core::money::Money;
    /// use cascada_core::types::Rate;
    ///
    /// let subtotal = Money::from_cents(13_000); // $130.00
    /// let rate = Rate::from_bps(1200);          // 12% (IVA)
    ///
    /// let amount = subtotal.apply_rate(rate);
    /// // $130.00 × 12% = $15.60 exactly
    /// assert_eq!(amount.cents(), 1560);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Multiplies money by a fractional quantity (milli-units).
    ///
    /// ## Example
    /// ```rust
    /// use cascada_core::money::Money;
    /// use cascada_core::types::Quantity;
    ///
    /// let unit_cost = Money::from_cents(800);   // $8.00 per kg
    /// let qty = Quantity::from_milli(2_500);    // 2.5 kg
    /// let line_cost = unit_cost.multiply_quantity(qty);
    /// assert_eq!(line_cost.cents(), 2_000);     // $20.00
    /// ```
    ///
    /// ## Engine Context
    /// ```text
    /// BillOfSupplies line: flour × 2.5 kg
    ///      │
    ///      ▼
    /// multiply_quantity(2.5) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line cost: $20.00 ──► summed into base_cost
    /// ```
    pub fn multiply_quantity(&self, qty: Quantity) -> Money {
        // Same half-up scheme as apply_rate, over thousandths
        let cents = (self.0 as i128 * qty.milli() as i128 + 500) / 1000;
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for whole-unit quantities).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
