//! 256-bit arithmetic helpers used by the matching algorithm.
//!
//! `Price` and `Quantity` are both `crypto_bigint::U256`. Addition and
//! subtraction are used directly via the standard operators (the engine
//! never lets a subtraction underflow: every decrement is bounded by a
//! residual or depth tracked alongside it). Multiplication and division
//! need a little more care because they cross unit boundaries (quantity
//! times price) or because a zero divisor must never reach the hardware,
//! so they get dedicated helpers here, widening to 512 bits for the
//! multiply and truncating back down.

use crypto_bigint::{NonZero, U256, U512, Zero};

/// `a * b`, widened to 512 bits and truncated back to 256.
///
/// Quantities and prices originating from realistic token supplies never
/// approach the point where this truncation loses bits; the debug
/// assertion exists to catch a construction bug long before it would
/// silently misprice a trade.
#[inline]
pub fn mul(a: U256, b: U256) -> U256 {
    let wide = U512::from(a).wrapping_mul(&U512::from(b));
    let (lo, hi) = wide.split();
    debug_assert!(
        bool::from(hi.is_zero()),
        "quantity * price overflowed 256 bits"
    );
    lo
}

/// `a / b`, floor division. `b` must be non-zero; every caller in this
/// crate only divides by a price already confirmed live (either a
/// caller-supplied limit price rejected at zero in `place`, or a price
/// currently present in a ladder, which is never zero).
#[inline]
pub fn div_floor(a: U256, b: U256) -> U256 {
    let divisor = NonZero::new(b).expect("division by a zero price");
    a / divisor
}

/// Convenience predicate over `U256::is_zero`'s constant-time `Choice`.
#[inline]
pub fn is_zero(a: U256) -> bool {
    a.is_zero().into()
}
