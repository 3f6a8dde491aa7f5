//! Greatest common divisor and least common multiple for signed integers
//!
//! Used to combine cycle lengths, e.g. the periods of several walkers that
//! must line up again.

use num_traits::{PrimInt, Signed};

use crate::common::error::{Result, computation_error, invalid_parameter};

/// Greatest common divisor by Euclid's algorithm
///
/// The result is non-negative, except for `gcd(T::MIN, 0)` whose magnitude
/// does not fit in `T` and is returned unchanged. `gcd(0, 0)` is zero.
pub fn greatest_common_divisor<T: PrimInt + Signed>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        // T::MIN / -1 overflows, but its remainder is zero
        let remainder = a.checked_div(&b).map_or_else(T::zero, |quotient| a - quotient * b);
        (a, b) = (b, remainder);
    }
    if a.is_negative() {
        T::zero().checked_sub(&a).unwrap_or(a)
    } else {
        a
    }
}

/// Least common multiple of two integers
///
/// The result is non-negative and zero whenever either input is zero.
///
/// # Errors
///
/// Returns `Computation` if the multiple does not fit in `T`.
pub fn least_common_multiple<T: PrimInt + Signed>(a: T, b: T) -> Result<T> {
    if a.is_zero() || b.is_zero() {
        return Ok(T::zero());
    }
    let divisor = greatest_common_divisor(a, b);
    a.checked_div(&divisor)
        .and_then(|reduced| reduced.checked_mul(&b))
        .and_then(|product| {
            if product.is_negative() {
                T::zero().checked_sub(&product)
            } else {
                Some(product)
            }
        })
        .ok_or_else(|| computation_error("least_common_multiple", &"result overflows"))
}

/// Least common multiple of every value
///
/// # Errors
///
/// - `InvalidParameter` if `values` is empty
/// - `Computation` if an intermediate multiple overflows
pub fn least_common_multiple_of<T, I>(values: I) -> Result<T>
where
    T: PrimInt + Signed,
    I: IntoIterator<Item = T>,
{
    let mut values = values.into_iter();
    let first = values
        .next()
        .ok_or_else(|| invalid_parameter("values", &"[]", &"at least one value is required"))?;
    let seed = least_common_multiple(first, T::one())?;
    values.try_fold(seed, least_common_multiple)
}
