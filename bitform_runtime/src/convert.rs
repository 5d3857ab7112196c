//! The cast matrix between field value representations
//!
//! Generated field-extraction code calls exactly one function here per
//! field. Unchecked casts are total: narrowing keeps the low bits of the
//! representation and mixed-sign casts reinterpret the two's complement
//! pattern. Each cast where information can be lost has a checked `_maybe`
//! twin that returns `None` for a not-representable source instead.

// SAFETY: the i128-to-u128 and float-to-int casts below are the defined
// truncation/reinterpretation contract of the unchecked casts, not accidents.
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive};

use crate::value::{Bits, SInt, UInt};

// ========== Fixed-width integer casts ==========

/// Resize an unsigned value: widening zero-extends, narrowing keeps the
/// low `OUT` bits.
#[inline]
pub fn uint_to_uint<const IN: u32, const OUT: u32>(x: UInt<IN>) -> UInt<OUT> {
    UInt::from_bits(x.rep())
}

/// Checked version of [`uint_to_uint`].
pub fn uint_to_uint_maybe<const IN: u32, const OUT: u32>(x: UInt<IN>) -> Option<UInt<OUT>> {
    if OUT >= IN || x.rep() <= UInt::<OUT>::MAX.rep() {
        Some(uint_to_uint(x))
    } else {
        None
    }
}

/// Reinterpret a signed value as unsigned: the sign-extended two's
/// complement pattern is kept, masked to `OUT` bits.
#[inline]
pub fn sint_to_uint<const IN: u32, const OUT: u32>(x: SInt<IN>) -> UInt<OUT> {
    UInt::from_bits(x.rep() as u128)
}

/// Checked version of [`sint_to_uint`]. A negative source never fits.
pub fn sint_to_uint_maybe<const IN: u32, const OUT: u32>(x: SInt<IN>) -> Option<UInt<OUT>> {
    if x.is_negative() {
        return None;
    }
    if OUT >= IN || x.rep() <= UInt::<OUT>::MAX.rep() as i128 {
        Some(sint_to_uint(x))
    } else {
        None
    }
}

/// Reinterpret an unsigned value as signed: the pattern is masked to `OUT`
/// bits and the sign read from bit `OUT - 1`.
#[inline]
pub fn uint_to_sint<const IN: u32, const OUT: u32>(x: UInt<IN>) -> SInt<OUT> {
    SInt::from_bits(x.rep())
}

/// Checked version of [`uint_to_sint`]. Strict widening always succeeds,
/// the extra bit absorbing the sign.
pub fn uint_to_sint_maybe<const IN: u32, const OUT: u32>(x: UInt<IN>) -> Option<SInt<OUT>> {
    if OUT > IN || x.rep() <= SInt::<OUT>::MAX.rep() as u128 {
        Some(uint_to_sint(x))
    } else {
        None
    }
}

/// Resize a signed value: widening sign-extends, narrowing keeps the low
/// `OUT` bits.
#[inline]
pub fn sint_to_sint<const IN: u32, const OUT: u32>(x: SInt<IN>) -> SInt<OUT> {
    SInt::from_bits(x.rep() as u128)
}

/// Checked version of [`sint_to_sint`]. Both bounds are inclusive.
pub fn sint_to_sint_maybe<const IN: u32, const OUT: u32>(x: SInt<IN>) -> Option<SInt<OUT>> {
    if OUT >= IN || (SInt::<OUT>::MIN.rep() <= x.rep() && x.rep() <= SInt::<OUT>::MAX.rep()) {
        Some(sint_to_sint(x))
    } else {
        None
    }
}

/// View a generated bitdata value as its underlying unsigned field.
#[inline]
pub fn bitdata_to_uint<T: Bits<W>, const W: u32>(x: &T) -> UInt<W> {
    x.to_bits()
}

// ========== Float and double casts ==========

/// Truncate toward zero into an unsigned field. Out-of-range magnitudes
/// clamp at the container bounds and NaN maps to zero before the result is
/// masked to `OUT` bits.
#[inline]
pub fn float_to_uint<const OUT: u32>(x: f32) -> UInt<OUT> {
    UInt::from_bits(x as u128)
}

/// Truncate toward zero into a signed field; see [`float_to_uint`].
#[inline]
pub fn float_to_sint<const OUT: u32>(x: f32) -> SInt<OUT> {
    SInt::from_bits(x as i128 as u128)
}

/// Truncate toward zero into an unsigned field; see [`float_to_uint`].
#[inline]
pub fn double_to_uint<const OUT: u32>(x: f64) -> UInt<OUT> {
    UInt::from_bits(x as u128)
}

/// Truncate toward zero into a signed field; see [`float_to_uint`].
#[inline]
pub fn double_to_sint<const OUT: u32>(x: f64) -> SInt<OUT> {
    SInt::from_bits(x as i128 as u128)
}

/// Nearest binary32 value, ties to even.
#[inline]
pub fn uint_to_float<const IN: u32>(x: UInt<IN>) -> f32 {
    x.rep() as f32
}

/// Nearest binary32 value, ties to even.
#[inline]
pub fn sint_to_float<const IN: u32>(x: SInt<IN>) -> f32 {
    x.rep() as f32
}

/// Nearest binary64 value, ties to even.
#[inline]
pub fn uint_to_double<const IN: u32>(x: UInt<IN>) -> f64 {
    x.rep() as f64
}

/// Nearest binary64 value, ties to even.
#[inline]
pub fn sint_to_double<const IN: u32>(x: SInt<IN>) -> f64 {
    x.rep() as f64
}

/// Exact, lossless widening.
#[inline]
pub fn float_to_double(x: f32) -> f64 {
    f64::from(x)
}

/// Nearest binary32 value; magnitudes beyond the binary32 range become the
/// infinity of matching sign.
#[inline]
pub fn double_to_float(x: f64) -> f32 {
    x as f32
}

// ========== Big integer casts ==========

/// Exact conversion; the target has no upper bound.
#[inline]
pub fn uint_to_integer<const IN: u32>(x: UInt<IN>) -> BigInt {
    BigInt::from(x.rep())
}

/// Checked version of [`uint_to_integer`]; cannot fail.
pub fn uint_to_integer_maybe<const IN: u32>(x: UInt<IN>) -> Option<BigInt> {
    Some(uint_to_integer(x))
}

/// Exact conversion; the target has no upper bound.
#[inline]
pub fn sint_to_integer<const IN: u32>(x: SInt<IN>) -> BigInt {
    BigInt::from(x.rep())
}

/// Checked version of [`sint_to_integer`]; cannot fail.
pub fn sint_to_integer_maybe<const IN: u32>(x: SInt<IN>) -> Option<BigInt> {
    Some(sint_to_integer(x))
}

/// Truncate toward zero; `None` when no integer exists (NaN or infinite).
pub fn float_to_integer(x: f32) -> Option<BigInt> {
    BigInt::from_f32(x)
}

/// Truncate toward zero; `None` when no integer exists (NaN or infinite).
pub fn double_to_integer(x: f64) -> Option<BigInt> {
    BigInt::from_f64(x)
}

/// Two's complement residue of `x` in the low `width` bits.
fn low_bits(x: &BigInt, width: u32) -> u128 {
    let modulus = BigInt::one() << (width as usize);
    x.mod_floor(&modulus).to_u128().unwrap_or(0)
}

/// Export into an `OUT`-bit unsigned field, keeping the low bits.
pub fn integer_to_uint<const OUT: u32>(x: &BigInt) -> UInt<OUT> {
    UInt::from_bits(low_bits(x, OUT))
}

/// Checked export; `None` for negative values and for magnitudes that need
/// more than `OUT` bits.
pub fn integer_to_uint_maybe<const OUT: u32>(x: &BigInt) -> Option<UInt<OUT>> {
    if !x.is_negative() && x.bits() <= u64::from(OUT) {
        Some(integer_to_uint(x))
    } else {
        None
    }
}

/// Export into an `OUT`-bit signed field, keeping the low bits.
pub fn integer_to_sint<const OUT: u32>(x: &BigInt) -> SInt<OUT> {
    SInt::from_bits(low_bits(x, OUT))
}

/// Checked export into a signed field.
///
/// Values that fit the native word are bound-checked directly. For wider
/// targets the value is exported into the field representation and
/// re-imported; the cast succeeds exactly when that round trip reproduces
/// the source.
pub fn integer_to_sint_maybe<const OUT: u32>(x: &BigInt) -> Option<SInt<OUT>> {
    if let Some(v) = x.to_i64() {
        let v = i128::from(v);
        if SInt::<OUT>::MIN.rep() <= v && v <= SInt::<OUT>::MAX.rep() {
            return Some(SInt::from_bits(v as u128));
        }
        return None;
    }
    if OUT <= 64 {
        return None;
    }
    let r = integer_to_sint::<OUT>(x);
    if sint_to_integer(r) == *x {
        Some(r)
    } else {
        None
    }
}

/// Nearest binary64 approximation narrowed to binary32; precision loss for
/// large magnitudes is expected.
pub fn integer_to_float(x: &BigInt) -> f32 {
    integer_to_double(x) as f32
}

/// Nearest binary64 approximation; magnitudes beyond the binary64 range
/// become the infinity of matching sign.
pub fn integer_to_double(x: &BigInt) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

// ========== Identity cast ==========

/// Same-type cast yielding a value safe to bind independently of the
/// source. For `BigInt` the clone duplicates the digit storage, so the two
/// bindings never alias.
#[inline]
pub fn refl_cast<T: Clone>(x: &T) -> T {
    x.clone()
}

/// Checked version of [`refl_cast`]; an identity cast cannot fail.
#[inline]
pub fn refl_cast_maybe<T: Clone>(x: &T) -> Option<T> {
    Some(x.clone())
}
