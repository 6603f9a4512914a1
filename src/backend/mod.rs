//! Implementation of the finite field GF(2^448 - 2^224 - 1).
//!
//! This module provides a type alias for the structure that implements
//! the field. There is a single implementation, which uses 32-bit words
//! (sixteen limbs of 28 bits each) and 64-bit products; it is
//! constant-time on both 32-bit and 64-bit targets.
//!
//! The following properties apply to the field implementation:
//!
//!  - An instance encapsulates a field element. The internal
//!    representation is not necessarily reduced: limbs may carry a few
//!    extra bits, and the represented integer may exceed the modulus.
//!    All functions accept such values, and all functions that return
//!    field elements return values with the same bounds.
//!
//!  - The constant values `Self::ZERO`, `Self::ONE` and
//!    `Self::MINUS_ONE` contain the elements of value 0, 1 and -1,
//!    respectively. `Self::MODULUS` contains the limbs of the modulus.
//!
//!  - Usual arithmetic operators can be used on field elements (`+`, `-`,
//!    `*`, `/`, and the compound assignments `+=`, `-=`, `*=` and `/=`).
//!    Division by zero is tolerated, and yields zero (regardless of the
//!    dividend). Operators can use both the raw types, and references
//!    thereof.
//!
//!  - Function `set_square(&mut self)` squares a field element (in place).
//!    Corresponding function `square(self) -> Self` returns the result
//!    as a new instance. Sequences of multiple squarings can be performed
//!    with `xsquare(self, n: u32)`.
//!
//!  - Function `set_neg(&mut self)` negates the instance on which it is
//!    applied.
//!
//!  - Function `set_mul_small(&mut self, x: u32)` (and
//!    `mul_small(self, x: u32) -> Self`) multiplies by a small integer
//!    provided at runtime. The multiplier is unsigned; to multiply by a
//!    negative constant, negate the result.
//!
//!  - Function `set_reduced(&mut self)` performs a weak reduction (carry
//!    propagation); function `set_canonical(&mut self)` normalizes the
//!    value to the unique representative in the `0..p-1` range. Neither
//!    is needed before calling any other function; they are exposed for
//!    callers that inspect encodings.
//!
//!  - Function `set_cond(&mut self, a: &Self, ctl: u32)` sets
//!    the instance to the value of the other instance `a` if `ctl` is
//!    equal to 0xFFFFFFFF, or leaves the instance value unmodified if
//!    `ctl` is equal to 0x00000000.
//!
//!  - Function `select(a0: &Self, a1: &Self, ctl: u32) -> Self` returns
//!    a copy of `a0` if `ctl` is 0x00000000, or a copy of `a1` if
//!    `ctl` is 0xFFFFFFFF.
//!
//!  - Function `cswap(a: &mut Self, b: &mut Self, ctl: u32)`
//!    exchanges the contents of `a` and `b` if `ctl` is 0xFFFFFFFF,
//!    or leaves them unmodified if `ctl` is 0x00000000.
//!
//!  - Conversions from `i32`, `u32`, `i64` and `u64` can use the
//!    functions `from_i32()`, `from_u32()`, and so on.
//!
//!  - Function `equals(self, rhs: Self) -> u32` returns 0xFFFFFFFF
//!    if `self` and `rhs` represent the same value, or 0x00000000
//!    otherwise. Function `iszero(self) -> u32` is a specialized
//!    subcase that compares `self` with zero.
//!
//!  - Function `invsqrt(self) -> Self` raises the value to the power
//!    `(p-3)/4`. If the value is a non-zero quadratic residue, then the
//!    result is one of the two inverse square roots of the value; the
//!    sign is not normalized, and no check is performed. Function
//!    `invert(self) -> Self` returns the inverse (zero is "inverted"
//!    into zero).
//!
//!  - The `legendre(self) -> i32` function returns the Legendre symbol
//!    for an element (0 for zero, +1 for non-zero squares, -1 for
//!    non-squares).
//!
//!  - The `batch_invert(xx: &mut[Self])` function performs inversion
//!    of all field elements in the provided slice, with a single
//!    inversion per batch of 100 elements. Elements of value zero
//!    are tolerated (the "inverse" of zero is zero).
//!
//!  - The `sqrt(self) -> (Self, u32)` function computes the square root
//!    of an element. On success, the root and 0xFFFFFFFF are returned. On
//!    failure (input is not a square), zero and 0x00000000 are returned.
//!    The chosen square root is the one whose least significant bit (when
//!    represented as an integer lower than the field order) is a zero.
//!    `sqrt_ext(self)` is similar, except that on failure it returns the
//!    square root of the negation of the input.
//!
//!  - Function `encode(self) -> [u8; 56]` encodes an element as
//!    exactly 56 bytes. Unsigned little-endian convention is used.
//!    Encoding is always canonical (i.e. the encoding always uses
//!    the integer which is lower than the field modulus).
//!
//!  - Function `decode56(buf: &[u8; 56]) -> Self` decodes 56 bytes with
//!    unsigned little-endian convention, without any range check: all
//!    448-bit integers are accepted, and implicitly reduced. This is the
//!    decoding used for X448 inputs, where non-canonical values must be
//!    tolerated.
//!
//!  - Function `decode_ct(buf: &[u8]) -> (Self, u32)` decodes some bytes
//!    with little-endian convention. If the source slice does not have
//!    length exactly 56 bytes, then the decoding fails. If the source
//!    slice has length 56 bytes, but the byte contents yield a
//!    non-canonical value, then decoding fails. On success, the decoded
//!    value and 0xFFFFFFFF are returned; on failure, zero and 0x00000000
//!    are returned. If the source slice has length 56 bytes, then not
//!    only the decoded value, but also the operation outcome (success or
//!    failure), are shielded from side-channel leaks. Function
//!    `decode(buf: &[u8]) -> Option<Self>` is a convenience wrapper.
//!
//!  - Function `decode_reduce(buf: &[u8]) -> Self` decodes some bytes
//!    with unsigned little-endian convention. The obtained integer is
//!    reduced modulo the field order, so the process never fails.
//!    It is fully constant-time (only the length of the source slice
//!    may leak through timing-based side channels).
//!
//!  - Function `random(rng)` returns an element chosen with an
//!    (almost) uniform distribution, using the provided cryptographically
//!    secure random generator.

pub mod w32;

/// Finite field: integers modulo p = 2^448 - 2^224 - 1.
///
/// This type implements `mul_small()` and `set_mul_small()`, square
/// roots, and the inverse square root used by X448 and Ed448 point
/// formulas.
pub type GF448 = w32::gf448::GF448;
