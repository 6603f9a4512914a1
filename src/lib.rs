//! Gf448 is a Rust library for arithmetic in the base field of Curve448.
//!
//! This library implements computations modulo the prime
//! p = 2^448 - 2^224 - 1 (the "Goldilocks" prime), which is the base
//! field of Curve448, as used by the X448 key exchange ([RFC 7748]) and
//! the Ed448 signature algorithm ([RFC 8032]). It provides the numeric
//! substrate only: curve point arithmetic, the Montgomery ladder, key
//! encodings and randomness generation are left to the caller.
//!
//! The field element type is `field::GF448`. Elements can be used in
//! straightforward expressions with normal arithmetic operators (`+`,
//! `-`, `*`, `/`, unary `-`, and compound assignments), with both raw
//! values and references. Division by zero is tolerated and yields zero.
//!
//! Internally, an element is held as sixteen 28-bit limbs, each stored
//! in a 32-bit word. The special shape of the modulus means that
//! 2^448 = 2^224 + 1 mod p, so carries out of the top limb fold back
//! into limbs 0 and 8; products are computed with 64-bit accumulators
//! and reduced while they are being accumulated. Inversion uses a fixed
//! addition chain for an inverse square root, so it has no dependency
//! on the value being inverted.
//!
//! # Usage
//!
//! The library is `no_std`. By default, it compiles against the standard
//! library (feature `std`); this is only used by the test suite, and all
//! functionality is available without it.
//!
//! # Conventions
//!
//! All implemented functions should be strictly constant-time, unless
//! explicitly documented otherwise. In order to avoid unwanted
//! side-channel leaks, Booleans are avoided (compilers tend to "optimize"
//! things a bit too eagerly when handling `bool` values). All functions
//! that return or use a potentially secret Boolean value use the `u32`
//! type; the convention is that 0xFFFFFFFF means "true", and 0x00000000
//! means "false". No other value shall be used, for they would lead to
//! unpredictable results. Similarly, the `Eq` or `PartialEq` traits are
//! not implemented.
//!
//! Functions that modify the object on which they are called tend to
//! have a name in `set_*()` (e.g. `x.set_square()` squares `x` in place,
//! while `x.square()` leaves `x` unmodified and returns the square as a
//! new instance).
//!
//! Secret values are not cleared on drop; callers who care should
//! overwrite them when they are done.
//!
//! [RFC 7748]: https://datatracker.ietf.org/doc/html/rfc7748
//! [RFC 8032]: https://datatracker.ietf.org/doc/html/rfc8032

#![no_std]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

pub use rand_core::{CryptoRng, RngCore, Error as RngError};

macro_rules! static_assert {
    ($condition:expr) => {
        let _ = &[()][1 - ($condition) as usize];
    }
}

pub mod backend;
pub mod field;
