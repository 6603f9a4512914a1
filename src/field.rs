//! Finite fields.
//!
//! This module exposes the base field of Curve448, integers modulo
//! p = 2^448 - 2^224 - 1. The type is provided by the backend.

pub use crate::backend::GF448;
