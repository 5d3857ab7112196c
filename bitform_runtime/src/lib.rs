//! Bitform Runtime Library
//!
//! This crate provides runtime numeric support for parsers compiled from
//! Bitform format descriptions. It includes:
//!
//! - `UInt` / `SInt` fixed-width field values with width invariants
//! - The unchecked cast matrix between fixed-width, floating-point, and
//!   arbitrary-precision values (total, truncating/reinterpreting)
//! - Checked `_maybe` casts that report a not-representable source as `None`
//! - `RuntimeError` for checked value construction

pub mod convert;
pub mod error;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use bitform_runtime::prelude::*;
/// ```
pub mod prelude {
    pub use super::convert::*;
    pub use super::error::{RuntimeError, RuntimeResult};
    pub use super::value::{Bits, SInt, UInt};
    pub use num_bigint::BigInt;
}

pub use prelude::*;
