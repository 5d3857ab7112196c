//! Error types for checked value construction
//!
//! The cast matrix itself never produces an error value: a checked cast
//! reports a not-representable source as `None`. These errors belong to
//! the construction boundary above the casts, where a byte reader hands
//! over raw representations that must satisfy the width invariants.

use thiserror::Error;

/// Error raised when a raw representation violates a field invariant.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Representation has bits set at or above the field width
    #[error("ValueError: representation {rep:#x} has bits above width {width}")]
    RepOverflow {
        /// Rejected raw representation
        rep: u128,
        /// Field width in bits
        width: u32,
    },

    /// Signed value outside the two's complement range of the field
    #[error("ValueError: {value} is out of range for a {width}-bit signed field")]
    SignedRange {
        /// Rejected numeric value
        value: i128,
        /// Field width in bits
        width: u32,
    },
}

impl RuntimeError {
    /// Create a representation overflow error
    pub fn rep_overflow(rep: u128, width: u32) -> Self {
        RuntimeError::RepOverflow { rep, width }
    }

    /// Create a signed range error
    pub fn signed_range(value: i128, width: u32) -> Self {
        RuntimeError::SignedRange { value, width }
    }
}

/// Result type alias for checked value construction
pub type RuntimeResult<T> = Result<T, RuntimeError>;
