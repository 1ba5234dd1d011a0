#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// dispatching one random augmentation per image.
pub mod augment;

/// image cropping module.
pub mod crop;

/// random rectangle erasing.
pub mod cutout;

/// image enhancement module.
pub mod enhance;

/// Error types for the augmentation module.
pub mod error;

/// image flipping module.
pub mod flip;

/// constant border padding.
pub mod padding;

/// module containing parallization utilities.
pub mod parallel;

/// random number sources injected into the transforms.
pub mod random;

/// forward-mapped image rotation.
pub mod rotate;

pub use crate::error::AugmentError;
pub use crate::random::{RandomSource, RngSource};
