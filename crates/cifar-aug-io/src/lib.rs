#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// CIFAR-10 binary batch reading and writing.
///
/// See [`cifar::load_cifar10`] to read the whole dataset directory.
pub mod cifar;

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access, archive decoding and
/// encoding failures.
pub mod error;

/// PNG image encoding and decoding.
pub mod png;
