#![deny(missing_docs)]
//! Image types and traits for generating and manipulating planar images

/// image representation for the augmentation pipeline.
pub mod image;

/// labelled samples and datasets.
pub mod dataset;

/// Error types for the image module.
pub mod error;

pub use crate::dataset::{Dataset, Sample};
pub use crate::error::ImageError;
pub use crate::image::{CifarImage, Image, ImageSize, CIFAR_CHANNELS, CIFAR_IMAGE_SIZE};
