use cifar_aug_image::ImageError;

/// An error type for the augmentation module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AugmentError {
    /// The input image does not have the 3x32x32 shape the transforms expect.
    #[error("Image shape {actual:?} does not match the expected shape {expected:?}")]
    ShapeMismatch {
        /// The expected (channels, rows, cols).
        expected: [usize; 3],
        /// The shape of the received image.
        actual: [usize; 3],
    },

    /// A random source returned a value outside of its contracted range.
    #[error("Random draw `{name}` returned {value}, expected a value in [{low}, {high}]")]
    InvalidRandomDraw {
        /// The name of the drawn parameter.
        name: &'static str,
        /// The value returned by the source.
        value: f64,
        /// Lower bound of the contracted range.
        low: f64,
        /// Upper bound of the contracted range.
        high: f64,
    },

    /// Error from the underlying image container.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Expected shape of every image entering a transform, as (channels, rows, cols).
pub const CIFAR_SHAPE: [usize; 3] = [3, 32, 32];

/// Reject images that are not 3x32x32 before any pixel is indexed.
pub(crate) fn check_cifar_shape<T>(
    image: &cifar_aug_image::Image<T, 3>,
) -> Result<(), AugmentError> {
    if image.shape() != CIFAR_SHAPE {
        return Err(AugmentError::ShapeMismatch {
            expected: CIFAR_SHAPE,
            actual: image.shape(),
        });
    }
    Ok(())
}
