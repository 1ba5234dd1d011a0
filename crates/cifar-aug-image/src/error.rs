/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image size is not valid.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index (channel: {0}, row: {1}, col: {2}) is out of bounds for shape {3:?}")]
    PixelIndexOutOfBounds(usize, usize, usize, [usize; 3]),

    /// Error when a pixel value cannot be represented in the target type.
    #[error("Failed to cast image data")]
    CastError,
}
