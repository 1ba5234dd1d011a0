/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// The archive size is not a whole number of records.
    #[error("Archive of {0} bytes is not a multiple of the {1} bytes record size")]
    TruncatedRecord(usize, usize),

    /// A record holds a label outside of the known classes.
    #[error("Record {0} has label {1}, expected a value below {2}")]
    InvalidLabel(usize, u8, usize),

    /// A file the dataset directory must contain was not found.
    #[error("Missing {0} in the dataset directory {1}")]
    MissingArchiveEntry(&'static str, std::path::PathBuf),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] cifar_aug_image::ImageError),

    /// Error to encode the PNG image.
    #[error("Failed to encode the png image. {0}")]
    PngEncodingError(String),

    /// Error to decode the PNG image.
    #[error("Failed to decode the png image. {0}")]
    PngDecodeError(String),
}
