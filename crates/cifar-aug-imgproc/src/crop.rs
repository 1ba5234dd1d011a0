use cifar_aug_image::{CifarImage, Image, ImageError, CIFAR_IMAGE_SIZE};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::error::{check_cifar_shape, AugmentError};
use crate::padding::{pad_constant, Padding2D};
use crate::random::{draw_index, RandomSource};

/// Border added on every side before the random crop window is drawn.
pub const CROP_PADDING: usize = 2;

/// Crop an image to a specified region.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `dst` - The destination image to store the cropped image.
/// * `row` - The row of the top-left corner of the region to crop.
/// * `col` - The column of the top-left corner of the region to crop.
///
/// # Errors
///
/// Returns an error if the region does not fit inside `src`.
///
/// # Examples
///
/// ```rust
/// use cifar_aug_image::{Image, ImageSize};
/// use cifar_aug_imgproc::crop::crop_image;
///
/// let image = Image::<_, 1>::new(ImageSize { width: 4, height: 4 }, vec![
///     0u8, 1, 2, 3,
///     4u8, 5, 6, 7,
///     8u8, 9, 10, 11,
///     12u8, 13, 14, 15
/// ]).unwrap();
///
/// let mut cropped = Image::<_, 1>::from_size_val(ImageSize { width: 2, height: 2 }, 0u8).unwrap();
///
/// crop_image(&image, &mut cropped, 1, 1).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5u8, 6, 9, 10]);
/// ```
pub fn crop_image<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    row: usize,
    col: usize,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if row + dst.rows() > src.rows() || col + dst.cols() > src.cols() {
        return Err(ImageError::InvalidImageSize(
            col + dst.cols(),
            row + dst.rows(),
            src.cols(),
            src.rows(),
        ));
    }

    let dst_rows = dst.rows();
    let dst_cols = dst.cols();
    let src_cols = src.cols();
    let src_plane_len = src.plane_len();

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_cols)
        .enumerate()
        .for_each(|(i, dst_row)| {
            // rows of all the channel planes are enumerated one after the other
            let (c, r) = (i / dst_rows, i % dst_rows);
            let offset = c * src_plane_len + (row + r) * src_cols + col;
            dst_row.copy_from_slice(&src.as_slice()[offset..offset + dst_cols]);
        });

    Ok(())
}

/// Zero-pad a 3x32x32 image by [`CROP_PADDING`] pixels and cut the 32x32
/// window whose top-left corner sits at `(row, col)` of the padded image.
///
/// An offset of `(2, 2)` gives back the input image.
///
/// # Errors
///
/// Returns an error if the image is not 3x32x32 or the offset exceeds `2 * CROP_PADDING`.
pub fn pad_and_crop(
    src: &CifarImage,
    row: usize,
    col: usize,
) -> Result<CifarImage, AugmentError> {
    check_cifar_shape(src)?;

    let padding = Padding2D::uniform(CROP_PADDING);
    let mut padded = CifarImage::from_size_val(padding.padded_size(src.size()), 0)?;
    pad_constant(src, &mut padded, padding, [0; 3])?;

    let mut dst = CifarImage::from_size_val(CIFAR_IMAGE_SIZE, 0)?;
    crop_image(&padded, &mut dst, row, col)?;

    Ok(dst)
}

/// Randomly crop a 32x32 window out of the zero-padded 36x36 image.
///
/// The row and column offsets are drawn independently in `[0, 4]`.
///
/// # Errors
///
/// Returns an error if the image is not 3x32x32 or the random source misbehaves.
pub fn random_crop(
    src: &CifarImage,
    rng: &mut impl RandomSource,
) -> Result<CifarImage, AugmentError> {
    check_cifar_shape(src)?;

    let max_offset = 2 * CROP_PADDING;
    let tlx = draw_index(rng, "crop_row", 0, max_offset)?;
    let tly = draw_index(rng, "crop_col", 0, max_offset)?;

    pad_and_crop(src, tlx, tly)
}
