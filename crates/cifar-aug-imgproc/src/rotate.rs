use cifar_aug_image::CifarImage;

use crate::error::{check_cifar_shape, AugmentError};
use crate::random::{draw_int, RandomSource};

/// Largest absolute angle, in degrees, drawn by [`random_rotation`].
pub const MAX_ROTATION_DEGREES: i64 = 180;

/// Rotate an image about its center by scattering every source pixel.
///
/// The angle is negated before evaluating the trigonometric functions and
/// each source pixel `(i, j)` is sent to
///
/// ```text
/// dst_row = round((i - 15.5) * cos + (j - 15.5) * sin + 15.5)
/// dst_col = round((j - 15.5) * cos - (i - 15.5) * sin + 15.5)
/// ```
///
/// with ties rounded to even. The output starts black and sources that land
/// outside the image are dropped, so destinations nobody maps to stay zero.
/// When two sources hit the same destination the later one, in row-major
/// order, is kept.
///
/// # Arguments
///
/// * `src` - The 3x32x32 input image.
/// * `degrees` - The rotation angle in degrees.
///
/// # Errors
///
/// Returns an error if the image is not 3x32x32.
///
/// # Example
///
/// ```
/// use cifar_aug_image::{CifarImage, CIFAR_IMAGE_SIZE};
/// use cifar_aug_imgproc::rotate::rotate;
///
/// let image = CifarImage::from_size_val(CIFAR_IMAGE_SIZE, 42).unwrap();
/// let rotated = rotate(&image, 0).unwrap();
///
/// assert_eq!(rotated, image);
/// ```
pub fn rotate(src: &CifarImage, degrees: i64) -> Result<CifarImage, AugmentError> {
    check_cifar_shape(src)?;

    let rows = src.rows();
    let cols = src.cols();
    let plane = src.plane_len();

    let center_row = (rows as f64 - 1.0) / 2.0;
    let center_col = (cols as f64 - 1.0) / 2.0;

    let theta = (-(degrees as f64)).to_radians();
    let (sin, cos) = theta.sin_cos();

    let mut dst = CifarImage::from_size_val(src.size(), 0)?;
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    for i in 0..rows {
        let di = i as f64 - center_row;
        for j in 0..cols {
            let dj = j as f64 - center_col;
            let ni = (di * cos + dj * sin + center_row).round_ties_even() as i64;
            let nj = (dj * cos - di * sin + center_col).round_ties_even() as i64;

            if ni < 0 || ni >= rows as i64 || nj < 0 || nj >= cols as i64 {
                continue;
            }

            let src_idx = i * cols + j;
            let dst_idx = ni as usize * cols + nj as usize;
            for c in 0..3 {
                dst_data[c * plane + dst_idx] = src_data[c * plane + src_idx];
            }
        }
    }

    Ok(dst)
}

/// Rotate an image by an integer angle drawn uniformly in `[-180, 180]` degrees.
///
/// See [`rotate`] for the mapping.
///
/// # Errors
///
/// Returns an error if the image is not 3x32x32 or the random source misbehaves.
pub fn random_rotation(
    src: &CifarImage,
    rng: &mut impl RandomSource,
) -> Result<CifarImage, AugmentError> {
    check_cifar_shape(src)?;
    let degrees = draw_int(
        rng,
        "rotation_degrees",
        -MAX_ROTATION_DEGREES,
        MAX_ROTATION_DEGREES,
    )?;
    rotate(src, degrees)
}
