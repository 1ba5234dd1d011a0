use cifar_aug_image::{CifarImage, Image, ImageError};

use crate::error::{check_cifar_shape, AugmentError};
use crate::flip::horizontal_flip_inplace;
use crate::parallel;
use crate::random::{draw_unit, RandomSource};

/// Intensity kept fixed by the contrast adjustment.
pub const CONTRAST_MIDPOINT: f64 = 128.0;

/// Lowest contrast factor drawn by [`random_contrast_and_flip`].
pub const MIN_CONTRAST: f64 = 0.5;

/// Highest contrast factor drawn by [`random_contrast_and_flip`].
pub const MAX_CONTRAST: f64 = 2.0;

/// Flip draws strictly above this value mirror the image.
pub const FLIP_THRESHOLD: f64 = 0.5;

/// Adjust the contrast of an image around the midpoint 128.
///
/// Each value becomes `alpha * (src - 128) + 128`, computed in floating point,
/// clipped to `[0, 255]` and truncated back to `u8`.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `alpha` - The contrast factor.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use cifar_aug_image::{Image, ImageSize};
/// use cifar_aug_imgproc::enhance::adjust_contrast;
///
/// let size = ImageSize { width: 4, height: 1 };
/// let src = Image::<u8, 1>::new(size, vec![0, 100, 128, 250]).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(size, 0).unwrap();
///
/// adjust_contrast(&src, 2.0, &mut dst).unwrap();
///
/// assert_eq!(dst.as_slice(), &[0, 72, 128, 255]);
/// ```
pub fn adjust_contrast<const C: usize>(
    src: &Image<u8, C>,
    alpha: f64,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let src_f64 = src.cast::<f64>()?;

    parallel::par_iter_rows_val(&src_f64, dst, |&src_val, dst_val| {
        let val = alpha * (src_val - CONTRAST_MIDPOINT) + CONTRAST_MIDPOINT;
        // truncate toward zero once clipped, like a plain float to byte cast
        *dst_val = val.clamp(0.0, 255.0) as u8;
    });

    Ok(())
}

/// Adjust the contrast of a 3x32x32 image, then optionally mirror it.
///
/// The flip reads the contrast-adjusted values on both sides of every swap.
///
/// # Errors
///
/// Returns an error if the image is not 3x32x32.
pub fn contrast_and_flip(
    src: &CifarImage,
    alpha: f64,
    flip: bool,
) -> Result<CifarImage, AugmentError> {
    check_cifar_shape(src)?;

    let mut dst = CifarImage::from_size_val(src.size(), 0)?;
    adjust_contrast(src, alpha, &mut dst)?;

    if flip {
        horizontal_flip_inplace(&mut dst);
    }

    Ok(dst)
}

/// Change the contrast by a random factor, then flip horizontally half of the time.
///
/// The contrast factor is `0.5 + 1.5 * u` for a draw `u` in `[0, 1)`. A second
/// draw `p` in `[0, 1)` decides the flip, which happens when `p > 0.5`.
///
/// # Errors
///
/// Returns an error if the image is not 3x32x32 or the random source misbehaves.
pub fn random_contrast_and_flip(
    src: &CifarImage,
    rng: &mut impl RandomSource,
) -> Result<CifarImage, AugmentError> {
    check_cifar_shape(src)?;

    let u = draw_unit(rng, "contrast_factor")?;
    let alpha = MIN_CONTRAST + (MAX_CONTRAST - MIN_CONTRAST) * u;

    let mut dst = CifarImage::from_size_val(src.size(), 0)?;
    adjust_contrast(src, alpha, &mut dst)?;

    let p = draw_unit(rng, "flip_probability")?;
    if p > FLIP_THRESHOLD {
        horizontal_flip_inplace(&mut dst);
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use cifar_aug_image::{CifarImage, Image, ImageError, ImageSize, CIFAR_IMAGE_SIZE};

    use crate::error::AugmentError;
    use crate::random::{RngSource, ScriptedSource};

    fn ramp_image() -> Result<CifarImage, ImageError> {
        let data = (0..3 * 32 * 32).map(|i| (i % 256) as u8).collect();
        CifarImage::new(CIFAR_IMAGE_SIZE, data)
    }

    #[test]
    fn test_adjust_contrast_identity() -> Result<(), ImageError> {
        let image = ramp_image()?;
        let mut dst = CifarImage::from_size_val(CIFAR_IMAGE_SIZE, 0)?;
        super::adjust_contrast(&image, 1.0, &mut dst)?;
        assert_eq!(dst, image);
        Ok(())
    }

    #[test]
    fn test_adjust_contrast_clips_and_truncates() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 5,
            height: 1,
        };
        let src = Image::<u8, 1>::new(size, vec![0, 1, 127, 200, 255])?;
        let mut dst = Image::<u8, 1>::from_size_val(size, 0)?;

        super::adjust_contrast(&src, 0.5, &mut dst)?;
        // 64.0, 64.5, 127.5, 164.0, 191.5
        assert_eq!(dst.as_slice(), &[64, 64, 127, 164, 191]);

        super::adjust_contrast(&src, 1.9, &mut dst)?;
        // -115.2, -113.3, 126.1, 264.8, 373.3
        assert_eq!(dst.as_slice(), &[0, 0, 126, 255, 255]);
        Ok(())
    }

    #[test]
    fn test_adjust_contrast_size_mismatch() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
        )?;
        assert_eq!(
            super::adjust_contrast(&src, 1.0, &mut dst),
            Err(ImageError::InvalidImageSize(2, 2, 3, 2))
        );
        Ok(())
    }

    #[test]
    fn test_unit_factor_without_flip_is_identity() -> Result<(), AugmentError> {
        let image = ramp_image()?;
        // u = 1/3 gives alpha = 1.0, p = 0.5 does not flip
        let mut rng = ScriptedSource::new().units(&[1.0 / 3.0, 0.5]);
        let out = super::random_contrast_and_flip(&image, &mut rng)?;
        assert_eq!(out, image);
        assert!(rng.is_exhausted());
        Ok(())
    }

    #[test]
    fn test_flip_reads_contrast_output() -> Result<(), AugmentError> {
        let image = ramp_image()?;
        let mut rng = ScriptedSource::new().units(&[0.9, 0.9]);
        let out = super::random_contrast_and_flip(&image, &mut rng)?;

        let alpha = 0.5 + 1.5 * 0.9;
        let contrasted = super::contrast_and_flip(&image, alpha, false)?;
        for c in 0..3 {
            for i in 0..32 {
                for j in 0..32 {
                    assert_eq!(out.get([c, i, j]), contrasted.get([c, i, 31 - j]));
                }
            }
        }
        assert_eq!(out, super::contrast_and_flip(&image, alpha, true)?);
        Ok(())
    }

    #[test]
    fn test_random_contrast_and_flip_keeps_input() -> Result<(), AugmentError> {
        let image = ramp_image()?;
        let copy = image.clone();
        let mut rng = RngSource::seeded(99);
        for _ in 0..10 {
            let out = super::random_contrast_and_flip(&image, &mut rng)?;
            assert_eq!(out.shape(), [3, 32, 32]);
        }
        assert_eq!(image, copy);
        Ok(())
    }

    #[test]
    fn test_random_contrast_rejects_bad_draw() -> Result<(), AugmentError> {
        let image = ramp_image()?;
        let mut rng = ScriptedSource::new().units(&[-0.1]);
        assert!(matches!(
            super::random_contrast_and_flip(&image, &mut rng),
            Err(AugmentError::InvalidRandomDraw {
                name: "contrast_factor",
                ..
            })
        ));
        Ok(())
    }
}
