use cifar_aug_image::CifarImage;

use crate::error::{check_cifar_shape, AugmentError};
use crate::random::{draw_index, RandomSource};

/// Largest block width and height drawn for a cutout.
pub const MAX_CUTOUT_EXTENT: usize = 16;

const LAST_INDEX: usize = 31;

/// The random draws of a cutout.
///
/// `width` and `height` only bound where the top-left corner may fall. The
/// erased block is the inclusive rectangle from `top_left` to `bottom_right`,
/// whose corner is drawn separately and may lie further than `width` and
/// `height` away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutoutParams {
    /// Drawn block width in `[0, 16]`, bounds the top-left row.
    pub width: usize,
    /// Drawn block height in `[0, 16]`, bounds the top-left column.
    pub height: usize,
    /// Per-channel fill value.
    pub fill: [u8; 3],
    /// Top-left corner as (row, col).
    pub top_left: (usize, usize),
    /// Bottom-right corner as (row, col), inclusive.
    pub bottom_right: (usize, usize),
}

impl CutoutParams {
    /// Draw the cutout parameters.
    ///
    /// The draws happen in this order: width, height, fill color, top-left
    /// row in `[0, 31 - width]`, top-left column in `[0, 31 - height]`,
    /// bottom-right row in `[tlx, 31]` and bottom-right column in `[tly, 31]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the random source returns a value out of range.
    pub fn sample(rng: &mut impl RandomSource) -> Result<Self, AugmentError> {
        let width = draw_index(rng, "cutout_width", 0, MAX_CUTOUT_EXTENT)?;
        let height = draw_index(rng, "cutout_height", 0, MAX_CUTOUT_EXTENT)?;
        let fill = rng.fill_color();

        let tlx = draw_index(rng, "cutout_top", 0, LAST_INDEX - width)?;
        let tly = draw_index(rng, "cutout_left", 0, LAST_INDEX - height)?;

        let brx = draw_index(rng, "cutout_bottom", tlx, LAST_INDEX)?;
        let bry = draw_index(rng, "cutout_right", tly, LAST_INDEX)?;

        Ok(Self {
            width,
            height,
            fill,
            top_left: (tlx, tly),
            bottom_right: (brx, bry),
        })
    }
}

/// Erase the rectangle described by `params` with its fill color.
///
/// The output is a copy of `src` where, in every channel `c`, the rows
/// `top_left.0..=bottom_right.0` and columns `top_left.1..=bottom_right.1`
/// hold `params.fill[c]`.
///
/// # Errors
///
/// Returns an error if the image is not 3x32x32 or the rectangle does not fit
/// the image.
///
/// # Example
///
/// ```
/// use cifar_aug_image::{CifarImage, CIFAR_IMAGE_SIZE};
/// use cifar_aug_imgproc::cutout::{cutout, CutoutParams};
///
/// let image = CifarImage::from_size_val(CIFAR_IMAGE_SIZE, 100).unwrap();
/// let params = CutoutParams {
///     width: 0,
///     height: 0,
///     fill: [1, 2, 3],
///     top_left: (3, 4),
///     bottom_right: (3, 4),
/// };
///
/// let erased = cutout(&image, &params).unwrap();
///
/// assert_eq!(erased.get([2, 3, 4]), Some(&3));
/// assert_eq!(erased.get([2, 3, 5]), Some(&100));
/// ```
pub fn cutout(src: &CifarImage, params: &CutoutParams) -> Result<CifarImage, AugmentError> {
    check_cifar_shape(src)?;

    let (tlx, tly) = params.top_left;
    let (brx, bry) = params.bottom_right;
    if tlx > brx || tly > bry || brx > LAST_INDEX || bry > LAST_INDEX {
        return Err(AugmentError::InvalidRandomDraw {
            name: "cutout_bottom_right",
            value: brx.max(bry) as f64,
            low: tlx.min(tly) as f64,
            high: LAST_INDEX as f64,
        });
    }

    let cols = src.cols();
    let plane = src.plane_len();

    let mut dst = src.clone();
    let dst_data = dst.as_slice_mut();

    for (c, &value) in params.fill.iter().enumerate() {
        for i in tlx..=brx {
            let start = c * plane + i * cols;
            dst_data[start + tly..=start + bry].fill(value);
        }
    }

    Ok(dst)
}

/// Erase a randomly placed block with a random color.
///
/// See [`CutoutParams::sample`] for the draws and [`cutout`] for the erasing.
///
/// # Errors
///
/// Returns an error if the image is not 3x32x32 or the random source misbehaves.
pub fn random_cutout(
    src: &CifarImage,
    rng: &mut impl RandomSource,
) -> Result<CifarImage, AugmentError> {
    check_cifar_shape(src)?;
    let params = CutoutParams::sample(rng)?;
    cutout(src, &params)
}

#[cfg(test)]
mod tests {
    use cifar_aug_image::{CifarImage, CIFAR_IMAGE_SIZE};

    use super::CutoutParams;
    use crate::error::AugmentError;
    use crate::random::{RngSource, ScriptedSource};

    #[test]
    fn test_cutout_fills_block() -> Result<(), AugmentError> {
        let image = CifarImage::from_size_val(CIFAR_IMAGE_SIZE, 100)?;

        // width, height, tlx, tly, brx, bry
        let mut rng = ScriptedSource::new()
            .ints(&[5, 5, 0, 0, 4, 4])
            .bytes(&[10, 20, 30]);
        let erased = super::random_cutout(&image, &mut rng)?;
        assert!(rng.is_exhausted());

        for c in 0..3 {
            let fill = [10, 20, 30][c];
            for i in 0..32 {
                for j in 0..32 {
                    let expected = if i <= 4 && j <= 4 { fill } else { 100 };
                    assert_eq!(erased.get([c, i, j]), Some(&expected));
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_cutout_extent_ignores_width() -> Result<(), AugmentError> {
        let data = (0..3 * 32 * 32).map(|i| (i % 7) as u8 + 1).collect();
        let image = CifarImage::new(CIFAR_IMAGE_SIZE, data)?;

        // a 2x2 draw whose bottom-right corner lands much further away
        let mut rng = ScriptedSource::new()
            .ints(&[2, 2, 10, 20, 31, 25])
            .bytes(&[0, 0, 0]);
        let params = CutoutParams::sample(&mut rng)?;
        assert_eq!(params.top_left, (10, 20));
        assert_eq!(params.bottom_right, (31, 25));

        let erased = super::cutout(&image, &params)?;
        for c in 0..3 {
            for i in 0..32 {
                for j in 0..32 {
                    let inside = (10..=31).contains(&i) && (20..=25).contains(&j);
                    let expected = if inside { 0 } else { *image.get([c, i, j]).unwrap_or(&0) };
                    assert_eq!(erased.get([c, i, j]), Some(&expected));
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_cutout_does_not_touch_input() -> Result<(), AugmentError> {
        let image = CifarImage::from_size_val(CIFAR_IMAGE_SIZE, 9)?;
        let mut rng = RngSource::seeded(1);
        let _ = super::random_cutout(&image, &mut rng)?;
        assert!(image.as_slice().iter().all(|&v| v == 9));
        Ok(())
    }

    #[test]
    fn test_cutout_rejects_top_left_out_of_range() -> Result<(), AugmentError> {
        let image = CifarImage::from_size_val(CIFAR_IMAGE_SIZE, 0)?;
        // width 16 bounds the top-left row to [0, 15]
        let mut rng = ScriptedSource::new().ints(&[16, 0, 16]).bytes(&[0, 0, 0]);
        assert!(matches!(
            super::random_cutout(&image, &mut rng),
            Err(AugmentError::InvalidRandomDraw {
                name: "cutout_top",
                ..
            })
        ));
        Ok(())
    }

    #[test]
    fn test_cutout_rejects_inverted_rectangle() -> Result<(), AugmentError> {
        let image = CifarImage::from_size_val(CIFAR_IMAGE_SIZE, 0)?;
        let params = CutoutParams {
            width: 0,
            height: 0,
            fill: [0; 3],
            top_left: (5, 5),
            bottom_right: (4, 5),
        };
        assert!(super::cutout(&image, &params).is_err());
        Ok(())
    }

    #[test]
    fn test_sampled_params_stay_in_range() -> Result<(), AugmentError> {
        let mut rng = RngSource::seeded(1234);
        for _ in 0..500 {
            let p = CutoutParams::sample(&mut rng)?;
            assert!(p.width <= 16 && p.height <= 16);
            assert!(p.top_left.0 <= 31 - p.width);
            assert!(p.top_left.1 <= 31 - p.height);
            assert!(p.top_left.0 <= p.bottom_right.0 && p.bottom_right.0 <= 31);
            assert!(p.top_left.1 <= p.bottom_right.1 && p.bottom_right.1 <= 31);
        }
        Ok(())
    }
}
