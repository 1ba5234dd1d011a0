use cifar_aug_image::{Image, ImageError};

use crate::parallel;

/// Flip the input image horizontally.
///
/// Column `j` of every row of every channel is swapped with column `cols - 1 - j`.
///
/// # Arguments
///
/// * `src` - The input image with shape (C, H, W).
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use cifar_aug_image::{Image, ImageSize};
/// use cifar_aug_imgproc::flip::horizontal_flip;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0u8; 2 * 3 * 3],
/// )
/// .unwrap();
///
/// let flipped: Image<u8, 3> = horizontal_flip(&image).unwrap();
///
/// assert_eq!(flipped.size().width, 2);
/// assert_eq!(flipped.size().height, 3);
/// ```
pub fn horizontal_flip<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Clone + Send + Sync,
{
    let mut dst = src.clone();
    horizontal_flip_inplace(&mut dst);
    Ok(dst)
}

/// Flip an image horizontally in place by swapping column pairs.
pub fn horizontal_flip_inplace<T, const C: usize>(image: &mut Image<T, C>)
where
    T: Send + Sync,
{
    if image.cols() == 0 {
        return;
    }

    parallel::par_rows_mut(image, |row| {
        let mut i = 0;
        let mut j = row.len() - 1;
        while i < j {
            row.swap(i, j);
            i += 1;
            j -= 1;
        }
    });
}

#[cfg(test)]
mod tests {
    use cifar_aug_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_hflip() -> Result<(), ImageError> {
        let image = Image::<_, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0u8, 1, 2, 3, 4, 5],
        )?;
        let data_expected = vec![1u8, 0, 3, 2, 5, 4];
        let flipped = super::horizontal_flip(&image)?;
        assert_eq!(flipped.as_slice(), &data_expected);
        Ok(())
    }

    #[test]
    fn test_hflip_planes() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<_, 2>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![
                0u8, 1, 2,
                10, 11, 12,
            ],
        )?;
        let flipped = super::horizontal_flip(&image)?;
        assert_eq!(flipped.as_slice(), &[2, 1, 0, 12, 11, 10]);

        // flipping twice gives the input back
        assert_eq!(super::horizontal_flip(&flipped)?, image);
        Ok(())
    }
}
