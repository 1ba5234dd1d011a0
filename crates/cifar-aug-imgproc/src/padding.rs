use cifar_aug_image::{Image, ImageError, ImageSize};

/// Represents 2D padding with top, bottom, left, and right values (in pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding2D {
    /// Amount of padding to add on the top side.
    pub top: usize,
    /// Amount of padding to add on the bottom side.
    pub bottom: usize,
    /// Amount of padding to add on the left side.
    pub left: usize,
    /// Amount of padding to add on the right side.
    pub right: usize,
}

impl Padding2D {
    /// The same amount of padding on every side.
    pub fn uniform(pad: usize) -> Self {
        Self {
            top: pad,
            bottom: pad,
            left: pad,
            right: pad,
        }
    }

    /// The size of an image of `size` once this padding is applied.
    ///
    /// # Example
    /// ```rust
    /// use cifar_aug_image::ImageSize;
    /// use cifar_aug_imgproc::padding::Padding2D;
    ///
    /// let padding = Padding2D { top: 1, bottom: 1, left: 2, right: 2 };
    /// let new_size = padding.padded_size(ImageSize { width: 4, height: 4 });
    ///
    /// assert_eq!(new_size, ImageSize { width: 8, height: 6 });
    /// ```
    pub fn padded_size(&self, size: ImageSize) -> ImageSize {
        ImageSize {
            width: size.width + self.left + self.right,
            height: size.height + self.top + self.bottom,
        }
    }
}

/// Pads every channel plane of an image with a constant value per channel.
///
/// # Arguments
///
/// * `src` - The source image to pad.
/// * `dst` - The destination image; its size must be the padded size of `src`.
/// * `padding` - The amount of padding (in pixels) for all four sides.
/// * `constant_value` - The border value, one per channel.
///
/// # Errors
///
/// Returns an error if the size of `dst` does not match the padded size of `src`.
///
/// # Example
///
/// ```rust
/// use cifar_aug_image::{Image, ImageSize};
/// use cifar_aug_imgproc::padding::{pad_constant, Padding2D};
///
/// let src = Image::<u8, 1>::new(ImageSize { width: 1, height: 1 }, vec![9]).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(ImageSize { width: 3, height: 3 }, 1).unwrap();
///
/// pad_constant(&src, &mut dst, Padding2D::uniform(1), [0]).unwrap();
///
/// assert_eq!(dst.as_slice(), &[0, 0, 0, 0, 9, 0, 0, 0, 0]);
/// ```
pub fn pad_constant<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    padding: Padding2D,
    constant_value: [T; C],
) -> Result<(), ImageError>
where
    T: Copy,
{
    let expected = padding.padded_size(src.size());
    if dst.size() != expected {
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            expected.width,
            expected.height,
        ));
    }

    let src_cols = src.cols();
    let dst_cols = dst.cols();
    let src_plane_len = src.plane_len();
    let dst_plane_len = dst.plane_len();
    let row_offset = padding.top * dst_cols + padding.left;

    let new_data = dst.as_slice_mut();
    for (c, (src_plane, dst_plane)) in src
        .as_slice()
        .chunks_exact(src_plane_len)
        .zip(new_data.chunks_exact_mut(dst_plane_len))
        .enumerate()
    {
        dst_plane.fill(constant_value[c]);

        // copy the source plane as the center of the padded plane
        for (src_row, dst_row) in src_plane
            .chunks_exact(src_cols)
            .zip(dst_plane[row_offset..].chunks_mut(dst_cols))
        {
            dst_row[..src_cols].copy_from_slice(src_row);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_constant_per_channel() -> Result<(), ImageError> {
        let src = Image::<u8, 2>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![1, 2, 3, 4],
        )?;
        let padding = Padding2D {
            top: 1,
            bottom: 0,
            left: 0,
            right: 1,
        };
        let mut dst = Image::<u8, 2>::from_size_val(padding.padded_size(src.size()), 0)?;

        pad_constant(&src, &mut dst, padding, [7, 8])?;

        #[rustfmt::skip]
        let expected = vec![
            7, 7, 7,
            1, 2, 7,
            8, 8, 8,
            3, 4, 8,
        ];
        assert_eq!(dst.as_slice(), &expected);
        Ok(())
    }

    #[test]
    fn test_pad_constant_invalid_size() -> Result<(), ImageError> {
        let src = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            1,
        )?;
        let mut dst = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 8,
                height: 8,
            },
            0,
        )?;

        let res = pad_constant(&src, &mut dst, Padding2D::uniform(1), [0; 3]);
        assert_eq!(res, Err(ImageError::InvalidImageSize(8, 8, 6, 6)));
        Ok(())
    }
}
