use rayon::prelude::*;

use cifar_aug_image::Image;

// NOTE: the images are planar, so a "row" here is one row of one channel plane
// and every channel contributes `rows()` chunks of `cols()` elements.

/// Apply a function to each row of the image in parallel.
pub fn par_iter_rows<T1, T2, const C: usize>(
    src: &Image<T1, C>,
    dst: &mut Image<T2, C>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(cols))
        .for_each(|(src_row, dst_row)| f(src_row, dst_row));
}

/// Apply a function to each pixel value of the image in parallel.
pub fn par_iter_rows_val<T1, T2, const C: usize>(
    src: &Image<T1, C>,
    dst: &mut Image<T2, C>,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    par_iter_rows(src, dst, |src_row, dst_row| {
        src_row
            .iter()
            .zip(dst_row.iter_mut())
            .for_each(|(src_val, dst_val)| f(src_val, dst_val));
    });
}

/// Apply a function in place to each row of the image in parallel.
pub fn par_rows_mut<T, const C: usize>(
    image: &mut Image<T, C>,
    f: impl Fn(&mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = image.cols();
    image.as_slice_mut().par_chunks_exact_mut(cols).for_each(f);
}
