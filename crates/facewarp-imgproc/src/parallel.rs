use rayon::prelude::*;

use facewarp_image::Image;

/// Apply a function to every pixel of `dst` in parallel, row by row.
///
/// The closure receives the pixel column, the pixel row and the mutable
/// channels of that pixel. Rows are disjoint slices of the output, so the
/// closure only needs shared access to whatever it reads.
pub fn par_iter_rows_indexed<T, const C: usize>(
    dst: &mut Image<T, C>,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) where
    T: Send,
{
    let cols = dst.cols();
    if cols == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(y, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| f(x, y, dst_pixel));
        });
}
