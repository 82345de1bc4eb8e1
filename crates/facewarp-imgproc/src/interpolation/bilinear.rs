use facewarp_image::Image;

/// Kernel for bilinear interpolation
///
/// The four neighbours are `(x1, y1)`, `(x2, y1)`, `(x1, y2)` and `(x2, y2)`
/// with `x1 = floor(u)`, `x2 = min(x1 + 1, cols - 1)` and likewise for the
/// rows, so the last row and column are clamped instead of read out of bounds.
/// Every channel is blended independently and rounded to the nearest integer.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
///
/// # Panics
///
/// The caller guarantees `0 <= floor(u) < cols` and `0 <= floor(v) < rows`.
pub fn bilinear_interpolation<const C: usize>(image: &Image<u8, C>, u: f32, v: f32) -> [u8; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let x1 = u.floor();
    let y1 = v.floor();

    let fx = u - x1;
    let fy = v - y1;

    let iu0 = (x1 as usize).min(cols - 1);
    let iv0 = (y1 as usize).min(rows - 1);
    let iu1 = (iu0 + 1).min(cols - 1);
    let iv1 = (iv0 + 1).min(rows - 1);

    let base00 = (iv0 * cols + iu0) * C;
    let base01 = (iv0 * cols + iu1) * C;
    let base10 = (iv1 * cols + iu0) * C;
    let base11 = (iv1 * cols + iu1) * C;

    let data = image.as_slice();

    let tl = &data[base00..base00 + C];
    let tr = &data[base01..base01 + C];
    let bl = &data[base10..base10 + C];
    let br = &data[base11..base11 + C];

    let mut pixel = [0u8; C];
    for k in 0..C {
        let top = tl[k] as f32 * (1.0 - fx) + tr[k] as f32 * fx;
        let bottom = bl[k] as f32 * (1.0 - fx) + br[k] as f32 * fx;
        pixel[k] = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
    }

    pixel
}

/// Sample an image at a continuous coordinate.
///
/// Checked variant of [`bilinear_interpolation`].
///
/// # Returns
///
/// `None` if the coordinate is not finite or lies outside
/// `[0, cols - 1] x [0, rows - 1]`.
///
/// # Example
///
/// ```
/// use facewarp_image::{Image, ImageSize};
/// use facewarp_imgproc::interpolation::sample_pixel;
///
/// let image = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![0, 100]).unwrap();
///
/// assert_eq!(sample_pixel(&image, 0.5, 0.0), Some([50]));
/// assert_eq!(sample_pixel(&image, 1.5, 0.0), None);
/// ```
pub fn sample_pixel<const C: usize>(image: &Image<u8, C>, u: f32, v: f32) -> Option<[u8; C]> {
    if image.cols() == 0 || image.rows() == 0 || !u.is_finite() || !v.is_finite() {
        return None;
    }

    let max_u = (image.cols() - 1) as f32;
    let max_v = (image.rows() - 1) as f32;
    if u < 0.0 || v < 0.0 || u > max_u || v > max_v {
        return None;
    }

    Some(bilinear_interpolation(image, u, v))
}

#[cfg(test)]
mod tests {
    use facewarp_image::{Image, ImageError, ImageSize};

    use super::{bilinear_interpolation, sample_pixel};

    #[test]
    fn bilinear_integer_coordinates() {
        let image = Image::<u8, 4>::from_size_fn([5, 4].into(), |x, y| {
            [(x * 40) as u8, (y * 60) as u8, (x * y) as u8, 255]
        });

        for y in 0..4 {
            for x in 0..5 {
                let px = bilinear_interpolation(&image, x as f32, y as f32);
                assert_eq!(Some(&px[..]), image.pixel(x, y));
            }
        }
    }

    #[test]
    fn bilinear_hard_edge_midpoint() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![255, 0, 0, 255, 0, 255, 0, 255],
        )?;

        // round(0.5 * 255 + 0.5 * 0) rounds half away from zero
        assert_eq!(bilinear_interpolation(&image, 0.5, 0.0), [128, 128, 0, 255]);

        Ok(())
    }

    #[test]
    fn bilinear_solid_color() {
        let image = Image::<u8, 4>::from_size_fn([4, 4].into(), |_, _| [10, 20, 30, 255]);

        for (u, v) in [(0.25, 0.75), (1.5, 2.5), (2.9, 0.1), (3.0, 3.0)] {
            assert_eq!(bilinear_interpolation(&image, u, v), [10, 20, 30, 255]);
        }
    }

    #[test]
    fn bilinear_four_neighbours() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 100, 200, 40],
        )?;

        // top = 25, bottom = 160, round(12.5 + 80.0)
        assert_eq!(bilinear_interpolation(&image, 0.25, 0.5), [93]);

        Ok(())
    }

    #[test]
    fn bilinear_clamps_last_column() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![0, 10, 90],
        )?;

        assert_eq!(bilinear_interpolation(&image, 2.0, 0.0), [90]);
        assert_eq!(bilinear_interpolation(&image, 1.5, 0.0), [50]);

        Ok(())
    }

    #[test]
    fn sample_pixel_bounds() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![0, 10, 20, 30, 40, 50],
        )?;

        assert_eq!(sample_pixel(&image, 2.0, 1.0), Some([50]));
        assert_eq!(sample_pixel(&image, -0.1, 0.0), None);
        assert_eq!(sample_pixel(&image, 0.0, 1.01), None);
        assert_eq!(sample_pixel(&image, f32::NAN, 0.0), None);

        let empty = Image::<u8, 1>::new([0, 0].into(), vec![])?;
        assert_eq!(sample_pixel(&empty, 0.0, 0.0), None);

        Ok(())
    }
}
