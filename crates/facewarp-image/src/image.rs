use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use facewarp_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// Represents an image with interleaved pixel data.
///
/// The data is stored row-major with shape (H, W, C), where H is the height of
/// the image, W the width and C the number of channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

/// An 8-bit RGBA image, the buffer type consumed and produced by the warps.
pub type PixelBuffer = Image<u8, 4>;

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use facewarp_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 4],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 4);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The default value of the pixel data.
    ///
    /// # Examples
    ///
    /// ```
    /// use facewarp_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Create a new image where every pixel is produced by a function of its coordinates.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `f` - Function returning the pixel at `(x, y)`.
    pub fn from_size_fn(size: ImageSize, f: impl Fn(usize, usize) -> [T; CHANNELS]) -> Self
    where
        T: Copy,
    {
        let mut data = Vec::with_capacity(size.width * size.height * CHANNELS);
        for y in 0..size.height {
            for x in 0..size.width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { size, data }
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable flat slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get all the channels of the pixel at `(x, y)`.
    ///
    /// Returns `None` if the coordinates are outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[T]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let base = (y * self.width() + x) * CHANNELS;
        self.data.get(base..base + CHANNELS)
    }

    /// Get a single channel value of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// If the pixel or the channel index is out of bounds, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<T, ImageError>
    where
        T: Copy,
    {
        if ch >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, CHANNELS));
        }

        match self.pixel(x, y) {
            Some(px) => Ok(px[ch]),
            None => Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize, PixelBuffer};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(ImageSize::from([10, 20]), image_size);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = PixelBuffer::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 4],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 4);

        Ok(())
    }

    #[test]
    fn image_wrong_length() {
        let res = PixelBuffer::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 15],
        );
        assert_eq!(res, Err(ImageError::InvalidChannelShape(15, 16)));
    }

    #[test]
    fn image_pixel_access() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::from_size_fn([3, 2].into(), |x, y| {
            [x as u8, y as u8, (x + y) as u8, 255]
        });

        assert_eq!(image.pixel(2, 1), Some(&[2u8, 1, 3, 255][..]));
        assert_eq!(image.pixel(3, 0), None);
        assert_eq!(image.get_pixel(1, 1, 2)?, 2);
        assert_eq!(
            image.get_pixel(0, 2, 0),
            Err(ImageError::PixelIndexOutOfBounds(0, 2, 3, 2))
        );
        assert_eq!(
            image.get_pixel(0, 0, 4),
            Err(ImageError::ChannelIndexOutOfBounds(4, 4))
        );

        Ok(())
    }

    #[test]
    fn image_from_size_val() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val([4, 3].into(), 1.5)?;
        assert_eq!(image.as_slice().len(), 12);
        assert!(image.as_slice().iter().all(|&v| v == 1.5));

        Ok(())
    }
}
