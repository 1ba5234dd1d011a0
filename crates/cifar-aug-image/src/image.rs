use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use cifar_aug_image::ImageSize;
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

/// Number of color planes of a CIFAR-10 image.
pub const CIFAR_CHANNELS: usize = 3;

/// Spatial size of a CIFAR-10 image.
pub const CIFAR_IMAGE_SIZE: ImageSize = ImageSize {
    width: 32,
    height: 32,
};

/// A CIFAR-10 image: three planes of 32x32 bytes.
pub type CifarImage = Image<u8, CIFAR_CHANNELS>;

/// Represents an image with pixel data.
///
/// The pixels are stored planar, i.e. with shape (C, H, W): all the rows of the
/// first channel, then all the rows of the second channel, and so on. This is
/// the layout of the CIFAR-10 archives.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    data: Vec<T>,
    size: ImageSize,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from planar pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image in (C, H, W) order.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifar_aug_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { data, size })
    }

    /// Create a new image with the given size and a constant pixel value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifar_aug_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.shape(), [3, 20, 10]);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Create a new image from interleaved (H, W, C) pixel data.
    ///
    /// This is the layout produced by most image decoders.
    pub fn from_interleaved(size: ImageSize, data: &[T]) -> Result<Self, ImageError>
    where
        T: Copy,
    {
        let plane = size.width * size.height;
        if data.len() != plane * CHANNELS {
            return Err(ImageError::InvalidChannelShape(data.len(), plane * CHANNELS));
        }

        let mut planar = Vec::with_capacity(data.len());
        for c in 0..CHANNELS {
            planar.extend(data.iter().skip(c).step_by(CHANNELS).copied());
        }

        Image::new(size, planar)
    }

    /// Convert the planar pixel data into interleaved (H, W, C) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifar_aug_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize { width: 2, height: 1 },
    ///     vec![1, 2, 10, 20, 100, 200],
    /// ).unwrap();
    ///
    /// assert_eq!(image.to_interleaved(), vec![1, 10, 100, 2, 20, 200]);
    /// ```
    pub fn to_interleaved(&self) -> Vec<T>
    where
        T: Copy,
    {
        let plane = self.plane_len();
        (0..plane)
            .flat_map(|i| (0..CHANNELS).map(move |c| self.data[c * plane + i]))
            .collect()
    }

    /// Cast the pixel data of the image to a different type.
    ///
    /// # Errors
    ///
    /// If a pixel value cannot be represented in the target type, an error is returned.
    pub fn cast<U>(&self) -> Result<Image<U, CHANNELS>, ImageError>
    where
        U: num_traits::NumCast,
        T: num_traits::NumCast + Copy,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, casted_data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the shape of the image as (channels, rows, cols).
    pub fn shape(&self) -> [usize; 3] {
        [CHANNELS, self.size.height, self.size.width]
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

    /// Number of pixels in a single channel plane.
    pub fn plane_len(&self) -> usize {
        self.size.width * self.size.height
    }

    /// Get the raw planar pixel data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the raw planar pixel data mutably.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its planar pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a single channel plane as a row-major slice.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn plane(&self, channel: usize) -> Result<&[T], ImageError> {
        if channel >= CHANNELS {
            return Err(ImageError::PixelIndexOutOfBounds(
                channel,
                0,
                0,
                self.shape(),
            ));
        }
        let plane = self.plane_len();
        Ok(&self.data[channel * plane..(channel + 1) * plane])
    }

    /// Get the value at `[channel, row, col]`, or `None` if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifar_aug_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 2>::new(
    ///     ImageSize { width: 2, height: 1 },
    ///     vec![1, 2, 3, 4],
    /// ).unwrap();
    ///
    /// assert_eq!(image.get([1, 0, 1]), Some(&4));
    /// assert_eq!(image.get([2, 0, 0]), None);
    /// ```
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let offset = self.offset(index)?;
        self.data.get(offset)
    }

    /// Set the value at `[channel, row, col]`.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds, an error is returned.
    pub fn set(&mut self, index: [usize; 3], val: T) -> Result<(), ImageError> {
        let [c, r, col] = index;
        let offset = self
            .offset(index)
            .ok_or(ImageError::PixelIndexOutOfBounds(c, r, col, self.shape()))?;
        self.data[offset] = val;
        Ok(())
    }

    fn offset(&self, [c, r, col]: [usize; 3]) -> Option<usize> {
        if c >= CHANNELS || r >= self.rows() || col >= self.cols() {
            return None;
        }
        Some(c * self.plane_len() + r * self.cols() + col)
    }
}
