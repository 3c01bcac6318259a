use crate::{buffer::PixelBuffer, error::ImageError};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixkit_image::ImageSize;
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

/// A planar floating-point image.
///
/// Each image exclusively owns its [`PixelBuffer`]. The dimensions are fixed at
/// construction and no operation reallocates the samples in place. Channel
/// meaning (R/G/B, H/S/V, ...) is a convention of the caller.
///
/// Pixels are read and written through [`Image::get`] and [`Image::set`], which
/// clamp out-of-range coordinates to the nearest edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Image(PixelBuffer);

impl Image {
    /// Create a new image from planar pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `channels` - The number of channel planes.
    /// * `data` - The samples, laid out as `c * (height * width) + y * width + x`.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixkit_image::{Image, ImageSize};
    ///
    /// let image = Image::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     3,
    ///     vec![0f32; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, channels: usize, data: Vec<f32>) -> Result<Self, ImageError> {
        Ok(Self(PixelBuffer::from_vec(
            size.width,
            size.height,
            channels,
            data,
        )?))
    }

    /// Create a new image with every sample set to `val`.
    pub fn from_size_val(size: ImageSize, channels: usize, val: f32) -> Self {
        let mut buffer = PixelBuffer::zeros(size.width, size.height, channels);
        buffer.as_mut_slice().fill(val);
        Self(buffer)
    }

    /// Create a new zero-initialized image.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixkit_image::{Image, ImageSize};
    ///
    /// let image = Image::zeros(ImageSize { width: 4, height: 2 }, 1);
    ///
    /// assert_eq!(image.as_slice(), &[0.0; 8]);
    /// ```
    pub fn zeros(size: ImageSize, channels: usize) -> Self {
        Self(PixelBuffer::zeros(size.width, size.height, channels))
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.0.width(),
            height: self.0.height(),
        }
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.0.width()
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.0.height()
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        self.0.channels()
    }

    /// Whether `(x, y, c)` addresses a sample without clamping.
    pub fn contains(&self, x: isize, y: isize, c: isize) -> bool {
        let inside = |dim: usize, coord: isize| coord >= 0 && (coord as usize) < dim;
        inside(self.width(), x) && inside(self.height(), y) && inside(self.num_channels(), c)
    }

    /// The underlying pixel buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.0
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.0
    }

    /// Get the pixel data of the image as a flat slice.
    pub fn as_slice(&self) -> &[f32] {
        self.0.as_slice()
    }

    /// Get the pixel data of the image as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [f32] {
        self.0.as_mut_slice()
    }

    /// Get one channel plane, or `None` if `c` is not a valid channel.
    pub fn plane(&self, c: usize) -> Option<&[f32]> {
        if c >= self.num_channels() {
            return None;
        }
        let len = self.0.plane_len();
        self.as_slice().get(c * len..(c + 1) * len)
    }

    /// Get one channel plane mutably, or `None` if `c` is not a valid channel.
    pub fn plane_mut(&mut self, c: usize) -> Option<&mut [f32]> {
        if c >= self.num_channels() {
            return None;
        }
        let len = self.0.plane_len();
        self.as_slice_mut().get_mut(c * len..(c + 1) * len)
    }

    /// Borrow the three planes of a 3-channel image.
    ///
    /// # Errors
    ///
    /// If the image does not have exactly 3 channels, an error is returned.
    pub fn planes3(&self) -> Result<[&[f32]; 3], ImageError> {
        if self.num_channels() != 3 {
            return Err(ImageError::InvalidChannelCount(3, self.num_channels()));
        }
        let len = self.0.plane_len();
        let (first, rest) = self.as_slice().split_at(len);
        let (second, third) = rest.split_at(len);
        Ok([first, second, third])
    }

    /// Split a 3-channel image into its three disjoint mutable planes.
    ///
    /// # Errors
    ///
    /// If the image does not have exactly 3 channels, an error is returned.
    pub fn planes3_mut(&mut self) -> Result<[&mut [f32]; 3], ImageError> {
        if self.num_channels() != 3 {
            return Err(ImageError::InvalidChannelCount(3, self.num_channels()));
        }
        let len = self.0.plane_len();
        let (first, rest) = self.as_slice_mut().split_at_mut(len);
        let (second, third) = rest.split_at_mut(len);
        Ok([first, second, third])
    }

    /// Consume the image and return its samples.
    pub fn into_vec(self) -> Vec<f32> {
        self.0.into_vec()
    }
}
