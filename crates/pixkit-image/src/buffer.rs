use crate::error::ImageError;

/// Flat storage for a planar image.
///
/// The samples are laid out channel-major and row-major within a channel:
///
/// ```text
/// index = c * (height * width) + y * width + x
/// ```
///
/// The buffer performs no coordinate validation of its own. Callers that hold
/// arbitrary coordinates should go through the bounded accessor on
/// [`crate::Image`] instead.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    data: Vec<f32>,
    width: usize,
    height: usize,
    channels: usize,
}

impl PixelBuffer {
    /// Allocate a buffer of `width * height * channels` samples set to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixkit_image::PixelBuffer;
    ///
    /// let buffer = PixelBuffer::zeros(4, 3, 2);
    ///
    /// assert_eq!(buffer.len(), 24);
    /// assert!(buffer.as_slice().iter().all(|&v| v == 0.0));
    /// ```
    pub fn zeros(width: usize, height: usize, channels: usize) -> Self {
        Self {
            data: vec![0.0; width * height * channels],
            width,
            height,
            channels,
        }
    }

    /// Wrap existing planar samples.
    ///
    /// # Errors
    ///
    /// If `data.len()` is not `width * height * channels`, an error is returned.
    pub fn from_vec(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<f32>,
    ) -> Result<Self, ImageError> {
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Compute the flat index of the sample at `(x, y, c)`.
    ///
    /// No bounds checking is performed; the result is only meaningful for
    /// in-range coordinates.
    #[inline]
    pub fn raw_index(&self, x: usize, y: usize, c: usize) -> usize {
        c * self.plane_len() + y * self.width + x
    }

    /// Read the sample stored at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn read(&self, index: usize) -> f32 {
        self.data[index]
    }

    /// Overwrite the sample stored at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn write(&mut self, index: usize, value: f32) {
        self.data[index] = value;
    }

    /// Width of the buffer in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the buffer in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of channel planes.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of samples in one channel plane.
    #[inline]
    pub fn plane_len(&self) -> usize {
        self.width * self.height
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The samples as a flat slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The samples as a flat mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the buffer and return its samples.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::PixelBuffer;
    use crate::error::ImageError;

    #[test]
    fn zeros() {
        let buffer = PixelBuffer::zeros(3, 2, 3);
        assert_eq!(buffer.len(), 18);
        assert_eq!(buffer.plane_len(), 6);
        assert!(buffer.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn raw_index_is_channel_major() {
        let buffer = PixelBuffer::zeros(4, 3, 2);
        assert_eq!(buffer.raw_index(0, 0, 0), 0);
        assert_eq!(buffer.raw_index(3, 0, 0), 3);
        assert_eq!(buffer.raw_index(0, 1, 0), 4);
        assert_eq!(buffer.raw_index(3, 2, 0), 11);
        assert_eq!(buffer.raw_index(0, 0, 1), 12);
        assert_eq!(buffer.raw_index(3, 2, 1), 23);
    }

    #[test]
    fn read_write() {
        let mut buffer = PixelBuffer::zeros(2, 2, 1);
        let index = buffer.raw_index(1, 1, 0);
        buffer.write(index, 0.25);
        assert_eq!(buffer.read(index), 0.25);
        assert_eq!(buffer.as_slice(), &[0.0, 0.0, 0.0, 0.25]);
    }

    #[test]
    fn from_vec_invalid_length() {
        let res = PixelBuffer::from_vec(2, 2, 3, vec![0.0; 11]);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(11, 12)));
    }

    #[test]
    fn empty() {
        let buffer = PixelBuffer::zeros(0, 5, 3);
        assert!(buffer.is_empty());
        assert_eq!(buffer.into_vec(), Vec::<f32>::new());
    }
}
