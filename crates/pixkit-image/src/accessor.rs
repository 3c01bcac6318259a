//! Bounds-clamped pixel access.
//!
//! Reads and writes never fail on out-of-range coordinates. Each coordinate is
//! remapped independently to the nearest valid one, so `x = -1` addresses
//! column 0 and `x = width` addresses column `width - 1`. Neighborhood code
//! (filters, gradients) can therefore read past the border without special
//! casing the edges; the border behaves like a replicate padding.

use crate::image::Image;

/// Clamp a coordinate into `[0, dim)`.
///
/// The upper bound is tested first and the lower bound second, so for
/// `dim == 0` the result is `0`, which is not a valid index into an empty
/// dimension.
///
/// # Examples
///
/// ```
/// use pixkit_image::clamp_coord;
///
/// assert_eq!(clamp_coord(4, 2), 2);
/// assert_eq!(clamp_coord(4, 4), 3);
/// assert_eq!(clamp_coord(4, -7), 0);
/// assert_eq!(clamp_coord(0, 5), 0);
/// ```
#[inline]
pub fn clamp_coord(dim: usize, coord: isize) -> usize {
    let dim = dim as isize;
    let mut coord = coord;
    if coord >= dim {
        coord = dim - 1;
    }
    if coord < 0 {
        coord = 0;
    }
    coord as usize
}

impl Image {
    #[inline]
    fn clamped_index(&self, x: isize, y: isize, c: isize) -> usize {
        let x = clamp_coord(self.width(), x);
        let y = clamp_coord(self.height(), y);
        let c = clamp_coord(self.num_channels(), c);
        self.buffer().raw_index(x, y, c)
    }

    /// Read the sample at `(x, y, c)`, clamping each coordinate to the image.
    ///
    /// # Panics
    ///
    /// Panics if the image holds no samples (a zero width, height or channel
    /// count), since there is no valid coordinate to clamp to.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixkit_image::{Image, ImageSize};
    ///
    /// let image = Image::new(
    ///     ImageSize { width: 2, height: 1 },
    ///     1,
    ///     vec![0.25, 0.75],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.get(1, 0, 0), 0.75);
    /// assert_eq!(image.get(5, 0, 0), 0.75);
    /// assert_eq!(image.get(-3, 9, 2), 0.25);
    /// ```
    #[inline]
    pub fn get(&self, x: isize, y: isize, c: isize) -> f32 {
        self.buffer().read(self.clamped_index(x, y, c))
    }

    /// Write `value` at `(x, y, c)`, clamping each coordinate to the image.
    ///
    /// # Panics
    ///
    /// Panics if the image holds no samples.
    #[inline]
    pub fn set(&mut self, x: isize, y: isize, c: isize, value: f32) {
        let index = self.clamped_index(x, y, c);
        self.buffer_mut().write(index, value);
    }
}
