use crate::parallel::{self, ExecutionStrategy};
use pixkit_image::{Image, ImageError};

/// Define the RGB weights for the grayscale conversion.
const RW: f64 = 0.299;
const GW: f64 = 0.587;
const BW: f64 = 0.114;

#[inline]
fn luma(r: f32, g: f32, b: f32) -> f32 {
    (RW * r as f64 + GW * g as f64 + BW * b as f64) as f32
}

/// Convert an RGB image to grayscale using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// The weights are applied to the samples as they are (no gamma decoding).
///
/// # Arguments
///
/// * `src` - The input RGB image.
///
/// # Returns
///
/// A new single channel image with the size of `src`.
///
/// # Errors
///
/// If the input image does not have 3 channels, an error is returned.
///
/// # Example
///
/// ```
/// use pixkit_image::{Image, ImageSize};
/// use pixkit_imgproc::color::to_grayscale;
///
/// let image = Image::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     3,
///     0.0,
/// );
///
/// let gray = to_grayscale(&image).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.size().width, 4);
/// assert_eq!(gray.size().height, 5);
/// ```
pub fn to_grayscale(src: &Image) -> Result<Image, ImageError> {
    to_grayscale_with(src, ExecutionStrategy::Serial)
}

/// Convert an RGB image to grayscale with an explicit execution strategy.
///
/// # Errors
///
/// If the input image does not have 3 channels, an error is returned.
pub fn to_grayscale_with(src: &Image, strategy: ExecutionStrategy) -> Result<Image, ImageError> {
    if src.num_channels() != 3 {
        log::warn!(
            "to_grayscale: expected a 3 channel image, got {} channels",
            src.num_channels()
        );
        return Err(ImageError::InvalidChannelCount(3, src.num_channels()));
    }
    log::debug!("to_grayscale: {} with {:?}", src.size(), strategy);

    let mut gray = Image::zeros(src.size(), 1);

    match strategy {
        ExecutionStrategy::Serial => {
            for y in 0..src.rows() as isize {
                for x in 0..src.cols() as isize {
                    let r = src.get(x, y, 0);
                    let g = src.get(x, y, 1);
                    let b = src.get(x, y, 2);
                    gray.set(x, y, 0, luma(r, g, b));
                }
            }
        }
        _ => {
            let cols = src.cols();
            parallel::par_iter_pixels3_to1(
                src.planes3()?,
                gray.as_slice_mut(),
                cols,
                strategy,
                luma,
            );
        }
    }

    Ok(gray)
}
