use pixkit_image::{clamp_coord, Image, ImageError};

use crate::parallel::{self, ExecutionStrategy};

/// Maximum number of channels accepted by [`shift_channel`].
pub const MAX_SHIFT_CHANNELS: usize = 3;

/// Copy an image sample by sample into a newly allocated image.
///
/// The returned image has the same size and channel count and owns its own
/// buffer; writing to either image never affects the other.
///
/// # Example
///
/// ```
/// use pixkit_image::{Image, ImageSize};
/// use pixkit_imgproc::channel::copy_image;
///
/// let mut image = Image::zeros(ImageSize { width: 2, height: 2 }, 3);
/// let copy = copy_image(&image);
///
/// image.set(0, 0, 0, 1.0);
///
/// assert_eq!(copy.get(0, 0, 0), 0.0);
/// ```
pub fn copy_image(src: &Image) -> Image {
    let mut dst = Image::zeros(src.size(), src.num_channels());
    for c in 0..src.num_channels() as isize {
        for y in 0..src.rows() as isize {
            for x in 0..src.cols() as isize {
                dst.set(x, y, c, src.get(x, y, c));
            }
        }
    }
    dst
}

/// Add `delta` to every pixel of one channel, in place.
///
/// The channel index goes through the same clamping as [`Image::get`], so an
/// out-of-range channel shifts the nearest valid one. Results are not clamped
/// and may leave `[0, 1]`; see [`clamp_to_unit_range`].
///
/// # Errors
///
/// If the image has more than [`MAX_SHIFT_CHANNELS`] channels, an error is
/// returned and the image is left untouched.
///
/// # Example
///
/// ```
/// use pixkit_image::{Image, ImageSize};
/// use pixkit_imgproc::channel::shift_channel;
///
/// let mut image = Image::from_size_val(ImageSize { width: 2, height: 1 }, 3, 0.5);
///
/// shift_channel(&mut image, 1, 0.25).unwrap();
///
/// assert_eq!(image.as_slice(), &[0.5, 0.5, 0.75, 0.75, 0.5, 0.5]);
/// ```
pub fn shift_channel(image: &mut Image, channel: isize, delta: f32) -> Result<(), ImageError> {
    shift_channel_with(image, channel, delta, ExecutionStrategy::Serial)
}

/// Add `delta` to every pixel of one channel with an explicit execution strategy.
///
/// # Errors
///
/// If the image has more than [`MAX_SHIFT_CHANNELS`] channels, an error is
/// returned and the image is left untouched.
pub fn shift_channel_with(
    image: &mut Image,
    channel: isize,
    delta: f32,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    if image.num_channels() > MAX_SHIFT_CHANNELS {
        log::warn!(
            "shift_channel: expected at most {MAX_SHIFT_CHANNELS} channels, got {}",
            image.num_channels()
        );
        return Err(ImageError::ChannelCountExceeded(
            MAX_SHIFT_CHANNELS,
            image.num_channels(),
        ));
    }
    // nothing to address in an image without samples
    if image.as_slice().is_empty() {
        return Ok(());
    }
    log::debug!(
        "shift_channel: {} channel {channel} by {delta} with {strategy:?}",
        image.size()
    );

    match strategy {
        ExecutionStrategy::Serial => {
            for y in 0..image.rows() as isize {
                for x in 0..image.cols() as isize {
                    let v = image.get(x, y, channel) + delta;
                    image.set(x, y, channel, v);
                }
            }
        }
        _ => {
            let cols = image.cols();
            let c = clamp_coord(image.num_channels(), channel);
            if let Some(plane) = image.plane_mut(c) {
                parallel::par_iter_samples(plane, cols, strategy, |v| *v += delta);
            }
        }
    }
    Ok(())
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

/// Clamp every sample of the image into `[0, 1]`, in place.
///
/// Samples below zero become `0`, samples above one become `1` and samples in
/// range are left untouched. NaN samples are left as they are.
///
/// # Example
///
/// ```
/// use pixkit_image::{Image, ImageSize};
/// use pixkit_imgproc::channel::clamp_to_unit_range;
///
/// let mut image = Image::new(
///     ImageSize { width: 3, height: 1 },
///     1,
///     vec![-0.5, 0.5, 1.5],
/// )
/// .unwrap();
///
/// clamp_to_unit_range(&mut image);
///
/// assert_eq!(image.as_slice(), &[0.0, 0.5, 1.0]);
/// ```
pub fn clamp_to_unit_range(image: &mut Image) {
    clamp_to_unit_range_with(image, ExecutionStrategy::Serial)
}

/// Clamp every sample of the image into `[0, 1]` with an explicit execution strategy.
pub fn clamp_to_unit_range_with(image: &mut Image, strategy: ExecutionStrategy) {
    log::debug!(
        "clamp_to_unit_range: {} x {} channels with {strategy:?}",
        image.size(),
        image.num_channels()
    );

    match strategy {
        ExecutionStrategy::Serial => {
            for c in 0..image.num_channels() as isize {
                for y in 0..image.rows() as isize {
                    for x in 0..image.cols() as isize {
                        let v = image.get(x, y, c);
                        if !(0.0..=1.0).contains(&v) {
                            image.set(x, y, c, clamp_unit(v));
                        }
                    }
                }
            }
        }
        _ => {
            let cols = image.cols();
            parallel::par_iter_samples(image.as_slice_mut(), cols, strategy, |v| {
                *v = clamp_unit(*v)
            });
        }
    }
}
