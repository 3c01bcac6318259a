use crate::parallel::{self, ExecutionStrategy};
use pixkit_image::{Image, ImageError};

/// How the hue of an achromatic pixel (`r == g == b`) is reported.
///
/// The hue of such a pixel is `0 / 0` in the conversion formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AchromaticHue {
    /// Keep the IEEE-754 result of the division (NaN for finite inputs).
    #[default]
    Propagate,
    /// Report a hue of zero whenever the chroma is zero.
    Zero,
}

/// Options for the HSV conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HsvOptions {
    /// How the pixels are visited.
    pub strategy: ExecutionStrategy,
    /// Hue reported for achromatic pixels by [`rgb_to_hsv_with`].
    pub achromatic_hue: AchromaticHue,
}

/// Maximum of three values; ties resolve toward the later operand.
///
/// The comparisons are strict, so for equal values (such as `0.0` and `-0.0`)
/// the operand compared last is returned, and a NaN operand never wins a
/// comparison.
#[inline]
pub fn three_way_max(a: f32, b: f32, c: f32) -> f32 {
    if a > b {
        if a > c {
            a
        } else {
            c
        }
    } else if b > c {
        b
    } else {
        c
    }
}

/// Minimum of three values, with the same tie resolution as [`three_way_max`].
#[inline]
pub fn three_way_min(a: f32, b: f32, c: f32) -> f32 {
    if a < b {
        if a < c {
            a
        } else {
            c
        }
    } else if b < c {
        b
    } else {
        c
    }
}

/// Convert one RGB pixel to `[hue, saturation, value]`.
///
/// Hue is in `[0, 1)`. Saturation is forced to zero only when `r + b + g == 0`.
/// For achromatic pixels the hue is NaN; see [`AchromaticHue`].
///
/// # Example
///
/// ```
/// use pixkit_imgproc::color::hsv_from_rgb_pixel;
///
/// assert_eq!(hsv_from_rgb_pixel(1.0, 0.0, 0.0), [0.0, 1.0, 1.0]);
/// assert!(hsv_from_rgb_pixel(0.5, 0.5, 0.5)[0].is_nan());
/// ```
#[inline]
pub fn hsv_from_rgb_pixel(r: f32, g: f32, b: f32) -> [f32; 3] {
    let max = three_way_max(r, g, b);
    let min = three_way_min(r, g, b);

    let value = max;
    let chroma = value - min;

    let saturation = if r + b + g != 0.0 { chroma / value } else { 0.0 };

    let h0 = if value == r {
        (g - b) / chroma
    } else if value == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    // wrap negative hues into [0, 1)
    let hue = if h0 < 0.0 { h0 / 6.0 + 1.0 } else { h0 / 6.0 };

    [hue, saturation, value]
}

#[inline]
fn hsv_from_rgb_pixel_with(r: f32, g: f32, b: f32, achromatic_hue: AchromaticHue) -> [f32; 3] {
    let [hue, saturation, value] = hsv_from_rgb_pixel(r, g, b);
    match achromatic_hue {
        AchromaticHue::Zero if three_way_max(r, g, b) == three_way_min(r, g, b) => {
            [0.0, saturation, value]
        }
        _ => [hue, saturation, value],
    }
}

/// Convert one HSV pixel to `[r, g, b]`.
///
/// The hue is split into sextants `h0 = hue * 6`. Sextant boundaries belong to
/// two intervals; the first interval listed wins:
/// `[0, 1]`, `[1, 2]`, `[2, 3]`, `[3, 4]`, `[4, 5]`, then everything else.
/// A zero saturation short-circuits to `r = g = b = value`.
///
/// # Example
///
/// ```
/// use pixkit_imgproc::color::rgb_from_hsv_pixel;
///
/// assert_eq!(rgb_from_hsv_pixel(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
/// assert_eq!(rgb_from_hsv_pixel(f32::NAN, 0.0, 0.25), [0.25, 0.25, 0.25]);
/// ```
#[inline]
pub fn rgb_from_hsv_pixel(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    if saturation == 0.0 {
        return [value, value, value];
    }

    let h0 = hue * 6.0;
    let chroma = saturation * value;
    let m = value - chroma;

    if (0.0..=1.0).contains(&h0) {
        [value, h0 * chroma + m, m]
    } else if (1.0..=2.0).contains(&h0) {
        [-((h0 - 2.0) * chroma - m), value, m]
    } else if (2.0..=3.0).contains(&h0) {
        [m, value, (h0 - 2.0) * chroma + m]
    } else if (3.0..=4.0).contains(&h0) {
        [m, -((h0 - 4.0) * chroma - m), value]
    } else if (4.0..=5.0).contains(&h0) {
        [(h0 - 4.0) * chroma + m, m, value]
    } else {
        [value, m, -((h0 - 6.0) * chroma - m)]
    }
}

fn check_three_channels(image: &Image, op: &str) -> Result<(), ImageError> {
    if image.num_channels() != 3 {
        log::warn!(
            "{op}: expected a 3 channel image, got {} channels",
            image.num_channels()
        );
        return Err(ImageError::InvalidChannelCount(3, image.num_channels()));
    }
    Ok(())
}

// visit every pixel of a 3-channel image, replacing its samples with `f(samples)`
fn map_pixels3(
    image: &mut Image,
    strategy: ExecutionStrategy,
    f: impl Fn(f32, f32, f32) -> [f32; 3] + Send + Sync,
) -> Result<(), ImageError> {
    match strategy {
        ExecutionStrategy::Serial => {
            let (cols, rows) = (image.cols() as isize, image.rows() as isize);
            for y in 0..rows {
                for x in 0..cols {
                    let [c0, c1, c2] =
                        f(image.get(x, y, 0), image.get(x, y, 1), image.get(x, y, 2));
                    image.set(x, y, 2, c2);
                    image.set(x, y, 1, c1);
                    image.set(x, y, 0, c0);
                }
            }
        }
        _ => {
            let cols = image.cols();
            let planes = image.planes3_mut()?;
            parallel::par_iter_pixels3(planes, cols, strategy, |a, b, c| {
                [*a, *b, *c] = f(*a, *b, *c);
            });
        }
    }
    Ok(())
}

/// Convert an RGB image to HSV in place.
///
/// The input image is assumed to have 3 channels in the order R, G, B, with
/// samples conventionally in `[0, 1]`. After the call channel 0 holds the hue
/// in `[0, 1)`, channel 1 the saturation and channel 2 the value.
///
/// Achromatic pixels get a NaN hue; use [`rgb_to_hsv_with`] with
/// [`AchromaticHue::Zero`] to get zero instead.
///
/// # Errors
///
/// If the image does not have 3 channels, an error is returned and the image is
/// left untouched.
///
/// # Example
///
/// ```
/// use pixkit_image::{Image, ImageSize};
/// use pixkit_imgproc::color::rgb_to_hsv;
///
/// let mut image = Image::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     3,
///     vec![1.0, 0.0, 0.0],
/// )
/// .unwrap();
///
/// rgb_to_hsv(&mut image).unwrap();
///
/// assert_eq!(image.as_slice(), &[0.0, 1.0, 1.0]);
/// ```
pub fn rgb_to_hsv(image: &mut Image) -> Result<(), ImageError> {
    rgb_to_hsv_with(image, &HsvOptions::default())
}

/// Convert an RGB image to HSV in place with explicit options.
///
/// # Errors
///
/// If the image does not have 3 channels, an error is returned and the image is
/// left untouched.
pub fn rgb_to_hsv_with(image: &mut Image, options: &HsvOptions) -> Result<(), ImageError> {
    check_three_channels(image, "rgb_to_hsv")?;
    log::debug!("rgb_to_hsv: {} with {:?}", image.size(), options);

    let achromatic_hue = options.achromatic_hue;
    map_pixels3(image, options.strategy, |r, g, b| {
        hsv_from_rgb_pixel_with(r, g, b, achromatic_hue)
    })
}

/// Convert an HSV image to RGB in place.
///
/// This is the inverse of [`rgb_to_hsv`]: for chromatic pixels with samples
/// in `[0, 1]` the round trip reproduces the input within float tolerance.
///
/// # Errors
///
/// If the image does not have 3 channels, an error is returned and the image is
/// left untouched.
pub fn hsv_to_rgb(image: &mut Image) -> Result<(), ImageError> {
    hsv_to_rgb_with(image, &HsvOptions::default())
}

/// Convert an HSV image to RGB in place with explicit options.
///
/// Only [`HsvOptions::strategy`] is used by this direction.
///
/// # Errors
///
/// If the image does not have 3 channels, an error is returned and the image is
/// left untouched.
pub fn hsv_to_rgb_with(image: &mut Image, options: &HsvOptions) -> Result<(), ImageError> {
    check_three_channels(image, "hsv_to_rgb")?;
    log::debug!("hsv_to_rgb: {} with {:?}", image.size(), options.strategy);

    map_pixels3(image, options.strategy, rgb_from_hsv_pixel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pixkit_image::ImageSize;

    const STRATEGIES: [ExecutionStrategy; 3] = [
        ExecutionStrategy::Serial,
        ExecutionStrategy::ParallelElements,
        ExecutionStrategy::ParallelRows,
    ];

    fn rgb_image(size: ImageSize, pixel: [f32; 3]) -> Image {
        let mut image = Image::zeros(size, 3);
        let plane_len = size.width * size.height;
        for (c, plane) in image.as_slice_mut().chunks_mut(plane_len).enumerate() {
            plane.fill(pixel[c]);
        }
        image
    }

    #[test]
    fn three_way_ties() {
        assert_eq!(three_way_max(1.0, 3.0, 2.0), 3.0);
        assert_eq!(three_way_min(1.0, 3.0, 2.0), 1.0);
        assert!(three_way_max(0.0, -0.0, -0.0).is_sign_negative());
        assert!(three_way_max(-0.0, 0.0, 0.0).is_sign_positive());
        assert!(three_way_min(0.0, -0.0, -0.0).is_sign_negative());
        assert!(three_way_min(-0.0, -0.0, 0.0).is_sign_positive());
    }

    #[test]
    fn signed_zero_ties_pick_the_last_channel() -> Result<(), ImageError> {
        let mut image = rgb_image([2, 1].into(), [0.0, -0.0, -0.0]);
        rgb_to_hsv(&mut image)?;
        assert!(image.plane(0).is_some_and(|h| h.iter().all(|v| v.is_nan())));
        assert_eq!(image.plane(1), Some(&[0.0; 2][..]));
        assert!(image
            .plane(2)
            .is_some_and(|v| v.iter().all(|v| *v == 0.0 && v.is_sign_negative())));

        let mut image = rgb_image([2, 1].into(), [-0.0, 0.0, 0.0]);
        rgb_to_hsv(&mut image)?;
        assert!(image
            .plane(2)
            .is_some_and(|v| v.iter().all(|v| *v == 0.0 && v.is_sign_positive())));
        Ok(())
    }

    #[test]
    fn pure_red() -> Result<(), ImageError> {
        let mut image = rgb_image(
            ImageSize {
                width: 2,
                height: 2,
            },
            [1.0, 0.0, 0.0],
        );

        rgb_to_hsv(&mut image)?;
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(image.get(x, y, 0), 0.0);
                assert_eq!(image.get(x, y, 1), 1.0);
                assert_eq!(image.get(x, y, 2), 1.0);
            }
        }

        hsv_to_rgb(&mut image)?;
        assert_eq!(image, rgb_image([2, 2].into(), [1.0, 0.0, 0.0]));
        Ok(())
    }

    #[test]
    fn known_values() {
        let [h, s, v] = hsv_from_rgb_pixel(0.0, 0.5, 1.0);
        assert_relative_eq!(h, 3.5 / 6.0);
        assert_relative_eq!(s, 1.0);
        assert_relative_eq!(v, 1.0);

        let [h, s, v] = hsv_from_rgb_pixel(0.2, 0.8, 0.4);
        assert_relative_eq!(h, (2.0 + (0.4 - 0.2) / 0.6) / 6.0, epsilon = 1e-6);
        assert_relative_eq!(s, 0.75, epsilon = 1e-6);
        assert_relative_eq!(v, 0.8);
    }

    #[test]
    fn negative_hue_wraps() {
        let [h, s, v] = hsv_from_rgb_pixel(1.0, 0.0, 0.5);
        assert_relative_eq!(h, 1.0 - 0.5 / 6.0);
        assert_relative_eq!(s, 1.0);
        assert_relative_eq!(v, 1.0);
        assert!((0.0..1.0).contains(&h));
    }

    #[test]
    fn black_pixel() {
        let [h, s, v] = hsv_from_rgb_pixel(0.0, 0.0, 0.0);
        assert!(h.is_nan());
        assert_eq!(s, 0.0);
        assert_eq!(v, 0.0);

        assert_eq!(rgb_from_hsv_pixel(h, s, v), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn achromatic_hue_policy() -> Result<(), ImageError> {
        let mut image = rgb_image([3, 1].into(), [0.5, 0.5, 0.5]);
        rgb_to_hsv(&mut image)?;
        assert!(image.plane(0).is_some_and(|h| h.iter().all(|v| v.is_nan())));
        assert_eq!(image.plane(1), Some(&[0.0; 3][..]));
        assert_eq!(image.plane(2), Some(&[0.5; 3][..]));

        let mut image = rgb_image([3, 1].into(), [0.5, 0.5, 0.5]);
        let options = HsvOptions {
            achromatic_hue: AchromaticHue::Zero,
            ..Default::default()
        };
        rgb_to_hsv_with(&mut image, &options)?;
        assert_eq!(image.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.5]);

        hsv_to_rgb(&mut image)?;
        assert_eq!(image.as_slice(), &[0.5; 9]);
        Ok(())
    }

    #[test]
    fn sextant_boundaries() {
        assert_eq!(rgb_from_hsv_pixel(0.0, 0.5, 0.8), [0.8, 0.4, 0.4]);
        assert_eq!(rgb_from_hsv_pixel(0.5, 1.0, 1.0), [0.0, 1.0, 1.0]);
        assert_eq!(rgb_from_hsv_pixel(1.0, 1.0, 1.0), [1.0, 0.0, 0.0]);

        let [r, g, b] = rgb_from_hsv_pixel(2.0 / 6.0, 1.0, 1.0);
        assert_relative_eq!(r, 0.0, epsilon = 1e-6);
        assert_relative_eq!(g, 1.0);
        assert_relative_eq!(b, 0.0, epsilon = 1e-6);

        let [r, g, b] = rgb_from_hsv_pixel(4.0 / 6.0, 1.0, 1.0);
        assert_relative_eq!(r, 0.0, epsilon = 1e-6);
        assert_relative_eq!(g, 0.0, epsilon = 1e-6);
        assert_relative_eq!(b, 1.0);
    }

    #[test]
    fn shared_boundary_uses_first_interval() {
        // chroma + m rounds away from value for these samples
        let (saturation, value) = (0.03f32, 0.41f32);
        let chroma = saturation * value;
        let m = value - chroma;
        assert_ne!(chroma + m, value);

        // h0 == 1 belongs to [0, 1] before [1, 2]
        let [r, g, b] = rgb_from_hsv_pixel(1.0 / 6.0, saturation, value);
        assert_eq!(r, value);
        assert_eq!(g, chroma + m);
        assert_eq!(b, m);

        // h0 == 5 belongs to [4, 5] before the wrap-around interval
        let [r, g, b] = rgb_from_hsv_pixel(5.0 / 6.0, saturation, value);
        assert_eq!(r, chroma + m);
        assert_eq!(g, m);
        assert_eq!(b, value);
    }

    #[test]
    fn invalid_channel_count_leaves_image_untouched() {
        let mut image = Image::from_size_val([2, 2].into(), 4, 0.3);
        let before = image.clone();

        assert_eq!(
            rgb_to_hsv(&mut image),
            Err(ImageError::InvalidChannelCount(3, 4))
        );
        assert_eq!(
            hsv_to_rgb(&mut image),
            Err(ImageError::InvalidChannelCount(3, 4))
        );
        assert_eq!(image, before);
    }

    #[test]
    fn strategies_agree() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 5,
            height: 4,
        };
        let data = (0..size.width * size.height * 3)
            .map(|i| ((i * 37) % 101) as f32 / 100.0)
            .collect::<Vec<_>>();
        let reference = {
            let mut image = Image::new(size, 3, data.clone())?;
            rgb_to_hsv(&mut image)?;
            image
        };

        for strategy in STRATEGIES {
            let mut image = Image::new(size, 3, data.clone())?;
            let options = HsvOptions {
                strategy,
                ..Default::default()
            };
            rgb_to_hsv_with(&mut image, &options)?;
            for (a, b) in image.as_slice().iter().zip(reference.as_slice()) {
                assert!(a == b || (a.is_nan() && b.is_nan()));
            }

            hsv_to_rgb_with(&mut image, &options)?;
            for (a, b) in image.as_slice().iter().zip(data.iter()) {
                assert_relative_eq!(*a, *b, epsilon = 1e-5);
            }
        }
        Ok(())
    }
}
