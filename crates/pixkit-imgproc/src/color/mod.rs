mod gray;
mod hsv;

pub use gray::{to_grayscale, to_grayscale_with};
pub use hsv::{
    hsv_from_rgb_pixel, hsv_to_rgb, hsv_to_rgb_with, rgb_from_hsv_pixel, rgb_to_hsv,
    rgb_to_hsv_with, three_way_max, three_way_min, AchromaticHue, HsvOptions,
};
