/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// The image does not have exactly the number of channels an operation requires.
    #[error("Invalid channel count: expected {0}, got {1}")]
    InvalidChannelCount(usize, usize),

    /// The image has more channels than an operation supports.
    #[error("Invalid channel count: expected at most {0}, got {1}")]
    ChannelCountExceeded(usize, usize),

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),
}
