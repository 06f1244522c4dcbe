use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlassError {
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
