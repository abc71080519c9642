use thiserror::Error;

/// Reasons an encoded payload could not be turned into a raster image.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Image payload is empty")]
    EmptyPayload,

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Decoded image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

#[derive(Error, Debug)]
pub enum FloorplanError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FloorplanError {
    /// True when the failure originates from the submitted payload itself.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, FloorplanError>;
