//! Lossy WebP encoding via libwebp.

use image::RgbImage;
use thiserror::Error;

/// Parameters handed to the encoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodeSettings {
    /// 0.0 (smallest) ..= 100.0 (best).
    pub quality: f32,
    /// Compression effort, 0 (fast) ..= 6 (slowest, smallest output).
    pub method: i32,
    pub lossless: bool,
}

/// The only settings the pipeline ever uses: quality 85, maximum effort, lossy.
pub const WEBP_SETTINGS: EncodeSettings = EncodeSettings {
    quality: 85.0,
    method: 6,
    lossless: false,
};

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("cannot encode empty {0}x{1} image")]
    Empty(u32, u32),
    #[error("libwebp rejected encoder config")]
    Config,
    #[error("libwebp: {0}")]
    Webp(String),
}

/// Serializes an opaque RGB image.
pub trait ImageEncoder {
    fn encode(&self, image: &RgbImage, settings: &EncodeSettings) -> Result<Vec<u8>, EncodeError>;
}

/// libwebp-backed encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpEncoder;

impl ImageEncoder for WebpEncoder {
    fn encode(&self, image: &RgbImage, settings: &EncodeSettings) -> Result<Vec<u8>, EncodeError> {
        let (w, h) = image.dimensions();
        if w == 0 || h == 0 {
            return Err(EncodeError::Empty(w, h));
        }

        let mut config = libwebp_sys::WebPConfig::new().map_err(|_| EncodeError::Config)?;
        config.quality = settings.quality;
        config.method = settings.method;
        config.lossless = i32::from(settings.lossless);

        let encoder = webp::Encoder::from_rgb(image.as_raw(), w, h);
        let memory = encoder
            .encode_advanced(&config)
            .map_err(|e| EncodeError::Webp(format!("{:?}", e)))?;
        Ok(memory.to_vec())
    }
}
