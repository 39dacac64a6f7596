//! Color-mode normalization to opaque 8-bit RGB.
//!
//! Sources with an alpha channel (RGBA, LA, and palette images with a
//! transparency entry, which the decoder expands to RGBA) are composited onto
//! white using alpha as the mask. Everything else is converted directly.

use image::{DynamicImage, Rgb, RgbImage};

/// Background used under transparent pixels.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Convert any decoded image into an opaque 3-channel 8-bit image.
pub fn to_opaque_rgb(img: DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.into_rgb8();
    }
    let rgba = img.into_rgba8();
    let (w, h) = rgba.dimensions();
    RgbImage::from_fn(w, h, |x, y| {
        let p = rgba.get_pixel(x, y).0;
        let a = p[3];
        Rgb([
            blend(p[0], BACKGROUND.0[0], a),
            blend(p[1], BACKGROUND.0[1], a),
            blend(p[2], BACKGROUND.0[2], a),
        ])
    })
}

/// `fg * a + bg * (1 - a)` in 8-bit fixed point, rounded.
fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}
