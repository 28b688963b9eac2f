use crate::error::Result;
use image::{Rgba, RgbaImage};
use png::{BitDepth, ColorType, Encoder};
use std::{fs, path::Path};
use tiny_skia::Pixmap;

/// Converts the premultiplied canvas into straight RGBA.
pub fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    zone!("to_rgba_image");
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }
    image
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    zone!("encode_png");
    let mut bytes = Vec::new();
    let mut encoder = Encoder::new(&mut bytes, image.width(), image.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    Ok(bytes)
}

/// Writes `image` to `path`, replacing whatever is there. The parent directory must exist.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(image)?;
    fs::write(path, bytes)?;
    Ok(())
}
