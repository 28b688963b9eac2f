// Circular "IA" badge renderer
pub mod bitmap_font;
pub mod encode;
pub mod font;

use crate::error::{Error, Result};
use font::{FontKind, FontSource, TextBounds};
use std::{
    fmt,
    path::{Path, PathBuf},
};
use tiny_skia::{FillRule, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

pub const TEXT: &str = "IA";
/// #8B5CF6
pub const BADGE_FILL: [u8; 3] = [139, 92, 246];
pub const TEXT_FILL: [u8; 3] = [255, 255, 255];
pub const STROKE_FILL: [u8; 3] = [0, 0, 0];

/// Pixels per em for the badge text.
pub fn text_size(size: u32) -> u32 {
    (size as f32 * 0.7).round() as u32
}

pub fn stroke_width(size: u32) -> u32 {
    (size / 24).max(1)
}

/// Where the text origin goes so that `bounds` ends up centered on a `size` canvas.
pub fn text_origin(size: u32, bounds: &TextBounds) -> (i32, i32) {
    let size = size as i32;
    (
        (size - bounds.width()).div_euclid(2) - bounds.x0,
        (size - bounds.height()).div_euclid(2) - bounds.y0,
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderReport {
    pub path: PathBuf,
    pub size: u32,
    pub text_size: u32,
    pub stroke_width: u32,
    pub font: FontKind,
}

impl fmt::Display for RenderReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Created: {} (size: {}x{}, stroke width: {})",
            self.path.display(),
            self.size,
            self.size,
            self.stroke_width
        )
    }
}

fn solid(rgb: [u8; 3], anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgb[0], rgb[1], rgb[2], 255);
    paint.anti_alias = anti_alias;
    paint
}

/// Draws the badge on a fresh transparent canvas. Returns the canvas and the font actually used.
pub fn render(size: u32, fonts: &FontSource) -> Result<(Pixmap, FontKind)> {
    zone!("render_badge");
    let mut pixmap = Pixmap::new(size, size).ok_or(Error::InvalidSize(size))?;

    {
        zone!("fill_circle");
        let radius = size as f32 / 2.0;
        if let Some(circle) = PathBuilder::from_circle(radius, radius, radius) {
            pixmap.fill_path(
                &circle,
                &solid(BADGE_FILL, false),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    let shape = fonts.shape(TEXT, text_size(size) as f32)?;
    let (x, y) = text_origin(size, &shape.bounds);
    let transform = Transform::from_translate(x as f32, y as f32);
    {
        zone!("draw_text");
        // The stroke is centered on the outline, so doubling it puts `stroke_width` outside the glyph.
        let outline = Stroke {
            width: (stroke_width(size) * 2) as f32,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        pixmap.stroke_path(
            &shape.path,
            &solid(STROKE_FILL, shape.anti_alias()),
            &outline,
            transform,
            None,
        );
        pixmap.fill_path(
            &shape.path,
            &solid(TEXT_FILL, shape.anti_alias()),
            FillRule::Winding,
            transform,
            None,
        );
    }

    Ok((pixmap, shape.kind))
}

/// Renders one icon and writes it to `output_path` as PNG.
pub fn render_icon(size: u32, output_path: &Path, fonts: &FontSource) -> Result<RenderReport> {
    let (pixmap, font) = render(size, fonts)?;
    encode::write_png(&encode::to_rgba_image(&pixmap), output_path)?;
    Ok(RenderReport {
        path: output_path.to_owned(),
        size,
        text_size: text_size(size),
        stroke_width: stroke_width(size),
        font,
    })
}
