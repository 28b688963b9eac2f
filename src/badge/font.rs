use super::bitmap_font::{self, ADVANCE, GLYPH_WIDTH};
use crate::error::{Error, Result};
#[cfg(feature = "system_font")]
use std::path::PathBuf;
use std::{fmt, path::Path};
use tiny_skia::{Path as SkPath, PathBuilder, Rect};

#[cfg(target_os = "macos")]
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";
#[cfg(target_os = "windows")]
pub const DEFAULT_FONT_PATH: &str = r"C:\Windows\Fonts\arialbd.ttf";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontKind {
    Outline,
    Bitmap,
}

impl fmt::Display for FontKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FontKind::Outline => write!(f, "outline"),
            FontKind::Bitmap => write!(f, "bitmap"),
        }
    }
}

/// Pixel-aligned box around a text path, relative to the text origin.
/// `x1` and `y1` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextBounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl TextBounds {
    fn enclosing(rect: Rect) -> Self {
        TextBounds {
            x0: rect.left().floor() as i32,
            y0: rect.top().floor() as i32,
            x1: rect.right().ceil() as i32,
            y1: rect.bottom().ceil() as i32,
        }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }
}

/// Glyph outlines for a whole string, laid out from the origin (0, 0) at the ascender line.
pub struct TextShape {
    pub path: SkPath,
    pub bounds: TextBounds,
    pub kind: FontKind,
}

impl TextShape {
    fn new(path: SkPath, kind: FontKind) -> Self {
        TextShape {
            bounds: TextBounds::enclosing(path.bounds()),
            path,
            kind,
        }
    }

    /// Bitmap glyphs sit on whole pixels and are drawn without smoothing.
    pub fn anti_alias(&self) -> bool {
        self.kind == FontKind::Outline
    }
}

/// Where glyphs come from for a batch. The font file is read once; a face is parsed per shape,
/// and anything that goes wrong there drops to the bitmap font.
pub enum FontSource {
    #[cfg(feature = "system_font")]
    Outline {
        path: PathBuf,
        data: Vec<u8>,
        index: u32,
    },
    Bitmap {
        reason: String,
    },
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            #[cfg(feature = "system_font")]
            FontSource::Outline { path, index, .. } => {
                write!(f, "outline font {} (face {index})", path.display())
            }
            FontSource::Bitmap { reason } => write!(f, "built-in bitmap font ({reason})"),
        }
    }
}

impl FontSource {
    /// Loads the outline font at `path`, or the bitmap font if it can't be used.
    pub fn load(path: &Path, index: u32) -> FontSource {
        zone!("font_load");
        match Self::try_load(path, index) {
            Ok(source) => source,
            Err(err) => FontSource::Bitmap {
                reason: format!("{}: {err}", path.display()),
            },
        }
    }

    pub fn bitmap() -> FontSource {
        FontSource::Bitmap {
            reason: String::from("requested"),
        }
    }

    #[cfg(feature = "system_font")]
    fn try_load(path: &Path, index: u32) -> Result<FontSource> {
        let data = std::fs::read(path)?;
        ttf_parser::Face::parse(&data, index)?;
        Ok(FontSource::Outline {
            path: path.to_owned(),
            data,
            index,
        })
    }

    #[cfg(not(feature = "system_font"))]
    fn try_load(_path: &Path, _index: u32) -> Result<FontSource> {
        Err(Error::Font(String::from("built without system font support")))
    }

    pub fn kind(&self) -> FontKind {
        match self {
            #[cfg(feature = "system_font")]
            FontSource::Outline { .. } => FontKind::Outline,
            FontSource::Bitmap { .. } => FontKind::Bitmap,
        }
    }

    /// Lays out `text` at `px` pixels per em. The bitmap font ignores `px`.
    #[cfg_attr(not(feature = "system_font"), allow(unused_variables))]
    pub fn shape(&self, text: &str, px: f32) -> Result<TextShape> {
        zone!("font_shape");
        match self {
            #[cfg(feature = "system_font")]
            FontSource::Outline { data, index, .. } => {
                outline::shape(data, *index, text, px).or_else(|_| bitmap_shape(text))
            }
            FontSource::Bitmap { .. } => bitmap_shape(text),
        }
    }
}

fn bitmap_shape(text: &str) -> Result<TextShape> {
    let mut builder = PathBuilder::new();
    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = bitmap_font::glyph(ch) else {
            continue;
        };
        let left = (i as u32 * ADVANCE) as f32;
        for (y, &row) in rows.iter().enumerate() {
            for x in 0..GLYPH_WIDTH {
                if !bitmap_font::dot(row, x) {
                    continue;
                }
                if let Some(dot) = Rect::from_xywh(left + x as f32, y as f32, 1.0, 1.0) {
                    builder.push_rect(dot);
                }
            }
        }
    }
    let path = builder
        .finish()
        .ok_or_else(|| Error::NoGlyphs(text.to_owned()))?;
    Ok(TextShape::new(path, FontKind::Bitmap))
}

#[cfg(feature = "system_font")]
mod outline {
    use super::{FontKind, TextShape};
    use crate::error::{Error, Result};
    use tiny_skia::PathBuilder;
    use ttf_parser::{Face, OutlineBuilder};

    /// Maps font units (y up, baseline at 0) onto pixels (y down, ascender at 0).
    struct GlyphPen {
        builder: PathBuilder,
        scale: f32,
        pen_x: f32,
        ascender: f32,
    }

    impl GlyphPen {
        fn map(&self, x: f32, y: f32) -> (f32, f32) {
            (self.pen_x + x * self.scale, self.ascender - y * self.scale)
        }
    }

    impl OutlineBuilder for GlyphPen {
        fn move_to(&mut self, x: f32, y: f32) {
            let (x, y) = self.map(x, y);
            self.builder.move_to(x, y);
        }

        fn line_to(&mut self, x: f32, y: f32) {
            let (x, y) = self.map(x, y);
            self.builder.line_to(x, y);
        }

        fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
            let (x1, y1) = self.map(x1, y1);
            let (x, y) = self.map(x, y);
            self.builder.quad_to(x1, y1, x, y);
        }

        fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
            let (x1, y1) = self.map(x1, y1);
            let (x2, y2) = self.map(x2, y2);
            let (x, y) = self.map(x, y);
            self.builder.cubic_to(x1, y1, x2, y2, x, y);
        }

        fn close(&mut self) {
            self.builder.close();
        }
    }

    pub(super) fn shape(data: &[u8], index: u32, text: &str, px: f32) -> Result<TextShape> {
        let face = Face::parse(data, index)?;
        let scale = px / f32::from(face.units_per_em());
        let mut pen = GlyphPen {
            builder: PathBuilder::new(),
            scale,
            pen_x: 0.0,
            ascender: f32::from(face.ascender()) * scale,
        };
        for ch in text.chars() {
            let glyph = face
                .glyph_index(ch)
                .ok_or_else(|| Error::Font(format!("no glyph for {ch:?}")))?;
            // Blank glyphs have no outline but still advance.
            face.outline_glyph(glyph, &mut pen);
            pen.pen_x += f32::from(face.glyph_hor_advance(glyph).unwrap_or(0)) * scale;
        }
        let path = pen
            .builder
            .finish()
            .ok_or_else(|| Error::NoGlyphs(text.to_owned()))?;
        Ok(TextShape::new(path, FontKind::Outline))
    }
}
