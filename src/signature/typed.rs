use super::{SignatureImage, CANVAS_HEIGHT, CANVAS_WIDTH};
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;

pub const FONT_SIZE_PX: f32 = 50.0;

/// DejaVu Sans, drawn for any face the font directory does not provide
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// The fixed set of faces a typed signature can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureFont {
    #[default]
    Padrao,
    Manuscrita,
    Serif,
    CursivaSimples,
}

impl SignatureFont {
    pub const ALL: [SignatureFont; 4] = [
        SignatureFont::Padrao,
        SignatureFont::Manuscrita,
        SignatureFont::Serif,
        SignatureFont::CursivaSimples,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureFont::Padrao => "padrao",
            SignatureFont::Manuscrita => "manuscrita",
            SignatureFont::Serif => "serif",
            SignatureFont::CursivaSimples => "cursiva_simples",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }

    pub fn file_name(&self) -> String {
        format!("{}.ttf", self.as_str())
    }
}

/// Directory holding one TrueType file per `SignatureFont`. Faces without a
/// file fall back to the bundled DejaVu Sans.
#[derive(Debug, Clone)]
pub struct FontLibrary {
    dir: PathBuf,
}

impl FontLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, font: SignatureFont) -> PathBuf {
        self.dir.join(font.file_name())
    }

    /// `None` when the configured file cannot be read or is not a usable font
    pub fn load(&self, font: SignatureFont) -> Option<Font<'static>> {
        let path = self.path_for(font);
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "using bundled signature font");
                return Font::try_from_bytes(BUNDLED_FONT);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "signature font unavailable");
                return None;
            }
        };

        let parsed = Font::try_from_vec(data);
        if parsed.is_none() {
            tracing::warn!(path = %path.display(), "signature font could not be parsed");
        }
        parsed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedSignature {
    pub text: String,
    #[serde(default)]
    pub font: SignatureFont,
}

impl TypedSignature {
    pub fn new(text: &str, font: SignatureFont) -> Self {
        Self {
            text: text.to_string(),
            font,
        }
    }

    /// Render with the configured face; any failure yields no image
    pub fn rasterize(&self, fonts: &FontLibrary) -> Option<SignatureImage> {
        if self.text.trim().is_empty() {
            return None;
        }
        let font = fonts.load(self.font)?;
        let canvas = render_text(&font, self.text.trim())?;
        SignatureImage::from_rgba(&canvas)
    }
}

/// Draw `text` centered on the signature canvas, black on transparent.
pub fn render_text(font: &Font<'_>, text: &str) -> Option<RgbaImage> {
    if text.is_empty() {
        return None;
    }

    let scale = Scale::uniform(FONT_SIZE_PX);
    let v_metrics = font.v_metrics(scale);

    let (min_x, max_x) = font
        .layout(text, scale, point(0.0, 0.0))
        .filter_map(|g| g.pixel_bounding_box())
        .fold((i32::MAX, i32::MIN), |(lo, hi), bb| {
            (lo.min(bb.min.x), hi.max(bb.max.x))
        });

    let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, Rgba([0, 0, 0, 0]));

    // whitespace-only layouts have no bounding boxes
    if min_x > max_x {
        return Some(canvas);
    }

    let text_width = (max_x - min_x) as f32;
    let origin_x = (CANVAS_WIDTH as f32 - text_width) / 2.0 - min_x as f32;
    let baseline = CANVAS_HEIGHT as f32 / 2.0 + (v_metrics.ascent + v_metrics.descent) / 2.0;

    for glyph in font.layout(text, scale, point(origin_x, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let x = bb.min.x + gx as i32;
            let y = bb.min.y + gy as i32;
            if x < 0 || y < 0 || x >= CANVAS_WIDTH as i32 || y >= CANVAS_HEIGHT as i32 {
                return;
            }
            let pixel = canvas.get_pixel_mut(x as u32, y as u32);
            let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
            if alpha > pixel[3] {
                *pixel = Rgba([0, 0, 0, alpha]);
            }
        });
    }

    Some(canvas)
}
