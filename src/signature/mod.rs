//! Signature capture and rasterization.
//!
//! Typed and drawn signatures both end up as a PNG on a fixed 600x150 canvas.
//! Every failure on the way (blank input, missing font, encoder error) is
//! reported as "no image" so callers treat the party as not having signed.

mod drawn;
mod request;
mod typed;

pub use drawn::{Point, StrokePad, DEFAULT_PEN_WIDTH};
pub use request::{FormPart, PartySignature, SigningRequest};
pub use typed::{render_text, FontLibrary, SignatureFont, TypedSignature, FONT_SIZE_PX};

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use serde::{Deserialize, Serialize};

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 150;

/// Encoded PNG ready to be attached to a signing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl SignatureImage {
    pub fn from_rgba(canvas: &RgbaImage) -> Option<Self> {
        let mut png = Vec::new();
        let encoded = PngEncoder::new(&mut png).write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ColorType::Rgba8,
        );

        match encoded {
            Ok(()) => Some(Self {
                png,
                width: canvas.width(),
                height: canvas.height(),
            }),
            Err(err) => {
                tracing::warn!(error = %err, "signature PNG encoding failed");
                None
            }
        }
    }

    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.png)
    }
}

/// Either capture mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Signature {
    Typed(TypedSignature),
    Drawn { strokes: Vec<Vec<Point>> },
}

impl Signature {
    pub fn rasterize(&self, fonts: &FontLibrary) -> Option<SignatureImage> {
        match self {
            Signature::Typed(typed) => typed.rasterize(fonts),
            Signature::Drawn { strokes } => StrokePad::from_strokes(strokes.clone()).rasterize(),
        }
    }
}
