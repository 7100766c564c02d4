use image::codecs::png::PngEncoder;
use image::{ColorType, GrayImage, ImageEncoder, Luma};
use qrcode::types::QrError;
use qrcode::{Color, QrCode};
use thiserror::Error;

/// Pixels per QR module
pub const MODULE_PX: u32 = 10;
/// Blank modules around the symbol
pub const QUIET_ZONE: u32 = 2;

#[derive(Error, Debug)]
pub enum QrImageError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] QrError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Black-on-white PNG of `data` as a QR symbol
pub fn qr_png(data: &str) -> Result<Vec<u8>, QrImageError> {
    let code = QrCode::new(data.as_bytes())?;
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET_ZONE) * MODULE_PX;

    let image = GrayImage::from_fn(side, side, |x, y| {
        let mx = (x / MODULE_PX).checked_sub(QUIET_ZONE);
        let my = (y / MODULE_PX).checked_sub(QUIET_ZONE);
        let dark = match (mx, my) {
            (Some(mx), Some(my)) if mx < modules && my < modules => {
                colors[(my * modules + mx) as usize] == Color::Dark
            }
            _ => false,
        };
        if dark {
            Luma([0])
        } else {
            Luma([255])
        }
    });

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(image.as_raw(), side, side, ColorType::L8)?;
    Ok(png)
}
