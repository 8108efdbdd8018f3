use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;

use crate::errors::Result;

const QUIET_ZONE: u32 = 4;
const MODULE_SCALE: u32 = 8;

/// 将内容编码为二维码 PNG
pub fn render_qr_png(content: &str) -> Result<Vec<u8>> {
    let code = QrCode::with_error_correction_level(content.as_bytes(), EcLevel::M)?;
    let width = code.width() as u32;
    let colors = code.to_colors();
    let size = (width + QUIET_ZONE * 2) * MODULE_SCALE;

    let img = GrayImage::from_fn(size, size, |x, y| {
        let mx = (x / MODULE_SCALE) as i64 - QUIET_ZONE as i64;
        let my = (y / MODULE_SCALE) as i64 - QUIET_ZONE as i64;
        let dark = mx >= 0
            && my >= 0
            && (mx as u32) < width
            && (my as u32) < width
            && colors[(my as u32 * width + mx as u32) as usize] == Color::Dark;
        if dark { Luma([0u8]) } else { Luma([255u8]) }
    });

    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(img).write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_output() {
        let png = render_qr_png("https://dojo.example/verify/CERT-2025-0001").unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), decoded.height());
        assert_eq!(decoded.width() % MODULE_SCALE, 0);
    }
}
