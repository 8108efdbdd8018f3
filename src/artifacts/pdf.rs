use image::DynamicImage;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfLayerReference,
};

use crate::errors::Result;
use crate::models::certificates::entities::CertificateDocument;

const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const QR_DPI: f32 = 150.0;
/// 证书编号以大号字居中，便于人工核对
const CODE_FONT_SIZE: f32 = 24.0;

/// 内置字体只覆盖 WinAnsi，去掉葡语重音后输出
fn pdf_text(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'ç' => 'c',
            'Ç' => 'C',
            'ñ' => 'n',
            'Ñ' => 'N',
            c if c.is_ascii() => c,
            _ => '?',
        })
        .collect()
}

// 估算宽度，Helvetica 平均字宽约为字号的一半
fn centered_x(text: &str, size: f32) -> f32 {
    let width = text.chars().count() as f32 * size * 0.5 * 0.3528;
    ((PAGE_WIDTH - width) / 2.0).max(10.0)
}

fn centered(layer: &PdfLayerReference, font: &IndirectFontRef, text: &str, size: f32, y: f32) {
    let text = pdf_text(text);
    layer.use_text(text.as_str(), size, Mm(centered_x(&text, size)), Mm(y), font);
}

/// 生成 A4 横向证书 PDF，右下角嵌入二维码
pub fn render_certificate_pdf(document: &CertificateDocument, qr_png: &[u8]) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Certificado {}", document.code),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let layer = doc.get_page(page).get_layer(layer);

    centered(&layer, &bold, "CERTIFICADO DE GRADUAÇÃO", 30.0, 165.0);
    centered(&layer, &regular, "Certificamos que", 16.0, 140.0);
    centered(&layer, &bold, &document.student_name, 26.0, 122.0);
    centered(
        &layer,
        &regular,
        &format!("foi aprovado(a) no exame de {}", document.belt.display_name()),
        16.0,
        104.0,
    );

    centered(&layer, &bold, &document.code, CODE_FONT_SIZE, 80.0);
    layer.use_text(
        format!("Emitido em: {}", document.issued_on.format("%d/%m/%Y")),
        12.0,
        Mm(20.0),
        Mm(32.0),
        &regular,
    );
    layer.use_text(
        pdf_text(&document.verify_url),
        9.0,
        Mm(20.0),
        Mm(24.0),
        &regular,
    );

    let qr = image::load_from_memory(qr_png)?;
    let qr = DynamicImage::ImageRgb8(qr.to_rgb8());
    Image::from_dynamic_image(&qr).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(PAGE_WIDTH - 75.0)),
            translate_y: Some(Mm(18.0)),
            dpi: Some(QR_DPI),
            ..Default::default()
        },
    );

    Ok(doc.save_to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::render_qr_png;
    use crate::models::Belt;

    #[test]
    fn test_pdf_text_folds_accents() {
        assert_eq!(pdf_text("GRADUAÇÃO"), "GRADUACAO");
        assert_eq!(pdf_text("José Conceição"), "Jose Conceicao");
        assert_eq!(pdf_text("道場"), "??");
    }

    #[test]
    fn test_code_line_is_centered() {
        let code = "CERT-2025-0001";
        let x = centered_x(code, CODE_FONT_SIZE);
        let width = code.len() as f32 * CODE_FONT_SIZE * 0.5 * 0.3528;
        assert!((x - (PAGE_WIDTH - width - x)).abs() < 0.01);
        // 与右下角二维码不重叠
        assert!(x + width < PAGE_WIDTH - 75.0);
    }

    #[test]
    fn test_render_pdf() {
        let document = CertificateDocument {
            code: "CERT-2025-0001".to_string(),
            student_name: "MARIA OLIVEIRA".to_string(),
            belt: Belt::Verde,
            issued_on: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            verify_url: "https://dojo.example/verify/CERT-2025-0001".to_string(),
        };
        let qr = render_qr_png(&document.verify_url).unwrap();
        let pdf = render_certificate_pdf(&document, &qr).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
