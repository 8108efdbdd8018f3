//! 证书附件：二维码 PNG 与 PDF
//!
//! 附件在证书入库提交之后生成，失败只记录日志，不回滚证书。
//! 下载时若文件缺失，会根据数据库记录重新生成。

pub mod pdf;
pub mod qr;

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::CertificateConfig;
use crate::errors::Result;
use crate::models::certificates::entities::CertificateDocument;

pub use pdf::render_certificate_pdf;
pub use qr::render_qr_png;

const QR_SUBDIR: &str = "qrcodes";
const PDF_SUBDIR: &str = "certificates";

/// 将 `{code}` 替换为证书编号得到验证地址
pub fn verify_url(template: &str, code: &str) -> String {
    template.replace("{code}", code)
}

/// 附件目录布局
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &CertificateConfig) -> Self {
        Self::new(&config.artifacts_dir)
    }

    /// 创建二维码与证书子目录
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(self.root.join(QR_SUBDIR))?;
        std::fs::create_dir_all(self.root.join(PDF_SUBDIR))?;
        Ok(())
    }

    pub fn qr_path(&self, code: &str) -> PathBuf {
        self.root.join(QR_SUBDIR).join(format!("{code}.png"))
    }

    pub fn pdf_path(&self, code: &str) -> PathBuf {
        self.root.join(PDF_SUBDIR).join(format!("{code}.pdf"))
    }

    /// 生成并写入二维码，返回 PNG 字节
    pub fn write_qr(&self, code: &str, url: &str) -> Result<Vec<u8>> {
        let png = render_qr_png(url)?;
        write_file(&self.qr_path(code), &png)?;
        Ok(png)
    }

    /// 生成并写入 PDF，二维码同时落盘
    pub fn write_pdf(&self, document: &CertificateDocument) -> Result<Vec<u8>> {
        let qr_png = self.write_qr(&document.code, &document.verify_url)?;
        let pdf = render_certificate_pdf(document, &qr_png)?;
        write_file(&self.pdf_path(&document.code), &pdf)?;
        Ok(pdf)
    }

    /// 读取二维码，缺失时重新生成
    pub fn load_or_render_qr(&self, code: &str, url: &str) -> Result<Vec<u8>> {
        match std::fs::read(self.qr_path(code)) {
            Ok(bytes) => Ok(bytes),
            Err(_) => self.write_qr(code, url),
        }
    }

    /// 读取 PDF，缺失时重新生成
    pub fn load_or_render_pdf(&self, document: &CertificateDocument) -> Result<Vec<u8>> {
        match std::fs::read(self.pdf_path(&document.code)) {
            Ok(bytes) => Ok(bytes),
            Err(_) => {
                info!("证书 {} 的 PDF 缺失，重新生成", document.code);
                self.write_pdf(document)
            }
        }
    }

    /// 证书提交后生成全部附件，失败只记录日志
    pub fn generate_after_commit(&self, document: &CertificateDocument) {
        if let Err(e) = self.write_pdf(document) {
            warn!("证书 {} 附件生成失败: {}", document.code, e);
        }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Belt;

    fn temp_store() -> ArtifactStore {
        let dir = std::env::temp_dir().join(format!("dojo-artifacts-{}", uuid::Uuid::new_v4()));
        ArtifactStore::new(dir)
    }

    fn document() -> CertificateDocument {
        CertificateDocument {
            code: "CERT-2025-0007".to_string(),
            student_name: "JOÃO DA SILVA".to_string(),
            belt: Belt::Amarela,
            issued_on: chrono::NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            verify_url: "https://dojo.example/verify/CERT-2025-0007".to_string(),
        }
    }

    #[test]
    fn test_verify_url() {
        assert_eq!(
            verify_url("https://x/verify/{code}", "CERT-2025-0001"),
            "https://x/verify/CERT-2025-0001"
        );
    }

    #[test]
    fn test_paths() {
        let store = ArtifactStore::new("artifacts");
        assert_eq!(
            store.qr_path("CERT-2025-0001"),
            Path::new("artifacts/qrcodes/CERT-2025-0001.png")
        );
        assert_eq!(
            store.pdf_path("CERT-2025-0001"),
            Path::new("artifacts/certificates/CERT-2025-0001.pdf")
        );
    }

    #[test]
    fn test_write_and_regenerate() {
        let store = temp_store();
        let doc = document();

        store.write_pdf(&doc).unwrap();
        assert!(store.qr_path(&doc.code).exists());
        assert!(store.pdf_path(&doc.code).exists());

        std::fs::remove_file(store.pdf_path(&doc.code)).unwrap();
        let pdf = store.load_or_render_pdf(&doc).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert!(store.pdf_path(&doc.code).exists());

        let _ = std::fs::remove_dir_all(&store.root);
    }
}
