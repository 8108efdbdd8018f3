use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::Path;

use super::FileService;
use crate::config::AppConfig;
use crate::errors::DojoSystemError;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;

pub async fn handle_download(
    service: &FileService,
    request: &HttpRequest,
    file_token: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let db_file = match storage.get_file_by_token(&file_token).await {
        Ok(Some(f)) => f,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "File not found",
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "File query failed",
                &e,
            ));
        }
    };

    let file_path = Path::new(&AppConfig::get().upload.dir).join(&db_file.stored_name);

    let buf = match std::fs::read(&file_path) {
        Ok(buf) => buf,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("文件 {} 记录存在但磁盘文件缺失", db_file.token);
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "文件不存在",
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "File read failed",
                &DojoSystemError::from(e),
            ));
        }
    };

    // 图片和视频直接在课时页面内展示
    Ok(HttpResponse::Ok()
        .content_type(db_file.file_type.as_str())
        .insert_header(ContentDisposition {
            disposition: DispositionType::Inline,
            parameters: vec![DispositionParam::Filename(db_file.original_name)],
        })
        .body(buf))
}
