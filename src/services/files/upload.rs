use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File as FsFile, path::Path};

use super::FileService;
use crate::config::AppConfig;
use crate::errors::DojoSystemError;
use crate::middlewares::RequireJWT;
use crate::models::files::entities::File;
use crate::models::{ApiResponse, ErrorCode, files::responses::FileUploadResponse};
use crate::services::{internal_error, unauthorized};
use crate::utils::file_magic::content_type_for;
use crate::utils::random_code::generate_random_code;
use crate::utils::validate_magic_bytes;

const TOKEN_LENGTH: usize = 32;

/// 文件名中提取小写扩展名（含点号）
fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

pub async fn handle_upload(
    service: &FileService,
    req: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(req) else {
        return Ok(unauthorized());
    };

    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.allowed_types;

    // 确保上传目录存在
    if !Path::new(upload_dir).exists()
        && let Err(e) = fs::create_dir_all(upload_dir)
    {
        tracing::error!("{}", DojoSystemError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileUploadFailed,
                "创建上传目录失败",
            )),
        );
    }

    let token = generate_random_code(TOKEN_LENGTH);
    let mut original_name = String::new();
    let mut file_size: i64 = 0;
    let mut file_uploaded = false;
    let mut file_type = String::new();
    let mut stored_name = String::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name != "file" {
            continue;
        }

        if file_uploaded {
            let _ = fs::remove_file(Path::new(upload_dir).join(&stored_name));
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::MultifileUploadNotAllowed,
                "Only one file can be uploaded at a time",
            )));
        }
        file_uploaded = true;

        original_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();

        let extension = extension_of(&original_name);
        if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::FileTypeNotAllowed,
                "File type not allowed",
            )));
        }

        // 类型以扩展名和魔术字节为准，不信任客户端声明的 MIME
        file_type = content_type_for(&extension).to_string();
        stored_name = format!("{token}{extension}");
        let file_path = Path::new(upload_dir).join(&stored_name);

        let mut f = match FsFile::create(&file_path) {
            Ok(file) => file,
            Err(e) => {
                tracing::error!("{}", DojoSystemError::file_operation(format!("{e}")));
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::<()>::error_empty(ErrorCode::FileUploadFailed, "文件创建失败"),
                ));
            }
        };

        let mut total_size: usize = 0;
        let mut first_chunk = true;
        while let Some(chunk) = field.next().await {
            let data = match chunk {
                Ok(data) => data,
                Err(e) => {
                    let _ = fs::remove_file(&file_path);
                    return Err(e.into());
                }
            };

            // 第一个 chunk 时验证魔术字节
            if first_chunk {
                first_chunk = false;
                if !validate_magic_bytes(&data, &extension) {
                    let _ = fs::remove_file(&file_path);
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileTypeNotAllowed,
                        "文件内容与扩展名不匹配",
                    )));
                }
            }

            total_size += data.len();
            if total_size > max_size {
                let _ = fs::remove_file(&file_path);
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileSizeExceeded,
                    "File size exceeds the limit",
                )));
            }
            if let Err(e) = f.write_all(&data) {
                let _ = fs::remove_file(&file_path);
                return Ok(internal_error(
                    ErrorCode::FileUploadFailed,
                    "文件写入失败",
                    &DojoSystemError::from(e),
                ));
            }
        }

        if total_size == 0 {
            let _ = fs::remove_file(&file_path);
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                "Arquivo vazio",
            )));
        }
        file_size = total_size as i64;
    }

    if !file_uploaded {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        )));
    }

    let storage = service.get_storage(req);

    let record = File {
        token,
        original_name,
        stored_name: stored_name.clone(),
        file_size,
        file_type,
        user_id,
        uploaded_at: chrono::Utc::now(),
    };

    match storage.create_file(record).await {
        Ok(file) => Ok(HttpResponse::Created().json(ApiResponse::success(
            FileUploadResponse {
                token: file.token,
                file_name: file.original_name,
                size: file.file_size,
                content_type: file.file_type,
                uploaded_at: file.uploaded_at,
            },
            "File uploaded successfully",
        ))),
        Err(e) => {
            let _ = fs::remove_file(Path::new(upload_dir).join(&stored_name));
            Ok(internal_error(
                ErrorCode::FileUploadFailed,
                "Failed to upload file",
                &e,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("Kata.PNG"), ".png");
        assert_eq!(extension_of("aula.final.mp4"), ".mp4");
        assert_eq!(extension_of("sem_extensao"), "");
    }
}
