pub mod abandon;
pub mod configs;
pub mod question_bank;
pub mod results;
pub mod scoring;
pub mod start;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::{AppConfig, ExamConfig as ExamSettings};
use crate::models::exams::entities::ExamAttempt;
use crate::models::exams::requests::{
    CreateExamConfigRequest, ExamConfigListParams, ExamResultListParams, SubmitExamRequest,
    UpdateExamConfigRequest,
};
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;
use crate::storage::Storage;

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

/// 读取当前用户自己的考试尝试，其他人的尝试视为不存在
pub(crate) async fn load_own_attempt(
    storage: &Arc<dyn Storage>,
    attempt_id: i64,
    user: &User,
) -> Result<ExamAttempt, HttpResponse> {
    match storage.get_exam_attempt(attempt_id).await {
        Ok(Some(attempt)) if attempt.user_id == user.id => Ok(attempt),
        Ok(_) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamAttemptNotFound,
            "Tentativa de exame não encontrada",
        ))),
        Err(e) => Err(internal_error(
            ErrorCode::InternalServerError,
            "Failed to load exam attempt",
            &e,
        )),
    }
}

pub(crate) fn attempt_closed() -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_empty(
        ErrorCode::ExamAttemptClosed,
        "Esta tentativa já foi encerrada",
    ))
}

impl ExamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_settings(&self) -> &ExamSettings {
        &AppConfig::get().exam
    }

    /// 考试配置
    pub async fn list_configs(
        &self,
        query: ExamConfigListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        configs::list_configs(self, query, request).await
    }

    pub async fn get_config(
        &self,
        config_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        configs::get_config(self, config_id, request).await
    }

    pub async fn create_config(
        &self,
        config_data: CreateExamConfigRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        configs::create_config(self, config_data, request).await
    }

    pub async fn update_config(
        &self,
        config_id: i64,
        update_data: UpdateExamConfigRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        configs::update_config(self, config_id, update_data, request).await
    }

    pub async fn delete_config(
        &self,
        config_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        configs::delete_config(self, config_id, request).await
    }

    /// 考试流程
    pub async fn start_exam(
        &self,
        config_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        start::start_exam(self, config_id, request).await
    }

    pub async fn submit_exam(
        &self,
        attempt_id: i64,
        submit_request: SubmitExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_exam(self, attempt_id, submit_request, request).await
    }

    pub async fn abandon_exam(
        &self,
        attempt_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        abandon::abandon_exam(self, attempt_id, request).await
    }

    /// 成绩
    pub async fn list_results(
        &self,
        query: ExamResultListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        results::list_results(self, query, request).await
    }

    pub async fn get_result(
        &self,
        result_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        results::get_result(self, result_id, request).await
    }
}
