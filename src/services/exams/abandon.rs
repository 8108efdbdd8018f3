use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ExamService, attempt_closed, load_own_attempt};
use crate::middlewares::RequireJWT;
use crate::models::exams::entities::ExamAttemptStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};

/// 放弃考试，开始计算冷却期
pub async fn abandon_exam(
    service: &ExamService,
    attempt_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    let attempt = match load_own_attempt(&storage, attempt_id, &current_user).await {
        Ok(attempt) => attempt,
        Err(response) => return Ok(response),
    };

    if !attempt
        .status
        .can_transition_to(ExamAttemptStatus::Abandoned)
    {
        return Ok(attempt_closed());
    }

    match storage.abandon_exam_attempt(attempt.id).await {
        Ok(true) => {
            info!("User {} abandoned attempt {}", current_user.id, attempt.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Exame abandonado")))
        }
        Ok(false) => Ok(attempt_closed()),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to abandon exam",
            &e,
        )),
    }
}
