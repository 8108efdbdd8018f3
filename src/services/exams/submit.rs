use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::scoring::score_answers;
use super::{ExamService, attempt_closed, load_own_attempt};
use crate::config::AppConfig;
use crate::errors::DojoSystemError;
use crate::middlewares::RequireJWT;
use crate::models::exams::entities::ExamAttemptStatus;
use crate::models::exams::requests::SubmitExamRequest;
use crate::models::exams::responses::SubmitExamResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::certificates::{build_document, generate_artifacts};
use crate::services::{internal_error, unauthorized};
use crate::storage::ExamSubmission;

pub async fn submit_exam(
    service: &ExamService,
    attempt_id: i64,
    submit_request: SubmitExamRequest,
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

    if attempt.status != ExamAttemptStatus::InProgress {
        return Ok(attempt_closed());
    }

    let exam_config = match storage.get_exam_config(attempt.exam_config_id).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamConfigNotFound,
                "Exame não encontrado",
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to submit exam",
                &e,
            ));
        }
    };

    let Some(score) = score_answers(
        &attempt.questions,
        &submit_request.answers,
        exam_config.pass_percentage,
    ) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ExamAnswersInvalid,
            format!(
                "Esperadas {} respostas, recebidas {}",
                attempt.questions.len(),
                submit_request.answers.len()
            ),
        )));
    };

    let certificate_config = &AppConfig::get().certificate;
    let submission = ExamSubmission {
        attempt_id: attempt.id,
        user_id: current_user.id,
        exam_config_id: exam_config.id,
        belt: exam_config.belt,
        score: score.correct,
        total_questions: score.total,
        percentage: score.percentage,
        passed: score.passed,
        details: score.details,
        certificate_prefix: Some(certificate_config.code_prefix.clone()),
    };

    let (result, certificate) = match storage.submit_exam(submission).await {
        Ok(outcome) => outcome,
        // 并发提交或放弃时条件更新失败
        Err(DojoSystemError::Conflict(_)) => return Ok(attempt_closed()),
        Err(DojoSystemError::AlreadyCertified(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ExamAlreadyCertified,
                "Você já possui certificado para este exame",
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to submit exam",
                &e,
            ));
        }
    };

    info!(
        "User {} submitted attempt {}: {}/{} ({}%), passed={}",
        current_user.id,
        attempt.id,
        result.score,
        result.total_questions,
        result.percentage,
        result.passed
    );

    if let Some(certificate) = &certificate {
        generate_artifacts(build_document(
            certificate,
            &current_user.name,
            certificate_config,
        ))
        .await;
    }

    let message = match (result.passed, certificate.is_some()) {
        (true, true) => "Aprovado! Certificado emitido",
        (true, false) => "Aprovado! Certificado já emitido anteriormente",
        (false, _) => "Exame concluído",
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SubmitExamResponse {
            result,
            certificate,
        },
        message,
    )))
}
