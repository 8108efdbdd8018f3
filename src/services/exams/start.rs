use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::{error, info};

use super::ExamService;
use super::question_bank::QuestionBank;
use crate::errors::DojoSystemError;
use crate::middlewares::RequireJWT;
use crate::models::exams::responses::StartExamResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};

/// 放弃后的冷却期是否仍在生效，返回解锁时间
pub(crate) fn lockout_until(
    last_abandoned: Option<chrono::DateTime<chrono::Utc>>,
    lockout_hours: i64,
    now: chrono::DateTime<chrono::Utc>,
) -> Option<chrono::DateTime<chrono::Utc>> {
    let unlock_at = last_abandoned? + chrono::Duration::hours(lockout_hours);
    (unlock_at > now).then_some(unlock_at)
}

pub async fn start_exam(
    service: &ExamService,
    config_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    let exam_config = match storage.get_exam_config(config_id).await {
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
                "Failed to start exam",
                &e,
            ));
        }
    };

    if !exam_config.active {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ExamInactive,
            "Exame indisponível no momento",
        )));
    }

    match storage
        .get_in_progress_attempt(current_user.id, exam_config.id)
        .await
    {
        Ok(None) => {}
        Ok(Some(attempt)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ExamAttemptInProgress,
                format!("Já existe uma tentativa em andamento (#{})", attempt.id),
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to start exam",
                &e,
            ));
        }
    }

    match storage
        .has_certificate_for(current_user.id, exam_config.id)
        .await
    {
        Ok(false) => {}
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ExamAlreadyCertified,
                "Você já possui certificado para este exame",
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to start exam",
                &e,
            ));
        }
    }

    let settings = service.get_settings();
    let last_abandoned = match storage
        .last_abandoned_at(current_user.id, exam_config.id)
        .await
    {
        Ok(at) => at,
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to start exam",
                &e,
            ));
        }
    };
    if let Some(unlock_at) = lockout_until(
        last_abandoned,
        settings.abandon_lockout_hours,
        chrono::Utc::now(),
    ) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ExamLockedOut,
            format!(
                "Exame bloqueado após desistência até {}",
                unlock_at.format("%Y-%m-%d %H:%M UTC")
            ),
        )));
    }

    let bank = QuestionBank::new(&settings.questions_dir);
    let topics = exam_config.topics.clone();
    let count = exam_config.question_count.max(0) as usize;
    let questions = match web::block(move || bank.draw(&topics, count)).await {
        Ok(Ok(questions)) => questions,
        Ok(Err(e)) => return Ok(question_bank_error(exam_config.id, &e)),
        Err(e) => {
            return Ok(question_bank_error(
                exam_config.id,
                &DojoSystemError::file_operation(e.to_string()),
            ));
        }
    };

    let attempt = match storage
        .create_exam_attempt(current_user.id, exam_config.id, questions)
        .await
    {
        Ok(attempt) => attempt,
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to start exam",
                &e,
            ));
        }
    };

    info!(
        "User {} started exam {} (attempt {})",
        current_user.id, exam_config.id, attempt.id
    );

    let questions = attempt
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| q.to_public(i))
        .collect();

    Ok(HttpResponse::Created().json(ApiResponse::success(
        StartExamResponse {
            attempt_id: attempt.id,
            exam_config_id: exam_config.id,
            belt: exam_config.belt,
            title: exam_config.title,
            pass_percentage: exam_config.pass_percentage,
            started_at: attempt.started_at,
            questions,
        },
        "Exame iniciado",
    )))
}

fn question_bank_error(config_id: i64, err: &DojoSystemError) -> HttpResponse {
    error!("Question bank failed for exam {}: {}", config_id, err);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::ExamQuestionBankError,
        "Banco de questões indisponível",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lockout_window() {
        let now = chrono::Utc::now();
        assert_eq!(lockout_until(None, 24, now), None);

        let recent = now - chrono::Duration::hours(2);
        assert_eq!(
            lockout_until(Some(recent), 24, now),
            Some(recent + chrono::Duration::hours(24))
        );

        let old = now - chrono::Duration::hours(25);
        assert_eq!(lockout_until(Some(old), 24, now), None);
        assert_eq!(lockout_until(Some(recent), 0, now), None);
    }
}
