use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;
use tracing::info;

use super::ExamService;
use super::question_bank::is_valid_topic;
use crate::models::exams::requests::{
    CreateExamConfigRequest, ExamConfigInput, ExamConfigListParams, UpdateExamConfigRequest,
};
use crate::models::exams::responses::ExamConfigListResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;

const MAX_QUESTION_COUNT: i32 = 200;

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::ExamConfigNotFound,
        "Exame não encontrado",
    ))
}

/// 校验并规范化考试配置
pub(crate) fn validate_config_input(mut input: ExamConfigInput) -> Result<ExamConfigInput, String> {
    input.title = input.title.trim().to_string();
    if input.title.is_empty() {
        return Err("Título do exame é obrigatório".to_string());
    }

    input.topics = input
        .topics
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    // 保持原顺序去重，避免同一题库被抽取两次
    let mut seen = HashSet::new();
    input.topics.retain(|t| seen.insert(t.clone()));
    if input.topics.is_empty() {
        return Err("Informe ao menos um tópico".to_string());
    }
    if let Some(bad) = input.topics.iter().find(|t| !is_valid_topic(t)) {
        return Err(format!("Tópico inválido: {bad}"));
    }

    if !(1..=MAX_QUESTION_COUNT).contains(&input.question_count) {
        return Err(format!(
            "Quantidade de questões deve estar entre 1 e {MAX_QUESTION_COUNT}"
        ));
    }
    if !(0..=100).contains(&input.pass_percentage) {
        return Err("Percentual de aprovação deve estar entre 0 e 100".to_string());
    }

    Ok(input)
}

pub async fn list_configs(
    service: &ExamService,
    query: ExamConfigListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_exam_configs(query.belt, query.active_only).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ExamConfigListResponse { items },
            "Exames carregados",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to list exam configs",
            &e,
        )),
    }
}

pub async fn get_config(
    service: &ExamService,
    config_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_exam_config(config_id).await {
        Ok(Some(config)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(config, "Exame carregado")))
        }
        Ok(None) => Ok(not_found()),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to get exam config",
            &e,
        )),
    }
}

pub async fn create_config(
    service: &ExamService,
    config_data: CreateExamConfigRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let input = ExamConfigInput {
        belt: config_data.belt,
        title: config_data.title,
        topics: config_data.topics,
        question_count: config_data.question_count,
        pass_percentage: config_data
            .pass_percentage
            .unwrap_or(service.get_settings().default_pass_percentage),
        active: config_data.active.unwrap_or(true),
    };

    let input = match validate_config_input(input) {
        Ok(input) => input,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    };

    let storage = service.get_storage(request);

    match storage.create_exam_config(input).await {
        Ok(config) => {
            info!("Exam config {} created for belt {}", config.id, config.belt);
            Ok(HttpResponse::Created().json(ApiResponse::success(config, "Exame criado")))
        }
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to create exam config",
            &e,
        )),
    }
}

pub async fn update_config(
    service: &ExamService,
    config_id: i64,
    update_data: UpdateExamConfigRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let existing = match storage.get_exam_config(config_id).await {
        Ok(Some(config)) => config,
        Ok(None) => return Ok(not_found()),
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to update exam config",
                &e,
            ));
        }
    };

    let input = ExamConfigInput {
        belt: update_data.belt.unwrap_or(existing.belt),
        title: update_data.title.unwrap_or(existing.title),
        topics: update_data.topics.unwrap_or(existing.topics),
        question_count: update_data.question_count.unwrap_or(existing.question_count),
        pass_percentage: update_data.pass_percentage.unwrap_or(existing.pass_percentage),
        active: update_data.active.unwrap_or(existing.active),
    };

    let input = match validate_config_input(input) {
        Ok(input) => input,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    };

    match storage.update_exam_config(config_id, input).await {
        Ok(Some(config)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(config, "Exame atualizado")))
        }
        Ok(None) => Ok(not_found()),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to update exam config",
            &e,
        )),
    }
}

/// 已有成绩或证书引用的配置不能删除，只能停用
pub async fn delete_config(
    service: &ExamService,
    config_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.count_exam_config_usage(config_id).await {
        Ok(0) => {}
        Ok(_) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "Exame já possui resultados; desative-o em vez de remover",
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to delete exam config",
                &e,
            ));
        }
    }

    match storage.delete_exam_config(config_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Exame removido"))),
        Ok(false) => Ok(not_found()),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to delete exam config",
            &e,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Belt;

    fn input() -> ExamConfigInput {
        ExamConfigInput {
            belt: Belt::Amarela,
            title: "  Exame faixa amarela ".to_string(),
            topics: vec![" historia ".to_string(), "".to_string(), "regras".to_string()],
            question_count: 10,
            pass_percentage: 70,
            active: true,
        }
    }

    #[test]
    fn test_validate_config_input_normalizes() {
        let input = validate_config_input(input()).unwrap();
        assert_eq!(input.title, "Exame faixa amarela");
        assert_eq!(input.topics, vec!["historia", "regras"]);
    }

    #[test]
    fn test_validate_config_input_removes_scattered_duplicate_topics() {
        let mut raw = input();
        raw.topics = vec![
            "historia".to_string(),
            "regras".to_string(),
            " historia ".to_string(),
            "regras".to_string(),
        ];
        let input = validate_config_input(raw).unwrap();
        assert_eq!(input.topics, vec!["historia", "regras"]);
    }

    #[test]
    fn test_validate_config_input_rejects_bad_values() {
        let mut bad = input();
        bad.pass_percentage = 101;
        assert!(validate_config_input(bad).is_err());

        let mut bad = input();
        bad.question_count = 0;
        assert!(validate_config_input(bad).is_err());

        let mut bad = input();
        bad.topics = vec!["../segredo".to_string()];
        assert!(validate_config_input(bad).is_err());

        let mut bad = input();
        bad.title = "   ".to_string();
        assert!(validate_config_input(bad).is_err());
    }
}
