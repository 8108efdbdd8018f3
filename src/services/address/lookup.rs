use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AddressService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;
use crate::utils::cep::normalize_cep;

/// 查询 CEP 对应的地址，查询失败统一视为未找到
pub async fn lookup_cep(
    service: &AddressService,
    cep: String,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if normalize_cep(&cep).is_none() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CepInvalid,
            "CEP inválido",
        )));
    }

    let client = match service.get_client() {
        Ok(client) => client,
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "CEP client unavailable",
                &e,
            ));
        }
    };

    match client.find(&cep).await {
        Some(address) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(address, "Endereço encontrado")))
        }
        None => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AddressNotFound,
            "Endereço não encontrado",
        ))),
    }
}
