use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::AddressService;
use crate::utils::SafeCep;

// 懒加载的全局 AddressService 实例
static ADDRESS_SERVICE: Lazy<AddressService> = Lazy::new(AddressService::new_lazy);

pub async fn lookup_cep(req: HttpRequest, cep: SafeCep) -> ActixResult<HttpResponse> {
    ADDRESS_SERVICE.lookup_cep(cep.0, &req).await
}

// 配置路由，注册表单使用，无需登录
pub fn configure_address_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/address").service(
            web::resource("/cep/{cep}")
                .wrap(middlewares::RateLimit::cep_lookup())
                .route(web::get().to(lookup_cep)),
        ),
    );
}
