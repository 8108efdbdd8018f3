use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Datelike;
use std::sync::Arc;

use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;
use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
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

    /// 管理后台统计，按当前年份计算当年证书数
    pub async fn get_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let year = chrono::Utc::now().year();

        match storage.dashboard_stats(year).await {
            Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "Estatísticas"))),
            Err(e) => Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to load dashboard stats",
                &e,
            )),
        }
    }
}
