pub mod lookup;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use once_cell::sync::OnceCell;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::utils::cep::CepClient;

/// CEP 查询服务，HTTP 客户端首次使用时创建并复用连接池
pub struct AddressService {
    client: OnceCell<CepClient>,
}

impl AddressService {
    pub fn new_lazy() -> Self {
        Self {
            client: OnceCell::new(),
        }
    }

    pub(crate) fn get_client(&self) -> Result<&CepClient> {
        self.client
            .get_or_try_init(|| CepClient::from_config(&AppConfig::get().address))
    }

    pub async fn lookup_cep(
        &self,
        cep: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lookup::lookup_cep(self, cep, request).await
    }
}
