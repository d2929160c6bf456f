//! Client for the tenant-management service (TMS).

pub mod error;

pub use error::TmsError;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::time::Duration;
use url::Url;
use uuid::Uuid;

use crate::types::{TenantUserRoles, UpdateTenantUserRoles};

/// Path appended to the configured base url to reach the TMS API
pub const TMS_BASE_PATH: &str = "/management/v1";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Role management operations the CLI needs from the tenant-management service
#[async_trait]
pub trait TenantUserRoleApi {
    async fn update_tenant_user_role(
        &self,
        request: &UpdateTenantUserRoles,
    ) -> Result<TenantUserRoles, TmsError>;
}

/// HTTP client bound to one tenant and API key
pub struct TmsClient {
    http: reqwest::Client,
    tms_url: Url,
    tenant_id: Uuid,
    api_key: String,
}

impl TmsClient {
    pub fn new(
        base_url: &Url,
        tenant_id: Uuid,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, TmsError> {
        let tms_url = Url::parse(&format!(
            "{}{}",
            base_url.as_str().trim_end_matches('/'),
            TMS_BASE_PATH
        ))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TmsError::Build)?;

        Ok(Self {
            http,
            tms_url,
            tenant_id,
            api_key,
        })
    }

    pub fn tms_url(&self) -> &Url {
        &self.tms_url
    }

    pub fn tenant_id(&self) -> Uuid {
        self.tenant_id
    }

    fn user_roles_url(&self, user_id: Uuid) -> String {
        format!(
            "{}/tenants/{}/users/{}/roles",
            self.tms_url.as_str().trim_end_matches('/'),
            self.tenant_id,
            user_id
        )
    }
}

#[async_trait]
impl TenantUserRoleApi for TmsClient {
    async fn update_tenant_user_role(
        &self,
        request: &UpdateTenantUserRoles,
    ) -> Result<TenantUserRoles, TmsError> {
        let url = self.user_roles_url(request.user_id);
        tracing::debug!(method = "PUT", %url, "sending tenant user role update");

        let response = self
            .http
            .put(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(TmsError::Request)?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "tenant management service responded");

        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(error = %e, "failed to read error response body");
                    String::new()
                }
            };
            tracing::warn!(status = status.as_u16(), "tenant user role update rejected");
            return Err(TmsError::Status {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        response.json::<TenantUserRoles>().await.map_err(TmsError::Decode)
    }
}
