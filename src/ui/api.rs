//! `gloo-net` transport and the client used by the pages

use crate::core::api::{ApiClient, ApiError, ApiRequest, ApiResponse, Transport};
use crate::core::config::Config;
use crate::ui::session::SessionContext;

/// Client wired to the browser's `fetch` and the session context
pub type PortalClient = ApiClient<GlooTransport, SessionContext>;

/// `fetch` through `gloo-net`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[cfg(not(feature = "ssr"))]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use crate::core::api::Method;
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(authorization) = &request.authorization {
            builder = builder.header("Authorization", authorization);
        }

        let outgoing = match &request.body {
            Some(body) => builder
                .header("Content-Type", body.content_type())
                .body(body.as_str()),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = outgoing
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        // Error responses may have no body at all
        let body = response.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}

/// SSR stub: pages only fetch from the browser
#[cfg(feature = "ssr")]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        Err(ApiError::Network(format!(
            "{} {} is not sent during server rendering",
            request.method, request.url
        )))
    }
}

/// API client for the current session
pub fn portal_client(session: SessionContext) -> PortalClient {
    ApiClient::new(&Config::from_build_env(), GlooTransport, session)
}
