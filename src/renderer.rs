use axum::{
    body::Bytes,
    http::{header, HeaderMap, HeaderName, StatusCode},
    response::{IntoResponse, Response},
};
use reqwest::{redirect::Policy, Client};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

// Renderer headers the browser needs to see; everything else stays behind the proxy.
const FORWARDED_HEADERS: [HeaderName; 4] = [
    header::CONTENT_TYPE,
    header::LOCATION,
    header::SET_COOKIE,
    header::CACHE_CONTROL,
];

/// Client for the external service that renders the human-facing pages.
pub struct PageRenderer {
    client: Client,
    base_url: String,
}

/// What came back from the renderer, passed through as-is.
#[derive(Debug)]
pub struct RenderedPage {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl PageRenderer {
    /// Redirects are not followed, so they reach the browser as-is.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RendererError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().redirect(Policy::none()).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `path_and_query` must start with `/`.
    pub async fn render(&self, path_and_query: &str) -> Result<RenderedPage, RendererError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        info!("🔗 Forwarding page request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let mut headers = HeaderMap::new();
        for name in FORWARDED_HEADERS {
            for value in response.headers().get_all(&name) {
                headers.append(name.clone(), value.clone());
            }
        }
        let body = response.bytes().await?;

        info!("📥 Renderer responded {} ({} bytes)", status, body.len());
        Ok(RenderedPage { status, headers, body })
    }
}

impl IntoResponse for RenderedPage {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        assert_eq!(PageRenderer::new("http://localhost:5173/").unwrap().base_url(), "http://localhost:5173");
        assert_eq!(PageRenderer::new("http://localhost:5173").unwrap().base_url(), "http://localhost:5173");
    }

    #[tokio::test]
    async fn unreachable_renderer_is_an_http_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let renderer = PageRenderer::new(format!("http://{addr}")).unwrap();
        assert!(matches!(renderer.render("/").await, Err(RendererError::Http(_))));
    }
}
