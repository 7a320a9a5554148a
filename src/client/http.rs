//! HTTP transport seam. The client only ever talks to [`HttpTransport`], so tests and
//! callers with special networking needs can swap in their own implementation.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use crate::domain::HttpMethod;
use crate::transport::OutboundRequest;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error type produced by transports (DNS, TLS, timeouts, reset connections, ...).
pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw HTTP response as returned by a transport.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes a shaped [`OutboundRequest`] and returns the raw response.
///
/// Returning `Err` means no response was received at all; the client turns it into a
/// [`RequestFailure`](crate::RequestFailure).
pub trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: OutboundRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone, Default)]
/// Default transport backed by [`reqwest::Client`].
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already configured reqwest client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: OutboundRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
            };

            let mut builder = self.client.request(method, request.url.as_str());
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}
