//! `fetch`-backed transport.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): every send fails, since there is no `fetch`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use stockmanager::transport::{Method, Request, Response, Transport, TransportError};

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        #[cfg(feature = "csr")]
        {
            let mut builder = gloo_net::http::RequestBuilder::new(&request.url).method(gloo_method(request.method));
            if let Some(value) = &request.authorization {
                builder = builder.header("Authorization", value);
            }
            let sent = match &request.body {
                Some(body) => builder.json(body).map_err(to_transport_error)?.send().await,
                None => builder.send().await,
            };
            let resp = sent.map_err(to_transport_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(to_transport_error)?;
            Ok(Response::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(TransportError(unavailable_message(&request)))
        }
    }
}

#[cfg(feature = "csr")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}

#[cfg(feature = "csr")]
fn to_transport_error(e: gloo_net::Error) -> TransportError {
    TransportError(e.to_string())
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable_message(request: &Request) -> String {
    let method: Method = request.method;
    format!("{method} {} not available outside the browser", request.url)
}
