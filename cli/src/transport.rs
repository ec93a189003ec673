//! `reqwest`-backed transport for the terminal client.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use reqwest::header::AUTHORIZATION;
use stockmanager::transport::{Method, Request, Response, Transport, TransportError};

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let mut builder = self.client.request(reqwest_method(request.method), &request.url);
        if let Some(value) = &request.authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let resp = builder.send().await.map_err(to_transport_error)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(to_transport_error)?;
        Ok(Response::new(status, body))
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn to_transport_error(e: reqwest::Error) -> TransportError {
    TransportError(e.to_string())
}
