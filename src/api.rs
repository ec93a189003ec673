//! REST client for the inventory API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call is a single request/response over the configured
//! [`Transport`]. Authenticated calls read the token from the session store at
//! send time, so a login in another tab is picked up on the next request.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned as [`ApiError`] and logged at `warn` with the real
//! cause. Callers map them to static user-facing messages.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::dashboard::Mutation;
use crate::error::ApiError;
use crate::session::{SessionStore, bearer_header};
use crate::transport::{Method, Request, Response, Transport};
use crate::types::{
    Credentials, InventoryItem, LoginResponse, NewProduct, NewUser, Product, ProductUpdate, StockEntry, StockExit,
    TotalStock,
};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/users/user";
pub const ENTRY_PATH: &str = "/api/products/manage/entry";
pub const EXIT_PATH: &str = "/api/products/manage/exit";
pub const STOCK_PATH: &str = "/api/stock";
pub const INVENTORY_PATH: &str = "/api/stock/inventory";
pub const PRODUCTS_PATH: &str = "/api/products";

pub(crate) fn product_path(id: i64) -> String {
    format!("{PRODUCTS_PATH}/{id}")
}

/// API client bound to one transport and one session store.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    config: ApiConfig,
    transport: T,
    session: S,
}

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub fn new(config: ApiConfig, transport: T, session: S) -> Self {
        Self { config, transport, session }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Exchange credentials for a session token. Does not store it.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] on any non-success status, [`ApiError::MissingToken`]
    /// when the body has no non-empty token, [`ApiError::Transport`] when no
    /// response arrived.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let request = Request::new(Method::Post, self.config.url(LOGIN_PATH)).with_body(encode(credentials)?);
        let response = self.send(request).await?;
        if !response.ok() {
            tracing::warn!(status = response.status, "login rejected");
            return Err(ApiError::Auth { status: response.status });
        }
        let body: LoginResponse = decode(&response)?;
        match body.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => {
                tracing::warn!("login response carried no token");
                Err(ApiError::MissingToken)
            }
        }
    }

    /// Create a user account. Issues no token.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for HTTP 400, [`ApiError::Status`] for any
    /// other non-success status.
    pub async fn register(&self, user: &NewUser) -> Result<(), ApiError> {
        let request = Request::new(Method::Post, self.config.url(REGISTER_PATH)).with_body(encode(user)?);
        let response = self.send(request).await?;
        match response.status {
            400 => {
                tracing::warn!(body = %response.body, "registration rejected");
                Err(ApiError::Validation { body: response.body })
            }
            _ => expect_ok(response).map(drop),
        }
    }

    /// List stock entries.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from the request or body decoding.
    pub async fn list_entries(&self) -> Result<Vec<StockEntry>, ApiError> {
        self.get_json(self.config.url(ENTRY_PATH)).await
    }

    /// Record a stock entry.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from the request.
    pub async fn create_entry(&self, entry: &StockEntry) -> Result<(), ApiError> {
        self.send_authed(Method::Post, self.config.url(ENTRY_PATH), Some(encode(entry)?)).await
    }

    /// List stock exits.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from the request or body decoding.
    pub async fn list_exits(&self) -> Result<Vec<StockExit>, ApiError> {
        self.get_json(self.config.url(EXIT_PATH)).await
    }

    /// Record a stock exit.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from the request.
    pub async fn create_exit(&self, exit: &StockExit) -> Result<(), ApiError> {
        self.send_authed(Method::Post, self.config.url(EXIT_PATH), Some(encode(exit)?)).await
    }

    /// Total quantity across all products.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from the request or body decoding.
    pub async fn total_stock(&self) -> Result<TotalStock, ApiError> {
        self.get_json(self.config.url(STOCK_PATH)).await
    }

    /// Per-product quantity and value aggregate.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from the request or body decoding.
    pub async fn inventory(&self) -> Result<Vec<InventoryItem>, ApiError> {
        self.get_json(self.config.url(INVENTORY_PATH)).await
    }

    /// List catalog products.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from the request or body decoding.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json(self.config.products_url(PRODUCTS_PATH)).await
    }

    /// Create a product; `image` may be a data URL.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from the request.
    pub async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError> {
        let url = self.config.products_url(PRODUCTS_PATH);
        self.send_authed(Method::Post, url, Some(encode(product)?)).await
    }

    /// Replace a product's editable fields.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from the request.
    pub async fn update_product(&self, id: i64, update: &ProductUpdate) -> Result<(), ApiError> {
        let url = self.config.products_url(&product_path(id));
        self.send_authed(Method::Put, url, Some(encode(update)?)).await
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from the request.
    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        let url = self.config.products_url(&product_path(id));
        self.send_authed(Method::Delete, url, None).await
    }

    /// Run any dashboard mutation.
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation returns.
    pub async fn execute(&self, mutation: &Mutation) -> Result<(), ApiError> {
        match mutation {
            Mutation::CreateEntry(entry) => self.create_entry(entry).await,
            Mutation::CreateExit(exit) => self.create_exit(exit).await,
            Mutation::CreateProduct(product) => self.create_product(product).await,
            Mutation::UpdateProduct(update) => self.update_product(update.id, update).await,
            Mutation::DeleteProduct(id) => self.delete_product(*id).await,
        }
    }

    async fn get_json<R: DeserializeOwned>(&self, url: String) -> Result<R, ApiError> {
        let response = self.send(self.authed(Request::new(Method::Get, url))).await?;
        let response = expect_ok(response)?;
        decode(&response)
    }

    async fn send_authed(&self, method: Method, url: String, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        let mut request = self.authed(Request::new(method, url));
        request.body = body;
        let response = self.send(request).await?;
        expect_ok(response).map(drop)
    }

    fn authed(&self, request: Request) -> Request {
        let token = self.session.get();
        request.with_authorization(bearer_header(token.as_deref()))
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        tracing::debug!(%method, %url, "api request");
        match self.transport.send(request).await {
            Ok(response) => {
                tracing::debug!(%method, %url, status = response.status, "api response");
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(%method, %url, error = %e, "api request failed");
                Err(e.into())
            }
        }
    }
}

fn expect_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    tracing::warn!(status = response.status, body = %response.body, "api response error");
    Err(ApiError::Status { status: response.status, body: response.body })
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(response: &Response) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        tracing::warn!(error = %e, "api response parse failed");
        ApiError::Decode(e.to_string())
    })
}
