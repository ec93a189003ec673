//! In-memory stand-in for the remote inventory API.
//!
//! Routes by path, keeps users, movements and products in memory, computes
//! the aggregates, and records every request it sees.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{Value, json};

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::session::{MemorySession, SessionStore as _};
use crate::transport::{Method, Request, Response, Transport, TransportError};
use crate::types::{NewProduct, NewUser, Product, ProductUpdate, StockMovement};

pub const BASE: &str = "http://api.test";

#[derive(Default)]
struct Backend {
    users: Vec<NewUser>,
    tokens: Vec<String>,
    entries: Vec<StockMovement>,
    exits: Vec<StockMovement>,
    products: Vec<Product>,
    next_product_id: i64,
    requests: Vec<Request>,
    fail_next: Option<u16>,
    offline: bool,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    backend: Rc<RefCell<Backend>>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.backend.borrow_mut().next_product_id = 1;
        api
    }

    pub fn with_user(self, email: &str, password: &str) -> Self {
        self.backend.borrow_mut().users.push(NewUser {
            name: "Test".to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        });
        self
    }

    pub fn with_product(self, name: &str) -> Self {
        {
            let mut b = self.backend.borrow_mut();
            let id = b.next_product_id;
            b.next_product_id += 1;
            b.products.push(Product {
                id,
                name: name.to_owned(),
                description: format!("{name} desc"),
                manufacturer: "ACME".to_owned(),
                image: None,
            });
        }
        self
    }

    /// Answer the next request with `status` and an error body.
    pub fn fail_next(&self, status: u16) {
        self.backend.borrow_mut().fail_next = Some(status);
    }

    pub fn set_offline(&self, offline: bool) {
        self.backend.borrow_mut().offline = offline;
    }

    pub fn requests(&self) -> Vec<Request> {
        self.backend.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<Request> {
        self.backend.borrow().requests.last().cloned()
    }

    pub fn clear_requests(&self) {
        self.backend.borrow_mut().requests.clear();
    }

    /// Push an entry directly, as another client would.
    pub fn insert_entry(&self, entry: StockMovement) {
        self.backend.borrow_mut().entries.push(entry);
    }

    pub fn client(&self, session: MemorySession) -> ApiClient<FakeApi, MemorySession> {
        ApiClient::new(ApiConfig::with_base_url(BASE), self.clone(), session)
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for FakeApi {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let mut b = self.backend.borrow_mut();
        b.requests.push(request.clone());
        if b.offline {
            return Err(TransportError("connection refused".to_owned()));
        }
        if let Some(status) = b.fail_next.take() {
            return Ok(Response::new(status, r#"{"message":"forced failure"}"#));
        }
        Ok(b.route(&request))
    }
}

impl Backend {
    fn route(&mut self, request: &Request) -> Response {
        let path = request.url.find("/api/").map_or("", |i| &request.url[i..]).to_owned();
        match (request.method, path.as_str()) {
            (Method::Post, "/api/auth/login") => self.login(request.body.as_ref()),
            (Method::Post, "/api/users/user") => self.register(request.body.as_ref()),
            _ if !self.authorized(request) => Response::new(401, r#"{"message":"unauthorized"}"#),
            (Method::Get, "/api/products/manage/entry") => json_response(&self.entries),
            (Method::Post, "/api/products/manage/entry") => push_movement(&mut self.entries, request.body.as_ref()),
            (Method::Get, "/api/products/manage/exit") => json_response(&self.exits),
            (Method::Post, "/api/products/manage/exit") => push_movement(&mut self.exits, request.body.as_ref()),
            (Method::Get, "/api/stock") => json_response(&json!({ "totalStockQuantity": self.total() })),
            (Method::Get, "/api/stock/inventory") => json_response(&self.inventory()),
            (Method::Get, "/api/products") => json_response(&self.products),
            (Method::Post, "/api/products") => self.create_product(request.body.as_ref()),
            (Method::Put, p) if p.starts_with("/api/products/") => self.update_product(p, request.body.as_ref()),
            (Method::Delete, p) if p.starts_with("/api/products/") => self.delete_product(p),
            _ => Response::new(404, r#"{"message":"not found"}"#),
        }
    }

    fn authorized(&self, request: &Request) -> bool {
        request
            .authorization
            .as_deref()
            .and_then(|h| h.strip_prefix("Bearer "))
            .is_some_and(|t| self.tokens.iter().any(|known| known == t))
    }

    fn login(&mut self, body: Option<&Value>) -> Response {
        let email = body.and_then(|b| b.get("email")).and_then(Value::as_str).unwrap_or("");
        let password = body.and_then(|b| b.get("password")).and_then(Value::as_str).unwrap_or("");
        if !self.users.iter().any(|u| u.email == email && u.password == password) {
            return Response::new(401, r#"{"message":"invalid credentials"}"#);
        }
        let token = format!("tok-{email}");
        self.tokens.push(token.clone());
        json_response(&json!({ "token": token }))
    }

    fn register(&mut self, body: Option<&Value>) -> Response {
        let Some(user) = body.and_then(|b| serde_json::from_value::<NewUser>(b.clone()).ok()) else {
            return Response::new(400, r#"{"message":"invalid payload"}"#);
        };
        if user.email.is_empty() || self.users.iter().any(|u| u.email == user.email) {
            return Response::new(400, r#"{"message":"email already registered"}"#);
        }
        self.users.push(user);
        Response::new(201, "{}")
    }

    fn create_product(&mut self, body: Option<&Value>) -> Response {
        let Some(new) = body.and_then(|b| serde_json::from_value::<NewProduct>(b.clone()).ok()) else {
            return Response::new(400, r#"{"message":"invalid payload"}"#);
        };
        let id = self.next_product_id;
        self.next_product_id += 1;
        let product = Product {
            id,
            name: new.name,
            description: new.description,
            manufacturer: new.manufacturer,
            image: (!new.image.is_empty()).then_some(new.image),
        };
        let response = json_response(&product);
        self.products.push(product);
        Response::new(201, response.body)
    }

    fn update_product(&mut self, path: &str, body: Option<&Value>) -> Response {
        let Some(id) = path_id(path) else {
            return Response::new(400, "{}");
        };
        let Some(update) = body.and_then(|b| serde_json::from_value::<ProductUpdate>(b.clone()).ok()) else {
            return Response::new(400, r#"{"message":"invalid payload"}"#);
        };
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return Response::new(404, r#"{"message":"not found"}"#);
        };
        product.name = update.name;
        product.description = update.description;
        product.manufacturer = update.manufacturer;
        json_response(product)
    }

    fn delete_product(&mut self, path: &str) -> Response {
        let Some(id) = path_id(path) else {
            return Response::new(400, "{}");
        };
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Response::new(404, r#"{"message":"not found"}"#);
        }
        Response::new(204, "")
    }

    fn total(&self) -> i64 {
        let inbound: i64 = self.entries.iter().map(|e| e.quantity).sum();
        let outbound: i64 = self.exits.iter().map(|e| e.quantity).sum();
        inbound - outbound
    }

    fn inventory(&self) -> Value {
        let items: Vec<Value> = self
            .products
            .iter()
            .map(|p| {
                let qty_in: i64 = self.entries.iter().filter(|e| e.product_id == p.id).map(|e| e.quantity).sum();
                let qty_out: i64 = self.exits.iter().filter(|e| e.product_id == p.id).map(|e| e.quantity).sum();
                let value: f64 = self
                    .entries
                    .iter()
                    .filter(|e| e.product_id == p.id)
                    .map(|e| e.price * f64::from(i32::try_from(e.quantity).unwrap_or(0)))
                    .sum();
                json!({
                    "id": p.id,
                    "name": p.name,
                    "quantityInStock": qty_in - qty_out,
                    "totalValueInStock": value,
                })
            })
            .collect();
        Value::Array(items)
    }
}

fn push_movement(list: &mut Vec<StockMovement>, body: Option<&Value>) -> Response {
    match body.and_then(|b| serde_json::from_value::<StockMovement>(b.clone()).ok()) {
        Some(movement) => {
            let response = json_response(&movement);
            list.push(movement);
            Response::new(201, response.body)
        }
        None => Response::new(400, r#"{"message":"invalid payload"}"#),
    }
}

fn path_id(path: &str) -> Option<i64> {
    path.rsplit('/').next()?.parse().ok()
}

fn json_response<T: serde::Serialize + ?Sized>(value: &T) -> Response {
    Response::new(200, serde_json::to_string(value).unwrap_or_default())
}

/// A fake API with one known user, a logged-in session, and an authed client.
pub async fn logged_in() -> (FakeApi, MemorySession, ApiClient<FakeApi, MemorySession>) {
    let api = FakeApi::new().with_user("ana@example.com", "segredo");
    let session = MemorySession::new();
    let client = api.client(session.clone());
    let creds = crate::types::Credentials { email: "ana@example.com".to_owned(), password: "segredo".to_owned() };
    let token = client.login(&creds).await.unwrap();
    session.set(&token);
    api.clear_requests();
    (api, session, client)
}
