//! Inventory dashboard state: tabs, forms, product modal, loaded collections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser dashboard keeps one [`DashboardState`] in a signal and drives
//! it in three steps: build a [`Mutation`] from a form, run it through the API
//! client, then hand the result to [`DashboardState::complete`]. Collections
//! invalidated by the completion are re-fetched by their subscribers and
//! written back with [`DashboardState::apply`].
//!
//! [`submit`] and [`refresh`] compose the same steps for callers that can hold
//! the state across an await (tests, the CLI).
//!
//! RACES
//! =====
//! Fetch results are applied in the order they land. A slow response to an
//! older request overwrites a faster response to a newer one.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::feedback::FeedbackState;
use crate::invalidation::{Collection, Invalidations};
use crate::messages;
use crate::session::SessionStore;
use crate::transport::Transport;
use crate::types::{InventoryItem, NewProduct, Product, ProductUpdate, StockEntry, StockExit, StockMovement, TotalStock};

/// Dashboard tabs. Exactly one is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Entries,
    Exits,
    Inventory,
    ProductsCreate,
    ProductsList,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Entries, Tab::Exits, Tab::Inventory, Tab::ProductsCreate, Tab::ProductsList];

    pub fn label(self) -> &'static str {
        match self {
            Self::Entries => "Entradas",
            Self::Exits => "Saídas",
            Self::Inventory => "Inventário",
            Self::ProductsCreate => "Novo Produto",
            Self::ProductsList => "Produtos",
        }
    }
}

/// Form backing both the entry and the exit tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StockForm {
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
    pub batch: String,
}

impl StockForm {
    pub fn to_movement(&self) -> StockMovement {
        StockMovement {
            product_id: self.product_id,
            quantity: self.quantity,
            price: self.price,
            batch: self.batch.clone(),
            ..StockMovement::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub manufacturer: String,
    /// Data URL of the dropped image, shown as a preview.
    pub image: Option<String>,
}

impl ProductForm {
    pub fn to_new_product(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            description: self.description.clone(),
            manufacturer: self.manufacturer.clone(),
            image: self.image.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalMode {
    Edit,
    Delete,
}

/// Edit/delete dialog opened from a product-list row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductModal {
    pub mode: ModalMode,
    pub draft: ProductUpdate,
}

/// A write against the API.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    CreateEntry(StockEntry),
    CreateExit(StockExit),
    CreateProduct(NewProduct),
    UpdateProduct(ProductUpdate),
    DeleteProduct(i64),
}

impl Mutation {
    /// Collections whose server-side contents change when this succeeds.
    pub fn invalidates(&self) -> &'static [Collection] {
        match self {
            Self::CreateEntry(_) => &[Collection::Entries, Collection::TotalStock, Collection::Inventory],
            Self::CreateExit(_) => &[Collection::Exits, Collection::TotalStock, Collection::Inventory],
            Self::CreateProduct(_) | Self::UpdateProduct(_) | Self::DeleteProduct(_) => {
                &[Collection::Products, Collection::Inventory]
            }
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::CreateEntry(_) => messages::ENTRY_CREATED,
            Self::CreateExit(_) => messages::EXIT_CREATED,
            Self::CreateProduct(_) => messages::PRODUCT_CREATED,
            Self::UpdateProduct(_) => messages::PRODUCT_UPDATED,
            Self::DeleteProduct(_) => messages::PRODUCT_DELETED,
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Self::CreateEntry(_) => messages::ENTRY_FAILED,
            Self::CreateExit(_) => messages::EXIT_FAILED,
            Self::CreateProduct(_) => messages::PRODUCT_CREATE_FAILED,
            Self::UpdateProduct(_) => messages::PRODUCT_UPDATE_FAILED,
            Self::DeleteProduct(_) => messages::PRODUCT_DELETE_FAILED,
        }
    }
}

/// Result of a fetch, tagged by collection.
#[derive(Clone, Debug, PartialEq)]
pub enum Snapshot {
    Entries(Vec<StockEntry>),
    Exits(Vec<StockExit>),
    Products(Vec<Product>),
    Inventory(Vec<InventoryItem>),
    TotalStock(TotalStock),
}

/// What a completed mutation asks the caller to do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Collections to re-fetch.
    pub invalidated: &'static [Collection],
    /// Ticket for expiring the success message, when there is one.
    pub ticket: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub active_tab: Tab,
    pub entry_form: StockForm,
    pub exit_form: StockForm,
    pub product_form: ProductForm,
    pub modal: Option<ProductModal>,
    pub entries: Vec<StockEntry>,
    pub exits: Vec<StockExit>,
    pub products: Vec<Product>,
    pub inventory: Vec<InventoryItem>,
    pub total_stock: Option<TotalStock>,
    pub feedback: FeedbackState,
    pub invalidations: Invalidations,
}

impl DashboardState {
    /// Switch tabs. Forms and lists are untouched.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn entry_mutation(&self) -> Mutation {
        Mutation::CreateEntry(self.entry_form.to_movement())
    }

    pub fn exit_mutation(&self) -> Mutation {
        Mutation::CreateExit(self.exit_form.to_movement())
    }

    pub fn product_mutation(&self) -> Mutation {
        Mutation::CreateProduct(self.product_form.to_new_product())
    }

    pub fn open_edit(&mut self, product: &Product) {
        self.modal = Some(ProductModal { mode: ModalMode::Edit, draft: ProductUpdate::from(product) });
    }

    pub fn open_delete(&mut self, product: &Product) {
        self.modal = Some(ProductModal { mode: ModalMode::Delete, draft: ProductUpdate::from(product) });
    }

    /// Discard the modal and any edits in it.
    pub fn cancel_modal(&mut self) {
        self.modal = None;
    }

    /// The mutation the open modal would submit.
    pub fn modal_mutation(&self) -> Option<Mutation> {
        self.modal.as_ref().map(|m| match m.mode {
            ModalMode::Edit => Mutation::UpdateProduct(m.draft.clone()),
            ModalMode::Delete => Mutation::DeleteProduct(m.draft.id),
        })
    }

    /// Record the outcome of `mutation`.
    ///
    /// On success the owning form resets (or the modal closes), the success
    /// message is shown and the affected collections are invalidated. On
    /// failure only the error message changes.
    pub fn complete(&mut self, mutation: &Mutation, result: &Result<(), ApiError>) -> Completion {
        if let Err(e) = result {
            tracing::warn!(error = %e, message = mutation.error_message(), "mutation failed");
            self.feedback.error(mutation.error_message());
            return Completion { invalidated: &[], ticket: None };
        }

        match mutation {
            Mutation::CreateEntry(_) => self.entry_form = StockForm::default(),
            Mutation::CreateExit(_) => self.exit_form = StockForm::default(),
            Mutation::CreateProduct(_) => self.product_form = ProductForm::default(),
            Mutation::UpdateProduct(_) | Mutation::DeleteProduct(_) => self.modal = None,
        }
        let ticket = self.feedback.success(mutation.success_message());
        let invalidated = mutation.invalidates();
        self.invalidations.invalidate_all(invalidated);
        Completion { invalidated, ticket: Some(ticket) }
    }

    /// Overwrite one collection with freshly fetched data.
    pub fn apply(&mut self, snapshot: Snapshot) {
        match snapshot {
            Snapshot::Entries(v) => self.entries = v,
            Snapshot::Exits(v) => self.exits = v,
            Snapshot::Products(v) => self.products = v,
            Snapshot::Inventory(v) => self.inventory = v,
            Snapshot::TotalStock(v) => self.total_stock = Some(v),
        }
    }
}

/// Fetch one collection.
///
/// # Errors
///
/// Whatever the underlying list call returns.
pub async fn fetch<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    collection: Collection,
) -> Result<Snapshot, ApiError> {
    Ok(match collection {
        Collection::Entries => Snapshot::Entries(api.list_entries().await?),
        Collection::Exits => Snapshot::Exits(api.list_exits().await?),
        Collection::Products => Snapshot::Products(api.list_products().await?),
        Collection::Inventory => Snapshot::Inventory(api.inventory().await?),
        Collection::TotalStock => Snapshot::TotalStock(api.total_stock().await?),
    })
}

/// Fetch `collection` and apply it. Failures leave the old data in place.
///
/// # Errors
///
/// The fetch error, after it has been logged.
pub async fn refresh<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    state: &mut DashboardState,
    collection: Collection,
) -> Result<(), ApiError> {
    match fetch(api, collection).await {
        Ok(snapshot) => {
            state.apply(snapshot);
            Ok(())
        }
        Err(e) => {
            tracing::warn!(?collection, error = %e, "fetch failed");
            Err(e)
        }
    }
}

/// Run `mutation`, record its outcome, and re-fetch what it invalidated.
pub async fn submit<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    state: &mut DashboardState,
    mutation: Mutation,
) -> Completion {
    let result = api.execute(&mutation).await;
    let completion = state.complete(&mutation, &result);
    for collection in completion.invalidated {
        let _ = refresh(api, state, *collection).await;
    }
    completion
}

/// Parse a numeric input the way the browser's `Number()` does for
/// well-formed text. Blank or malformed input reads as zero.
pub fn parse_decimal(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Integer variant of [`parse_decimal`]; fractional input is truncated.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_integer(raw: &str) -> i64 {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().unwrap_or_else(|_| parse_decimal(trimmed).trunc() as i64)
}
