use super::*;
use crate::testing::{FakeApi, logged_in};
use crate::transport::Method;

fn l1_form() -> StockForm {
    StockForm { product_id: 1, quantity: 10, price: 5.0, batch: "L1".to_owned() }
}

// =============================================================
// Tabs and forms
// =============================================================

#[test]
fn default_tab_is_entries() {
    assert_eq!(DashboardState::default().active_tab, Tab::Entries);
}

#[test]
fn tab_labels_are_distinct() {
    let labels: std::collections::HashSet<_> = Tab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels.len(), Tab::ALL.len());
}

#[test]
fn switching_tabs_keeps_unsaved_input() {
    let mut state = DashboardState::default();
    state.entry_form = l1_form();
    state.select_tab(Tab::Exits);
    state.exit_form.batch = "S9".to_owned();
    state.select_tab(Tab::ProductsCreate);
    state.product_form.name = "Caneta".to_owned();
    state.select_tab(Tab::Inventory);
    state.select_tab(Tab::Entries);

    assert_eq!(state.entry_form, l1_form());
    assert_eq!(state.exit_form.batch, "S9");
    assert_eq!(state.product_form.name, "Caneta");
}

#[test]
fn product_form_sends_empty_image_when_none_dropped() {
    let form = ProductForm { name: "A".to_owned(), ..ProductForm::default() };
    assert_eq!(form.to_new_product().image, "");
}

#[test]
fn numeric_inputs_parse_like_number() {
    assert_eq!(parse_integer("12"), 12);
    assert_eq!(parse_integer(" 7 "), 7);
    assert_eq!(parse_integer("3.9"), 3);
    assert_eq!(parse_integer(""), 0);
    assert_eq!(parse_integer("abc"), 0);
    assert!((parse_decimal("5.25") - 5.25).abs() < f64::EPSILON);
    assert!(parse_decimal("NaN").abs() < f64::EPSILON);
    assert!(parse_decimal("").abs() < f64::EPSILON);
}

// =============================================================
// Mutation completion
// =============================================================

#[test]
fn invalidation_targets_per_mutation() {
    let entry = Mutation::CreateEntry(StockMovement::default());
    assert_eq!(entry.invalidates(), &[Collection::Entries, Collection::TotalStock, Collection::Inventory]);
    let exit = Mutation::CreateExit(StockMovement::default());
    assert_eq!(exit.invalidates(), &[Collection::Exits, Collection::TotalStock, Collection::Inventory]);
    assert_eq!(
        Mutation::CreateProduct(NewProduct::default()).invalidates(),
        &[Collection::Products, Collection::Inventory]
    );
    assert_eq!(Mutation::DeleteProduct(1).invalidates(), &[Collection::Products, Collection::Inventory]);
}

#[test]
fn failed_completion_sets_error_and_keeps_form() {
    let mut state = DashboardState::default();
    state.entry_form = l1_form();
    state.feedback.success("stale");
    let mutation = state.entry_mutation();
    let completion = state.complete(&mutation, &Err(ApiError::Transport("down".to_owned())));

    assert!(completion.invalidated.is_empty());
    assert!(completion.ticket.is_none());
    assert_eq!(state.entry_form, l1_form());
    assert_eq!(state.feedback.error_text(), Some(crate::messages::ENTRY_FAILED));
    assert!(state.feedback.success_text().is_none());
    assert_eq!(state.invalidations, Invalidations::default());
}

#[test]
fn successful_completion_resets_only_its_own_form() {
    let mut state = DashboardState::default();
    state.entry_form = l1_form();
    state.exit_form = l1_form();
    let mutation = state.exit_mutation();
    let completion = state.complete(&mutation, &Ok(()));

    assert_eq!(state.exit_form, StockForm::default());
    assert_eq!(state.entry_form, l1_form());
    assert_eq!(state.feedback.success_text(), Some(crate::messages::EXIT_CREATED));
    assert_eq!(state.invalidations.generation(Collection::Exits), 1);
    assert_eq!(state.invalidations.generation(Collection::Entries), 0);
    let ticket = completion.ticket.unwrap();
    state.feedback.expire(ticket);
    assert!(state.feedback.success_text().is_none());
}

// =============================================================
// Flows against the fake API
// =============================================================

#[tokio::test]
async fn creating_entry_refetches_and_resets_form() {
    let (api, _session, client) = logged_in().await;
    let mut state = DashboardState::default();
    state.entry_form = l1_form();

    let mutation = state.entry_mutation();
    let completion = submit(&client, &mut state, mutation).await;

    assert!(completion.ticket.is_some());
    let requests = api.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert!(requests[0].url.ends_with("/api/products/manage/entry"));
    assert_eq!(
        requests[0].body,
        Some(serde_json::json!({ "productId": 1, "quantity": 10, "price": 5.0, "batch": "L1" }))
    );
    assert!(
        requests[1..]
            .iter()
            .any(|r| r.method == Method::Get && r.url.ends_with("/api/products/manage/entry"))
    );
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].batch, "L1");
    assert_eq!(state.total_stock, Some(TotalStock { total_stock_quantity: 10 }));
    assert_eq!(state.entry_form, StockForm::default());
    assert_eq!(state.feedback.success_text(), Some(crate::messages::ENTRY_CREATED));
}

#[tokio::test]
async fn failed_create_does_not_refetch() {
    let (api, _session, client) = logged_in().await;
    let mut state = DashboardState::default();
    state.exit_form = l1_form();
    api.fail_next(500);

    let mutation = state.exit_mutation();
    submit(&client, &mut state, mutation).await;

    assert_eq!(api.requests().len(), 1);
    assert_eq!(state.exit_form, l1_form());
    assert_eq!(state.feedback.error_text(), Some(crate::messages::EXIT_FAILED));
}

#[tokio::test]
async fn deleting_product_removes_it_from_next_list() {
    let api = FakeApi::new().with_user("ana@example.com", "segredo").with_product("Martelo").with_product("Serrote");
    let session = crate::MemorySession::new();
    let client = api.client(session.clone());
    let creds = crate::types::Credentials { email: "ana@example.com".to_owned(), password: "segredo".to_owned() };
    crate::auth::login(&client, &creds).await.unwrap();

    let mut state = DashboardState::default();
    refresh(&client, &mut state, Collection::Products).await.unwrap();
    assert_eq!(state.products.len(), 2);

    let target = state.products[0].clone();
    state.open_delete(&target);
    let mutation = state.modal_mutation().unwrap();
    assert_eq!(mutation, Mutation::DeleteProduct(target.id));
    submit(&client, &mut state, mutation).await;

    assert!(state.modal.is_none());
    assert_eq!(state.products.len(), 1);
    assert!(state.products.iter().all(|p| p.id != target.id));
    assert_eq!(state.feedback.success_text(), Some(crate::messages::PRODUCT_DELETED));
}

#[tokio::test]
async fn saving_edit_sends_id_and_three_editable_fields() {
    let api = FakeApi::new().with_user("ana@example.com", "segredo");
    let api = api.with_product("Martelo");
    let session = crate::MemorySession::new();
    let client = api.client(session);
    let creds = crate::types::Credentials { email: "ana@example.com".to_owned(), password: "segredo".to_owned() };
    crate::auth::login(&client, &creds).await.unwrap();

    let mut state = DashboardState::default();
    refresh(&client, &mut state, Collection::Products).await.unwrap();
    let mut row = state.products[0].clone();
    row.image = Some("data:image/png;base64,AA==".to_owned());
    state.open_edit(&row);
    if let Some(modal) = state.modal.as_mut() {
        modal.draft.name = "Martelo de borracha".to_owned();
    }
    api.clear_requests();

    let mutation = state.modal_mutation().unwrap();
    submit(&client, &mut state, mutation).await;

    let put = api.requests().into_iter().find(|r| r.method == Method::Put).unwrap();
    assert!(put.url.ends_with(&format!("/api/products/{}", row.id)));
    assert_eq!(
        put.body,
        Some(serde_json::json!({
            "id": row.id,
            "name": "Martelo de borracha",
            "description": "Martelo desc",
            "manufacturer": "ACME",
        }))
    );
    assert_eq!(state.products[0].name, "Martelo de borracha");
}

#[tokio::test]
async fn cancelling_modal_makes_no_call() {
    let (api, _session, client) = logged_in().await;
    let mut state = DashboardState::default();
    let product = Product { id: 3, name: "X".to_owned(), ..Product::default() };
    state.open_edit(&product);
    if let Some(modal) = state.modal.as_mut() {
        modal.draft.name = "changed".to_owned();
    }
    state.cancel_modal();

    assert!(state.modal.is_none());
    assert!(state.modal_mutation().is_none());
    assert!(api.requests().is_empty());
    let _ = client;
}

#[tokio::test]
async fn failed_fetch_keeps_previous_data() {
    let (api, _session, client) = logged_in().await;
    let mut state = DashboardState::default();
    state.entries = vec![l1_form().to_movement()];
    api.set_offline(true);

    let err = refresh(&client, &mut state, Collection::Entries).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(state.entries.len(), 1);
}

#[tokio::test]
async fn overlapping_fetches_display_the_last_received() {
    let (api, _session, client) = logged_in().await;
    let mut state = DashboardState::default();

    // Sent first: sees an empty list.
    let older = fetch(&client, Collection::Entries).await.unwrap();
    api.insert_entry(l1_form().to_movement());
    // Sent second: sees the new entry.
    let newer = fetch(&client, Collection::Entries).await.unwrap();

    // The newer response lands first, the older one last.
    state.apply(newer);
    assert_eq!(state.entries.len(), 1);
    state.apply(older);

    // Last received wins, even though it is stale.
    assert!(state.entries.is_empty());
}

#[tokio::test]
async fn initial_load_fills_every_collection() {
    let (_api, _session, client) = logged_in().await;
    let mut state = DashboardState::default();
    for c in Collection::ALL {
        refresh(&client, &mut state, c).await.unwrap();
    }
    assert_eq!(state.total_stock, Some(TotalStock { total_stock_quantity: 0 }));
    assert!(state.entries.is_empty());
    assert!(state.inventory.is_empty());
}

#[tokio::test]
async fn creating_product_refreshes_inventory() {
    let (_api, _session, client) = logged_in().await;
    let mut state = DashboardState::default();
    for c in Collection::ALL {
        refresh(&client, &mut state, c).await.unwrap();
    }
    assert!(state.inventory.is_empty());

    state.product_form.name = "Alicate".to_owned();
    let mutation = state.product_mutation();
    let completion = submit(&client, &mut state, mutation).await;

    assert!(completion.invalidated.contains(&Collection::Inventory));
    let Snapshot::Inventory(server) = fetch(&client, Collection::Inventory).await.unwrap() else {
        panic!("expected inventory snapshot");
    };
    assert_eq!(state.inventory, server);
    assert_eq!(state.inventory.len(), 1);
    assert_eq!(state.inventory[0].name, "Alicate");
}
