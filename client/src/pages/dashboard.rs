//! Inventory dashboard: stock movements, inventory totals, and products.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<DashboardState>` backs every tab. Forms build a `Mutation`
//! and hand it to a shared callback, which runs it and records the outcome.
//! Each collection has a subscriber effect keyed on its invalidation
//! generation; bumping the generation re-fetches that collection.
//!
//! Fetch results land in arrival order, so overlapping fetches of the same
//! collection can leave an older snapshot on screen.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use stockmanager::auth;
use stockmanager::dashboard::{self, Completion, DashboardState, Mutation, Tab};
use stockmanager::guard::LOGIN_ROUTE;
use stockmanager::invalidation::Collection;

use crate::components::feedback_banner::FeedbackBanner;
use crate::components::inventory_tab::InventoryTab;
use crate::components::product_create_tab::ProductCreateTab;
use crate::components::product_list_tab::ProductListTab;
use crate::components::product_modal::ProductModalView;
use crate::components::stock_tab::{MovementKind, StockTab};
use crate::components::tab_bar::TabBar;
use crate::net::Api;
use crate::util::timer;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    let dash = RwSignal::new(DashboardState::default());

    for collection in Collection::ALL {
        subscribe(api.clone(), dash, collection);
    }

    let submit = Callback::new({
        let api = api.clone();
        move |mutation: Mutation| run_mutation(api.clone(), dash, mutation)
    });

    let on_logout = move |_| {
        auth::logout(api.session());
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    // Only the tab switch should swap the visible panel, not every keystroke.
    let active = Memo::new(move |_| dash.with(|d| d.active_tab));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Gerenciamento de Estoque"</h1>
                <button class="btn" on:click=on_logout>"Sair"</button>
            </header>
            <TabBar dash=dash/>
            <FeedbackBanner dash=dash/>
            <main class="dashboard-content">
                {move || match active.get() {
                    Tab::Entries => view! { <StockTab dash=dash submit=submit kind=MovementKind::Entry/> }.into_any(),
                    Tab::Exits => view! { <StockTab dash=dash submit=submit kind=MovementKind::Exit/> }.into_any(),
                    Tab::Inventory => view! { <InventoryTab dash=dash/> }.into_any(),
                    Tab::ProductsCreate => view! { <ProductCreateTab dash=dash submit=submit/> }.into_any(),
                    Tab::ProductsList => view! { <ProductListTab dash=dash/> }.into_any(),
                }}
            </main>
            <ProductModalView dash=dash submit=submit/>
        </div>
    }
}

/// Re-fetch `collection` on mount and whenever its generation moves.
fn subscribe(api: Api, dash: RwSignal<DashboardState>, collection: Collection) {
    let generation = Memo::new(move |_| dash.with(|d| d.invalidations.generation(collection)));
    Effect::new(move || {
        let _ = generation.get();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match dashboard::fetch(&api, collection).await {
                Ok(snapshot) => {
                    let _ = dash.try_update(|d| d.apply(snapshot));
                }
                Err(_e) => {
                    #[cfg(feature = "csr")]
                    log::warn!("fetch of {collection:?} failed: {_e}");
                }
            }
        });
    });
}

/// Run one mutation, record its outcome, and schedule the success message
/// to expire.
fn run_mutation(api: Api, dash: RwSignal<DashboardState>, mutation: Mutation) {
    let ttl = api.config().success_message_ttl;
    leptos::task::spawn_local(async move {
        let result = api.execute(&mutation).await;
        let completion = dash.try_update(|d| d.complete(&mutation, &result));
        if let Some(ticket) = expiry_ticket(completion) {
            expire_after(dash, ticket, ttl).await;
        }
    });
}

fn expiry_ticket(completion: Option<Completion>) -> Option<u64> {
    completion.and_then(|c| c.ticket)
}

async fn expire_after(dash: RwSignal<DashboardState>, ticket: u64, ttl: Duration) {
    timer::sleep(ttl).await;
    let _ = dash.try_update(|d| d.feedback.expire(ticket));
}
