//! Dashboard tab switcher.

#[cfg(test)]
#[path = "tab_bar_test.rs"]
mod tab_bar_test;

use leptos::prelude::*;
use stockmanager::dashboard::{DashboardState, Tab};

#[component]
pub fn TabBar(dash: RwSignal<DashboardState>) -> impl IntoView {
    let buttons = Tab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class=move || tab_class(dash.with(|d| d.active_tab), tab)
                    on:click=move |_| dash.update(|d| d.select_tab(tab))
                >
                    {tab.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <nav class="tab-bar">{buttons}</nav> }
}

fn tab_class(active: Tab, tab: Tab) -> &'static str {
    if active == tab { "tab-button tab-button--active" } else { "tab-button" }
}
