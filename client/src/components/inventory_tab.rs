//! Inventory tab: overall stock quantity plus per-product totals.

#[cfg(test)]
#[path = "inventory_tab_test.rs"]
mod inventory_tab_test;

use leptos::prelude::*;
use stockmanager::dashboard::DashboardState;
use stockmanager::types::TotalStock;

/// Format a currency amount as `R$ 1234.50`.
pub fn format_money(value: f64) -> String {
    format!("R$ {value:.2}")
}

fn total_label(total: Option<TotalStock>) -> String {
    match total {
        Some(t) => format!("Quantidade Total: {}", t.total_stock_quantity),
        None => "Quantidade Total: carregando...".to_owned(),
    }
}

#[component]
pub fn InventoryTab(dash: RwSignal<DashboardState>) -> impl IntoView {
    let rows = move || {
        dash.with(|d| {
            d.inventory
                .iter()
                .map(|item| {
                    view! {
                        <tr>
                            <td>{item.id}</td>
                            <td>{item.name.clone()}</td>
                            <td>{item.quantity_in_stock}</td>
                            <td>{format_money(item.total_value_in_stock)}</td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="inventory-tab">
            <h2>"Total de Estoque"</h2>
            <p class="inventory-total">{move || total_label(dash.with(|d| d.total_stock))}</p>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Produto"</th>
                        <th>"Quantidade"</th>
                        <th>"Valor total"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
