//! Product table with per-row edit and delete actions.

use leptos::prelude::*;
use stockmanager::dashboard::DashboardState;

#[component]
pub fn ProductListTab(dash: RwSignal<DashboardState>) -> impl IntoView {
    let rows = move || {
        dash.with(|d| {
            d.products
                .iter()
                .map(|product| {
                    let for_edit = product.clone();
                    let for_delete = product.clone();
                    let image = product.image.clone();
                    view! {
                        <tr>
                            <td>{product.id}</td>
                            <td>{product.name.clone()}</td>
                            <td>{product.description.clone()}</td>
                            <td>{product.manufacturer.clone()}</td>
                            <td>{image.map(|src| view! { <img class="product-thumb" src=src alt="Produto"/> })}</td>
                            <td class="row-actions">
                                <button class="btn" on:click=move |_| dash.update(|d| d.open_edit(&for_edit))>
                                    "Editar"
                                </button>
                                <button class="btn btn--danger" on:click=move |_| dash.update(|d| d.open_delete(&for_delete))>
                                    "Excluir"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="product-list-tab">
            <h2>"Produtos"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Nome"</th>
                        <th>"Descrição"</th>
                        <th>"Fabricante"</th>
                        <th>"Imagem"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
