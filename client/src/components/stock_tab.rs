//! Entry and exit tabs. Both share one form shape and one list shape.

#[cfg(test)]
#[path = "stock_tab_test.rs"]
mod stock_tab_test;

use leptos::prelude::*;
use stockmanager::dashboard::{DashboardState, Mutation, StockForm, parse_decimal, parse_integer};
use stockmanager::invalidation::Collection;
use stockmanager::types::StockMovement;

/// Which side of the stock ledger a tab edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementKind {
    Entry,
    Exit,
}

impl MovementKind {
    pub fn form_heading(self) -> &'static str {
        match self {
            Self::Entry => "Criar nova entrada",
            Self::Exit => "Criar nova saída",
        }
    }

    pub fn list_heading(self) -> &'static str {
        match self {
            Self::Entry => "Entradas no estoque",
            Self::Exit => "Saídas do estoque",
        }
    }

    pub fn price_placeholder(self) -> &'static str {
        match self {
            Self::Entry => "Preço de Compra",
            Self::Exit => "Preço",
        }
    }

    /// Collection whose generation moves when this tab's create succeeds.
    fn collection(self) -> Collection {
        match self {
            Self::Entry => Collection::Entries,
            Self::Exit => Collection::Exits,
        }
    }

    fn form(self, dash: &DashboardState) -> &StockForm {
        match self {
            Self::Entry => &dash.entry_form,
            Self::Exit => &dash.exit_form,
        }
    }

    fn form_mut(self, dash: &mut DashboardState) -> &mut StockForm {
        match self {
            Self::Entry => &mut dash.entry_form,
            Self::Exit => &mut dash.exit_form,
        }
    }

    fn list(self, dash: &DashboardState) -> &[StockMovement] {
        match self {
            Self::Entry => &dash.entries,
            Self::Exit => &dash.exits,
        }
    }

    fn mutation(self, dash: &DashboardState) -> Mutation {
        match self {
            Self::Entry => dash.entry_mutation(),
            Self::Exit => dash.exit_mutation(),
        }
    }
}

/// One-line summary of a movement for the list.
pub fn describe_movement(movement: &StockMovement) -> String {
    format!(
        "Produto ID: {}, Quantidade: {}, Preço: {}, Lote: {}",
        movement.product_id, movement.quantity, movement.price, movement.batch
    )
}

/// Input text as typed. Numeric fields keep partial input like `12.` intact.
#[derive(Clone, Debug, Default, PartialEq)]
struct StockDraft {
    product_id: String,
    quantity: String,
    price: String,
    batch: String,
}

impl StockDraft {
    fn from_form(form: &StockForm) -> Self {
        Self {
            product_id: form.product_id.to_string(),
            quantity: form.quantity.to_string(),
            price: form.price.to_string(),
            batch: form.batch.clone(),
        }
    }
}

#[component]
pub fn StockTab(dash: RwSignal<DashboardState>, submit: Callback<Mutation>, kind: MovementKind) -> impl IntoView {
    let draft = RwSignal::new(dash.with_untracked(|d| StockDraft::from_form(kind.form(d))));

    // A successful create resets the form and bumps this generation.
    let generation = Memo::new(move |_| dash.with(|d| d.invalidations.generation(kind.collection())));
    Effect::new(move |prev: Option<()>| {
        generation.track();
        if prev.is_some() {
            draft.set(dash.with_untracked(|d| StockDraft::from_form(kind.form(d))));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit.run(dash.with_untracked(|d| kind.mutation(d)));
    };

    let rows = move || {
        dash.with(|d| {
            kind.list(d)
                .iter()
                .map(|movement| {
                    let image = movement.image_url.clone();
                    view! {
                        <li class="stock-list__item">
                            <span>{describe_movement(movement)}</span>
                            {image.map(|src| view! { <img class="stock-list__image" src=src alt="Produto"/> })}
                        </li>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="stock-tab">
            <h2>{kind.form_heading()}</h2>
            <form class="stock-form" on:submit=on_submit>
                <input
                    class="form-input"
                    type="number"
                    placeholder="Id do Produto"
                    prop:value=move || draft.with(|t| t.product_id.clone())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        let value = parse_integer(&raw);
                        draft.update(|t| t.product_id = raw);
                        dash.update(|d| kind.form_mut(d).product_id = value);
                    }
                />
                <input
                    class="form-input"
                    type="number"
                    placeholder="Quantidade"
                    prop:value=move || draft.with(|t| t.quantity.clone())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        let value = parse_integer(&raw);
                        draft.update(|t| t.quantity = raw);
                        dash.update(|d| kind.form_mut(d).quantity = value);
                    }
                />
                <input
                    class="form-input"
                    type="number"
                    step="0.01"
                    placeholder=kind.price_placeholder()
                    prop:value=move || draft.with(|t| t.price.clone())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        let value = parse_decimal(&raw);
                        draft.update(|t| t.price = raw);
                        dash.update(|d| kind.form_mut(d).price = value);
                    }
                />
                <input
                    class="form-input"
                    type="text"
                    placeholder="Lote"
                    prop:value=move || draft.with(|t| t.batch.clone())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        draft.update(|t| t.batch.clone_from(&raw));
                        dash.update(|d| kind.form_mut(d).batch = raw);
                    }
                />
                <button class="btn btn--primary" type="submit">"Confirmar"</button>
            </form>

            <h2>{kind.list_heading()}</h2>
            <ul class="stock-list">{rows}</ul>
        </section>
    }
}
